// Camera rig systems: input buffering, the fixed-rate rig tick and shake triggers.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::components::camera::{EntityTransformSink, RigPose, ThirdPersonCamera};
use crate::error::RigError;
use crate::events::ShakeRequested;
use crate::plugins::input::CameraAction;
use crate::resources::RigInputBuffer;

/// System that captures camera input for the rig tick in FixedUpdate.
/// Runs in Update so no pointer motion is missed between fixed ticks.
pub fn buffer_camera_input(
    action_query: Query<&ActionState<CameraAction>>,
    mut input_buffer: ResMut<RigInputBuffer>,
) {
    let Ok(action_state) = action_query.get_single() else {
        return;
    };

    input_buffer.record(
        action_state.clamped_value(&CameraAction::Orbit),
        action_state.clamped_value(&CameraAction::Tilt),
        action_state.axis_pair(&CameraAction::Look),
    );
}

/// System that advances every third-person camera by one fixed tick.
pub fn tick_camera_rigs(
    time: Res<Time>,
    mut input_buffer: ResMut<RigInputBuffer>,
    mut cameras: Query<(Entity, &mut ThirdPersonCamera, &mut RigPose, &mut Transform)>,
    targets: Query<&Transform, Without<ThirdPersonCamera>>,
) {
    let dt = time.delta_secs();
    let input = input_buffer.drain();

    for (entity, mut camera, mut pose, mut transform) in &mut cameras {
        let Ok(target) = targets.get(camera.follow) else {
            error_once!(
                "Camera {:?}: {}",
                entity,
                RigError::MissingCollaborator("follow target")
            );
            continue;
        };
        let follow_point = target.translation;

        let mut sink = EntityTransformSink::new(&mut pose, &mut transform);
        if let Err(e) = camera.rig.tick(follow_point, &input, &mut sink, dt) {
            error_once!("Camera {:?} rig tick failed: {}", entity, e);
        }
    }
}

/// System that forwards shake requests to every third-person camera.
pub fn apply_shake_requests(
    mut events: EventReader<ShakeRequested>,
    mut cameras: Query<&mut ThirdPersonCamera>,
) {
    for event in events.read() {
        for mut camera in &mut cameras {
            if let Err(e) = camera.rig.apply_preset_shake(event.preset) {
                warn!("Ignoring shake request: {}", e);
            }
        }
    }
}

/// System that writes each rig's field of view and clip planes to its camera.
pub fn sync_camera_projection(mut cameras: Query<(&ThirdPersonCamera, &mut Projection)>) {
    for (camera, mut projection) in &mut cameras {
        camera.rig.config().apply_projection(&mut projection);
    }
}
