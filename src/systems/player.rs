use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use leafwing_input_manager::prelude::*;

use crate::components::camera::ThirdPersonCamera;
use crate::components::player::PlayerBall;
use crate::events::ShakeRequested;
use crate::plugins::input::PlayerAction;

/// Preset fired by the demo's shake action.
pub const DEMO_SHAKE_PRESET: usize = 0;

/// System that pushes each player ball along its camera's direction vectors.
/// Front is applied while held; the other directions fire once per press.
pub fn player_ball_movement(
    time: Res<Time>,
    mut balls: Query<(Entity, &ActionState<PlayerAction>, &mut PlayerBall, &mut Transform)>,
    cameras: Query<&ThirdPersonCamera>,
    mut shake_events: EventWriter<ShakeRequested>,
) {
    let dt = time.delta_secs();

    for (entity, action_state, mut ball, mut transform) in &mut balls {
        if let Some(camera) = cameras.iter().find(|camera| camera.follow == entity) {
            let rig = &camera.rig;

            if action_state.pressed(&PlayerAction::Front) {
                ball.push(rig.front_direction(), dt);
            }
            if action_state.just_pressed(&PlayerAction::Back) {
                ball.push(rig.back_direction(), dt);
            }
            if action_state.just_pressed(&PlayerAction::Left) {
                ball.push(rig.left_direction(), dt);
            }
            if action_state.just_pressed(&PlayerAction::Right) {
                ball.push(rig.right_direction(), dt);
            }
        }

        if action_state.just_pressed(&PlayerAction::CameraShake) {
            shake_events.send(ShakeRequested {
                preset: DEMO_SHAKE_PRESET,
            });
        }

        ball.integrate(&mut transform.translation, dt);
    }
}

/// System that toggles mouse look and the matching cursor capture.
pub fn toggle_mouse_mode(
    players: Query<&ActionState<PlayerAction>>,
    mut cameras: Query<&mut ThirdPersonCamera>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let toggled = players
        .iter()
        .any(|action_state| action_state.just_pressed(&PlayerAction::ToggleMouseMode));
    if !toggled {
        return;
    }

    let mut follow = false;
    for mut camera in &mut cameras {
        follow = !camera.rig.mouse_follow();
        camera.rig.set_mouse_follow(follow);
    }

    if let Ok(mut window) = windows.get_single_mut() {
        apply_cursor_capture(&mut window, follow);
    }
    info!("Mouse look {}", if follow { "enabled" } else { "disabled" });
}

/// Locks and hides the cursor while mouse look is active.
pub fn apply_cursor_capture(window: &mut Window, captured: bool) {
    if captured {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_capture_round_trip() {
        let mut window = Window::default();
        apply_cursor_capture(&mut window, true);
        assert_eq!(window.cursor_options.grab_mode, CursorGrabMode::Locked);
        assert!(!window.cursor_options.visible);

        apply_cursor_capture(&mut window, false);
        assert_eq!(window.cursor_options.grab_mode, CursorGrabMode::None);
        assert!(window.cursor_options.visible);
    }
}
