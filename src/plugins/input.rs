use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

/// Actions read by the third-person camera rig.
#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum CameraAction {
    /// Right minus left.
    #[actionlike(Axis)]
    Orbit,
    /// Up minus down.
    #[actionlike(Axis)]
    Tilt,
    /// Raw pointer motion, only used while mouse look is enabled.
    #[actionlike(DualAxis)]
    Look,
}

/// Actions read by the demo player ball.
#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
pub enum PlayerAction {
    Front,
    Back,
    Left,
    Right,
    CameraShake,
    ToggleMouseMode,
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            InputManagerPlugin::<CameraAction>::default(),
            InputManagerPlugin::<PlayerAction>::default(),
        ));
    }
}

pub fn get_camera_input_map() -> InputMap<CameraAction> {
    let mut input_map = InputMap::default();

    // Arrow keys and the right stick both steer the camera
    input_map.insert_axis(CameraAction::Orbit, VirtualAxis::horizontal_arrow_keys());
    input_map.insert_axis(CameraAction::Orbit, GamepadControlAxis::RIGHT_X);
    input_map.insert_axis(CameraAction::Tilt, VirtualAxis::vertical_arrow_keys());
    input_map.insert_axis(CameraAction::Tilt, GamepadControlAxis::RIGHT_Y);

    input_map.insert_dual_axis(CameraAction::Look, MouseMove::default());

    input_map
}

pub fn get_player_input_map() -> InputMap<PlayerAction> {
    let mut input_map = InputMap::default();

    input_map.insert(PlayerAction::Front, KeyCode::KeyW);
    input_map.insert(PlayerAction::Back, KeyCode::KeyS);
    input_map.insert(PlayerAction::Left, KeyCode::KeyA);
    input_map.insert(PlayerAction::Right, KeyCode::KeyD);

    input_map.insert(PlayerAction::CameraShake, KeyCode::Space);
    input_map.insert(PlayerAction::CameraShake, GamepadButton::South);
    input_map.insert(PlayerAction::ToggleMouseMode, KeyCode::Escape);

    input_map
}
