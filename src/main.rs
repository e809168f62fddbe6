use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use tpc_camera::plugins::camera_rig::ThirdPersonCameraPlugin;
use tpc_camera::plugins::debug_ui::DebugUiPlugin;
use tpc_camera::plugins::demo::DemoPlugin;
use tpc_camera::plugins::input::InputPlugin;
use tpc_camera::resources::CliArgs;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        // CLI args must be present before the rig plugin loads its settings
        .insert_resource(CliArgs::parse())
        .add_plugins(EguiPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(ThirdPersonCameraPlugin)
        .add_plugins(DemoPlugin)
        .add_plugins(DebugUiPlugin)
        .run();
}
