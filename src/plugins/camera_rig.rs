use bevy::prelude::*;

use crate::events::ShakeRequested;
use crate::resources::{CliArgs, RigConfig, RigInputBuffer, ShakePresetTable};
use crate::systems::camera::{
    apply_shake_requests, buffer_camera_input, sync_camera_projection, tick_camera_rigs,
};

/// Ordering labels for the camera rig systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RigSet {
    /// Input capture in `Update`.
    Input,
    /// Rig tick in `FixedUpdate`. Anything moving a follow target should run before it.
    Tick,
}

pub struct ThirdPersonCameraPlugin;

impl Plugin for ThirdPersonCameraPlugin {
    fn build(&self, app: &mut App) {
        let cli = app
            .world()
            .get_resource::<CliArgs>()
            .cloned()
            .unwrap_or_default();
        let (config, presets) = load_rig_settings(&cli);

        app.add_event::<ShakeRequested>()
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .insert_resource(config)
            .insert_resource(presets)
            .init_resource::<RigInputBuffer>()
            .add_systems(Update, buffer_camera_input.in_set(RigSet::Input))
            .add_systems(
                FixedUpdate,
                (apply_shake_requests, tick_camera_rigs, sync_camera_projection)
                    .chain()
                    .in_set(RigSet::Tick),
            );
    }
}

/// Loads the rig config and shake presets, then applies CLI overrides.
pub fn load_rig_settings(cli: &CliArgs) -> (RigConfig, ShakePresetTable) {
    let mut config = RigConfig::load_from_file(cli.config_path.as_deref());
    let presets = ShakePresetTable::load_from_file(cli.presets_path.as_deref());

    if cli.seed.is_some() {
        config.noise_seed = cli.seed;
    }
    if cli.mouse {
        config.mouse.follow = true;
    }

    info!(
        "Camera rig: spring length {}, tilt window [{}, {}], {} shake presets",
        config.spring_length,
        config.tilt_lower_deg(),
        config.tilt_upper_deg(),
        presets.len()
    );
    (config, presets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn missing_file_cli() -> CliArgs {
        CliArgs {
            config_path: Some(PathBuf::from("/nonexistent/tpc_camera/config.json")),
            presets_path: Some(PathBuf::from("/nonexistent/tpc_camera/presets.json")),
            ..default()
        }
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let (config, presets) = load_rig_settings(&missing_file_cli());
        assert_eq!(config, RigConfig::default());
        assert_eq!(presets, ShakePresetTable::default());
    }

    #[test]
    fn test_cli_overrides_seed_and_mouse() {
        let cli = CliArgs {
            seed: Some(7),
            mouse: true,
            ..missing_file_cli()
        };
        let (config, _) = load_rig_settings(&cli);
        assert_eq!(config.noise_seed, Some(7));
        assert!(config.mouse.follow);
    }
}
