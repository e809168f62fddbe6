use bevy::prelude::*;

use super::state::{CameraRigState, InputDelta};
use crate::resources::RigConfig;

/// Degrees of orbit per unit of stick input per second, before sensitivity.
pub const ORBIT_RATE: f32 = 30.0;
/// Degrees of tilt per unit of stick input per second, before sensitivity.
pub const TILT_RATE: f32 = 5.0;
/// Orbit degrees per pixel of horizontal pointer motion.
pub const MOUSE_ORBIT_SCALE: f32 = 0.1;
/// Tilt degrees per pixel of vertical pointer motion.
pub const MOUSE_TILT_SCALE: f32 = 0.7;

/// Turns input deltas into orbit and tilt requests.
pub struct OrbitController;

impl OrbitController {
    /// Accumulates stick/key input. Orbit is unbounded, tilt stays inside
    /// the window that keeps `dive + tilt` within the tilt limits.
    pub fn update(input: InputDelta, dt: f32, config: &RigConfig, state: &mut CameraRigState) {
        state.orbit_angle_deg += input.horizontal * dt * ORBIT_RATE * config.horizontal_sensitivity;

        let (min, max) = config.tilt_offset_range();
        state.tilt_angle_deg = (state.tilt_angle_deg
            + input.vertical * dt * TILT_RATE * config.vertical_sensitivity)
            .clamp(min, max);
    }

    /// Accumulates pointer motion. Moving the pointer down tilts the camera down.
    pub fn apply_pointer_motion(motion: Vec2, config: &RigConfig, state: &mut CameraRigState) {
        state.orbit_angle_deg += motion.x * MOUSE_ORBIT_SCALE * config.mouse.sensitivity_x;

        let (min, max) = config.tilt_offset_range();
        state.tilt_angle_deg = (state.tilt_angle_deg
            - motion.y * MOUSE_TILT_SCALE * config.mouse.sensitivity_y)
            .clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_config() -> RigConfig {
        let mut config = RigConfig::default();
        config.set_tilt_limits(-60.0, 60.0).unwrap();
        config.set_initial_dive_deg(-45.0);
        config.horizontal_sensitivity = 10.0;
        config.vertical_sensitivity = 10.0;
        config.camera_speed = 0.1;
        config
    }

    #[test]
    fn test_orbit_accumulates_300_degrees_in_one_second() {
        let config = scenario_config();
        let mut state = CameraRigState::default();
        let dt = 1.0 / 60.0;

        for _ in 0..60 {
            OrbitController::update(InputDelta::new(1.0, 0.0), dt, &config, &mut state);
        }

        assert!((state.orbit_angle_deg - 300.0).abs() < 1e-2);
        assert_eq!(state.tilt_angle_deg, 0.0);
    }

    #[test]
    fn test_tilt_adds_each_tick() {
        let config = scenario_config();
        let mut state = CameraRigState::default();

        OrbitController::update(InputDelta::new(0.0, 1.0), 0.1, &config, &mut state);
        OrbitController::update(InputDelta::new(0.0, 1.0), 0.1, &config, &mut state);

        // 0.1 * 5 * 10 per tick
        assert!((state.tilt_angle_deg - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_tilt_clamped_to_limits() {
        let config = scenario_config();
        let mut state = CameraRigState::default();

        for _ in 0..1000 {
            OrbitController::update(InputDelta::new(0.0, -1.0), 0.1, &config, &mut state);
            let total = config.initial_dive_deg() + state.tilt_angle_deg;
            assert!(total >= config.tilt_lower_deg() - 1e-4);
        }
        assert!((state.tilt_angle_deg + 15.0).abs() < 1e-4);

        for _ in 0..1000 {
            OrbitController::update(InputDelta::new(0.0, 1.0), 0.1, &config, &mut state);
            let total = config.initial_dive_deg() + state.tilt_angle_deg;
            assert!(total <= config.tilt_upper_deg() + 1e-4);
        }
        assert!((state.tilt_angle_deg - 105.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_input_leaves_state_unchanged() {
        let config = scenario_config();
        let mut state = CameraRigState {
            orbit_angle_deg: 12.5,
            tilt_angle_deg: -3.0,
            ..default()
        };
        for _ in 0..100 {
            OrbitController::update(InputDelta::default(), 1.0 / 60.0, &config, &mut state);
        }
        assert_eq!(state.orbit_angle_deg, 12.5);
        assert_eq!(state.tilt_angle_deg, -3.0);
    }

    #[test]
    fn test_pointer_motion_scales() {
        let mut config = scenario_config();
        config.mouse.sensitivity_x = 2.0;
        config.mouse.sensitivity_y = 1.0;
        let mut state = CameraRigState::default();

        OrbitController::apply_pointer_motion(Vec2::new(10.0, 5.0), &config, &mut state);

        assert!((state.orbit_angle_deg - 2.0).abs() < 1e-5);
        assert!((state.tilt_angle_deg + 3.5).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_and_stick_share_accumulators() {
        let config = scenario_config();
        let mut state = CameraRigState::default();

        OrbitController::update(InputDelta::new(1.0, 0.0), 0.1, &config, &mut state);
        OrbitController::apply_pointer_motion(Vec2::new(10.0, 0.0), &config, &mut state);

        assert!((state.orbit_angle_deg - 31.0).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_tilt_respects_limits() {
        let config = scenario_config();
        let mut state = CameraRigState::default();
        OrbitController::apply_pointer_motion(Vec2::new(0.0, 1000.0), &config, &mut state);
        assert!((state.tilt_angle_deg + 15.0).abs() < 1e-4);
    }
}
