use bevy::prelude::*;

use super::noise_field::NoiseField;
use super::state::CameraRigState;
use crate::resources::ShakePreset;

/// Strength below which a shake counts as finished and snaps to zero.
pub const SHAKE_IDLE_EPSILON: f32 = 1e-4;

/// Noise-field x coordinates for the two offset axes. Far apart so the
/// horizontal and vertical samples are unrelated.
const SAMPLE_X_HORIZONTAL: f32 = 1.0;
const SAMPLE_X_VERTICAL: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakePhase {
    Idle,
    Decaying,
}

/// Additive camera shake driven by a decaying strength and coherent noise.
pub struct NoiseShakeGenerator {
    preset: Option<ShakePreset>,
    field: Box<dyn NoiseField>,
}

impl NoiseShakeGenerator {
    pub fn new(field: Box<dyn NoiseField>) -> Self {
        Self {
            preset: None,
            field,
        }
    }

    pub fn preset(&self) -> Option<&ShakePreset> {
        self.preset.as_ref()
    }

    pub fn phase(&self, state: &CameraRigState) -> ShakePhase {
        if self.preset.is_some() && state.shake_strength > 0.0 {
            ShakePhase::Decaying
        } else {
            ShakePhase::Idle
        }
    }

    /// Starts a shake, overwriting whatever shake was running.
    pub fn apply_preset(&mut self, preset: ShakePreset, state: &mut CameraRigState) {
        self.preset = Some(preset);
        state.shake_strength = preset.strength;
    }

    /// Swaps the preset without starting a shake.
    pub fn change_preset(&mut self, preset: ShakePreset) {
        self.preset = Some(preset);
    }

    /// Restarts the current preset at full strength. No-op without a preset.
    pub fn retrigger(&mut self, state: &mut CameraRigState) {
        if let Some(preset) = self.preset {
            state.shake_strength = preset.strength;
        }
    }

    /// Decays the strength, advances the noise cursor and returns the view offset.
    pub fn tick(&mut self, dt: f32, state: &mut CameraRigState) -> Vec2 {
        let Some(preset) = self.preset else {
            return Vec2::ZERO;
        };

        let t = (preset.decay_rate * dt).clamp(0.0, 1.0);
        state.shake_strength += (0.0 - state.shake_strength) * t;
        if state.shake_strength < SHAKE_IDLE_EPSILON {
            state.shake_strength = 0.0;
        }

        state.noise_cursor += dt * preset.volatility;

        if state.shake_strength == 0.0 {
            return Vec2::ZERO;
        }

        Vec2::new(
            self.field.sample(SAMPLE_X_HORIZONTAL, state.noise_cursor),
            self.field.sample(SAMPLE_X_VERTICAL, state.noise_cursor),
        ) * state.shake_strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::rig::noise_field::SimplexField;

    /// Field that returns 1 everywhere, so offsets equal the strength.
    struct FlatField;

    impl NoiseField for FlatField {
        fn sample(&self, _x: f32, _y: f32) -> f32 {
            1.0
        }
    }

    #[test]
    fn test_idle_without_preset() {
        let mut shaker = NoiseShakeGenerator::new(Box::new(FlatField));
        let mut state = CameraRigState::default();
        assert_eq!(shaker.tick(0.016, &mut state), Vec2::ZERO);
        assert_eq!(shaker.phase(&state), ShakePhase::Idle);
        assert_eq!(state.noise_cursor, 0.0);
    }

    #[test]
    fn test_single_large_step_decays_to_zero() {
        let mut shaker = NoiseShakeGenerator::new(Box::new(FlatField));
        let mut state = CameraRigState::default();
        shaker.apply_preset(ShakePreset::new(1.0, 1.0, 2.0), &mut state);
        assert_eq!(shaker.phase(&state), ShakePhase::Decaying);

        let offset = shaker.tick(0.5, &mut state);
        assert_eq!(state.shake_strength, 0.0);
        assert_eq!(offset.length(), 0.0);
        assert_eq!(shaker.phase(&state), ShakePhase::Idle);
    }

    #[test]
    fn test_small_steps_decay_gradually() {
        let mut shaker = NoiseShakeGenerator::new(Box::new(FlatField));
        let mut state = CameraRigState::default();
        shaker.apply_preset(ShakePreset::new(1.0, 1.0, 2.0), &mut state);

        let first = shaker.tick(0.05, &mut state);
        let second = shaker.tick(0.05, &mut state);
        assert!((state.shake_strength - 0.81).abs() < 1e-5);
        assert!(first.length() > second.length());
        assert!(second.length() > 0.0);
    }

    #[test]
    fn test_decay_matches_closed_form() {
        let mut shaker = NoiseShakeGenerator::new(Box::new(FlatField));
        let mut state = CameraRigState::default();
        let (s0, rate, dt) = (2.0_f32, 3.0_f32, 1.0_f32 / 60.0);
        shaker.apply_preset(ShakePreset::new(1.0, s0, rate), &mut state);

        let ticks = 90;
        for _ in 0..ticks {
            let _ = shaker.tick(dt, &mut state);
        }
        let expected = s0 * (1.0 - rate * dt).powi(ticks);
        assert!((state.shake_strength - expected).abs() < 1e-4);
    }

    #[test]
    fn test_cursor_advances_by_volatility() {
        let mut shaker = NoiseShakeGenerator::new(Box::new(FlatField));
        let mut state = CameraRigState::default();
        shaker.apply_preset(ShakePreset::new(4.0, 1.0, 0.0), &mut state);
        let _ = shaker.tick(0.25, &mut state);
        assert!((state.noise_cursor - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_new_preset_overwrites_running_shake() {
        let mut shaker = NoiseShakeGenerator::new(Box::new(FlatField));
        let mut state = CameraRigState::default();
        shaker.apply_preset(ShakePreset::new(1.0, 1.0, 1.0), &mut state);
        let _ = shaker.tick(0.1, &mut state);

        let heavy = ShakePreset::new(10.0, 0.3, 0.5);
        shaker.apply_preset(heavy, &mut state);
        assert_eq!(state.shake_strength, 0.3);
        assert_eq!(shaker.preset(), Some(&heavy));
    }

    #[test]
    fn test_retrigger_restores_strength() {
        let mut shaker = NoiseShakeGenerator::new(Box::new(FlatField));
        let mut state = CameraRigState::default();
        shaker.retrigger(&mut state);
        assert_eq!(state.shake_strength, 0.0);

        shaker.change_preset(ShakePreset::new(1.0, 0.7, 1.0));
        assert_eq!(state.shake_strength, 0.0);
        shaker.retrigger(&mut state);
        assert_eq!(state.shake_strength, 0.7);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let run = || {
            let mut shaker = NoiseShakeGenerator::new(Box::new(SimplexField::new(1234)));
            let mut state = CameraRigState::default();
            shaker.apply_preset(ShakePreset::new(20.0, 0.5, 1.0), &mut state);
            (0..30)
                .map(|_| shaker.tick(1.0 / 60.0, &mut state))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
