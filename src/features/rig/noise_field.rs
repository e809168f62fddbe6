use noise::{NoiseFn, Simplex};
use rand::Rng;

/// Deterministic 2D coherent noise in [-1, 1].
pub trait NoiseField: Send + Sync {
    fn sample(&self, x: f32, y: f32) -> f32;
}

/// Frequency used for shake noise; higher values change faster.
pub const SHAKE_NOISE_FREQUENCY: f64 = 0.5;

/// Simplex noise sampled at a fixed frequency.
pub struct SimplexField {
    simplex: Simplex,
}

impl SimplexField {
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
        }
    }

    /// Seeded from `seed` when given, otherwise from the thread RNG.
    pub fn from_optional_seed(seed: Option<u32>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
        bevy::log::debug!("Shake noise seed: {}", seed);
        Self::new(seed)
    }
}

impl NoiseField for SimplexField {
    fn sample(&self, x: f32, y: f32) -> f32 {
        let value = self
            .simplex
            .get([x as f64 * SHAKE_NOISE_FREQUENCY, y as f64 * SHAKE_NOISE_FREQUENCY]);
        value.clamp(-1.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_range() {
        let field = SimplexField::new(42);
        for i in 0..500 {
            let t = i as f32 * 0.137;
            let v = field.sample(1.0, t);
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_same_seed_same_samples() {
        let a = SimplexField::new(9001);
        let b = SimplexField::new(9001);
        for i in 0..100 {
            let t = i as f32 * 0.31;
            assert_eq!(a.sample(100.0, t), b.sample(100.0, t));
        }
    }

    #[test]
    fn test_axes_are_decorrelated() {
        let field = SimplexField::new(3);
        let differs = (0..50)
            .map(|i| i as f32 * 0.4)
            .any(|t| (field.sample(1.0, t) - field.sample(100.0, t)).abs() > 1e-3);
        assert!(differs);
    }
}
