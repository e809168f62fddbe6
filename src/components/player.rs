use bevy::prelude::*;

/// Demo ball pushed around along the camera's direction vectors.
///
/// Motion is a plain unit-mass integration; the demo has no physics engine.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlayerBall {
    /// Force applied per push, in units/s².
    pub speed: f32,
    pub velocity: Vec3,
    /// Fraction of velocity lost per second.
    pub linear_damping: f32,
}

impl Default for PlayerBall {
    fn default() -> Self {
        Self {
            speed: 10.0,
            velocity: Vec3::ZERO,
            linear_damping: 0.8,
        }
    }
}

impl PlayerBall {
    /// Applies `speed` worth of force along `direction` for one tick.
    pub fn push(&mut self, direction: Vec3, dt: f32) {
        self.velocity += direction * self.speed * dt;
    }

    /// Damps velocity and moves `translation` by one tick.
    pub fn integrate(&mut self, translation: &mut Vec3, dt: f32) {
        self.velocity *= (1.0 - self.linear_damping * dt).clamp(0.0, 1.0);
        *translation += self.velocity * dt;
    }
}
