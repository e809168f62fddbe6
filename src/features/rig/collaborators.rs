//! Host-side services the rig reads from and writes to.

use bevy::prelude::*;

/// Camera transform the rig drives.
pub trait TransformSink {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn set_rotation(&mut self, rotation: Quat);
    /// Screen-plane offset applied on top of the pose (horizontal, vertical).
    fn set_view_offset(&mut self, offset: Vec2);
}

/// Result of one spring-arm cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringArmReading {
    /// Arm length after occlusion, never longer than the configured maximum.
    pub length: f32,
    /// World position of the arm tip.
    pub tip: Vec3,
}

/// Ray/shape cast that shortens the arm when geometry is in the way.
pub trait SpringArmProbe: Send + Sync {
    fn cast(
        &mut self,
        origin: Vec3,
        direction: Dir3,
        max_length: f32,
        collision_mask: u32,
        margin: f32,
    ) -> SpringArmReading;
}

/// Probe for scenes without obstacles: the arm is always fully extended.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnobstructedProbe;

impl SpringArmProbe for UnobstructedProbe {
    fn cast(
        &mut self,
        origin: Vec3,
        direction: Dir3,
        max_length: f32,
        _collision_mask: u32,
        _margin: f32,
    ) -> SpringArmReading {
        SpringArmReading {
            length: max_length,
            tip: origin + direction * max_length,
        }
    }
}

/// Input axes the rig polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RigAxis {
    /// Right minus left.
    Orbit,
    /// Up minus down.
    Tilt,
}

/// Action strengths and pointer motion for one tick. Unbound actions read as 0.
pub trait InputSource {
    fn axis(&self, axis: RigAxis) -> f32;
    /// Raw pointer motion since the previous tick, in pixels.
    fn pointer_motion(&self) -> Vec2;
}

/// Input source that never reports anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn axis(&self, _axis: RigAxis) -> f32 {
        0.0
    }

    fn pointer_motion(&self) -> Vec2 {
        Vec2::ZERO
    }
}
