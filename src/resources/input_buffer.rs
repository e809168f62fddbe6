use bevy::prelude::*;

use crate::features::rig::{InputSource, RigAxis};

/// Camera input captured in `Update` for the rig tick in `FixedUpdate`.
///
/// Axes hold the latest reading; pointer motion accumulates until drained so
/// no mouse movement is lost between fixed ticks.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct RigInputBuffer {
    pub orbit: f32,
    pub tilt: f32,
    pub pointer_motion: Vec2,
}

impl RigInputBuffer {
    pub fn record(&mut self, orbit: f32, tilt: f32, pointer_motion: Vec2) {
        self.orbit = orbit;
        self.tilt = tilt;
        self.pointer_motion += pointer_motion;
    }

    /// Takes the buffered input for one tick, clearing accumulated motion.
    pub fn drain(&mut self) -> RigInputBuffer {
        let snapshot = *self;
        self.pointer_motion = Vec2::ZERO;
        snapshot
    }
}

impl InputSource for RigInputBuffer {
    fn axis(&self, axis: RigAxis) -> f32 {
        match axis {
            RigAxis::Orbit => self.orbit,
            RigAxis::Tilt => self.tilt,
        }
    }

    fn pointer_motion(&self) -> Vec2 {
        self.pointer_motion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_accumulates_until_drained() {
        let mut buffer = RigInputBuffer::default();
        buffer.record(0.5, -1.0, Vec2::new(3.0, 1.0));
        buffer.record(1.0, 0.0, Vec2::new(2.0, -4.0));

        let tick = buffer.drain();
        assert_eq!(tick.axis(RigAxis::Orbit), 1.0);
        assert_eq!(tick.axis(RigAxis::Tilt), 0.0);
        assert_eq!(tick.pointer_motion(), Vec2::new(5.0, -3.0));

        assert_eq!(buffer.pointer_motion, Vec2::ZERO);
        assert_eq!(buffer.orbit, 1.0);
    }
}
