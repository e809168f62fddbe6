use bevy::prelude::*;

/// Live state of one camera rig. Mutated once per tick, owned by the rig.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraRigState {
    /// Pending orbit request in degrees, consumed by the pose solver each tick.
    pub orbit_angle_deg: f32,
    /// Tilt offset from the dive angle, in degrees.
    pub tilt_angle_deg: f32,
    /// Offset pivot the camera orbits and looks toward.
    pub pivot_position: Vec3,
    pub camera_position: Vec3,
    pub shake_strength: f32,
    pub noise_cursor: f32,
    /// Live (eased) yaw of the rotation pivot, kept in [0, 360).
    pub pivot_yaw_deg: f32,
    /// Live (eased) camera pitch.
    pub camera_pitch_deg: f32,
}

impl CameraRigState {
    /// State for a freshly built rig: the first tick consumes `initial_orbit_deg`
    /// and the camera starts pitched at the dive angle.
    pub fn new(initial_orbit_deg: f32, initial_dive_deg: f32) -> Self {
        Self {
            orbit_angle_deg: initial_orbit_deg,
            camera_pitch_deg: initial_dive_deg,
            ..default()
        }
    }

    /// Wraps the pivot yaw into [0, 360).
    pub fn normalize_yaw(&mut self) {
        self.pivot_yaw_deg = wrap_degrees(self.pivot_yaw_deg);
    }
}

/// Per-tick input deltas, in [-1, 1] per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputDelta {
    pub horizontal: f32,
    pub vertical: f32,
}

impl InputDelta {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Where the camera wants to be this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    pub position: Vec3,
    /// (pitch, yaw, roll) in degrees.
    pub rotation_deg: Vec3,
}

pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
