use bevy::prelude::*;

use super::easing::{EaseChannel, EaseScheduler, EaseStep};
use super::state::{CameraRigState, TargetPose};
use crate::resources::RigConfig;

/// Turns orbit/tilt state and the spring-arm length into a camera pose.
///
/// Translation and rotation are smoothed differently on purpose: the
/// position chases its marker with a per-tick lerp, while pitch and yaw
/// run fixed-duration eases.
pub struct CameraPoseSolver;

impl CameraPoseSolver {
    /// Dive plus tilt offset, clamped to the tilt limits.
    pub fn final_tilt_deg(state: &CameraRigState, config: &RigConfig) -> f32 {
        (config.initial_dive_deg() + state.tilt_angle_deg)
            .clamp(config.tilt_lower_deg(), config.tilt_upper_deg())
    }

    fn yaw_rotation(state: &CameraRigState) -> Quat {
        Quat::from_rotation_y(state.pivot_yaw_deg.to_radians())
    }

    /// World position of the offset pivot for a followed point.
    pub fn offset_pivot(follow_point: Vec3, state: &CameraRigState, config: &RigConfig) -> Vec3 {
        let local = Vec3::new(config.pivot_offset.x, config.pivot_offset.y, 0.0);
        follow_point + Self::yaw_rotation(state) * local
    }

    /// Direction the spring arm extends from the offset pivot toward the camera.
    pub fn arm_direction(state: &CameraRigState, config: &RigConfig) -> Dir3 {
        let pitch = Quat::from_rotation_x(config.initial_dive_deg().to_radians());
        Dir3::new(Self::yaw_rotation(state) * pitch * Vec3::Z).unwrap_or(Dir3::Z)
    }

    /// Target pose for this tick. `spring_length` must be the probe's
    /// (possibly occluded) length, not the configured maximum.
    pub fn solve(state: &CameraRigState, config: &RigConfig, spring_length: f32) -> TargetPose {
        let position = state.pivot_position + Self::arm_direction(state, config) * spring_length;
        TargetPose {
            position,
            rotation_deg: Vec3::new(
                Self::final_tilt_deg(state, config),
                state.pivot_yaw_deg,
                0.0,
            ),
        }
    }

    /// Moves the live camera position toward the target by one lerp step.
    pub fn smooth_position(state: &mut CameraRigState, target: &TargetPose, config: &RigConfig, dt: f32) {
        let factor = config
            .position_smoothing
            .factor(config.camera_speed, dt)
            .clamp(0.0, 1.0);
        state.camera_position += (target.position - state.camera_position) * factor;
    }

    /// Schedules the pitch and yaw eases for this tick and consumes the
    /// pending orbit request.
    pub fn schedule_rotation(
        state: &mut CameraRigState,
        target: &TargetPose,
        config: &RigConfig,
        eases: &mut EaseScheduler,
    ) {
        eases.ease_to(
            EaseChannel::CameraPitch,
            state.camera_pitch_deg,
            target.rotation_deg.x,
            config.rotation_ease_secs,
        );
        eases.ease_by(
            EaseChannel::PivotYaw,
            -state.orbit_angle_deg,
            config.rotation_ease_secs,
        );
        state.orbit_angle_deg = 0.0;
    }

    /// Advances the running eases and writes their values into the state.
    pub fn advance_rotation(state: &mut CameraRigState, eases: &mut EaseScheduler, dt: f32) {
        eases.advance(dt, |channel, step| {
            let value = match channel {
                EaseChannel::CameraPitch => &mut state.camera_pitch_deg,
                EaseChannel::PivotYaw => &mut state.pivot_yaw_deg,
            };
            match step {
                EaseStep::Set(v) => *value = v,
                EaseStep::Add(d) => *value += d,
            }
        });
        state.normalize_yaw();
    }

    /// Camera orientation: live pitch, yawed to face the offset pivot.
    pub fn camera_rotation(state: &CameraRigState) -> Quat {
        let to_pivot = state.pivot_position - state.camera_position;
        let flat = Vec2::new(to_pivot.x, to_pivot.z);
        let yaw = if flat.length_squared() > 1e-8 {
            // Forward is -Z, so yaw θ looks along (-sin θ, -cos θ).
            (-flat.x).atan2(-flat.y)
        } else {
            state.pivot_yaw_deg.to_radians()
        };
        Quat::from_euler(EulerRot::YXZ, yaw, state.camera_pitch_deg.to_radians(), 0.0)
    }
}
