use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use super::collaborators::{InputSource, RigAxis, SpringArmProbe, SpringArmReading, TransformSink};
use super::easing::EaseScheduler;
use super::noise_field::SimplexField;
use super::orbit::OrbitController;
use super::pose::CameraPoseSolver;
use super::shake::NoiseShakeGenerator;
use super::state::{CameraRigState, InputDelta, TargetPose};
use crate::error::RigError;
use crate::resources::{RigConfig, ShakePresetTable};

/// What one tick produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigTick {
    pub target: TargetPose,
    pub arm: SpringArmReading,
    pub camera_position: Vec3,
    pub camera_rotation: Quat,
    pub shake_offset: Vec2,
}

/// Third-person camera rig: orbit controller, pose solver and shake behind
/// one surface.
///
/// Collaborators are injected: the spring-arm probe is required before the
/// first tick, the shaker is optional and contributes a zero offset when absent.
pub struct CameraRig {
    config: RigConfig,
    presets: ShakePresetTable,
    state: CameraRigState,
    eases: EaseScheduler,
    probe: Option<Box<dyn SpringArmProbe>>,
    shaker: Option<NoiseShakeGenerator>,
    mouse_follow: bool,
}

impl CameraRig {
    /// Builds a rig, rejecting configurations that cannot drive it.
    pub fn new(config: RigConfig, presets: ShakePresetTable) -> Result<Self, RigError> {
        config.validate()?;
        let state = CameraRigState::new(config.initial_orbit_deg, config.initial_dive_deg());
        Ok(Self {
            mouse_follow: config.mouse.follow,
            config,
            presets,
            state,
            eases: EaseScheduler::new(),
            probe: None,
            shaker: None,
        })
    }

    pub fn with_probe(mut self, probe: impl SpringArmProbe + 'static) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    pub fn with_shaker(mut self, shaker: NoiseShakeGenerator) -> Self {
        self.shaker = Some(shaker);
        self
    }

    /// Attaches a simplex shaker seeded from the config (random when unset).
    pub fn with_default_shaker(self) -> Self {
        let field = SimplexField::from_optional_seed(self.config.noise_seed);
        self.with_shaker(NoiseShakeGenerator::new(Box::new(field)))
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn presets(&self) -> &ShakePresetTable {
        &self.presets
    }

    pub fn state(&self) -> &CameraRigState {
        &self.state
    }

    pub fn shaker(&self) -> Option<&NoiseShakeGenerator> {
        self.shaker.as_ref()
    }

    /// True once every pitch and yaw ease has finished.
    pub fn is_rotation_settled(&self) -> bool {
        self.eases.is_idle()
    }

    pub fn active_eases(&self) -> usize {
        self.eases.active_count()
    }

    pub fn mouse_follow(&self) -> bool {
        self.mouse_follow
    }

    pub fn set_mouse_follow(&mut self, follow: bool) {
        self.mouse_follow = follow;
    }

    /// Runs one tick: orbit input, pose solve, smoothing, shake.
    pub fn tick(
        &mut self,
        follow_point: Vec3,
        input: &dyn InputSource,
        sink: &mut dyn TransformSink,
        dt: f32,
    ) -> Result<RigTick, RigError> {
        let Some(probe) = self.probe.as_mut() else {
            return Err(RigError::MissingCollaborator("spring-arm probe"));
        };
        let dt = dt.max(0.0);
        let config = &self.config;
        let state = &mut self.state;

        // Orbit
        let delta = InputDelta::new(input.axis(RigAxis::Orbit), input.axis(RigAxis::Tilt));
        OrbitController::update(delta, dt, config, state);
        if self.mouse_follow {
            OrbitController::apply_pointer_motion(input.pointer_motion(), config, state);
        }

        // Pose
        state.camera_position = sink.position();
        state.pivot_position = CameraPoseSolver::offset_pivot(follow_point, state, config);
        let arm = probe.cast(
            state.pivot_position,
            CameraPoseSolver::arm_direction(state, config),
            config.spring_length,
            config.collision_mask,
            config.margin,
        );
        let target = CameraPoseSolver::solve(state, config, arm.length.min(config.spring_length));

        CameraPoseSolver::smooth_position(state, &target, config, dt);
        CameraPoseSolver::schedule_rotation(state, &target, config, &mut self.eases);
        CameraPoseSolver::advance_rotation(state, &mut self.eases, dt);

        let camera_rotation = CameraPoseSolver::camera_rotation(state);
        sink.set_position(state.camera_position);
        sink.set_rotation(camera_rotation);

        // Shake
        let shake_offset = match self.shaker.as_mut() {
            Some(shaker) => shaker.tick(dt, state),
            None => Vec2::ZERO,
        };
        sink.set_view_offset(shake_offset);

        Ok(RigTick {
            target,
            arm,
            camera_position: state.camera_position,
            camera_rotation,
            shake_offset,
        })
    }

    /// Starts preset `index`. Out-of-range indices leave the running shake untouched.
    pub fn apply_preset_shake(&mut self, index: usize) -> Result<(), RigError> {
        let preset = *self.presets.get(index)?;
        match self.shaker.as_mut() {
            Some(shaker) => {
                shaker.apply_preset(preset, &mut self.state);
                debug!("Camera shake preset {} applied", index);
            }
            None => debug!("Camera shake preset {} requested but no shaker is attached", index),
        }
        Ok(())
    }

    /// Selects preset `index` without starting a shake. The next
    /// `retrigger_shake` runs it.
    pub fn change_preset_shake(&mut self, index: usize) -> Result<(), RigError> {
        let preset = *self.presets.get(index)?;
        if let Some(shaker) = self.shaker.as_mut() {
            shaker.change_preset(preset);
        }
        Ok(())
    }

    /// Restarts the selected preset at full strength. No-op when nothing is selected.
    pub fn retrigger_shake(&mut self) {
        if let Some(shaker) = self.shaker.as_mut() {
            shaker.retrigger(&mut self.state);
        }
    }

    /// Horizontal unit vector from the camera toward the pivot. Zero when
    /// the camera sits directly above or below the pivot.
    pub fn front_direction(&self) -> Vec3 {
        let mut direction = self.state.pivot_position - self.state.camera_position;
        direction.y = 0.0;
        direction.normalize_or_zero()
    }

    pub fn back_direction(&self) -> Vec3 {
        -self.front_direction()
    }

    pub fn left_direction(&self) -> Vec3 {
        Quat::from_rotation_y(FRAC_PI_2) * self.front_direction()
    }

    pub fn right_direction(&self) -> Vec3 {
        Quat::from_rotation_y(-FRAC_PI_2) * self.front_direction()
    }
}
