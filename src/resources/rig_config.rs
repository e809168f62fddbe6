use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::RigError;
use crate::utils::persistence;

const CONFIG_FILE_NAME: &str = "rig_config.json";

/// How the live camera position chases its target marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PositionSmoothing {
    /// Lerp by `camera_speed` once per tick. Effective speed scales with tick rate.
    PerTick,
    /// Lerp by `1 - (1 - camera_speed)^(dt * reference_hz)`, which matches
    /// `PerTick` at `reference_hz` and keeps the same feel at other rates.
    Normalized { reference_hz: f32 },
}

impl PositionSmoothing {
    /// Lerp factor for one tick of length `dt`.
    pub fn factor(&self, camera_speed: f32, dt: f32) -> f32 {
        match *self {
            Self::PerTick => camera_speed,
            Self::Normalized { reference_hz } => {
                1.0 - (1.0 - camera_speed).powf(dt * reference_hz)
            }
        }
    }
}

/// Mouse-look settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseLook {
    /// Feed pointer motion into the orbit/tilt accumulators.
    pub follow: bool,
    pub sensitivity_x: f32,
    pub sensitivity_y: f32,
}

impl Default for MouseLook {
    fn default() -> Self {
        Self {
            follow: false,
            sensitivity_x: 1.0,
            sensitivity_y: 1.0,
        }
    }
}

/// Per-session camera rig configuration.
///
/// The tilt limits and the initial dive angle are private so the
/// `tilt_lower ≤ dive ≤ tilt_upper` invariant holds after every write.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Degrees of orbit per second at full stick deflection, divided by 30.
    pub horizontal_sensitivity: f32,
    /// Degrees of tilt per second at full stick deflection, divided by 5.
    pub vertical_sensitivity: f32,
    tilt_lower_deg: f32,
    tilt_upper_deg: f32,
    initial_dive_deg: f32,
    /// Orbit request consumed on the first tick.
    pub initial_orbit_deg: f32,
    /// Maximum distance between pivot and camera.
    pub spring_length: f32,
    pub collision_mask: u32,
    /// Distance the spring arm keeps from whatever it hits.
    pub margin: f32,
    /// Offset of the look-at pivot from the followed point, in the pivot's yaw frame.
    pub pivot_offset: Vec2,
    /// Position smoothing factor, in (0, 1].
    pub camera_speed: f32,
    pub position_smoothing: PositionSmoothing,
    /// Duration of the pitch/yaw eases, in seconds.
    pub rotation_ease_secs: f32,
    pub mouse: MouseLook,
    /// Fixed shake noise seed; random when unset.
    pub noise_seed: Option<u32>,
    /// Vertical field of view of the driven camera, in degrees.
    pub fov_deg: f32,
    /// Near and far clip planes of the driven camera.
    pub near: f32,
    pub far: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            horizontal_sensitivity: 10.0,
            vertical_sensitivity: 10.0,
            tilt_lower_deg: -60.0,
            tilt_upper_deg: 60.0,
            initial_dive_deg: -45.0,
            initial_orbit_deg: -45.0,
            spring_length: 10.0,
            collision_mask: 1,
            margin: 0.01,
            pivot_offset: Vec2::ZERO,
            camera_speed: 0.1,
            position_smoothing: PositionSmoothing::PerTick,
            rotation_ease_secs: 0.1,
            mouse: MouseLook::default(),
            noise_seed: None,
            fov_deg: 75.0,
            near: 0.05,
            far: 4000.0,
        }
    }
}

impl RigConfig {
    pub fn tilt_lower_deg(&self) -> f32 {
        self.tilt_lower_deg
    }

    pub fn tilt_upper_deg(&self) -> f32 {
        self.tilt_upper_deg
    }

    pub fn initial_dive_deg(&self) -> f32 {
        self.initial_dive_deg
    }

    /// Sets the dive angle, clamped to the current tilt limits.
    pub fn set_initial_dive_deg(&mut self, degrees: f32) {
        self.initial_dive_deg = degrees.clamp(self.tilt_lower_deg, self.tilt_upper_deg);
    }

    /// Sets both tilt limits and re-clamps the dive angle into them.
    pub fn set_tilt_limits(&mut self, lower_deg: f32, upper_deg: f32) -> Result<(), RigError> {
        if !(lower_deg <= upper_deg) {
            return Err(RigError::InvertedTiltLimits {
                lower: lower_deg,
                upper: upper_deg,
            });
        }
        self.tilt_lower_deg = lower_deg;
        self.tilt_upper_deg = upper_deg;
        self.set_initial_dive_deg(self.initial_dive_deg);
        Ok(())
    }

    /// Tilt accumulator window: the tilt offset range that keeps
    /// `dive + tilt` inside the limits.
    pub fn tilt_offset_range(&self) -> (f32, f32) {
        (
            self.tilt_lower_deg - self.initial_dive_deg,
            self.tilt_upper_deg - self.initial_dive_deg,
        )
    }

    /// Rejects configurations that cannot drive a rig.
    pub fn validate(&self) -> Result<(), RigError> {
        if !(self.tilt_lower_deg <= self.tilt_upper_deg) {
            return Err(RigError::InvertedTiltLimits {
                lower: self.tilt_lower_deg,
                upper: self.tilt_upper_deg,
            });
        }
        if !(self.camera_speed > 0.0 && self.camera_speed <= 1.0) {
            return Err(RigError::CameraSpeedOutOfRange(self.camera_speed));
        }
        if !(self.spring_length.is_finite() && self.spring_length >= 0.0) {
            return Err(RigError::InvalidConfig(format!(
                "spring length {} must be finite and non-negative",
                self.spring_length
            )));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(RigError::InvalidConfig(format!(
                "spring margin {} must be finite and non-negative",
                self.margin
            )));
        }
        if !(self.rotation_ease_secs > 0.0) {
            return Err(RigError::InvalidConfig(format!(
                "rotation ease duration {} must be positive",
                self.rotation_ease_secs
            )));
        }
        if !(self.tilt_lower_deg <= self.initial_dive_deg
            && self.initial_dive_deg <= self.tilt_upper_deg)
        {
            return Err(RigError::InvalidConfig(format!(
                "initial dive {}° lies outside the tilt limits [{}°, {}°]",
                self.initial_dive_deg, self.tilt_lower_deg, self.tilt_upper_deg
            )));
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(RigError::InvalidConfig(format!(
                "field of view {}° must lie in (0, 180)",
                self.fov_deg
            )));
        }
        if !(self.near > 0.0 && self.near < self.far && self.far.is_finite()) {
            return Err(RigError::InvalidConfig(format!(
                "clip planes near {} / far {} must satisfy 0 < near < far",
                self.near, self.far
            )));
        }
        if let PositionSmoothing::Normalized { reference_hz } = self.position_smoothing {
            if !(reference_hz > 0.0) {
                return Err(RigError::InvalidConfig(format!(
                    "smoothing reference rate {} must be positive",
                    reference_hz
                )));
            }
        }
        let finite = [
            self.horizontal_sensitivity,
            self.vertical_sensitivity,
            self.initial_dive_deg,
            self.initial_orbit_deg,
            self.mouse.sensitivity_x,
            self.mouse.sensitivity_y,
        ];
        if finite.iter().any(|v| !v.is_finite()) || !self.pivot_offset.is_finite() {
            return Err(RigError::InvalidConfig(
                "sensitivities, angles and offsets must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Re-clamps the dive angle into the tilt limits, then validates. Use on
    /// configs built from untrusted input (files, deserialization).
    pub fn validated(mut self) -> Result<Self, RigError> {
        if self.tilt_lower_deg <= self.tilt_upper_deg {
            self.set_initial_dive_deg(self.initial_dive_deg);
        }
        self.validate()?;
        Ok(self)
    }

    /// Writes the field of view and clip planes into a perspective projection.
    /// Other projection kinds are left alone.
    pub fn apply_projection(&self, projection: &mut Projection) {
        if let Projection::Perspective(perspective) = projection {
            perspective.fov = self.fov_deg.to_radians();
            perspective.near = self.near;
            perspective.far = self.far;
        }
    }

    /// Loads the config from `path`, or from the default settings location.
    /// Falls back to defaults when the file is absent or invalid.
    pub fn load_from_file(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match persistence::settings_path(CONFIG_FILE_NAME) {
                Some(path) => path,
                None => {
                    warn!("Could not determine settings directory, using default rig config");
                    return Self::default();
                }
            },
        };

        let Some(config) = persistence::load_json::<Self>(&path) else {
            info!("No usable rig config at {:?}, using defaults", path);
            return Self::default();
        };

        match config.validated() {
            Ok(config) => config,
            Err(e) => {
                error!("Rejected rig config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Saves the config to `path`, or to the default settings location.
    pub fn save_to_file(&self, path: Option<&Path>) -> Result<(), RigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => persistence::settings_path(CONFIG_FILE_NAME).ok_or_else(|| {
                RigError::Persistence("Could not determine settings directory".to_string())
            })?,
        };
        persistence::save_json(self, &path)
    }
}
