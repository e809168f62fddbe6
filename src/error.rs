use thiserror::Error;

/// Everything that can go wrong while configuring or ticking a camera rig.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RigError {
    #[error("config error: tilt lower limit {lower}° is above upper limit {upper}°")]
    InvertedTiltLimits { lower: f32, upper: f32 },

    #[error("config error: camera speed {0} must lie in (0, 1]")]
    CameraSpeedOutOfRange(f32),

    #[error("config error: {0}")]
    InvalidConfig(String),

    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("shake preset {index} out of range (table holds {len})")]
    PresetOutOfRange { index: usize, len: usize },

    #[error("persistence error: {0}")]
    Persistence(String),
}

impl RigError {
    /// True for errors that must be fixed before the first tick.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvertedTiltLimits { .. } | Self::CameraSpeedOutOfRange(_) | Self::InvalidConfig(_)
        )
    }
}
