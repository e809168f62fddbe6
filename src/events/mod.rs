use bevy::prelude::*;

/// Event asking every third-person camera to start a shake preset.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeRequested {
    /// Index into the camera's shake preset table.
    pub preset: usize,
}
