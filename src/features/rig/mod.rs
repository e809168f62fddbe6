//! Engine-agnostic third-person camera rig.
//!
//! Per tick, in this order: orbit input → pose solve → smoothing → shake.

pub mod collaborators;
pub mod easing;
pub mod facade;
pub mod noise_field;
pub mod orbit;
pub mod pose;
pub mod shake;
pub mod state;

pub use collaborators::*;
pub use easing::{EaseChannel, EaseScheduler, EaseStep};
pub use facade::{CameraRig, RigTick};
pub use noise_field::{NoiseField, SimplexField};
pub use orbit::OrbitController;
pub use pose::CameraPoseSolver;
pub use shake::{NoiseShakeGenerator, ShakePhase};
pub use state::{CameraRigState, InputDelta, TargetPose};
