pub mod cli;
pub mod input_buffer;
pub mod rig_config;
pub mod shake_presets;

pub use cli::*;
pub use input_buffer::*;
pub use rig_config::*;
pub use shake_presets::*;
