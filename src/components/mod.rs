pub mod camera;
pub mod player;

pub use camera::*;
pub use player::*;
