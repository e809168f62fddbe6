pub mod camera_rig;
pub mod debug_ui;
pub mod demo;
pub mod input;
