pub mod plugin;
pub mod render;
