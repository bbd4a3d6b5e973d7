pub mod ai;
pub mod combat;
pub mod render;
pub mod step;
