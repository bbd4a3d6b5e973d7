pub mod ai;
pub mod animation;
pub mod entity;
