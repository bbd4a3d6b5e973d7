pub mod collision;
pub mod scene;
pub mod time;
