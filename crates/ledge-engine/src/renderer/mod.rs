pub mod draw_list;
pub mod quad;
pub mod traits;

pub use traits::{ShaderProgram, VertexAttribute};
