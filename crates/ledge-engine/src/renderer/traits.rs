//! The shader-program seam.
//!
//! The engine never talks to a graphics API directly. A host wraps its
//! compiled program (GL, WebGPU, a software rasterizer) in this trait; the
//! engine pushes a model matrix, binds raw vertex buffers to the two attribute
//! slots, and issues a triangle draw.

use glam::Mat4;

use crate::api::types::TextureId;

/// Vertex attribute slots every sprite program exposes. Both take two floats per vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttribute {
    Position,
    TexCoord,
}

/// A compiled sprite program on the current render thread.
///
/// Calls arrive in draw order for each entity: `set_model_matrix`,
/// `bind_texture`, both `set_attribute`s, `draw_triangles`, then
/// `disable_attribute` for both slots.
pub trait ShaderProgram {
    /// Upload the model matrix uniform.
    fn set_model_matrix(&mut self, matrix: &Mat4);

    /// Bind the texture sampled by the next draw.
    fn bind_texture(&mut self, texture: TextureId);

    /// Point an attribute slot at `data` (two floats per vertex) and enable it.
    fn set_attribute(&mut self, attribute: VertexAttribute, data: &[f32]);

    /// Draw `vertex_count` vertices as a triangle list.
    fn draw_triangles(&mut self, vertex_count: u32);

    /// Disable an attribute slot after drawing.
    fn disable_attribute(&mut self, _attribute: VertexAttribute) {}
}
