use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use super::quad::UvRect;
use super::traits::{ShaderProgram, VertexAttribute};
use crate::api::types::TextureId;

/// One recorded sprite draw, ready to hand to a GPU instance buffer.
/// 8 words = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// Model translation.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Texture handle bound for the draw.
    pub texture: u32,
    /// Sampled UV rectangle.
    pub u: f32,
    pub v: f32,
    pub uv_width: f32,
    pub uv_height: f32,
}

impl QuadInstance {
    pub const WORDS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::WORDS * 4;
}

/// A [`ShaderProgram`] that records quads instead of drawing them.
///
/// Useful for hosts that batch on their own side (WebGPU, headless replays),
/// and for asserting on render output.
pub struct DrawList {
    instances: Vec<QuadInstance>,
    model: Mat4,
    texture: TextureId,
    tex_coords: Vec<f32>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(64),
            model: Mat4::IDENTITY,
            texture: TextureId::default(),
            tex_coords: Vec::with_capacity(12),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[QuadInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Raw bytes of the instance list for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Bounding rectangle of the currently bound texture coordinates.
    fn bound_uv_rect(&self) -> UvRect {
        if self.tex_coords.len() < 2 {
            return UvRect::FULL;
        }
        let (mut min_u, mut min_v) = (f32::MAX, f32::MAX);
        let (mut max_u, mut max_v) = (f32::MIN, f32::MIN);
        for pair in self.tex_coords.chunks_exact(2) {
            min_u = min_u.min(pair[0]);
            max_u = max_u.max(pair[0]);
            min_v = min_v.min(pair[1]);
            max_v = max_v.max(pair[1]);
        }
        UvRect {
            u: min_u,
            v: min_v,
            width: max_u - min_u,
            height: max_v - min_v,
        }
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl ShaderProgram for DrawList {
    fn set_model_matrix(&mut self, matrix: &Mat4) {
        self.model = *matrix;
    }

    fn bind_texture(&mut self, texture: TextureId) {
        self.texture = texture;
    }

    fn set_attribute(&mut self, attribute: VertexAttribute, data: &[f32]) {
        // Positions are always the unit quad; only the UVs vary per draw.
        if attribute == VertexAttribute::TexCoord {
            self.tex_coords.clear();
            self.tex_coords.extend_from_slice(data);
        }
    }

    fn draw_triangles(&mut self, _vertex_count: u32) {
        let translation = self.model.w_axis.truncate();
        let uv = self.bound_uv_rect();
        self.instances.push(QuadInstance {
            x: translation.x,
            y: translation.y,
            z: translation.z,
            texture: self.texture.0,
            u: uv.u,
            v: uv.v,
            uv_width: uv.width,
            uv_height: uv.height,
        });
    }
}
