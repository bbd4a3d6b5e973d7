use bytemuck::{Pod, Zeroable};

/// One 2D vertex attribute value (position or texture coordinate).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub x: f32,
    pub y: f32,
}

impl QuadVertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Vertices per quad (two triangles).
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Unit quad centered on the origin, spanning [-0.5, 0.5] on both axes.
pub const QUAD_POSITIONS: [QuadVertex; 6] = [
    QuadVertex::new(-0.5, -0.5),
    QuadVertex::new(0.5, -0.5),
    QuadVertex::new(0.5, 0.5),
    QuadVertex::new(-0.5, -0.5),
    QuadVertex::new(0.5, 0.5),
    QuadVertex::new(-0.5, 0.5),
];

/// A rectangle of the texture in normalized UV space (v grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub width: f32,
    pub height: f32,
}

impl UvRect {
    /// The whole texture.
    pub const FULL: Self = Self {
        u: 0.0,
        v: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Cell `index` of a `cols` x `rows` atlas, counted row-major from the top left.
    pub fn atlas_cell(index: u32, cols: u32, rows: u32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            u: (index % cols) as f32 / cols as f32,
            v: (index / cols) as f32 / rows as f32,
            width: 1.0 / cols as f32,
            height: 1.0 / rows as f32,
        }
    }

    /// Texture coordinates matching [`QUAD_POSITIONS`] vertex for vertex.
    pub fn tex_coords(&self) -> [QuadVertex; 6] {
        let left = self.u;
        let right = self.u + self.width;
        let top = self.v;
        let bottom = self.v + self.height;
        [
            QuadVertex::new(left, bottom),
            QuadVertex::new(right, bottom),
            QuadVertex::new(right, top),
            QuadVertex::new(left, bottom),
            QuadVertex::new(right, top),
            QuadVertex::new(left, top),
        ]
    }
}
