use crate::api::types::TextureId;
use crate::components::entity::Entity;
use crate::renderer::quad::{UvRect, QUAD_POSITIONS, QUAD_VERTEX_COUNT};
use crate::renderer::traits::{ShaderProgram, VertexAttribute};

/// Draw one textured unit quad sampling `uv`. One draw call.
pub fn draw_quad<P: ShaderProgram + ?Sized>(program: &mut P, texture: TextureId, uv: UvRect) {
    let tex_coords = uv.tex_coords();

    program.bind_texture(texture);
    program.set_attribute(VertexAttribute::Position, bytemuck::cast_slice(&QUAD_POSITIONS));
    program.set_attribute(VertexAttribute::TexCoord, bytemuck::cast_slice(&tex_coords));
    program.draw_triangles(QUAD_VERTEX_COUNT);
    program.disable_attribute(VertexAttribute::Position);
    program.disable_attribute(VertexAttribute::TexCoord);
}

impl Entity {
    /// Atlas region for the current frame, or the whole texture when static.
    pub fn uv_rect(&self) -> UvRect {
        self.animation
            .as_ref()
            .and_then(|anim| {
                anim.current_cell()
                    .map(|cell| UvRect::atlas_cell(cell, anim.cols, anim.rows))
            })
            .unwrap_or(UvRect::FULL)
    }

    /// Draw this entity at its last computed model matrix. Inactive entities draw nothing.
    pub fn render<P: ShaderProgram + ?Sized>(&self, program: &mut P) {
        if !self.active {
            return;
        }
        program.set_model_matrix(&self.model_matrix);
        draw_quad(program, self.texture, self.uv_rect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::SpriteAnimation;
    use glam::{Mat4, Vec3};

    #[derive(Debug, PartialEq)]
    enum Call {
        Model(Mat4),
        Texture(TextureId),
        Attribute(VertexAttribute, Vec<f32>),
        Draw(u32),
        Disable(VertexAttribute),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl ShaderProgram for Recorder {
        fn set_model_matrix(&mut self, matrix: &Mat4) {
            self.calls.push(Call::Model(*matrix));
        }
        fn bind_texture(&mut self, texture: TextureId) {
            self.calls.push(Call::Texture(texture));
        }
        fn set_attribute(&mut self, attribute: VertexAttribute, data: &[f32]) {
            self.calls.push(Call::Attribute(attribute, data.to_vec()));
        }
        fn draw_triangles(&mut self, vertex_count: u32) {
            self.calls.push(Call::Draw(vertex_count));
        }
        fn disable_attribute(&mut self, attribute: VertexAttribute) {
            self.calls.push(Call::Disable(attribute));
        }
    }

    #[test]
    fn static_sprite_draws_full_texture() {
        let e = Entity::platform()
            .with_position(Vec3::new(1.0, 2.0, 0.0))
            .with_texture(TextureId(3));
        let mut rec = Recorder::default();
        e.render(&mut rec);

        assert_eq!(rec.calls.len(), 7);
        assert_eq!(rec.calls[0], Call::Model(Mat4::from_translation(Vec3::new(1.0, 2.0, 0.0))));
        assert_eq!(rec.calls[1], Call::Texture(TextureId(3)));
        assert_eq!(
            rec.calls[3],
            Call::Attribute(
                VertexAttribute::TexCoord,
                vec![0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]
            )
        );
        assert_eq!(rec.calls[4], Call::Draw(6));
    }

    #[test]
    fn animated_sprite_samples_current_cell() {
        let mut anim = SpriteAnimation::new(vec![4, 5, 6], 4, 2);
        anim.frame_index = 1;
        let e = Entity::player().with_animation(anim);

        let uv = e.uv_rect();
        assert_eq!(uv, UvRect::atlas_cell(5, 4, 2));
        assert_eq!((uv.u, uv.v), (0.25, 0.5));
    }

    #[test]
    fn inactive_entity_draws_nothing() {
        let mut e = Entity::player();
        e.kill();
        let mut rec = Recorder::default();
        e.render(&mut rec);
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn renders_through_trait_object() {
        let e = Entity::player();
        let mut rec = Recorder::default();
        let program: &mut dyn ShaderProgram = &mut rec;
        e.render(program);
        assert_eq!(rec.calls.len(), 7);
    }
}
