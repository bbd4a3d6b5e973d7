pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::SimConfig;
pub use api::types::{EntityType, TextureId};
pub use components::ai::{AiState, AiTuning, AiType, GliderTuning, LurcherTuning, WaitAndGoTuning};
pub use components::animation::{SpriteAnimation, DEFAULT_FRAME_DURATION};
pub use components::entity::{CollisionFlags, Entity, MIN_EXTENT};
pub use self::core::collision::{axis_gaps, boxes_overlap, penetration};
pub use self::core::scene::{Level, LevelStatus};
pub use self::core::time::FixedTimestep;
pub use renderer::draw_list::{DrawList, QuadInstance};
pub use renderer::quad::{QuadVertex, UvRect, QUAD_POSITIONS, QUAD_VERTEX_COUNT};
pub use renderer::traits::{ShaderProgram, VertexAttribute};
pub use systems::render::draw_quad;
