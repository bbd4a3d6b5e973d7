use glam::{Mat4, Vec2, Vec3};

use crate::api::types::{EntityType, TextureId};
use crate::components::ai::{AiState, AiTuning, AiType};
use crate::components::animation::SpriteAnimation;

/// Smallest collision extent `with_size` accepts.
pub const MIN_EXTENT: f32 = 1e-3;

/// Which sides of an entity touched a platform during the last step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// Fat Entity: player, enemy, and platform share one struct.
///
/// Collision boxes are axis-aligned and centered on `position`. The z
/// component of every vector is carried through but never collides.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Selects the update path.
    pub entity_type: EntityType,
    /// Inactive entities are skipped by update, collision and rendering.
    /// Deactivation is permanent.
    pub active: bool,
    /// Center of the collision box in world space.
    pub position: Vec3,
    /// Movement intent from input or AI. `movement.x * speed` becomes the
    /// horizontal velocity every step.
    pub movement: Vec3,
    /// Constant acceleration (typically gravity).
    pub acceleration: Vec3,
    pub velocity: Vec3,
    /// Horizontal speed per unit of movement intent.
    pub speed: f32,
    /// Collision box width.
    pub width: f32,
    /// Collision box height.
    pub height: f32,
    /// One-shot jump request, consumed by the next update.
    pub jump: bool,
    /// Vertical velocity added when a jump is consumed.
    pub jump_power: f32,
    pub ai_type: AiType,
    pub ai_state: AiState,
    pub tuning: AiTuning,
    /// Platform contacts from the last step only.
    pub collided: CollisionFlags,
    /// Type of the most recent entity this one overlapped.
    pub last_collision: Option<EntityType>,
    /// Atlas animation. `None` draws the whole texture.
    pub animation: Option<SpriteAnimation>,
    pub texture: TextureId,
    /// Translation to `position`, rebuilt at the end of every update.
    pub model_matrix: Mat4,
    /// Stomp counter (player only).
    pub enemies_killed: u32,
}

impl Entity {
    /// Create an active 1x1 entity of the given type at the origin.
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            active: true,
            position: Vec3::ZERO,
            movement: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            velocity: Vec3::ZERO,
            speed: 0.0,
            width: 1.0,
            height: 1.0,
            jump: false,
            jump_power: 0.0,
            ai_type: AiType::default(),
            ai_state: AiState::default(),
            tuning: AiTuning::default(),
            collided: CollisionFlags::default(),
            last_collision: None,
            animation: None,
            texture: TextureId::default(),
            model_matrix: Mat4::IDENTITY,
            enemies_killed: 0,
        }
    }

    pub fn player() -> Self {
        Self::new(EntityType::Player)
    }

    pub fn enemy(ai_type: AiType) -> Self {
        Self {
            ai_type,
            ..Self::new(EntityType::Enemy)
        }
    }

    pub fn platform() -> Self {
        Self::new(EntityType::Platform)
    }

    // -- Builder pattern --

    /// Place the entity. Also rebuilds the model matrix so a freshly built
    /// entity renders in place before its first update.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self.model_matrix = Mat4::from_translation(position);
        self
    }

    /// Set the collision box. Extents below [`MIN_EXTENT`] (including NaN) are clamped up to it.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width.max(MIN_EXTENT);
        self.height = height.max(MIN_EXTENT);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_jump_power(mut self, jump_power: f32) -> Self {
        self.jump_power = jump_power;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_animation(mut self, animation: SpriteAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_tuning(mut self, tuning: AiTuning) -> Self {
        self.tuning = tuning;
        self
    }

    // -- State --

    /// Ask for a jump on the next update.
    pub fn request_jump(&mut self) {
        self.jump = true;
    }

    /// Deactivate for good.
    pub fn kill(&mut self) {
        self.active = false;
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) / 2.0
    }

    pub fn is_moving(&self) -> bool {
        self.movement.length() != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_builder_sets_type_and_ai() {
        let e = Entity::enemy(AiType::Glider)
            .with_position(Vec3::new(2.0, -1.0, 0.0))
            .with_size(0.8, 0.6);
        assert_eq!(e.entity_type, EntityType::Enemy);
        assert_eq!(e.ai_type, AiType::Glider);
        assert_eq!(e.ai_state, AiState::Idle);
        assert_eq!(e.half_extents(), Vec2::new(0.4, 0.3));
        assert_eq!(e.model_matrix.w_axis.truncate(), Vec3::new(2.0, -1.0, 0.0));
        assert!(e.active);
    }

    #[test]
    fn degenerate_sizes_are_clamped_positive() {
        let e = Entity::platform().with_size(0.0, -2.0);
        assert_eq!((e.width, e.height), (MIN_EXTENT, MIN_EXTENT));
        let n = Entity::platform().with_size(f32::NAN, 3.0);
        assert_eq!((n.width, n.height), (MIN_EXTENT, 3.0));
    }

    #[test]
    fn flags_clear_resets_every_side() {
        let mut flags = CollisionFlags {
            top: true,
            bottom: true,
            left: false,
            right: true,
        };
        assert!(flags.any());
        flags.clear();
        assert_eq!(flags, CollisionFlags::default());
        assert!(!flags.any());
    }

    #[test]
    fn jump_request_and_kill() {
        let mut p = Entity::player().with_jump_power(5.0);
        p.request_jump();
        assert!(p.jump);
        p.kill();
        assert!(!p.active);
    }
}
