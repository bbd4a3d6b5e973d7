//! One simulation step for a single entity.

use glam::Mat4;

use crate::api::types::EntityType;
use crate::components::entity::Entity;

impl Entity {
    /// Advance this entity by `dt` seconds.
    ///
    /// Order: clear collision flags, AI (enemies) or enemy contacts (player),
    /// animation, jump impulse, velocity, then vertical move and resolve
    /// followed by horizontal move and resolve, and finally the model matrix.
    ///
    /// `player` is the AI target for enemies; pass `None` when updating the
    /// player itself. `enemies` is only read for players. Inactive entities
    /// are left untouched.
    pub fn update(
        &mut self,
        dt: f32,
        player: Option<&Entity>,
        platforms: &[Entity],
        enemies: &mut [Entity],
    ) {
        if !self.active {
            return;
        }

        self.collided.clear();

        match self.entity_type {
            EntityType::Enemy => {
                if let Some(player) = player {
                    self.run_ai(player);
                }
            }
            EntityType::Player => self.resolve_enemy_contacts(enemies),
            EntityType::Platform => {}
        }

        let moving = self.is_moving();
        if let Some(animation) = self.animation.as_mut() {
            animation.tick(dt, moving);
        }

        if self.jump {
            self.velocity.y += self.jump_power;
            self.jump = false;
        }

        // Horizontal velocity comes straight from intent; acceleration then applies to every axis.
        self.velocity.x = self.movement.x * self.speed;
        self.velocity += self.acceleration * dt;

        self.position.y += self.velocity.y * dt;
        self.resolve_collisions_y(platforms);

        self.position.x += self.velocity.x * dt;
        self.resolve_collisions_x(platforms);

        self.model_matrix = Mat4::from_translation(self.position);
    }
}
