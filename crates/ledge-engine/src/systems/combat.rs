//! Player-vs-enemy contact: stomps kill enemies, every other touch kills the player.

use crate::api::types::EntityType;
use crate::components::entity::Entity;

impl Entity {
    /// Check a player against every enemy.
    ///
    /// Falling onto an enemy (`velocity.y < 0`) bounces the player out of it
    /// vertically, stops the fall, deactivates the enemy and bumps
    /// `enemies_killed`. Any other contact deactivates the player. Does
    /// nothing for non-player entities.
    pub fn resolve_enemy_contacts(&mut self, enemies: &mut [Entity]) {
        if self.entity_type != EntityType::Player {
            return;
        }

        for enemy in enemies.iter_mut() {
            if !self.check_collision(enemy) {
                continue;
            }

            if self.velocity.y < 0.0 {
                self.position.y += self.penetration_y(enemy);
                self.velocity.y = 0.0;
                enemy.kill();
                self.enemies_killed += 1;
                log::debug!(
                    "stomped {:?} enemy ({} total)",
                    enemy.ai_type,
                    self.enemies_killed
                );
            } else {
                self.kill();
                log::debug!("player killed by {:?} enemy", enemy.ai_type);
            }
        }
    }
}
