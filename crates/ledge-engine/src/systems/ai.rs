//! Enemy behaviors.
//!
//! Each behavior is a plain function over `(enemy, player)` that only touches the
//! enemy's movement intent, velocity and `ai_state`. Triggered behaviors take
//! two calls to act: the first notices the player and switches state, the
//! next one acts on the new state.

use glam::Vec3;

use crate::components::ai::{AiState, AiType};
use crate::components::entity::Entity;

impl Entity {
    /// Run this enemy's behavior against the player.
    pub fn run_ai(&mut self, player: &Entity) {
        match self.ai_type {
            AiType::Walker => walker(self),
            AiType::WaitAndGo => wait_and_go(self, player),
            AiType::Lurcher => lurcher(self, player),
            AiType::Glider => glider(self, player),
        }
    }
}

fn set_state(enemy: &mut Entity, next: AiState) {
    if enemy.ai_state != next {
        log::debug!("{:?}: {:?} -> {:?}", enemy.ai_type, enemy.ai_state, next);
        enemy.ai_state = next;
    }
}

/// Unit intent pointing at the player's side. Ties go right.
fn toward(enemy: &Entity, player: &Entity) -> Vec3 {
    if player.position.x < enemy.position.x {
        Vec3::NEG_X
    } else {
        Vec3::X
    }
}

fn walker(enemy: &mut Entity) {
    enemy.movement = Vec3::NEG_X;
}

fn wait_and_go(enemy: &mut Entity, player: &Entity) {
    let tuning = enemy.tuning.wait_and_go;
    match enemy.ai_state {
        AiState::Idle => {
            if enemy.position.distance(player.position) < tuning.trigger_distance {
                set_state(enemy, AiState::Walking);
            }
        }
        AiState::Walking => {
            enemy.movement = toward(enemy, player);
        }
        AiState::Attacking => {}
        AiState::Lurching | AiState::Gliding => {}
    }
}

fn lurcher(enemy: &mut Entity, player: &Entity) {
    let tuning = enemy.tuning.lurcher;
    match enemy.ai_state {
        AiState::Idle => {
            if enemy.position.distance(player.position) < tuning.trigger_distance {
                set_state(enemy, AiState::Lurching);
            }
        }
        AiState::Lurching => {
            enemy.movement = toward(enemy, player) * tuning.lateral_impulse;
            if (enemy.position.y - tuning.ground_height).abs() <= tuning.ground_tolerance {
                enemy.velocity.y += tuning.jump_impulse;
            }
            set_state(enemy, AiState::Idle);
        }
        AiState::Walking | AiState::Attacking | AiState::Gliding => {}
    }
}

fn glider(enemy: &mut Entity, player: &Entity) {
    let tuning = enemy.tuning.glider;
    match enemy.ai_state {
        AiState::Idle => {
            if enemy.position.distance(player.position) < tuning.trigger_distance {
                set_state(enemy, AiState::Gliding);
            }
        }
        AiState::Gliding => {
            enemy.movement = toward(enemy, player) * tuning.lateral_speed;
            enemy.velocity.y -= tuning.sink_rate;
            set_state(enemy, AiState::Idle);
        }
        AiState::Walking | AiState::Attacking | AiState::Lurching => {}
    }
}
