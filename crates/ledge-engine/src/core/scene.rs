use crate::api::config::SimConfig;
use crate::components::ai::AiTuning;
use crate::components::animation::DEFAULT_FRAME_DURATION;
use crate::components::entity::Entity;
use crate::core::time::FixedTimestep;
use crate::renderer::traits::ShaderProgram;

/// Outcome of a level so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStatus {
    Playing,
    /// Every enemy has been stomped.
    Won,
    /// The player is dead.
    Lost,
}

/// Animations still at the default speed pick up the level's; explicit ones are kept.
fn apply_frame_duration(entity: &mut Entity, frame_duration: f32) {
    if let Some(anim) = entity.animation.as_mut() {
        if anim.frame_duration == DEFAULT_FRAME_DURATION {
            anim.frame_duration = frame_duration;
        }
    }
}

/// One level: the player plus the platform and enemy lists it plays against.
///
/// Entities are stored in flat Vecs and borrowed by each entity's update for
/// the duration of a step; nothing keeps references between steps.
pub struct Level {
    pub player: Entity,
    pub platforms: Vec<Entity>,
    pub enemies: Vec<Entity>,
    config: SimConfig,
    timestep: FixedTimestep,
    status: LevelStatus,
}

impl Level {
    pub fn new(player: Entity) -> Self {
        Self::with_config(player, SimConfig::default())
    }

    /// Create a level whose `config` fills in defaults for the player and everything added later.
    pub fn with_config(player: Entity, config: SimConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt).with_max_steps(config.max_steps_per_frame);
        let mut level = Self {
            player,
            platforms: Vec::with_capacity(64),
            enemies: Vec::with_capacity(16),
            config,
            timestep,
            status: LevelStatus::Playing,
        };
        apply_frame_duration(&mut level.player, level.config.frame_duration);
        level
    }

    /// Add static geometry.
    pub fn add_platform(&mut self, platform: Entity) {
        self.platforms.push(platform);
    }

    /// Add an enemy. Default AI tuning and animation speed are replaced by the
    /// level's; values set on the entity itself win.
    pub fn add_enemy(&mut self, mut enemy: Entity) {
        if enemy.tuning == AiTuning::default() {
            enemy.tuning = self.config.ai;
        }
        apply_frame_duration(&mut enemy, self.config.frame_duration);
        self.enemies.push(enemy);
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    /// Enemies still active.
    pub fn enemies_remaining(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    /// Run one simulation step: the player first, then every enemy chasing
    /// the player's new position. Platforms never move.
    ///
    /// Does nothing once the level is won or lost.
    pub fn step(&mut self, dt: f32) {
        if self.status != LevelStatus::Playing {
            return;
        }

        self.player.update(dt, None, &self.platforms, &mut self.enemies);
        for enemy in self.enemies.iter_mut() {
            enemy.update(dt, Some(&self.player), &self.platforms, &mut []);
        }

        self.refresh_status();
    }

    /// Feed a variable frame time through the fixed timestep.
    /// Returns the number of steps run.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let steps = self.timestep.accumulate(frame_dt);
        let dt = self.timestep.dt();
        for _ in 0..steps {
            self.step(dt);
        }
        steps
    }

    fn refresh_status(&mut self) {
        let next = if !self.player.active {
            LevelStatus::Lost
        } else if !self.enemies.is_empty() && self.enemies_remaining() == 0 {
            LevelStatus::Won
        } else {
            LevelStatus::Playing
        };

        if next != self.status {
            log::info!(
                "level {:?} with {} enemies stomped",
                next,
                self.player.enemies_killed
            );
            self.status = next;
        }
    }

    /// Draw platforms, then enemies, then the player on top.
    pub fn render<P: ShaderProgram + ?Sized>(&self, program: &mut P) {
        for platform in &self.platforms {
            platform.render(program);
        }
        for enemy in &self.enemies {
            enemy.render(program);
        }
        self.player.render(program);
    }
}
