//! Enemy behavior selectors and tuning.
//!
//! Behaviors themselves live in `systems::ai`; this module only holds the
//! data an enemy carries around.

use serde::{Deserialize, Serialize};

/// Which behavior an enemy runs each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AiType {
    /// Walks left forever.
    #[default]
    Walker,
    /// Waits until the player comes close, then follows them horizontally.
    WaitAndGo,
    /// Lunges toward a nearby player, hopping if standing on the ground line.
    Lurcher,
    /// Drifts toward a nearby player while sinking.
    Glider,
}

/// Sub-state of an enemy behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AiState {
    #[default]
    Idle,
    Walking,
    /// Reserved for `WaitAndGo`; no transition enters it yet.
    Attacking,
    Lurching,
    Gliding,
}

/// `WaitAndGo` thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitAndGoTuning {
    /// Player distance below which the enemy starts walking.
    pub trigger_distance: f32,
}

impl Default for WaitAndGoTuning {
    fn default() -> Self {
        Self { trigger_distance: 3.0 }
    }
}

/// `Lurcher` thresholds and impulses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LurcherTuning {
    pub trigger_distance: f32,
    /// Horizontal movement intent applied on a lunge.
    pub lateral_impulse: f32,
    /// Y position the lurcher must stand at to hop.
    pub ground_height: f32,
    /// How far from `ground_height` still counts as standing on it.
    pub ground_tolerance: f32,
    /// Vertical velocity added by a hop.
    pub jump_impulse: f32,
}

impl Default for LurcherTuning {
    fn default() -> Self {
        Self {
            trigger_distance: 5.0,
            lateral_impulse: 3.0,
            ground_height: -2.25,
            ground_tolerance: 1e-4,
            jump_impulse: 3.0,
        }
    }
}

/// `Glider` thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GliderTuning {
    pub trigger_distance: f32,
    /// Horizontal movement intent while gliding.
    pub lateral_speed: f32,
    /// Vertical velocity removed per glide pulse.
    pub sink_rate: f32,
}

impl Default for GliderTuning {
    fn default() -> Self {
        Self {
            trigger_distance: 5.0,
            lateral_speed: 1.0,
            sink_rate: 0.001,
        }
    }
}

/// Tuning for every behavior. `Walker` has none.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    pub wait_and_go: WaitAndGoTuning,
    pub lurcher: LurcherTuning,
    pub glider: GliderTuning,
}
