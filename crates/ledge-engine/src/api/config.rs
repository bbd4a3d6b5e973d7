use serde::{Deserialize, Serialize};

use crate::components::ai::AiTuning;
use crate::components::animation::DEFAULT_FRAME_DURATION;

/// Simulation configuration, usually loaded from a JSON file next to the level data.
///
/// Every field is optional in the JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Seconds each animation frame is held while moving (default: 0.25).
    pub frame_duration: f32,
    /// Maximum fixed steps run for a single frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Enemy behavior thresholds.
    pub ai: AiTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            frame_duration: DEFAULT_FRAME_DURATION,
            max_steps_per_frame: 10,
            ai: AiTuning::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.frame_duration, 0.25);
        assert_eq!(config.ai.wait_and_go.trigger_distance, 3.0);
        assert_eq!(config.ai.lurcher.ground_height, -2.25);
    }

    #[test]
    fn partial_ai_override() {
        let json = r#"{
            "fixed_dt": 0.02,
            "ai": {
                "lurcher": { "trigger_distance": 8.0 },
                "glider": { "sink_rate": 0.5 }
            }
        }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.fixed_dt, 0.02);
        assert_eq!(config.ai.lurcher.trigger_distance, 8.0);
        // Untouched fields in an overridden block keep their defaults.
        assert_eq!(config.ai.lurcher.jump_impulse, 3.0);
        assert_eq!(config.ai.glider.sink_rate, 0.5);
        assert_eq!(config.ai.glider.trigger_distance, 5.0);
        assert_eq!(config.ai.wait_and_go.trigger_distance, 3.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SimConfig::from_json("{ \"fixed_dt\": \"fast\" }").is_err());
    }
}
