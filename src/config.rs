//! Game rules configuration
//!
//! Persisted separately from the high score. Every field has a default, so
//! a missing or malformed config file never blocks a session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// When a block overlapping the player counts as a crush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CrushPolicy {
    /// Only while grounded, and only blocks still falling
    #[default]
    Grounded,
    /// Any overlapping block, grounded or not
    Always,
}

/// How destroying a block is rewarded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScorePolicy {
    /// Fixed reward per block
    Flat { reward: u64 },
    /// Reward scales with how high up the block was destroyed
    Altitude { max_reward: u64 },
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self::Flat { reward: 10 }
    }
}

impl ScorePolicy {
    /// Reward for a block destroyed at `altitude`
    /// (0 = at the floor, 1 = at the top of the screen)
    pub fn reward(&self, altitude: f32) -> u64 {
        match *self {
            ScorePolicy::Flat { reward } => reward,
            ScorePolicy::Altitude { max_reward } => {
                (max_reward as f32 * altitude.clamp(0.0, 1.0)).round() as u64
            }
        }
    }
}

/// Session parameters and rule variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of spawn lanes; screen width = lanes x block size. Must be
    /// at least 1.
    pub lanes: u32,
    /// Ticks between block spawns
    pub spawn_interval_ticks: u32,
    /// Ticks before the player may re-fire after a shot
    pub fire_cooldown_ticks: u32,
    pub crush_policy: CrushPolicy,
    pub score_policy: ScorePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lanes: 8,
            spawn_interval_ticks: TICK_HZ,
            fire_cooldown_ticks: TICK_HZ,
            crush_policy: CrushPolicy::default(),
            score_policy: ScorePolicy::default(),
        }
    }
}

impl Config {
    /// Screen width in pixels
    pub fn screen_width(&self) -> f32 {
        self.lanes as f32 * BLOCK_SIZE
    }

    /// Left edge of the given lane
    pub fn lane_x(&self, lane: u32) -> f32 {
        lane as f32 * BLOCK_SIZE
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed config {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save config to {}: {}", path.display(), err);
                }
            }
            Err(err) => log::warn!("Failed to serialize config: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.lanes, 8);
        assert_eq!(config.screen_width(), 400.0);
        assert_eq!(config.lane_x(0), 0.0);
        assert_eq!(config.lane_x(7), 350.0);
        assert_eq!(config.crush_policy, CrushPolicy::Grounded);
        assert_eq!(config.score_policy, ScorePolicy::Flat { reward: 10 });
    }

    #[test]
    fn test_flat_reward_ignores_altitude() {
        let policy = ScorePolicy::Flat { reward: 10 };
        assert_eq!(policy.reward(0.0), 10);
        assert_eq!(policy.reward(1.0), 10);
    }

    #[test]
    fn test_altitude_reward_scales_and_clamps() {
        let policy = ScorePolicy::Altitude { max_reward: 100 };
        assert_eq!(policy.reward(0.0), 0);
        assert_eq!(policy.reward(0.5), 50);
        assert_eq!(policy.reward(1.0), 100);
        // Out-of-range altitudes clamp
        assert_eq!(policy.reward(2.0), 100);
        assert_eq!(policy.reward(-1.0), 0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config {
            lanes: 10,
            spawn_interval_ticks: 30,
            fire_cooldown_ticks: 45,
            crush_policy: CrushPolicy::Always,
            score_policy: ScorePolicy::Altitude { max_reward: 50 },
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lanes, 10);
        assert_eq!(back.crush_policy, CrushPolicy::Always);
        assert_eq!(back.score_policy, ScorePolicy::Altitude { max_reward: 50 });
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: Config = serde_json::from_str(r#"{"lanes": 12}"#).unwrap();
        assert_eq!(back.lanes, 12);
        assert_eq!(back.spawn_interval_ticks, TICK_HZ);
        assert_eq!(back.crush_policy, CrushPolicy::Grounded);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load(Path::new("definitely/not/here.json"));
        assert_eq!(config.lanes, 8);
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let path = std::env::temp_dir().join("tapioca_config_malformed_test.json");
        fs::write(&path, "{ not json").unwrap();
        let config = Config::load(&path);
        assert_eq!(config.lanes, 8);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = std::env::temp_dir().join("tapioca_config_roundtrip_test.json");
        let config = Config {
            lanes: 6,
            ..Config::default()
        };
        config.save(&path);
        let back = Config::load(&path);
        assert_eq!(back.lanes, 6);
        assert_eq!(back.screen_width(), 300.0);
        let _ = fs::remove_file(&path);
    }
}
