//! Application configuration
//!
//! Defaults used when family records arrive incomplete, plus the reward
//! ladder and log filter. Every field is optional in the JSON form.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::rewards::{RewardLadder, RewardRung};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config parsed but a value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

fn default_max_tribs() -> u32 {
    100
}

fn default_goal_target() -> u32 {
    500
}

fn default_reward_ladder() -> Vec<RewardRung> {
    vec![
        RewardRung::new(50, "ice cream"),
        RewardRung::new(150, "movie night"),
        RewardRung::new(300, "theme park"),
    ]
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Application-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Personal target used when a member record has none
    #[serde(default = "default_max_tribs")]
    pub default_max_tribs: u32,

    /// Family goal target used when the family record has none
    #[serde(default = "default_goal_target")]
    pub default_goal_target: u32,

    /// Rewards members work toward, ascending by threshold
    #[serde(default = "default_reward_ladder")]
    pub reward_ladder: Vec<RewardRung>,

    /// `tracing` filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_max_tribs: default_max_tribs(),
            default_goal_target: default_goal_target(),
            reward_ladder: default_reward_ladder(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded app config");
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.default_max_tribs == 0 {
            return Err(ConfigError::Invalid(
                "defaultMaxTribs must be positive".to_string(),
            ));
        }
        if self.default_goal_target == 0 {
            return Err(ConfigError::Invalid(
                "defaultGoalTarget must be positive".to_string(),
            ));
        }

        let mut previous = 0;
        for rung in &self.reward_ladder {
            if rung.label.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "reward at threshold {} has an empty label",
                    rung.threshold
                )));
            }
            if rung.threshold <= previous {
                return Err(ConfigError::Invalid(format!(
                    "reward thresholds must be positive and strictly ascending, got {} after {}",
                    rung.threshold, previous
                )));
            }
            previous = rung.threshold;
        }

        Ok(())
    }

    /// The configured reward ladder
    pub fn ladder(&self) -> RewardLadder {
        RewardLadder::new(self.reward_ladder.clone())
    }
}
