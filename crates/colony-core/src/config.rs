//! Role Configuration
//!
//! All role tuning is loaded from a TOML configuration file. Every field
//! has a default, so an empty file (or no file at all) yields the stock
//! behavior.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use colony_types::{DELIVER_PATH_STROKE, GATHER_PATH_STROKE};

use crate::targeting::TargetStrategy;

/// Complete role configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RolesConfig {
    /// Harvester role settings
    pub harvester: HarvesterConfig,
    /// Combat role settings
    pub combat: CombatConfig,
}

impl RolesConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Harvester role configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvesterConfig {
    /// How the harvester picks among sources and delivery targets
    pub strategy: TargetStrategy,
    /// Path stroke color when walking toward a source
    pub gather_path_stroke: String,
    /// Path stroke color when walking toward a delivery target
    pub deliver_path_stroke: String,
}

impl Default for HarvesterConfig {
    fn default() -> Self {
        Self {
            strategy: TargetStrategy::FirstInOrder,
            gather_path_stroke: GATHER_PATH_STROKE.to_string(),
            deliver_path_stroke: DELIVER_PATH_STROKE.to_string(),
        }
    }
}

/// Combat role configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// How the fighter picks among hostiles
    pub strategy: TargetStrategy,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r##"# Role Configuration

[harvester]
strategy = "first_in_order"
gather_path_stroke = "#ffaa00"
deliver_path_stroke = "#ffffff"

[combat]
strategy = "first_in_order"
"##
    .to_string()
}
