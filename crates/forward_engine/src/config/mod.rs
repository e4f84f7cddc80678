//! Configuration system
//!
//! Render pipeline configuration with TOML loading, defaults, and
//! validation. All limits that bound per-frame memory live here.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::render::entry::MAX_TRANSFORM_TABLE;
use crate::render::material::MAX_FORWARD_POINT_LIGHTS;
use crate::render::render_list::FORWARD_LIST_CAPACITY;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error while reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A parsed value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Render pipeline configuration
///
/// Bounds the per-frame render list, the per-draw light budget, the
/// transform table, and the fixed tick rate. Defaults match the engine's
/// compiled-in limits; a config file may lower them but never raise them
/// past the packed-array bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of render entries per frame
    pub list_capacity: usize,

    /// Number of nearest point lights packed per draw (1 to 4)
    pub max_point_lights: usize,

    /// Maximum matrices in a skinned/instanced transform table
    pub max_transform_table: usize,

    /// Fixed simulation tick rate in Hz
    pub tick_rate_hz: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            list_capacity: FORWARD_LIST_CAPACITY,
            max_point_lights: MAX_FORWARD_POINT_LIGHTS,
            max_transform_table: MAX_TRANSFORM_TABLE,
            tick_rate_hz: 32,
        }
    }
}

impl RenderConfig {
    /// Parse a configuration from a TOML string and validate it
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file and validate it
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Check every limit against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.list_capacity == 0 {
            return Err(ConfigError::Invalid("list_capacity must be non-zero".into()));
        }
        if self.max_point_lights == 0 || self.max_point_lights > MAX_FORWARD_POINT_LIGHTS {
            return Err(ConfigError::Invalid(format!(
                "max_point_lights must be in 1..={MAX_FORWARD_POINT_LIGHTS}"
            )));
        }
        if self.max_transform_table == 0 || self.max_transform_table > MAX_TRANSFORM_TABLE {
            return Err(ConfigError::Invalid(format!(
                "max_transform_table must be in 1..={MAX_TRANSFORM_TABLE}"
            )));
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::Invalid("tick_rate_hz must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = RenderConfig::from_toml_str(
            "list_capacity = 1024\ntick_rate_hz = 60\n",
        )
        .unwrap();
        assert_eq!(config.list_capacity, 1024);
        assert_eq!(config.tick_rate_hz, 60);
        // Unspecified fields keep their defaults
        assert_eq!(config.max_point_lights, MAX_FORWARD_POINT_LIGHTS);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let result = RenderConfig::from_toml_str("list_capacity = 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_light_budget_above_packed_bound() {
        let result = RenderConfig::from_toml_str("max_point_lights = 5\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = RenderConfig::from_toml_str("list_capacity = \"many\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
