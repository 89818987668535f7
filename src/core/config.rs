//! Plugin configuration
//!
//! Everything here is read once when the plugin is enabled. Enchantment
//! tables live in their own data file (see `rules::loader`); this file only
//! points at it.

use crate::core::error::{ConfigError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Default permission node required to run `/maxenchant`
pub const DEFAULT_PERMISSION: &str = "maxenchant.use";

/// Configuration for the MaxEnchant plugin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaxEnchantConfig {
    /// Permission node checked before enchanting (ops always pass)
    pub permission: String,

    /// Hex color for message text, `#RRGGBB`
    pub primary_color: String,

    /// Hex color for highlighted values (counts, item names)
    pub secondary_color: String,

    /// Enchantment table file. Built-in vanilla tables are used when unset.
    ///
    /// Relative paths resolve against the config file's directory.
    pub rules: Option<PathBuf>,
}

impl Default for MaxEnchantConfig {
    fn default() -> Self {
        Self {
            permission: DEFAULT_PERMISSION.to_string(),
            primary_color: "#A72BFF".to_string(),
            secondary_color: "#D7A1FF".to_string(),
            rules: None,
        }
    }
}

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color regex is valid"))
}

impl MaxEnchantConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MaxEnchantConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; a relative `rules` path is resolved next to it
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let (Some(rules), Some(dir)) = (config.rules.as_ref(), path.parent()) {
            if rules.is_relative() {
                config.rules = Some(dir.join(rules));
            }
        }
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.permission.trim().is_empty() {
            return Err(ConfigError::EmptyPermission);
        }
        for color in [&self.primary_color, &self.secondary_color] {
            if !hex_color_pattern().is_match(color) {
                return Err(ConfigError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MaxEnchantError;

    #[test]
    fn test_default_is_valid() {
        let config = MaxEnchantConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.permission, "maxenchant.use");
        assert!(config.rules.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MaxEnchantConfig::from_toml_str(r##"primary_color = "#112233""##).unwrap();
        assert_eq!(config.primary_color, "#112233");
        assert_eq!(config.secondary_color, "#D7A1FF");
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = MaxEnchantConfig::from_toml_str(r#"secondary_color = "purple""#).unwrap_err();
        assert!(matches!(
            err,
            MaxEnchantError::Config(ConfigError::InvalidColor(ref c)) if c == "purple"
        ));
    }

    #[test]
    fn test_rejects_empty_permission() {
        let err = MaxEnchantConfig::from_toml_str(r#"permission = "  ""#).unwrap_err();
        assert!(matches!(err, MaxEnchantError::Config(ConfigError::EmptyPermission)));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = MaxEnchantConfig::from_toml_str(r#"colour = "red""#).unwrap_err();
        assert!(matches!(err, MaxEnchantError::TomlError(_)));
    }
}
