// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::move_selector::BoundsRule;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub move_selection: MoveSelectionConfig,
    pub debug: DebugConfig,
}

/// Static values returned by GET / plus the optional shout sent with moves
#[derive(Debug, Deserialize, Clone)]
pub struct AppearanceConfig {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    #[serde(default)]
    pub shout: Option<String>,
}

/// Move selection behavior
#[derive(Debug, Deserialize, Clone)]
pub struct MoveSelectionConfig {
    /// Which in-bounds predicate the safety filter uses
    #[serde(default)]
    pub bounds_rule: BoundsRule,
    /// Fixed seed for reproducible games. Unset means a thread-local
    /// generator seeded from OS entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

/// Errors raised while loading Snake.toml
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            appearance: AppearanceConfig {
                apiversion: "1".to_string(),
                author: "jayuuza".to_string(),
                color: "#ff6600".to_string(),
                head: "pixel".to_string(),
                tail: "pixel".to_string(),
                shout: None,
            },
            move_selection: MoveSelectionConfig {
                bounds_rule: BoundsRule::Reference,
                rng_seed: None,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_toml_can_be_parsed() {
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(file_config.appearance.apiversion, hardcoded_config.appearance.apiversion);
        assert_eq!(file_config.appearance.author, hardcoded_config.appearance.author);
        assert_eq!(file_config.appearance.color, hardcoded_config.appearance.color);
        assert_eq!(file_config.appearance.head, hardcoded_config.appearance.head);
        assert_eq!(file_config.appearance.tail, hardcoded_config.appearance.tail);
        assert_eq!(file_config.appearance.shout, hardcoded_config.appearance.shout);

        assert_eq!(
            file_config.move_selection.bounds_rule,
            hardcoded_config.move_selection.bounds_rule
        );
        assert_eq!(
            file_config.move_selection.rng_seed,
            hardcoded_config.move_selection.rng_seed
        );

        assert_eq!(file_config.debug.enabled, hardcoded_config.debug.enabled);
        assert_eq!(file_config.debug.log_file_path, hardcoded_config.debug.log_file_path);
    }

    #[test]
    fn test_bounds_rule_parses_both_variants() {
        let strict: MoveSelectionConfig = toml::from_str(r#"bounds_rule = "strict""#).unwrap();
        assert_eq!(strict.bounds_rule, BoundsRule::Strict);

        let reference: MoveSelectionConfig =
            toml::from_str(r#"bounds_rule = "reference""#).unwrap();
        assert_eq!(reference.bounds_rule, BoundsRule::Reference);
    }

    #[test]
    fn test_move_selection_defaults_when_omitted() {
        let section: MoveSelectionConfig = toml::from_str("").unwrap();
        assert_eq!(section.bounds_rule, BoundsRule::Reference);
        assert_eq!(section.rng_seed, None);

        let seeded: MoveSelectionConfig = toml::from_str("rng_seed = 42").unwrap();
        assert_eq!(seeded.rng_seed, Some(42));
    }

    #[test]
    fn test_unknown_bounds_rule_is_rejected() {
        let result = toml::from_str::<MoveSelectionConfig>(r#"bounds_rule = "wrapped""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_returns_read_error() {
        let result = Config::from_file("nonexistent.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
