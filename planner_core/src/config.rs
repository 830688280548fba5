//! Configuration file support for wplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wplan/config.toml`.

use crate::finisher::FinisherPlacement;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Exercise catalog source
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// CSV file with Title, Type and BodyPart columns; built-in catalog when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Plan generation parameters
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PlannerConfig {
    /// Fixed seed for reproducible plans; fresh entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub finisher_placement: FinisherPlacement,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("neither a config directory nor HOME is available".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("wplan").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.catalog.path.is_none());
        assert!(config.planner.seed.is_none());
        assert_eq!(config.planner.finisher_placement, FinisherPlacement::Literal);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[planner]
seed = 42
finisher_placement = "append"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.planner.seed, Some(42));
        assert_eq!(config.planner.finisher_placement, FinisherPlacement::Append);
        assert!(config.catalog.path.is_none()); // default
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("/data/exercises.csv"));
        config.planner.seed = Some(7);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.catalog.path, config.catalog.path);
        assert_eq!(loaded.planner.seed, Some(7));
    }

    #[test]
    fn test_unknown_placement_is_rejected() {
        let toml_str = r#"
[planner]
finisher_placement = "sideways"
"#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
