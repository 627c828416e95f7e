use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for shelf, stored in the platform config dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Directory holding users.json, categories.json and products.json.
    /// When unset the built-in sample catalog is used.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Styled output when the terminal supports it
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            color: default_color(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| ShelfError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    /// Relative data dirs are resolved against the config dir they came from.
    pub fn resolved_data_dir<P: AsRef<Path>>(&self, config_dir: P) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| {
            if dir.is_relative() {
                config_dir.as_ref().join(dir)
            } else {
                dir.clone()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert!(config.data_dir.is_none());
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShelfConfig {
            data_dir: Some(PathBuf::from("/srv/catalog")),
            color: false,
        };
        config.save(dir.path()).unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, ShelfConfig::default());
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = ShelfConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
    }

    #[test]
    fn test_relative_data_dir_resolves_against_config_dir() {
        let config = ShelfConfig {
            data_dir: Some(PathBuf::from("data")),
            color: true,
        };
        assert_eq!(
            config.resolved_data_dir("/etc/shelf"),
            Some(PathBuf::from("/etc/shelf/data"))
        );
    }
}
