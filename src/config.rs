//! Application configuration, read from `config.toml` in the data directory

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Could not write config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct AppConfig {
    /// Overrides the data directory the config was found in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Words drawn at random when a scene has no vocabulary of its own
    pub fallback_sample_size: usize,
    /// Insert the bundled words and scenes into an empty store
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            fallback_sample_size: 5,
            seed_sample_data: true,
        }
    }
}

impl AppConfig {
    /// Load `config.toml` from a directory; a missing file yields the defaults
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, dir: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(dir)?;
        fs::write(dir.join(CONFIG_FILE_NAME), toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Data directory to use, given the directory the config came from
    pub fn resolve_data_dir(&self, config_dir: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| config_dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(temp.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.resolve_data_dir(temp.path()), temp.path());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "fallback_sample_size = 8\n").unwrap();

        let config = AppConfig::load(temp.path()).unwrap();
        assert_eq!(config.fallback_sample_size, 8);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/words")),
            fallback_sample_size: 3,
            seed_sample_data: false,
        };
        config.save(temp.path()).unwrap();

        assert_eq!(AppConfig::load(temp.path()).unwrap(), config);
        assert_eq!(config.resolve_data_dir(temp.path()), PathBuf::from("/tmp/words"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "fallback_sample_size = \"many\"").unwrap();
        assert!(matches!(AppConfig::load(temp.path()), Err(ConfigError::Toml(_))));
    }
}
