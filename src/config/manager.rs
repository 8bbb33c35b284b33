use super::defaults::{default_config, get_config_file_path};
use super::{Config, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub struct ConfigManager;

impl ConfigManager {
    pub fn load_or_default() -> Result<Config> {
        Self::load_or_default_with_path(None)
    }

    /// Reads the config file if there is one. A missing file is not written;
    /// the defaults are used as-is.
    pub fn load_or_default_with_path(config_path: Option<&Path>) -> Result<Config> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_config_file_path(),
        };

        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config");
            Self::load_from_file(&config_path)
        } else {
            debug!(path = %config_path.display(), "no config file, using defaults");
            let config = default_config();
            config.validate()?;
            Ok(config)
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }

    /// Overwrites the config file with the defaults and returns them.
    pub fn reset_to_path(path: &Path) -> Result<Config> {
        let config = default_config();
        Self::save_to_path(&config, path)?;
        Ok(config)
    }
}
