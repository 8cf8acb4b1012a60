use super::Config;
use crate::Result;
use std::path::{Path, PathBuf};

/// Load configuration from file or return defaults
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path())
}

/// Load configuration from `path`, creating its directory when the file is missing
pub fn load_config_from(path: &Path) -> Result<Config> {
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    } else {
        // Create default config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Config::default())
    }
}

/// Get the path to the config file
pub fn config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "prompt-refinery")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            PathBuf::from(shellexpand::tilde("~/.config/prompt-refinery/config.toml").as_ref())
        })
}
