mod loader;

pub use loader::{config_path, load_config, load_config_from};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_checklist")]
    pub show_checklist: bool,
    #[serde(default = "default_show_guidance")]
    pub show_guidance: bool,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_show_checklist() -> bool {
    true
}

fn default_show_guidance() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_checklist: default_show_checklist(),
            show_guidance: default_show_guidance(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Page the encoded answers are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5173/".to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_pretty_json() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            pretty_json: default_pretty_json(),
        }
    }
}
