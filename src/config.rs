use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::{
    message::TabAlgorithm,
    scroll::{MAX_SCROLL_SPEED, MIN_SCROLL_SPEED},
};

/// Viewer settings persisted between sessions. Loading and saving fail
/// silently back to defaults.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub scroll_speed: f32,
    pub tab_algorithm: TabAlgorithm,
    pub last_open_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_speed: 15.,
            tab_algorithm: TabAlgorithm::Efficient,
            last_open_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(path) = get_config_path()
            && let Ok(data) = std::fs::read_to_string(&path)
            && let Ok(mut config) = serde_json::from_str::<Config>(&data)
        {
            config.scroll_speed = config.scroll_speed.clamp(MIN_SCROLL_SPEED, MAX_SCROLL_SPEED);
            return config;
        }
        Config::default()
    }

    pub fn save(&self) {
        if let Some(path) = get_config_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(data) = serde_json::to_string_pretty(self) {
                let _ = std::fs::write(path, data);
            }
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "stringscribe")
        .map(|dirs| dirs.config_dir().join("settings.json"))
}
