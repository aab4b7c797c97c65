//! User configuration, read from `~/.carousel-tui/config.json`
//!
//! Every field has a default, so a partial file is fine and a missing file
//! means "all defaults".

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of cards in the carousel
    pub image_count: usize,
    /// Gap between cards, in layout units
    pub spacing: f32,
    /// Visible width of neighbouring cards, in layout units
    pub edge_reveal: f32,
    /// Layout units per terminal column
    pub cell_width: f32,
    /// Ring the terminal bell when a swipe changes the page
    pub bell_on_page_change: bool,
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_count: 10,
            spacing: 8.0,
            edge_reveal: 18.0,
            cell_width: 8.0,
            bell_on_page_change: false,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".carousel-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults
    pub fn load() -> Config {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("HOME is not set, using default config");
                Config::default()
            }
        }
    }

    /// Load from an explicit path. Problems are logged, never fatal.
    pub fn load_from(path: &Path) -> Config {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Config::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                return Config::default();
            }
        };

        match serde_json::from_str::<Config>(&contents) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                config.sanitized()
            }
            Err(e) => {
                tracing::warn!("invalid config {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Replace out-of-range geometry with defaults
    fn sanitized(mut self) -> Self {
        let defaults = Config::default();
        if self.spacing < 0.0 {
            self.spacing = defaults.spacing;
        }
        if self.edge_reveal < 0.0 {
            self.edge_reveal = defaults.edge_reveal;
        }
        if self.cell_width <= 0.0 {
            self.cell_width = defaults.cell_width;
        }
        self
    }
}
