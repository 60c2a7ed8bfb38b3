// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Only preferences live here. View state (scale, rotation, flips) is never
//! persisted between sessions.
//!
//! # Examples
//!
//! ```no_run
//! use airlens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.fit_margin = Some(0.9);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.fit_margin, Some(0.9));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AirLens";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fraction of the viewport filled by fit-to-window.
    #[serde(default)]
    pub fit_margin: Option<f64>,
    /// Whether a newly opened image is fitted to the viewport.
    #[serde(default)]
    pub fit_on_load: Option<bool>,
    /// Viewport `[width, height]` assumed when the caller gives none.
    #[serde(default)]
    pub default_viewport: Option<(u32, u32)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fit_margin: Some(DEFAULT_FIT_MARGIN),
            fit_on_load: Some(true),
            default_viewport: Some(DEFAULT_VIEWPORT),
        }
    }
}

impl Config {
    /// Effective fit margin; out-of-range values fall back to the default.
    #[must_use]
    pub fn fit_margin(&self) -> f64 {
        match self.fit_margin {
            Some(margin) if margin > 0.0 && margin <= 1.0 => margin,
            _ => DEFAULT_FIT_MARGIN,
        }
    }

    #[must_use]
    pub fn fit_on_load(&self) -> bool {
        self.fit_on_load.unwrap_or(true)
    }

    /// Effective fallback viewport; zero-sized entries fall back to the default.
    #[must_use]
    pub fn default_viewport(&self) -> (u32, u32) {
        match self.default_viewport {
            Some((w, h)) if w > 0 && h > 0 => (w, h),
            _ => DEFAULT_VIEWPORT,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            debug!("ignoring invalid settings at {}: {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
