// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! host-tunable gesture settings to a `settings.toml` file.
//!
//! All fields are optional; a missing field falls back to the constants
//! in [`defaults`], so an absent or partial file keeps the stock tuning.
//!
//! # Examples
//!
//! ```no_run
//! use image_zoom::config;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Loosen the drag dead zone
//! config.drag_dead_zone = Some(14.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::{
    DRAG_DEAD_ZONE, MAP_HEIGHT_DIVISOR, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE, PANEL_ANIMATION_MS,
    SCALE_SNAP_TOLERANCE,
};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ImageZoom";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Vertical translation a drag must exceed before the state machine acts.
    #[serde(default)]
    pub drag_dead_zone: Option<f32>,
    /// Panel reveal/close animation duration, in milliseconds.
    #[serde(default)]
    pub panel_animation_ms: Option<u64>,
    /// Distance from the maximum scale treated as fully zoomed.
    #[serde(default)]
    pub scale_snap_tolerance: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drag_dead_zone: Some(DRAG_DEAD_ZONE),
            panel_animation_ms: Some(PANEL_ANIMATION_MS),
            scale_snap_tolerance: Some(SCALE_SNAP_TOLERANCE),
        }
    }
}

impl Config {
    /// Resolved drag dead zone.
    #[must_use]
    pub fn dead_zone(&self) -> f32 {
        self.drag_dead_zone.unwrap_or(DRAG_DEAD_ZONE)
    }

    /// Resolved panel animation duration.
    #[must_use]
    pub fn panel_animation(&self) -> Duration {
        Duration::from_millis(self.panel_animation_ms.unwrap_or(PANEL_ANIMATION_MS))
    }

    /// Resolved near-maximum zoom tolerance.
    #[must_use]
    pub fn snap_tolerance(&self) -> f32 {
        self.scale_snap_tolerance.unwrap_or(SCALE_SNAP_TOLERANCE)
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
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
