// SPDX-License-Identifier: MPL-2.0
//! Overlay behavior configuration: crate-wide defaults plus loading and
//! saving of user preferences to a `media_controls.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_media_controls::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.fade_out_delay_ms = Some(3_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::{Error, Result};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "media_controls.toml";
const APP_NAME: &str = "MediaControls";

/// Auto-hide delay after a manual show, in milliseconds.
pub const DEFAULT_FADE_OUT_DELAY_MS: u64 = 5_000;

/// Upper bound for the auto-hide delay. Anything longer reads as "never".
pub const MAX_FADE_OUT_DELAY_MS: u64 = 60_000;

/// Accent color of the original widget, a translucent blue.
pub const DEFAULT_MAIN_COLOR: &str = "rgba(12, 83, 175, 0.9)";

/// Persisted overlay preferences. All fields are optional so a partial
/// file (or an older one) still deserializes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fade_out_delay_ms: Option<u64>,
    #[serde(default)]
    pub show_on_start: Option<bool>,
    #[serde(default)]
    pub show_on_load: Option<bool>,
    #[serde(default)]
    pub hide_seekbar: Option<bool>,
    /// Accent color as `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` or
    /// `rgba(r, g, b, a)`.
    #[serde(default)]
    pub main_color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fade_out_delay_ms: Some(DEFAULT_FADE_OUT_DELAY_MS),
            show_on_start: Some(true),
            show_on_load: Some(false),
            hide_seekbar: Some(false),
            main_color: None,
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

/// Parses an accent color string.
///
/// Accepts `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` and `rgba(r, g, b, a)`
/// with channels in 0–255 and alpha in 0.0–1.0, matching the string form
/// hosts were already feeding the original widget.
pub fn parse_color(input: &str) -> Result<Color> {
    let s = input.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex, input);
    }
    if let Some(body) = s
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_channels(body, true, input);
    }
    if let Some(body) = s
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_channels(body, false, input);
    }

    Err(Error::Color(format!("unrecognized color: {input}")))
}

fn parse_hex(hex: &str, original: &str) -> Result<Color> {
    let byte = |range: std::ops::Range<usize>| -> Result<u8> {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| Error::Color(format!("invalid hex color: {original}")))
    };

    match hex.len() {
        6 => Ok(Color::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Ok(Color::from_rgba8(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            f32::from(byte(6..8)?) / 255.0,
        )),
        _ => Err(Error::Color(format!("invalid hex color: {original}"))),
    }
}

fn parse_channels(body: &str, with_alpha: bool, original: &str) -> Result<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(Error::Color(format!("invalid color components: {original}")));
    }

    let channel = |value: &str| -> Result<f32> {
        let parsed: f32 = value
            .parse()
            .map_err(|_| Error::Color(format!("invalid color component: {original}")))?;
        Ok((parsed / 255.0).clamp(0.0, 1.0))
    };

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        let alpha: f32 = parts[3]
            .parse()
            .map_err(|_| Error::Color(format!("invalid alpha component: {original}")))?;
        alpha.clamp(0.0, 1.0)
    } else {
        1.0
    };

    Ok(Color { r, g, b, a })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            fade_out_delay_ms: Some(3_000),
            show_on_start: Some(false),
            show_on_load: Some(true),
            hide_seekbar: Some(true),
            main_color: Some("#0C53AF".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.fade_out_delay_ms, config.fade_out_delay_ms);
        assert_eq!(loaded.show_on_start, config.show_on_start);
        assert_eq!(loaded.show_on_load, config.show_on_load);
        assert_eq!(loaded.hide_seekbar, config.hide_seekbar);
        assert_eq!(loaded.main_color, config.main_color);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not [valid toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded.fade_out_delay_ms, Some(DEFAULT_FADE_OUT_DELAY_MS));
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.fade_out_delay_ms, Some(DEFAULT_FADE_OUT_DELAY_MS));
        assert_eq!(config.show_on_start, Some(true));
        assert_eq!(config.show_on_load, Some(false));
        assert_eq!(config.hide_seekbar, Some(false));
        assert!(config.main_color.is_none());
    }

    #[test]
    fn parse_color_accepts_rgba_form() {
        let color = parse_color(DEFAULT_MAIN_COLOR).expect("default must parse");
        assert!((color.r - 12.0 / 255.0).abs() < f32::EPSILON);
        assert!((color.g - 83.0 / 255.0).abs() < f32::EPSILON);
        assert!((color.b - 175.0 / 255.0).abs() < f32::EPSILON);
        assert!((color.a - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_color_accepts_rgb_form() {
        let color = parse_color("rgb(174, 179, 183)").expect("rgb must parse");
        assert!((color.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_color_accepts_hex_forms() {
        let opaque = parse_color("#0C53AF").expect("hex must parse");
        assert!((opaque.a - 1.0).abs() < f32::EPSILON);

        let translucent = parse_color("#0C53AF80").expect("hex with alpha must parse");
        assert!((translucent.a - 128.0 / 255.0).abs() < 0.01);
    }

    #[test]
    fn parse_color_clamps_out_of_range_channels() {
        let color = parse_color("rgba(300, -5, 83, 2.0)").expect("must parse");
        assert!((color.r - 1.0).abs() < f32::EPSILON);
        assert!(color.g.abs() < f32::EPSILON);
        assert!((color.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_color_rejects_garbage() {
        assert!(parse_color("blue").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("rgba(1, 2)").is_err());
    }
}
