//! Theme configuration for panject
//!
//! Provides configurable colors for the grid, indicator and overlays.
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/panject/theme.yaml

use iced::Color;
use panject_widgets::GridPalette;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root theme configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Grid colors
    pub grid: GridColors,
}

/// Grid color configuration
///
/// Colors are specified as hex strings (e.g., "#3B82F6")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridColors {
    pub background: String,
    pub frame: String,
    pub cell: String,
    pub reparatron: String,
    pub ezoptron: String,
    pub claimed: String,
    pub point: String,
    pub badge: String,
    pub status_disc: String,
}

impl Default for GridColors {
    fn default() -> Self {
        Self {
            background: "#6B7280".to_string(), // Gray
            frame: "#374151".to_string(),      // Dark gray
            cell: "#FFFFFF".to_string(),
            reparatron: "#EF4444".to_string(), // Red
            ezoptron: "#22C55E".to_string(),   // Green
            claimed: "#FFA500".to_string(),    // Orange
            point: "#3B82F6".to_string(),      // Blue
            badge: "#FFFFFF".to_string(),
            status_disc: "#EF4444".to_string(),
        }
    }
}

impl GridColors {
    /// Convert to a palette, falling back to the default color per invalid entry
    pub fn to_palette(&self) -> GridPalette {
        let d = GridPalette::DEFAULT;
        GridPalette {
            background: parse_hex_color(&self.background).unwrap_or(d.background),
            frame: parse_hex_color(&self.frame).unwrap_or(d.frame),
            cell: parse_hex_color(&self.cell).unwrap_or(d.cell),
            reparatron: parse_hex_color(&self.reparatron).unwrap_or(d.reparatron),
            ezoptron: parse_hex_color(&self.ezoptron).unwrap_or(d.ezoptron),
            claimed: parse_hex_color(&self.claimed).unwrap_or(d.claimed),
            point: parse_hex_color(&self.point).unwrap_or(d.point),
            badge: parse_hex_color(&self.badge).unwrap_or(d.badge),
            status_disc: parse_hex_color(&self.status_disc).unwrap_or(d.status_disc),
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        log::warn!("Invalid hex color '{}', using default", hex);
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Some(Color::from_rgb8(r, g, b)),
        _ => {
            log::warn!("Invalid hex color '{}', using default", hex);
            None
        }
    }
}

/// Get the default theme file path
///
/// Returns: ~/.config/panject/theme.yaml
pub fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("panject")
        .join("theme.yaml")
}

/// Load theme.yaml; missing or malformed files give the default palette
pub fn load_theme(path: &Path) -> ThemeConfig {
    crate::config::read_yaml_or_default(path, "theme")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#FF0000").unwrap();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.0);

        let color = parse_hex_color("00FF00").unwrap();
        assert_eq!(color.g, 1.0);
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert!(parse_hex_color("#FFF").is_none());
        assert!(parse_hex_color("#GG0000").is_none());
        assert!(parse_hex_color("#ÄÄÄ").is_none());
    }

    #[test]
    fn test_invalid_entry_falls_back_per_field() {
        let colors = GridColors {
            point: "not-a-color".to_string(),
            reparatron: "#000000".to_string(),
            ..GridColors::default()
        };
        let palette = colors.to_palette();
        assert_eq!(palette.point, GridPalette::DEFAULT.point);
        assert_eq!(palette.reparatron, Color::from_rgb8(0, 0, 0));
    }

    #[test]
    fn test_missing_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_theme(&dir.path().join("theme.yaml")), ThemeConfig::default());
    }

    #[test]
    fn test_partial_theme_yaml() {
        let config: ThemeConfig = serde_yaml::from_str("grid:\n  point: \"#112233\"\n").unwrap();
        assert_eq!(config.grid.point, "#112233");
        assert_eq!(config.grid.cell, "#FFFFFF");
    }
}
