//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in Catppuccin themes ship with the plugin, one per display mode.
//! Either slot can be replaced from the plugin configuration with another
//! built-in name or a path to a TOML theme file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark mode default
//! - `catppuccin-latte`: light mode default
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! favorite_fg = "#f9e2af"
//! ```
//!
//! # Example
//!
//! ```
//! use countryscope::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! assert_eq!(Theme::fg(&theme.colors.text_normal), "\u{1b}[38;2;205;214;244m");
//! ```

use crate::domain::error::{CountryscopeError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Built-in theme used in dark mode unless configured otherwise.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Built-in theme used in light mode unless configured otherwise.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings such as `"#cdd6f4"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header and section title color.
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (footer, labels, region column).
    pub text_dim: String,

    /// Separator lines and the detail overlay frame.
    pub border: String,

    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty-list message color.
    pub empty_state_fg: String,

    /// Load failure message color.
    pub error_fg: String,

    /// Favorite marker color.
    pub favorite_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CountryscopeError::Theme`] if the file cannot be read or its
    /// content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CountryscopeError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CountryscopeError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves a configured theme value.
    ///
    /// `value` is either a built-in name or a path to a `.toml` file. Anything
    /// that cannot be loaded falls back to the built-in `fallback` theme.
    ///
    /// # Example
    ///
    /// ```
    /// use countryscope::ui::theme::Theme;
    ///
    /// let theme = Theme::resolve("no-such-theme", "catppuccin-latte");
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn resolve(value: &str, fallback: &str) -> Self {
        if let Some(theme) = Self::from_name(value) {
            return theme;
        }

        if Path::new(value).extension().is_some_and(|ext| ext == "toml") {
            match Self::from_file(value) {
                Ok(theme) => return theme,
                Err(e) => tracing::debug!(theme = %value, error = %e, "custom theme failed to load"),
            }
        } else {
            tracing::debug!(theme = %value, "unknown theme name");
        }

        Self::from_name(fallback).unwrap_or_default()
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the dark-mode default (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the unit tests rule
    /// out.
    fn default() -> Self {
        Self::from_name(DEFAULT_DARK_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

/// The pair of themes the plugin switches between with the dark-mode toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub dark: Theme,
    pub light: Theme,
}

impl ThemePair {
    /// Returns the theme for the requested mode.
    #[must_use]
    pub const fn select(&self, dark_mode: bool) -> &Theme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self {
            dark: Theme::resolve(DEFAULT_DARK_THEME, DEFAULT_DARK_THEME),
            light: Theme::resolve(DEFAULT_LIGHT_THEME, DEFAULT_LIGHT_THEME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn built_in_themes_parse() {
        for name in [DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn custom_theme_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        let loaded = Theme::resolve(path.to_str().unwrap(), DEFAULT_LIGHT_THEME);
        assert_eq!(loaded.name, "custom");
    }

    #[test]
    fn broken_theme_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = 3").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(CountryscopeError::Theme(_))));
        let theme = Theme::resolve(path.to_str().unwrap(), DEFAULT_LIGHT_THEME);
        assert_eq!(theme.name, DEFAULT_LIGHT_THEME);
    }

    #[test]
    fn invalid_hex_renders_white() {
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#000000"), "\u{1b}[48;2;0;0;0m");
    }

    #[test]
    fn pair_selects_by_mode() {
        let pair = ThemePair::default();
        assert_eq!(pair.select(true).name, DEFAULT_DARK_THEME);
        assert_eq!(pair.select(false).name, DEFAULT_LIGHT_THEME);
    }
}
