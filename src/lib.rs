//! Countryscope: A Zellij plugin for exploring the countries of the world.
//!
//! Countryscope is a terminal multiplexer plugin that provides:
//! - A country list fetched once from the REST Countries API
//! - Case-insensitive search, region filtering and population sorting
//! - Persistent favorites and a dark/light display toggle
//! - A detail overlay with resolved bordering countries and a map link

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Filter/sort engine                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Repository    │
//! │ (ui/)         │   │ (storage/)    │   │ (repository/) │
//! │ - Rendering   │   │ - JSON I/O    │   │ - Request     │
//! │ - Theming     │   │ - Favorites   │   │ - Decoding    │
//! │ - Components  │   │ - Preferences │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Country record and formatting                    │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls the Zellij host. The shim turns host events into
//! [`Event`]s and executes the [`Action`]s that [`handle_event`] returns.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/countryscope.wasm" {
//!         api_url "https://restcountries.com/v3.1/all?fields=name,cca3,region,population"
//!         data_dir "~/.local/share/zellij/countryscope"
//!         dark_theme "catppuccin-mocha"
//!         light_theme "/path/to/theme.toml"
//!         trace_level "countryscope=debug"
//!     }
//! }
//! ```
//!
//! Every option is optional; empty values fall back to the defaults.
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse [`Config`], start logging, build [`AppState`]
//!    through [`initialize`], request web access
//! 2. **Permission Result**: granted issues the single country request,
//!    denied moves the list into its failed state
//! 3. **Fetch Result**: the body is decoded into the country list and the
//!    query is applied
//! 4. **Rendering**: the view model is computed from state and drawn
//!
//! # Example
//!
//! ```rust
//! use countryscope::{handle_event, initialize, Action, Config, Event};
//!
//! let dir = std::env::temp_dir().join("countryscope-doc");
//! let config = Config {
//!     data_dir: dir,
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchCountries(_)]));
//! # Ok::<(), countryscope::CountryscopeError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with 24-bit color

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod repository;
pub mod storage;
pub mod ui;

pub use app::{handle_event, map_key, Action, AppState, Event, InputMode, LoadState, ViewMode};
pub use domain::{Country, CountryscopeError, FetchError, Result};
pub use ui::{Theme, ThemePair};

use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{JsonStorage, KeyValueStore, MemoryStorage};
use ui::theme::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint of the country list request.
    ///
    /// Default: [`repository::DEFAULT_API_URL`]
    pub api_url: String,

    /// Directory holding `countryscope.json` and the log file.
    ///
    /// Paths starting with `~` resolve under `/host`. Default:
    /// [`infrastructure::default_data_dir`]
    pub data_dir: PathBuf,

    /// Built-in theme name or `.toml` path used in dark mode.
    pub dark_theme: String,

    /// Built-in theme name or `.toml` path used in light mode.
    pub light_theme: String,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: repository::DEFAULT_API_URL.to_string(),
            data_dir: infrastructure::default_data_dir(),
            dark_theme: DEFAULT_DARK_THEME.to_string(),
            light_theme: DEFAULT_LIGHT_THEME.to_string(),
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Missing or blank values keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    /// use countryscope::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "~/countries".to_string());
    /// map.insert("trace_level".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.data_dir, PathBuf::from("/host/countries"));
    /// assert_eq!(config.trace_level, "info");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            api_url: value("api_url").unwrap_or(defaults.api_url),
            data_dir: value("data_dir")
                .map(|dir| PathBuf::from(infrastructure::expand_tilde(&dir)))
                .unwrap_or(defaults.data_dir),
            dark_theme: value("dark_theme").unwrap_or(defaults.dark_theme),
            light_theme: value("light_theme").unwrap_or(defaults.light_theme),
            trace_level: value("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

/// Builds the initial [`AppState`] for `config`.
///
/// Favorites and the dark-mode flag are read from
/// `<data_dir>/countryscope.json`. If that file cannot be opened the plugin
/// keeps working on an in-memory store, so nothing persists for the session.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(data_dir = %config.data_dir.display(), "initializing countryscope plugin");

    let path = infrastructure::storage_path(&config.data_dir);
    let storage: Box<dyn KeyValueStore> = match JsonStorage::new(path) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "storage unavailable, favorites will not persist");
            Box::new(MemoryStorage::new())
        }
    };

    let themes = ThemePair {
        dark: Theme::resolve(&config.dark_theme, DEFAULT_DARK_THEME),
        light: Theme::resolve(&config.light_theme, DEFAULT_LIGHT_THEME),
    };

    AppState::new(storage, themes, config.api_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn overrides_are_trimmed() {
        let mut map = BTreeMap::new();
        map.insert("api_url".to_string(), " http://localhost/all ".to_string());
        map.insert("dark_theme".to_string(), "catppuccin-latte".to_string());
        map.insert("light_theme".to_string(), String::new());

        let config = Config::from_zellij(&map);
        assert_eq!(config.api_url, "http://localhost/all");
        assert_eq!(config.dark_theme, "catppuccin-latte");
        assert_eq!(config.light_theme, DEFAULT_LIGHT_THEME);
    }

    #[test]
    fn initialize_uses_configured_themes() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            dark_theme: "catppuccin-latte".to_string(),
            light_theme: "missing.toml".to_string(),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.themes.dark.name, "catppuccin-latte");
        assert_eq!(state.themes.light.name, "catppuccin-latte");
        assert!(!state.dark_mode);
        assert_eq!(state.api_url, repository::DEFAULT_API_URL);
    }
}
