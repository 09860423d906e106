//! Mode and lifecycle enums for the application.
//!
//! - [`InputMode`] decides how key presses are interpreted
//! - [`ViewMode`] decides which list is displayed
//! - [`LoadState`] tracks the one-shot country fetch
//!
//! # Example
//!
//! ```
//! use countryscope::app::modes::{InputMode, LoadState, ViewMode};
//!
//! let view = ViewMode::default().toggle();
//! assert_eq!(view, ViewMode::Favorites);
//! assert_eq!(InputMode::default(), InputMode::Normal);
//! assert!(!LoadState::default().is_terminal());
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command keys.
    #[default]
    Normal,

    /// Printable keys edit the search term. `Enter` and `Esc` leave the mode
    /// and keep the term.
    Search,
}

/// Which list the body displays.
///
/// Exactly one mode is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Filtered and sorted country list driven by the query state.
    #[default]
    AllCountries,

    /// The favorites store contents in insertion order. The query state is
    /// ignored and the toolbar is hidden.
    Favorites,
}

impl ViewMode {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::AllCountries => Self::Favorites,
            Self::Favorites => Self::AllCountries,
        }
    }
}

/// Lifecycle of the single country fetch.
///
/// `Loaded` and `Failed` are terminal: the list is fetched once per plugin
/// load and never refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for permission or for the host to answer.
    #[default]
    Loading,

    Loaded,

    /// The fetch failed; holds the reason for the log.
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}
