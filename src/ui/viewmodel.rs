//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel` and
//! consumed by the renderer. They contain no business logic, only
//! display-ready data: formatted numbers, highlight ranges, selection flags
//! and stable country identifiers.
//!
//! # Layout
//!
//! ```text
//! ┌ header   title, count, theme
//! ├ toolbar  search, region, sort        (all-countries view only)
//! ├ body     Loading | Failed | Empty | List
//! ├ detail   overlay drawn over the body (optional)
//! └ footer   key hints
//! ```
//!
//! # Example
//!
//! ```
//! use countryscope::ui::viewmodel::{Body, EmptyState};
//!
//! let body = Body::Empty(EmptyState {
//!     message: "No countries found. Try a different search.".to_string(),
//!     subtitle: "Press c to clear filters".to_string(),
//! });
//! assert!(body.items().is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Present only in the all-countries view.
    pub toolbar: Option<ToolbarInfo>,

    pub body: Body,

    /// Detail overlay for the country currently opened, if any.
    pub detail: Option<DetailView>,

    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, including the item count.
    pub title: String,

    /// Label of the active display mode (`"Dark"` or `"Light"`).
    pub mode_label: String,
}

/// Filter controls shown above the country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarInfo {
    /// Current search term.
    pub search: String,

    /// Active region, or "All Regions".
    pub region: String,

    /// Active sort order label.
    pub sort: String,

    /// Whether keystrokes currently edit the search term.
    pub typing: bool,
}

/// Main content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The country list has not arrived yet.
    Loading,

    /// The country list could not be loaded.
    Failed(EmptyState),

    /// Nothing to show: no search results or no favorites.
    Empty(EmptyState),

    /// Visible window of the list.
    List {
        items: Vec<DisplayItem>,
        /// Index of the selected item within `items`.
        selected: usize,
    },
}

impl Body {
    /// Items in the visible window; empty for non-list bodies.
    #[must_use]
    pub fn items(&self) -> &[DisplayItem] {
        match self {
            Self::List { items, .. } => items,
            _ => &[],
        }
    }
}

/// Display information for a single country card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Stable country identifier used to route actions back to the item.
    pub id: String,

    pub name: String,

    pub region: String,

    /// Population with thousands separators.
    pub population: String,

    pub is_favorite: bool,

    pub is_selected: bool,

    /// Character ranges of `name` matching the search term.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Centered message with an explanatory subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Detail overlay for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: String,

    /// Common name, used as the overlay title.
    pub title: String,

    /// Flag image URL.
    pub flag: String,

    /// "Basic Information" and "Details" sections, in display order.
    pub sections: Vec<DetailSection>,

    /// Bordering countries' common names; unresolved codes verbatim.
    pub borders: Vec<String>,

    /// Outbound map link.
    pub map_url: String,

    pub is_favorite: bool,
}

/// Titled group of label/value rows in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub title: String,
    pub rows: Vec<(String, String)>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}
