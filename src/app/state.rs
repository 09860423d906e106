//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single explicit state object of the
//! plugin. The event handler mutates it; the renderer reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # State Components
//!
//! - **Countries**: the full list, fetched once, never mutated afterwards
//! - **Filtered**: identifiers of the all-countries view, in display order
//! - **Favorites**: the persisted favorites store
//! - **Query**: search term, region and sort order (session-only)
//! - **Modes**: input mode, view mode, load state and the open detail overlay
//! - **Selection**: cursor position within the active list
//!
//! # Example
//!
//! ```
//! use countryscope::app::AppState;
//! use countryscope::storage::MemoryStorage;
//! use countryscope::ui::theme::ThemePair;
//!
//! let state = AppState::new(Box::new(MemoryStorage::new()), ThemePair::default(), "http://localhost");
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.toolbar.is_some());
//! ```

use super::detail::{self, ResolvedCountry};
use super::modes::{InputMode, LoadState, ViewMode};
use super::query::{self, QueryState};
use crate::domain::{format_area, format_population, Country, FavoriteEntry};
use crate::storage::{self, FavoritesStore, KeyValueStore};
use crate::ui::theme::{Theme, ThemePair};
use crate::ui::viewmodel::{
    Body, DetailSection, DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ToolbarInfo,
    UIViewModel,
};

/// Shown in the all-countries view when the fetch failed.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load countries. Please try again later.";

/// Shown when the query matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No countries found. Try a different search.";

/// Shown in the favorites view when the store is empty.
pub const NO_FAVORITES_MESSAGE: &str = "You haven't added any favorites yet.";

/// Title of the favorites view.
pub const FAVORITES_TITLE: &str = "Your Favorite Countries";

const NOT_AVAILABLE: &str = "N/A";

/// Rows used by header, column headers, footer and their separators.
const CHROME_ROWS: usize = 5;

/// Extra rows used by the toolbar and its separator.
const TOOLBAR_ROWS: usize = 2;

/// Width of the name column in list rows.
pub const NAME_COLUMN_WIDTH: usize = 36;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Full country list in fetch order.
    pub countries: Vec<Country>,

    /// Identifiers of the all-countries view, recomputed by
    /// [`AppState::apply_query`].
    pub filtered: Vec<String>,

    /// Distinct regions of the loaded list, sorted, for region cycling.
    pub regions: Vec<String>,

    pub favorites: FavoritesStore,

    /// Backend holding favorites and preferences.
    storage: Box<dyn KeyValueStore>,

    pub query: QueryState,

    pub view_mode: ViewMode,

    pub input_mode: InputMode,

    /// Zero-based selection within the active list.
    pub selected_index: usize,

    pub load_state: LoadState,

    /// Whether the fetch action has already been emitted.
    pub fetch_requested: bool,

    /// Identifier of the country shown in the detail overlay.
    pub detail: Option<String>,

    pub dark_mode: bool,

    pub themes: ThemePair,

    /// Endpoint of the country list request.
    pub api_url: String,
}

impl AppState {
    /// Creates the initial state, reading favorites and the dark-mode flag
    /// from `storage`.
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>, themes: ThemePair, api_url: impl Into<String>) -> Self {
        let favorites = FavoritesStore::load(storage.as_ref());
        let dark_mode = storage::load_dark_mode(storage.as_ref());

        tracing::debug!(favorites = favorites.len(), dark_mode, "app state created");

        Self {
            countries: vec![],
            filtered: vec![],
            regions: vec![],
            favorites,
            storage,
            query: QueryState::default(),
            view_mode: ViewMode::AllCountries,
            input_mode: InputMode::Normal,
            selected_index: 0,
            load_state: LoadState::Loading,
            fetch_requested: false,
            detail: None,
            dark_mode,
            themes,
            api_url: api_url.into(),
        }
    }

    /// Theme for the active display mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.themes.select(self.dark_mode)
    }

    /// Looks up a loaded country by identifier.
    #[must_use]
    pub fn country(&self, id: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.cca3 == id)
    }

    /// Stores the fetched list and marks the load as finished.
    pub fn set_countries(&mut self, countries: Vec<Country>) {
        tracing::info!(count = countries.len(), "countries loaded");
        self.regions = query::regions(&countries);
        self.countries = countries;
        self.load_state = LoadState::Loaded;
        self.apply_query();
    }

    /// Moves to the terminal failure state. The country list stays empty.
    pub fn fail_load(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(reason = %reason, "country list unavailable");
        self.countries.clear();
        self.filtered.clear();
        self.regions.clear();
        self.load_state = LoadState::Failed(reason);
        self.clamp_selection();
    }

    /// Recomputes the all-countries view from the query and clamps the
    /// selection.
    pub fn apply_query(&mut self) {
        self.filtered = query::apply(&self.countries, &self.query)
            .into_iter()
            .map(|c| c.cca3.clone())
            .collect();
        self.clamp_selection();
    }

    /// Number of items in the active list.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        match self.view_mode {
            ViewMode::AllCountries => self.filtered.len(),
            ViewMode::Favorites => self.favorites.len(),
        }
    }

    /// Identifier of the selected item in the active list.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        match self.view_mode {
            ViewMode::AllCountries => self.filtered.get(self.selected_index).map(String::as_str),
            ViewMode::Favorites => self
                .favorites
                .entries()
                .get(self.selected_index)
                .map(|e| e.id.as_str()),
        }
    }

    /// Moves the cursor down, wrapping to the top. No-op on an empty list.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom. No-op on an empty list.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
    }

    /// Toggles the favorite state of the country in the detail overlay, or of
    /// the selected item when no overlay is open.
    ///
    /// A country missing from the loaded list can only be removed. Returns
    /// `true` if the favorites changed.
    pub fn toggle_favorite(&mut self) -> bool {
        let Some(id) = self.detail.clone().or_else(|| self.selected_id().map(str::to_string)) else {
            tracing::debug!("no item to toggle");
            return false;
        };

        let changed = if let Some(country) = self.countries.iter().find(|c| c.cca3 == id) {
            self.favorites.toggle(country, self.storage.as_mut());
            true
        } else if self.favorites.is_favorite(&id) {
            self.favorites.remove(&id, self.storage.as_mut())
        } else {
            tracing::debug!(id = %id, "toggle target not found");
            false
        };

        if changed {
            self.clamp_selection();
        }
        changed
    }

    /// Opens the detail overlay for the selected item.
    ///
    /// Returns `false` when nothing is selected or the country is not in the
    /// loaded list.
    pub fn open_detail(&mut self) -> bool {
        let Some(id) = self.selected_id().map(str::to_string) else {
            return false;
        };
        if detail::resolve(&id, &self.countries).is_none() {
            return false;
        }

        tracing::debug!(id = %id, "detail opened");
        self.detail = Some(id);
        true
    }

    /// Closes the detail overlay. Returns `false` if none was open.
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }

    /// Switches between the all-countries and favorites views.
    ///
    /// The query is kept for when the all-countries view comes back.
    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggle();
        self.input_mode = InputMode::Normal;
        self.detail = None;
        self.selected_index = 0;
        tracing::debug!(view_mode = ?self.view_mode, "view switched");
    }

    /// Flips dark mode and persists the preference.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        storage::save_dark_mode(self.storage.as_mut(), self.dark_mode);
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract header, column headers, footer, separators and toolbar
    ///    from `rows`
    /// 2. Center the window on the selected index
    /// 3. Shift the window back if it runs past the end of the list
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let toolbar = self.compute_toolbar();
        let available_rows = self.calculate_available_rows(rows, toolbar.is_some());

        UIViewModel {
            header: self.compute_header(),
            body: self.compute_body(available_rows, cols),
            detail: self.compute_detail(),
            footer: self.compute_footer(),
            toolbar,
        }
    }

    fn compute_body(&self, available_rows: usize, cols: usize) -> Body {
        match self.view_mode {
            ViewMode::AllCountries => match &self.load_state {
                LoadState::Loading => Body::Loading,
                LoadState::Failed(_) => Body::Failed(EmptyState {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                    subtitle: "Your favorites are still available with Tab".to_string(),
                }),
                LoadState::Loaded if self.filtered.is_empty() => Body::Empty(EmptyState {
                    message: NO_RESULTS_MESSAGE.to_string(),
                    subtitle: "Press c to clear filters".to_string(),
                }),
                LoadState::Loaded => {
                    let (start, end) = self.window(self.filtered.len(), available_rows);
                    let items = self.filtered[start..end]
                        .iter()
                        .enumerate()
                        .filter_map(|(offset, id)| {
                            let country = self.country(id)?;
                            Some(self.country_item(country, start + offset, cols))
                        })
                        .collect();
                    Body::List {
                        items,
                        selected: self.selected_index.saturating_sub(start),
                    }
                }
            },
            ViewMode::Favorites if self.favorites.is_empty() => Body::Empty(EmptyState {
                message: NO_FAVORITES_MESSAGE.to_string(),
                subtitle: "Press f on a country to add it".to_string(),
            }),
            ViewMode::Favorites => {
                let entries = self.favorites.entries();
                let (start, end) = self.window(entries.len(), available_rows);
                let items = entries[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, entry)| self.favorite_item(entry, start + offset))
                    .collect();
                Body::List {
                    items,
                    selected: self.selected_index.saturating_sub(start),
                }
            }
        }
    }

    /// Returns the `[start, end)` window of a list of `len` items that keeps
    /// the selection visible.
    fn window(&self, len: usize, available_rows: usize) -> (usize, usize) {
        let available_rows = available_rows.max(1);
        let mut start = self.selected_index.saturating_sub(available_rows / 2);
        let end = (start + available_rows).min(len);

        if end - start < available_rows {
            start = end.saturating_sub(available_rows);
        }
        (start, end)
    }

    fn country_item(&self, country: &Country, absolute_idx: usize, cols: usize) -> DisplayItem {
        let name = truncate(&country.name.common, NAME_COLUMN_WIDTH.min(cols.max(4)) - 1);
        let name_len = name.chars().count();

        let highlight_ranges = query::match_ranges(&country.name.common, &self.query.search)
            .into_iter()
            .filter(|&(start, _)| start < name_len)
            .map(|(start, end)| (start, end.min(name_len)))
            .collect();

        DisplayItem {
            id: country.cca3.clone(),
            name,
            region: country.region.clone(),
            population: format_population(country.population),
            is_favorite: self.favorites.is_favorite(&country.cca3),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn favorite_item(&self, entry: &FavoriteEntry, absolute_idx: usize) -> DisplayItem {
        DisplayItem {
            id: entry.id.clone(),
            name: truncate(&entry.name, NAME_COLUMN_WIDTH - 1),
            region: entry.region.clone(),
            population: format_population(entry.population),
            is_favorite: true,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges: vec![],
        }
    }

    fn compute_detail(&self) -> Option<DetailView> {
        let id = self.detail.as_deref()?;
        let ResolvedCountry { country, borders } = detail::resolve(id, &self.countries)?;

        let official = if country.name.official.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            country.name.official.clone()
        };

        let basic = DetailSection {
            title: "Basic Information".to_string(),
            rows: vec![
                ("Official Name".to_string(), official),
                (
                    "Capital".to_string(),
                    country.capital.first().cloned().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                ),
                ("Region".to_string(), country.region.clone()),
                (
                    "Subregion".to_string(),
                    country.subregion.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                ),
                (
                    "Area".to_string(),
                    country.area.map_or_else(|| NOT_AVAILABLE.to_string(), format_area),
                ),
                ("Population".to_string(), format_population(country.population)),
            ],
        };

        let details = DetailSection {
            title: "Details".to_string(),
            rows: vec![
                ("Languages".to_string(), join_or_na(country.languages.values())),
                (
                    "Currencies".to_string(),
                    join_or_na(country.currencies.values().map(|c| &c.name)),
                ),
                ("Timezones".to_string(), join_or_na(country.timezones.iter())),
            ],
        };

        Some(DetailView {
            id: country.cca3.clone(),
            title: country.name.common.clone(),
            flag: country.flags.png.clone(),
            sections: vec![basic, details],
            borders,
            map_url: country.map_url(),
            is_favorite: self.favorites.is_favorite(&country.cca3),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.view_mode {
            ViewMode::AllCountries => format!(" Countries ({}) ", self.filtered.len()),
            ViewMode::Favorites => format!(" {FAVORITES_TITLE} ({}) ", self.favorites.len()),
        };
        HeaderInfo {
            title,
            mode_label: if self.dark_mode { "Dark" } else { "Light" }.to_string(),
        }
    }

    fn compute_toolbar(&self) -> Option<ToolbarInfo> {
        if self.view_mode != ViewMode::AllCountries {
            return None;
        }
        Some(ToolbarInfo {
            search: self.query.search.clone(),
            region: self.query.region_label().to_string(),
            sort: self.query.sort.label().to_string(),
            typing: self.input_mode == InputMode::Search,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.detail.is_some() {
            "f: favorite  Esc/q: close"
        } else {
            match (self.input_mode, self.view_mode) {
                (InputMode::Search, _) => "Type to search  Backspace: delete  Enter/Esc: done",
                (InputMode::Normal, ViewMode::AllCountries) => {
                    "j/k: navigate  /: search  r/R: region  s: sort  c: clear  f: favorite  Enter: details  Tab: favorites  d: theme  q: quit"
                }
                (InputMode::Normal, ViewMode::Favorites) => {
                    "j/k: navigate  f: remove  Enter: details  Tab: all countries  d: theme  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    const fn calculate_available_rows(&self, total_rows: usize, has_toolbar: bool) -> usize {
        let chrome = if has_toolbar { CHROME_ROWS + TOOLBAR_ROWS } else { CHROME_ROWS };
        total_rows.saturating_sub(chrome)
    }
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with
/// an ellipsis.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

fn join_or_na<'a>(values: impl Iterator<Item = &'a String>) -> String {
    let joined = values.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        joined
    }
}
