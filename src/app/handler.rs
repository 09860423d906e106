//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the plugin shim (keys, permissions, fetch results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for the shim to execute
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `ExitSearch`
//! - **Filters**: `NextRegion`, `PreviousRegion`, `CycleSort`, `ClearFilters`
//! - **Items**: `ToggleFavorite`, `OpenDetails`, `CloseDetails`
//! - **Display**: `ToggleView`, `ToggleDarkMode`, `Escape`, `CloseFocus`
//! - **System**: `PermissionsGranted`, `PermissionsDenied`, `CountriesFetched`
//!
//! # Example
//!
//! ```
//! use countryscope::app::{handle_event, Action, AppState, Event};
//! use countryscope::storage::MemoryStorage;
//! use countryscope::ui::theme::ThemePair;
//!
//! let mut state = AppState::new(Box::new(MemoryStorage::new()), ThemePair::default(), "http://localhost");
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions[0], Action::FetchCountries(_)));
//! # Ok::<(), countryscope::CountryscopeError>(())
//! ```

use super::modes::{InputMode, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::repository::{self, CountryRequest};

/// Events triggered by user input or by the host.
///
/// The handler processes them sequentially, so state transitions are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the detail overlay if open, otherwise hides the plugin.
    CloseFocus,
    /// Starts editing the search term.
    SearchMode,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character of the search term.
    Backspace,
    /// Stops editing the search term, keeping it.
    ExitSearch,
    /// Closes the detail overlay if open, otherwise clears the search term.
    Escape,

    NextRegion,
    PreviousRegion,
    /// Advances the sort order `None -> Ascending -> Descending -> None`.
    CycleSort,
    /// Resets search, region and sort.
    ClearFilters,

    /// Toggles the favorite state of the open or selected country.
    ToggleFavorite,
    OpenDetails,
    CloseDetails,

    /// Switches between the all-countries and favorites views.
    ToggleView,
    ToggleDarkMode,

    /// Web access was granted; the fetch may start.
    PermissionsGranted,
    /// Web access was denied; the list can never load.
    PermissionsDenied,

    /// The host answered the country list request.
    CountriesFetched {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns whether to
/// re-render along with the actions to execute.
///
/// Every event currently succeeds. Fetch failures become the load error
/// panel and storage failures are logged while the in-memory favorites and
/// preferences stay authoritative, so nothing is left to report.
///
/// # Errors
///
/// None today. The `Result` keeps the shim's error logging in place for
/// handlers that can fail.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::KeyDown => {
            if state.detail.is_some() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.detail.is_some() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => {
            if state.close_detail() {
                return Ok((true, vec![]));
            }
            Ok((false, vec![Action::CloseFocus]))
        }
        Event::SearchMode => {
            if state.view_mode != ViewMode::AllCountries || state.detail.is_some() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.query.search.push(*c);
            tracing::trace!(query = %state.query.search, "search query updated");
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search || state.query.search.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.query.search, "exiting search mode");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.close_detail() {
                return Ok((true, vec![]));
            }
            if state.view_mode != ViewMode::AllCountries || state.query.search.is_empty() {
                return Ok((false, vec![]));
            }
            state.query.search.clear();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::NextRegion | Event::PreviousRegion | Event::CycleSort | Event::ClearFilters => {
            if state.view_mode != ViewMode::AllCountries || state.detail.is_some() {
                return Ok((false, vec![]));
            }

            match event {
                Event::NextRegion => state.query.next_region(&state.regions),
                Event::PreviousRegion => state.query.previous_region(&state.regions),
                Event::CycleSort => state.query.sort = state.query.sort.next(),
                _ => state.query.reset(),
            }

            tracing::debug!(query = ?state.query, "query changed");
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::ToggleFavorite => Ok((state.toggle_favorite(), vec![])),
        Event::OpenDetails => {
            if state.detail.is_some() {
                return Ok((false, vec![]));
            }
            Ok((state.open_detail(), vec![]))
        }
        Event::CloseDetails => Ok((state.close_detail(), vec![])),
        Event::ToggleView => {
            state.toggle_view();
            Ok((true, vec![]))
        }
        Event::ToggleDarkMode => {
            state.toggle_dark_mode();
            Ok((true, vec![]))
        }
        Event::PermissionsGranted => {
            if state.fetch_requested || state.load_state.is_terminal() {
                tracing::debug!("fetch already requested");
                return Ok((false, vec![]));
            }
            state.fetch_requested = true;
            tracing::info!(url = %state.api_url, "requesting country list");
            Ok((false, vec![Action::FetchCountries(CountryRequest::new(state.api_url.clone()))]))
        }
        Event::PermissionsDenied => {
            if state.load_state.is_terminal() {
                return Ok((false, vec![]));
            }
            state.fail_load("web access permission denied");
            Ok((true, vec![]))
        }
        Event::CountriesFetched { status, body } => {
            if state.load_state.is_terminal() {
                tracing::debug!(status, "ignoring late country list response");
                return Ok((false, vec![]));
            }

            match repository::parse_countries(*status, body) {
                Ok(countries) => state.set_countries(countries),
                Err(e) => state.fail_load(e.to_string()),
            }
            Ok((true, vec![]))
        }
    }
}

/// Logs an event without its payload.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::CountriesFetched { status, body } => f
                .debug_struct("CountriesFetched")
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}
