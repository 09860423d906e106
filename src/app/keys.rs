//! Key bindings.
//!
//! Translates Zellij key presses into [`Event`]s according to the current
//! input mode.
//!
//! Global (all modes):
//! - `Ctrl+n` / `Down`: move down
//! - `Ctrl+p` / `Up`: move up
//!
//! In normal mode:
//! - `j` / `k`: move down / up
//! - `/`: edit the search term
//! - `r` / `R`: next / previous region
//! - `s`: cycle sort order
//! - `c`: clear filters
//! - `f` / `Space`: toggle favorite
//! - `Enter`: open details
//! - `Tab`: toggle favorites view
//! - `d`: toggle dark mode
//! - `Esc`: close details, or clear the search term
//! - `q`: close details, or hide the plugin
//!
//! In search mode every printable key edits the term; `Enter` and `Esc` leave
//! search mode.

use super::handler::Event;
use super::modes::InputMode;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an event, or `None` if the key is unbound.
#[must_use]
pub fn map_key(key: &KeyWithModifier, input_mode: InputMode) -> Option<Event> {
    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::KeyDown),
            BareKey::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    match key.bare_key {
        BareKey::Down => return Some(Event::KeyDown),
        BareKey::Up => return Some(Event::KeyUp),
        _ => {}
    }

    match input_mode {
        InputMode::Search => match key.bare_key {
            BareKey::Enter | BareKey::Esc => Some(Event::ExitSearch),
            BareKey::Backspace => Some(Event::Backspace),
            BareKey::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Normal => Some(match key.bare_key {
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('r') => Event::NextRegion,
            BareKey::Char('R') => Event::PreviousRegion,
            BareKey::Char('s') => Event::CycleSort,
            BareKey::Char('c') => Event::ClearFilters,
            BareKey::Char('f' | ' ') => Event::ToggleFavorite,
            BareKey::Enter => Event::OpenDetails,
            BareKey::Tab => Event::ToggleView,
            BareKey::Char('d') => Event::ToggleDarkMode,
            BareKey::Esc => Event::Escape,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        }),
    }
}
