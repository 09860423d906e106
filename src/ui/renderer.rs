//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` to `UIViewModel`
//! 2. **Component Rendering**: components append ANSI text to one buffer
//!
//! The only side effect is the final print in [`render`].
//!
//! # Example
//!
//! ```
//! use countryscope::app::AppState;
//! use countryscope::storage::MemoryStorage;
//! use countryscope::ui::{render_to_string, theme::ThemePair};
//!
//! let state = AppState::new(Box::new(MemoryStorage::new()), ThemePair::default(), "http://localhost");
//! let frame = render_to_string(&state, 24, 80);
//! assert!(frame.contains("Loading countries..."));
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI into a string of ANSI-styled text.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut out = String::with_capacity(rows * cols * 4);
    components::render_frame(&mut out, &viewmodel, state.theme(), rows, cols);
    out
}

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; Zellij hands the plugin a fresh pane buffer
/// for every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}
