//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the
//! domain/repository/storage layers. It never calls the Zellij host.
//!
//! ```text
//! Key / Host Event → Event → handle_event → AppState mutations → Actions → Host calls
//!                                               │
//!                                               └→ compute_viewmodel → renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effect commands emitted by the event handler
//! - [`detail`]: country lookup with resolved borders
//! - [`handler`]: event processing and state transitions
//! - [`keys`]: key bindings per input mode
//! - [`modes`]: input mode, view mode and load state
//! - [`query`]: query state and the filter-sort engine
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod detail;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod query;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::{InputMode, LoadState, ViewMode};
pub use query::{QueryState, SortOrder};
pub use state::AppState;
