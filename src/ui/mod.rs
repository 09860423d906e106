//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable component renderers
//! - [`helpers`]: cursor movement, padding and match highlighting
//! - [`theme`]: color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::{Theme, ThemePair};
pub use viewmodel::{
    Body, DetailSection, DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ToolbarInfo,
    UIViewModel,
};
