//! Storage layer for persistent favorites and preferences.
//!
//! This module provides a synchronous key-value abstraction and the two
//! documents stored through it: the favorites list and the dark-mode flag.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait
//! - `json`: JSON file backend with atomic writes
//! - `memory`: in-memory backend
//! - `favorites`: ordered favorites list persisted under one key
//! - `preferences`: dark-mode flag

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;
pub mod preferences;

pub use backend::KeyValueStore;
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use preferences::{load_dark_mode, save_dark_mode, DARK_MODE_KEY};
