//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, a string-keyed,
//! string-valued, synchronous store. The favorites list and the dark-mode
//! preference are each kept under one key and rewritten as a whole on every
//! change.

use crate::domain::error::Result;
use std::fmt;

/// Abstraction over persistent key-value backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map, used when
///   the data directory is unavailable and in tests
///
/// # Examples
///
/// ```
/// use countryscope::storage::{KeyValueStore, MemoryStorage};
///
/// let mut store = MemoryStorage::new();
/// store.set("darkMode", "true".to_string())?;
/// assert_eq!(store.get("darkMode")?, Some("true".to_string()));
/// # Ok::<(), countryscope::CountryscopeError>(())
/// ```
pub trait KeyValueStore: Send + fmt::Debug {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value, and persists
    /// the change before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<()>;
}
