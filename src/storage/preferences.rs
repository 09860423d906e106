//! Display preferences persisted alongside the favorites.

use crate::storage::backend::KeyValueStore;

/// Storage key holding the dark-mode flag as `"true"` or `"false"`.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Reads the dark-mode preference.
///
/// Only the exact string `"true"` enables dark mode; anything else, including
/// a missing key or a read failure, means light mode.
#[must_use]
pub fn load_dark_mode(backend: &dyn KeyValueStore) -> bool {
    match backend.get(DARK_MODE_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read dark mode preference");
            false
        }
    }
}

/// Persists the dark-mode preference, logging failures.
pub fn save_dark_mode(backend: &mut dyn KeyValueStore, enabled: bool) {
    if let Err(e) = backend.set(DARK_MODE_KEY, enabled.to_string()) {
        tracing::error!(error = %e, enabled, "failed to persist dark mode preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn defaults_to_light_mode() {
        assert!(!load_dark_mode(&MemoryStorage::new()));
    }

    #[test]
    fn only_exact_true_enables_dark_mode() {
        let mut backend = MemoryStorage::new();
        for (raw, expected) in [("true", true), ("false", false), ("TRUE", false), ("1", false), ("", false)] {
            backend.set(DARK_MODE_KEY, raw.to_string()).unwrap();
            assert_eq!(load_dark_mode(&backend), expected, "value {raw:?}");
        }
    }

    #[test]
    fn save_round_trips() {
        let mut backend = MemoryStorage::new();
        save_dark_mode(&mut backend, true);
        assert!(load_dark_mode(&backend));
        save_dark_mode(&mut backend, false);
        assert!(!load_dark_mode(&backend));
    }
}
