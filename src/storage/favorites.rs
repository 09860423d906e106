//! Favorites store.
//!
//! Holds the ordered list of [`FavoriteEntry`] records. The list is read once
//! at startup and the whole list is written back under a single key after
//! every mutation; there is no partial-update protocol.
//!
//! Reads fail soft: absent or malformed data yields an empty list. Write
//! failures are logged and the in-memory list stays authoritative for the
//! rest of the session.

use crate::domain::{Country, FavoriteEntry};
use crate::storage::backend::KeyValueStore;
use std::collections::HashSet;

/// Storage key holding the serialized favorites array.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered, duplicate-free list of favorited countries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// Loads the favorites list from `backend`.
    ///
    /// Never fails. Missing, unreadable or malformed data produces an empty
    /// store; repeated identifiers keep their first occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use countryscope::storage::{FavoritesStore, KeyValueStore, MemoryStorage};
    ///
    /// let mut backend = MemoryStorage::new();
    /// backend.set("favorites", "not json".to_string())?;
    ///
    /// let favorites = FavoritesStore::load(&backend);
    /// assert!(favorites.is_empty());
    /// # Ok::<(), countryscope::CountryscopeError>(())
    /// ```
    #[must_use]
    pub fn load(backend: &dyn KeyValueStore) -> Self {
        let _span = tracing::debug_span!("favorites_load").entered();

        let raw = match backend.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no stored favorites");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites, starting empty");
                return Self::default();
            }
        };

        let entries: Vec<FavoriteEntry> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "stored favorites are malformed, starting empty");
                return Self::default();
            }
        };

        let mut seen = HashSet::with_capacity(entries.len());
        let entries: Vec<FavoriteEntry> = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.id.clone()))
            .collect();

        tracing::debug!(count = entries.len(), "favorites loaded");
        Self { entries }
    }

    /// Returns `true` iff an entry with `id` exists.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Adds `country` if absent, removes it if present, then persists the
    /// whole list.
    ///
    /// Returns `true` if the country is a favorite after the call.
    pub fn toggle(&mut self, country: &Country, backend: &mut dyn KeyValueStore) -> bool {
        let id = country.id();

        let now_favorite = if let Some(position) = self.position(id) {
            self.entries.remove(position);
            false
        } else {
            self.entries.push(country.to_favorite());
            true
        };

        tracing::debug!(id = %id, now_favorite, count = self.entries.len(), "favorite toggled");
        self.persist(backend);
        now_favorite
    }

    /// Removes the entry with `id`, persisting the list if it changed.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: &str, backend: &mut dyn KeyValueStore) -> bool {
        let Some(position) = self.position(id) else {
            return false;
        };

        self.entries.remove(position);
        tracing::debug!(id = %id, count = self.entries.len(), "favorite removed");
        self.persist(backend);
        true
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Rewrites the whole list under [`FAVORITES_KEY`].
    fn persist(&self, backend: &mut dyn KeyValueStore) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize favorites");
                return;
            }
        };

        if let Err(e) = backend.set(FAVORITES_KEY, json) {
            tracing::error!(error = %e, "failed to persist favorites");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::country;
    use crate::storage::MemoryStorage;
    use crate::CountryscopeError;

    #[derive(Debug)]
    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get(&self, _key: &str) -> crate::Result<Option<String>> {
            Err(CountryscopeError::Storage("disk on fire".to_string()))
        }

        fn set(&mut self, _key: &str, _value: String) -> crate::Result<()> {
            Err(CountryscopeError::Storage("disk on fire".to_string()))
        }

        fn remove(&mut self, _key: &str) -> crate::Result<()> {
            Err(CountryscopeError::Storage("disk on fire".to_string()))
        }
    }

    #[test]
    fn empty_store_has_no_favorites() {
        let favorites = FavoritesStore::load(&MemoryStorage::new());
        assert!(favorites.is_empty());
        for id in ["PER", "FRA", "", "???"] {
            assert!(!favorites.is_favorite(id));
        }
    }

    #[test]
    fn toggle_adds_exactly_one_projected_entry() {
        let mut backend = MemoryStorage::new();
        let mut favorites = FavoritesStore::load(&backend);
        let peru = country("PER", "Peru", "Americas", 33_000_000);

        assert!(favorites.toggle(&peru, &mut backend));
        assert!(favorites.is_favorite("PER"));
        assert_eq!(favorites.entries(), &[peru.to_favorite()]);
    }

    #[test]
    fn toggle_twice_restores_previous_content() {
        let mut backend = MemoryStorage::new();
        let mut favorites = FavoritesStore::load(&backend);
        let peru = country("PER", "Peru", "Americas", 33_000_000);
        let france = country("FRA", "France", "Europe", 67_000_000);
        favorites.toggle(&peru, &mut backend);
        let before = favorites.clone();

        favorites.toggle(&france, &mut backend);
        favorites.toggle(&france, &mut backend);

        assert_eq!(favorites, before);
        assert_eq!(FavoritesStore::load(&backend), before);
    }

    #[test]
    fn removal_keeps_order_of_others() {
        let mut backend = MemoryStorage::new();
        let mut favorites = FavoritesStore::load(&backend);
        for (id, name) in [("PER", "Peru"), ("FRA", "France"), ("JPN", "Japan")] {
            favorites.toggle(&country(id, name, "", 1), &mut backend);
        }

        favorites.toggle(&country("FRA", "France", "", 1), &mut backend);

        let ids: Vec<&str> = favorites.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["PER", "JPN"]);
    }

    #[test]
    fn persists_whole_list_and_reloads() {
        let mut backend = MemoryStorage::new();
        let mut favorites = FavoritesStore::load(&backend);
        favorites.toggle(&country("PER", "Peru", "Americas", 33_000_000), &mut backend);
        favorites.toggle(&country("FRA", "France", "Europe", 67_000_000), &mut backend);

        let raw = backend.get(FAVORITES_KEY).unwrap().unwrap();
        let stored: Vec<FavoriteEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored.len(), 2);

        assert_eq!(FavoritesStore::load(&backend), favorites);
    }

    #[test]
    fn load_drops_duplicate_ids() {
        let mut backend = MemoryStorage::new();
        backend
            .set(
                FAVORITES_KEY,
                r#"[{"id":"PER","name":"Peru","flag":"","region":"Americas","population":1},
                    {"id":"PER","name":"Peru (copy)","flag":"","region":"Americas","population":2}]"#
                    .to_string(),
            )
            .unwrap();

        let favorites = FavoritesStore::load(&backend);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.entries()[0].name, "Peru");
    }

    #[test]
    fn backend_failures_are_swallowed() {
        let mut backend = BrokenStorage;
        let mut favorites = FavoritesStore::load(&backend);
        assert!(favorites.is_empty());

        assert!(favorites.toggle(&country("PER", "Peru", "Americas", 1), &mut backend));
        assert!(favorites.is_favorite("PER"));
        assert!(favorites.remove("PER", &mut backend));
        assert!(!favorites.remove("PER", &mut backend));
    }
}
