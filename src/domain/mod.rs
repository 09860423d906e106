//! Domain layer for the Countryscope plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`country`]: Country record, favorite projection and display formatting
//!
//! # Examples
//!
//! ```
//! use countryscope::domain::{format_population, Result};
//!
//! fn headline(population: u64) -> Result<String> {
//!     Ok(format!("Population: {}", format_population(population)))
//! }
//!
//! assert_eq!(headline(67_000_000).unwrap(), "Population: 67,000,000");
//! ```

pub mod country;
pub mod error;

pub use country::{format_area, format_population, map_url, Country, CountryName, Currency, FavoriteEntry, Flags};
pub use error::{CountryscopeError, FetchError, Result};

#[cfg(test)]
pub(crate) mod fixtures;
