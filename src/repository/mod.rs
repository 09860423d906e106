//! Country repository client.
//!
//! The plugin never performs I/O itself: the Zellij host executes the HTTP
//! request and delivers the result as an event. This module owns both ends of
//! that exchange, the request description handed to the host and the decoding
//! of the `(status, body)` pair that comes back.
//!
//! # Example
//!
//! ```
//! use countryscope::repository::{parse_countries, DEFAULT_API_URL};
//!
//! assert!(DEFAULT_API_URL.contains("fields="));
//!
//! let body = br#"[{"name": {"common": "France", "official": "French Republic"},
//!                  "cca3": "FRA", "region": "Europe", "population": 67000000}]"#;
//! let countries = parse_countries(200, body).unwrap();
//! assert_eq!(countries[0].name.common, "France");
//!
//! assert!(parse_countries(503, b"").is_err());
//! ```

use crate::domain::{Country, FetchError};
use std::collections::BTreeMap;

/// Default endpoint with the fixed field set requested from REST Countries.
///
/// The API accepts at most ten fields; `subregion` and `borders` can be
/// requested instead by overriding `api_url` in the plugin configuration.
pub const DEFAULT_API_URL: &str = "https://restcountries.com/v3.1/all?fields=name,cca3,capital,languages,population,area,currencies,region,timezones,flags";

/// Context key attached to the host request so the response can be recognised.
const CONTEXT_KEY: &str = "countryscope";

/// Context value identifying the country list request.
const CONTEXT_COUNTRIES: &str = "countries";

/// Request description handed to the host for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRequest {
    /// Fully qualified endpoint URL.
    pub url: String,

    /// Opaque context echoed back by the host with the response.
    pub context: BTreeMap<String, String>,
}

impl CountryRequest {
    /// Creates the country list request for `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_KEY.to_string(), CONTEXT_COUNTRIES.to_string());
        Self {
            url: url.into(),
            context,
        }
    }

    /// Returns `true` if a response context belongs to a country list request.
    #[must_use]
    pub fn is_response_context(context: &BTreeMap<String, String>) -> bool {
        context.get(CONTEXT_KEY).is_some_and(|v| v == CONTEXT_COUNTRIES)
    }
}

/// Decodes the host's answer to a [`CountryRequest`].
///
/// Records without an identifier are skipped, and so are repeated
/// identifiers after their first occurrence. Fetch order is otherwise
/// preserved.
///
/// # Errors
///
/// - [`FetchError::Status`] if `status` is not in the 2xx range
/// - [`FetchError::Decode`] if the body is not a JSON array of countries
pub fn parse_countries(status: u16, body: &[u8]) -> Result<Vec<Country>, FetchError> {
    let _span = tracing::debug_span!("parse_countries", status, body_len = body.len()).entered();

    if !(200..300).contains(&status) {
        tracing::warn!(status, "country request failed");
        return Err(FetchError::Status(status));
    }

    let decoded: Vec<Country> = serde_json::from_slice(body)?;
    let total = decoded.len();

    let mut seen = std::collections::HashSet::with_capacity(total);
    let countries: Vec<Country> = decoded
        .into_iter()
        .filter(|country| !country.cca3.is_empty() && seen.insert(country.cca3.clone()))
        .collect();

    if countries.len() != total {
        tracing::debug!(
            skipped = total - countries.len(),
            "skipped records without a unique identifier"
        );
    }

    tracing::debug!(count = countries.len(), "country list decoded");
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_context_round_trips() {
        let request = CountryRequest::new(DEFAULT_API_URL);
        assert!(CountryRequest::is_response_context(&request.context));
        assert!(!CountryRequest::is_response_context(&BTreeMap::new()));
    }

    #[test]
    fn non_success_status_is_an_error() {
        for status in [199, 301, 400, 404, 500] {
            assert!(matches!(
                parse_countries(status, b"[]"),
                Err(FetchError::Status(s)) if s == status
            ));
        }
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            parse_countries(200, b"{\"message\": \"Not Found\"}"),
            Err(FetchError::Decode(_))
        ));
        assert!(matches!(parse_countries(200, b"not json"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn keeps_fetch_order_and_drops_duplicates() {
        let body = br#"[
            {"name": {"common": "Peru"}, "cca3": "PER", "region": "Americas", "population": 33000000},
            {"name": {"common": "France"}, "cca3": "FRA", "region": "Europe", "population": 67000000},
            {"name": {"common": "Peru again"}, "cca3": "PER", "region": "Americas", "population": 1},
            {"name": {"common": "Nowhere"}, "cca3": "", "region": "", "population": 0}
        ]"#;

        let countries = parse_countries(200, body).unwrap();
        let names: Vec<&str> = countries.iter().map(|c| c.name.common.as_str()).collect();
        assert_eq!(names, vec!["Peru", "France"]);
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_countries(204, b"[]").unwrap().is_empty());
    }
}
