//! Country domain model.
//!
//! This module defines [`Country`], the read-only record decoded from the REST
//! Countries API, and [`FavoriteEntry`], the reduced projection persisted in
//! the favorites store. Countries are identified by their ISO 3166-1 alpha-3
//! code (`cca3`), which is unique and is also the key used in border lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base URL of the map service used for the outbound "view on map" link.
const MAP_PLACE_URL: &str = "https://www.google.com/maps/place/";

/// Common and official names of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A currency used by a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A country as returned by the REST Countries API.
///
/// Every field other than the identifier and the name is optional on the wire.
/// Absent collections decode as empty and absent scalars as `None`, so a
/// response requesting a narrower field set still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code, used as the stable identifier.
    pub cca3: String,
    pub name: CountryName,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub population: u64,
    /// Area in square kilometres.
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub capital: Vec<String>,
    /// Language code to language name.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// Currency code to currency details.
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub flags: Flags,
    /// Alpha-3 codes of neighbouring countries.
    #[serde(default)]
    pub borders: Vec<String>,
}

impl Country {
    /// Returns the stable identifier of this country.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.cca3
    }

    /// Returns the outbound map link for this country.
    ///
    /// # Examples
    ///
    /// ```
    /// use countryscope::domain::country::map_url;
    ///
    /// assert_eq!(
    ///     map_url("Côte d'Ivoire"),
    ///     "https://www.google.com/maps/place/C%C3%B4te%20d'Ivoire"
    /// );
    /// ```
    #[must_use]
    pub fn map_url(&self) -> String {
        map_url(&self.name.common)
    }

    /// Projects this country into the record stored in the favorites list.
    #[must_use]
    pub fn to_favorite(&self) -> FavoriteEntry {
        FavoriteEntry {
            id: self.cca3.clone(),
            name: self.name.common.clone(),
            flag: self.flags.png.clone(),
            region: self.region.clone(),
            population: self.population,
        }
    }
}

/// Reduced projection of a [`Country`] persisted in the favorites store.
///
/// Favorites are stored independently of the country list so they can be
/// rendered even when the fetch fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: String,
    pub name: String,
    pub flag: String,
    pub region: String,
    pub population: u64,
}

/// Characters `urlencoding` escapes that URI components may carry as-is.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

/// Builds the map-service URL for a place name.
///
/// The name is percent-encoded as a URI component: besides alphanumerics and
/// `-_.~`, the marks `!'()*` are left unescaped.
#[must_use]
pub fn map_url(place: &str) -> String {
    let encoded = URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(place).into_owned(), |acc, (escaped, mark)| {
            acc.replace(escaped, mark)
        });
    format!("{MAP_PLACE_URL}{encoded}")
}

/// Formats an integer with `,` thousands separators.
///
/// # Examples
///
/// ```
/// use countryscope::domain::country::format_population;
///
/// assert_eq!(format_population(0), "0");
/// assert_eq!(format_population(999), "999");
/// assert_eq!(format_population(33_000_000), "33,000,000");
/// ```
#[must_use]
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Formats an area in square kilometres with thousands separators and at most
/// three fractional digits.
///
/// # Examples
///
/// ```
/// use countryscope::domain::country::format_area;
///
/// assert_eq!(format_area(1_285_216.0), "1,285,216 km²");
/// assert_eq!(format_area(0.44), "0.44 km²");
/// ```
#[must_use]
pub fn format_area(area: f64) -> String {
    let rounded = (area.max(0.0) * 1000.0).round() / 1000.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = rounded.trunc() as u64;
    let fraction = format!("{:.3}", rounded.fract());
    let fraction = fraction
        .trim_start_matches('0')
        .trim_start_matches('.')
        .trim_end_matches('0');

    if fraction.is_empty() {
        format!("{} km²", format_population(whole))
    } else {
        format!("{}.{fraction} km²", format_population(whole))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERU_JSON: &str = r#"{
        "name": {"common": "Peru", "official": "Republic of Peru"},
        "cca3": "PER",
        "capital": ["Lima"],
        "region": "Americas",
        "subregion": "South America",
        "languages": {"aym": "Aymara", "que": "Quechua", "spa": "Spanish"},
        "currencies": {"PEN": {"name": "Peruvian sol", "symbol": "S/ "}},
        "area": 1285216.0,
        "population": 32971846,
        "timezones": ["UTC-05:00"],
        "flags": {"png": "https://flagcdn.com/w320/pe.png", "svg": "https://flagcdn.com/pe.svg"},
        "borders": ["BOL", "BRA", "CHL", "COL", "ECU"]
    }"#;

    #[test]
    fn decodes_full_record() {
        let country: Country = serde_json::from_str(PERU_JSON).unwrap();

        assert_eq!(country.id(), "PER");
        assert_eq!(country.name.official, "Republic of Peru");
        assert_eq!(country.capital, vec!["Lima"]);
        assert_eq!(country.languages.len(), 3);
        assert_eq!(country.currencies["PEN"].name, "Peruvian sol");
        assert_eq!(country.borders.len(), 5);
        assert_eq!(country.area, Some(1_285_216.0));
    }

    #[test]
    fn decodes_record_with_absent_optional_fields() {
        let country: Country = serde_json::from_str(
            r#"{"name": {"common": "Antarctica", "official": "Antarctica"}, "cca3": "ATA",
                "region": "Antarctic", "population": 1000, "flags": {"png": "ata.png"}}"#,
        )
        .unwrap();

        assert!(country.capital.is_empty());
        assert!(country.languages.is_empty());
        assert!(country.currencies.is_empty());
        assert!(country.borders.is_empty());
        assert!(country.subregion.is_none());
        assert!(country.area.is_none());
    }

    #[test]
    fn favorite_projection_copies_summary_fields() {
        let country: Country = serde_json::from_str(PERU_JSON).unwrap();
        let entry = country.to_favorite();

        assert_eq!(
            entry,
            FavoriteEntry {
                id: "PER".to_string(),
                name: "Peru".to_string(),
                flag: "https://flagcdn.com/w320/pe.png".to_string(),
                region: "Americas".to_string(),
                population: 32_971_846,
            }
        );
    }

    #[test]
    fn formats_population_groups() {
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(100_000), "100,000");
        assert_eq!(format_population(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_area_fraction() {
        assert_eq!(format_area(2.02), "2.02 km²");
        assert_eq!(format_area(1_000.5), "1,000.5 km²");
        assert_eq!(format_area(12.0), "12 km²");
    }

    #[test]
    fn map_url_keeps_uri_component_marks() {
        assert_eq!(
            map_url("Côte d'Ivoire"),
            "https://www.google.com/maps/place/C%C3%B4te%20d'Ivoire"
        );
        assert_eq!(
            map_url("Saint (Martin)!*"),
            "https://www.google.com/maps/place/Saint%20(Martin)!*"
        );
        assert_eq!(map_url("50%"), "https://www.google.com/maps/place/50%25");
    }

    #[test]
    fn map_url_encodes_spaces() {
        assert_eq!(
            map_url("United Kingdom"),
            "https://www.google.com/maps/place/United%20Kingdom"
        );
    }
}
