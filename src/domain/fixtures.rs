//! Country builders shared by unit tests.

use super::{Country, CountryName, Flags};

/// Builds a minimal country with the fields the filter, sort and favorites
/// logic look at.
pub fn country(id: &str, name: &str, region: &str, population: u64) -> Country {
    Country {
        cca3: id.to_string(),
        name: CountryName {
            common: name.to_string(),
            official: format!("Official {name}"),
        },
        region: region.to_string(),
        subregion: None,
        population,
        area: None,
        capital: vec![],
        languages: Default::default(),
        currencies: Default::default(),
        timezones: vec![],
        flags: Flags {
            png: format!("https://flagcdn.com/w320/{}.png", id.to_lowercase()),
            ..Flags::default()
        },
        borders: vec![],
    }
}

/// Peru, France, Japan, Chile and Bolivia, in that fetch order.
pub fn sample() -> Vec<Country> {
    let mut peru = country("PER", "Peru", "Americas", 33_000_000);
    peru.borders = vec!["BOL".to_string(), "CHL".to_string(), "XXX".to_string()];
    peru.capital = vec!["Lima".to_string()];

    vec![
        peru,
        country("FRA", "France", "Europe", 67_000_000),
        country("JPN", "Japan", "Asia", 125_000_000),
        country("CHL", "Chile", "Americas", 19_000_000),
        country("BOL", "Bolivia", "Americas", 12_000_000),
    ]
}
