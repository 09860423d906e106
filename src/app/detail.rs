//! Detail resolver for the country overlay.

use crate::domain::Country;

/// A country together with its bordering countries' display names.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCountry<'a> {
    pub country: &'a Country,

    /// One entry per border code, in source order. Codes that do not match a
    /// loaded country are passed through verbatim.
    pub borders: Vec<String>,
}

/// Looks up `id` in `all` and resolves its border codes to common names.
///
/// Returns `None` when no country has that identifier; callers treat this as
/// a silent no-op.
///
/// # Examples
///
/// ```
/// use countryscope::app::detail::resolve;
///
/// assert!(resolve("PER", &[]).is_none());
/// ```
#[must_use]
pub fn resolve<'a>(id: &str, all: &'a [Country]) -> Option<ResolvedCountry<'a>> {
    let Some(country) = all.iter().find(|c| c.cca3 == id) else {
        tracing::debug!(id = %id, "detail lookup missed");
        return None;
    };

    let borders = country
        .borders
        .iter()
        .map(|code| {
            all.iter()
                .find(|c| c.cca3 == *code)
                .map_or_else(|| code.clone(), |c| c.name.common.clone())
        })
        .collect();

    Some(ResolvedCountry { country, borders })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::sample;

    #[test]
    fn resolves_borders_to_names_and_passes_unknown_codes() {
        let all = sample();
        let resolved = resolve("PER", &all).unwrap();

        assert_eq!(resolved.country.name.common, "Peru");
        assert_eq!(resolved.borders, vec!["Bolivia", "Chile", "XXX"]);
    }

    #[test]
    fn country_without_borders_resolves_empty() {
        let all = sample();
        let resolved = resolve("JPN", &all).unwrap();
        assert!(resolved.borders.is_empty());
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(resolve("ZZZ", &sample()).is_none());
        assert!(resolve("", &sample()).is_none());
    }
}
