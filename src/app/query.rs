//! Query state and the filter-sort engine.
//!
//! [`QueryState`] holds the three user-controlled inputs of the country list:
//! a search term, a region and a sort order. [`apply`] is the pure function
//! that turns the full country list and a query into the ordered view list.
//!
//! # Filtering Algorithm
//!
//! 1. **Search**: keep a country iff its lowercased common name contains the
//!    lowercased search term (an empty term matches everything)
//! 2. **Region**: keep a country iff the region is empty or equals the
//!    country's region exactly (case-sensitive)
//! 3. **Sort**: order by population with a stable sort, or keep fetch order
//!
//! # Example
//!
//! ```
//! use countryscope::app::query::{apply, QueryState, SortOrder};
//! use countryscope::repository::parse_countries;
//!
//! let body = br#"[
//!     {"name": {"common": "Peru"}, "cca3": "PER", "region": "Americas", "population": 33000000},
//!     {"name": {"common": "France"}, "cca3": "FRA", "region": "Europe", "population": 67000000}
//! ]"#;
//! let countries = parse_countries(200, body).unwrap();
//!
//! let query = QueryState {
//!     search: String::new(),
//!     region: "Europe".to_string(),
//!     sort: SortOrder::PopulationDescending,
//! };
//! let view = apply(&countries, &query);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].name.common, "France");
//! ```

use crate::domain::Country;
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Population ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep fetch order.
    #[default]
    None,
    PopulationAscending,
    PopulationDescending,
}

impl SortOrder {
    /// Returns the next order in the `None -> Ascending -> Descending` cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::PopulationAscending,
            Self::PopulationAscending => Self::PopulationDescending,
            Self::PopulationDescending => Self::None,
        }
    }

    /// Human-readable label used in the toolbar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Sort by",
            Self::PopulationAscending => "Population (Low to High)",
            Self::PopulationDescending => "Population (High to Low)",
        }
    }
}

/// User-controlled filter inputs for the all-countries view.
///
/// Session-only; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Case-insensitive substring of the common name. Empty matches all.
    pub search: String,

    /// Exact region name. Empty means all regions.
    pub region: String,

    pub sort: SortOrder,
}

impl QueryState {
    /// Returns `true` if no filter or ordering is active.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.region.is_empty() && self.sort == SortOrder::None
    }

    /// Resets search, region and sort.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Label for the active region, `"All Regions"` when unfiltered.
    #[must_use]
    pub fn region_label(&self) -> &str {
        if self.region.is_empty() {
            "All Regions"
        } else {
            &self.region
        }
    }

    /// Advances the region filter through `regions`, wrapping back to
    /// "all regions" after the last one.
    ///
    /// `regions` is expected to be the sorted output of [`regions`]. A region
    /// that is no longer present restarts the cycle.
    pub fn next_region(&mut self, regions: &[String]) {
        self.region = match self.region_position(regions) {
            None => regions.first().cloned().unwrap_or_default(),
            Some(i) => regions.get(i + 1).cloned().unwrap_or_default(),
        };
    }

    /// Moves the region filter backwards through `regions`.
    pub fn previous_region(&mut self, regions: &[String]) {
        self.region = match self.region_position(regions) {
            None => regions.last().cloned().unwrap_or_default(),
            Some(0) => String::new(),
            Some(i) => regions[i - 1].clone(),
        };
    }

    /// Position of the active region in `regions`; `None` when unfiltered or
    /// when the region is unknown.
    fn region_position(&self, regions: &[String]) -> Option<usize> {
        if self.region.is_empty() {
            return None;
        }
        regions.iter().position(|r| *r == self.region)
    }

    /// Returns `true` if `country` passes the search and region filters.
    #[must_use]
    pub fn matches(&self, country: &Country) -> bool {
        let region_ok = self.region.is_empty() || self.region == country.region;
        region_ok && contains_ignore_case(&country.name.common, &self.search)
    }
}

/// Computes the ordered view list for `query`.
///
/// Pure and idempotent: the input slice is never reordered and the same inputs
/// always produce the same output. Zero matches yields an empty vector.
#[must_use]
pub fn apply<'a>(all: &'a [Country], query: &QueryState) -> Vec<&'a Country> {
    let _span = tracing::debug_span!(
        "apply_query",
        total = all.len(),
        search_len = query.search.len(),
        region = %query.region,
        sort = ?query.sort
    )
    .entered();

    let mut view: Vec<&Country> = all.iter().filter(|c| query.matches(c)).collect();

    // `sort_by_key` is stable, which keeps fetch order among equal populations.
    match query.sort {
        SortOrder::None => {}
        SortOrder::PopulationAscending => view.sort_by_key(|c| c.population),
        SortOrder::PopulationDescending => view.sort_by_key(|c| Reverse(c.population)),
    }

    tracing::debug!(visible = view.len(), "query applied");
    view
}

/// Distinct non-empty regions present in `all`, sorted.
#[must_use]
pub fn regions(all: &[Country]) -> Vec<String> {
    all.iter()
        .filter(|c| !c.region.is_empty())
        .map(|c| c.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Case-insensitive substring test. An empty needle always matches.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Character ranges of every non-overlapping case-insensitive occurrence of
/// `needle` in `haystack`, as `(start, end)` char indices with exclusive end.
///
/// Returns nothing when lowercasing changes the character count of either
/// string, since positions would no longer line up with the original text.
#[must_use]
pub fn match_ranges(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }

    let hay: Vec<char> = haystack.to_lowercase().chars().collect();
    let pat: Vec<char> = needle.to_lowercase().chars().collect();
    if hay.len() != haystack.chars().count() || pat.len() != needle.chars().count() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + pat.len() <= hay.len() {
        if hay[i..i + pat.len()] == pat[..] {
            ranges.push((i, i + pat.len()));
            i += pat.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{country, sample};

    fn ids(view: &[&Country]) -> Vec<String> {
        view.iter().map(|c| c.cca3.clone()).collect()
    }

    fn query(search: &str, region: &str, sort: SortOrder) -> QueryState {
        QueryState {
            search: search.to_string(),
            region: region.to_string(),
            sort,
        }
    }

    #[test]
    fn default_query_returns_full_list_in_order() {
        let all = sample();
        let view = apply(&all, &QueryState::default());
        assert_eq!(ids(&view), vec!["PER", "FRA", "JPN", "CHL", "BOL"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let all = sample();
        for term in ["an", "AN", "aN"] {
            let view = apply(&all, &query(term, "", SortOrder::None));
            assert_eq!(ids(&view), vec!["FRA", "JPN"], "term {term:?}");
        }

        let q = query("li", "", SortOrder::None);
        let view = apply(&all, &q);
        for c in &all {
            let included = view.iter().any(|v| v.cca3 == c.cca3);
            assert_eq!(included, c.name.common.to_lowercase().contains("li"));
        }
    }

    #[test]
    fn region_match_is_exact() {
        let all = sample();
        let view = apply(&all, &query("", "Americas", SortOrder::None));
        assert_eq!(ids(&view), vec!["PER", "CHL", "BOL"]);
        assert!(view.iter().all(|c| c.region == "Americas"));

        assert!(apply(&all, &query("", "americas", SortOrder::None)).is_empty());
        assert!(apply(&all, &query("", "Amer", SortOrder::None)).is_empty());
    }

    #[test]
    fn population_sorts_are_monotonic() {
        let all = sample();

        let asc = apply(&all, &query("", "", SortOrder::PopulationAscending));
        assert!(asc.windows(2).all(|w| w[0].population <= w[1].population));

        let desc = apply(&all, &query("", "", SortOrder::PopulationDescending));
        assert!(desc.windows(2).all(|w| w[0].population >= w[1].population));
        assert_eq!(desc.len(), all.len());
    }

    #[test]
    fn sort_is_stable_for_equal_populations() {
        let all = vec![
            country("AAA", "First", "X", 10),
            country("BBB", "Second", "X", 5),
            country("CCC", "Third", "X", 10),
            country("DDD", "Fourth", "X", 5),
        ];

        let asc = apply(&all, &query("", "", SortOrder::PopulationAscending));
        assert_eq!(ids(&asc), vec!["BBB", "DDD", "AAA", "CCC"]);

        let desc = apply(&all, &query("", "", SortOrder::PopulationDescending));
        assert_eq!(ids(&desc), vec!["AAA", "CCC", "BBB", "DDD"]);
    }

    #[test]
    fn europe_descending_returns_only_france() {
        let all = vec![
            country("PER", "Peru", "Americas", 33_000_000),
            country("FRA", "France", "Europe", 67_000_000),
        ];
        let view = apply(&all, &query("", "Europe", SortOrder::PopulationDescending));
        assert_eq!(ids(&view), vec!["FRA"]);
    }

    #[test]
    fn apply_is_idempotent_and_leaves_input_untouched() {
        let all = sample();
        let before = all.clone();
        let q = query("a", "", SortOrder::PopulationDescending);

        let first = ids(&apply(&all, &q));
        let second = ids(&apply(&all, &q));

        assert_eq!(first, second);
        assert_eq!(all, before);
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let all = sample();
        assert!(apply(&all, &query("zzz", "", SortOrder::None)).is_empty());
        assert!(apply(&[], &QueryState::default()).is_empty());
    }

    #[test]
    fn sort_cycle_wraps() {
        let mut sort = SortOrder::None;
        sort = sort.next();
        assert_eq!(sort, SortOrder::PopulationAscending);
        sort = sort.next();
        assert_eq!(sort, SortOrder::PopulationDescending);
        assert_eq!(sort.next(), SortOrder::None);
    }

    #[test]
    fn regions_are_distinct_and_sorted() {
        assert_eq!(regions(&sample()), vec!["Americas", "Asia", "Europe"]);
    }

    #[test]
    fn region_cycle_visits_all_then_wraps() {
        let regions = regions(&sample());
        let mut q = QueryState::default();

        let mut seen = vec![];
        for _ in 0..4 {
            q.next_region(&regions);
            seen.push(q.region.clone());
        }
        assert_eq!(seen, vec!["Americas", "Asia", "Europe", ""]);

        q.previous_region(&regions);
        assert_eq!(q.region, "Europe");
        q.region = "Americas".to_string();
        q.previous_region(&regions);
        assert_eq!(q.region, "");
    }

    #[test]
    fn region_cycle_with_no_regions_stays_unfiltered() {
        let mut q = QueryState::default();
        q.next_region(&[]);
        assert!(q.region.is_empty());
        q.previous_region(&[]);
        assert!(q.region.is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut q = query("fr", "Europe", SortOrder::PopulationAscending);
        assert!(!q.is_default());
        q.reset();
        assert!(q.is_default());
        assert_eq!(q.region_label(), "All Regions");
    }

    #[test]
    fn match_ranges_find_every_occurrence() {
        assert_eq!(match_ranges("Bahamas", "a"), vec![(1, 2), (3, 4), (5, 6)]);
        assert_eq!(match_ranges("France", "FR"), vec![(0, 2)]);
        assert_eq!(match_ranges("Côte d'Ivoire", "d'i"), vec![(5, 8)]);
        assert!(match_ranges("Peru", "").is_empty());
        assert!(match_ranges("Peru", "x").is_empty());
    }
}
