//! Locations shown on the globe.
//!
//! A [`City`] is identified by its `name`; the selection marker in the
//! location list compares names, never references.

use serde::{Deserialize, Serialize};

use crate::search::SearchQuery;

/// A named location on the globe.
///
/// # Example
///
/// ```
/// use globe_model::City;
///
/// let city = City::new("Paris", "capital").with_faction("Union");
/// assert_eq!(city.faction.as_deref(), Some("Union"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Unique display name. Used for identity and selection comparison.
    pub name: String,

    /// Owning faction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction: Option<String>,

    /// Free-form category (e.g. "capital", "outpost").
    pub category: String,
}

impl City {
    /// Create a city without a faction.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faction: None,
            category: category.into(),
        }
    }

    /// Set the faction.
    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    /// A city matches when its name, faction or category contains the query.
    pub fn matches(&self, query: &SearchQuery) -> bool {
        query.matches(&self.name)
            || query.matches_opt(self.faction.as_deref())
            || query.matches(&self.category)
    }

    /// Whether this city is the current selection (exact, case-sensitive name match).
    pub fn is_selected(&self, selected: Option<&City>) -> bool {
        selected.is_some_and(|s| s.name == self.name)
    }
}

/// Location data supplied to the globe.
///
/// `cities` may be absent entirely; [`GlobeData::cities`] treats that the
/// same as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobeData {
    /// Cities in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<City>>,
}

impl GlobeData {
    /// Wrap a city list.
    pub fn with_cities(cities: Vec<City>) -> Self {
        Self {
            cities: Some(cities),
        }
    }

    /// Cities in display order, or an empty slice when absent.
    pub fn cities(&self) -> &[City] {
        self.cities.as_deref().unwrap_or_default()
    }

    /// Whether there is at least one city to show.
    pub fn has_cities(&self) -> bool {
        !self.cities().is_empty()
    }

    /// Look up a city by exact name.
    pub fn find(&self, name: &str) -> Option<&City> {
        self.cities().iter().find(|c| c.name == name)
    }
}

/// Filter cities by search text.
///
/// Returns the subsequence of `cities` matching `search` on any field, in
/// source order.
pub fn filter_cities<'a>(cities: &'a [City], search: &str) -> Vec<&'a City> {
    let query = SearchQuery::new(search);
    cities.iter().filter(|c| c.matches(&query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<City> {
        vec![
            City::new("Paris", "capital"),
            City::new("Berlin", "capital"),
            City::new("Neo Tokyo", "megacity").with_faction("Syndicate"),
        ]
    }

    #[test]
    fn test_filter_by_name() {
        let cities = sample();
        let names: Vec<_> = filter_cities(&cities, "par")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, ["Paris"]);
    }

    #[test]
    fn test_filter_by_faction_and_category() {
        let cities = sample();
        assert_eq!(filter_cities(&cities, "SYNDIC").len(), 1);
        assert_eq!(filter_cities(&cities, "capital").len(), 2);
    }

    #[test]
    fn test_empty_search_returns_all_in_order() {
        let cities = sample();
        let filtered = filter_cities(&cities, "");
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[2].name, "Neo Tokyo");
    }

    #[test]
    fn test_selection_is_by_exact_name() {
        let paris = City::new("Paris", "capital");
        let other_paris = City::new("Paris", "ruin").with_faction("Rebels");
        let lower = City::new("paris", "capital");
        assert!(paris.is_selected(Some(&other_paris)));
        assert!(!paris.is_selected(Some(&lower)));
        assert!(!paris.is_selected(None));
    }

    #[test]
    fn test_absent_cities_behave_as_empty() {
        let data = GlobeData::default();
        assert!(data.cities().is_empty());
        assert!(!data.has_cities());
        assert!(!GlobeData::with_cities(Vec::new()).has_cities());
    }

    #[test]
    fn test_find_by_name() {
        let data = GlobeData::with_cities(sample());
        assert_eq!(data.find("Berlin").map(|c| c.category.as_str()), Some("capital"));
        assert!(data.find("berlin").is_none());
    }
}
