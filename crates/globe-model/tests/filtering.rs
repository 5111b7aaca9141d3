use globe_model::{
    CelestialBodyConfig, City, PASSIVE_BODY_IDS, SearchQuery, TARGET_LINK_IDS, display_name,
    filter_cities, filter_system_bodies, target_bodies,
};
use proptest::prelude::*;

const BODY_IDS: [&str; 16] = [
    "sun", "mercury", "venus", "earth", "moon", "mars", "belt", "jupiter", "io", "europa",
    "ganymede", "callisto", "saturn", "titan", "uranus", "neptune",
];

fn city_strategy() -> impl Strategy<Value = City> {
    (
        "[A-Za-z ]{1,12}",
        proptest::option::of("[A-Za-z]{0,8}"),
        "[a-z]{1,8}",
    )
        .prop_map(|(name, faction, category)| City {
            name,
            faction,
            category,
        })
}

fn body_strategy() -> impl Strategy<Value = CelestialBodyConfig> {
    (prop::sample::select(BODY_IDS.to_vec()), "[a-z]{1,8}")
        .prop_map(|(id, kind)| CelestialBodyConfig::new(id, id, kind))
}

/// `sub` appears in `full` in the same relative order.
fn is_subsequence<T: PartialEq>(sub: &[&T], full: &[T]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == *s))
}

proptest! {
    #[test]
    fn city_filter_is_exact_ordered_subsequence(
        cities in prop::collection::vec(city_strategy(), 0..24),
        search in "[A-Za-z]{0,3}",
    ) {
        let filtered = filter_cities(&cities, &search);
        prop_assert!(is_subsequence(&filtered, &cities));

        let lowered = search.to_lowercase();
        let field_hit = |c: &City| {
            c.name.to_lowercase().contains(&lowered)
                || c.faction.as_ref().is_some_and(|f| f.to_lowercase().contains(&lowered))
                || c.category.to_lowercase().contains(&lowered)
        };
        let expected: Vec<&City> = cities.iter().filter(|&c| field_hit(c)).collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn passive_bodies_never_listed(
        bodies in prop::collection::vec(body_strategy(), 0..24),
        search in prop::sample::select(vec!["", "mer", "planet", "a", "NEPTUNE", "ven"]),
    ) {
        let filtered = filter_system_bodies(&bodies, search);
        prop_assert!(is_subsequence(&filtered, &bodies));
        for body in filtered {
            prop_assert!(!PASSIVE_BODY_IDS.contains(&body.id.as_str()));
        }
    }

    #[test]
    fn target_rail_is_allowlist_subsequence(
        bodies in prop::collection::vec(body_strategy(), 0..24),
    ) {
        let targets = target_bodies(&bodies);
        prop_assert!(is_subsequence(&targets, &bodies));
        let expected = bodies
            .iter()
            .filter(|b| TARGET_LINK_IDS.contains(&b.id.as_str()))
            .count();
        prop_assert_eq!(targets.len(), expected);
    }

    #[test]
    fn filtering_is_idempotent(
        cities in prop::collection::vec(city_strategy(), 0..16),
        search in "[a-z]{0,2}",
    ) {
        prop_assert_eq!(filter_cities(&cities, &search), filter_cities(&cities, &search));
    }

    #[test]
    fn display_name_passes_through_other_names(name in "[a-z]{1,10}") {
        prop_assume!(name != "earth" && name != "moon");
        prop_assert_eq!(display_name(&name), name.as_str());
    }
}

#[test]
fn paris_berlin_search_par() {
    let cities = vec![City::new("Paris", "capital"), City::new("Berlin", "capital")];
    let filtered = filter_cities(&cities, "par");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Paris");
}

#[test]
fn mercury_absent_mars_present() {
    let bodies = vec![
        CelestialBodyConfig::new("mercury", "mercury", "planet"),
        CelestialBodyConfig::new("mars", "mars", "planet"),
    ];
    let ids: Vec<_> = filter_system_bodies(&bodies, "")
        .into_iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, ["mars"]);
}

#[test]
fn search_query_normalizes_once() {
    let query = SearchQuery::new("TERRA");
    assert!(query.matches("terra nova"));
    assert!(!query.matches("earth"));
}
