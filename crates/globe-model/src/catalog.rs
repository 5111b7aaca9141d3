//! Catalog of locations and bodies fed to the panels.
//!
//! The catalog is the hand-off point from the data source. It can be built
//! from JSON:
//!
//! ```json
//! {
//!   "cities": [{ "name": "Paris", "category": "capital" }],
//!   "bodies": [{ "id": "earth", "name": "earth", "type": "planet" }]
//! }
//! ```
//!
//! or taken from the built-in set via [`Catalog::builtin`].

use serde::{Deserialize, Serialize};

use crate::body::CelestialBodyConfig;
use crate::city::{City, GlobeData};
use crate::error::Result;

/// Locations plus celestial bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Globe locations. `cities` may be missing from the JSON.
    #[serde(flatten)]
    pub globe: GlobeData,

    /// Bodies in scene order.
    #[serde(default)]
    pub bodies: Vec<CelestialBodyConfig>,
}

impl Catalog {
    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::debug!(
            cities = catalog.globe.cities().len(),
            bodies = catalog.bodies.len(),
            "Parsed catalog"
        );
        Ok(catalog)
    }

    /// Look up a body by id.
    pub fn body(&self, id: &str) -> Option<&CelestialBodyConfig> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// The built-in catalog used when no external catalog is configured.
    pub fn builtin() -> Self {
        let cities = vec![
            City::new("Paris", "capital").with_faction("Concord"),
            City::new("Berlin", "capital").with_faction("Concord"),
            City::new("Lagos", "megacity").with_faction("Sahel Union"),
            City::new("Reykjavik", "relay station"),
            City::new("Singapore", "spaceport").with_faction("Strait Compact"),
            City::new("Nairobi", "launch site").with_faction("Sahel Union"),
            City::new("Kourou", "launch site"),
            City::new("Baikonur", "launch site").with_faction("Steppe Directorate"),
            City::new("Tokyo", "megacity").with_faction("Pacific Accord"),
            City::new("Santiago", "observatory"),
            City::new("Houston", "mission control"),
            City::new("McMurdo", "outpost"),
        ];

        let bodies = vec![
            CelestialBodyConfig::new("sun", "sun", "star"),
            CelestialBodyConfig::new("mercury", "mercury", "planet"),
            CelestialBodyConfig::new("venus", "venus", "planet"),
            CelestialBodyConfig::new("earth", "earth", "planet"),
            CelestialBodyConfig::new("moon", "moon", "satellite"),
            CelestialBodyConfig::new("mars", "mars", "planet"),
            CelestialBodyConfig::new("belt", "asteroid belt", "belt"),
            CelestialBodyConfig::new("jupiter", "jupiter", "gas giant"),
            CelestialBodyConfig::new("io", "io", "satellite"),
            CelestialBodyConfig::new("europa", "europa", "satellite"),
            CelestialBodyConfig::new("ganymede", "ganymede", "satellite"),
            CelestialBodyConfig::new("callisto", "callisto", "satellite"),
            CelestialBodyConfig::new("saturn", "saturn", "gas giant"),
            CelestialBodyConfig::new("uranus", "uranus", "ice giant"),
            CelestialBodyConfig::new("neptune", "neptune", "ice giant"),
        ];

        Self {
            globe: GlobeData::with_cities(cities),
            bodies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_catalog() {
        let json = r#"{
            "cities": [
                { "name": "Paris", "category": "capital" },
                { "name": "Lagos", "faction": "Sahel Union", "category": "megacity" }
            ],
            "bodies": [{ "id": "earth", "name": "earth", "type": "planet" }]
        }"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.globe.cities().len(), 2);
        assert_eq!(
            catalog.globe.cities()[1].faction.as_deref(),
            Some("Sahel Union")
        );
        assert_eq!(catalog.body("earth").map(|b| b.kind.as_str()), Some("planet"));
    }

    #[test]
    fn test_missing_cities_is_absent() {
        let catalog = Catalog::from_json_str(r#"{ "bodies": [] }"#).unwrap();
        assert!(catalog.globe.cities.is_none());
        assert!(!catalog.globe.has_cities());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse catalog JSON"));
    }

    #[test]
    fn test_builtin_has_every_target_link() {
        let catalog = Catalog::builtin();
        for id in crate::body::TARGET_LINK_IDS {
            assert!(catalog.body(id).is_some(), "missing {id}");
        }
        assert!(catalog.globe.has_cities());
    }
}
