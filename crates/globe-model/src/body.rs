//! Celestial bodies and the fixed id sets that gate which bodies a list may show.
//!
//! Two lists consume bodies:
//! - the system target list drops every id in [`PASSIVE_BODY_IDS`] before
//!   applying the search text, so a passive body can never be found;
//! - the navigation shortcut rail keeps only ids in [`TARGET_LINK_IDS`], in
//!   the order the bodies were supplied.

use serde::{Deserialize, Serialize};

use crate::search::SearchQuery;

/// Bodies that are rendered in the scene but never offered as targets.
pub const PASSIVE_BODY_IDS: [&str; 6] =
    ["mercury", "venus", "jupiter", "saturn", "uranus", "neptune"];

/// Bodies that get a shortcut button on the navigation rail.
pub const TARGET_LINK_IDS: [&str; 8] = [
    "earth", "moon", "mars", "belt", "io", "europa", "ganymede", "callisto",
];

/// Configuration of a single celestial body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelestialBodyConfig {
    /// Unique identifier (e.g. "earth").
    pub id: String,

    /// Display name as supplied by the data source.
    pub name: String,

    /// Body classification (e.g. "planet", "moon").
    #[serde(rename = "type")]
    pub kind: String,
}

impl CelestialBodyConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Name used for rendering. See [`display_name`].
    pub fn display_name(&self) -> &str {
        display_name(&self.name)
    }

    /// Whether the body is in the passive denylist.
    pub fn is_passive(&self) -> bool {
        PASSIVE_BODY_IDS.contains(&self.id.as_str())
    }

    /// Whether the body has a navigation shortcut.
    pub fn is_target_link(&self) -> bool {
        TARGET_LINK_IDS.contains(&self.id.as_str())
    }

    /// A body matches when its name or type contains the query.
    pub fn matches(&self, query: &SearchQuery) -> bool {
        query.matches(&self.name) || query.matches(&self.kind)
    }
}

/// Substitute the display name for a body name.
///
/// `earth` renders as `TERRA` and `moon` as `LUNA`; every other name passes
/// through unchanged (uppercasing is a presentation concern).
pub fn display_name(name: &str) -> &str {
    match name {
        "earth" => "TERRA",
        "moon" => "LUNA",
        other => other,
    }
}

/// Bodies offered by the system target list.
///
/// Passive bodies are removed first and unconditionally; the remaining bodies
/// are kept when their name or type matches `search`.
pub fn filter_system_bodies<'a>(
    bodies: &'a [CelestialBodyConfig],
    search: &str,
) -> Vec<&'a CelestialBodyConfig> {
    let query = SearchQuery::new(search);
    bodies
        .iter()
        .filter(|b| !b.is_passive() && b.matches(&query))
        .collect()
}

/// Bodies that get a shortcut on the navigation rail, in source order.
pub fn target_bodies(bodies: &[CelestialBodyConfig]) -> Vec<&CelestialBodyConfig> {
    bodies.iter().filter(|b| b.is_target_link()).collect()
}
