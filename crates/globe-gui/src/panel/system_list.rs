//! Searchable list of celestial bodies.
//!
//! Passive bodies are never listed, whatever the search text. There is no
//! selection marker: the list does not know the current body.

use globe_model::{CelestialBodyConfig, filter_system_bodies};
use iced::Element;

use super::{Viewport, list_frame};
use crate::component::{ListRow, search_box};

/// Panel title.
pub const TITLE: &str = "SYSTEM_TARGETS";

/// Search box placeholder.
pub const PLACEHOLDER: &str = "SCAN_ARRAY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemListMessage {
    SearchChanged(String),
    SearchCleared,
    /// Row activated; carries the body id.
    Select(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemListAction {
    None,
    Select(String),
}

#[derive(Debug, Clone, Copy)]
pub struct SystemListProps<'a> {
    pub bodies: &'a [CelestialBodyConfig],
    pub force_visible: bool,
    pub viewport: Viewport,
}

/// System list state: the search text of the mounted panel.
#[derive(Debug, Clone, Default)]
pub struct SystemList {
    search: String,
}

impl SystemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn update(&mut self, message: SystemListMessage) -> SystemListAction {
        match message {
            SystemListMessage::SearchChanged(search) => {
                self.search = search;
                SystemListAction::None
            }
            SystemListMessage::SearchCleared => {
                self.search.clear();
                SystemListAction::None
            }
            SystemListMessage::Select(id) => SystemListAction::Select(id),
        }
    }

    /// Bodies listed for the current search text.
    pub fn rows<'a>(&self, bodies: &'a [CelestialBodyConfig]) -> Vec<&'a CelestialBodyConfig> {
        filter_system_bodies(bodies, &self.search)
    }

    /// Render the panel; `None` when hidden on a narrow viewport.
    pub fn view<'a>(&'a self, props: SystemListProps<'a>) -> Option<Element<'a, SystemListMessage>> {
        if !props.viewport.shows_panel(props.force_visible) {
            return None;
        }

        let rows = self
            .rows(props.bodies)
            .into_iter()
            .map(|body| {
                ListRow::new(
                    body.display_name().to_uppercase(),
                    SystemListMessage::Select(body.id.clone()),
                )
                .secondary(body.kind.to_uppercase())
                .view()
            })
            .collect();

        let search = search_box(
            &self.search,
            PLACEHOLDER,
            SystemListMessage::SearchChanged,
            SystemListMessage::SearchCleared,
        );

        Some(list_frame(TITLE, search, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies() -> Vec<CelestialBodyConfig> {
        vec![
            CelestialBodyConfig::new("mercury", "mercury", "planet"),
            CelestialBodyConfig::new("earth", "earth", "planet"),
            CelestialBodyConfig::new("moon", "moon", "satellite"),
            CelestialBodyConfig::new("mars", "mars", "planet"),
        ]
    }

    fn ids(rows: &[&CelestialBodyConfig]) -> Vec<String> {
        rows.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn test_mercury_and_mars_lists_mars_only() {
        let bodies = vec![
            CelestialBodyConfig::new("mercury", "mercury", "planet"),
            CelestialBodyConfig::new("mars", "mars", "planet"),
        ];
        let list = SystemList::new();
        assert_eq!(ids(&list.rows(&bodies)), ["mars"]);
    }

    #[test]
    fn test_searching_a_passive_body_finds_nothing() {
        let bodies = bodies();
        let mut list = SystemList::new();
        list.update(SystemListMessage::SearchChanged("MERC".into()));
        assert!(list.rows(&bodies).is_empty());
    }

    #[test]
    fn test_search_matches_type() {
        let bodies = bodies();
        let mut list = SystemList::new();
        list.update(SystemListMessage::SearchChanged("sat".into()));
        assert_eq!(ids(&list.rows(&bodies)), ["moon"]);
    }

    #[test]
    fn test_search_matches_data_name_not_display_name() {
        let bodies = bodies();
        let mut list = SystemList::new();
        list.update(SystemListMessage::SearchChanged("terra".into()));
        assert!(list.rows(&bodies).is_empty());
        list.update(SystemListMessage::SearchChanged("earth".into()));
        assert_eq!(ids(&list.rows(&bodies)), ["earth"]);
    }

    #[test]
    fn test_select_emits_id() {
        let mut list = SystemList::new();
        assert_eq!(
            list.update(SystemListMessage::Select("moon".into())),
            SystemListAction::Select("moon".into())
        );
    }

    #[test]
    fn test_visibility() {
        let bodies = bodies();
        let list = SystemList::new();
        let mut props = SystemListProps {
            bodies: &bodies,
            force_visible: false,
            viewport: Viewport::new(600.0, 768.0),
        };
        assert!(list.view(props).is_none());
        props.force_visible = true;
        assert!(list.view(props).is_some());
    }

    #[test]
    fn test_empty_collection_renders_empty_panel() {
        let list = SystemList::new();
        let props = SystemListProps {
            bodies: &[],
            force_visible: false,
            viewport: Viewport::default(),
        };
        assert!(list.rows(&[]).is_empty());
        assert!(list.view(props).is_some());
    }
}
