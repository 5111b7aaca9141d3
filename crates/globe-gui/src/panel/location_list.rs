//! Searchable list of globe locations.
//!
//! Renders nothing when there are no cities. Rows follow the source order of
//! the cities that match the search text on any field.

use globe_model::{City, GlobeData, filter_cities};
use iced::Element;

use super::{Viewport, list_frame};
use crate::component::{ListRow, search_box};

/// Panel title.
pub const TITLE: &str = "TARGET_LIST";

/// Search box placeholder.
pub const PLACEHOLDER: &str = "SCAN_SECTOR";

/// Messages produced by the location list.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationListMessage {
    SearchChanged(String),
    SearchCleared,
    Select(City),
}

/// What the host has to do after [`LocationList::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum LocationListAction {
    None,
    Select(City),
}

/// Inputs supplied by the host on every render.
#[derive(Debug, Clone, Copy)]
pub struct LocationListProps<'a> {
    pub data: &'a GlobeData,
    pub selected: Option<&'a City>,
    pub force_visible: bool,
    pub viewport: Viewport,
}

/// One rendered row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationRow<'a> {
    pub city: &'a City,
    pub selected: bool,
}

/// Location list state: the search text of the mounted panel.
#[derive(Debug, Clone, Default)]
pub struct LocationList {
    search: String,
}

impl LocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn update(&mut self, message: LocationListMessage) -> LocationListAction {
        match message {
            LocationListMessage::SearchChanged(search) => {
                self.search = search;
                LocationListAction::None
            }
            LocationListMessage::SearchCleared => {
                self.search.clear();
                LocationListAction::None
            }
            LocationListMessage::Select(city) => LocationListAction::Select(city),
        }
    }

    /// Rows for the current search text, or `None` when there is nothing to list.
    pub fn rows<'a>(
        &self,
        data: &'a GlobeData,
        selected: Option<&City>,
    ) -> Option<Vec<LocationRow<'a>>> {
        if !data.has_cities() {
            return None;
        }
        let rows = filter_cities(data.cities(), &self.search)
            .into_iter()
            .map(|city| LocationRow {
                city,
                selected: city.is_selected(selected),
            })
            .collect();
        Some(rows)
    }

    /// Render the panel; `None` when hidden or empty.
    pub fn view<'a>(
        &'a self,
        props: LocationListProps<'a>,
    ) -> Option<Element<'a, LocationListMessage>> {
        if !props.viewport.shows_panel(props.force_visible) {
            return None;
        }
        let rows = self.rows(props.data, props.selected)?;

        let rows = rows
            .into_iter()
            .map(|row| {
                ListRow::new(
                    row.city.name.to_uppercase(),
                    LocationListMessage::Select(row.city.clone()),
                )
                .secondary(row.city.category.to_uppercase())
                .selected(row.selected)
                .view()
            })
            .collect();

        let search = search_box(
            &self.search,
            PLACEHOLDER,
            LocationListMessage::SearchChanged,
            LocationListMessage::SearchCleared,
        );

        Some(list_frame(TITLE, search, rows))
    }
}
