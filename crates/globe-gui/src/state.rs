//! Host state shared by the panels.
//!
//! Everything here is owned by the host and passed to the panels read-only;
//! the panels only ask for changes through messages.

use globe_model::{Catalog, CelestialBodyConfig, City, ViewMode, ZoomLevel};

use crate::config::HostConfig;
use crate::panel::{LocationList, SystemList, Viewport};

/// The list mounted in the list slot.
///
/// Orbit view mounts the location list, the system map mounts the system
/// list. Each mount starts with empty search text.
#[derive(Debug, Clone)]
pub enum ListPanel {
    Locations(LocationList),
    System(SystemList),
}

impl ListPanel {
    /// A freshly mounted list for `mode`.
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Orbit => Self::Locations(LocationList::new()),
            ViewMode::System => Self::System(SystemList::new()),
        }
    }

    /// The view mode this list belongs to.
    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Locations(_) => ViewMode::Orbit,
            Self::System(_) => ViewMode::System,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Locations and bodies on display.
    pub catalog: Catalog,

    pub selected_city: Option<City>,
    pub current_body_id: String,

    pub view_mode: ViewMode,
    pub zoom: ZoomLevel,

    pub info_visible: bool,
    pub list_visible: bool,

    pub viewport: Viewport,

    /// Mounted list panel; always matches `view_mode`.
    pub list: ListPanel,
}

impl AppState {
    pub fn new(config: &HostConfig, catalog: Catalog) -> Self {
        Self {
            catalog,
            selected_city: None,
            current_body_id: config.initial_body.clone(),
            view_mode: config.initial_view,
            zoom: config.initial_zoom,
            info_visible: false,
            list_visible: true,
            viewport: Viewport::new(config.window_width, config.breakpoint),
            list: ListPanel::for_mode(config.initial_view),
        }
    }

    /// Switch view mode, remounting the list when its kind changes.
    ///
    /// Re-selecting the current mode keeps the mounted list and its search
    /// text.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        if self.list.mode() != mode {
            self.list = ListPanel::for_mode(mode);
        }
    }

    /// Config of the current body, if the catalog has it.
    pub fn current_body(&self) -> Option<&CelestialBodyConfig> {
        self.catalog.body(&self.current_body_id)
    }

    /// Whether the list slot is filled, and with which `force_visible` flag.
    ///
    /// `None` when the list is toggled off. On mobile a visible list is
    /// forced on; on desktop it follows the responsive default.
    pub fn list_force_visible(&self) -> Option<bool> {
        self.list_visible.then(|| self.viewport.is_mobile())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&HostConfig::default(), Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::LocationListMessage;

    #[test]
    fn test_initial_state_follows_config() {
        let config = HostConfig {
            initial_view: ViewMode::System,
            initial_body: "mars".to_string(),
            ..HostConfig::default()
        };
        let state = AppState::new(&config, Catalog::builtin());
        assert_eq!(state.list.mode(), ViewMode::System);
        assert_eq!(state.current_body().map(|b| b.name.as_str()), Some("mars"));
        assert!(!state.info_visible);
        assert!(state.list_visible);
    }

    #[test]
    fn test_mode_switch_remounts_list_with_empty_search() {
        let mut state = AppState::default();
        if let ListPanel::Locations(list) = &mut state.list {
            list.update(LocationListMessage::SearchChanged("par".into()));
        }

        state.set_view_mode(ViewMode::Orbit);
        let ListPanel::Locations(list) = &state.list else {
            panic!("orbit view must mount the location list");
        };
        assert_eq!(list.search(), "par");

        state.set_view_mode(ViewMode::System);
        assert!(matches!(&state.list, ListPanel::System(list) if list.search().is_empty()));

        state.set_view_mode(ViewMode::Orbit);
        assert!(matches!(&state.list, ListPanel::Locations(list) if list.search().is_empty()));
    }

    #[test]
    fn test_list_slot_on_mobile_and_desktop() {
        let mut state = AppState::default();
        state.viewport.width = 1280.0;
        assert_eq!(state.list_force_visible(), Some(false));

        state.viewport.width = 390.0;
        assert_eq!(state.list_force_visible(), Some(true));

        state.list_visible = false;
        assert_eq!(state.list_force_visible(), None);
    }
}
