//! Navigation rail message handler.

use iced::Task;

use super::MessageHandler;
use crate::message::Message;
use crate::panel::NavMessage;
use crate::state::AppState;

/// Applies navigation rail requests to the host state.
pub struct NavHandler;

impl MessageHandler<NavMessage> for NavHandler {
    fn handle(&self, state: &mut AppState, msg: NavMessage) -> Task<Message> {
        match msg {
            NavMessage::SelectBody(id) => {
                tracing::debug!(body = %id, "Body selected from rail");
                state.current_body_id = id;
            }
            NavMessage::ViewModeChanged(mode) => {
                tracing::debug!(%mode, previous = %state.view_mode, "View mode changed");
                state.set_view_mode(mode);
            }
            NavMessage::ZoomChanged(zoom) => {
                tracing::debug!(%zoom, "Zoom changed");
                state.zoom = zoom;
            }
            NavMessage::ToggleInfo => {
                state.info_visible = !state.info_visible;
                tracing::debug!(visible = state.info_visible, "Info panel toggled");
            }
            NavMessage::ToggleList => {
                state.list_visible = !state.list_visible;
                tracing::debug!(visible = state.list_visible, "Target list toggled");
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use globe_model::{ViewMode, ZoomLevel};

    use super::*;

    #[test]
    fn test_select_body() {
        let mut state = AppState::default();
        let _ = NavHandler.handle(&mut state, NavMessage::SelectBody("mars".into()));
        assert_eq!(state.current_body_id, "mars");
    }

    #[test]
    fn test_zoom_changed() {
        let mut state = AppState::default();
        let _ = NavHandler.handle(&mut state, NavMessage::zoom(42));
        assert_eq!(state.zoom, ZoomLevel::new(42).unwrap());
        assert_eq!(state.zoom.label(), "42%");
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = AppState::default();
        let _ = NavHandler.handle(&mut state, NavMessage::ToggleInfo);
        assert!(state.info_visible);
        assert!(state.list_visible);

        let _ = NavHandler.handle(&mut state, NavMessage::ToggleList);
        assert!(state.info_visible);
        assert!(!state.list_visible);

        let _ = NavHandler.handle(&mut state, NavMessage::ToggleInfo);
        assert!(!state.info_visible);
    }

    #[test]
    fn test_active_mode_still_applies() {
        let mut state = AppState::default();
        let _ = NavHandler.handle(&mut state, NavMessage::ViewModeChanged(ViewMode::Orbit));
        assert_eq!(state.view_mode, ViewMode::Orbit);
        let _ = NavHandler.handle(&mut state, NavMessage::ViewModeChanged(ViewMode::System));
        assert_eq!(state.view_mode, ViewMode::System);
        assert_eq!(state.list.mode(), ViewMode::System);
    }
}
