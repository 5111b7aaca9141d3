//! Target list message handler.
//!
//! Forwards search input to the mounted list and applies selections. A
//! message for a list that is no longer mounted is dropped.

use iced::Task;

use super::MessageHandler;
use crate::message::Message;
use crate::panel::{LocationListAction, LocationListMessage, SystemListAction, SystemListMessage};
use crate::state::{AppState, ListPanel};

pub struct ListHandler;

impl MessageHandler<LocationListMessage> for ListHandler {
    fn handle(&self, state: &mut AppState, msg: LocationListMessage) -> Task<Message> {
        let ListPanel::Locations(list) = &mut state.list else {
            tracing::debug!(?msg, "Location list not mounted, dropping message");
            return Task::none();
        };
        match list.update(msg) {
            LocationListAction::None => {}
            LocationListAction::Select(city) => {
                tracing::debug!(city = %city.name, "City selected");
                state.selected_city = Some(city);
            }
        }
        Task::none()
    }
}

impl MessageHandler<SystemListMessage> for ListHandler {
    fn handle(&self, state: &mut AppState, msg: SystemListMessage) -> Task<Message> {
        let ListPanel::System(list) = &mut state.list else {
            tracing::debug!(?msg, "System list not mounted, dropping message");
            return Task::none();
        };
        match list.update(msg) {
            SystemListAction::None => {}
            SystemListAction::Select(id) => {
                tracing::debug!(body = %id, "Body selected from list");
                state.current_body_id = id;
            }
        }
        Task::none()
    }
}
