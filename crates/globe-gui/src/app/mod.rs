//! Main application module for the globe console.
//!
//! The architecture follows the Elm pattern: State → Message → Update → View.
//! All state changes happen in [`App::update`]; views are pure functions of
//! [`AppState`].
//!
//! # Layout
//!
//! The window is a stack of two layers:
//!
//! 1. the scene backdrop, which dismisses the info panel when pressed;
//! 2. the panels: info panel (top left), target list (top right) and the
//!    navigation rail (bottom).
//!
//! Panels are opaque, so presses inside them never reach the backdrop.

mod subscription;

use globe_model::ViewMode;
use iced::widget::{Space, column, container, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use crate::config::HostConfig;
use crate::handler::{ListHandler, MessageHandler, NavHandler};
use crate::message::Message;
use crate::panel::{
    InfoSubject, LocationListProps, SystemListProps, SystemNavProps, info_panel, system_nav,
};
use crate::state::{AppState, ListPanel};
use crate::theme::{
    ConsoleColors, SPACING_LG, SPACING_XS, console_theme, container_backdrop,
};

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application from the loaded config.
    ///
    /// Called once at startup.
    pub fn new(config: &HostConfig) -> (Self, Task<Message>) {
        let state = AppState::new(config, config.catalog());
        tracing::info!(
            view = %state.view_mode,
            zoom = %state.zoom,
            body = %state.current_body_id,
            "Console ready"
        );
        (Self { state }, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LocationList(msg) => ListHandler.handle(&mut self.state, msg),
            Message::SystemList(msg) => ListHandler.handle(&mut self.state, msg),
            Message::Nav(msg) => NavHandler.handle(&mut self.state, msg),

            Message::DismissInfo => {
                if self.state.info_visible {
                    tracing::debug!("Info panel dismissed");
                    self.state.info_visible = false;
                }
                Task::none()
            }

            Message::WindowResized(size) => {
                let was_mobile = self.state.viewport.is_mobile();
                self.state.viewport.width = size.width;
                if was_mobile != self.state.viewport.is_mobile() {
                    tracing::debug!(
                        width = size.width,
                        mobile = self.state.viewport.is_mobile(),
                        "Layout changed"
                    );
                }
                Task::none()
            }
        }
    }

    /// Render the application view.
    pub fn view(&self) -> Element<'_, Message> {
        let state = &self.state;

        let backdrop = mouse_area(
            container(self.view_scene_readout())
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(container_backdrop),
        )
        .on_press(Message::DismissInfo);

        let info: Element<'_, Message> = info_panel::view(
            InfoSubject::resolve(
                state.view_mode,
                state.selected_city.as_ref(),
                state.current_body(),
            ),
            state.info_visible,
        )
        .map(opaque)
        .unwrap_or_else(|| Space::new().into());

        let list: Element<'_, Message> = self
            .view_list()
            .map(opaque)
            .unwrap_or_else(|| Space::new().into());

        let nav = system_nav::view(SystemNavProps {
            bodies: &state.catalog.bodies,
            current_body_id: &state.current_body_id,
            view_mode: state.view_mode,
            zoom: state.zoom,
            info_visible: state.info_visible,
            list_visible: state.list_visible,
            viewport: state.viewport,
        })
        .map(Message::Nav);

        let panels = column![
            row![info, Space::new().width(Length::Fill), list].height(Length::Fill),
            container(opaque(nav)).center_x(Length::Fill),
        ]
        .padding(SPACING_LG);

        stack![backdrop, panels].into()
    }

    /// The mounted target list, if the list slot is filled.
    fn view_list(&self) -> Option<Element<'_, Message>> {
        let state = &self.state;
        let force_visible = state.list_force_visible()?;

        match &state.list {
            ListPanel::Locations(list) => list
                .view(LocationListProps {
                    data: &state.catalog.globe,
                    selected: state.selected_city.as_ref(),
                    force_visible,
                    viewport: state.viewport,
                })
                .map(|panel| panel.map(Message::LocationList)),
            ListPanel::System(list) => list
                .view(SystemListProps {
                    bodies: &state.catalog.bodies,
                    force_visible,
                    viewport: state.viewport,
                })
                .map(|panel| panel.map(Message::SystemList)),
        }
    }

    /// Status text drawn where the external scene renders.
    fn view_scene_readout(&self) -> Element<'_, Message> {
        let state = &self.state;
        let body = state
            .current_body()
            .map(|body| body.display_name().to_uppercase())
            .unwrap_or_else(|| state.current_body_id.to_uppercase());

        let muted = |theme: &Theme| text::Style {
            color: Some(theme.console().text_muted),
        };

        column![
            text(state.view_mode.title()).size(10).style(muted),
            text(body).size(24),
            text(format!("ZOOM {}", state.zoom)).size(10).style(muted),
        ]
        .spacing(SPACING_XS)
        .align_x(Alignment::Center)
        .into()
    }

    /// Window title.
    pub fn title(&self) -> String {
        match self.state.view_mode {
            ViewMode::Orbit => "Globe Console - Orbit".to_string(),
            ViewMode::System => "Globe Console - System".to_string(),
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        console_theme()
    }

    /// Application subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription()
    }
}
