//! Navigation rail: zoom slider, view-mode toggles, visibility toggles and
//! the target shortcut rail.
//!
//! The rail holds no state. Every control emits a [`NavMessage`] and the host
//! decides what changes; highlights are re-derived from the props on each
//! render.

use globe_model::{CelestialBodyConfig, ViewMode, ZoomLevel, target_bodies};
use iced::widget::{Text, button, column, container, row, rule, scrollable, slider, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use super::Viewport;
use crate::component::icon_toggle;
use crate::theme::{
    ConsoleColors, RAIL_MAX_WIDTH, RAIL_RESERVED_MOBILE, SPACING_MD, SPACING_SM, SPACING_XS,
    ZOOM_SLIDER_WIDTH, button_target, container_rail,
};

/// Hover label of the info toggle.
pub const INFO_TOGGLE_LABEL: &str = "TOGGLE SYSTEM INFO";

/// Hover label of the target list toggle.
pub const LIST_TOGGLE_LABEL: &str = "TOGGLE TARGET LIST";

/// Messages produced by the navigation rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMessage {
    /// A target shortcut was pressed; carries the body id.
    SelectBody(String),
    /// A view-mode toggle was pressed, even if it is already active.
    ViewModeChanged(ViewMode),
    ZoomChanged(ZoomLevel),
    ToggleInfo,
    ToggleList,
}

impl NavMessage {
    /// Message for a zoom slider value.
    pub fn zoom(value: u8) -> Self {
        Self::ZoomChanged(ZoomLevel::from_slider(value))
    }
}

/// Inputs supplied by the host on every render.
#[derive(Debug, Clone, Copy)]
pub struct SystemNavProps<'a> {
    pub bodies: &'a [CelestialBodyConfig],
    pub current_body_id: &'a str,
    pub view_mode: ViewMode,
    pub zoom: ZoomLevel,
    pub info_visible: bool,
    pub list_visible: bool,
    pub viewport: Viewport,
}

/// One shortcut on the target rail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLink<'a> {
    pub id: &'a str,
    /// Uppercased display name.
    pub label: String,
    pub active: bool,
}

/// Shortcuts for the allowlisted bodies, in source order.
pub fn target_links<'a>(
    bodies: &'a [CelestialBodyConfig],
    current_body_id: &str,
) -> Vec<TargetLink<'a>> {
    target_bodies(bodies)
        .into_iter()
        .map(|body| TargetLink {
            id: &body.id,
            label: body.display_name().to_uppercase(),
            active: body.id == current_body_id,
        })
        .collect()
}

/// Maximum width of the scrolling target rail.
///
/// On mobile the rail gives way to the toggles; the set of controls is the
/// same either way.
pub fn rail_width(viewport: Viewport) -> f32 {
    if viewport.is_mobile() {
        (viewport.width - RAIL_RESERVED_MOBILE).max(0.0)
    } else {
        RAIL_MAX_WIDTH
    }
}

fn mode_icon<'a>(mode: ViewMode) -> Text<'a> {
    match mode {
        ViewMode::Orbit => lucide::orbit(),
        ViewMode::System => lucide::sun(),
    }
}

fn separator<'a>() -> Element<'a, NavMessage> {
    container(rule::vertical(1).style(|theme: &Theme| rule::Style {
        color: theme.console().border_default,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }))
    .height(Length::Fixed(12.0))
    .padding([0.0, SPACING_XS])
    .into()
}

/// Render the navigation rail. It is always visible.
pub fn view<'a>(props: SystemNavProps<'a>) -> Element<'a, NavMessage> {
    // Zoom
    let zoom = row![
        slider(ZoomLevel::RANGE, props.zoom.get(), NavMessage::zoom)
            .step(1u8)
            .width(Length::Fixed(ZOOM_SLIDER_WIDTH)),
        text(props.zoom.label())
            .size(10)
            .width(Length::Fixed(32.0))
            .style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_muted),
            }),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    // Toggles
    let mut toggles = row![].spacing(SPACING_SM).align_y(Alignment::Center);
    for mode in ViewMode::ALL {
        toggles = toggles.push(icon_toggle(
            mode_icon(mode),
            mode.title(),
            props.view_mode == mode,
            NavMessage::ViewModeChanged(mode),
        ));
    }
    toggles = toggles
        .push(separator())
        .push(icon_toggle(
            lucide::info(),
            INFO_TOGGLE_LABEL,
            props.info_visible,
            NavMessage::ToggleInfo,
        ))
        .push(icon_toggle(
            lucide::crosshair(),
            LIST_TOGGLE_LABEL,
            props.list_visible,
            NavMessage::ToggleList,
        ));

    // Target shortcuts
    let links = target_links(props.bodies, props.current_body_id)
        .into_iter()
        .map(|link| {
            button(text(link.label).size(10))
                .on_press(NavMessage::SelectBody(link.id.to_string()))
                .padding([6.0, SPACING_MD])
                .style(button_target(link.active))
                .into()
        });
    let targets = scrollable(row(links).spacing(SPACING_SM))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(2).scroller_width(2),
        ));

    let rail = row![
        toggles,
        separator(),
        container(targets).max_width(rail_width(props.viewport)),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    column![
        zoom,
        container(rail)
            .padding([SPACING_SM, SPACING_MD])
            .style(container_rail),
    ]
    .spacing(SPACING_MD)
    .align_x(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: &str) -> CelestialBodyConfig {
        CelestialBodyConfig::new(id, id, "planet")
    }

    #[test]
    fn test_single_earth_link_is_terra_and_active() {
        let bodies = vec![body("earth")];
        let links = target_links(&bodies, "earth");
        assert_eq!(
            links,
            [TargetLink {
                id: "earth",
                label: "TERRA".to_string(),
                active: true,
            }]
        );
    }

    #[test]
    fn test_links_follow_allowlist_in_source_order() {
        let bodies = vec![
            body("mars"),
            body("jupiter"),
            body("moon"),
            body("sun"),
            body("callisto"),
        ];
        let links = target_links(&bodies, "moon");
        let labels: Vec<_> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["MARS", "LUNA", "CALLISTO"]);
        let active: Vec<_> = links.iter().filter(|l| l.active).map(|l| l.id).collect();
        assert_eq!(active, ["moon"]);
    }

    #[test]
    fn test_unknown_current_body_marks_nothing() {
        let bodies = vec![body("earth"), body("mars")];
        assert!(target_links(&bodies, "pluto").iter().all(|l| !l.active));
    }

    #[test]
    fn test_zoom_slider_value_becomes_message() {
        let NavMessage::ZoomChanged(zoom) = NavMessage::zoom(42) else {
            panic!("expected ZoomChanged");
        };
        assert_eq!(zoom.get(), 42);
        assert_eq!(zoom.label(), "42%");
        assert_eq!("42".parse::<ZoomLevel>().unwrap(), zoom);
    }

    #[test]
    fn test_rail_narrows_on_mobile() {
        assert_eq!(rail_width(Viewport::new(1280.0, 768.0)), RAIL_MAX_WIDTH);
        assert_eq!(rail_width(Viewport::new(480.0, 768.0)), 300.0);
        assert_eq!(rail_width(Viewport::new(100.0, 768.0)), 0.0);
    }

    #[test]
    fn test_view_builds_for_every_layout() {
        let bodies = vec![body("earth"), body("mars")];
        for viewport in [Viewport::new(1280.0, 768.0), Viewport::new(390.0, 768.0)] {
            for view_mode in ViewMode::ALL {
                let _ = view(SystemNavProps {
                    bodies: &bodies,
                    current_body_id: "earth",
                    view_mode,
                    zoom: ZoomLevel::default(),
                    info_visible: true,
                    list_visible: false,
                    viewport,
                });
            }
        }
    }
}
