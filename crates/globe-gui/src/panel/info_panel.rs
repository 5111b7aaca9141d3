//! Info panel for the current selection.

use globe_model::{CelestialBodyConfig, City, ViewMode};
use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

use crate::theme::{ConsoleColors, INFO_PANEL_WIDTH, SPACING_MD, SPACING_XS, container_panel};

/// What the info panel describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoSubject<'a> {
    City(&'a City),
    Body(&'a CelestialBodyConfig),
}

impl<'a> InfoSubject<'a> {
    /// Pick the subject for the current view.
    ///
    /// In orbit view a selected city wins over the body being orbited; the
    /// system map always describes the current body.
    pub fn resolve(
        view_mode: ViewMode,
        selected_city: Option<&'a City>,
        current_body: Option<&'a CelestialBodyConfig>,
    ) -> Option<Self> {
        match (view_mode, selected_city) {
            (ViewMode::Orbit, Some(city)) => Some(Self::City(city)),
            _ => current_body.map(Self::Body),
        }
    }

    /// Heading, uppercased.
    pub fn title(&self) -> String {
        match self {
            Self::City(city) => city.name.to_uppercase(),
            Self::Body(body) => body.display_name().to_uppercase(),
        }
    }

    /// Category of a city or type of a body, uppercased.
    pub fn kind(&self) -> String {
        match self {
            Self::City(city) => city.category.to_uppercase(),
            Self::Body(body) => body.kind.to_uppercase(),
        }
    }

    pub fn faction(&self) -> Option<&'a str> {
        match self {
            Self::City(city) => city.faction.as_deref(),
            Self::Body(_) => None,
        }
    }
}

/// Render the info panel; `None` when hidden or when nothing is selected.
pub fn view<'a, M: 'a>(subject: Option<InfoSubject<'a>>, visible: bool) -> Option<Element<'a, M>> {
    if !visible {
        return None;
    }
    let subject = subject?;

    let muted = |theme: &Theme| text::Style {
        color: Some(theme.console().text_muted),
    };

    let mut content = column![
        text(subject.title()).size(16),
        text(subject.kind()).size(10).style(muted),
    ]
    .spacing(SPACING_XS);

    if let Some(faction) = subject.faction() {
        content = content.push(
            text(format!("FACTION // {}", faction.to_uppercase()))
                .size(10)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().primary.base.color),
                }),
        );
    }

    Some(
        container(content)
            .width(Length::Fixed(INFO_PANEL_WIDTH))
            .padding(SPACING_MD)
            .style(container_panel)
            .into(),
    )
}
