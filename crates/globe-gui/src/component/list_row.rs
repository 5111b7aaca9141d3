//! Selectable row component for the target lists.
//!
//! # Usage
//!
//! ```rust,ignore
//! ListRow::new("Paris", LocationListMessage::Select(city.clone()))
//!     .secondary("capital")
//!     .selected(city.is_selected(selected))
//!     .view()
//! ```

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_SM, ConsoleColors, SPACING_SM};

/// A clickable list row with hover and selection states.
pub struct ListRow<M> {
    primary: String,
    secondary: Option<String>,
    selected: bool,
    on_click: M,
}

impl<M: Clone> ListRow<M> {
    /// Create a new row.
    pub fn new(primary: impl Into<String>, on_click: M) -> Self {
        Self {
            primary: primary.into(),
            secondary: None,
            selected: false,
            on_click,
        }
    }

    /// Add secondary text below the primary text.
    pub fn secondary(mut self, text: impl Into<String>) -> Self {
        self.secondary = Some(text.into());
        self
    }

    /// Set selection state.
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.selected = is_selected;
        self
    }

    /// Build the element.
    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let is_selected = self.selected;

        let primary = text(self.primary).size(13);
        let text_section: Element<'a, M> = match self.secondary {
            Some(secondary) => column![
                primary,
                text(secondary)
                    .size(11)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.console().text_muted),
                    }),
            ]
            .spacing(2.0)
            .into(),
            None => primary.into(),
        };

        let content = row![text_section, Space::new().width(Length::Fill)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center);

        button(content.padding([SPACING_SM, SPACING_SM]))
            .on_press(self.on_click)
            .width(Length::Fill)
            .style(move |theme: &Theme, status| {
                let palette = theme.extended_palette();
                let console = theme.console();

                let background = if is_selected {
                    Some(console.accent_medium.into())
                } else {
                    match status {
                        button::Status::Hovered | button::Status::Pressed => {
                            Some(console.accent_light.into())
                        }
                        _ => None,
                    }
                };

                button::Style {
                    background,
                    text_color: palette.background.base.text,
                    border: Border {
                        radius: BORDER_RADIUS_SM.into(),
                        color: if is_selected {
                            palette.primary.base.color
                        } else {
                            Color::TRANSPARENT
                        },
                        width: if is_selected { 1.0 } else { 0.0 },
                    },
                    ..Default::default()
                }
            })
            .into()
    }
}
