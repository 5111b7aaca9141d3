//! Search box component.
//!
//! A text input with a search icon prefix and a clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, ConsoleColors, SPACING_XS, button_ghost, text_input_default};

/// Creates a search input with clear button.
///
/// The clear button is only shown while there is text.
///
/// # Example
///
/// ```rust,ignore
/// let search = search_box(
///     &self.search,
///     "SCAN_SECTOR",
///     LocationListMessage::SearchChanged,
///     LocationListMessage::SearchCleared,
/// );
/// ```
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(12)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.console().text_muted),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .size(12)
        .padding(Padding::new(6.0).left(4.0))
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(24.0))
            .center_x(Length::Shrink)
            .center_y(Length::Shrink),
        input,
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(
                container(lucide::x().size(12)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.console().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([2.0, 6.0])
            .style(button_ghost),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let console = theme.console();
            container::Style {
                background: Some(console.background_elevated.into()),
                border: Border {
                    color: console.border_default,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
