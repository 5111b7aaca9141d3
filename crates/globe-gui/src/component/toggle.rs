//! Icon toggle buttons for the navigation rail.

use iced::widget::{Text, button, container, text, tooltip};
use iced::{Element, Length};

use crate::theme::{SPACING_SM, SPACING_XS, button_toggle, container_tooltip};

/// Square icon button highlighted while `active`, with a hover label.
///
/// The button consumes the press, so handlers on widgets underneath never
/// see it.
pub fn icon_toggle<'a, M: Clone + 'a>(
    icon: Text<'a>,
    label: &'a str,
    active: bool,
    on_press: M,
) -> Element<'a, M> {
    let toggle = button(
        container(icon.size(16))
            .center_x(Length::Fixed(28.0))
            .center_y(Length::Fixed(28.0)),
    )
    .on_press(on_press)
    .padding(SPACING_XS / 2.0)
    .style(button_toggle(active));

    tooltip(
        toggle,
        container(text(label).size(11)).padding([SPACING_XS, SPACING_SM]).style(container_tooltip),
        tooltip::Position::Top,
    )
    .into()
}
