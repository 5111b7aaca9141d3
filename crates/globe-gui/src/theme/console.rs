//! Widget style functions for the console theme.
//!
//! Style functions receive `&Theme` and read colors from the extended palette
//! and [`ConsoleColors`]:
//!
//! ```rust,ignore
//! button(text("ORBIT")).style(button_toggle(is_active))
//! container(content).style(container_panel)
//! ```

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::ConsoleColors;
use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Ghost button style - minimal, text-only actions.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    let (background, text_color) = match status {
        button::Status::Active => (None, palette.primary.base.color),
        button::Status::Hovered => (
            Some(console.accent_light.into()),
            palette.primary.base.color,
        ),
        button::Status::Pressed => (
            Some(console.accent_medium.into()),
            palette.primary.base.color,
        ),
        button::Status::Disabled => (None, console.text_disabled),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Toggle button style for the navigation rail.
///
/// Toggles have no fill; the active one is drawn in the accent color and
/// inactive ones are muted until hovered.
pub fn button_toggle(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let console = theme.console();

        let text_color = match status {
            _ if active => palette.primary.base.color,
            button::Status::Hovered | button::Status::Pressed => console.text_secondary,
            _ => console.text_disabled,
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        }
    }
}

/// Target shortcut style: outlined, accent border when active.
pub fn button_target(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let console = theme.console();

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(console.accent_light.into()),
            _ if active => Some(console.accent_light.into()),
            _ => None,
        };

        button::Style {
            background,
            text_color: if active {
                palette.primary.base.color
            } else {
                console.text_secondary
            },
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: spacing::BORDER_WIDTH_THIN,
                color: if active {
                    palette.primary.base.color
                } else {
                    console.border_subtle
                },
            },
            shadow: Shadow::default(),
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Floating panel drawn over the scene.
pub fn container_panel(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_panel.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: console.border_subtle,
        },
        shadow: Shadow {
            color: console.shadow,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 16.0,
        },
        text_color: None,
        ..Default::default()
    }
}

/// The navigation rail.
pub fn container_rail(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_panel.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: console.border_default,
        },
        shadow: Shadow {
            color: console.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 12.0,
        },
        text_color: None,
        ..Default::default()
    }
}

/// Full-window scene backdrop.
pub fn container_backdrop(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.backdrop.into()),
        text_color: Some(console.text_muted),
        ..Default::default()
    }
}

/// Tooltip bubble.
pub fn container_tooltip(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: console.border_default,
        },
        text_color: Some(console.text_secondary),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    let (border_width, border_color) = match status {
        text_input::Status::Focused { .. } => {
            (spacing::BORDER_WIDTH_MEDIUM, console.border_focused)
        }
        text_input::Status::Hovered => (spacing::BORDER_WIDTH_THIN, console.text_disabled),
        text_input::Status::Active | text_input::Status::Disabled => {
            (spacing::BORDER_WIDTH_THIN, console.border_default)
        }
    };

    text_input::Style {
        background: console.background_elevated.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: console.text_muted,
        placeholder: console.text_disabled,
        value: palette.background.base.text,
        selection: console.accent_medium,
    }
}
