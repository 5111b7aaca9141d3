//! Console color palette.
//!
//! A single dark palette with a signal-red accent. It integrates with Iced's
//! theme system via the `Palette` type.

use iced::Color;
use iced::Theme;
use iced::theme::Palette;

/// Accent red (#E42737).
pub const ACCENT: Color = Color {
    r: 0.894,
    g: 0.153,
    b: 0.216,
    a: 1.0,
};

/// The console palette.
pub fn console_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.04, 0.04, 0.05), // Near black
        text: Color::from_rgb(0.92, 0.92, 0.94),
        primary: ACCENT,
        success: Color::from_rgb(0.35, 0.80, 0.55),
        warning: Color::from_rgb(1.0, 0.75, 0.20),
        danger: Color::from_rgb(0.95, 0.40, 0.40),
    }
}

/// Creates the console theme.
pub fn console_theme() -> Theme {
    Theme::custom("Globe Console".to_string(), console_palette())
}
