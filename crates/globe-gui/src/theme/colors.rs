//! Console color extension trait for app-specific colors.
//!
//! Provides an extension trait `ConsoleColors` that adds console-specific
//! color methods to Iced's `Theme`. These are colors not covered by Iced's
//! built-in `ExtendedPalette`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::ConsoleColors;
//!
//! .style(|theme: &Theme| {
//!     let console = theme.console();
//!     container::Style {
//!         background: Some(console.background_panel.into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use iced::{Color, Theme};

/// Console-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleColorSet {
    // === Accent Tints ===
    /// Faint accent wash (hover backgrounds)
    pub accent_light: Color,
    /// Stronger accent wash (selected rows, pressed buttons)
    pub accent_medium: Color,

    // === Backgrounds ===
    /// Translucent panel surface drawn over the scene
    pub background_panel: Color,
    /// Inputs and raised controls
    pub background_elevated: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,

    // === Text ===
    pub text_secondary: Color,
    /// Muted text (categories, hints, inactive icons)
    pub text_muted: Color,
    pub text_disabled: Color,

    // === Special ===
    pub shadow: Color,
    /// Scene backdrop behind every panel
    pub backdrop: Color,
}

/// Extension trait for console-specific colors.
///
/// Use it inside style closures that receive a `&Theme`.
pub trait ConsoleColors {
    /// Get the console color set for this theme.
    fn console(&self) -> ConsoleColorSet;
}

impl ConsoleColors for Theme {
    fn console(&self) -> ConsoleColorSet {
        let palette = self.extended_palette();
        let accent = palette.primary.base.color;
        let background = palette.background.base.color;

        ConsoleColorSet {
            accent_light: with_alpha(accent, 0.15),
            accent_medium: with_alpha(accent, 0.30),

            background_panel: with_alpha(blend_color(background, Color::WHITE, 0.04), 0.85),
            background_elevated: blend_color(background, Color::WHITE, 0.08),

            border_default: blend_color(background, Color::WHITE, 0.18),
            border_subtle: blend_color(background, Color::WHITE, 0.10),
            border_focused: accent,

            text_secondary: Color::from_rgb(0.78, 0.78, 0.82),
            text_muted: Color::from_rgb(0.55, 0.55, 0.60),
            text_disabled: Color::from_rgb(0.38, 0.38, 0.42),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
            backdrop: blend_color(background, Color::from_rgb(0.05, 0.08, 0.16), 0.6),
        }
    }
}

/// Blend two colors by a factor (0.0 = base, 1.0 = blend).
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::console_theme;

    #[test]
    fn test_blend_endpoints() {
        let base = Color::from_rgb(0.2, 0.4, 0.6);
        assert_eq!(blend_color(base, Color::WHITE, 0.0), base);
        assert_eq!(blend_color(base, Color::WHITE, 1.0), Color::WHITE);
    }

    #[test]
    fn test_accent_tints_follow_primary() {
        let theme = console_theme();
        let console = theme.console();
        let accent = theme.extended_palette().primary.base.color;
        assert_eq!(console.border_focused, accent);
        assert_eq!(console.accent_light.r, accent.r);
        assert!(console.accent_light.a < console.accent_medium.a);
    }
}
