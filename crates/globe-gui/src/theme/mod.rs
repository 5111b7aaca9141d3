//! Theme module for the globe console.
//!
//! - Color palette and theme creation (`palette`)
//! - Console color extension trait (`colors`)
//! - Spacing constants (`spacing`)
//! - Custom widget styles (`console`)

pub mod colors;
pub mod console;
pub mod palette;
pub mod spacing;

pub use colors::{ConsoleColorSet, ConsoleColors};
pub use palette::{ACCENT, console_palette, console_theme};

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_MD, BORDER_RADIUS_SM, INFO_PANEL_WIDTH, LIST_MAX_HEIGHT,
    LIST_PANEL_WIDTH, RAIL_MAX_WIDTH, RAIL_RESERVED_MOBILE, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XS, ZOOM_SLIDER_WIDTH,
};

pub use console::{
    button_ghost, button_target, button_toggle, container_backdrop, container_panel,
    container_rail, container_tooltip, text_input_default,
};
