//! Spacing constants for consistent layout throughout the console.
//!
//! All values are in logical pixels (f32).

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - icon margins, row padding
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default panel padding
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - gaps between panels
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, rows
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - panels
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Full/pill radius - the navigation rail
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

pub const BORDER_WIDTH_THIN: f32 = 1.0;

pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// PANEL SIZES
// =============================================================================

/// Width of the target list panels.
pub const LIST_PANEL_WIDTH: f32 = 240.0;

/// Maximum height of the scrolling list inside a target list panel.
pub const LIST_MAX_HEIGHT: f32 = 360.0;

/// Width of the info panel.
pub const INFO_PANEL_WIDTH: f32 = 260.0;

/// Maximum width of the target shortcut rail on desktop.
pub const RAIL_MAX_WIDTH: f32 = 896.0;

/// Width kept free for the toggles when the rail is narrowed on mobile.
pub const RAIL_RESERVED_MOBILE: f32 = 180.0;

/// Maximum width of the zoom slider.
pub const ZOOM_SLIDER_WIDTH: f32 = 200.0;
