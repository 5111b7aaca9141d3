//! Reusable widgets shared by the panels.
//!
//! - [`search_box`] - search input with clear button
//! - [`ListRow`] - selectable row used by the target lists
//! - [`icon_toggle`] - highlighted icon button for the navigation rail

mod list_row;
mod search_box;
mod toggle;

pub use list_row::ListRow;
pub use search_box::search_box;
pub use toggle::icon_toggle;
