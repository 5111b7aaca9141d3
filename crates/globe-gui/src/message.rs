//! Top-level message enum for the console.
//!
//! Panel messages are wrapped so each panel stays unaware of the host.

use iced::Size;

use crate::panel::{LocationListMessage, NavMessage, SystemListMessage};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Location list (orbit view).
    LocationList(LocationListMessage),

    /// System list (system map).
    SystemList(SystemListMessage),

    /// Navigation rail.
    Nav(NavMessage),

    /// Press on the scene background.
    DismissInfo,

    WindowResized(Size),
}
