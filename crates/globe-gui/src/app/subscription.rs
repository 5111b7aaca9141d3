//! Application subscriptions.
//!
//! | Subscription | Purpose |
//! |--------------|---------|
//! | Window resize | Track the viewport width for the responsive layout |

use iced::{Subscription, window};

use crate::message::Message;

/// Create all application subscriptions.
pub fn create_subscription() -> Subscription<Message> {
    Subscription::batch([resize_subscription()])
}

/// Window resize events, including the initial size of the window.
fn resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
