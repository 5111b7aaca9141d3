//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one panel's message type;
//! `App::update` dispatches to them:
//!
//! ```ignore
//! match message {
//!     Message::Nav(msg) => NavHandler.handle(&mut self.state, msg),
//!     Message::LocationList(msg) => ListHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```

mod list;
mod nav;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use list::ListHandler;
pub use nav::NavHandler;

/// Trait for handling messages in the Iced architecture.
pub trait MessageHandler<M> {
    /// Handle a message, mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
