//! Globe Console - GUI library
//!
//! Target lists and navigation rail for the globe viewer, plus the host
//! application that composes them.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod config;
pub mod error;
pub mod handler;
pub mod message;
pub mod panel;
pub mod state;
pub mod theme;

pub use app::App;
pub use config::HostConfig;
pub use error::{GuiError, Result};
pub use message::Message;
