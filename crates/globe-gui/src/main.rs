//! Globe Console
//!
//! Navigation and target panels for the globe viewer.

use globe_gui::{App, HostConfig};
use iced::{Size, window};
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Logging defaults to `info` and can be overridden through `RUST_LOG`.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Globe Console");

    let config = HostConfig::load();
    let window = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(360.0, 480.0)),
        ..Default::default()
    };

    iced::application(move || App::new(&config), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window)
        .run()
}
