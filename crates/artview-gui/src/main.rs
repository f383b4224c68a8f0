//! Artview - Desktop GUI Application
//!
//! Browse artworks from the Art Institute of Chicago and select rows across
//! pages.

use artview_gui::App;
use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

/// Application entry point.
pub fn main() -> iced::Result {
    // RUST_LOG wins; otherwise info for our crates and warn for the rest
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,artview_gui=info,artview_core=info,artview_source=info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Artview");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(960.0, 600.0)),
            ..Default::default()
        })
        .run()
}
