//! Caus Marcenaria showcase - the studio's landing page as a desktop app
//! Built with iced: sticky header, reveal-on-scroll sections, project
//! carousels and a floating tools backdrop

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod content;
mod features;
mod i18n;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Daemon so the close request reaches the app and teardown runs first
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
