//! Motionlab - a desktop gallery of animated micro-interaction widgets
//! Built with iced; springs and keyframe tracks drive the choreography

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size(iced::Size::new(860.0, 940.0))
        .antialiasing(true)
        .run()
}
