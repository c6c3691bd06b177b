//! Fireside - capture a moment, generate music, drop the needle
//!
//! This is the main entry point for the GUI application. It loads the
//! configuration, then launches the iced application; everything else
//! (screens, audio backend, upload client) hangs off the app state.

mod audio;
mod config;
mod ui;
mod upload;

use iced::{Size, Task};

use ui::app::FiresideApp;
use ui::message::Message;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("fireside starting up");

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                         Fireside                              ║");
    println!("║          capture a moment, drop the needle                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);
    let window = Size::new(config.window.width, config.window.height);

    iced::application(
        move || (FiresideApp::new(config.clone()), Task::none()),
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Fireside")
    .window_size(window)
    .run()
}

/// Update function for iced
fn update(app: &mut FiresideApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &FiresideApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &FiresideApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &FiresideApp) -> iced::Theme {
    app.theme()
}
