//! Atrium - a personal landing page as a native experience
//!
//! This is the main entry point for the GUI application. It:
//! 1. Counts the visit and resolves the view-count label
//! 2. Attaches the player surface (embed player, or degraded fallback)
//! 3. Launches the iced application with the landing surface up

mod config;
mod player;
mod ui;

use std::cell::RefCell;

use iced::{Size, Task};

use atrium_core::counter::{badge_url, ViewCounter};
use config::CounterStrategy;
use ui::app::{WINDOW_HEIGHT, WINDOW_WIDTH};
use ui::message::Message;
use ui::AtriumApp;

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("atrium starting up");

    println!("╔══════════════════════════════════════════╗");
    println!("║                 atrium                    ║");
    println!("║        landing page experience            ║");
    println!("╚══════════════════════════════════════════╝");
    println!();

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    // The visit is counted before the window opens
    let view_count_label = match config.counter.strategy {
        CounterStrategy::Local => {
            let count = ViewCounter::default_stores().record_visit();
            log::info!("counter: rendering visit {}", count);
            format!("{} views", count)
        }
        CounterStrategy::Badge => badge_url(&config.counter.badge_page_id),
    };

    let surface = player::attach_surface(&config.player);

    println!("Starting atrium...");

    // Wrap resources in cells so the boot closure can be Fn (required by iced)
    // The boot function is only called once, but iced requires Fn for API consistency
    let surface_cell = RefCell::new(Some(surface));
    let config_cell = RefCell::new(Some(config));

    iced::application(
        move || {
            let surface = surface_cell
                .borrow_mut()
                .take()
                .expect("surface already taken");
            let config = config_cell
                .borrow_mut()
                .take()
                .expect("config already taken");
            let mut app = AtriumApp::new(config, surface, view_count_label.clone());
            let boot = app.boot_tasks();
            (app, boot)
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title(title)
    .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
    .run()
}

/// Update function for iced
fn update(app: &mut AtriumApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &AtriumApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &AtriumApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &AtriumApp) -> iced::Theme {
    app.theme()
}

/// Window title follows the typing animation
fn title(app: &AtriumApp) -> String {
    app.window_title.clone()
}
