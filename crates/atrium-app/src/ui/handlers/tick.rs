//! Tick message handler
//!
//! Runs every 250ms for:
//! - Player notice draining (play-started clears the placeholder backdrop)
//! - The window-metrics guard cadence (desktop only, every second)

use iced::Task;

use atrium_core::controller::PlayerNotice;
use atrium_core::guard::METRICS_INTERVAL;

use crate::ui::app::{AtriumApp, TICK_INTERVAL};
use crate::ui::handlers::guard::run_metrics_check;
use crate::ui::message::Message;

/// Handle the tick message
pub fn handle(app: &mut AtriumApp) -> Task<Message> {
    for notice in app.controller.drain_notices() {
        match notice {
            PlayerNotice::PlaybackBegan => {
                if !app.backdrop_cleared {
                    log::info!("content: backdrop cleared, video is presenting");
                }
                app.backdrop_cleared = true;
            }
        }
    }

    if app.guard_heuristics_active() {
        app.since_metrics += TICK_INTERVAL;
        if app.since_metrics >= METRICS_INTERVAL {
            app.since_metrics = std::time::Duration::ZERO;
            run_metrics_check(app);
        }
    }

    Task::none()
}
