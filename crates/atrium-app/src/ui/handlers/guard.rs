//! Guard message handlers
//!
//! Wires the core heuristics to the window: resize samples feed the
//! metrics check, a self-rescheduling timer feeds the timing probe, and
//! blocklisted shortcuts are swallowed here. A trip latches the content
//! replacement for the rest of the session.

use std::time::{Duration, Instant};

use iced::{Size, Task};

use atrium_core::guard::{KeyChord, PROBE_INTERVAL};

use crate::ui::app::AtriumApp;
use crate::ui::message::Message;

pub fn handle_window_resized(app: &mut AtriumApp, size: Size) -> Task<Message> {
    app.window_size = size;
    Task::none()
}

pub fn handle_early_metrics(app: &mut AtriumApp) -> Task<Message> {
    run_metrics_check(app);
    Task::none()
}

/// The probe fired; how late it ran is the signal
pub fn handle_probe_due(app: &mut AtriumApp, due: Instant) -> Task<Message> {
    let overshoot = Instant::now().saturating_duration_since(due);
    if app.guard.check_probe_timing(overshoot) {
        app.guard_tripped = true;
    }
    if app.guard_heuristics_active() {
        schedule_probe(PROBE_INTERVAL)
    } else {
        Task::none()
    }
}

pub fn handle_shortcut_blocked(app: &mut AtriumApp, chord: KeyChord) -> Task<Message> {
    // Swallowed: the shortcut reaches nothing else
    if app.guard_heuristics_active() {
        log::debug!("guard: swallowed {:?}", chord);
    }
    Task::none()
}

/// Schedule the next probe; `delay` is also its deadline
pub fn schedule_probe(delay: Duration) -> Task<Message> {
    let due = Instant::now() + delay;
    Task::perform(tokio::time::sleep(delay), move |_| Message::ProbeDue { due })
}

/// Compare the design size against the live viewport
pub fn run_metrics_check(app: &mut AtriumApp) {
    let metrics = app.window_metrics();
    if app.guard.check_window_metrics(metrics) {
        app.guard_tripped = true;
    }
}
