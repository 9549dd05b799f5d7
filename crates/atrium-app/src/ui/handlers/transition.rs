//! Transition message handlers
//!
//! Consumes the landing click, schedules the reveal steps on their own
//! timers, and executes each step when it comes due. The fade-up chain and
//! playback are decoupled failure domains: a rejected play drops only the
//! default-volume follow-up, never the reveal.

use std::time::Duration;

use iced::Task;

use atrium_core::transition::{RevealAction, RevealStep, AUTO_VOLUME_DELAY_MS};
use atrium_core::types::{Lifecycle, DEFAULT_AUTO_VOLUME};

use crate::ui::app::AtriumApp;
use crate::ui::message::Message;

/// Handle the landing click: at most one reveal sequence per session
pub fn handle_landing_pressed(app: &mut AtriumApp) -> Task<Message> {
    let Some(steps) = app.transition.trigger() else {
        return Task::none();
    };
    Task::batch(steps.into_iter().map(schedule_step))
}

fn schedule_step(step: RevealStep) -> Task<Message> {
    let RevealStep { delay, action } = step;
    if delay.is_zero() {
        return Task::done(Message::RevealStep(action));
    }
    Task::perform(tokio::time::sleep(delay), move |_| {
        Message::RevealStep(action)
    })
}

/// Execute one reveal step
pub fn handle_reveal_step(app: &mut AtriumApp, action: RevealAction) -> Task<Message> {
    app.transition.apply(action);

    match action {
        RevealAction::BeginFadeOut => {
            app.landing_opacity = 0.0;
            Task::none()
        }
        RevealAction::RevealContent => {
            // Landing is hidden by the phase change; command playback
            let lifecycle = app.controller.play();
            if lifecycle == Lifecycle::Failed {
                log::warn!("transition: playback failed, continuing reveal without video");
                return Task::none();
            }
            // Default volume lands only after a successful play
            Task::perform(
                tokio::time::sleep(Duration::from_millis(AUTO_VOLUME_DELAY_MS)),
                |_| Message::AutoVolumeDue,
            )
        }
        RevealAction::FadeUpElement(_) => Task::none(),
        RevealAction::StartTagline => {
            let delay = app.tagline.start();
            Task::perform(tokio::time::sleep(delay), |_| Message::TaglineTick)
        }
    }
}

/// Apply the post-transition default volume, unless the user got there first
pub fn handle_auto_volume_due(app: &mut AtriumApp) -> Task<Message> {
    if let Some(icon) = app
        .volume
        .apply_auto_volume(&mut app.controller, DEFAULT_AUTO_VOLUME)
    {
        app.sound_icon = icon;
        app.slider_volume = app.controller.volume();
    }
    Task::none()
}
