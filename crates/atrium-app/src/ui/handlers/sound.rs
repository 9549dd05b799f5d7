//! Sound control handlers
//!
//! Slider and mute-toggle input goes through the volume state so the
//! user-override flag is always recorded. A press on the content page is
//! the "first interaction" hook: it kicks playback on mobile and runs the
//! automatic unmute flow.

use iced::Task;

use atrium_core::types::DEFAULT_AUTO_VOLUME;

use crate::ui::app::AtriumApp;
use crate::ui::message::Message;

pub fn handle_volume_changed(app: &mut AtriumApp, value: f32) -> Task<Message> {
    app.slider_volume = value;
    app.sound_icon = app.volume.apply_user_volume(&mut app.controller, value);
    Task::none()
}

pub fn handle_mute_toggled(app: &mut AtriumApp) -> Task<Message> {
    app.sound_icon = app.volume.toggle_mute(&mut app.controller);
    app.slider_volume = app.controller.volume();
    Task::none()
}

pub fn handle_content_pressed(app: &mut AtriumApp) -> Task<Message> {
    if !app.transition.content_visible() {
        return Task::none();
    }

    // Gesture-based playback unlock: mobile starts the video on the first
    // touch after the landing phase
    if app.device.is_mobile() && !app.mobile_play_kicked {
        app.mobile_play_kicked = true;
        app.controller.play();
    }

    if let Some(icon) = app
        .volume
        .apply_auto_volume(&mut app.controller, DEFAULT_AUTO_VOLUME)
    {
        app.sound_icon = icon;
        app.slider_volume = app.controller.volume();
    }
    Task::none()
}
