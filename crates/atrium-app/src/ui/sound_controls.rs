//! Volume slider and mute toggle
//!
//! The slider is widened on mobile so it stays usable as a touch control.

use iced::widget::{button, row, slider, text};
use iced::Element;

use atrium_core::volume::SoundIcon;

use super::app::AtriumApp;
use super::message::Message;

pub fn view(app: &AtriumApp) -> Element<'_, Message> {
    let icon_label = match app.sound_icon {
        SoundIcon::Muted => "muted",
        SoundIcon::Audible => "sound",
    };
    let toggle = button(text(icon_label).size(14)).on_press(Message::MuteToggled);

    let width: f32 = if app.device.is_mobile() { 260.0 } else { 160.0 };
    let volume = slider(0.0..=1.0, app.slider_volume, Message::VolumeChanged)
        .step(0.01)
        .width(width);

    row![toggle, volume]
        .spacing(10)
        .align_y(iced::Center)
        .into()
}
