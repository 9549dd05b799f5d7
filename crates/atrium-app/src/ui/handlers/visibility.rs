//! Visibility message handler
//!
//! Translates window focus changes through the core visibility policy.
//! Nothing happens until the content phase has begun; after that,
//! regaining visibility resumes playback and reasserts the current volume,
//! and losing it pauses on mobile only.

use iced::Task;

use atrium_core::viewport::{on_visibility_change, PlaybackDirective};

use crate::ui::app::AtriumApp;
use crate::ui::message::Message;

pub fn handle(app: &mut AtriumApp, visible: bool) -> Task<Message> {
    let directives =
        on_visibility_change(visible, app.transition.content_visible(), app.device);

    for directive in directives {
        match directive {
            PlaybackDirective::Resume => {
                app.controller.play();
            }
            PlaybackDirective::ReassertVolume => {
                let current = app.slider_volume;
                app.volume.reassert(&mut app.controller, current);
            }
            PlaybackDirective::Pause => {
                app.controller.pause();
            }
        }
    }
    Task::none()
}
