//! Typing animation handlers
//!
//! Each animator schedules its own next tick from the frame it emits, so
//! type, delete, and hold intervals all come out of the core engine.

use iced::Task;

use crate::ui::app::AtriumApp;
use crate::ui::message::Message;

pub fn handle_tagline_tick(app: &mut AtriumApp) -> Task<Message> {
    let frame = app.tagline.tick();
    app.tagline_text = frame.text;
    Task::perform(tokio::time::sleep(frame.next_tick), |_| {
        Message::TaglineTick
    })
}

pub fn handle_title_tick(app: &mut AtriumApp) -> Task<Message> {
    let frame = app.title.tick();
    // An empty title collapses to the bare handle marker
    app.window_title = if frame.text.is_empty() {
        "@".to_string()
    } else {
        frame.text
    };
    Task::perform(tokio::time::sleep(frame.next_tick), |_| Message::TitleTick)
}
