//! Landing surface: the initial full-screen click target
//!
//! A single pointer press anywhere starts the transition; the fade to
//! transparent is driven by the orchestrator's first reveal step.

use iced::widget::{column, container, mouse_area, text};
use iced::{Color, Element, Fill};

use super::app::{backdrop, AtriumApp};
use super::message::Message;

pub fn view(app: &AtriumApp) -> Element<'_, Message> {
    let alpha = app.landing_opacity;

    let name = text(app.config.content.display_name.clone())
        .size(48)
        .color(Color {
            a: alpha,
            ..Color::WHITE
        });

    let prompt = text("click anywhere to enter").size(18).color(Color {
        a: alpha * 0.7,
        ..Color::WHITE
    });

    let inner = column![name, prompt].spacing(16).align_x(iced::Center);

    mouse_area(
        container(inner)
            .width(Fill)
            .height(Fill)
            .align_x(iced::Center)
            .align_y(iced::Center)
            .style(backdrop),
    )
    .on_press(Message::LandingPressed)
    .into()
}
