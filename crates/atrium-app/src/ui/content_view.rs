//! Content page: header, tagline, links, and the footer controls
//!
//! The four fade-up elements activate in order on the orchestrator's
//! staggered schedule. The whole page is a press target: the first press
//! kicks mobile playback and the automatic unmute flow.

use iced::widget::{column, container, mouse_area, row, text, Space};
use iced::{Color, Element, Fill, Theme};

use super::app::AtriumApp;
use super::message::Message;
use super::sound_controls;

pub fn view(app: &AtriumApp) -> Element<'_, Message> {
    let header = text(app.config.content.display_name.clone())
        .size(40)
        .color(fade_color(app, 0));

    // Trailing bar mimics the typing cursor
    let tagline = text(format!("{}|", app.tagline_text))
        .size(22)
        .color(fade_color(app, 1));

    let mut links = row![].spacing(24);
    for label in &app.config.content.links {
        links = links.push(text(label.clone()).size(16).color(fade_color(app, 2)));
    }

    let footer: Element<'_, Message> = if app.transition.fade_up_active(3) {
        row![
            text(app.view_count_label.clone()).size(14).color(DIM),
            Space::new().width(Fill),
            sound_controls::view(app),
        ]
        .align_y(iced::Center)
        .into()
    } else {
        Space::new().height(32).into()
    };

    let content = column![
        Space::new().height(Fill),
        header,
        tagline,
        links,
        Space::new().height(Fill),
        footer,
    ]
    .spacing(18)
    .padding(40)
    .align_x(iced::Center);

    mouse_area(
        container(content)
            .width(Fill)
            .height(Fill)
            .style(page_style(app)),
    )
    .on_press(Message::ContentPressed)
    .into()
}

const DIM: Color = Color {
    r: 0.6,
    g: 0.6,
    b: 0.6,
    a: 1.0,
};

fn fade_color(app: &AtriumApp, index: usize) -> Color {
    let a = if app.transition.fade_up_active(index) {
        1.0
    } else {
        0.0
    };
    Color { a, ..Color::WHITE }
}

/// Placeholder backdrop until playback actually begins, then plain black
/// so the video surface shows through
fn page_style(app: &AtriumApp) -> impl Fn(&Theme) -> container::Style {
    let cleared = app.backdrop_cleared;
    move |_theme: &Theme| {
        let background = if cleared {
            Color::BLACK
        } else {
            Color::from_rgb(0.07, 0.07, 0.09)
        };
        container::Style {
            background: Some(iced::Background::Color(background)),
            ..container::Style::default()
        }
    }
}
