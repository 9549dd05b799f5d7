//! Main iced application for atrium
//!
//! Holds the page state and dispatches messages to the handlers:
//! - Transition orchestration (landing click, reveal steps)
//! - Volume control (slider, mute toggle, automatic flows)
//! - Typing animations (tagline and window title)
//! - Guard cadence and visibility reactions

use std::time::Duration;

use iced::time;
use iced::widget::{container, text};
use iced::{Color, Element, Fill, Size, Subscription, Task, Theme};

use atrium_core::controller::MediaController;
use atrium_core::guard::{GuardKey, KeyChord, PageGuard, WindowMetrics, REFUSAL_MESSAGE};
use atrium_core::surface::PlayerSurface;
use atrium_core::tagline::TaglineAnimator;
use atrium_core::transition::TransitionOrchestrator;
use atrium_core::viewport::{classify_device, DeviceClass};
use atrium_core::volume::{SoundIcon, VolumeState};

use crate::config::PageConfig;
use super::handlers;
use super::message::Message;

/// Design window size; the guard compares the live viewport against it
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Fade-up elements on the content page: header, tagline, links, footer
pub const FADE_UP_COUNT: usize = 4;

/// Periodic tick for player notices and the guard metrics cadence
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state
pub struct AtriumApp {
    pub config: PageConfig,
    /// Wraps the player surface; owns playback state
    pub controller: MediaController,
    /// User-override state for the audio level
    pub volume: VolumeState,
    /// Landing-to-content state machine
    pub transition: TransitionOrchestrator,
    pub tagline: TaglineAnimator,
    pub tagline_text: String,
    pub title: TaglineAnimator,
    pub window_title: String,
    pub device: DeviceClass,
    pub guard: PageGuard,
    /// Latched once the guard trips; the page content stays replaced
    pub guard_tripped: bool,
    pub sound_icon: SoundIcon,
    /// Slider position, mirrors the last applied volume
    pub slider_volume: f32,
    /// Play-started received; the placeholder backdrop is gone
    pub backdrop_cleared: bool,
    pub view_count_label: String,
    pub landing_opacity: f32,
    /// First-touch playback kick consumed (mobile only)
    pub mobile_play_kicked: bool,
    /// Latest inner viewport sample for the guard
    pub window_size: Size,
    /// Time accumulated toward the next metrics check
    pub since_metrics: Duration,
}

impl AtriumApp {
    /// Create the application state and bind the player surface
    pub fn new(
        config: PageConfig,
        surface: Box<dyn PlayerSurface>,
        view_count_label: String,
    ) -> Self {
        let device = match config.device.force_mobile {
            Some(true) => DeviceClass::Mobile,
            Some(false) => DeviceClass::Desktop,
            None => classify_device(&platform_ident()),
        };
        log::info!("device classified as {:?}", device);

        let mut controller = MediaController::new(surface);
        controller.initialize();

        let tagline = TaglineAnimator::new(config.tagline.strings.clone(), config.tagline.timings());
        let title = TaglineAnimator::new(vec![config.title.handle.clone()], config.title.timings());
        let guard = PageGuard::new(config.guard.enabled);

        Self {
            controller,
            volume: VolumeState::new(),
            transition: TransitionOrchestrator::new(FADE_UP_COUNT),
            tagline,
            tagline_text: String::new(),
            title,
            window_title: "@".to_string(),
            device,
            guard,
            guard_tripped: false,
            sound_icon: SoundIcon::Muted,
            slider_volume: 0.0,
            backdrop_cleared: false,
            view_count_label,
            landing_opacity: 1.0,
            mobile_play_kicked: false,
            window_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            since_metrics: Duration::ZERO,
            config,
        }
    }

    /// Startup tasks: title animation, plus the guard's early one-shot
    /// checks on desktop
    pub fn boot_tasks(&mut self) -> Task<Message> {
        let _ = self.title.start();
        let mut tasks = vec![Task::done(Message::TitleTick)];
        if self.guard_heuristics_active() {
            tasks.push(Task::perform(
                tokio::time::sleep(atrium_core::guard::EARLY_METRICS_DELAY),
                |_| Message::EarlyMetricsDue,
            ));
            tasks.push(handlers::guard::schedule_probe(
                atrium_core::guard::EARLY_PROBE_DELAY,
            ));
        }
        Task::batch(tasks)
    }

    /// Devtools heuristics run on desktop only
    pub fn guard_heuristics_active(&self) -> bool {
        self.config.guard.enabled && !self.device.is_mobile()
    }

    /// Window geometry for the metrics heuristic: the design size against
    /// the live viewport (a docked inspector shrinks the page)
    pub fn window_metrics(&self) -> WindowMetrics {
        WindowMetrics {
            outer_width: WINDOW_WIDTH as u32,
            outer_height: WINDOW_HEIGHT as u32,
            inner_width: self.window_size.width as u32,
            inner_height: self.window_size.height as u32,
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => handlers::tick::handle(self),

            Message::LandingPressed => handlers::transition::handle_landing_pressed(self),
            Message::RevealStep(action) => handlers::transition::handle_reveal_step(self, action),
            Message::AutoVolumeDue => handlers::transition::handle_auto_volume_due(self),

            Message::VolumeChanged(value) => handlers::sound::handle_volume_changed(self, value),
            Message::MuteToggled => handlers::sound::handle_mute_toggled(self),
            Message::ContentPressed => handlers::sound::handle_content_pressed(self),

            Message::TaglineTick => handlers::typing::handle_tagline_tick(self),
            Message::TitleTick => handlers::typing::handle_title_tick(self),

            Message::VisibilityChanged(visible) => handlers::visibility::handle(self, visible),

            Message::WindowResized(size) => handlers::guard::handle_window_resized(self, size),
            Message::EarlyMetricsDue => handlers::guard::handle_early_metrics(self),
            Message::ProbeDue { due } => handlers::guard::handle_probe_due(self, due),
            Message::ShortcutBlocked(chord) => handlers::guard::handle_shortcut_blocked(self, chord),
        }
    }

    /// Subscribe to the tick, window events, and the shortcut blocklist
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            time::every(TICK_INTERVAL).map(|_| Message::Tick),
            iced::event::listen_with(window_event),
            iced::event::listen_with(keyboard_event),
        ])
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        if self.guard_tripped {
            return self.view_refusal();
        }
        if self.transition.landing_visible() {
            super::landing_view::view(self)
        } else {
            super::content_view::view(self)
        }
    }

    /// The page after the guard tripped: nothing but the refusal line
    fn view_refusal(&self) -> Element<'_, Message> {
        container(text(REFUSAL_MESSAGE).size(28).color(Color::WHITE))
            .width(Fill)
            .height(Fill)
            .align_x(iced::Center)
            .align_y(iced::Center)
            .style(backdrop)
            .into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Black page backdrop shared by every view
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color::BLACK)),
        ..container::Style::default()
    }
}

/// Identification string for device classification
fn platform_ident() -> String {
    format!("{} {}", std::env::consts::OS, std::env::consts::ARCH)
}

fn window_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::Focused) => Some(Message::VisibilityChanged(true)),
        iced::Event::Window(iced::window::Event::Unfocused) => {
            Some(Message::VisibilityChanged(false))
        }
        iced::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    }
}

fn keyboard_event(
    event: iced::Event,
    _status: iced::event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            key_press(key, modifiers)
        }
        _ => None,
    }
}

fn key_press(key: iced::keyboard::Key, modifiers: iced::keyboard::Modifiers) -> Option<Message> {
    let chord = guard_chord(&key, modifiers)?;
    atrium_core::guard::is_blocked_shortcut(chord).then_some(Message::ShortcutBlocked(chord))
}

fn guard_chord(
    key: &iced::keyboard::Key,
    modifiers: iced::keyboard::Modifiers,
) -> Option<KeyChord> {
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    let key = match key {
        Key::Named(Named::F12) => GuardKey::F12,
        Key::Character(s) => GuardKey::Char(s.chars().next()?),
        _ => return None,
    };
    Some(KeyChord {
        ctrl: modifiers.control(),
        shift: modifiers.shift(),
        key,
    })
}
