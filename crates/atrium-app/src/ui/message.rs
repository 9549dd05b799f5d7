//! Application messages for atrium
//!
//! All message types that can be dispatched in the page application.

use std::time::Instant;

use atrium_core::guard::KeyChord;
use atrium_core::transition::RevealAction;

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick: drain player notices, run the metrics cadence
    Tick,
    /// Pointer press on the landing surface
    LandingPressed,
    /// Pointer press anywhere on the content page
    ContentPressed,
    /// A scheduled reveal step came due
    RevealStep(RevealAction),
    /// Default-volume step, chained off a successful play
    AutoVolumeDue,
    /// Volume slider moved
    VolumeChanged(f32),
    /// Mute button pressed
    MuteToggled,
    /// Tagline animation advance is due
    TaglineTick,
    /// Window-title animation advance is due
    TitleTick,
    /// Window gained or lost focus
    VisibilityChanged(bool),
    /// Window was resized (inner viewport sample for the guard)
    WindowResized(iced::Size),
    /// One-shot early window-metrics check
    EarlyMetricsDue,
    /// Guard timing probe came due; `due` is when it should have fired
    ProbeDue { due: Instant },
    /// A blocklisted inspector shortcut was swallowed
    ShortcutBlocked(KeyChord),
}
