//! Landing-to-content transition state machine
//!
//! The reveal sequence is data-driven: consuming the landing click yields
//! an ordered list of `(delay, action)` steps which the host schedules on
//! its own timers. The phase advances only through [`TransitionOrchestrator::apply`],
//! and never moves backwards; there is no return to the landing surface.
//!
//! The schedule is decoupled from playback on purpose: fade-up steps run
//! to completion even when the play request was rejected. Only the
//! default-volume step is chained off a successful play, and that one is
//! scheduled separately by the host.

use std::time::Duration;

/// Delay before the landing surface is hidden and content revealed
pub const LANDING_FADE_MS: u64 = 800;
/// Extra delay after a successful play before the default volume applies
pub const AUTO_VOLUME_DELAY_MS: u64 = 1000;
/// Delay of the first fade-up element, relative to content reveal
pub const FADE_UP_BASE_MS: u64 = 300;
/// Stagger between consecutive fade-up elements
pub const FADE_UP_STAGGER_MS: u64 = 200;
/// Fade-up element whose activation schedules the tagline
pub const TAGLINE_TRIGGER_INDEX: usize = 1;
/// Delay between that element activating and the tagline starting
pub const TAGLINE_EXTRA_DELAY_MS: u64 = 300;

/// Where the page is in its one-way landing-to-content transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// Initial full-screen click target
    #[default]
    Landing,
    /// Click consumed, landing fading to transparent
    FadingOut,
    /// Landing hidden, content visible, fade-ups in progress
    ContentRevealing,
    /// All fade-up elements active (terminal for the session)
    ContentActive,
}

/// A single step of the reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Landing opacity to zero; the click has been consumed
    BeginFadeOut,
    /// Hide landing, show content, command playback
    RevealContent,
    /// Activate fade-up element `i`
    FadeUpElement(usize),
    /// Start the tagline animator
    StartTagline,
}

/// One scheduled step, delay relative to the landing click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub delay: Duration,
    pub action: RevealAction,
}

/// Owns [`TransitionPhase`] and produces the reveal schedule
pub struct TransitionOrchestrator {
    phase: TransitionPhase,
    triggered: bool,
    fade_up_total: usize,
    fade_up_active: usize,
}

impl TransitionOrchestrator {
    pub fn new(fade_up_total: usize) -> Self {
        Self {
            phase: TransitionPhase::Landing,
            triggered: false,
            fade_up_total,
            fade_up_active: 0,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// The landing surface stays on screen until content reveals
    pub fn landing_visible(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Landing | TransitionPhase::FadingOut
        )
    }

    pub fn content_visible(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::ContentRevealing | TransitionPhase::ContentActive
        )
    }

    /// Whether fade-up element `index` has activated
    ///
    /// Elements activate strictly in index order, so a count suffices.
    pub fn fade_up_active(&self, index: usize) -> bool {
        index < self.fade_up_active
    }

    pub fn all_revealed(&self) -> bool {
        self.fade_up_active == self.fade_up_total
    }

    /// Consume the landing click
    ///
    /// Returns the reveal schedule the first time; `None` for re-entrant
    /// clicks while the sequence is already running or done.
    pub fn trigger(&mut self) -> Option<Vec<RevealStep>> {
        if self.triggered {
            log::debug!("transition: ignoring re-entrant landing click");
            return None;
        }
        self.triggered = true;
        log::info!("transition: landing click consumed, reveal scheduled");
        Some(self.schedule())
    }

    /// The full reveal schedule, sorted by delay
    fn schedule(&self) -> Vec<RevealStep> {
        let mut steps = vec![
            RevealStep {
                delay: Duration::ZERO,
                action: RevealAction::BeginFadeOut,
            },
            RevealStep {
                delay: Duration::from_millis(LANDING_FADE_MS),
                action: RevealAction::RevealContent,
            },
        ];
        for index in 0..self.fade_up_total {
            let at = LANDING_FADE_MS + FADE_UP_BASE_MS + index as u64 * FADE_UP_STAGGER_MS;
            steps.push(RevealStep {
                delay: Duration::from_millis(at),
                action: RevealAction::FadeUpElement(index),
            });
            if index == TAGLINE_TRIGGER_INDEX {
                steps.push(RevealStep {
                    delay: Duration::from_millis(at + TAGLINE_EXTRA_DELAY_MS),
                    action: RevealAction::StartTagline,
                });
            }
        }
        steps.sort_by_key(|step| step.delay);
        steps
    }

    /// Advance the phase for one executed step
    pub fn apply(&mut self, action: RevealAction) {
        match action {
            RevealAction::BeginFadeOut => {
                if self.phase == TransitionPhase::Landing {
                    self.phase = TransitionPhase::FadingOut;
                }
            }
            RevealAction::RevealContent => {
                if self.phase == TransitionPhase::FadingOut {
                    self.phase = TransitionPhase::ContentRevealing;
                }
            }
            RevealAction::FadeUpElement(index) => {
                self.fade_up_active = self.fade_up_active.max(index + 1);
                if self.fade_up_active == self.fade_up_total
                    && self.phase == TransitionPhase::ContentRevealing
                {
                    self.phase = TransitionPhase::ContentActive;
                }
            }
            RevealAction::StartTagline => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delays(steps: &[RevealStep]) -> Vec<u64> {
        steps.iter().map(|s| s.delay.as_millis() as u64).collect()
    }

    #[test]
    fn test_trigger_is_idempotent() {
        let mut orchestrator = TransitionOrchestrator::new(4);
        assert!(orchestrator.trigger().is_some());
        // A second click while the sequence runs must not re-execute it
        assert!(orchestrator.trigger().is_none());
        assert!(orchestrator.trigger().is_none());
    }

    #[test]
    fn test_schedule_delays() {
        let mut orchestrator = TransitionOrchestrator::new(4);
        let steps = orchestrator.trigger().unwrap();
        assert_eq!(delays(&steps), vec![0, 800, 1100, 1300, 1500, 1600, 1700]);

        // Tagline starts 300ms after fade-up element 1 (at 1300ms)
        let tagline = steps
            .iter()
            .find(|s| s.action == RevealAction::StartTagline)
            .unwrap();
        assert_eq!(tagline.delay, Duration::from_millis(1600));
    }

    #[test]
    fn test_phase_progression() {
        let mut orchestrator = TransitionOrchestrator::new(2);
        let steps = orchestrator.trigger().unwrap();
        assert_eq!(orchestrator.phase(), TransitionPhase::Landing);

        for step in &steps {
            orchestrator.apply(step.action);
        }
        assert_eq!(orchestrator.phase(), TransitionPhase::ContentActive);
        assert!(orchestrator.all_revealed());
        assert!(!orchestrator.landing_visible());
    }

    #[test]
    fn test_reveal_completes_regardless_of_playback() {
        // The schedule carries no playback-dependent step: applying it in
        // full is valid even when the play request was rejected.
        let mut orchestrator = TransitionOrchestrator::new(4);
        let steps = orchestrator.trigger().unwrap();
        for step in steps {
            orchestrator.apply(step.action);
        }
        for index in 0..4 {
            assert!(orchestrator.fade_up_active(index));
        }
        assert_eq!(orchestrator.phase(), TransitionPhase::ContentActive);
    }

    #[test]
    fn test_fade_up_activation_order() {
        let mut orchestrator = TransitionOrchestrator::new(3);
        orchestrator.trigger().unwrap();
        orchestrator.apply(RevealAction::BeginFadeOut);
        orchestrator.apply(RevealAction::RevealContent);
        orchestrator.apply(RevealAction::FadeUpElement(0));
        assert!(orchestrator.fade_up_active(0));
        assert!(!orchestrator.fade_up_active(1));
        assert_eq!(orchestrator.phase(), TransitionPhase::ContentRevealing);
    }
}
