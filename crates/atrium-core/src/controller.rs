//! Media controller - owns playback state, wraps the player surface
//!
//! Every operation is caught at this boundary: a surface rejection is
//! logged and reflected in the lifecycle, never propagated to the caller.
//! UI sequencing above the controller keeps going no matter what the
//! surface does.

use crate::surface::{PlayerSurface, SurfaceEvent};
use crate::types::{Lifecycle, PlaybackState};

/// Notification handed to the host after draining the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerNotice {
    /// Playback actually began; the placeholder backdrop can go
    PlaybackBegan,
}

/// Wraps a [`PlayerSurface`] and mirrors its state
pub struct MediaController {
    surface: Box<dyn PlayerSurface>,
    state: PlaybackState,
    has_played: bool,
}

impl MediaController {
    pub fn new(surface: Box<dyn PlayerSurface>) -> Self {
        log::info!("player: using {} surface", surface.name());
        Self {
            surface,
            state: PlaybackState::default(),
            has_played: false,
        }
    }

    /// Bind to the surface: zero the volume, mark inline-playback hints,
    /// disable autopause, and explicitly pause.
    ///
    /// Each step is caught and logged independently; one failing step never
    /// aborts the rest. The controller only reports `Failed` when every
    /// step was rejected, i.e. the surface is unusable.
    pub fn initialize(&mut self) -> Lifecycle {
        let mut failures = 0;

        match self.surface.set_volume(0.0) {
            Ok(()) => {
                self.state.volume = 0.0;
                self.state.muted = true;
            }
            Err(e) => {
                failures += 1;
                log::error!("player init: failed to zero volume: {}", e);
            }
        }
        if let Err(e) = self.surface.set_inline_playback() {
            failures += 1;
            log::error!("player init: failed to set inline playback hints: {}", e);
        }
        if let Err(e) = self.surface.set_autopause(false) {
            failures += 1;
            log::error!("player init: failed to disable autopause: {}", e);
        }
        if let Err(e) = self.surface.pause() {
            failures += 1;
            log::error!("player init: failed to pause: {}", e);
        }

        self.state.lifecycle = if failures == 4 {
            Lifecycle::Failed
        } else {
            Lifecycle::Ready
        };
        self.state.lifecycle
    }

    /// Request playback. Rejection marks `Failed` and is logged; a later
    /// request may still recover (visibility resume retries playback).
    pub fn play(&mut self) -> Lifecycle {
        match self.surface.play() {
            Ok(()) => self.state.lifecycle = Lifecycle::Playing,
            Err(e) => {
                log::error!("player: play rejected: {}", e);
                self.state.lifecycle = Lifecycle::Failed;
            }
        }
        self.state.lifecycle
    }

    /// Request pause
    pub fn pause(&mut self) -> Lifecycle {
        match self.surface.pause() {
            Ok(()) => self.state.lifecycle = Lifecycle::Paused,
            Err(e) => {
                log::error!("player: pause rejected: {}", e);
                self.state.lifecycle = Lifecycle::Failed;
            }
        }
        self.state.lifecycle
    }

    /// Forward a volume change to the surface
    ///
    /// The caller clamps; a rejection leaves the mirrored state unchanged.
    pub fn set_volume(&mut self, volume: f32) -> Lifecycle {
        match self.surface.set_volume(volume) {
            Ok(()) => {
                self.state.volume = volume;
                self.state.muted = volume == 0.0;
            }
            Err(e) => log::error!("player: set_volume({:.2}) rejected: {}", volume, e),
        }
        self.state.lifecycle
    }

    /// Ask the surface for its current volume, falling back to the mirror
    pub fn query_volume(&mut self) -> f32 {
        match self.surface.get_volume() {
            Ok(v) => {
                self.state.volume = v;
                v
            }
            Err(e) => {
                log::warn!("player: get_volume failed, using mirrored value: {}", e);
                self.state.volume
            }
        }
    }

    /// Last volume the surface accepted
    pub fn volume(&self) -> f32 {
        self.state.volume
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether playback has ever actually begun
    pub fn has_played(&self) -> bool {
        self.has_played
    }

    /// Drain surface notifications (non-blocking, called each tick)
    pub fn drain_notices(&mut self) -> Vec<PlayerNotice> {
        let mut notices = Vec::new();
        for event in self.surface.poll_events() {
            match event {
                SurfaceEvent::PlayStarted => {
                    if !self.has_played {
                        log::info!("player: playback began");
                    }
                    self.has_played = true;
                    notices.push(PlayerNotice::PlaybackBegan);
                }
            }
        }
        notices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::ScriptedSurface;

    #[test]
    fn test_initialize_runs_every_step() {
        let (surface, state) = ScriptedSurface::new();
        let mut controller = MediaController::new(Box::new(surface));
        assert_eq!(controller.initialize(), Lifecycle::Ready);
        let calls = state.lock().unwrap().calls.clone();
        assert_eq!(
            calls,
            vec![
                "set_volume(0.00)",
                "set_inline_playback",
                "set_autopause(false)",
                "pause",
            ]
        );
    }

    #[test]
    fn test_initialize_continues_past_failures() {
        let (surface, state) = ScriptedSurface::new();
        {
            let mut s = state.lock().unwrap();
            s.fail_set_volume = true;
            s.fail_autopause = true;
        }
        let mut controller = MediaController::new(Box::new(surface));
        // Two of four steps fail: still Ready, and all four were attempted
        assert_eq!(controller.initialize(), Lifecycle::Ready);
        assert_eq!(state.lock().unwrap().calls.len(), 4);
    }

    #[test]
    fn test_initialize_all_steps_failing_is_failed() {
        let (surface, state) = ScriptedSurface::new();
        {
            let mut s = state.lock().unwrap();
            s.fail_set_volume = true;
            s.fail_inline = true;
            s.fail_autopause = true;
            s.fail_pause = true;
        }
        let mut controller = MediaController::new(Box::new(surface));
        assert_eq!(controller.initialize(), Lifecycle::Failed);
    }

    #[test]
    fn test_play_rejection_marks_failed_then_recovers() {
        let (surface, state) = ScriptedSurface::new();
        state.lock().unwrap().fail_play = true;
        let mut controller = MediaController::new(Box::new(surface));
        controller.initialize();
        assert_eq!(controller.play(), Lifecycle::Failed);

        // Surface starts accepting again (e.g. after a visibility resume)
        state.lock().unwrap().fail_play = false;
        assert_eq!(controller.play(), Lifecycle::Playing);
    }

    #[test]
    fn test_rejected_volume_leaves_mirror_unchanged() {
        let (surface, state) = ScriptedSurface::new();
        let mut controller = MediaController::new(Box::new(surface));
        controller.initialize();
        controller.set_volume(0.7);
        assert_eq!(controller.volume(), 0.7);

        state.lock().unwrap().fail_set_volume = true;
        controller.set_volume(0.2);
        assert_eq!(controller.volume(), 0.7);
    }

    #[test]
    fn test_query_volume_falls_back_to_mirror() {
        let (surface, state) = ScriptedSurface::new();
        let mut controller = MediaController::new(Box::new(surface));
        controller.initialize();
        controller.set_volume(0.6);
        state.lock().unwrap().fail_get_volume = true;
        assert_eq!(controller.query_volume(), 0.6);
    }

    #[test]
    fn test_play_started_notice() {
        use crate::surface::SurfaceEvent;

        let (surface, state) = ScriptedSurface::new();
        let mut controller = MediaController::new(Box::new(surface));
        controller.initialize();
        assert!(controller.drain_notices().is_empty());

        state
            .lock()
            .unwrap()
            .pending_events
            .push(SurfaceEvent::PlayStarted);
        assert_eq!(controller.drain_notices(), vec![PlayerNotice::PlaybackBegan]);
        assert!(controller.has_played());
    }
}
