//! Player surface trait for video backend implementations
//!
//! Defines a common interface over the embedded video surface:
//! - **Embed**: an external player process driven over a JSON IPC socket
//! - **Null**: degraded no-video surface for when no player is reachable
//!
//! The backend is selected at configuration time; everything above the
//! trait (controller, volume state, orchestrator) is backend-agnostic.

pub mod embed;
mod error;
pub mod null;

pub use embed::EmbedSurface;
pub use error::{SurfaceError, SurfaceResult};
pub use null::NullSurface;

/// Notification pushed by the surface outside of request/response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// Playback actually began (frames are being presented)
    PlayStarted,
}

/// Capability interface over the embedded video surface
///
/// Only the operations the page needs: play/pause/mute/volume and the
/// play-started notification. No seeking, captions, or quality selection.
pub trait PlayerSurface: Send {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Request playback
    fn play(&mut self) -> SurfaceResult<()>;

    /// Request pause
    fn pause(&mut self) -> SurfaceResult<()>;

    /// Set the volume. Callers clamp to [0, 1] before forwarding.
    fn set_volume(&mut self, volume: f32) -> SurfaceResult<()>;

    /// Query the surface for its current volume
    fn get_volume(&mut self) -> SurfaceResult<f32>;

    /// Enable or disable automatic pause when the surface is backgrounded
    fn set_autopause(&mut self, enabled: bool) -> SurfaceResult<()>;

    /// Mark inline-playback hints for touch contexts
    fn set_inline_playback(&mut self) -> SurfaceResult<()>;

    /// Drain pending notifications (non-blocking)
    fn poll_events(&mut self) -> Vec<SurfaceEvent>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted surface for driving the controller and volume state in tests

    use std::sync::{Arc, Mutex};

    use super::{PlayerSurface, SurfaceError, SurfaceEvent, SurfaceResult};

    /// Shared scripted-surface state, inspectable after the surface is boxed
    #[derive(Default)]
    pub struct ScriptedState {
        pub calls: Vec<String>,
        pub volume: f32,
        pub fail_play: bool,
        pub fail_pause: bool,
        pub fail_set_volume: bool,
        pub fail_get_volume: bool,
        pub fail_autopause: bool,
        pub fail_inline: bool,
        pub pending_events: Vec<SurfaceEvent>,
    }

    pub struct ScriptedSurface {
        state: Arc<Mutex<ScriptedState>>,
    }

    impl ScriptedSurface {
        pub fn new() -> (Self, Arc<Mutex<ScriptedState>>) {
            let state = Arc::new(Mutex::new(ScriptedState::default()));
            (
                Self {
                    state: state.clone(),
                },
                state,
            )
        }
    }

    fn rejected(op: &'static str) -> SurfaceError {
        SurfaceError::Rejected {
            op,
            reason: "scripted failure".to_string(),
        }
    }

    impl PlayerSurface for ScriptedSurface {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn play(&mut self) -> SurfaceResult<()> {
            let mut s = self.state.lock().unwrap();
            s.calls.push("play".to_string());
            if s.fail_play {
                Err(rejected("play"))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self) -> SurfaceResult<()> {
            let mut s = self.state.lock().unwrap();
            s.calls.push("pause".to_string());
            if s.fail_pause {
                Err(rejected("pause"))
            } else {
                Ok(())
            }
        }

        fn set_volume(&mut self, volume: f32) -> SurfaceResult<()> {
            let mut s = self.state.lock().unwrap();
            s.calls.push(format!("set_volume({:.2})", volume));
            if s.fail_set_volume {
                Err(rejected("set_volume"))
            } else {
                s.volume = volume;
                Ok(())
            }
        }

        fn get_volume(&mut self) -> SurfaceResult<f32> {
            let mut s = self.state.lock().unwrap();
            s.calls.push("get_volume".to_string());
            if s.fail_get_volume {
                Err(rejected("get_volume"))
            } else {
                Ok(s.volume)
            }
        }

        fn set_autopause(&mut self, enabled: bool) -> SurfaceResult<()> {
            let mut s = self.state.lock().unwrap();
            s.calls.push(format!("set_autopause({})", enabled));
            if s.fail_autopause {
                Err(rejected("set_autopause"))
            } else {
                Ok(())
            }
        }

        fn set_inline_playback(&mut self) -> SurfaceResult<()> {
            let mut s = self.state.lock().unwrap();
            s.calls.push("set_inline_playback".to_string());
            if s.fail_inline {
                Err(rejected("set_inline_playback"))
            } else {
                Ok(())
            }
        }

        fn poll_events(&mut self) -> Vec<SurfaceEvent> {
            self.state.lock().unwrap().pending_events.drain(..).collect()
        }
    }
}
