//! Degraded no-video surface
//!
//! Used when no external player is configured or reachable. Every
//! operation succeeds as a no-op so the page sequencing above never has to
//! care; play-started never fires, which keeps the placeholder backdrop up.

use super::{PlayerSurface, SurfaceEvent, SurfaceResult};

/// Surface that accepts everything and plays nothing
#[derive(Debug, Default)]
pub struct NullSurface {
    volume: f32,
}

impl NullSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerSurface for NullSurface {
    fn name(&self) -> &'static str {
        "null"
    }

    fn play(&mut self) -> SurfaceResult<()> {
        Ok(())
    }

    fn pause(&mut self) -> SurfaceResult<()> {
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> SurfaceResult<()> {
        self.volume = volume;
        Ok(())
    }

    fn get_volume(&mut self) -> SurfaceResult<f32> {
        Ok(self.volume)
    }

    fn set_autopause(&mut self, _enabled: bool) -> SurfaceResult<()> {
        Ok(())
    }

    fn set_inline_playback(&mut self) -> SurfaceResult<()> {
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<SurfaceEvent> {
        Vec::new()
    }
}
