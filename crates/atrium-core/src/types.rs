//! Shared playback types and constants

/// Playback lifecycle as tracked by the media controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// No surface bound yet
    #[default]
    Uninitialized,
    /// Surface bound, playback not requested
    Ready,
    /// Playback requested and accepted
    Playing,
    /// Playback explicitly paused
    Paused,
    /// The last playback request was rejected
    Failed,
}

/// Mirrored playback state
///
/// Owned exclusively by the media controller; every field is written only
/// through its operations. The volume mirror tracks the last value the
/// surface accepted, so a rejected set leaves it untouched.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackState {
    pub lifecycle: Lifecycle,
    /// Current volume in [0, 1]
    pub volume: f32,
    pub muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        // Volume starts at zero for autoplay-policy compliance
        Self {
            lifecycle: Lifecycle::Uninitialized,
            volume: 0.0,
            muted: true,
        }
    }
}

/// Volume restored on unmute when no non-zero volume was ever recorded
pub const DEFAULT_RESTORE_VOLUME: f32 = 0.5;

/// Volume applied by automatic flows (post-transition default, first
/// interaction unmute)
pub const DEFAULT_AUTO_VOLUME: f32 = 0.5;

/// Clamp a volume to the [0, 1] range accepted by the surface
pub fn clamp_volume(volume: f32) -> f32 {
    volume.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(-0.5), 0.0);
        assert_eq!(clamp_volume(0.3), 0.3);
        assert_eq!(clamp_volume(1.7), 1.0);
    }

    #[test]
    fn test_default_playback_state() {
        let state = PlaybackState::default();
        assert_eq!(state.lifecycle, Lifecycle::Uninitialized);
        assert_eq!(state.volume, 0.0);
        assert!(state.muted);
    }
}
