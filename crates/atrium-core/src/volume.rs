//! Volume state - the single writer of volume-related fields
//!
//! Tracks whether the user has taken over volume control and the last
//! non-zero volume recorded at mute time. Once `user_has_set` flips, every
//! automatic volume flow becomes a no-op; only explicit user actions move
//! the level after that.

use crate::controller::MediaController;
use crate::types::{clamp_volume, DEFAULT_RESTORE_VOLUME};

/// Mute/unmute indicator next to the volume slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundIcon {
    Muted,
    Audible,
}

impl SoundIcon {
    /// Icon for a volume level: muted iff the level is zero
    pub fn for_volume(volume: f32) -> Self {
        if volume == 0.0 {
            SoundIcon::Muted
        } else {
            SoundIcon::Audible
        }
    }
}

/// User-override state for the audio level
#[derive(Debug, Default)]
pub struct VolumeState {
    user_has_set: bool,
    // Updated only when muting from a non-zero level, never on
    // programmatic sets
    previous_non_zero: Option<f32>,
}

impl VolumeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_has_set(&self) -> bool {
        self.user_has_set
    }

    /// Explicit slider input. Marks the user override and forwards the
    /// clamped value.
    pub fn apply_user_volume(&mut self, controller: &mut MediaController, volume: f32) -> SoundIcon {
        self.user_has_set = true;
        let volume = clamp_volume(volume);
        controller.set_volume(volume);
        SoundIcon::for_volume(volume)
    }

    /// Mute toggle. Muting from a non-zero level records that level;
    /// unmuting restores it, or [`DEFAULT_RESTORE_VOLUME`] when nothing
    /// was ever recorded.
    pub fn toggle_mute(&mut self, controller: &mut MediaController) -> SoundIcon {
        self.user_has_set = true;
        let current = controller.query_volume();
        if current > 0.0 {
            self.previous_non_zero = Some(current);
            controller.set_volume(0.0);
            SoundIcon::Muted
        } else {
            let restored = self.previous_non_zero.unwrap_or(DEFAULT_RESTORE_VOLUME);
            controller.set_volume(restored);
            SoundIcon::for_volume(restored)
        }
    }

    /// Automatic volume change (post-transition default, first-interaction
    /// unmute). A no-op once the user has taken over.
    pub fn apply_auto_volume(
        &mut self,
        controller: &mut MediaController,
        volume: f32,
    ) -> Option<SoundIcon> {
        if self.user_has_set {
            log::debug!(
                "volume: skipping automatic set to {:.2}, user override active",
                volume
            );
            return None;
        }
        let volume = clamp_volume(volume);
        controller.set_volume(volume);
        Some(SoundIcon::for_volume(volume))
    }

    /// Re-apply a current volume after the surface resumes. Does not touch
    /// the override flag: the value being reasserted is already the one in
    /// effect.
    pub fn reassert(&self, controller: &mut MediaController, volume: f32) {
        controller.set_volume(clamp_volume(volume));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::ScriptedSurface;
    use crate::types::DEFAULT_AUTO_VOLUME;

    fn controller() -> MediaController {
        let (surface, _) = ScriptedSurface::new();
        let mut c = MediaController::new(Box::new(surface));
        c.initialize();
        c
    }

    #[test]
    fn test_mute_restores_last_non_zero_volume() {
        let mut ctl = controller();
        let mut volume = VolumeState::new();

        volume.apply_user_volume(&mut ctl, 0.8);
        assert_eq!(volume.toggle_mute(&mut ctl), SoundIcon::Muted);
        assert_eq!(ctl.volume(), 0.0);
        assert_eq!(volume.toggle_mute(&mut ctl), SoundIcon::Audible);
        assert_eq!(ctl.volume(), 0.8);
    }

    #[test]
    fn test_unmute_without_history_uses_default() {
        let mut ctl = controller();
        let mut volume = VolumeState::new();

        // Volume is still at the initial zero: unmute directly
        volume.toggle_mute(&mut ctl);
        assert_eq!(ctl.volume(), DEFAULT_RESTORE_VOLUME);
    }

    #[test]
    fn test_slider_then_mute_then_unmute_sequence() {
        let mut ctl = controller();
        let mut volume = VolumeState::new();

        volume.apply_user_volume(&mut ctl, 0.3);
        volume.apply_user_volume(&mut ctl, 0.9);
        volume.toggle_mute(&mut ctl);
        volume.toggle_mute(&mut ctl);
        // Restored volume is the last non-zero value set before muting
        assert_eq!(ctl.volume(), 0.9);
    }

    #[test]
    fn test_auto_volume_applies_before_user_takes_over() {
        let mut ctl = controller();
        let mut volume = VolumeState::new();

        let icon = volume.apply_auto_volume(&mut ctl, DEFAULT_AUTO_VOLUME);
        assert_eq!(icon, Some(SoundIcon::Audible));
        assert_eq!(ctl.volume(), DEFAULT_AUTO_VOLUME);
    }

    #[test]
    fn test_auto_volume_is_noop_after_user_set() {
        let mut ctl = controller();
        let mut volume = VolumeState::new();

        volume.apply_user_volume(&mut ctl, 0.2);
        assert_eq!(volume.apply_auto_volume(&mut ctl, 0.5), None);
        assert_eq!(ctl.volume(), 0.2);
    }

    #[test]
    fn test_mute_toggle_counts_as_user_action() {
        let mut ctl = controller();
        let mut volume = VolumeState::new();

        volume.toggle_mute(&mut ctl);
        assert!(volume.user_has_set());
        assert_eq!(volume.apply_auto_volume(&mut ctl, 0.9), None);
    }

    #[test]
    fn test_zero_slider_shows_muted_icon() {
        let mut ctl = controller();
        let mut volume = VolumeState::new();

        assert_eq!(volume.apply_user_volume(&mut ctl, 0.0), SoundIcon::Muted);
        assert_eq!(volume.apply_user_volume(&mut ctl, 0.4), SoundIcon::Audible);
    }

    #[test]
    fn test_slider_input_is_clamped() {
        let mut ctl = controller();
        let mut volume = VolumeState::new();

        volume.apply_user_volume(&mut ctl, 1.8);
        assert_eq!(ctl.volume(), 1.0);
    }
}
