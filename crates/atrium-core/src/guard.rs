//! Page guard - cosmetic anti-inspection heuristics
//!
//! Best-effort deterrents with no security value: window-metrics deltas,
//! a timing probe that notices halted execution, and a blocklist of
//! inspector shortcuts. The only action on trigger is replacing the page
//! content with a fixed refusal message; the host owns that swap. All
//! heuristics are skipped on mobile.

use std::time::Duration;

/// Outer-minus-inner window delta (px) beyond which an inspector is
/// assumed docked
pub const DEVTOOLS_DELTA_THRESHOLD: u32 = 160;

/// A probe that overshoots its deadline by more than this is treated as a
/// paused debugger
pub const PROBE_LIMIT: Duration = Duration::from_millis(100);

/// Cadence of the window-metrics check
pub const METRICS_INTERVAL: Duration = Duration::from_secs(1);

/// Cadence of the timing probe
pub const PROBE_INTERVAL: Duration = Duration::from_secs(2);

/// One-shot early metrics check shortly after startup
pub const EARLY_METRICS_DELAY: Duration = Duration::from_millis(500);

/// One-shot early probe shortly after startup
pub const EARLY_PROBE_DELAY: Duration = Duration::from_millis(700);

/// Content shown when the guard trips
pub const REFUSAL_MESSAGE: &str = "nothing to see here";

/// Window geometry sampled by the host
#[derive(Debug, Clone, Copy)]
pub struct WindowMetrics {
    pub outer_width: u32,
    pub outer_height: u32,
    pub inner_width: u32,
    pub inner_height: u32,
}

/// Key identity for the shortcut blocklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKey {
    F12,
    Char(char),
}

/// A key press with its modifier state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub shift: bool,
    pub key: GuardKey,
}

/// Whether a key event should be swallowed before the page sees it
///
/// Blocked: F12, Ctrl+Shift+I/J/C, Ctrl+U.
pub fn is_blocked_shortcut(chord: KeyChord) -> bool {
    match chord.key {
        GuardKey::F12 => true,
        GuardKey::Char(c) => {
            let c = c.to_ascii_uppercase();
            (chord.ctrl && chord.shift && matches!(c, 'I' | 'J' | 'C'))
                || (chord.ctrl && !chord.shift && c == 'U')
        }
    }
}

/// Owns the guard's triggered flag; no module-level globals
pub struct PageGuard {
    enabled: bool,
    triggered: bool,
}

impl PageGuard {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            triggered: false,
        }
    }

    pub fn triggered(&self) -> bool {
        self.enabled && self.triggered
    }

    /// Window-metrics heuristic
    ///
    /// Returns true when the guard newly trips. The flag clears when the
    /// delta closes again, so a later re-open trips a second time; the
    /// host's content replacement stays latched regardless.
    pub fn check_window_metrics(&mut self, metrics: WindowMetrics) -> bool {
        if !self.enabled {
            return false;
        }
        let dw = metrics.outer_width.saturating_sub(metrics.inner_width);
        let dh = metrics.outer_height.saturating_sub(metrics.inner_height);
        if dw > DEVTOOLS_DELTA_THRESHOLD || dh > DEVTOOLS_DELTA_THRESHOLD {
            if !self.triggered {
                self.triggered = true;
                log::warn!("guard: window metrics tripped ({}x{} delta)", dw, dh);
                return true;
            }
            false
        } else {
            self.triggered = false;
            false
        }
    }

    /// Timing-probe heuristic: a probe that ran long means execution was
    /// halted under an inspector
    pub fn check_probe_timing(&mut self, overshoot: Duration) -> bool {
        if !self.enabled || self.triggered {
            return false;
        }
        if overshoot > PROBE_LIMIT {
            self.triggered = true;
            log::warn!("guard: timing probe tripped ({}ms late)", overshoot.as_millis());
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(outer: (u32, u32), inner: (u32, u32)) -> WindowMetrics {
        WindowMetrics {
            outer_width: outer.0,
            outer_height: outer.1,
            inner_width: inner.0,
            inner_height: inner.1,
        }
    }

    #[test]
    fn test_metrics_trip_and_clear() {
        let mut guard = PageGuard::new(true);
        // Delta of exactly the threshold does not trip; one past it does
        assert!(!guard.check_window_metrics(metrics((1280, 720), (1120, 720))));
        assert!(guard.check_window_metrics(metrics((1280, 720), (1119, 720))));
        assert!(guard.triggered());

        // Same condition again: already triggered, not a new trip
        assert!(!guard.check_window_metrics(metrics((1280, 720), (1119, 720))));

        // Delta closes: flag clears, a re-open trips again
        assert!(!guard.check_window_metrics(metrics((1280, 720), (1280, 720))));
        assert!(!guard.triggered());
        assert!(guard.check_window_metrics(metrics((1280, 720), (1000, 720))));
    }

    #[test]
    fn test_vertical_delta_also_trips() {
        let mut guard = PageGuard::new(true);
        assert!(guard.check_window_metrics(metrics((1280, 720), (1280, 500))));
    }

    #[test]
    fn test_probe_trips_on_overshoot() {
        let mut guard = PageGuard::new(true);
        assert!(!guard.check_probe_timing(Duration::from_millis(40)));
        assert!(guard.check_probe_timing(Duration::from_millis(250)));
        // Stays triggered: no repeated trips from the probe
        assert!(!guard.check_probe_timing(Duration::from_millis(250)));
    }

    #[test]
    fn test_disabled_guard_never_trips() {
        let mut guard = PageGuard::new(false);
        assert!(!guard.check_window_metrics(metrics((2000, 2000), (100, 100))));
        assert!(!guard.check_probe_timing(Duration::from_secs(5)));
        assert!(!guard.triggered());
    }

    #[test]
    fn test_shortcut_blocklist() {
        let chord = |ctrl, shift, key| KeyChord { ctrl, shift, key };

        assert!(is_blocked_shortcut(chord(false, false, GuardKey::F12)));
        assert!(is_blocked_shortcut(chord(true, true, GuardKey::Char('i'))));
        assert!(is_blocked_shortcut(chord(true, true, GuardKey::Char('J'))));
        assert!(is_blocked_shortcut(chord(true, true, GuardKey::Char('c'))));
        assert!(is_blocked_shortcut(chord(true, false, GuardKey::Char('u'))));

        assert!(!is_blocked_shortcut(chord(false, false, GuardKey::Char('i'))));
        assert!(!is_blocked_shortcut(chord(true, false, GuardKey::Char('i'))));
        assert!(!is_blocked_shortcut(chord(true, true, GuardKey::Char('u'))));
    }
}
