//! Tagline typing animation
//!
//! Character-stepping state machine over a fixed ordered list of strings,
//! looping indefinitely: type to full string, hold, delete to empty, hold,
//! advance (wrapping). Purely presentational; no error states. Tick
//! intervals and holds are configuration, not invariants.
//!
//! The same engine drives the window-title animation with its own timings.

use std::time::Duration;

/// Tick intervals and holds for one animator instance
#[derive(Debug, Clone)]
pub struct TaglineTimings {
    /// Interval between typed characters
    pub type_ms: u64,
    /// Interval between deleted characters
    pub delete_ms: u64,
    /// Hold after a string is fully typed
    pub hold_full_ms: u64,
    /// Hold after a string is fully deleted, before the next one starts
    pub hold_empty_ms: u64,
    /// Delay between start and the first typed character
    pub start_delay_ms: u64,
}

impl Default for TaglineTimings {
    fn default() -> Self {
        Self {
            type_ms: 135,
            delete_ms: 135,
            hold_full_ms: 2500,
            hold_empty_ms: 500,
            start_delay_ms: 500,
        }
    }
}

/// One emitted animation frame: the text to show and when to tick next
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaglineFrame {
    pub text: String,
    pub next_tick: Duration,
}

/// Looping typing/deleting animator
pub struct TaglineAnimator {
    strings: Vec<String>,
    timings: TaglineTimings,
    string_index: usize,
    char_index: usize,
    deleting: bool,
    started: bool,
}

impl TaglineAnimator {
    pub fn new(strings: Vec<String>, timings: TaglineTimings) -> Self {
        // An empty list would leave tick() with nothing to step over
        let strings = if strings.is_empty() {
            vec![String::new()]
        } else {
            strings
        };
        Self {
            strings,
            timings,
            string_index: 0,
            char_index: 0,
            deleting: false,
            started: false,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Arm the animator; returns the delay before the first tick
    pub fn start(&mut self) -> Duration {
        self.started = true;
        Duration::from_millis(self.timings.start_delay_ms)
    }

    /// Advance one character step
    pub fn tick(&mut self) -> TaglineFrame {
        let current = &self.strings[self.string_index];
        let len = current.chars().count();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            let text = prefix(current, self.char_index);
            if self.char_index == 0 {
                self.deleting = false;
                self.string_index = (self.string_index + 1) % self.strings.len();
                TaglineFrame {
                    text,
                    next_tick: Duration::from_millis(self.timings.hold_empty_ms),
                }
            } else {
                TaglineFrame {
                    text,
                    next_tick: Duration::from_millis(self.timings.delete_ms),
                }
            }
        } else {
            if self.char_index < len {
                self.char_index += 1;
            }
            let text = prefix(current, self.char_index);
            if self.char_index >= len {
                self.deleting = true;
                TaglineFrame {
                    text,
                    next_tick: Duration::from_millis(self.timings.hold_full_ms),
                }
            } else {
                TaglineFrame {
                    text,
                    next_tick: Duration::from_millis(self.timings.type_ms),
                }
            }
        }
    }
}

/// First `chars` characters of `s` (character count, not bytes)
fn prefix(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(strings: &[&str]) -> TaglineAnimator {
        TaglineAnimator::new(
            strings.iter().map(|s| s.to_string()).collect(),
            TaglineTimings::default(),
        )
    }

    fn texts(animator: &mut TaglineAnimator, n: usize) -> Vec<String> {
        (0..n).map(|_| animator.tick().text).collect()
    }

    #[test]
    fn test_two_string_cycle() {
        let mut a = animator(&["a", "bb"]);
        // type "a", delete "a", type "b","bb", delete "bb" -> "b" -> "",
        // then the cycle restarts with "a"
        assert_eq!(
            texts(&mut a, 8),
            vec!["a", "", "b", "bb", "b", "", "a", ""]
        );
    }

    #[test]
    fn test_holds_between_phases() {
        let mut a = animator(&["hi"]);
        let timings = TaglineTimings::default();

        let frame = a.tick();
        assert_eq!(frame.text, "h");
        assert_eq!(frame.next_tick, Duration::from_millis(timings.type_ms));

        let frame = a.tick();
        assert_eq!(frame.text, "hi");
        // Full string reached: hold before deleting starts
        assert_eq!(frame.next_tick, Duration::from_millis(timings.hold_full_ms));

        let frame = a.tick();
        assert_eq!(frame.text, "h");
        assert_eq!(frame.next_tick, Duration::from_millis(timings.delete_ms));

        let frame = a.tick();
        assert_eq!(frame.text, "");
        assert_eq!(frame.next_tick, Duration::from_millis(timings.hold_empty_ms));
    }

    #[test]
    fn test_loops_indefinitely() {
        let mut a = animator(&["xy"]);
        // One full cycle is 4 ticks; after many cycles it still produces
        // the same sequence
        let first_cycle = texts(&mut a, 4);
        for _ in 0..10 {
            assert_eq!(texts(&mut a, 4), first_cycle);
        }
    }

    #[test]
    fn test_multibyte_strings_step_by_character() {
        let mut a = animator(&["héllo 🔌"]);
        let frames = texts(&mut a, 7);
        assert_eq!(frames[0], "h");
        assert_eq!(frames[1], "hé");
        assert_eq!(frames[6], "héllo 🔌");
    }

    #[test]
    fn test_start_returns_configured_delay() {
        let mut a = animator(&["a"]);
        assert!(!a.started());
        assert_eq!(a.start(), Duration::from_millis(500));
        assert!(a.started());
    }

    #[test]
    fn test_empty_string_entry_does_not_stall() {
        let mut a = animator(&["", "b"]);
        // The empty entry passes straight through its type/delete phases
        assert_eq!(texts(&mut a, 4), vec!["", "", "b", ""]);
    }
}
