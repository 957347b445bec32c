//! Compile-time configuration for the blinky task.

use crate::device::Millis;

/// Minimum gap between two button edges for the second to count as a new press.
pub const DEBOUNCE_WINDOW_MS: Millis = 20;

/// Refresh loop period. Every tick also flips the blink phase.
pub const REFRESH_INTERVAL_MS: Millis = 500;

/// Number of lamp channels on the board.
pub const CHANNEL_COUNT: usize = 4;

/// Exit status reported for every way the task can stop.
pub const EXIT_FAILURE: u8 = 1;
