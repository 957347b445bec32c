//! Debounce/event controller - the state shared between the edge handler and
//! the refresh loop.
//!
//! Raw edge notifications may arrive at any rate (contact bounce) and from
//! interrupt context. The controller turns them into at most one accepted press
//! per debounce window. On each accepted press it flips every lamp channel and
//! forces the blink phase back to visible.
//!
//! # Ownership
//!
//! - Edge handler: sets the pending notice, inverts the channels, resets the
//!   phase to visible and writes the event clock.
//! - Refresh loop: clears the notice and inverts the phase once per tick.
//!
//! Channels, phase, event clock and epoch sit in a single critical-section
//! mutex so a tick always reads a consistent [`Frame`]. The pending notice is an
//! atomic flag so draining it never needs the lock.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use crate::board::Board;
use crate::channel::{BlinkPhase, ChannelId, ChannelSet};
use crate::config::DEBOUNCE_WINDOW_MS;
use crate::device::{Millis, MonotonicClock};
use crate::error::DeviceError;

/// What a rejected notification does to the event clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum BouncePolicy {
    /// Every notification moves the clock, so a burst stays silent until a
    /// full window of quiet has passed.
    #[default]
    RestartWindow,
    /// Only accepted notifications move the clock; the window is measured
    /// from the last accepted press.
    KeepWindow,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct DebounceConfig {
    pub window_ms: Millis,
    pub policy: BouncePolicy,
}

impl DebounceConfig {
    pub const fn new() -> Self {
        Self {
            window_ms: DEBOUNCE_WINDOW_MS,
            policy: BouncePolicy::RestartWindow,
        }
    }

    pub const fn with_policy(mut self, policy: BouncePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn with_window(mut self, window_ms: Millis) -> Self {
        self.window_ms = window_ms;
        self
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one raw edge notification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum EdgeVerdict {
    /// Confirmed press; `channels` is the new lamp state.
    Accepted { channels: ChannelSet },
    /// Arrived within the debounce window of the previous notification.
    Bounce { elapsed: Millis },
    /// The clock could not be read. The edge is ignored and nothing changes.
    ClockUnavailable,
}

impl EdgeVerdict {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Consistent snapshot of the shared state taken at the start of a tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct Frame {
    pub channels: ChannelSet,
    pub phase: BlinkPhase,
    /// Wrapping count of accepted presses when the snapshot was taken.
    pub epoch: u32,
}

impl Frame {
    /// What the lamps should show for this frame.
    pub const fn effective(&self) -> ChannelSet {
        self.channels.effective(self.phase)
    }

    pub const fn shows(&self, id: ChannelId) -> bool {
        self.effective().is_lit(id)
    }
}

#[derive(Clone, Copy)]
struct PanelState {
    channels: ChannelSet,
    phase: BlinkPhase,
    epoch: u32,
    /// `None` until the first notification, so the first press is never a bounce.
    last_edge_at: Option<Millis>,
}

impl PanelState {
    // Never moves backwards.
    fn advance_clock(&mut self, now: Millis) {
        self.last_edge_at = Some(match self.last_edge_at {
            Some(last) if last > now => last,
            _ => now,
        });
    }
}

/// Shared-state handle passed to both the edge handler and the refresh loop.
pub struct EdgeController {
    config: DebounceConfig,
    state: Mutex<CriticalSectionRawMutex, Cell<PanelState>>,
    button_confirmed: AtomicBool,
}

impl EdgeController {
    pub const fn new(initial: ChannelSet, config: DebounceConfig) -> Self {
        Self {
            config,
            state: Mutex::new(Cell::new(PanelState {
                channels: initial,
                phase: BlinkPhase::Visible,
                epoch: 0,
                last_edge_at: None,
            })),
            button_confirmed: AtomicBool::new(false),
        }
    }

    /// Controller starting from the board's initial lamp assignment.
    pub const fn for_board(board: &Board, config: DebounceConfig) -> Self {
        Self::new(board.initial_channels(), config)
    }

    pub const fn config(&self) -> DebounceConfig {
        self.config
    }

    /// Edge handler entry point: reads the clock now, then debounces.
    pub fn on_edge<C: MonotonicClock>(&self, clock: &C) -> EdgeVerdict {
        self.on_raw_edge(clock.now_millis())
    }

    /// Debounce one notification stamped with `now`.
    ///
    /// Bounded and non-blocking; safe to call from interrupt context.
    pub fn on_raw_edge(&self, now: Result<Millis, DeviceError>) -> EdgeVerdict {
        let Ok(now) = now else {
            return EdgeVerdict::ClockUnavailable;
        };

        self.state.lock(|cell| {
            let mut st = cell.get();
            let elapsed = st.last_edge_at.map(|last| now.saturating_sub(last));

            let verdict = match elapsed {
                Some(elapsed) if elapsed < self.config.window_ms => {
                    if self.config.policy == BouncePolicy::RestartWindow {
                        st.advance_clock(now);
                    }
                    EdgeVerdict::Bounce { elapsed }
                }
                _ => {
                    st.channels = st.channels.invert();
                    st.phase = BlinkPhase::Visible;
                    st.epoch = st.epoch.wrapping_add(1);
                    st.advance_clock(now);
                    self.button_confirmed.store(true, Ordering::Release);
                    EdgeVerdict::Accepted { channels: st.channels }
                }
            };

            cell.set(st);
            verdict
        })
    }

    /// Read and clear the pending notice. True if a press was accepted since
    /// the previous drain.
    pub fn drain_confirmation(&self) -> bool {
        self.button_confirmed.swap(false, Ordering::AcqRel)
    }

    pub fn frame(&self) -> Frame {
        self.state.lock(|cell| {
            let st = cell.get();
            Frame {
                channels: st.channels,
                phase: st.phase,
                epoch: st.epoch,
            }
        })
    }

    /// Flip the blink phase after a tick rendered `seen`.
    ///
    /// If a press was accepted after `seen` was taken, the forced visible phase
    /// is kept so the next tick shows the new state. Returns the phase the next
    /// tick will see.
    pub fn advance_blink(&self, seen: &Frame) -> BlinkPhase {
        self.state.lock(|cell| {
            let mut st = cell.get();
            if st.epoch == seen.epoch {
                st.phase = st.phase.invert();
                cell.set(st);
            }
            st.phase
        })
    }

    /// Number of accepted presses since start (wrapping).
    pub fn accepted_presses(&self) -> u32 {
        self.state.lock(|cell| cell.get().epoch)
    }

    /// Timestamp of the last notification that moved the event clock.
    pub fn last_edge_at(&self) -> Option<Millis> {
        self.state.lock(|cell| cell.get().last_edge_at)
    }
}
