//! Output refresh loop.
//!
//! Once per tick: snapshot the shared state, write every lamp, report a pending
//! press, flip the blink phase, then pause. The loop keeps no timing state of
//! its own, so an early or late wakeup only shifts when the next snapshot is
//! taken.

use crate::channel::ChannelSet;
use crate::config::REFRESH_INTERVAL_MS;
use crate::debounce::{EdgeController, Frame};
use crate::device::{DeviceAccess, Millis, Pacer};
use crate::error::{DeviceError, RefreshError};
use crate::setup::OutputLines;

/// What one tick put on the lamps.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TickReport {
    pub frame: Frame,
    pub shown: ChannelSet,
    /// A press was accepted since the previous tick.
    pub pressed: bool,
}

pub struct OutputRefresh<'a> {
    controller: &'a EdgeController,
    lines: OutputLines,
    interval_ms: Millis,
}

impl<'a> OutputRefresh<'a> {
    pub fn new(controller: &'a EdgeController, lines: OutputLines) -> Self {
        Self::with_interval(controller, lines, REFRESH_INTERVAL_MS)
    }

    pub fn with_interval(controller: &'a EdgeController, lines: OutputLines, interval_ms: Millis) -> Self {
        Self {
            controller,
            lines,
            interval_ms,
        }
    }

    /// Run one iteration without pausing.
    ///
    /// The first failed write aborts the tick; the remaining lamps are left
    /// untouched and the blink phase does not advance.
    pub fn tick<D: DeviceAccess>(&mut self, device: &mut D) -> Result<TickReport, RefreshError> {
        let frame = self.controller.frame();
        let shown = frame.effective();

        for (channel, handle) in self.lines.iter() {
            let result = match handle {
                Some(handle) => device.set_output(handle, shown.is_lit(channel)),
                None => Err(DeviceError::NotConfigured),
            };
            if let Err(cause) = result {
                error!("set_output on channel {} failed: {}", channel, cause);
                return Err(RefreshError::Write { channel, cause });
            }
        }

        let pressed = self.controller.drain_confirmation();
        if pressed {
            info!("button has been pressed");
        }

        self.controller.advance_blink(&frame);

        Ok(TickReport { frame, shown, pressed })
    }

    /// Tick and pause forever. Returns only on a fatal write error.
    pub async fn run<D: DeviceAccess, P: Pacer>(&mut self, device: &mut D, pacer: &mut P) -> RefreshError {
        loop {
            match self.tick(device) {
                Ok(report) => debug!("tick: phase {}, shown {}", report.frame.phase, report.shown),
                Err(err) => return err,
            }
            pacer.pause(self.interval_ms).await;
        }
    }
}
