//! Device access layer seams.
//!
//! The task never touches GPIO registers itself. It configures lines, writes
//! outputs and reads time only through these traits, so the same logic runs
//! against embassy-stm32 on the board and against mocks on the host.

use crate::error::DeviceError;
use crate::pin::PinSpec;

/// Milliseconds from the platform's monotonic clock.
pub type Millis = u64;

/// Opaque handle returned by [`DeviceAccess::configure`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct PinHandle(u8);

impl PinHandle {
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }
}

pub trait DeviceAccess {
    /// Set up one line. Called once per line at startup.
    fn configure(&mut self, spec: &PinSpec) -> Result<PinHandle, DeviceError>;

    /// Seal the configuration. Must be the last setup call.
    fn finalize_configuration(&mut self) -> Result<(), DeviceError>;

    /// Drive an output line.
    fn set_output(&mut self, pin: PinHandle, value: bool) -> Result<(), DeviceError>;
}

/// Tick source queried from the edge handler.
pub trait MonotonicClock {
    fn now_millis(&self) -> Result<Millis, DeviceError>;
}

/// Suspension point of the refresh loop.
///
/// Implementations may return early (e.g. on an unrelated wakeup); the loop
/// recomputes everything from shared state on the next tick.
pub trait Pacer {
    async fn pause(&mut self, interval_ms: Millis);
}

impl<T: DeviceAccess + ?Sized> DeviceAccess for &mut T {
    fn configure(&mut self, spec: &PinSpec) -> Result<PinHandle, DeviceError> {
        T::configure(self, spec)
    }

    fn finalize_configuration(&mut self) -> Result<(), DeviceError> {
        T::finalize_configuration(self)
    }

    fn set_output(&mut self, pin: PinHandle, value: bool) -> Result<(), DeviceError> {
        T::set_output(self, pin, value)
    }
}

impl<T: Pacer + ?Sized> Pacer for &mut T {
    async fn pause(&mut self, interval_ms: Millis) {
        T::pause(self, interval_ms).await
    }
}
