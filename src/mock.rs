//! Host-side doubles for pins, the device access layer and the pacer.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin};

use crate::device::{DeviceAccess, Millis, Pacer, PinHandle};
use crate::error::DeviceError;
use crate::pin::PinSpec;

#[derive(Debug)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
struct PinState {
    level: Option<bool>,
    failing: bool,
}

/// Output pin; clones share state so tests can inspect a pin moved into a driver.
#[derive(Clone, Default)]
pub struct MockPin(Rc<RefCell<PinState>>);

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let pin = Self::new();
        pin.fail_writes();
        pin
    }

    pub fn fail_writes(&self) {
        self.0.borrow_mut().failing = true;
    }

    /// Last driven level, `None` if never written.
    pub fn level(&self) -> Option<bool> {
        self.0.borrow().level
    }

    fn drive(&mut self, high: bool) -> Result<(), MockPinError> {
        let mut st = self.0.borrow_mut();
        if st.failing {
            return Err(MockPinError);
        }
        st.level = Some(high);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WaitedEdge {
    High,
    Low,
    Rising,
    Falling,
    Any,
}

struct InputState {
    high: bool,
    waited: Vec<WaitedEdge>,
}

/// Input pin whose edges resolve immediately.
#[derive(Clone)]
pub struct MockInput(Rc<RefCell<InputState>>);

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self(Rc::new(RefCell::new(InputState { high, waited: Vec::new() })))
    }

    pub fn waited(&self) -> Vec<WaitedEdge> {
        self.0.borrow().waited.clone()
    }

    fn record(&self, edge: WaitedEdge) {
        self.0.borrow_mut().waited.push(edge);
    }
}

impl ErrorType for MockInput {
    type Error = Infallible;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.borrow().high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.borrow().high)
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::digital::Wait for MockInput {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.record(WaitedEdge::High);
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        self.record(WaitedEdge::Low);
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.record(WaitedEdge::Rising);
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.record(WaitedEdge::Falling);
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        self.record(WaitedEdge::Any);
        Ok(())
    }
}

/// One call made against [`RecordingDevice`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Call {
    Configure(PinSpec),
    Finalize,
    SetOutput(PinHandle, bool),
}

/// Device access layer that records every call and fails on request.
#[derive(Default)]
pub struct RecordingDevice {
    pub calls: Vec<Call>,
    next_handle: u8,
    /// 1-based index of the `configure` call that fails.
    pub fail_configure_at: Option<usize>,
    pub fail_finalize: bool,
    /// 1-based index of the `set_output` call that fails.
    pub fail_write_at: Option<usize>,
    /// Give up after this many successful writes so an endless loop terminates.
    pub write_budget: Option<usize>,
    configures: usize,
    writes: usize,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<(PinHandle, bool)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::SetOutput(handle, value) => Some((*handle, *value)),
                _ => None,
            })
            .collect()
    }

    pub fn write_attempts(&self) -> usize {
        self.writes
    }
}

impl DeviceAccess for RecordingDevice {
    fn configure(&mut self, spec: &PinSpec) -> Result<PinHandle, DeviceError> {
        self.configures += 1;
        self.calls.push(Call::Configure(*spec));
        if self.fail_configure_at == Some(self.configures) {
            return Err(DeviceError::Unsupported);
        }
        let handle = PinHandle::new(self.next_handle);
        self.next_handle += 1;
        Ok(handle)
    }

    fn finalize_configuration(&mut self) -> Result<(), DeviceError> {
        self.calls.push(Call::Finalize);
        if self.fail_finalize {
            return Err(DeviceError::Unsupported);
        }
        Ok(())
    }

    fn set_output(&mut self, pin: PinHandle, value: bool) -> Result<(), DeviceError> {
        self.writes += 1;
        if self.fail_write_at == Some(self.writes) {
            return Err(DeviceError::Write);
        }
        if self.write_budget.is_some_and(|budget| self.writes > budget) {
            return Err(DeviceError::Write);
        }
        self.calls.push(Call::SetOutput(pin, value));
        Ok(())
    }
}

/// Pacer that never sleeps; records every pause.
#[derive(Default)]
pub struct CountingPacer {
    pub pauses: Vec<Millis>,
}

impl Pacer for CountingPacer {
    async fn pause(&mut self, interval_ms: Millis) {
        self.pauses.push(interval_ms);
    }
}
