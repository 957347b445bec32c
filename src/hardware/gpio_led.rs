use super::traits::Led;
use embedded_hal::digital::OutputPin;

/// Pin level at which the lamp lights up.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActiveLevel {
    /// Discovery LD3..LD6: anode driven by the pin.
    High,
    /// Blue Pill PC13: lamp wired to VCC, lit when the pin sinks.
    Low,
}

pub struct GpioLed<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: OutputPin> GpioLed<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    pub fn active_high(pin: P) -> Self {
        Self::new(pin, ActiveLevel::High)
    }
}

impl<P: OutputPin> Led for GpioLed<P> {
    type Error = P::Error;

    fn on(&mut self) -> Result<(), Self::Error> {
        match self.active {
            ActiveLevel::High => self.pin.set_high(),
            ActiveLevel::Low => self.pin.set_low(),
        }
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        match self.active {
            ActiveLevel::High => self.pin.set_low(),
            ActiveLevel::Low => self.pin.set_high(),
        }
    }
}
