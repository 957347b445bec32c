use super::traits::Button;
use crate::pin::EdgeTrigger;
use embedded_hal::digital::{ErrorType, InputPin};
use embedded_hal_async::digital::Wait;

/// EXTI-backed push button.
///
/// The trigger decides both which edge counts as a press and which level reads
/// as "pressed": rising edges pair with a pull-down (pressed = high), falling
/// edges with a pull-up (pressed = low).
pub struct GpioButton<P> {
    pin: P,
    trigger: EdgeTrigger,
}

impl<P> GpioButton<P>
where
    P: InputPin + Wait,
{
    pub fn new(pin: P, trigger: EdgeTrigger) -> Self {
        Self { pin, trigger }
    }
}

impl<P> Button for GpioButton<P>
where
    P: InputPin + Wait,
{
    type Error = <P as ErrorType>::Error;

    fn is_pressed(&mut self) -> Result<bool, Self::Error> {
        match self.trigger {
            EdgeTrigger::Falling => self.pin.is_low(),
            EdgeTrigger::Rising | EdgeTrigger::Both => self.pin.is_high(),
        }
    }

    async fn wait_for_press(&mut self) -> Result<(), Self::Error> {
        match self.trigger {
            EdgeTrigger::Rising => self.pin.wait_for_rising_edge().await,
            EdgeTrigger::Falling => self.pin.wait_for_falling_edge().await,
            EdgeTrigger::Both => self.pin.wait_for_any_edge().await,
        }
    }
}
