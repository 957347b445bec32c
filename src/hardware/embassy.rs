use embassy_time::{Instant, Timer};

use crate::device::{Millis, MonotonicClock, Pacer};
use crate::error::DeviceError;

/// Uptime from the embassy time driver. Reading it cannot fail.
pub struct EmbassyClock;

impl MonotonicClock for EmbassyClock {
    fn now_millis(&self) -> Result<Millis, DeviceError> {
        Ok(Instant::now().as_millis())
    }
}

pub struct TimerPacer;

impl Pacer for TimerPacer {
    async fn pause(&mut self, interval_ms: Millis) {
        Timer::after_millis(interval_ms).await;
    }
}
