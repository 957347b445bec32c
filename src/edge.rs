//! Edge handler: waits on the EXTI line and feeds the debounce controller.
//!
//! The timestamp is read after the edge future resolves, never cached across
//! edges, since the wakeup may lag the physical edge by an arbitrary amount.

use crate::debounce::{EdgeController, EdgeVerdict};
use crate::device::MonotonicClock;
use crate::hardware::traits::Button;

/// Wait for one press edge and debounce it.
///
/// Returns `None` if waiting on the line failed; the controller is not touched.
pub async fn next_edge<B: Button, C: MonotonicClock>(
    button: &mut B,
    controller: &EdgeController,
    clock: &C,
) -> Option<EdgeVerdict> {
    if button.wait_for_press().await.is_err() {
        warn!("waiting for button edge failed");
        return None;
    }

    let verdict = controller.on_edge(clock);
    match verdict {
        EdgeVerdict::Accepted { channels } => debug!("press accepted, channels {}", channels),
        EdgeVerdict::Bounce { elapsed } => debug!("bounce ignored ({} ms)", elapsed),
        EdgeVerdict::ClockUnavailable => warn!("tick source unavailable, edge ignored"),
    }
    Some(verdict)
}

/// Handle button edges forever.
pub async fn watch<B: Button, C: MonotonicClock>(button: &mut B, controller: &EdgeController, clock: &C) {
    loop {
        next_edge(button, controller, clock).await;
    }
}
