//! The blinky task: bring-up followed by the endless refresh loop.

use crate::board::Board;
use crate::debounce::EdgeController;
use crate::device::{DeviceAccess, Pacer};
use crate::error::TaskExit;
use crate::refresh::OutputRefresh;
use crate::setup::{OutputLines, bring_up};

pub struct Task<'a, D, P> {
    device: D,
    pacer: P,
    controller: &'a EdgeController,
    board: &'a Board,
    lines: Option<OutputLines>,
}

impl<'a, D: DeviceAccess, P: Pacer> Task<'a, D, P> {
    pub fn new(device: D, pacer: P, controller: &'a EdgeController, board: &'a Board) -> Self {
        Self {
            device,
            pacer,
            controller,
            board,
            lines: None,
        }
    }

    /// Configure every line. The edge handler must not be armed before this
    /// returns `Ok`.
    pub fn setup(&mut self) -> Result<OutputLines, TaskExit> {
        let lines = bring_up(&mut self.device, self.board)?;
        self.lines = Some(lines);
        Ok(lines)
    }

    /// Run the refresh loop, setting up first if that has not happened yet.
    /// Never returns unless the task has to stop.
    pub async fn run(mut self) -> TaskExit {
        let lines = match self.lines {
            Some(lines) => lines,
            None => match self.setup() {
                Ok(lines) => lines,
                Err(exit) => return exit,
            },
        };

        let mut refresh = OutputRefresh::new(self.controller, lines);
        TaskExit::Refresh(refresh.run(&mut self.device, &mut self.pacer).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DISCOVERY_F407;
    use crate::channel::ChannelId;
    use crate::debounce::DebounceConfig;
    use crate::error::{DeviceError, RefreshError, SetupError};
    use crate::mock::{Call, CountingPacer, RecordingDevice};
    use embassy_futures::block_on;

    fn controller() -> EdgeController {
        EdgeController::for_board(&DISCOVERY_F407, DebounceConfig::new())
    }

    #[test]
    fn test_finalize_failure_never_enters_loop() {
        let ctrl = controller();
        let mut device = RecordingDevice::new();
        device.fail_finalize = true;
        let mut pacer = CountingPacer::default();

        let mut task = Task::new(&mut device, &mut pacer, &ctrl, &DISCOVERY_F407);
        let exit = task.setup().unwrap_err();
        assert_eq!(exit, TaskExit::Setup(SetupError::Finalize(DeviceError::Unsupported)));
        assert_eq!(exit.status(), 1);
        drop(task);

        assert!(device.writes().is_empty());
        assert_eq!(device.calls.last(), Some(&Call::Finalize));
        assert!(pacer.pauses.is_empty());
    }

    #[test]
    fn test_run_reports_setup_failure() {
        let ctrl = controller();
        let mut device = RecordingDevice::new();
        device.fail_finalize = true;
        let mut pacer = CountingPacer::default();

        let exit = block_on(Task::new(&mut device, &mut pacer, &ctrl, &DISCOVERY_F407).run());
        assert_eq!(exit.status(), 1);
        assert!(matches!(exit, TaskExit::Setup(_)));
        assert_eq!(device.write_attempts(), 0);
        assert!(pacer.pauses.is_empty());
    }

    #[test]
    fn test_write_failure_on_third_channel_stops_task() {
        let ctrl = controller();
        let mut device = RecordingDevice::new();
        device.fail_write_at = Some(3);
        let mut pacer = CountingPacer::default();

        let exit = block_on(Task::new(&mut device, &mut pacer, &ctrl, &DISCOVERY_F407).run());
        assert_eq!(exit, TaskExit::Refresh(RefreshError::Write { channel: ChannelId::C, cause: DeviceError::Write }));
        assert_eq!(exit.status(), 1);

        // A and B written, C attempted, D never reached, no second tick.
        assert_eq!(device.write_attempts(), 3);
        assert_eq!(device.writes().len(), 2);
        assert!(pacer.pauses.is_empty());
    }

    #[test]
    fn test_run_after_explicit_setup_does_not_reconfigure() {
        let ctrl = controller();
        let mut device = RecordingDevice::new();
        device.write_budget = Some(8);
        let mut pacer = CountingPacer::default();

        let mut task = Task::new(&mut device, &mut pacer, &ctrl, &DISCOVERY_F407);
        task.setup().unwrap();
        let exit = block_on(task.run());
        assert!(matches!(exit, TaskExit::Refresh(_)));

        let finalizes = device.calls.iter().filter(|call| **call == Call::Finalize).count();
        assert_eq!(finalizes, 1);
        assert_eq!(pacer.pauses.len(), 2);
    }
}
