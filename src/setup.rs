//! One-shot bring-up of the lamp and button lines through the device access layer.

use crate::board::Board;
use crate::channel::ChannelId;
use crate::config::CHANNEL_COUNT;
use crate::device::{DeviceAccess, PinHandle};
use crate::error::SetupError;

/// Handles of the lamp lines, in board-table order.
///
/// A channel whose configure call failed has no handle; writing it later is a
/// fatal refresh error.
#[derive(Clone, Copy, Debug)]
pub struct OutputLines {
    lines: [(ChannelId, Option<PinHandle>); CHANNEL_COUNT],
    /// Number of configure calls that failed, button included.
    pub failed: u8,
    pub button_armed: bool,
}

impl OutputLines {
    pub fn iter(&self) -> impl Iterator<Item = (ChannelId, Option<PinHandle>)> + '_ {
        self.lines.iter().copied()
    }

    pub fn handle(&self, id: ChannelId) -> Option<PinHandle> {
        self.lines.iter().find(|(line, _)| *line == id).and_then(|(_, handle)| *handle)
    }
}

/// Configure every lamp line, then the button, then seal the configuration.
///
/// A failed configure is logged and setup carries on. Only a failed
/// `finalize_configuration` is returned as an error.
pub fn bring_up<D: DeviceAccess>(device: &mut D, board: &Board) -> Result<OutputLines, SetupError> {
    let mut lines = OutputLines {
        lines: board.channels.map(|line| (line.id, None)),
        failed: 0,
        button_armed: false,
    };

    for (index, line) in board.channels.iter().enumerate() {
        match device.configure(&board.output_spec(index)) {
            Ok(handle) => {
                info!("{} lamp ({}) configured", line.label, line.pin);
                lines.lines[index].1 = Some(handle);
            }
            Err(err) => {
                error!("configuring {} lamp failed: {}", line.label, err);
                lines.failed += 1;
            }
        }
    }

    match device.configure(&board.button_spec()) {
        Ok(_) => {
            info!("{} button ({}) configured", board.button.label, board.button.pin);
            lines.button_armed = true;
        }
        Err(err) => {
            error!("configuring {} button failed: {}", board.button.label, err);
            lines.failed += 1;
        }
    }

    if let Err(err) = device.finalize_configuration() {
        error!("finalize_configuration failed: {}", err);
        return Err(SetupError::Finalize(err));
    }

    info!("init done on {} ({} setup failures)", board.name, lines.failed);
    Ok(lines)
}
