//! Device access layer over the four lamps of a [`Board`].
//!
//! Pin ownership on embassy is fixed at construction, so `configure` here
//! checks a request against the board table, puts the lamp into its idle
//! (dark) level and hands out a handle. The button line is recorded as armed;
//! its edge handler is the edge watcher the firmware spawns after setup.

use super::traits::Led;
use crate::board::Board;
use crate::config::CHANNEL_COUNT;
use crate::device::{DeviceAccess, PinHandle};
use crate::error::DeviceError;
use crate::pin::{PinMode, PinSpec};

const BUTTON_HANDLE: u8 = CHANNEL_COUNT as u8;

pub struct GpioPanel<'b, L> {
    board: &'b Board,
    leds: [L; CHANNEL_COUNT],
    configured: [bool; CHANNEL_COUNT],
    button_armed: bool,
    finalized: bool,
}

impl<'b, L: Led> GpioPanel<'b, L> {
    /// `leds` must be in board-table order.
    pub fn new(board: &'b Board, leds: [L; CHANNEL_COUNT]) -> Self {
        Self {
            board,
            leds,
            configured: [false; CHANNEL_COUNT],
            button_armed: false,
            finalized: false,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn button_armed(&self) -> bool {
        self.button_armed
    }

    fn configure_output(&mut self, index: usize) -> Result<PinHandle, DeviceError> {
        self.leds[index].off().map_err(|_| DeviceError::Write)?;
        self.configured[index] = true;
        Ok(PinHandle::new(index as u8))
    }
}

impl<L: Led> DeviceAccess for GpioPanel<'_, L> {
    fn configure(&mut self, spec: &PinSpec) -> Result<PinHandle, DeviceError> {
        if self.finalized {
            return Err(DeviceError::AlreadyFinalized);
        }

        if let Some(index) = self.board.channels.iter().position(|line| line.pin == spec.pin) {
            return match spec.mode {
                PinMode::Output => self.configure_output(index),
                PinMode::Input => Err(DeviceError::Unsupported),
            };
        }

        if spec.pin == self.board.button.pin {
            return match (spec.mode, spec.edge) {
                (PinMode::Input, Some(_)) => {
                    self.button_armed = true;
                    Ok(PinHandle::new(BUTTON_HANDLE))
                }
                _ => Err(DeviceError::Unsupported),
            };
        }

        Err(DeviceError::UnknownPin)
    }

    fn finalize_configuration(&mut self) -> Result<(), DeviceError> {
        if self.finalized {
            return Err(DeviceError::AlreadyFinalized);
        }
        self.finalized = true;
        Ok(())
    }

    fn set_output(&mut self, pin: PinHandle, value: bool) -> Result<(), DeviceError> {
        if !self.finalized {
            return Err(DeviceError::NotFinalized);
        }

        let index = usize::from(pin.raw());
        if index == usize::from(BUTTON_HANDLE) {
            return Err(DeviceError::NotAnOutput);
        }
        if index >= CHANNEL_COUNT {
            return Err(DeviceError::UnknownPin);
        }
        if !self.configured[index] {
            return Err(DeviceError::NotConfigured);
        }

        self.leds[index].set(value).map_err(|_| DeviceError::Write)
    }
}
