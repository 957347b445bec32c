use core::fmt;

use crate::channel::ChannelId;
use crate::config::EXIT_FAILURE;

/// Failures reported by the device access layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum DeviceError {
    /// The descriptor is not wired on this board.
    UnknownPin,
    /// The requested mode/trigger combination cannot be provided.
    Unsupported,
    /// Configuration was already sealed.
    AlreadyFinalized,
    /// Outputs are written before the configuration was sealed.
    NotFinalized,
    /// The line behind the handle was never configured.
    NotConfigured,
    /// The handle refers to an input line.
    NotAnOutput,
    /// The pin driver reported a write error.
    Write,
    /// The tick source could not be read.
    Clock,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::UnknownPin => "pin is not wired on this board",
            Self::Unsupported => "unsupported pin configuration",
            Self::AlreadyFinalized => "configuration already finalized",
            Self::NotFinalized => "configuration not finalized",
            Self::NotConfigured => "pin not configured",
            Self::NotAnOutput => "pin is not an output",
            Self::Write => "output write failed",
            Self::Clock => "monotonic clock unavailable",
        };
        f.write_str(msg)
    }
}

/// Fatal setup error. Only a failed finalize stops the task.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SetupError {
    Finalize(DeviceError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finalize(cause) => write!(f, "finalize_configuration failed: {cause}"),
        }
    }
}

/// Fatal refresh loop error: the physical outputs are now in an unknown state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum RefreshError {
    Write { channel: ChannelId, cause: DeviceError },
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write { channel, cause } => write!(f, "set_output on channel {channel:?} failed: {cause}"),
        }
    }
}

/// Why the task stopped. The task has no successful exit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum TaskExit {
    Setup(SetupError),
    Refresh(RefreshError),
}

impl TaskExit {
    /// Exit status of the task.
    pub const fn status(&self) -> u8 {
        EXIT_FAILURE
    }
}

impl From<SetupError> for TaskExit {
    fn from(err: SetupError) -> Self {
        Self::Setup(err)
    }
}

impl From<RefreshError> for TaskExit {
    fn from(err: RefreshError) -> Self {
        Self::Refresh(err)
    }
}

impl fmt::Display for TaskExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(err) => write!(f, "setup: {err}"),
            Self::Refresh(err) => write!(f, "refresh: {err}"),
        }
    }
}
