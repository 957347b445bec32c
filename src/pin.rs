//! Pin descriptors and the configuration requested for each line.

/// GPIO port letter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
}

/// A physical line, e.g. PD12.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct PinDescriptor {
    pub port: Port,
    pub pin: u8,
}

impl PinDescriptor {
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Pull {
    None,
    Up,
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum DriveType {
    PushPull,
    OpenDrain,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Speed {
    Low,
    Medium,
    High,
}

/// Which transition of an input line raises an edge notification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum EdgeTrigger {
    Rising,
    Falling,
    Both,
}

/// Everything the device access layer needs to set up one line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct PinSpec {
    pub pin: PinDescriptor,
    pub mode: PinMode,
    pub pull: Pull,
    pub drive: DriveType,
    pub speed: Speed,
    /// Only set for inputs that deliver edge notifications.
    pub edge: Option<EdgeTrigger>,
}

impl PinSpec {
    /// Lamp line: pull-down, push-pull, high speed.
    pub const fn output(pin: PinDescriptor) -> Self {
        Self {
            pin,
            mode: PinMode::Output,
            pull: Pull::Down,
            drive: DriveType::PushPull,
            speed: Speed::High,
            edge: None,
        }
    }

    /// Button line: pull-down input with an EXTI trigger, low speed.
    pub const fn edge_input(pin: PinDescriptor, trigger: EdgeTrigger) -> Self {
        Self {
            pin,
            mode: PinMode::Input,
            pull: Pull::Down,
            drive: DriveType::PushPull,
            speed: Speed::Low,
            edge: Some(trigger),
        }
    }
}
