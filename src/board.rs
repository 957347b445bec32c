//! Board wiring as data: one table walked by both setup and refresh.

use crate::channel::{ChannelId, ChannelSet};
use crate::config::CHANNEL_COUNT;
use crate::pin::{EdgeTrigger, PinDescriptor, PinSpec, Port};

/// A lamp channel and the output line it drives.
#[derive(Clone, Copy, Debug)]
pub struct ChannelLine {
    pub id: ChannelId,
    pub label: &'static str,
    pub pin: PinDescriptor,
    pub initially_lit: bool,
}

/// The push button line.
#[derive(Clone, Copy, Debug)]
pub struct ButtonLine {
    pub label: &'static str,
    pub pin: PinDescriptor,
    pub trigger: EdgeTrigger,
}

#[derive(Clone, Copy, Debug)]
pub struct Board {
    pub name: &'static str,
    pub channels: [ChannelLine; CHANNEL_COUNT],
    pub button: ButtonLine,
}

impl Board {
    /// Lamp state at task start.
    pub const fn initial_channels(&self) -> ChannelSet {
        let mut flags = [false; CHANNEL_COUNT];
        let mut i = 0;
        while i < CHANNEL_COUNT {
            flags[self.channels[i].id.index()] = self.channels[i].initially_lit;
            i += 1;
        }
        ChannelSet::from_flags(flags)
    }

    pub const fn output_spec(&self, index: usize) -> PinSpec {
        PinSpec::output(self.channels[index].pin)
    }

    pub const fn button_spec(&self) -> PinSpec {
        PinSpec::edge_input(self.button.pin, self.button.trigger)
    }
}

/// STM32F407 Discovery: LD4..LD6 on PD12..PD15, user button B1 on PA0.
pub const DISCOVERY_F407: Board = Board {
    name: "stm32f407-discovery",
    channels: [
        ChannelLine {
            id: ChannelId::A,
            label: "green",
            pin: PinDescriptor::new(Port::D, 12),
            initially_lit: true,
        },
        ChannelLine {
            id: ChannelId::B,
            label: "orange",
            pin: PinDescriptor::new(Port::D, 13),
            initially_lit: false,
        },
        ChannelLine {
            id: ChannelId::C,
            label: "red",
            pin: PinDescriptor::new(Port::D, 14),
            initially_lit: true,
        },
        ChannelLine {
            id: ChannelId::D,
            label: "blue",
            pin: PinDescriptor::new(Port::D, 15),
            initially_lit: false,
        },
    ],
    button: ButtonLine {
        label: "user",
        pin: PinDescriptor::new(Port::A, 0),
        trigger: EdgeTrigger::Rising,
    },
};
