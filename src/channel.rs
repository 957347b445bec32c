//! Logical lamp state: which channels are lit and which blink phase is showing.

use crate::config::CHANNEL_COUNT;

/// One of the four lamp channels. Maps 1:1 to an output line via the board table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ChannelId {
    A,
    B,
    C,
    D,
}

impl ChannelId {
    /// All channels, in table order.
    pub const ALL: [ChannelId; CHANNEL_COUNT] = [Self::A, Self::B, Self::C, Self::D];

    pub const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// The `lit` flag of every channel, packed into the low four bits.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct ChannelSet(u8);

impl ChannelSet {
    const MASK: u8 = (1 << CHANNEL_COUNT) - 1;

    /// No channel lit.
    pub const fn dark() -> Self {
        Self(0)
    }

    /// Build a set from one `lit` flag per channel, in table order.
    pub const fn from_flags(flags: [bool; CHANNEL_COUNT]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < CHANNEL_COUNT {
            if flags[i] {
                bits |= 1 << i;
            }
            i += 1;
        }
        Self(bits)
    }

    pub const fn is_lit(self, id: ChannelId) -> bool {
        self.0 & id.bit() != 0
    }

    pub const fn with(self, id: ChannelId, lit: bool) -> Self {
        if lit {
            Self(self.0 | id.bit())
        } else {
            Self(self.0 & !id.bit())
        }
    }

    /// Flip every channel. Applying it twice gives back the original set.
    #[must_use]
    pub const fn invert(self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    /// What the lamps should show for `phase`: the real state when visible,
    /// all dark when blanked.
    pub const fn effective(self, phase: BlinkPhase) -> Self {
        match phase {
            BlinkPhase::Visible => self,
            BlinkPhase::Blank => Self::dark(),
        }
    }

    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Whether the current tick shows the channel states or forces them dark.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum BlinkPhase {
    #[default]
    Visible,
    Blank,
}

impl BlinkPhase {
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Self::Visible => Self::Blank,
            Self::Blank => Self::Visible,
        }
    }

    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}
