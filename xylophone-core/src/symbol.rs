use core::fmt;

/// A note or button symbol, transmitted over the serial line as an ASCII digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Symbol(u8);

impl Symbol {
    pub const MAX: u8 = 7;

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The symbol a button emits in direct mode
    pub const fn from_channel(channel: usize) -> Option<Self> {
        if channel <= Self::MAX as usize {
            Some(Self(channel as u8))
        } else {
            None
        }
    }

    /// Decodes a byte received from the instrument
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'0'..=b'7' => Some(Self(byte - b'0')),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn to_ascii(self) -> u8 {
        b'0' + self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a debounced button press does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Emit the button's own symbol
    #[default]
    Direct,

    /// Play the song assigned to the button
    Song,
}

impl Mode {
    /// The mode line is pulled up; tying it low selects direct mode
    pub const fn from_line_low(is_low: bool) -> Self {
        if is_low {
            Mode::Direct
        } else {
            Mode::Song
        }
    }
}
