//! Binary pixel values

use std::fmt;

/// A single binary pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Value 0
    White,
    /// Value 1
    Black,
}

impl Pixel {
    /// Parse a numeric pixel value, accepting only 0 and 1
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::White),
            1 => Some(Self::Black),
            _ => None,
        }
    }

    /// Numeric value of the pixel
    pub const fn value(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    /// Whether the pixel is set in bit-packed storage
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl From<bool> for Pixel {
    fn from(bit: bool) -> Self {
        if bit { Self::Black } else { Self::White }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
