//! The `#rrggbb` form of an sRGB color.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// An 8-bit per channel sRGB color, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hex {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
}

impl Hex {
    /// `#ffffff`
    pub const WHITE: Hex = Hex::new(0xff, 0xff, 0xff);
    /// `#000000`
    pub const BLACK: Hex = Hex::new(0x00, 0x00, 0x00);

    /// Create a new hex color from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl FromStr for Hex {
    type Err = ParseError;

    /// Strictly parse `#rrggbb`, case insensitive. Shorthand forms and
    /// missing `#` are rejected; see [`crate::parse_color`] for lenient
    /// input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidHex(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());

        Ok(Hex::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
