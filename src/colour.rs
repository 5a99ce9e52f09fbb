use crate::LayoutError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A colour in the sRGB space, as used by slide themes and brands. Colours
/// travel through JSON as CSS-style hex strings (`#rrggbb` or `#rrggbbaa`)
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Colour {
    /// Opaque colour; r, g, b range from 0 to 255
    RGB { r: u8, g: u8, b: u8 },
    /// Translucent colour; r, g, b, and a range from 0 to 255
    RGBA { r: u8, g: u8, b: u8, a: u8 },
}

impl Colour {
    /// Create a new opaque colour. r, g, and b range from 0 to 255
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new translucent colour. r, g, b, and a range from 0 to 255
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour::RGBA { r, g, b, a }
    }

    /// Parse a hex colour. Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`, with or
    /// without the leading `#`
    pub fn from_hex(hex: &str) -> Result<Colour, LayoutError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || LayoutError::InvalidColour(hex.to_string());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|n| n * 17)
                        .map_err(|_| invalid())
                };
                Ok(Colour::new_rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Colour::new_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Colour::new_rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }

    /// Format the colour as a lowercase hex string
    pub fn to_hex(&self) -> String {
        match *self {
            Colour::RGB { r, g, b } => format!("#{r:02x}{g:02x}{b:02x}"),
            Colour::RGBA { r, g, b, a } => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Colour {
    type Error = LayoutError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&value)
    }
}

impl TryFrom<&str> for Colour {
    type Error = LayoutError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Colour::from_hex(value)
    }
}

impl From<Colour> for String {
    fn from(c: Colour) -> Self {
        c.to_hex()
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::RGB {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::RGBA { r, g, b, a }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::new_rgb(255, 255, 255);
}
