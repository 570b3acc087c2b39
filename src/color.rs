/// ARGB color value and hex helpers.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Percentage of each channel kept by [`Color::darker_shade`].
const SHADE_PERCENT: u16 = 90;

/// A 32-bit ARGB color, alpha in the high byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected 6 or 8 hex digits, got {0} in '{1}'")]
    InvalidLength(usize, String),
    #[error("'{0}' contains non-hex characters")]
    InvalidDigit(String),
}

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const GRAY: Color = Color(0xFF88_8888);

    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    /// Builds a fully opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Opaque color with every channel scaled down, used for tile borders.
    pub fn darker_shade(self) -> Self {
        let scale = |c: u8| (u16::from(c) * SHADE_PERCENT / 100) as u8;
        Color::from_rgb(scale(self.red()), scale(self.green()), scale(self.blue()))
    }

    /// `#RRGGBB` for opaque colors, `#AARRGGBB` otherwise.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            format!("#{:08X}", self.0)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }
        let value = match hex.len() {
            6 | 8 => u32::from_str_radix(hex, 16)
                .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))?,
            len => return Err(ParseColorError::InvalidLength(len, s.to_string())),
        };
        if hex.len() == 6 {
            Ok(Color(0xFF00_0000 | value))
        } else {
            Ok(Color(value))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
