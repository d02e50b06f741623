//! Packed 8-bit RGB color.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::Vec3;

/// Largest value a packed `0xRRGGBB` color can hold.
pub const PACKED_MAX: u32 = 0x00FF_FFFF;

/// Errors from parsing a `#rrggbb` / `0xrrggbb` string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    InvalidLength(String),

    #[error("invalid hex digits in {0:?}")]
    InvalidDigit(String),
}

/// An 8-bit-per-channel RGB color.
///
/// Layout is three tightly packed bytes, so a `&[Rgb]` can be handed to
/// anything expecting RGB8 pixel data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into `0xRRGGBB` (red in the high byte of the three).
    pub const fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack from `0xRRGGBB`. Bits above the low 24 are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Channels as 0-1 floats, the form a renderer multiplies into a light.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }

    /// Format as `#rrggbb`.
    pub fn to_hex_string(self) -> String {
        self.to_string()
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.pack()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`, `0xrrggbb` or bare `rrggbb`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if hex.len() != 6 {
            return Err(ParseColorError::InvalidLength(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }

        u32::from_str_radix(hex, 16)
            .map(Rgb::from_packed)
            .map_err(|_| ParseColorError::InvalidDigit(s.to_string()))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
