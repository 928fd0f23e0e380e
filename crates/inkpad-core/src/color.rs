//! Stored element colors.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// RGBA8 color as stored in the document.
///
/// Serializes as a `#rrggbb` hex string (`#rrggbbaa` when not fully opaque),
/// the form the persisted document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Palette entry: black.
pub const BLACK: Color = Color::rgb(0, 0, 0);
/// Palette entry: blue.
pub const BLUE: Color = Color::rgb(0, 0, 255);
/// Palette entry: red.
pub const RED: Color = Color::rgb(255, 0, 0);
/// Palette entry: green.
pub const GREEN: Color = Color::rgb(0, 128, 0);

/// The fixed tool palette. Stored colors are not restricted to these values.
pub const PALETTE: [Color; 4] = [BLACK, BLUE, RED, GREEN];

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Whether this is opaque pure black (the theme-substituted color).
    pub fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0 && self.a == 255
    }

    /// Format as a hex string; alpha is omitted when fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?.trim();
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
                Some(Self::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }
}

impl From<Color> for peniko::Color {
    fn from(color: Color) -> Self {
        peniko::Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a hex color string like \"#1a2b3c\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
                Color::parse_hex(value)
                    .ok_or_else(|| E::custom(format!("invalid color: {value:?}")))
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
