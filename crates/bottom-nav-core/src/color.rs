//! Packed 32-bit ARGB colors.
//!
//! Menu documents describe colors the way resource files do: a `#` followed by
//! 3, 4, 6 or 8 hex digits, or a plain integer. [`Color`] keeps the packed
//! `0xAARRGGBB` value so that "unset" per-item overrides can be expressed as
//! `0`, exactly like the resource system hands them out.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AttributeError;

/// A packed ARGB color (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent black. Also used as the "no color" marker.
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Opaque pure red.
    pub const RED: Self = Self(0xFFFF_0000);

    /// Create a color from its four 8-bit channels.
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create an opaque color from RGB channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Return the same color with a different alpha channel.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Return the same color with its alpha channel halved (integer division).
    ///
    /// This is how inactive colors are derived from active ones, and disabled
    /// colors from inactive ones.
    #[inline]
    pub const fn half_alpha(self) -> Self {
        self.with_alpha(self.alpha() / 2)
    }

    /// Returns true for the `0` value used to mean "no color set".
    #[inline]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Parse a color literal.
    ///
    /// Accepted forms are `#RGB`, `#ARGB`, `#RRGGBB`, `#AARRGGBB`, a decimal
    /// integer (which may be negative, as packed colors often are when stored
    /// signed) and a `0x`-prefixed hex integer. Missing alpha means opaque.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();

        if let Some(hex) = value.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let digits = u32::from_str_radix(hex, 16).ok()?;
            return match hex.len() {
                3 => Some(Self(0xFF00_0000 | expand_nibbles(digits, 3))),
                4 => Some(Self(expand_nibbles(digits, 4))),
                6 => Some(Self(0xFF00_0000 | digits)),
                8 => Some(Self(digits)),
                _ => None,
            };
        }

        if let Some(hex) = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
        {
            return u32::from_str_radix(hex, 16).ok().map(Self);
        }

        value
            .parse::<i64>()
            .ok()
            .filter(|v| *v >= i64::from(i32::MIN) && *v <= i64::from(u32::MAX))
            .map(|v| Self(v as u32))
    }
}

/// Expand `count` 4-bit channels into 8-bit channels (`0xF` -> `0xFF`).
fn expand_nibbles(digits: u32, count: u32) -> u32 {
    (0..count).fold(0, |acc, i| {
        let shift = (count - 1 - i) * 4;
        let nibble = (digits >> shift) & 0xF;
        (acc << 8) | (nibble << 4) | nibble
    })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AttributeError::invalid("color", s, "not a color literal"))
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color literal '{raw}'")))
    }
}
