//! Color types and methods.

use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// A 24-bit RGB color packed as `0x00RRGGBB`.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self(0x00_00_00);
    /// Pure white.
    pub const WHITE: Self = Self(0xFF_FF_FF);

    /// Packs 8-bit channels into a `Color`.
    #[inline]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Packs channels keeping only the low 8 bits of each.
    #[inline]
    pub const fn from_channels_wrapping(red: u32, green: u32, blue: u32) -> Self {
        Self(((red & 0xFF) << 16) | ((green & 0xFF) << 8) | (blue & 0xFF))
    }

    /// Packs channels, rejecting any value that does not fit in 8 bits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeChannel`] for the first channel above 255.
    pub fn try_from_channels(red: u32, green: u32, blue: u32) -> Result<Self> {
        let narrow = |channel: Channel, value: u32| {
            u8::try_from(value).map_err(|_| {
                tracing::debug!("rejected {channel} channel value {value}");
                Error::OutOfRangeChannel { channel, value }
            })
        };
        Ok(Self::from_rgb(
            narrow(Channel::Red, red)?,
            narrow(Channel::Green, green)?,
            narrow(Channel::Blue, blue)?,
        ))
    }

    /// Returns the packed `0x00RRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the channels as an owned `[red, green, blue]` array.
    #[inline]
    #[must_use]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns a single channel.
    #[inline]
    #[must_use]
    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red(),
            Channel::Green => self.green(),
            Channel::Blue => self.blue(),
        }
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#RRGGBB` or `RRGGBB`.
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidArgument(format!(
                "expected a `#RRGGBB` hex color, found `{s}`"
            )));
        }
        u32::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|err| Error::InvalidArgument(format!("invalid hex color `{s}`: {err}")))
    }
}

/// One of the three channels of a [`Color`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Convert separate RGB values to a single [`Color`].
#[inline]
pub const fn pack_rgb(red: u8, green: u8, blue: u8) -> Color {
    Color::from_rgb(red, green, blue)
}

/// Convert a single [`Color`] into separate RGB values.
#[inline]
#[must_use]
pub const fn unpack_rgb(color: Color) -> [u8; 3] {
    color.to_rgb()
}
