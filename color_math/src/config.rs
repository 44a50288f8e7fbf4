//! Color conversion configuration.

use crate::{Error, Result};
use std::{env, fmt, str::FromStr};

/// Environment variable selecting the default [`ChannelPolicy`].
pub const CHANNEL_POLICY_VAR: &str = "COLOR_MATH_CHANNEL_POLICY";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Config {
    pub channel_policy: ChannelPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_policy: env::var(CHANNEL_POLICY_VAR)
                .ok()
                .and_then(|policy| policy.parse::<ChannelPolicy>().ok())
                .unwrap_or_default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel_policy(mut self, channel_policy: ChannelPolicy) -> Self {
        self.channel_policy = channel_policy;
        self
    }
}

/// How a signed channel level in `-255.0..=255.0` becomes an 8-bit channel.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[must_use]
pub enum ChannelPolicy {
    /// Truncate toward zero, then wrap modulo 256. Negative levels become bright channels.
    #[default]
    Wrap,
    /// Clamp to `0..=255`, then truncate. Gives a smooth color wheel.
    Clamp,
}

impl ChannelPolicy {
    /// Converts a channel level to an 8-bit channel value.
    #[inline]
    #[must_use]
    pub fn convert(self, level: f32) -> u8 {
        match self {
            // `as i32` saturates and maps NaN to 0
            Self::Wrap => level as i32 as u8,
            Self::Clamp => level.clamp(0.0, 255.0) as u8,
        }
    }
}

impl fmt::Display for ChannelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrap => f.write_str("wrap"),
            Self::Clamp => f.write_str("clamp"),
        }
    }
}

impl FromStr for ChannelPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(Self::Wrap),
            "clamp" => Ok(Self::Clamp),
            _ => Err(Error::InvalidArgument(format!(
                "unknown channel policy `{s}`, expected `wrap` or `clamp`"
            ))),
        }
    }
}
