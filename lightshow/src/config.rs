//! Lightshow configuration, read from the environment.

use anyhow::{Context as _, Result};
use color_math::Config as ColorConfig;
use std::{env, str::FromStr, time::Duration};

#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub(crate) struct Config {
    pub(crate) pixels: usize,
    pub(crate) frames: u32,
    pub(crate) sparkle: u8,
    pub(crate) resolution: u32,
    pub(crate) frame_time: Duration,
    pub(crate) seed: Option<u64>,
    pub(crate) color: ColorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixels: 32,
            frames: 48,
            sparkle: 12,
            resolution: 12,
            frame_time: Duration::from_millis(50),
            seed: None,
            color: ColorConfig::default(),
        }
    }
}

impl Config {
    /// Reads `LIGHTSHOW_*` overrides on top of the defaults.
    pub(crate) fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            pixels: var("LIGHTSHOW_PIXELS")?.unwrap_or(defaults.pixels),
            frames: var("LIGHTSHOW_FRAMES")?.unwrap_or(defaults.frames),
            sparkle: var("LIGHTSHOW_SPARKLE")?.unwrap_or(defaults.sparkle),
            resolution: var("LIGHTSHOW_RESOLUTION")?.unwrap_or(defaults.resolution),
            frame_time: var("LIGHTSHOW_FRAME_MS")?
                .map_or(defaults.frame_time, Duration::from_millis),
            seed: var("LIGHTSHOW_SEED")?,
            color: defaults.color,
        })
    }
}

fn var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(name)
        .ok()
        .map(|value| {
            value
                .trim()
                .parse()
                .with_context(|| format!("invalid value for {name}: `{value}`"))
        })
        .transpose()
}
