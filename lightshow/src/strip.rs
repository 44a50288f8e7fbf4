//! A simulated LED strip.

use color_math::{
    color::{unpack_rgb, Color},
    config::ChannelPolicy,
    num::Radians,
    random::{do_randomly, Random},
    wheel::{angle_color_with, random_angle_color_with},
    Error, Result,
};
use std::io::{self, Write};

/// Hue advance per frame, in wheel steps.
const FRAME_STEP: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub(crate) struct Strip {
    pixels: Vec<Color>,
    sparkles: usize,
}

impl Strip {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            pixels: vec![Color::BLACK; len],
            sparkles: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Total number of sparkles drawn since creation.
    #[must_use]
    pub(crate) fn sparkles(&self) -> usize {
        self.sparkles
    }

    /// Computes the colors for `frame`.
    ///
    /// Each pixel sparkles to a random wheel color with probability `(sparkle + 1) / 256`,
    /// otherwise it shows the rotating wheel. Fails if `resolution` is `0`, sparkle or not.
    pub(crate) fn update<R: Random + ?Sized>(
        &mut self,
        frame: u32,
        sparkle: u8,
        resolution: u32,
        policy: ChannelPolicy,
        rng: &mut R,
    ) -> Result<()> {
        if resolution == 0 {
            return Err(Error::InvalidArgument(
                "color wheel resolution must be at least 1".into(),
            ));
        }
        let len = self.pixels.len().max(1) as f32;
        let offset = Radians::from_step(frame, resolution) * FRAME_STEP;
        for (index, pixel) in self.pixels.iter_mut().enumerate() {
            *pixel = if do_randomly(sparkle, rng) {
                self.sparkles += 1;
                random_angle_color_with(resolution, policy, rng)?
            } else {
                let position = Radians::TURN * (index as f32 / len);
                angle_color_with(position + offset, policy)
            };
        }
        Ok(())
    }

    /// Writes the strip as one row of 24-bit ANSI color blocks.
    pub(crate) fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for &pixel in &self.pixels {
            let [red, green, blue] = unpack_rgb(pixel);
            write!(out, "\x1b[48;2;{red};{green};{blue}m  ")?;
        }
        writeln!(out, "\x1b[0m")
    }
}
