#![doc = include_str!("../README.md")]
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

use anyhow::{bail, Context as _, Result};
use rand::{rngs::StdRng, SeedableRng};
use std::{io, thread};

mod config;
mod strip;
mod trace;

use config::Config;
use strip::Strip;

fn main() -> Result<()> {
    trace::initialize();

    let config = Config::from_env()?;
    if config.pixels == 0 {
        bail!("LIGHTSHOW_PIXELS must be at least 1");
    }
    tracing::info!(
        pixels = config.pixels,
        frames = config.frames,
        sparkle = config.sparkle,
        resolution = config.resolution,
        policy = %config.color.channel_policy,
        "starting lightshow"
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut strip = Strip::new(config.pixels);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for frame in 0..config.frames {
        strip
            .update(
                frame,
                config.sparkle,
                config.resolution,
                config.color.channel_policy,
                &mut rng,
            )
            .with_context(|| format!("failed to update frame {frame}"))?;
        strip.render(&mut out).context("failed to write frame")?;
        tracing::debug!(frame, "rendered frame");
        thread::sleep(config.frame_time);
    }

    tracing::info!(sparkles = strip.sparkles(), "lightshow finished");
    Ok(())
}
