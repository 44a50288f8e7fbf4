//! Cosine color wheel.
//!
//! Each channel follows a cosine wave scaled to `-255.0..=255.0`, with green and blue lagging red
//! by a third and two thirds of a turn.

use crate::{
    color::{pack_rgb, Color},
    config::ChannelPolicy,
    num::Radians,
    random::Random,
    Error, Result,
};
use std::f32::consts::TAU;

const THIRD_TURN: f32 = TAU / 3.0;
const TWO_THIRDS_TURN: f32 = 2.0 * TAU / 3.0;

/// Returns the signed `[red, green, blue]` levels at `angle`, before channel conversion.
#[must_use]
pub fn angle_levels(angle: impl Into<Radians>) -> [f32; 3] {
    let angle = angle.into().get();
    [
        angle.cos() * 255.0,
        (angle - THIRD_TURN).cos() * 255.0,
        (angle - TWO_THIRDS_TURN).cos() * 255.0,
    ]
}

/// Returns the wheel color at `angle`, wrapping negative levels.
///
/// Negative levels wrap around instead of clamping to zero, so `angle_color(0.0)` is
/// `#FF8181` rather than pure red. Use [`angle_color_with`] and [`ChannelPolicy::Clamp`] for
/// a smooth wheel.
///
/// Colors repeat every full turn only up to `f32` rounding: a level that lands on an integer
/// boundary, such as `-12.0`, may truncate to neighboring bytes at `angle` and `angle + TAU`.
#[inline]
pub fn angle_color(angle: impl Into<Radians>) -> Color {
    angle_color_with(angle, ChannelPolicy::Wrap)
}

/// Returns the wheel color at `angle`, converting levels with `policy`.
pub fn angle_color_with(angle: impl Into<Radians>, policy: ChannelPolicy) -> Color {
    let [red, green, blue] = angle_levels(angle).map(|level| policy.convert(level));
    pack_rgb(red, green, blue)
}

/// Returns one of `resolution` evenly spaced wheel colors, picked uniformly from `rng`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `resolution` is `0`.
#[inline]
pub fn random_angle_color<R: Random + ?Sized>(resolution: u32, rng: &mut R) -> Result<Color> {
    random_angle_color_with(resolution, ChannelPolicy::Wrap, rng)
}

/// Same as [`random_angle_color`], converting levels with `policy`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `resolution` is `0`.
pub fn random_angle_color_with<R: Random + ?Sized>(
    resolution: u32,
    policy: ChannelPolicy,
    rng: &mut R,
) -> Result<Color> {
    if resolution == 0 {
        tracing::debug!("rejected zero color wheel resolution");
        return Err(Error::InvalidArgument(
            "color wheel resolution must be at least 1".into(),
        ));
    }
    let step = rng.random(resolution);
    let angle = Radians::from_step(step, resolution);
    tracing::trace!(step, resolution, angle = angle.get(), "random wheel step");
    Ok(angle_color_with(angle, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{num::ApproxEq, random::Sequence};
    use std::f32::consts::PI;

    #[test]
    fn zero_angle() {
        assert_eq!(angle_color(0.0), pack_rgb(255, 129, 129));
        assert_eq!(
            angle_color_with(0.0, ChannelPolicy::Clamp),
            pack_rgb(255, 0, 0)
        );
    }

    #[test]
    fn third_turns() {
        assert_eq!(angle_color(THIRD_TURN), pack_rgb(129, 255, 129));
        assert_eq!(
            angle_color_with(THIRD_TURN, ChannelPolicy::Clamp),
            pack_rgb(0, 255, 0)
        );
        assert_eq!(
            angle_color_with(TWO_THIRDS_TURN, ChannelPolicy::Clamp),
            pack_rgb(0, 0, 255)
        );
    }

    #[test]
    fn periodic() {
        for i in 0..64 {
            let angle = i as f32 * 0.1 - 3.0;
            let levels = angle_levels(angle);
            let shifted = angle_levels(angle + TAU);
            let shifted_back = angle_levels(Radians::new(angle) - Radians::TURN);
            for ((level, next), prev) in levels.iter().zip(shifted).zip(shifted_back) {
                assert!(level.is_approx_eq(next, 1e-2), "{angle}: {level} != {next}");
                assert!(level.is_approx_eq(prev, 1e-2), "{angle}: {level} != {prev}");
            }
        }
        assert_eq!(angle_color(1.0), angle_color(1.0 + TAU));
        assert_eq!(
            angle_color_with(PI, ChannelPolicy::Clamp),
            angle_color_with(PI + TAU, ChannelPolicy::Clamp)
        );
    }

    #[test]
    fn periodic_up_to_truncation() {
        let near = |a: u8, b: u8| a.wrapping_sub(b) <= 1 || b.wrapping_sub(a) <= 1;
        for i in 0..10_000 {
            let angle = i as f32 * TAU / 10_000.0;
            let color = angle_color(angle).to_rgb();
            let shifted = angle_color(angle + TAU).to_rgb();
            for (a, b) in color.into_iter().zip(shifted) {
                assert!(near(a, b), "{angle}: {color:?} vs {shifted:?}");
            }
        }
        let angle = 1.617_872_5_f32;
        assert!(angle_levels(angle)[0].is_approx_eq(-12.0, 1e-3));
        assert!(near(
            angle_color(angle).red(),
            angle_color(angle + TAU).red()
        ));
    }

    #[test]
    fn levels_stay_in_range() {
        for i in 0..360 {
            let levels = angle_levels(Radians::from_degrees(i as f32));
            assert!(levels.iter().all(|level| (-255.0..=255.0).contains(level)));
            // Three equally spaced cosines always sum to zero.
            assert!(levels.iter().sum::<f32>().is_approx_eq(0.0, 1e-2));
        }
    }

    #[test]
    fn zero_resolution() {
        let mut rng = Sequence::new([0]);
        assert!(matches!(
            random_angle_color(0, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn scripted_steps() {
        let mut rng = Sequence::new([0, 1, 2, 3]);
        assert_eq!(random_angle_color(3, &mut rng), Ok(angle_color(0.0)));
        assert_eq!(
            random_angle_color(3, &mut rng),
            Ok(angle_color(Radians::from_step(1, 3)))
        );
        assert_eq!(
            random_angle_color_with(3, ChannelPolicy::Clamp, &mut rng),
            Ok(angle_color_with(
                Radians::from_step(2, 3),
                ChannelPolicy::Clamp
            ))
        );
        assert_eq!(random_angle_color(3, &mut rng), Ok(angle_color(0.0)));
        assert_eq!(random_angle_color(1, &mut rng), Ok(angle_color(0.0)));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_colors_come_from_steps() {
        use rand::{rngs::StdRng, SeedableRng};
        use std::collections::HashSet;

        let mut rng = StdRng::seed_from_u64(42);
        for resolution in [1, 2, 6, 12, 100] {
            let palette = (0..resolution)
                .map(|step| angle_color(Radians::from_step(step, resolution)))
                .collect::<HashSet<_>>();
            assert!(palette.len() <= resolution as usize);
            let mut seen = HashSet::new();
            for _ in 0..2000 {
                let color = random_angle_color(resolution, &mut rng);
                let color = color.unwrap_or_else(|err| panic!("{resolution}: {err}"));
                assert!(palette.contains(&color), "{resolution}: {color}");
                seen.insert(color);
            }
            assert_eq!(seen, palette);
        }
    }
}
