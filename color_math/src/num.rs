//! Numeric helpers.

use std::f32::consts::TAU;

pub trait ApproxEq {
    type Type;

    fn is_approx_eq(&self, rhs: Self::Type, epsilon: Self::Type) -> bool;
}

impl ApproxEq for f32 {
    type Type = f32;

    fn is_approx_eq(&self, rhs: f32, epsilon: f32) -> bool {
        (self - rhs).abs() <= epsilon
    }
}

/// A position on the color wheel, in radians.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Mul,
    derive_more::MulAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
#[repr(transparent)]
pub struct Radians(f32);

impl Radians {
    /// A full turn of the wheel.
    pub const TURN: Self = Self(TAU);

    /// Creates `Radians` without normalizing the value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Creates `Radians` from degrees.
    #[inline]
    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.to_radians())
    }

    /// The angle of `step` out of `resolution` equal steps around the wheel.
    #[inline]
    pub fn from_step(step: u32, resolution: u32) -> Self {
        Self((TAU / resolution as f32) * step as f32)
    }

    /// Returns the value as a primitive type.
    #[inline]
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}
