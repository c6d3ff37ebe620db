//! Numbers and numerics.

use crate::text;
use anyhow::Result;
use impact_byte_order::CommonEndian;
use num_traits::{self as nt, AsPrimitive};
use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

/// The number of fractional digits kept when computing vector lengths.
pub const DEFAULT_DECIMAL_PRECISION: u32 = 6;

const POWERS_OF_TEN: [f64; 7] = [1.0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6];

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    nt::Float + nt::FromPrimitive + nt::ToPrimitive + approx::AbsDiffEq + approx::RelativeEq
{
}

/// A type that can be used for the components of a vector.
///
/// Any scalar supports construction, comparison, the canonical text form and
/// byte order conversion. Arithmetic is bounded separately, so that flag
/// vectors (`bool` components) are still scalars.
pub trait Scalar:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + CommonEndian + 'static
{
    /// Parses the scalar from text using a fixed decimal convention that does
    /// not depend on the locale of the process. Surrounding whitespace is
    /// ignored, and text that is empty after trimming gives zero.
    ///
    /// # Errors
    /// Returns an error if anything other than whitespace remains after the
    /// number.
    fn parse_text(text: &str) -> Result<Self>;

    /// Writes the text form of the scalar, which [`Self::parse_text`] reads
    /// back.
    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A scalar supporting the arithmetic and the `f32` round trip needed for
/// geometric vector operations such as [`length`](crate::Vector3::length)
/// and [`normalize`](crate::Vector3::normalize).
///
/// This is implemented for every type with the required operators that can
/// be converted to and from `f32` with `as`.
pub trait Numeric:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// Converts the value to `f32` like an `as` cast.
    fn to_f32(self) -> f32;

    /// Converts an `f32` to this type like an `as` cast.
    fn from_f32(value: f32) -> Self;
}

impl Float for f32 {}
impl Float for f64 {}

macro_rules! impl_scalar_for_integers {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                fn parse_text(text: &str) -> Result<Self> {
                    text::parse_number(text, |number| {
                        number
                            .parse::<$t>()
                            .ok()
                            .or_else(|| number.parse::<f64>().ok().map(|value| value as $t))
                    })
                }

                fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

macro_rules! impl_scalar_for_floats {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                fn parse_text(text: &str) -> Result<Self> {
                    text::parse_number(text, |number| number.parse::<$t>().ok())
                }

                fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

impl_scalar_for_integers!(i8, u8, i16, u16, i32, u32, i64, u64);
impl_scalar_for_floats!(f32, f64);

impl Scalar for bool {
    fn parse_text(text: &str) -> Result<Self> {
        text::parse_number(text, |number| match number {
            "true" => Some(true),
            "false" => Some(false),
            _ => number.parse::<f64>().ok().map(|value| value != 0.0),
        })
    }

    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&u8::from(*self), f)
    }
}

impl<T> Numeric for T
where
    T: Copy
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + AsPrimitive<f32>,
    f32: AsPrimitive<T>,
{
    #[inline]
    fn to_f32(self) -> f32 {
        self.as_()
    }

    #[inline]
    fn from_f32(value: f32) -> Self {
        value.as_()
    }
}

/// Truncates the given value toward zero so that it has at most `precision`
/// fractional decimal digits.
///
/// The value is scaled by `10^precision`, truncated to an `i64` and scaled
/// back. This removes differences in the last bits between floating point
/// units, which makes values derived from it reproducible across platforms.
/// Values whose scaled magnitude does not fit in an `i64`, including NaN and
/// infinities, are returned unchanged.
pub fn truncate_decimal<F: Float>(value: F, precision: u32) -> F {
    let scale = POWERS_OF_TEN
        .get(precision as usize)
        .copied()
        .unwrap_or_else(|| 10_f64.powf(f64::from(precision)));

    let Some(scaled) = F::from_f64(scale).and_then(|scale| (value * scale).to_i64()) else {
        return value;
    };

    F::from_f64(scaled as f64 / scale).unwrap_or(value)
}
