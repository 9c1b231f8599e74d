use super::*;

use crate::Rep;
use crate::underlying::pow2;

/// `x × 2^exponent`, for any `exponent`. A single multiplication by [`pow2`] is not enough when
/// `2^exponent` itself is outside the range of `f64` but the product isn't, so multiply in steps.
fn ldexp(mut x: f64, mut exponent: i32) -> f64 {
  const STEP: i32 = 1000;
  while exponent > STEP && x.is_finite() && x != 0. {
    x *= pow2(STEP);
    exponent -= STEP;
  }
  while exponent < -STEP && x.is_finite() && x != 0. {
    x *= pow2(-STEP);
    exponent += STEP;
  }
  if x.is_finite() && x != 0. { x * pow2(exponent) } else { x }
}

/// `data × 2^exponent` as an `f64`, rounded to nearest if `data` has more than 53 significant
/// bits.
#[inline]
pub(crate) fn scaled_to_f64<R: Rep>(data: R, exponent: i32) -> f64 {
  if data == R::ZERO { return 0. }
  ldexp(data.to_f64(), exponent)
}

/// The stored integer for the real number `value` at the given exponent: `value × 2^-exponent`,
/// truncated toward zero, saturating, and with NaN mapped to zero.
#[inline]
pub(crate) fn scaled_of_f64<R: Rep>(value: f64, exponent: i32) -> R {
  R::of_f64(ldexp(value, -exponent))
}

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  /// The value of `self` as an `f64`, rounded to nearest if it has more than 53 significant bits.
  #[inline]
  pub(crate) fn as_f64(self) -> f64 {
    scaled_to_f64(self.0, E)
  }
}

impl<
  R: Rep,
  const E: i32,
> ScaleFrom<f64> for FixedPoint<R, E> {
  /// Convert an `f64` into a `FixedPoint`, truncating toward zero to the nearest multiple of
  /// `2^E`. Values out of range saturate to [`FixedPoint::MIN`] or [`FixedPoint::MAX`], and NaN
  /// converts to zero.
  #[inline]
  fn scale_from(value: f64) -> Self {
    Self(scaled_of_f64(value, E))
  }
}

impl<
  R: Rep,
  const E: i32,
> ScaleFrom<f32> for FixedPoint<R, E> {
  /// Convert an `f32` into a `FixedPoint`; same as converting it to `f64` first (which is exact).
  #[inline]
  fn scale_from(value: f32) -> Self {
    Self(scaled_of_f64(value as f64, E))
  }
}

impl<
  R: Rep,
  const E: i32,
> ScaleFrom<FixedPoint<R, E>> for f64 {
  /// Convert a `FixedPoint` into an `f64`. This is exact if the stored integer has no more than 53
  /// significant bits, and otherwise rounds to nearest.
  #[inline]
  fn scale_from(value: FixedPoint<R, E>) -> Self {
    value.as_f64()
  }
}

impl<
  R: Rep,
  const E: i32,
> ScaleFrom<FixedPoint<R, E>> for f32 {
  /// Convert a `FixedPoint` into an `f32`. This is exact if the stored integer has no more than 24
  /// significant bits.
  #[inline]
  fn scale_from(value: FixedPoint<R, E>) -> Self {
    value.as_f64() as f32
  }
}
