use super::*;

use crate::{FixedPoint, ScaleFrom, shift_left, shift_right};
use crate::fixed_point::{scaled_of_f64, scaled_to_f64};

// The conversions here follow the same rules as those of `FixedPoint` (see `ScaleFrom`): truncate
// below the precision of the destination, wrap above its storage, saturate from floats. None of
// them clamp to the declared capacity.

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> Elastic<I, F, R> {
  /// The value of `self` as an `f64`, rounded to nearest if it has more than 53 significant bits.
  #[inline]
  pub(crate) fn as_f64(self) -> f64 {
    scaled_to_f64(self.0, -F)
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  S: Rep,
> ScaleFrom<S> for Elastic<I, F, R> {
  /// Convert an integer into an `Elastic`; same as [`Elastic::from_int`].
  #[inline]
  fn scale_from(value: S) -> Self {
    Self::from_int(value)
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> ScaleFrom<f64> for Elastic<I, F, R> {
  /// Convert an `f64` into an `Elastic`, truncating toward zero to a multiple of `2^-F`. Values out
  /// of the range of the storage `R` saturate, and NaN converts to zero.
  #[inline]
  fn scale_from(value: f64) -> Self {
    Self::from_data(scaled_of_f64(value, -F))
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> ScaleFrom<f32> for Elastic<I, F, R> {
  #[inline]
  fn scale_from(value: f32) -> Self {
    Self::from_data(scaled_of_f64(value as f64, -F))
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  R2: Rep,
  const E2: i32,
> ScaleFrom<FixedPoint<R2, E2>> for Elastic<I, F, R> {
  /// Convert any `FixedPoint` into an `Elastic`, rescaling the stored integer. To reinterpret
  /// a `FixedPoint` of the matching exponent as is, use [`Elastic::from_fixed`].
  #[inline]
  fn scale_from(value: FixedPoint<R2, E2>) -> Self {
    Self::from_data(shift_right::<R, R2>(value.data(), -F - E2))
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  R2: Rep,
  const E2: i32,
> ScaleFrom<Elastic<I, F, R>> for FixedPoint<R2, E2> {
  #[inline]
  fn scale_from(value: Elastic<I, F, R>) -> Self {
    FixedPoint::from_data(shift_right::<R2, R>(value.0, E2 + F))
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> ScaleFrom<Elastic<I, F, R>> for f64 {
  #[inline]
  fn scale_from(value: Elastic<I, F, R>) -> Self {
    value.as_f64()
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> ScaleFrom<Elastic<I, F, R>> for f32 {
  #[inline]
  fn scale_from(value: Elastic<I, F, R>) -> Self {
    value.as_f64() as f32
  }
}

macro_rules! make_impl {
  ($int:ty) => {
    impl<
      const I: i32,
      const F: i32,
      R: Rep,
    > ScaleFrom<Elastic<I, F, R>> for $int {
      #[doc = concat!("Convert an `Elastic` into an `", stringify!($int), "`, truncating any fractional part toward zero.")]
      #[inline]
      fn scale_from(value: Elastic<I, F, R>) -> Self {
        shift_left::<$int, R>(value.0, -F)
      }
    }
  }
}

make_impl!{i8}
make_impl!{i16}
make_impl!{i32}
make_impl!{i64}
make_impl!{i128}
make_impl!{u8}
make_impl!{u16}
make_impl!{u32}
make_impl!{u64}
make_impl!{u128}
