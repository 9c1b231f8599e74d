use super::*;

use crate::{Rep, shift_left, shift_right};

impl<
  R: Rep,
  const E: i32,
  S: Rep,
> ScaleFrom<S> for FixedPoint<R, E> {
  /// Convert an integer into a `FixedPoint`: the stored integer is `value / 2^E`, truncated
  /// toward zero if `E` is positive. If `E` is 0 this is the same as `value as R`.
  ///
  /// The scaling is done in the wider of `S` and `R`, so no bits are lost to an intermediate
  /// conversion; bits that don't fit in `R` after scaling are lost, as with `as`.
  #[inline]
  fn scale_from(value: S) -> Self {
    Self(shift_right::<R, S>(value, E))
  }
}

macro_rules! make_impl {
  ($int:ty) => {
    impl<
      R: Rep,
      const E: i32,
    > ScaleFrom<FixedPoint<R, E>> for $int {
      #[doc = concat!("Convert a `FixedPoint` into an `", stringify!($int), "`, truncating any fractional part toward zero.")]
      ///
      /// The scaling is done in the wider of the two types; bits that don't fit in the result are
      /// lost, as with `as`.
      #[inline]
      fn scale_from(value: FixedPoint<R, E>) -> Self {
        shift_left::<$int, R>(value.0, E)
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
