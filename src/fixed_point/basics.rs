use super::*;
use crate::{Rep, shift_right};

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  /// Construct a fixed-point number directly from its stored integer, without any scaling: the
  /// result represents `data × 2^E`.
  ///
  /// ```
  /// # use elastic_fixed::FixedPoint;
  /// let x = FixedPoint::<i16, -8>::from_data(0x180);
  /// assert!(x == 1.5);
  /// ```
  #[inline]
  pub const fn from_data(data: R) -> Self {
    Self(data)
  }

  /// Return the stored integer, without any scaling.
  #[inline]
  pub const fn data(self) -> R {
    self.0
  }

  /// Construct a fixed-point number with the value of the integer `value`, i.e. store
  /// `value / 2^E` (truncated toward zero if `E` is positive). Bits that don't fit in `R` are
  /// lost, as with `as`.
  ///
  /// This is the same as [`ScaleFrom`](crate::ScaleFrom), but usable with any [`Rep`] without
  /// naming the trait.
  ///
  /// ```
  /// # use elastic_fixed::FixedPoint;
  /// assert_eq!(FixedPoint::<i32, -4>::from_int(3_u8).data(), 48);
  /// assert_eq!(FixedPoint::<i32, 4>::from_int(-40_i64).data(), -2);
  /// ```
  #[inline]
  pub fn from_int<S: Rep>(value: S) -> Self {
    Self(shift_right::<R, S>(value, E))
  }

  /// Whether `self` is zero.
  #[inline]
  pub fn is_zero(self) -> bool {
    self.0 == R::ZERO
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn from_int() {
    assert_eq!(FixedPoint::<u8, -4>::from_int(15_i32).data(), 0xf0);
    assert_eq!(FixedPoint::<i8, 1>::from_int(-3_i32).data(), -1);
    assert_eq!(FixedPoint::<i64, -32>::from_int(0x7f_i8).data(), 0x7f_0000_0000);
    assert_eq!(FixedPoint::<i16, 0>::from_int(1234_u64).data(), 1234);
    // Same width, different signedness: scaled down before it's reinterpreted
    assert_eq!(FixedPoint::<i8, 1>::from_int(254_u8).data(), 127);
    assert_eq!(FixedPoint::<u32, 4>::from_int(-32_i32).data(), (-2_i32) as u32);
  }

  #[test]
  fn is_zero() {
    assert!(FixedPoint::<i32, -8>::from_data(0).is_zero());
    assert!(!FixedPoint::<i32, -8>::from_data(1).is_zero());
    assert!(FixedPoint::<i32, 4>::from_int(15).is_zero());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn data_round_trip_i32(x in any::<i32>()) {
      prop_assert_eq!(FixedPoint::<i32, -7>::from_data(x).data(), x);
      prop_assert_eq!(FixedPoint::<i32, 100>::from_data(x).data(), x);
    }

    #[test]
    fn data_round_trip_u128(x in any::<u128>()) {
      prop_assert_eq!(FixedPoint::<u128, -128>::from_data(x).data(), x);
    }
  }
}
