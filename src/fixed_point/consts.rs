use super::*;
use crate::Rep;
use crate::policy::Descriptor;

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  /// The exponent (i.e. parameter `E`): the value of the stored integer is scaled by `2^E`.
  pub const EXPONENT: i32 = E;

  /// The shape of this type, as used by the [`policy`](crate::policy) functions.
  pub const DESCRIPTOR: Descriptor = Descriptor::of::<R>(E);

  /// Number of value bits, i.e. the width of `R` minus the sign bit if it has one.
  pub const DIGITS: i32 = R::DIGITS as i32;

  /// Number of bits to the left of the binary point. May be negative (if `E < -DIGITS`), or
  /// greater than [`Self::DIGITS`] (if `E > 0`).
  pub const INTEGER_DIGITS: i32 = Self::DIGITS + E;

  /// Number of bits to the right of the binary point, i.e. `-E`.
  pub const FRACTIONAL_DIGITS: i32 = -E;

  /// Whether every value of this type is an integer.
  pub const IS_INTEGER: bool = E >= 0;

  /// Zero (`0`).
  pub const ZERO: Self = Self(R::ZERO);

  /// Smallest positive value, `2^E`.
  pub const MIN_POSITIVE: Self = Self(R::ONE);

  /// The difference between consecutive values, `2^E`; the same as [`Self::MIN_POSITIVE`].
  pub const EPSILON: Self = Self::MIN_POSITIVE;

  /// Largest representable value, `R::MAX × 2^E`.
  pub const MAX: Self = Self(R::MAX);

  /// Smallest representable value, `R::MIN × 2^E` (zero if `R` is unsigned).
  pub const MIN: Self = Self(R::MIN);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digits() {
    assert_eq!(FixedPoint::<i32, -16>::DIGITS, 31);
    assert_eq!(FixedPoint::<i32, -16>::INTEGER_DIGITS, 15);
    assert_eq!(FixedPoint::<i32, -16>::FRACTIONAL_DIGITS, 16);
    assert_eq!(FixedPoint::<u8, 4>::INTEGER_DIGITS, 12);
    assert_eq!(FixedPoint::<u8, 4>::FRACTIONAL_DIGITS, -4);
    assert_eq!(FixedPoint::<i16, -20>::INTEGER_DIGITS, -5);
    assert!(FixedPoint::<i16, 0>::IS_INTEGER);
    assert!(!FixedPoint::<i16, -1>::IS_INTEGER);
  }

  #[test]
  fn limits() {
    assert!(FixedPoint::<u8, -4>::MAX == 15.9375);
    assert!(FixedPoint::<u8, -4>::MIN == 0);
    assert!(FixedPoint::<i8, -4>::MIN == -8);
    assert!(FixedPoint::<i8, 2>::MAX == 508);
    assert!(FixedPoint::<i32, -16>::EPSILON == 1. / 65536.);
    assert!(FixedPoint::<i32, -16>::ZERO == 0);
    assert_eq!(FixedPoint::<i32, -16>::MIN_POSITIVE.data(), 1);
  }
}
