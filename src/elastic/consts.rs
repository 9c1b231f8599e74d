use super::*;

use crate::underlying::const_as;
use super::deduce::Capacity;

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> Elastic<I, F, R> {
  /// Number of integer digits (i.e. parameter `I`).
  pub const INTEGER_DIGITS: i32 = I;

  /// Number of fractional digits (i.e. parameter `F`).
  pub const FRACTIONAL_DIGITS: i32 = F;

  /// Total number of digits, `I + F`.
  pub const DIGITS: i32 = I + F;

  /// The exponent of the stored integer, `-F`.
  pub const EXPONENT: i32 = -F;

  /// Whether every value of this type is an integer.
  pub const IS_INTEGER: bool = F <= 0;

  /// The capacity of this type, as used by the [`deduce`] functions.
  pub const CAPACITY: Capacity = Capacity::of::<I, F, R>();

  /// Zero (`0`).
  pub const ZERO: Self = Self::from_data(R::ZERO);

  /// The difference between consecutive values, `2^-F`.
  pub const EPSILON: Self = Self::from_data(R::ONE);

  /// Largest value in the capacity of this type, `2^I - 2^-F`. This is the largest value with
  /// `I + F` digits, which may be less than the largest value of the storage.
  pub const MAX: Self = {
    let digits = (I + F) as u32;
    Self::from_data(if digits == 0 { R::ZERO } else { const_as::<u128, R>(u128::MAX >> (128 - digits)) })
  };

  /// Smallest value in the capacity of this type: `-2^I` if signed, otherwise zero.
  pub const LOWEST: Self = {
    let digits = (I + F) as u32;
    Self::from_data(if R::SIGNED { const_as::<i128, R>(i128::MIN >> (127 - digits)) } else { R::ZERO })
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digits() {
    assert_eq!(Elastic::<7, 8, i32>::DIGITS, 15);
    assert_eq!(Elastic::<7, 8, i32>::EXPONENT, -8);
    assert_eq!(Elastic::<12, -8, u8>::DIGITS, 4);
    assert!(Elastic::<12, -8, u8>::IS_INTEGER);
    assert!(!Elastic::<12, 8, i32>::IS_INTEGER);
    assert_eq!(Elastic::<7, 8, i16>::CAPACITY, Capacity { integer_digits: 7, fractional_digits: 8, signed: true });
  }

  #[test]
  fn limits() {
    assert!(Elastic::<4, 4, u8>::MAX == 15.9375);
    assert!(Elastic::<4, 4, u8>::LOWEST == 0);
    assert!(Elastic::<4, 4, i32>::MAX == 15.9375);
    assert!(Elastic::<4, 4, i32>::LOWEST == -16);
    assert!(Elastic::<12, -8, u8>::MAX == 0xf00);
    assert!(Elastic::<7, 0, i8>::MAX == i8::MAX);
    assert!(Elastic::<7, 0, i8>::LOWEST == i8::MIN);
    assert!(Elastic::<128, 0, u128>::MAX == u128::MAX);
    assert!(Elastic::<0, 0, i8>::MAX == 0);
    assert!(Elastic::<0, 0, i8>::LOWEST == -1);
    assert!(Elastic::<7, 8, i32>::EPSILON == 1. / 256.);
  }
}
