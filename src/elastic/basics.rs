use super::*;

use crate::{FixedPoint, shift_right};

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> Elastic<I, F, R> {
  /// Fails to compile if `R` can't hold `I + F` digits.
  const VALID: () = {
    assert!(I + F >= 0, "the number of digits must not be negative");
    assert!(R::DIGITS as i32 >= I + F, "the storage has fewer digits than the elastic capacity");
  };

  /// Construct an elastic number directly from its stored integer, without any scaling: the
  /// result represents `data × 2^-F`.
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// let x = Elastic::<4, 4, u8>::from_data(0x18);
  /// assert!(x == 1.5);
  /// ```
  #[inline]
  pub const fn from_data(data: R) -> Self {
    let () = Self::VALID;
    Self(data)
  }

  /// Return the stored integer, without any scaling.
  #[inline]
  pub const fn data(self) -> R {
    self.0
  }

  /// Construct an elastic number with the value of the integer `value`, truncated toward zero if
  /// `F` is negative. Out of range values are not clamped: bits that don't fit in `R` are lost,
  /// as with `as`.
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// assert_eq!(Elastic::<8, 4, i16>::from_int(-3).data(), -48);
  /// assert_eq!(Elastic::<8, -4, u8>::from_int(100).data(), 6);
  /// ```
  #[inline]
  pub fn from_int<S: Rep>(value: S) -> Self {
    Self::from_data(shift_right::<R, S>(value, -F))
  }

  /// Whether `self` is zero.
  #[inline]
  pub fn is_zero(self) -> bool {
    self.0 == R::ZERO
  }

  /// The underlying fixed-point value, which has the same stored integer. The exponent `E` must
  /// be `-F` (it can't be computed from `F` in a generic type, so it is checked at compile time
  /// instead).
  ///
  /// ```
  /// # use elastic_fixed::{Elastic, FixedPoint};
  /// let x = Elastic::<4, 4, u8>::from_data(0x18);
  /// let y: FixedPoint<u8, -4> = x.to_fixed();
  /// assert_eq!(y.data(), 0x18);
  /// ```
  #[inline]
  pub fn to_fixed<const E: i32>(self) -> FixedPoint<R, E> {
    const { assert!(E == -F, "the exponent of the fixed-point type must be minus the fractional digits") };
    FixedPoint::from_data(self.0)
  }

  /// The elastic value with the same stored integer as `value`, whose exponent `E` must be `-F`.
  #[inline]
  pub fn from_fixed<const E: i32>(value: FixedPoint<R, E>) -> Self {
    const { assert!(E == -F, "the exponent of the fixed-point type must be minus the fractional digits") };
    Self::from_data(value.data())
  }

  /// Convert `self` to another elastic type, rescaling the stored integer by `2^(F2 - F)`.
  ///
  /// Bits below the new scale are truncated toward zero; a value that doesn't fit in the new
  /// capacity is not clamped (see [`Elastic`]).
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// let x = Elastic::<4, 4, i16>::from_data(-0x28);  // -2.5
  /// assert_eq!(x.convert::<8, 8, i32>().data(), -0x280);
  /// assert_eq!(x.convert::<4, 0, i8>().data(), -2);
  /// ```
  #[inline]
  pub fn convert<const I2: i32, const F2: i32, R2: Rep>(self) -> Elastic<I2, F2, R2> {
    Elastic::from_data(shift_right::<R2, R>(self.0, F - F2))
  }
}


mod tests_compile_fail {
  /// ```compile_fail
  /// use elastic_fixed::{Elastic, FixedPoint};
  /// let x = Elastic::<4, 4, u8>::from_data(0x18);
  /// let _: FixedPoint<u8, 4> = x.to_fixed();
  /// ```
  #[allow(dead_code)]
  fn to_fixed_wrong_exponent() {}
}
