use super::*;

use crate::named::multiply_kernel;
use crate::policy::{self, Deduction};
use crate::underlying::Sealed;

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  /// Fails to compile if the raw product of two values of this type doesn't fit in the widest
  /// intermediate type available, i.e. if the product would lose bits before being rescaled.
  const MULTIPLY_OK: () = match policy::multiply(Self::DESCRIPTOR, Self::DESCRIPTOR) {
    Some(Deduction { lhs, .. }) if lhs.width <= <R::Wide as Sealed>::BITS => (),
    _ => panic!("the product of these fixed-point numbers does not fit in any native integer"),
  };

  /// Multiply two fixed-point numbers of the same type. The product of the stored integers is
  /// formed in full in `R::Wide`, then shifted back to exponent `E`, truncating toward zero (and
  /// wrapping if it doesn't fit).
  #[inline]
  pub(crate) fn mul(self, other: Self) -> Self {
    let () = Self::MULTIPLY_OK;
    Self(multiply_kernel::<R, R, R>(self.0, E, other.0, E, E))
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}


mod tests_compile_fail {
  /// The product of two `i128` with fractional digits needs 256 bits.
  /// ```compile_fail
  /// use elastic_fixed::FixedPoint;
  /// let a = FixedPoint::<i128, -1>::from_data(3);
  /// let _ = a * a;
  /// ```
  #[allow(dead_code)]
  fn i128_fractional() {}

  /// ```compile_fail
  /// use elastic_fixed::FixedPoint;
  /// let a = FixedPoint::<u128, -64>::from_data(3);
  /// let _ = a * a;
  /// ```
  #[allow(dead_code)]
  fn u128_fractional() {}
}
