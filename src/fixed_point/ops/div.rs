use super::*;

use crate::named::divide_kernel;
use crate::policy::{self, Deduction};
use crate::underlying::Sealed;

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  /// Fails to compile if the dividend, shifted so that the quotient lands on exponent `E`, doesn't
  /// fit in the widest intermediate type available.
  const DIVIDE_OK: () = match policy::divide(Self::DESCRIPTOR, Self::DESCRIPTOR) {
    Some(Deduction { lhs, .. }) if lhs.width <= <R::Wide as Sealed>::BITS => (),
    _ => panic!("the shifted dividend of these fixed-point numbers does not fit in any native integer"),
  };

  /// Divide two fixed-point numbers of the same type, truncating toward zero (and wrapping if the
  /// quotient doesn't fit).
  ///
  /// # Panics
  ///
  /// If `other` is zero.
  #[inline]
  pub(crate) fn div(self, other: Self) -> Self {
    let () = Self::DIVIDE_OK;
    Self(divide_kernel::<R, R, R>(self.0, E, other.0, E, E))
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}


mod tests_compile_fail {
  /// The dividend of an `i64` with 100 fractional digits would need 164 bits.
  /// ```compile_fail
  /// use elastic_fixed::FixedPoint;
  /// let a = FixedPoint::<i64, -100>::from_data(3);
  /// let _ = a / a;
  /// ```
  #[allow(dead_code)]
  fn i64_very_fractional() {}

  /// ```compile_fail
  /// use elastic_fixed::FixedPoint;
  /// let a = FixedPoint::<u128, -1>::from_data(3);
  /// let _ = a / a;
  /// ```
  #[allow(dead_code)]
  fn u128_fractional() {}
}
