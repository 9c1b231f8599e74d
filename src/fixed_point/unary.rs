use super::*;

use crate::Rep;
use crate::named::negate_kernel;

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  #[inline]
  pub(crate) fn neg(self) -> Self {
    Self(negate_kernel::<R, R>(self.0, E, E))
  }

  /// Return the absolute value of `self`.
  ///
  /// Like [`i32::wrapping_abs`], the absolute value of [`MIN`](Self::MIN) for a signed rep is
  /// `MIN` itself. For unsigned reps this is the identity.
  ///
  /// ```
  /// # use elastic_fixed::FixedPoint;
  /// let x = FixedPoint::<i16, -8>::from_data(-0x180);
  /// assert!(x.abs() == 1.5);
  /// assert_eq!(FixedPoint::<i16, -8>::MIN.abs(), FixedPoint::<i16, -8>::MIN);
  /// ```
  #[inline]
  pub fn abs(self) -> Self {
    if self.0.is_negative() { self.neg() } else { self }
  }

  /// The sign of `self`, as the integer `-1`, `0`, or `1` of type `R`.
  ///
  /// This is returned as an integer rather than a fixed-point number because `1` is not
  /// necessarily representable in `FixedPoint<R, E>` (if `E > 0`).
  #[inline]
  pub fn signum(self) -> R {
    if self.0.is_negative() {
      R::ONE.wrapping_neg()
    } else if self.is_zero() {
      R::ZERO
    } else {
      R::ONE
    }
  }
}

impl<R: Rep, const E: i32> core::ops::Neg for FixedPoint<R, E> {
  type Output = FixedPoint<R, E>;

  /// Negate `self`. This wraps: `-MIN` is `MIN` for signed reps, and for unsigned reps the result
  /// is the two's complement of the stored integer.
  #[inline]
  fn neg(self) -> Self::Output {
    self.neg()
  }
}

impl<R: Rep, const E: i32> core::ops::Neg for &FixedPoint<R, E> {
  type Output = FixedPoint<R, E>;

  #[inline]
  fn neg(self) -> Self::Output {
    (*self).neg()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixed_point::rational::ExactValue;

  mod neg {
    use super::*;

    #[test]
    fn i8_m3() {
      for x in FixedPoint::<i8, -3>::cases_exhaustive() {
        if x != FixedPoint::<i8, -3>::MIN {
          assert_eq!((-x).exact_value(), -x.exact_value());
          assert_eq!((-&x).exact_value(), -x.exact_value());
        }
      }
      assert_eq!(-FixedPoint::<i8, -3>::MIN, FixedPoint::<i8, -3>::MIN);
    }

    #[test]
    fn unsigned_wraps() {
      let x = FixedPoint::<u8, 0>::from_data(1);
      assert_eq!((-x).data(), 0xff);
      assert_eq!(-FixedPoint::<u8, 0>::ZERO, FixedPoint::<u8, 0>::ZERO);
    }

    #[test]
    fn same_as_named() {
      for x in FixedPoint::<i8, 2>::cases_exhaustive() {
        let y: FixedPoint<i8, 2> = crate::named::negate(x);
        assert_eq!(-x, y);
      }
    }
  }

  mod abs {
    use super::*;
    use malachite::base::num::arithmetic::traits::Abs;

    #[test]
    fn i8_m3() {
      for x in FixedPoint::<i8, -3>::cases_exhaustive() {
        if x != FixedPoint::<i8, -3>::MIN {
          assert_eq!(x.abs().exact_value(), x.exact_value().abs());
        }
      }
    }

    #[test]
    fn unsigned() {
      for x in FixedPoint::<u8, -3>::cases_exhaustive() {
        assert_eq!(x.abs(), x);
      }
    }
  }

  #[test]
  fn signum() {
    assert_eq!(FixedPoint::<i32, -8>::from_data(-5).signum(), -1);
    assert_eq!(FixedPoint::<i32, -8>::ZERO.signum(), 0);
    assert_eq!(FixedPoint::<u8, 4>::from_data(1).signum(), 1);
    assert_eq!(FixedPoint::<i128, 4>::MIN.signum(), -1);
  }
}
