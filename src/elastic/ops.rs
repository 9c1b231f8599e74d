use super::*;

use super::deduce::{self, Capacity};
use crate::named::{add_kernel, subtract_kernel, multiply_kernel, divide_kernel, negate_kernel};
use crate::named::{assert_multiply_fits, assert_divide_fits};

/// Fails to compile if `Elastic<OI, OF, O>` can't hold every result of capacity `needed`.
macro_rules! assert_admits {
  ($needed:expr) => {
    const {
      assert!(
        deduce::admits(Capacity::of::<OI, OF, O>(), $needed),
        "the result type does not have enough capacity for this operation",
      )
    }
  };
}

// The arithmetic methods have the same names as the operator traits, but the result type is a
// free parameter (there is no way to compute it from the operand types in a trait's associated
// type), so they can't implement them.
#[allow(clippy::should_implement_trait)]
impl<
  const I: i32,
  const F: i32,
  R: Rep,
> Elastic<I, F, R> {
  /// `-self`, as an `Elastic<OI, OF, O>`, which must be signed and have at least the digits of
  /// `self`.
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// let x = Elastic::<8, 0, u8>::from_int(255);
  /// let y: Elastic<8, 0, i16> = x.neg();
  /// assert!(y == -255);
  /// ```
  #[inline]
  pub fn neg<const OI: i32, const OF: i32, O: Rep>(self) -> Elastic<OI, OF, O> {
    assert_admits!(deduce::negate(Self::CAPACITY));
    Elastic::from_data(negate_kernel::<O, R>(self.0, -F, -OF))
  }

  /// `self + rhs`, as an `Elastic<OI, OF, O>`, which must have at least
  /// [`deduce::add`] of the operands' capacities.
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// let a = Elastic::<4, 4, u8>::MAX;
  /// let b: Elastic<5, 4, u16> = a.add(a);
  /// assert!(b == 31.875);
  /// ```
  #[inline]
  pub fn add<
    const OI: i32,
    const OF: i32,
    O: Rep,
    const RI: i32,
    const RF: i32,
    RR: Rep,
  >(self, rhs: Elastic<RI, RF, RR>) -> Elastic<OI, OF, O> {
    assert_admits!(deduce::add(Self::CAPACITY, Elastic::<RI, RF, RR>::CAPACITY));
    Elastic::from_data(add_kernel::<O, R, RR>(self.0, -F, rhs.0, -RF, -OF))
  }

  /// `self - rhs`, as an `Elastic<OI, OF, O>`, which must have at least
  /// [`deduce::subtract`] of the operands' capacities (in particular it must be signed).
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// let a = Elastic::<4, 4, u8>::ZERO;
  /// let b: Elastic<5, 4, i16> = a.sub(Elastic::<4, 4, u8>::MAX);
  /// assert!(b == -15.9375);
  /// ```
  #[inline]
  pub fn sub<
    const OI: i32,
    const OF: i32,
    O: Rep,
    const RI: i32,
    const RF: i32,
    RR: Rep,
  >(self, rhs: Elastic<RI, RF, RR>) -> Elastic<OI, OF, O> {
    assert_admits!(deduce::subtract(Self::CAPACITY, Elastic::<RI, RF, RR>::CAPACITY));
    Elastic::from_data(subtract_kernel::<O, R, RR>(self.0, -F, rhs.0, -RF, -OF))
  }

  /// `self × rhs`, as an `Elastic<OI, OF, O>`, which must have at least
  /// [`deduce::multiply`] of the operands' capacities. The result is exact.
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// let a = Elastic::<4, 4, u8>::MAX;
  /// let b: Elastic<8, 8, u16> = a.mul(a);
  /// assert!(b == 254.00390625);
  /// ```
  #[inline]
  pub fn mul<
    const OI: i32,
    const OF: i32,
    O: Rep,
    const RI: i32,
    const RF: i32,
    RR: Rep,
  >(self, rhs: Elastic<RI, RF, RR>) -> Elastic<OI, OF, O> {
    assert_admits!(deduce::multiply(Self::CAPACITY, Elastic::<RI, RF, RR>::CAPACITY));
    assert_multiply_fits!(O, R, RR, -F, -RF, -OF);
    Elastic::from_data(multiply_kernel::<O, R, RR>(self.0, -F, rhs.0, -RF, -OF))
  }

  /// `self ÷ rhs`, as an `Elastic<OI, OF, O>`, which must have at least
  /// [`deduce::divide`] of the operands' capacities. The result is truncated toward zero.
  ///
  /// # Panics
  ///
  /// If `rhs` is zero.
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// let a = Elastic::<7, 0, i8>::from_int(15);
  /// let b = Elastic::<7, 0, i8>::from_int(2);
  /// let c: Elastic<7, 8, i16> = a.div(b);
  /// assert!(c == 7.5);
  /// ```
  #[inline]
  pub fn div<
    const OI: i32,
    const OF: i32,
    O: Rep,
    const RI: i32,
    const RF: i32,
    RR: Rep,
  >(self, rhs: Elastic<RI, RF, RR>) -> Elastic<OI, OF, O> {
    assert_admits!(deduce::divide(Self::CAPACITY, Elastic::<RI, RF, RR>::CAPACITY));
    assert_divide_fits!(O, R, RR, -F, -RF, -OF);
    Elastic::from_data(divide_kernel::<O, R, RR>(self.0, -F, rhs.0, -RF, -OF))
  }
}
