use super::*;

use crate::Rep;
use crate::named::{add_kernel, subtract_kernel};

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Mixed arithmetic with integers and floats.
mod scalar;

/// Shifts of the stored integer.
mod shift;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<R: crate::Rep, const E: i32>
    $trait<FixedPoint<R, E>> for FixedPoint<R, E> {
      type Output = FixedPoint<R, E>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<R: crate::Rep, const E: i32>
    $trait<&FixedPoint<R, E>> for FixedPoint<R, E> {
      type Output = FixedPoint<R, E>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<R: crate::Rep, const E: i32>
    $trait<FixedPoint<R, E>> for &FixedPoint<R, E> {
      type Output = FixedPoint<R, E>;

      #[inline]
      fn $name(self, rhs: FixedPoint<R, E>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<R: crate::Rep, const E: i32>
    $trait<&FixedPoint<R, E>> for &FixedPoint<R, E> {
      type Output = FixedPoint<R, E>;

      #[inline]
      fn $name(self, rhs: &FixedPoint<R, E>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<R: crate::Rep, const E: i32>
    $trait_assign<FixedPoint<R, E>> for FixedPoint<R, E> {
      #[inline]
      fn $name_assign(&mut self, rhs: FixedPoint<R, E>) { *self = self.$name(rhs) }
    }

    impl<R: crate::Rep, const E: i32>
    $trait_assign<&FixedPoint<R, E>> for FixedPoint<R, E> {
      #[inline]
      fn $name_assign(&mut self, rhs: &FixedPoint<R, E>) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  /// Add two fixed-point numbers of the same type. The operands already share an exponent, so
  /// this is just an addition of the stored integers, which wraps on overflow.
  #[inline]
  pub(crate) fn add(self, other: Self) -> Self {
    Self(add_kernel::<R, R, R>(self.0, E, other.0, E, E))
  }

  /// Subtract two fixed-point numbers of the same type; see [`Self::add`].
  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    Self(subtract_kernel::<R, R, R>(self.0, E, other.0, E, E))
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
mk_ops!{Add, AddAssign, add, add_assign}
mk_ops!{Sub, SubAssign, sub, sub_assign}

/// Macro for instantiating the suite of tests for a binary operator of fixed-point numbers: the
/// result must be the exact result truncated toward zero to the type's exponent, whenever that is
/// in range, and must be the same as the named function with the same type as the target.
#[cfg(test)]
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $named:path) => {
    use crate::FixedPoint;
    use crate::fixed_point::rational::{ExactValue, truncate};
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = FixedPoint::<i32, -16>::MIN_POSITIVE;
      let mut b = FixedPoint::<i32, -16>::MAX;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is the exact result truncated, if that is in range.
    fn is_correct<R: crate::Rep, const E: i32>(a: FixedPoint<R, E>, b: FixedPoint<R, E>) -> bool {
      if stringify!($op) == "/" && b.is_zero() {
        return true
      }
      let exact = truncate(a.exact_value() $op b.exact_value(), E);
      let in_range =
        exact >= FixedPoint::<R, E>::MIN.exact_value() &&
        exact <= FixedPoint::<R, E>::MAX.exact_value();
      !in_range || (a $op b).exact_value() == exact
    }

    /// Aux function: check that `a $op b` is the same as the named function.
    fn is_named<R: crate::Rep, const E: i32>(a: FixedPoint<R, E>, b: FixedPoint<R, E>) -> bool {
      if stringify!($op) == "/" && b.is_zero() {
        return true
      }
      let named: FixedPoint<R, E> = $named(a, b);
      (a $op b) == named
    }

    macro_rules! test_exhaustive {
      ($name:ident, $fixed:ty) => {
        #[test]
        fn $name() {
          for a in <$fixed>::cases_exhaustive() {
            for b in <$fixed>::cases_exhaustive() {
              assert!(is_correct(a, b), "{:?} ⋅ {:?}", a, b);
              assert!(is_named(a, b), "{:?} ⋅ {:?}", a, b);
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $fixed:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$fixed>::cases_proptest(),
            b in <$fixed>::cases_proptest(),
          ) {
            assert!(is_correct(a, b), "{:?} ⋅ {:?}", a, b);
            assert!(is_named(a, b), "{:?} ⋅ {:?}", a, b);
          }
        }
      };
    }

    test_exhaustive!{i8_0_exhaustive, FixedPoint<i8, 0>}
    test_exhaustive!{i8_m4_exhaustive, FixedPoint<i8, -4>}
    test_exhaustive!{i8_m7_exhaustive, FixedPoint<i8, -7>}
    test_exhaustive!{i8_3_exhaustive, FixedPoint<i8, 3>}
    test_exhaustive!{u8_m4_exhaustive, FixedPoint<u8, -4>}
    test_exhaustive!{u8_m8_exhaustive, FixedPoint<u8, -8>}

    test_proptest!{i32_m16_proptest, FixedPoint<i32, -16>}
    test_proptest!{u32_m30_proptest, FixedPoint<u32, -30>}
    test_proptest!{i64_m32_proptest, FixedPoint<i64, -32>}
    test_proptest!{u64_8_proptest, FixedPoint<u64, 8>}
    test_proptest!{i16_m12_proptest, FixedPoint<i16, -12>}
  }
}

#[cfg(test)]
pub(crate) use mk_tests;

#[cfg(test)]
mod add_tests {
  use super::*;
  super::mk_tests!{+, +=, crate::named::add}

  #[test]
  fn wraps() {
    // Two values of 3 with 2 integer digits overflow the u32
    let a = <crate::make_ufixed!(2, 30)>::from_int(3);
    assert!(a + a == 0);
    assert!(a + a != 6);
  }

  #[test]
  fn exact() {
    let a = FixedPoint::<i32, -16>::from_data(0x1_8000);
    let b = FixedPoint::<i32, -16>::from_data(-0x4000);
    assert!(a + b == 1.25);
  }
}

#[cfg(test)]
mod sub_tests {
  use super::*;
  super::mk_tests!{-, -=, crate::named::subtract}

  #[test]
  fn unsigned_wraps() {
    let a = FixedPoint::<u8, -4>::from_data(1);
    let b = FixedPoint::<u8, -4>::from_data(2);
    assert_eq!((a - b).data(), 0xff);
  }
}
