//! This module and its submodules contain the [`Elastic`] type: a fixed-point number whose
//! *capacity* (the number of integer and fractional digits it may use) is declared independently
//! of the integer it is stored in, and whose arithmetic grows the capacity of the result so that
//! it can never overflow.
//!
//! Each arithmetic method takes the type of its result from the call site (usually a type
//! annotation), and checks at compile time that this type has at least the capacity deduced by
//! the rules in [`deduce`]:
//!
//! ```
//! # use elastic_fixed::{Elastic, ScaleFrom};
//! let a = Elastic::<4, 4, u8>::scale_from(15.9375);
//! let b = Elastic::<3, 4, i8>::scale_from(-7.5);
//! let sum: Elastic<5, 4, i16> = a.add(b);
//! let product: Elastic<7, 8, i16> = a.mul(b);
//! assert!(sum == 8.4375);
//! assert!(product == -119.53125);
//! ```
//!
//! A result type that is too small is a build error:
//!
//! ```compile_fail
//! # use elastic_fixed::{Elastic, ScaleFrom};
//! let a = Elastic::<4, 4, u8>::scale_from(15.9375);
//! let sum: Elastic<4, 4, u8> = a.add(a);
//! ```

use crate::Rep;

/// An elastic fixed-point number, with `I` integer digits and `F` fractional digits, stored in
/// `R`. The value is the stored integer times `2^-F`.
///
/// `R` must have at least `I + F` digits (value bits, i.e. excluding the sign bit). It may have
/// more: the declared digits are the *capacity* of the type, which is what the arithmetic rules
/// work on, and the storage only needs to hold them. The [`elastic!`](crate::elastic) macro picks
/// the storage for a given capacity and archetype, like [`make_fixed!`](crate::make_fixed) does
/// for [`FixedPoint`](crate::FixedPoint).
///
/// Construction does not check that the value fits in the declared capacity: a value that is out
/// of range is truncated and wraps exactly as the conversion into the storage `R` does, and
/// arithmetic on it is no longer guaranteed not to overflow. Only the operations grow capacity.
pub struct Elastic<
  const I: i32,
  const F: i32 = 0,
  R: Rep = i32,
> (R);

/// Constructors, accessors, and conversion to and from [`FixedPoint`](crate::FixedPoint)
mod basics;

/// Constants (limits, capacity)
mod consts;

/// Capacity deduction rules
pub mod deduce;

/// Arithmetic with capacity growth
mod ops;

/// Conversions to and from ints, floats, and fixed-point numbers
mod convert;

/// Comparisons and the standard traits
mod cmp;

/// Printing and parsing
mod fmt;

/// `make_elastic`
mod factory;

pub use factory::{MakeElastic, make_elastic};

#[cfg(test)]
pub(crate) mod test;

/// The [`Elastic`] type with `I` integer digits and `F` fractional digits, stored in the narrowest
/// integer of the same family as the archetype (by default `i32`) that is at least as wide as the
/// archetype itself.
///
/// ```
/// # use elastic_fixed::{elastic, Elastic};
/// let a: elastic!(7, 8) = Elastic::<7, 8, i32>::ZERO;
/// let b: elastic!(7, 8, i8) = Elastic::<7, 8, i16>::ZERO;
/// let c: elastic!(40, 0, u8) = Elastic::<40, 0, u64>::ZERO;
/// # let _ = (a, b, c);
/// ```
#[macro_export]
macro_rules! elastic {
  ($integer_digits:expr) => {
    $crate::elastic!($integer_digits, 0, i32)
  };
  ($integer_digits:expr, $fractional_digits:expr) => {
    $crate::elastic!($integer_digits, $fractional_digits, i32)
  };
  ($integer_digits:expr, $fractional_digits:expr, $archetype:ty) => {
    $crate::Elastic<
      { $integer_digits },
      { $fractional_digits },
      $crate::SetWidthT<
        $archetype,
        { $crate::width::storage_bits::<$archetype>($integer_digits, $fractional_digits) },
      >,
    >
  };
}

/// The smallest [`Elastic`] value that holds the integer constant `VALUE` exactly.
///
/// The capacity is the one of [`Capacity::of_literal`](deduce::Capacity::of_literal): as many
/// integer digits as `VALUE` has bits, and as many *negative* fractional digits as it has trailing
/// zeros. The storage is unsigned if `VALUE` is non-negative, otherwise signed, and is at least as
/// wide as the archetype (by default `i32`). `VALUE` can be of any integer type, but must fit in an
/// `i128`.
///
/// ```
/// # use elastic_fixed::{elasticate, Elastic};
/// let a = elasticate!(1024, u8);
/// let _: Elastic<11, -10, u8> = a;
/// assert_eq!(size_of_val(&a), 1);
/// assert!(a == 1024);
///
/// let b = elasticate!(-3_i64 << 40);
/// let _: Elastic<42, -40, i32> = b;
/// ```
#[macro_export]
macro_rules! elasticate {
  ($value:expr) => {
    $crate::elasticate!($value, i32)
  };
  ($value:expr, $archetype:ty) => {{
    const {
      assert!(
        (($value as i128) < 0) == (($value as f64) < 0.),
        "the value does not fit in an i128",
      )
    };
    $crate::Elastic::<
      { $crate::deduce::Capacity::of_literal($value as i128).integer_digits },
      { $crate::deduce::Capacity::of_literal($value as i128).fractional_digits },
      $crate::FitT<
        { ($value as i128) < 0 },
        {
          $crate::deduce::Capacity::of_literal($value as i128)
            .storage_bits(<$archetype as $crate::width::Archetype>::WIDTH)
        },
      >,
    >::from_int($value as i128)
  }};
}

#[cfg(test)]
mod tests {
  use super::*;
  use core::any::TypeId;

  fn type_of<T: 'static>(_: &T) -> TypeId {
    TypeId::of::<T>()
  }

  #[test]
  fn elastic_storage() {
    assert_eq!(TypeId::of::<elastic!(7, 8)>(), TypeId::of::<Elastic<7, 8, i32>>());
    assert_eq!(TypeId::of::<elastic!(7, 8, i8)>(), TypeId::of::<Elastic<7, 8, i16>>());
    assert_eq!(TypeId::of::<elastic!(8, 8, u8)>(), TypeId::of::<Elastic<8, 8, u16>>());
    assert_eq!(TypeId::of::<elastic!(31, 33, i64)>(), TypeId::of::<Elastic<31, 33, i128>>());
    assert_eq!(TypeId::of::<elastic!(12, -8, u8)>(), TypeId::of::<Elastic<12, -8, u8>>());
    assert_eq!(TypeId::of::<elastic!(5)>(), TypeId::of::<Elastic<5, 0, i32>>());
  }

  #[test]
  fn elasticate_1024() {
    let a = elasticate!(1024, u8);
    assert_eq!(type_of(&a), TypeId::of::<Elastic<11, -10, u8>>());
    assert_eq!(size_of_val(&a), 1);
    assert_eq!(a.data(), 1);
    assert!(a == 1024);

    let b = elasticate!(1024);
    assert_eq!(type_of(&b), TypeId::of::<Elastic<11, -10, u32>>());
    assert!(b == 1024);
  }

  #[test]
  fn elasticate_shapes() {
    let zero = elasticate!(0, u8);
    assert_eq!(type_of(&zero), TypeId::of::<Elastic<1, 0, u8>>());
    assert!(zero.is_zero());

    let odd = elasticate!(-255, i8);
    assert_eq!(type_of(&odd), TypeId::of::<Elastic<8, 0, i16>>());
    assert!(odd == -255);

    let big = elasticate!(i64::MAX, u8);
    assert_eq!(type_of(&big), TypeId::of::<Elastic<63, 0, u64>>());
    assert!(big == i64::MAX);

    let min = elasticate!(i64::MIN, i8);
    assert_eq!(type_of(&min), TypeId::of::<Elastic<64, -63, i8>>());
    assert!(min == i64::MIN);

    let widest = elasticate!(u128::MAX >> 1, u8);
    assert_eq!(type_of(&widest), TypeId::of::<Elastic<127, 0, u128>>());
    assert!(widest == i128::MAX);
  }
}

mod tests_compile_fail {
  /// The storage has fewer digits than the declared capacity.
  /// ```compile_fail
  /// use elastic_fixed::Elastic;
  /// let _ = Elastic::<10, 0, i8>::from_int(1);
  /// ```
  #[allow(dead_code)]
  fn storage_too_narrow() {}

  /// A negative number of digits.
  /// ```compile_fail
  /// use elastic_fixed::Elastic;
  /// let _ = Elastic::<-4, 2, i8>::from_int(1);
  /// ```
  #[allow(dead_code)]
  fn negative_digits() {}

  /// Subtraction needs a signed result.
  /// ```compile_fail
  /// use elastic_fixed::Elastic;
  /// let a = Elastic::<4, 4, u8>::from_int(1);
  /// let _: Elastic<5, 4, u16> = a.sub(a);
  /// ```
  #[allow(dead_code)]
  fn subtract_unsigned() {}

  /// The product of two numbers with 4 fractional digits has 8.
  /// ```compile_fail
  /// use elastic_fixed::Elastic;
  /// let a = Elastic::<4, 4, u8>::from_int(1);
  /// let _: Elastic<8, 7, u16> = a.mul(a);
  /// ```
  #[allow(dead_code)]
  fn multiply_too_few_fractional_digits() {}

  /// Above `i128::MAX`.
  /// ```compile_fail
  /// let _ = elastic_fixed::elasticate!(u128::MAX);
  /// ```
  #[allow(dead_code)]
  fn elasticate_u128_max() {}
}
