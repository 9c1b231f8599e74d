//! Width resolution: finding the narrowest native numeric type that has at least a given number
//! of bits, within a *family* of types (signed integers, unsigned integers, or floats).
//!
//! This comes in two forms. The value form ([`first_fit`]) answers the question with a [`Native`]
//! tag, and is what the [`policy`](crate::policy) functions use to reason about result types. The
//! type form ([`SetWidthT`] and [`FitT`]) answers it with an actual type, and is what the type
//! macros ([`make_fixed!`](crate::make_fixed) and friends) expand to.
//!
//! Asking for a width of 0 yields the narrowest member of the family. Asking for more bits than
//! the widest member has is an error: `None` in the value form, and a compile error in the type
//! form.
//!
//! ```
//! # use elastic_fixed::width::{first_fit, Family, Native};
//! assert_eq!(first_fit(0, Family::Unsigned), Some(Native::U8));
//! assert_eq!(first_fit(17, Family::Signed), Some(Native::I32));
//! assert_eq!(first_fit(40, Family::Float), Some(Native::F64));
//! assert_eq!(first_fit(129, Family::Signed), None);
//! ```

use crate::Rep;

/// One of the three families of native numeric types, ordered by increasing width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
  /// `i8`, `i16`, `i32`, `i64`, `i128`.
  Signed,
  /// `u8`, `u16`, `u32`, `u64`, `u128`.
  Unsigned,
  /// `f32`, `f64`.
  Float,
}

/// A native numeric type, as a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Native {
  I8, I16, I32, I64, I128,
  U8, U16, U32, U64, U128,
  F32, F64,
}

impl Native {
  /// Width in bits.
  pub const fn bits(self) -> u32 {
    match self {
      Native::I8 | Native::U8 => 8,
      Native::I16 | Native::U16 => 16,
      Native::I32 | Native::U32 | Native::F32 => 32,
      Native::I64 | Native::U64 | Native::F64 => 64,
      Native::I128 | Native::U128 => 128,
    }
  }

  pub const fn family(self) -> Family {
    match self {
      Native::I8 | Native::I16 | Native::I32 | Native::I64 | Native::I128 => Family::Signed,
      Native::U8 | Native::U16 | Native::U32 | Native::U64 | Native::U128 => Family::Unsigned,
      Native::F32 | Native::F64 => Family::Float,
    }
  }

  /// Whether the type can hold negative numbers (true for signed integers and floats).
  pub const fn is_signed(self) -> bool {
    !matches!(self.family(), Family::Unsigned)
  }
}

impl Family {
  /// The members of this family, in order of increasing width.
  pub const fn members(self) -> &'static [Native] {
    match self {
      Family::Signed => &[Native::I8, Native::I16, Native::I32, Native::I64, Native::I128],
      Family::Unsigned => &[Native::U8, Native::U16, Native::U32, Native::U64, Native::U128],
      Family::Float => &[Native::F32, Native::F64],
    }
  }

  /// The integer family with the given signedness.
  pub const fn integer(signed: bool) -> Family {
    if signed { Family::Signed } else { Family::Unsigned }
  }
}

/// The first (i.e. narrowest) member of `family` with at least `min_bits` bits, or `None` if
/// there isn't one.
pub const fn first_fit(min_bits: u32, family: Family) -> Option<Native> {
  let members = family.members();
  let mut i = 0;
  while i < members.len() {
    if members[i].bits() >= min_bits {
      return Some(members[i])
    }
    i += 1;
  }
  None
}

//
// Type form
//

/// A bit count, lifted to the type level so that traits can be implemented on it.
pub struct Bits<const N: u32>;

/// Implemented for [`Bits<N>`](Bits) for every `N` from 0 to 128: the narrowest signed and
/// unsigned integers with at least `N` bits.
pub trait FirstFit {
  type Signed: Rep + Integer;
  type Unsigned: Rep + Integer;
}

/// Implemented for [`Bits<N>`](Bits) for every `N` from 0 to 64: the narrowest float with at least
/// `N` bits.
pub trait FirstFitFloat {
  type Float: Archetype;
}

macro_rules! impl_first_fit {
  ($signed:ty, $unsigned:ty, [$($n:literal),*]) => {
    $(
      impl FirstFit for Bits<$n> {
        type Signed = $signed;
        type Unsigned = $unsigned;
      }
    )*
  }
}

macro_rules! impl_first_fit_float {
  ($float:ty, [$($n:literal),*]) => {
    $(
      impl FirstFitFloat for Bits<$n> {
        type Float = $float;
      }
    )*
  }
}

impl_first_fit!{i8, u8, [0, 1, 2, 3, 4, 5, 6, 7, 8]}
impl_first_fit!{i16, u16, [9, 10, 11, 12, 13, 14, 15, 16]}
impl_first_fit!{i32, u32, [
  17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32
]}
impl_first_fit!{i64, u64, [
  33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
  49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64
]}
impl_first_fit!{i128, u128, [
  65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 80,
  81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96,
  97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112,
  113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128
]}

impl_first_fit_float!{f32, [
  0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
  17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32
]}
impl_first_fit_float!{f64, [
  33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
  49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64
]}

/// A native numeric type used as an *archetype*: a hint that selects the family (and, for
/// [`Elastic`](crate::Elastic), the minimum width) of a generated type. The archetype itself is
/// never used as storage unless it happens to be the type that fits.
pub trait Archetype: Copy + 'static {
  const FAMILY: Family;
  const WIDTH: u32;
}

/// The integer archetypes, with their same-width counterparts of the other signedness.
pub trait Integer: Archetype {
  type Signed: Integer;
  type Unsigned: Integer;
}

/// The type with the same family as `Self` and at least `N` bits.
pub trait SetWidth<const N: u32>: Archetype {
  type Output: Archetype;
}

/// Shorthand for the narrowest type in the same family as `A` with at least `N` bits.
///
/// ```
/// # use elastic_fixed::SetWidthT;
/// let a: SetWidthT<i64, 9> = -300_i16;
/// let b: SetWidthT<u8, 33> = 1_u64 << 40;
/// let c: SetWidthT<f64, 0> = 0.5_f32;
/// # let _ = (a, b, c);
/// ```
pub type SetWidthT<A, const N: u32> = <A as SetWidth<N>>::Output;

macro_rules! impl_integer_archetype {
  ($int:ty, $family:ident, $signed:ty, $unsigned:ty, $pick:ident) => {
    impl Archetype for $int {
      const FAMILY: Family = Family::$family;
      const WIDTH: u32 = <$int>::BITS;
    }

    impl Integer for $int {
      type Signed = $signed;
      type Unsigned = $unsigned;
    }

    impl<const N: u32> SetWidth<N> for $int where Bits<N>: FirstFit {
      type Output = <Bits<N> as FirstFit>::$pick;
    }
  }
}

impl_integer_archetype!{i8, Signed, i8, u8, Signed}
impl_integer_archetype!{i16, Signed, i16, u16, Signed}
impl_integer_archetype!{i32, Signed, i32, u32, Signed}
impl_integer_archetype!{i64, Signed, i64, u64, Signed}
impl_integer_archetype!{i128, Signed, i128, u128, Signed}
impl_integer_archetype!{u8, Unsigned, i8, u8, Unsigned}
impl_integer_archetype!{u16, Unsigned, i16, u16, Unsigned}
impl_integer_archetype!{u32, Unsigned, i32, u32, Unsigned}
impl_integer_archetype!{u64, Unsigned, i64, u64, Unsigned}
impl_integer_archetype!{u128, Unsigned, i128, u128, Unsigned}

impl Archetype for f32 {
  const FAMILY: Family = Family::Float;
  const WIDTH: u32 = 32;
}

impl Archetype for f64 {
  const FAMILY: Family = Family::Float;
  const WIDTH: u32 = 64;
}

impl<const N: u32> SetWidth<N> for f32 where Bits<N>: FirstFitFloat {
  type Output = <Bits<N> as FirstFitFloat>::Float;
}

impl<const N: u32> SetWidth<N> for f64 where Bits<N>: FirstFitFloat {
  type Output = <Bits<N> as FirstFitFloat>::Float;
}

/// An integer family (signed if `SIGNED`) and a bit count, lifted to the type level.
pub struct Select<const SIGNED: bool, const N: u32>;

/// Implemented for [`Select<SIGNED, N>`](Select) for every `N` from 0 to 128.
pub trait Fit {
  type Output: Rep;
}

impl<const N: u32> Fit for Select<true, N> where Bits<N>: FirstFit {
  type Output = <Bits<N> as FirstFit>::Signed;
}

impl<const N: u32> Fit for Select<false, N> where Bits<N>: FirstFit {
  type Output = <Bits<N> as FirstFit>::Unsigned;
}

/// Shorthand for the narrowest integer of the given signedness with at least `N` bits.
///
/// ```
/// # use elastic_fixed::FitT;
/// let a: FitT<true, 8> = -1_i8;
/// let b: FitT<false, 65> = u128::MAX;
/// # let _ = (a, b);
/// ```
pub type FitT<const SIGNED: bool, const N: u32> = <Select<SIGNED, N> as Fit>::Output;

/// Whether the archetype `A` is of a signed family (signed integers or floats).
pub const fn is_signed<A: Archetype>() -> bool {
  !matches!(A::FAMILY, Family::Unsigned)
}

/// The number of bits needed for `integer_digits + fractional_digits` digits, plus a sign bit if
/// `A` is signed. Panics (at compile time, when used in a type) if the digit count is negative.
pub const fn bits_for<A: Archetype>(integer_digits: i32, fractional_digits: i32) -> u32 {
  let digits = integer_digits + fractional_digits;
  assert!(digits >= 0, "the number of digits must not be negative");
  digits as u32 + is_signed::<A>() as u32
}

/// Like [`bits_for`], but never narrower than `A` itself.
pub const fn storage_bits<A: Archetype>(integer_digits: i32, fractional_digits: i32) -> u32 {
  let bits = bits_for::<A>(integer_digits, fractional_digits);
  if bits > A::WIDTH { bits } else { A::WIDTH }
}

#[cfg(test)]
mod tests {
  use super::*;
  use core::any::TypeId;

  fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
  }

  #[test]
  fn first_fit_boundaries() {
    assert_eq!(first_fit(0, Family::Signed), Some(Native::I8));
    assert_eq!(first_fit(8, Family::Signed), Some(Native::I8));
    assert_eq!(first_fit(9, Family::Signed), Some(Native::I16));
    assert_eq!(first_fit(64, Family::Unsigned), Some(Native::U64));
    assert_eq!(first_fit(65, Family::Unsigned), Some(Native::U128));
    assert_eq!(first_fit(128, Family::Unsigned), Some(Native::U128));
    assert_eq!(first_fit(129, Family::Unsigned), None);
    assert_eq!(first_fit(0, Family::Float), Some(Native::F32));
    assert_eq!(first_fit(64, Family::Float), Some(Native::F64));
    assert_eq!(first_fit(65, Family::Float), None);
  }

  #[test]
  fn first_fit_is_narrowest() {
    for family in [Family::Signed, Family::Unsigned, Family::Float] {
      for bits in 0 ..= 130 {
        let fit = first_fit(bits, family);
        for &member in family.members() {
          let wide_enough = member.bits() >= bits;
          match fit {
            Some(fit) => assert!(!wide_enough || member.bits() >= fit.bits(), "{bits} {family:?}"),
            None => assert!(!wide_enough, "{bits} {family:?}"),
          }
        }
        if let Some(fit) = fit {
          assert!(fit.bits() >= bits);
          assert_eq!(fit.family(), family);
        }
      }
    }
  }

  #[test]
  fn set_width() {
    assert!(same::<SetWidthT<i32, 0>, i8>());
    assert!(same::<SetWidthT<i32, 8>, i8>());
    assert!(same::<SetWidthT<i8, 9>, i16>());
    assert!(same::<SetWidthT<u16, 33>, u64>());
    assert!(same::<SetWidthT<u8, 128>, u128>());
    assert!(same::<SetWidthT<f64, 24>, f32>());
    assert!(same::<SetWidthT<f32, 53>, f64>());
  }

  #[test]
  fn fit() {
    assert!(same::<FitT<true, 1>, i8>());
    assert!(same::<FitT<false, 16>, u16>());
    assert!(same::<FitT<false, 17>, u32>());
    assert!(same::<FitT<true, 100>, i128>());
  }

  #[test]
  fn type_form_matches_value_form() {
    macro_rules! check {
      ($($n:literal),*) => {
        $(
          assert_eq!(
            size_of::<FitT<true, $n>>() as u32 * 8,
            first_fit($n, Family::Signed).map(Native::bits).unwrap(),
          );
          assert_eq!(
            size_of::<FitT<false, $n>>() as u32 * 8,
            first_fit($n, Family::Unsigned).map(Native::bits).unwrap(),
          );
        )*
      }
    }
    check!(0, 1, 7, 8, 9, 15, 16, 17, 31, 32, 33, 63, 64, 65, 127, 128);
  }

  #[test]
  fn digit_counts() {
    assert_eq!(bits_for::<i32>(7, 0), 8);
    assert_eq!(bits_for::<u32>(4, 4), 8);
    assert_eq!(bits_for::<i8>(-4, 6), 3);
    assert_eq!(storage_bits::<i32>(7, 0), 32);
    assert_eq!(storage_bits::<u8>(11, -10), 8);
    assert_eq!(storage_bits::<u8>(20, 0), 20);
    assert!(is_signed::<f32>());
    assert!(!is_signed::<u64>());
  }

  #[test]
  #[should_panic]
  fn negative_digits() {
    let _ = bits_for::<i32>(-3, 2);
  }
}
