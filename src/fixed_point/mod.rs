//! This module and its submodules contain the scaled-integer fixed-point type, [`FixedPoint`].
//!
//! A `FixedPoint<R, E>` stores a machine integer `data` of type `R` and represents the real number
//! `data × 2^E`. The exponent `E` is part of the type, so it costs nothing at run time; all the
//! work of moving between scales (converting from or to ints, floats, other fixed-point types, or
//! lining up the operands of an arithmetic operation) is done with the
//! [`shift_left`](crate::shift_left) and [`shift_right`](crate::shift_right) helpers, which never
//! shift by a negative amount and always shift in the wider of their input and output types.
//!
//! Some notation used in the comments:
//!
//!   - **Digits**: the value bits of `R`, i.e. its width minus the sign bit if it has one.
//!   - **Integer digits**: `digits + E`, the number of bits to the left of the binary point.
//!   - **Fractional digits**: `-E`, the number of bits to the right of the binary point.

/// A fixed-point number, stored as an integer `R` and scaled by the constant `2^E`.
///
/// The default parameters make `FixedPoint` (without arguments) a plain `i32` integer.
///
/// Examples:
///
/// ```
/// # use elastic_fixed::{FixedPoint, ScaleFrom, ScaleInto};
/// type Q16 = FixedPoint<i32, -16>;  // 15 integer digits, 16 fractional digits, signed
/// type Coarse = FixedPoint<u8, 4>;  // multiples of 16, from 0 to 4080
///
/// let a = Q16::scale_from(3.25);
/// assert_eq!(a.data(), 3 << 16 | 1 << 14);
/// assert_eq!(Coarse::scale_from(100).data(), 6);  // 96, truncated to a multiple of 16
/// let x: f64 = (a * a).scale_into();
/// assert_eq!(x, 10.5625);
/// ```
pub struct FixedPoint<
  R: crate::Rep = i32,
  const E: i32 = 0,
> (R);

/// Constructors and accessors
mod basics;

/// Constants (zero, min, max, digit counts, etc)
mod consts;

/// Manual implementations of the standard traits (Clone, Copy, Hash, etc)
mod traits;

/// Comparisons, exact across different reps and exponents
mod cmp;

/// Conversions to and from ints, floats, and other fixed-point types
pub(crate) mod convert;

/// Arithmetic operators
mod ops;

/// Negation, absolute value, sign
mod unary;

/// Printing and parsing
mod fmt;

pub use fmt::ParseFixedError;
pub(crate) use fmt::fmt_scaled;
pub(crate) use convert::{scaled_of_f64, scaled_to_f64};

/// Test helpers: strategies for generating values, and an exact oracle
#[cfg(test)]
pub(crate) mod test;
#[cfg(test)]
pub(crate) mod rational;

/// The [`FixedPoint`] type with (at least) `I` integer digits and `F` fractional digits, stored in
/// the narrowest integer of the same signedness as the archetype (by default `i32`).
///
/// The exponent is `-F`, and the storage is the first fit for `I + F` digits plus a sign bit if the
/// archetype is signed. Either digit count may be negative, but not their sum.
///
/// ```
/// # use elastic_fixed::{make_fixed, FixedPoint};
/// let a: make_fixed!(7, 0) = FixedPoint::<i8, 0>::from_data(5);
/// let b: make_fixed!(15, 16) = FixedPoint::<i32, -16>::from_data(5);
/// let c: make_fixed!(4, 4, u8) = FixedPoint::<u8, -4>::from_data(5);
/// let d: make_fixed!(40, -8, i16) = FixedPoint::<i64, 8>::from_data(5);
/// # let _ = (a, b, c, d);
/// ```
#[macro_export]
macro_rules! make_fixed {
  ($integer_digits:expr, $fractional_digits:expr) => {
    $crate::make_fixed!($integer_digits, $fractional_digits, i32)
  };
  ($integer_digits:expr, $fractional_digits:expr, $archetype:ty) => {
    $crate::FixedPoint<
      $crate::SetWidthT<
        $archetype,
        { $crate::width::bits_for::<$archetype>($integer_digits, $fractional_digits) },
      >,
      { -($fractional_digits) },
    >
  };
}

/// As [`make_fixed!`], but unsigned: the storage is the narrowest unsigned integer with at least
/// `I + F` bits. The archetype (by default `u32`) is made unsigned before use.
///
/// ```
/// # use elastic_fixed::{make_ufixed, FixedPoint};
/// let a: make_ufixed!(4, 4) = FixedPoint::<u8, -4>::from_data(5);
/// let b: make_ufixed!(2, 30) = FixedPoint::<u32, -30>::from_data(5);
/// let c: make_ufixed!(8, 8, i64) = FixedPoint::<u16, -8>::from_data(5);
/// # let _ = (a, b, c);
/// ```
#[macro_export]
macro_rules! make_ufixed {
  ($integer_digits:expr, $fractional_digits:expr) => {
    $crate::make_ufixed!($integer_digits, $fractional_digits, u32)
  };
  ($integer_digits:expr, $fractional_digits:expr, $archetype:ty) => {
    $crate::make_fixed!(
      $integer_digits,
      $fractional_digits,
      <$archetype as $crate::width::Integer>::Unsigned
    )
  };
}


mod tests_compile_fail {
  /// Asking for more digits than the widest integer has.
  /// ```compile_fail
  /// use elastic_fixed::make_fixed;
  /// let _: make_fixed!(100, 28) = Default::default();
  /// ```
  #[allow(dead_code)]
  fn too_many_digits() {}

  /// A negative number of digits.
  /// ```compile_fail
  /// use elastic_fixed::make_fixed;
  /// let _: make_fixed!(-3, 2) = Default::default();
  /// ```
  #[allow(dead_code)]
  fn negative_digits() {}

  /// Only integers can store fixed-point numbers.
  /// ```compile_fail
  /// use elastic_fixed::FixedPoint;
  /// let _: FixedPoint<f32, 0> = Default::default();
  /// ```
  #[allow(dead_code)]
  fn float_rep() {}
}
