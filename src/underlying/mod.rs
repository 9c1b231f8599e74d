//! This module contains the underlying integer operations that fixed-point arithmetic is built
//! on. These are hidden from the end-user, which only sees the sealed [`Rep`] trait, implemented
//! for `i8`, `i16`, `i32`, `i64`, `i128`, `u8`, `u16`, `u32`, `u64`, and `u128`.

/// The trait for the machine integer types that can store the scaled bit pattern of a
/// fixed-point number (only satisfied by `i8` through `i128` and `u8` through `u128`).
///
/// This is a *sealed* type.
pub trait Rep: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary + core::fmt::LowerHex +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  Send + Sync + 'static
{
  /// The signed type of the same width (`Self` if already signed).
  type Signed: Rep;
  /// The unsigned type of the same width (`Self` if already unsigned).
  type Unsigned: Rep;
  /// The type of the same signedness and twice the width, used as the intermediate type in
  /// multiplication and division. There is no native type wider than 128 bits, so for `i128` and
  /// `u128` this is `Self`, and the operators that need it refuse to compile.
  type Wide: Rep;

  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;
  const SIGNED: bool;
  /// Number of value bits, i.e. `BITS` minus the sign bit if there is one.
  const DIGITS: u32;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_mul(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;

  /// Truncating division. Panics if `other` is zero, like the native operator; `MIN / -1` wraps.
  fn wrapping_div(self, other: Self) -> Self;

  /// Multiply by `2^n`, wrapping on overflow. If `n >= BITS` every bit is shifted out and the
  /// result is `0`.
  fn scale_up(self, n: u32) -> Self;

  /// Divide by `2^n`, truncating toward zero (i.e. *not* the same as `>>` for negative numbers).
  /// If `n >= BITS` the result is `0`.
  fn scale_down(self, n: u32) -> Self;

  /// Raw shifts of the bit pattern, with the shift amount taken modulo `BITS`.
  fn shl(self, n: u32) -> Self;
  fn shr(self, n: u32) -> Self;

  fn is_negative(self) -> bool;

  /// The absolute value, as a `u128` (so that it cannot overflow even for `i128::MIN`).
  fn unsigned_abs128(self) -> u128;

  /// Nearest `f64` to `self`.
  fn to_f64(self) -> f64;

  /// Short for `x as Self`: truncates toward zero, saturates at `MIN` and `MAX`, and maps NaN to 0.
  fn of_f64(x: f64) -> Self;
}

mod int;
mod const_as;
mod shift;
mod cmp;
pub use const_as::const_as;
pub use shift::{shift_left, shift_right};
pub(crate) use cmp::cmp_scaled;
pub(crate) use shift::pow2;
