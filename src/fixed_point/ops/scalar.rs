use super::*;

use crate::shift_right;
use core::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign};

// Fixed-point with a plain integer of the same rep. For addition and subtraction the integer is
// taken at exponent 0 and brought to the fixed-point scale; multiplication and division by an
// integer leave the scale alone and act on the stored integer directly. The result is always the
// fixed-point type, and wraps like the stored integer does.

impl<R: Rep, const E: i32> Add<R> for FixedPoint<R, E> {
  type Output = FixedPoint<R, E>;

  #[inline]
  fn add(self, rhs: R) -> Self::Output {
    Self(self.0.wrapping_add(shift_right::<R, R>(rhs, E)))
  }
}

impl<R: Rep, const E: i32> Sub<R> for FixedPoint<R, E> {
  type Output = FixedPoint<R, E>;

  #[inline]
  fn sub(self, rhs: R) -> Self::Output {
    Self(self.0.wrapping_sub(shift_right::<R, R>(rhs, E)))
  }
}

impl<R: Rep, const E: i32> Mul<R> for FixedPoint<R, E> {
  type Output = FixedPoint<R, E>;

  #[inline]
  fn mul(self, rhs: R) -> Self::Output {
    Self(self.0.wrapping_mul(rhs))
  }
}

impl<R: Rep, const E: i32> Div<R> for FixedPoint<R, E> {
  type Output = FixedPoint<R, E>;

  /// # Panics
  ///
  /// If `rhs` is zero.
  #[inline]
  fn div(self, rhs: R) -> Self::Output {
    Self(self.0.wrapping_div(rhs))
  }
}

impl<R: Rep, const E: i32> AddAssign<R> for FixedPoint<R, E> {
  #[inline]
  fn add_assign(&mut self, rhs: R) { *self = *self + rhs }
}

impl<R: Rep, const E: i32> SubAssign<R> for FixedPoint<R, E> {
  #[inline]
  fn sub_assign(&mut self, rhs: R) { *self = *self - rhs }
}

impl<R: Rep, const E: i32> MulAssign<R> for FixedPoint<R, E> {
  #[inline]
  fn mul_assign(&mut self, rhs: R) { *self = *self * rhs }
}

impl<R: Rep, const E: i32> DivAssign<R> for FixedPoint<R, E> {
  #[inline]
  fn div_assign(&mut self, rhs: R) { *self = *self / rhs }
}

/// The same, with the integer on the left. These can't be written generically over the rep (the
/// orphan rules forbid `impl Add<FixedPoint<R, E>> for R`), so there is one set per integer type.
macro_rules! impl_int_lhs {
  ($($int:ty),*) => {$(
    impl<const E: i32> Add<FixedPoint<$int, E>> for $int {
      type Output = FixedPoint<$int, E>;

      #[inline]
      fn add(self, rhs: FixedPoint<$int, E>) -> Self::Output { rhs + self }
    }

    impl<const E: i32> Sub<FixedPoint<$int, E>> for $int {
      type Output = FixedPoint<$int, E>;

      #[inline]
      fn sub(self, rhs: FixedPoint<$int, E>) -> Self::Output {
        FixedPoint::<$int, E>::from_int(self) - rhs
      }
    }

    impl<const E: i32> Mul<FixedPoint<$int, E>> for $int {
      type Output = FixedPoint<$int, E>;

      #[inline]
      fn mul(self, rhs: FixedPoint<$int, E>) -> Self::Output { rhs * self }
    }

    impl<const E: i32> Div<FixedPoint<$int, E>> for $int {
      type Output = FixedPoint<$int, E>;

      #[inline]
      fn div(self, rhs: FixedPoint<$int, E>) -> Self::Output {
        FixedPoint::<$int, E>::from_int(self) / rhs
      }
    }
  )*}
}

impl_int_lhs!{i8, i16, i32, i64, i128, u8, u16, u32, u64, u128}

// Fixed-point with floats: the fixed-point number is converted to the float type, and the result
// is a float.

macro_rules! impl_float {
  ($float:ty, $trait:ident, $name:ident, $op:tt) => {
    impl<R: Rep, const E: i32> $trait<$float> for FixedPoint<R, E> {
      type Output = $float;

      #[inline]
      fn $name(self, rhs: $float) -> $float { (self.as_f64() as $float) $op rhs }
    }

    impl<R: Rep, const E: i32> $trait<FixedPoint<R, E>> for $float {
      type Output = $float;

      #[inline]
      fn $name(self, rhs: FixedPoint<R, E>) -> $float { self $op (rhs.as_f64() as $float) }
    }
  }
}

impl_float!{f64, Add, add, +}
impl_float!{f64, Sub, sub, -}
impl_float!{f64, Mul, mul, *}
impl_float!{f64, Div, div, /}
impl_float!{f32, Add, add, +}
impl_float!{f32, Sub, sub, -}
impl_float!{f32, Mul, mul, *}
impl_float!{f32, Div, div, /}
