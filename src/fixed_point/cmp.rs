use super::*;
use crate::Rep;
use crate::underlying::{cmp_scaled, const_as};
use core::cmp::Ordering;

// Comparisons between fixed-point numbers are exact, even across different reps and exponents:
// `FixedPoint::<u8, 4>::from_data(1) == FixedPoint::<i64, 0>::from_data(16)`. Between two values
// of the same type they reduce to comparing the stored integers.

/// Whether `FixedPoint<R, E>` and `FixedPoint<R2, E2>` are the same type.
const fn same_type<R: Rep, const E: i32, R2: Rep, const E2: i32>() -> bool {
  E == E2 && R::BITS == R2::BITS && R::SIGNED == R2::SIGNED
}

impl<
  R: Rep,
  const E: i32,
  R2: Rep,
  const E2: i32,
> PartialEq<FixedPoint<R2, E2>> for FixedPoint<R, E> {
  #[inline]
  fn eq(&self, other: &FixedPoint<R2, E2>) -> bool {
    if const { same_type::<R, E, R2, E2>() } {
      self.0 == const_as::<R2, R>(other.0)
    } else {
      cmp_scaled(self.0, E, other.0, E2).is_eq()
    }
  }
}

impl<
  R: Rep,
  const E: i32,
  R2: Rep,
  const E2: i32,
> PartialOrd<FixedPoint<R2, E2>> for FixedPoint<R, E> {
  #[inline]
  fn partial_cmp(&self, other: &FixedPoint<R2, E2>) -> Option<Ordering> {
    if const { same_type::<R, E, R2, E2>() } {
      Some(self.0.cmp(&const_as::<R2, R>(other.0)))
    } else {
      Some(cmp_scaled(self.0, E, other.0, E2))
    }
  }
}

macro_rules! impl_cmp_int {
  ($int:ty) => {
    impl<R: Rep, const E: i32>
    PartialEq<$int> for FixedPoint<R, E> {
      #[inline]
      fn eq(&self, other: &$int) -> bool {
        cmp_scaled(self.0, E, *other, 0).is_eq()
      }
    }

    impl<R: Rep, const E: i32>
    PartialOrd<$int> for FixedPoint<R, E> {
      #[inline]
      fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
        Some(cmp_scaled(self.0, E, *other, 0))
      }
    }

    impl<R: Rep, const E: i32>
    PartialEq<FixedPoint<R, E>> for $int {
      #[inline]
      fn eq(&self, other: &FixedPoint<R, E>) -> bool {
        cmp_scaled(*self, 0, other.0, E).is_eq()
      }
    }

    impl<R: Rep, const E: i32>
    PartialOrd<FixedPoint<R, E>> for $int {
      #[inline]
      fn partial_cmp(&self, other: &FixedPoint<R, E>) -> Option<Ordering> {
        Some(cmp_scaled(*self, 0, other.0, E))
      }
    }
  }
}

impl_cmp_int!{i8}
impl_cmp_int!{i16}
impl_cmp_int!{i32}
impl_cmp_int!{i64}
impl_cmp_int!{i128}
impl_cmp_int!{u8}
impl_cmp_int!{u16}
impl_cmp_int!{u32}
impl_cmp_int!{u64}
impl_cmp_int!{u128}

// Floats are compared after converting the fixed-point number to `f64`, which is exact as long as
// the stored integer has no more than 53 significant bits.
macro_rules! impl_cmp_float {
  ($float:ty) => {
    impl<R: Rep, const E: i32>
    PartialEq<$float> for FixedPoint<R, E> {
      #[inline]
      fn eq(&self, other: &$float) -> bool {
        self.as_f64() == *other as f64
      }
    }

    impl<R: Rep, const E: i32>
    PartialOrd<$float> for FixedPoint<R, E> {
      #[inline]
      fn partial_cmp(&self, other: &$float) -> Option<Ordering> {
        self.as_f64().partial_cmp(&(*other as f64))
      }
    }

    impl<R: Rep, const E: i32>
    PartialEq<FixedPoint<R, E>> for $float {
      #[inline]
      fn eq(&self, other: &FixedPoint<R, E>) -> bool {
        *self as f64 == other.as_f64()
      }
    }

    impl<R: Rep, const E: i32>
    PartialOrd<FixedPoint<R, E>> for $float {
      #[inline]
      fn partial_cmp(&self, other: &FixedPoint<R, E>) -> Option<Ordering> {
        (*self as f64).partial_cmp(&other.as_f64())
      }
    }
  }
}

impl_cmp_float!{f32}
impl_cmp_float!{f64}
