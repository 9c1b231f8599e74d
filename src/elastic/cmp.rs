use super::*;

use crate::FixedPoint;
use crate::underlying::cmp_scaled;
use core::cmp::Ordering;

// As with `FixedPoint`, comparisons are exact across all elastic types, and also against
// fixed-point numbers and ints.

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  const I2: i32,
  const F2: i32,
  R2: Rep,
> PartialEq<Elastic<I2, F2, R2>> for Elastic<I, F, R> {
  #[inline]
  fn eq(&self, other: &Elastic<I2, F2, R2>) -> bool {
    cmp_scaled(self.0, -F, other.0, -F2).is_eq()
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  const I2: i32,
  const F2: i32,
  R2: Rep,
> PartialOrd<Elastic<I2, F2, R2>> for Elastic<I, F, R> {
  #[inline]
  fn partial_cmp(&self, other: &Elastic<I2, F2, R2>) -> Option<Ordering> {
    Some(cmp_scaled(self.0, -F, other.0, -F2))
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  R2: Rep,
  const E2: i32,
> PartialEq<FixedPoint<R2, E2>> for Elastic<I, F, R> {
  #[inline]
  fn eq(&self, other: &FixedPoint<R2, E2>) -> bool {
    cmp_scaled(self.0, -F, other.data(), E2).is_eq()
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  R2: Rep,
  const E2: i32,
> PartialOrd<FixedPoint<R2, E2>> for Elastic<I, F, R> {
  #[inline]
  fn partial_cmp(&self, other: &FixedPoint<R2, E2>) -> Option<Ordering> {
    Some(cmp_scaled(self.0, -F, other.data(), E2))
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  R2: Rep,
  const E2: i32,
> PartialEq<Elastic<I, F, R>> for FixedPoint<R2, E2> {
  #[inline]
  fn eq(&self, other: &Elastic<I, F, R>) -> bool {
    cmp_scaled(self.data(), E2, other.0, -F).is_eq()
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
  R2: Rep,
  const E2: i32,
> PartialOrd<Elastic<I, F, R>> for FixedPoint<R2, E2> {
  #[inline]
  fn partial_cmp(&self, other: &Elastic<I, F, R>) -> Option<Ordering> {
    Some(cmp_scaled(self.data(), E2, other.0, -F))
  }
}

macro_rules! impl_cmp_int {
  ($int:ty) => {
    impl<const I: i32, const F: i32, R: Rep>
    PartialEq<$int> for Elastic<I, F, R> {
      #[inline]
      fn eq(&self, other: &$int) -> bool {
        cmp_scaled(self.0, -F, *other, 0).is_eq()
      }
    }

    impl<const I: i32, const F: i32, R: Rep>
    PartialOrd<$int> for Elastic<I, F, R> {
      #[inline]
      fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
        Some(cmp_scaled(self.0, -F, *other, 0))
      }
    }

    impl<const I: i32, const F: i32, R: Rep>
    PartialEq<Elastic<I, F, R>> for $int {
      #[inline]
      fn eq(&self, other: &Elastic<I, F, R>) -> bool {
        cmp_scaled(*self, 0, other.0, -F).is_eq()
      }
    }

    impl<const I: i32, const F: i32, R: Rep>
    PartialOrd<Elastic<I, F, R>> for $int {
      #[inline]
      fn partial_cmp(&self, other: &Elastic<I, F, R>) -> Option<Ordering> {
        Some(cmp_scaled(*self, 0, other.0, -F))
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

macro_rules! impl_cmp_float {
  ($float:ty) => {
    impl<const I: i32, const F: i32, R: Rep>
    PartialEq<$float> for Elastic<I, F, R> {
      #[inline]
      fn eq(&self, other: &$float) -> bool {
        self.as_f64() == *other as f64
      }
    }

    impl<const I: i32, const F: i32, R: Rep>
    PartialOrd<$float> for Elastic<I, F, R> {
      #[inline]
      fn partial_cmp(&self, other: &$float) -> Option<Ordering> {
        self.as_f64().partial_cmp(&(*other as f64))
      }
    }

    impl<const I: i32, const F: i32, R: Rep>
    PartialEq<Elastic<I, F, R>> for $float {
      #[inline]
      fn eq(&self, other: &Elastic<I, F, R>) -> bool {
        *self as f64 == other.as_f64()
      }
    }

    impl<const I: i32, const F: i32, R: Rep>
    PartialOrd<Elastic<I, F, R>> for $float {
      #[inline]
      fn partial_cmp(&self, other: &Elastic<I, F, R>) -> Option<Ordering> {
        (*self as f64).partial_cmp(&other.as_f64())
      }
    }
  }
}

impl_cmp_float!{f32}
impl_cmp_float!{f64}

// Same story as for `FixedPoint`: no derives, to avoid the extra bounds on `R`.

impl<const I: i32, const F: i32, R: Rep>
Clone for Elastic<I, F, R> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const I: i32, const F: i32, R: Rep>
Copy for Elastic<I, F, R> {}

impl<const I: i32, const F: i32, R: Rep>
Eq for Elastic<I, F, R> {}

impl<const I: i32, const F: i32, R: Rep>
Ord for Elastic<I, F, R> {
  #[inline]
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.cmp(&other.0)
  }
}

impl<const I: i32, const F: i32, R: Rep>
core::hash::Hash for Elastic<I, F, R> {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

impl<const I: i32, const F: i32, R: Rep>
Default for Elastic<I, F, R> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}
