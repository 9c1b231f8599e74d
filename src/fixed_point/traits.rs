use super::*;

// The `Rep` trait has bounds indirectly, via `Sealed`; the derive macros would add an extra
// `R: Clone` (etc) bound that we don't want, so these are implemented by hand.
//
// `PartialEq` and `PartialOrd` are in `cmp.rs`, since they are exact across different types.

impl<R: crate::Rep, const E: i32>
Clone for FixedPoint<R, E> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<R: crate::Rep, const E: i32>
Copy for FixedPoint<R, E> {}

impl<R: crate::Rep, const E: i32>
Eq for FixedPoint<R, E> {}

impl<R: crate::Rep, const E: i32>
Ord for FixedPoint<R, E> {
  #[inline]
  fn cmp(&self, other: &Self) -> core::cmp::Ordering {
    self.0.cmp(&other.0)
  }
}

impl<R: crate::Rep, const E: i32>
core::hash::Hash for FixedPoint<R, E> {
  #[inline]
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state);
  }
}

impl<R: crate::Rep, const E: i32>
Default for FixedPoint<R, E> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}
