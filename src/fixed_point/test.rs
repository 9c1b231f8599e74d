use super::*;

use crate::Rep;
use crate::underlying::const_as;

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  /// An iterator through all the values of this type. Only sensible for 8-bit (and maybe 16-bit)
  /// reps.
  pub(crate) fn cases_exhaustive() -> impl Iterator<Item = Self> {
    let (min, max) = (const_as::<R, i128>(R::MIN), const_as::<R, i128>(R::MAX));
    (min ..= max).map(|data| Self(const_as::<i128, R>(data)))
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields values of this type, with
  /// extra weight on the extremes and on zero.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    prop_oneof![
      8 => any::<u128>().prop_map(|bits| Self(const_as::<u128, R>(bits))),
      1 => prop::sample::select(vec![Self::ZERO, Self::MIN_POSITIVE, Self::MAX, Self::MIN]),
    ]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cases_exhaustive() {
    assert_eq!(FixedPoint::<u8, 0>::cases_exhaustive().count(), 256);
    assert_eq!(FixedPoint::<i8, 0>::cases_exhaustive().next(), Some(FixedPoint::<i8, 0>::MIN));
    assert_eq!(FixedPoint::<i8, 0>::cases_exhaustive().last(), Some(FixedPoint::<i8, 0>::MAX));
  }
}
