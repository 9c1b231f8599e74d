use super::*;

use crate::underlying::const_as;
use crate::fixed_point::rational::ExactValue;
use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::PowerOf2;

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> Elastic<I, F, R> {
  /// A [proptest Strategy](proptest::strategy::Strategy) that yields values within the capacity
  /// of this type, with extra weight on the extremes and on zero.
  ///
  /// The range is symmetric: [`Self::LOWEST`] itself is left out, since it is the one value whose
  /// negation (and whose products and quotients with another lowest value) needs one more digit
  /// than the capacity rules give.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    let max = Self::MAX.0.unsigned_abs128();
    let of_magnitude = |magnitude: u128, negative: bool| {
      if negative && R::SIGNED {
        Self(const_as::<i128, R>(-(magnitude as i128)))
      } else {
        Self(const_as::<u128, R>(magnitude))
      }
    };
    prop_oneof![
      8 => (0 ..= max, any::<bool>()).prop_map(move |(m, negative)| of_magnitude(m, negative)),
      1 => prop::sample::select(vec![
        Self::ZERO,
        Self::EPSILON,
        of_magnitude(1, true),
        Self::MAX,
        of_magnitude(max, true),
      ]),
    ]
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> ExactValue for Elastic<I, F, R> {
  fn exact_value(self) -> Rational {
    let magnitude = Rational::from(self.0.unsigned_abs128());
    let data = if self.0.is_negative() { -magnitude } else { magnitude };
    data * Rational::power_of_2(-F as i64)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn exact_value() {
    assert_eq!(Elastic::<7, 8, i16>::from_data(-0x180).exact_value(), Rational::from_signeds(-3, 2));
    assert_eq!(Elastic::<11, -10, u8>::from_data(3).exact_value(), Rational::from(3072));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn cases_within_capacity(x in Elastic::<3, 4, i8>::cases_proptest()) {
      prop_assert!(x > Elastic::<3, 4, i8>::LOWEST && x <= Elastic::<3, 4, i8>::MAX);
    }

    #[test]
    fn cases_within_capacity_unsigned(x in Elastic::<12, -4, u16>::cases_proptest()) {
      prop_assert!(x >= Elastic::<12, -4, u16>::LOWEST && x <= Elastic::<12, -4, u16>::MAX);
      prop_assert!(x.data() < 0x100);
    }
  }
}
