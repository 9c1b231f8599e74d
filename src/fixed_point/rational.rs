use super::*;

use crate::Rep;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{PowerOf2, RoundToMultiple};
use malachite::base::rounding_modes::RoundingMode;

/// Conversion of a fixed-point number into the exact [`Rational`] it represents. This is what our
/// implementations are checked against, so it is written in the most obvious way possible.
pub trait ExactValue {
  fn exact_value(self) -> Rational;
}

impl<
  R: Rep,
  const E: i32,
> ExactValue for FixedPoint<R, E> {
  fn exact_value(self) -> Rational {
    let magnitude = Rational::from(self.0.unsigned_abs128());
    let data = if self.0.is_negative() { -magnitude } else { magnitude };
    data * Rational::power_of_2(E as i64)
  }
}

/// `x` truncated (toward zero) to a multiple of `2^exponent`.
pub fn truncate(x: Rational, exponent: i32) -> Rational {
  x.round_to_multiple(Rational::power_of_2(exponent as i64), RoundingMode::Down).0
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact_value() {
    assert_eq!(FixedPoint::<i8, -1>::from_data(-3).exact_value(), Rational::from_signeds(-3, 2));
    assert_eq!(FixedPoint::<u8, 4>::from_data(255).exact_value(), Rational::from(255 * 16));
    assert_eq!(FixedPoint::<i128, 0>::MIN.exact_value(), Rational::from(i128::MIN));
  }

  #[test]
  fn truncate_toward_zero() {
    assert_eq!(truncate(Rational::from_signeds(7, 4), 0), Rational::from(1));
    assert_eq!(truncate(Rational::from_signeds(-7, 4), 0), Rational::from(-1));
    assert_eq!(truncate(Rational::from_signeds(-7, 4), -1), Rational::from_signeds(-3, 2));
    assert_eq!(truncate(Rational::from(100), 3), Rational::from(96));
  }
}
