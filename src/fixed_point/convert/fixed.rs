use super::*;

use crate::{Rep, shift_right};

impl<
  R: Rep,
  const E: i32,
> FixedPoint<R, E> {
  /// Convert `self` to another fixed-point type, rescaling the stored integer by `2^(E - E2)`.
  ///
  /// Going to a smaller exponent (more fractional digits) shifts the stored integer left, and
  /// loses the top bits if they don't fit in `R2`; going to a larger exponent shifts it right,
  /// truncating toward zero.
  ///
  /// ```
  /// # use elastic_fixed::FixedPoint;
  /// let x = FixedPoint::<i8, -4>::from_data(-0x28);  // -2.5
  /// assert_eq!(x.convert::<i32, -16>().data(), -0x28000);
  /// assert_eq!(x.convert::<i8, 0>().data(), -2);
  /// assert_eq!(x.convert::<u8, -8>().data(), 0x80);  // -640 doesn't fit in a u8
  /// ```
  #[inline]
  pub fn convert<R2: Rep, const E2: i32>(self) -> FixedPoint<R2, E2> {
    FixedPoint(shift_right::<R2, R>(self.0, E2 - E))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn widen() {
    let x = FixedPoint::<u8, -4>::from_data(0xff);
    assert_eq!(x.convert::<u16, -8>().data(), 0xff0);
    assert_eq!(x.convert::<i64, -36>().data(), 0xff << 32);
    assert!(x.convert::<i64, -36>() == x);
  }

  #[test]
  fn narrow() {
    let x = FixedPoint::<i32, -16>::from_data(-0x1_8000);
    assert_eq!(x.convert::<i8, 0>().data(), -1);
    assert_eq!(x.convert::<i8, -1>().data(), -3);
    assert_eq!(x.convert::<i16, 4>().data(), 0);
    let y = FixedPoint::<u8, 0>::from_data(254);
    assert_eq!(y.convert::<i8, 1>().data(), 127);
    assert!(y.convert::<i8, 1>() == y);
  }

  #[test]
  fn same_exponent_is_cast() {
    let x = FixedPoint::<i32, -3>::from_data(0x1_0005);
    assert_eq!(x.convert::<i16, -3>().data(), 5);
    assert_eq!(x.convert::<i32, -3>(), x);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn widen_then_narrow(data in any::<i16>()) {
      let x = FixedPoint::<i16, -5>::from_data(data);
      let wide = x.convert::<i64, -40>();
      prop_assert!(wide == x);
      prop_assert_eq!(wide.convert::<i16, -5>(), x);
    }

    #[test]
    fn narrow_truncates(data in any::<i64>()) {
      let x = FixedPoint::<i64, -20>::from_data(data);
      prop_assert_eq!(x.convert::<i64, -10>().data(), data / 1024);
    }
  }
}
