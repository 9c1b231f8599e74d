use super::*;

use crate::{ParseFixedError, ScaleFrom};
use crate::fixed_point::fmt_scaled;
use core::fmt::{Debug, Display, Formatter};

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> Debug for Elastic<I, F, R> {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("Elastic")
      .field(&self.0)
      .field(&format_args!("2^{}", -F))
      .finish()
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> Display for Elastic<I, F, R> {
  /// Print the exact decimal value of `self`, the same way as [`FixedPoint`](crate::FixedPoint)
  /// does.
  ///
  /// ```
  /// # use elastic_fixed::Elastic;
  /// assert_eq!(format!("{}", Elastic::<4, 4, i16>::from_data(-0x28)), "-2.5");
  /// assert_eq!(format!("{}", Elastic::<11, -10, u8>::from_data(1)), "1024");
  /// ```
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    fmt_scaled(self.0, -F, f)
  }
}

impl<
  const I: i32,
  const F: i32,
  R: Rep,
> core::str::FromStr for Elastic<I, F, R> {
  type Err = ParseFixedError;

  /// Parse a finite decimal literal and convert it like [`ScaleFrom<f64>`](crate::ScaleFrom).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.parse::<f64>() {
      Ok(x) if x.is_finite() => Ok(Self::scale_from(x)),
      _ => Err(ParseFixedError),
    }
  }
}
