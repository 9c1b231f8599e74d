use super::*;

use crate::{Rep, ScaleFrom};
use super::convert::scaled_to_f64;
use core::fmt::{Debug, Display, Formatter, Write};

impl<
  R: Rep,
  const E: i32,
> Debug for FixedPoint<R, E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("FixedPoint")
      .field(&self.0)
      .field(&format_args!("2^{}", E))
      .finish()
  }
}

/// The largest number of fractional bits that can be printed exactly: multiplying the fractional
/// part by 10 must not overflow a `u128`.
const MAX_EXACT_FRACTIONAL_BITS: u32 = 124;

/// Split `magnitude × 2^exponent` into its integer part, and its fractional part as a number of
/// `2^-fractional_bits`. `None` if the integer part doesn't fit in a `u128` or there are too many
/// fractional bits.
fn split_exact(magnitude: u128, exponent: i32) -> Option<(u128, u128, u32)> {
  if exponent >= 0 {
    let exponent = exponent as u32;
    if magnitude != 0 && magnitude.leading_zeros() < exponent {
      return None
    }
    Some((magnitude.checked_shl(exponent).unwrap_or(0), 0, 0))
  } else {
    let fractional_bits = exponent.unsigned_abs();
    if fractional_bits > MAX_EXACT_FRACTIONAL_BITS {
      return None
    }
    let mask = (1_u128 << fractional_bits) - 1;
    Some((magnitude >> fractional_bits, magnitude & mask, fractional_bits))
  }
}

/// Room for the digits of any exact expansion: the 39 digits of a `u128`, a point, and at most
/// one digit per fractional bit.
struct Digits {
  bytes: [u8; 40 + MAX_EXACT_FRACTIONAL_BITS as usize],
  len: usize,
}

impl Digits {
  fn new() -> Self {
    Self { bytes: [0; 40 + MAX_EXACT_FRACTIONAL_BITS as usize], len: 0 }
  }

  fn as_str(&self) -> &str {
    core::str::from_utf8(&self.bytes[.. self.len]).unwrap_or_default()
  }
}

impl Write for Digits {
  fn write_str(&mut self, s: &str) -> core::fmt::Result {
    let end = self.len + s.len();
    self.bytes.get_mut(self.len .. end).ok_or(core::fmt::Error)?.copy_from_slice(s.as_bytes());
    self.len = end;
    Ok(())
  }
}

/// Write the decimal expansion (without the sign) of a number split by [`split_exact`]. It always
/// terminates, after at most `fractional_bits` digits.
fn write_exact(
  w: &mut impl Write,
  (integer, mut fraction, fractional_bits): (u128, u128, u32),
) -> core::fmt::Result {
  write!(w, "{integer}")?;
  if fraction != 0 {
    w.write_char('.')?;
    let mask = (1_u128 << fractional_bits) - 1;
    while fraction != 0 {
      fraction *= 10;
      let digit = (fraction >> fractional_bits) as u8;
      w.write_char((b'0' + digit) as char)?;
      fraction &= mask;
    }
  }
  Ok(())
}

/// Print `data × 2^exponent` in decimal, exactly if possible; see [`FixedPoint`]'s `Display`.
pub(crate) fn fmt_scaled<R: Rep>(data: R, exponent: i32, f: &mut Formatter<'_>) -> core::fmt::Result {
  match split_exact(data.unsigned_abs128(), exponent) {
    Some(parts) if f.precision().is_none() => {
      let mut digits = Digits::new();
      write_exact(&mut digits, parts)?;
      f.pad_integral(!data.is_negative(), "", digits.as_str())
    }
    _ => Display::fmt(&scaled_to_f64(data, exponent), f),
  }
}

impl<
  R: Rep,
  const E: i32,
> Display for FixedPoint<R, E> {
  /// Print the exact decimal value of `self`. Every fixed-point number has a finite decimal
  /// expansion, so this prints all of it (no rounding).
  ///
  /// If a precision is given (`{:.3}`), or if the value is too large or has too many fractional
  /// digits to print exactly, it is printed as the nearest `f64` instead. Width, fill, alignment
  /// and the `+` and `0` flags work as they do for numbers.
  ///
  /// ```
  /// # use elastic_fixed::FixedPoint;
  /// let x = FixedPoint::<i16, -4>::from_data(-0x28);
  /// assert_eq!(format!("{x}"), "-2.5");
  /// assert_eq!(format!("{x:.3}"), "-2.500");
  /// assert_eq!(format!("{}", FixedPoint::<u8, -8>::from_data(1)), "0.00390625");
  /// assert_eq!(format!("{}", FixedPoint::<u8, 3>::from_data(5)), "40");
  /// ```
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    fmt_scaled(self.0, E, f)
  }
}

/// The error returned when parsing a [`FixedPoint`] from a string fails, i.e. the string is not a
/// finite decimal number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFixedError;

impl Display for ParseFixedError {
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.write_str("invalid fixed-point literal")
  }
}

impl core::error::Error for ParseFixedError {}

impl<
  R: Rep,
  const E: i32,
> core::str::FromStr for FixedPoint<R, E> {
  type Err = ParseFixedError;

  /// Parse a decimal literal (anything [`f64`] parses, except infinities and NaN), then convert it
  /// like [`ScaleFrom<f64>`](crate::ScaleFrom) does: truncating toward zero, and saturating if it's
  /// out of range.
  ///
  /// ```
  /// # use elastic_fixed::{FixedPoint, ParseFixedError};
  /// let x: FixedPoint<i32, -8> = "-3.75".parse().unwrap();
  /// assert!(x == -3.75);
  /// assert_eq!("1e1000".parse::<FixedPoint<i32, -8>>(), Err(ParseFixedError));
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.parse::<f64>() {
      Ok(x) if x.is_finite() => Ok(Self::scale_from(x)),
      _ => Err(ParseFixedError),
    }
  }
}
