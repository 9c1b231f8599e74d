use super::*;

/// Scale `i` up or down by `2^n`, and convert it to `Output`. Shifting up is done in `Output` if
/// it's at least as wide as `Input`, converting first so that no bits shifted up are lost.
/// Shifting down is done in `Input` if it's at least as wide as `Output`, converting after so that
/// no bits are chopped off (or reinterpreted as a sign) before they're shifted down.
#[inline]
fn scale<Output: Rep, Input: Rep>(i: Input, n: u32, up: bool) -> Output {
  let in_output = if up { Input::BITS <= Output::BITS } else { Input::BITS < Output::BITS };
  if in_output {
    let o = const_as::<Input, Output>(i);
    if up { o.scale_up(n) } else { o.scale_down(n) }
  } else {
    let i = if up { i.scale_up(n) } else { i.scale_down(n) };
    const_as::<Input, Output>(i)
  }
}

/// Multiply `i` by `2^exponent` and convert the result to `Output`.
///
/// A negative `exponent` divides instead (truncating toward zero), so the shift amount is never
/// negative, and an `exponent` of 0 is a plain conversion. Bits shifted out past the width of the
/// wider of `Input` and `Output` are lost, as are bits that don't fit in `Output` after the shift
/// (the result wraps, like `as`).
///
/// ```
/// # use elastic_fixed::shift_left;
/// assert_eq!(shift_left::<i32, i8>(100, 4), 1600);
/// assert_eq!(shift_left::<i8, i32>(1600, -4), 100);
/// assert_eq!(shift_left::<i16, i16>(-7, -1), -3);
/// ```
#[inline]
pub fn shift_left<Output: Rep, Input: Rep>(i: Input, exponent: i32) -> Output {
  match exponent.cmp(&0) {
    core::cmp::Ordering::Equal => const_as(i),
    core::cmp::Ordering::Greater => scale(i, exponent.unsigned_abs(), true),
    core::cmp::Ordering::Less => scale(i, exponent.unsigned_abs(), false),
  }
}

/// Divide `i` by `2^exponent` (truncating toward zero) and convert the result to `Output`. This
/// is the mirror image of [`shift_left`]: a negative `exponent` multiplies instead.
///
/// ```
/// # use elastic_fixed::shift_right;
/// assert_eq!(shift_right::<u8, u32>(0xf00, 4), 0xf0);
/// assert_eq!(shift_right::<i64, i8>(-1, 1), 0);
/// assert_eq!(shift_right::<i64, i8>(-1, -40), -1 << 40);
/// ```
#[inline]
pub fn shift_right<Output: Rep, Input: Rep>(i: Input, exponent: i32) -> Output {
  match exponent.cmp(&0) {
    core::cmp::Ordering::Equal => const_as(i),
    core::cmp::Ordering::Greater => scale(i, exponent.unsigned_abs(), false),
    core::cmp::Ordering::Less => scale(i, exponent.unsigned_abs(), true),
  }
}

/// `2^exponent` as an `f64`. Overflows to infinity and underflows (through the subnormals) to 0.
pub(crate) fn pow2(exponent: i32) -> f64 {
  const BIAS: i32 = 1023;
  const MANTISSA_BITS: i32 = 52;
  if exponent > BIAS {
    f64::INFINITY
  } else if exponent >= 1 - BIAS {
    f64::from_bits(((exponent + BIAS) as u64) << MANTISSA_BITS)
  } else if exponent >= 1 - BIAS - MANTISSA_BITS {
    f64::from_bits(1_u64 << (exponent - (1 - BIAS - MANTISSA_BITS)))
  } else {
    0.
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn zero_exponent_is_a_cast() {
    assert_eq!(shift_left::<u8, i32>(0x1_23, 0), 0x23);
    assert_eq!(shift_right::<i16, u8>(0xff, 0), 0xff);
  }

  #[test]
  fn widen_before_shifting_up() {
    // The bits shifted up must not be lost in the narrower `Input`.
    assert_eq!(shift_left::<i64, i8>(0x7f, 32), 0x7f_0000_0000);
    assert_eq!(shift_right::<u64, u8>(0xff, -56), 0xff << 56);
  }

  #[test]
  fn narrow_after_shifting_down() {
    // The bits shifted down must not be chopped before they're shifted.
    assert_eq!(shift_right::<i8, i64>(0x7f_0000_0000, 32), 0x7f);
    assert_eq!(shift_left::<u8, u128>(1 << 100, -93), 0x80);
  }

  #[test]
  fn same_width_mixed_signedness() {
    // The top bit of an unsigned input is a value bit, not a sign, until it's shifted down
    assert_eq!(shift_right::<i8, u8>(255, 1), 127);
    assert_eq!(shift_left::<i8, u8>(254, -1), 127);
    assert_eq!(shift_right::<i64, u64>(u64::MAX, 2), i64::MAX >> 1);
    // And a negative input stays negative until it's shifted down
    assert_eq!(shift_right::<u16, i16>(-256, 4), (-16_i16) as u16);
    // Shifting up wraps the same either way
    assert_eq!(shift_left::<u8, i8>(-1, 1), 254);
    assert_eq!(shift_left::<i8, u8>(0x41, 1), -126);
  }

  #[test]
  fn out_of_range_shifts() {
    assert_eq!(shift_left::<i32, i32>(1, 32), 0);
    assert_eq!(shift_right::<i32, i32>(i32::MIN, 32), 0);
    assert_eq!(shift_right::<i32, i32>(i32::MIN, 31), -1);
    assert_eq!(shift_left::<u8, u8>(3, i32::MIN), 0);
    assert_eq!(shift_right::<u8, u8>(3, i32::MIN), 0);
  }

  #[test]
  fn pow2_special() {
    assert_eq!(pow2(0), 1.);
    assert_eq!(pow2(-1), 0.5);
    assert_eq!(pow2(1023), 2_f64.powi(1023));
    assert_eq!(pow2(1024), f64::INFINITY);
    assert_eq!(pow2(-1074), f64::from_bits(1));
    assert_eq!(pow2(-1075), 0.);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn left_then_right_is_identity(x in any::<i32>(), e in 0 .. 32_i32) {
      let wide: i64 = shift_left(x, e);
      prop_assert_eq!(shift_right::<i32, i64>(wide, e), x);
    }

    #[test]
    fn right_is_truncating_division(x in any::<i64>(), e in 0 .. 64_i32) {
      let q: i64 = shift_right(x, e);
      prop_assert_eq!(q as i128, x as i128 / (1_i128 << e));
    }

    #[test]
    fn same_width_right_is_exact(x in any::<u32>(), e in 1 .. 31_i32) {
      // Once shifted down by at least 1, every `u32` fits in an `i32`
      prop_assert_eq!(shift_right::<i32, u32>(x, e) as u32, x >> e);
      prop_assert_eq!(shift_left::<u32, i32>(x as i32, -e) as i32, (x as i32) / (1 << e));
    }

    #[test]
    fn left_negative_is_right(x in any::<u32>(), e in -40 .. 40_i32) {
      prop_assert_eq!(shift_left::<u64, u32>(x, -e), shift_right::<u64, u32>(x, e));
    }

    #[test]
    fn pow2_matches_powi(e in -1022 .. 1024_i32) {
      prop_assert_eq!(pow2(e), 2_f64.powi(e));
    }
  }
}
