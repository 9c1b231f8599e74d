use super::{Rep, Sealed};

/// Implementation of the functions which are the same for signed and unsigned types.
macro_rules! impl_common {
  ($int:ty, $signed:ty, $unsigned:ty, $wide:ty) => {
    type Signed = $signed;
    type Unsigned = $unsigned;
    type Wide = $wide;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = <$int>::MIN;
    const MAX: Self = <$int>::MAX;
    const BITS: u32 = <$int>::BITS;
    const SIGNED: bool = <$int>::MIN != 0;
    const DIGITS: u32 = <$int>::BITS - Self::SIGNED as u32;

    #[inline]
    fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

    #[inline]
    fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

    #[inline]
    fn wrapping_mul(self, other: Self) -> Self { self.wrapping_mul(other) }

    #[inline]
    fn wrapping_neg(self) -> Self { self.wrapping_neg() }

    #[inline]
    fn wrapping_div(self, other: Self) -> Self { self.wrapping_div(other) }

    #[inline]
    fn scale_up(self, n: u32) -> Self {
      if n >= Self::BITS { 0 } else { self << n }
    }

    #[inline]
    fn shl(self, n: u32) -> Self { self.wrapping_shl(n) }

    #[inline]
    fn shr(self, n: u32) -> Self { self.wrapping_shr(n) }

    #[inline]
    fn to_f64(self) -> f64 { self as f64 }

    #[inline]
    fn of_f64(x: f64) -> Self { x as $int }
  }
}

macro_rules! impl_signed {
  ($int:ty, $unsigned:ty, $wide:ty) => {
    impl Rep for $int {}
    impl Sealed for $int {
      impl_common!{$int, $int, $unsigned, $wide}

      #[inline]
      fn scale_down(self, n: u32) -> Self {
        if n >= Self::BITS { return 0 }
        // An arithmetic shift rounds toward -∞; adding `2^n - 1` to negative numbers beforehand
        // makes it round toward 0 instead, like a division would.
        let bias = (self >> (Self::BITS - 1)) & ((1 as $int).wrapping_shl(n).wrapping_sub(1));
        (self + bias) >> n
      }

      #[inline]
      fn is_negative(self) -> bool { self < 0 }

      #[inline]
      fn unsigned_abs128(self) -> u128 { self.unsigned_abs() as u128 }
    }
  }
}

macro_rules! impl_unsigned {
  ($int:ty, $signed:ty, $wide:ty) => {
    impl Rep for $int {}
    impl Sealed for $int {
      impl_common!{$int, $signed, $int, $wide}

      #[inline]
      fn scale_down(self, n: u32) -> Self {
        if n >= Self::BITS { 0 } else { self >> n }
      }

      #[inline]
      fn is_negative(self) -> bool { false }

      #[inline]
      fn unsigned_abs128(self) -> u128 { self as u128 }
    }
  }
}

impl_signed!{i8, u8, i16}
impl_signed!{i16, u16, i32}
impl_signed!{i32, u32, i64}
impl_signed!{i64, u64, i128}
impl_signed!{i128, u128, i128}

impl_unsigned!{u8, i8, u16}
impl_unsigned!{u16, i16, u32}
impl_unsigned!{u32, i32, u64}
impl_unsigned!{u64, i64, u128}
impl_unsigned!{u128, i128, u128}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn digits() {
    assert_eq!(<i8 as Sealed>::DIGITS, 7);
    assert_eq!(<u8 as Sealed>::DIGITS, 8);
    assert_eq!(<i128 as Sealed>::DIGITS, 127);
    assert_eq!(<u128 as Sealed>::DIGITS, 128);
    assert!(<i32 as Sealed>::SIGNED);
    assert!(!<u32 as Sealed>::SIGNED);
  }

  #[test]
  fn scale_up_out_of_range() {
    assert_eq!(Sealed::scale_up(1_i8, 7), i8::MIN);
    assert_eq!(Sealed::scale_up(1_i8, 8), 0);
    assert_eq!(Sealed::scale_up(u128::MAX, 128), 0);
    assert_eq!(Sealed::scale_up(3_u32, 4), 48);
  }

  #[test]
  fn scale_down_truncates_toward_zero() {
    assert_eq!(Sealed::scale_down(-1_i8, 1), 0);
    assert_eq!(Sealed::scale_down(-3_i8, 1), -1);
    assert_eq!(Sealed::scale_down(-128_i8, 7), -1);
    assert_eq!(Sealed::scale_down(-128_i8, 8), 0);
    assert_eq!(Sealed::scale_down(i128::MIN, 127), -1);
    assert_eq!(Sealed::scale_down(255_u8, 4), 15);
    assert_eq!(Sealed::scale_down(255_u8, 9), 0);
  }

  #[test]
  fn scale_down_exhaustive_i8() {
    for x in i8::MIN ..= i8::MAX {
      for n in 0 .. 8 {
        assert_eq!(Sealed::scale_down(x, n), (x as i32 / (1 << n)) as i8, "{x} / 2^{n}");
      }
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn scale_down_i64(x in any::<i64>(), n in 0 .. 64_u32) {
      prop_assert_eq!(Sealed::scale_down(x, n), (x as i128 / (1_i128 << n)) as i64);
    }

    #[test]
    fn scale_down_u64(x in any::<u64>(), n in 0 .. 64_u32) {
      prop_assert_eq!(Sealed::scale_down(x, n), x >> n);
    }

    #[test]
    fn unsigned_abs128_i32(x in any::<i32>()) {
      prop_assert_eq!(Sealed::unsigned_abs128(x), (x as i64).unsigned_abs() as u128);
    }
  }
}
