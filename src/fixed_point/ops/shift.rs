use super::*;

// The stored integer's own `shl` and `shr` are wrapping shifts; the operator traits are spelled
// out in full so that they don't shadow them.

impl<R: Rep, const E: i32> core::ops::Shl<u32> for FixedPoint<R, E> {
  type Output = FixedPoint<R, E>;

  /// Shift the stored integer left by `rhs` places, i.e. multiply by `2^rhs`, keeping the type.
  /// Bits shifted out of the top are lost. The shift amount is taken modulo the bit width.
  #[inline]
  fn shl(self, rhs: u32) -> Self::Output {
    Self(self.0.shl(rhs))
  }
}

impl<R: Rep, const E: i32> core::ops::Shr<u32> for FixedPoint<R, E> {
  type Output = FixedPoint<R, E>;

  /// Shift the stored integer right by `rhs` places, i.e. divide by `2^rhs`, rounding toward minus
  /// infinity (an arithmetic shift, for signed reps).
  #[inline]
  fn shr(self, rhs: u32) -> Self::Output {
    Self(self.0.shr(rhs))
  }
}

impl<R: Rep, const E: i32> core::ops::ShlAssign<u32> for FixedPoint<R, E> {
  #[inline]
  fn shl_assign(&mut self, rhs: u32) { *self = *self << rhs }
}

impl<R: Rep, const E: i32> core::ops::ShrAssign<u32> for FixedPoint<R, E> {
  #[inline]
  fn shr_assign(&mut self, rhs: u32) { *self = *self >> rhs }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shl() {
    let a = FixedPoint::<i16, -4>::from_data(0x18);  // 1.5
    assert!(a << 2 == 6);
    assert_eq!((a << 12).data(), -0x8000);
  }

  #[test]
  fn shr() {
    let a = FixedPoint::<i16, -4>::from_data(-0x18);  // -1.5
    assert!(a >> 1 == -0.75);
    assert!(a >> 4 == -0.125);  // -3/32 rounded down to the scale
    let mut b = FixedPoint::<u8, 0>::from_data(0xff);
    b >>= 4;
    assert_eq!(b.data(), 0xf);
    b <<= 1;
    assert_eq!(b.data(), 0x1e);
  }
}
