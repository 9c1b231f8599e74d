//! Export some monomorphic instances of the arithmetic for inspection with `cargo asm`; available
//! with feature = "bench".

use crate::{Elastic, FixedPoint, named};

type Q8 = FixedPoint<i16, -8>;
type Q16 = FixedPoint<i32, -16>;
type Q32 = FixedPoint<i64, -32>;
type UQ16 = FixedPoint<u32, -16>;

#[unsafe(no_mangle)]
pub fn add_q16(x: Q16, y: Q16) -> Q16 {
  x + y
}

#[unsafe(no_mangle)]
pub fn sub_q16(x: Q16, y: Q16) -> Q16 {
  x - y
}

//

#[unsafe(no_mangle)]
pub fn mul_q8(x: Q8, y: Q8) -> Q8 {
  x * y
}

#[unsafe(no_mangle)]
pub fn mul_q16(x: Q16, y: Q16) -> Q16 {
  x * y
}

#[unsafe(no_mangle)]
pub fn mul_uq16(x: UQ16, y: UQ16) -> UQ16 {
  x * y
}

#[unsafe(no_mangle)]
pub fn mul_q32(x: Q32, y: Q32) -> Q32 {
  x * y
}

//

#[unsafe(no_mangle)]
pub fn div_q8(x: Q8, y: Q8) -> Q8 {
  x / y
}

#[unsafe(no_mangle)]
pub fn div_q16(x: Q16, y: Q16) -> Q16 {
  x / y
}

#[unsafe(no_mangle)]
pub fn div_q32(x: Q32, y: Q32) -> Q32 {
  x / y
}

//

#[unsafe(no_mangle)]
pub fn named_multiply_q16_q8(x: Q16, y: Q8) -> Q32 {
  named::multiply(x, y)
}

#[unsafe(no_mangle)]
pub fn named_divide_q16_q8(x: Q16, y: Q8) -> Q32 {
  named::divide(x, y)
}

//

#[unsafe(no_mangle)]
pub fn elastic_add_mixed(x: Elastic<15, 16, i32>, y: Elastic<16, 16, u32>) -> Elastic<17, 16, i64> {
  x.add(y)
}

#[unsafe(no_mangle)]
pub fn elastic_mul_mixed(x: Elastic<15, 16, i32>, y: Elastic<16, 16, u32>) -> Elastic<31, 32, i64> {
  x.mul(y)
}

#[unsafe(no_mangle)]
pub fn elastic_div_mixed(x: Elastic<15, 16, i32>, y: Elastic<16, 16, u32>) -> Elastic<31, 33, i128> {
  x.div(y)
}
