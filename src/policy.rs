//! Result-type deduction: given the descriptors of the operands of an arithmetic operation,
//! compute the descriptor of its result, and of the intermediate types the operands are converted
//! to before the raw integer operation is performed.
//!
//! Everything here is a `const fn` over plain [`Descriptor`] values, so that the same rules can be
//! evaluated at compile time (the operators on [`FixedPoint`](crate::FixedPoint) assert on them in
//! `const` blocks) or at run time (in tests, or to explore what a combination of types would
//! produce).
//!
//! A deduction fails (returns `None`) only when no native integer is wide enough for an
//! intermediate type.
//!
//! ```
//! # use elastic_fixed::policy::{self, Descriptor};
//! let a = Descriptor::of::<u8>(-4);   // 4 integer digits, 4 fractional digits
//! let b = Descriptor::of::<i16>(-8);  // 7 integer digits, 8 fractional digits
//! let d = policy::multiply(a, b).unwrap();
//! assert_eq!(d.result, Descriptor { width: 16, signed: true, exponent: -8 });
//! // The product of the raw integers has exponent -12, finer than the result's -8, so the
//! // operands are widened first so that no bits are lost before the product is rescaled.
//! assert_eq!(d.lhs, Descriptor { width: 32, signed: true, exponent: -4 });
//! ```

use crate::Rep;
use crate::width::{Family, first_fit};

/// The compile-time shape of a fixed-point type: storage width, signedness, and exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
  pub width: u32,
  pub signed: bool,
  pub exponent: i32,
}

/// The outcome of deducing a binary operation: the result type, and the intermediate types that
/// the left and right operands are converted to before operating on their raw integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Deduction {
  pub result: Descriptor,
  pub lhs: Descriptor,
  pub rhs: Descriptor,
}

impl Descriptor {
  /// The descriptor of a fixed-point type stored in `R` with the given `exponent`.
  pub const fn of<R: Rep>(exponent: i32) -> Self {
    Self { width: R::BITS, signed: R::SIGNED, exponent }
  }

  /// Number of value bits (i.e. not counting the sign bit).
  pub const fn digits(self) -> i32 {
    self.width as i32 - self.signed as i32
  }

  pub const fn integer_digits(self) -> i32 {
    self.digits() + self.exponent
  }

  pub const fn fractional_digits(self) -> i32 {
    -self.exponent
  }

  /// Same type, but a different exponent.
  const fn with_exponent(self, exponent: i32) -> Self {
    Self { exponent, ..self }
  }

  /// Same signedness and exponent, but a different width.
  const fn with_width(self, width: u32) -> Self {
    Self { width, ..self }
  }
}

/// The exponent shared by the result of a binary operation. If one operand has strictly more
/// integer digits its exponent wins, so that the larger of the two ranges is kept; otherwise the
/// larger exponent wins.
pub const fn common_exponent(lhs: Descriptor, rhs: Descriptor) -> i32 {
  let (li, ri) = (lhs.integer_digits(), rhs.integer_digits());
  if li > ri {
    lhs.exponent
  } else if ri > li {
    rhs.exponent
  } else if lhs.exponent > rhs.exponent {
    lhs.exponent
  } else {
    rhs.exponent
  }
}

/// The integer type that a native operation on `lhs` and `rhs` yields: the narrowest native
/// integer that can represent every value of both, signed if either is. There is nothing wider
/// than 128 bits, so a combination like `u128` with `i8` yields `i128` and gives up the top bit.
///
/// The exponent of the returned descriptor is not meaningful (it is 0).
pub const fn arithmetic_rep(lhs: Descriptor, rhs: Descriptor) -> Descriptor {
  let signed = lhs.signed || rhs.signed;
  let bits = max(bits_to_hold(lhs, signed), bits_to_hold(rhs, signed));
  let width = match first_fit(bits, Family::integer(signed)) {
    Some(native) => native.bits(),
    None => 128,
  };
  Descriptor { width, signed, exponent: 0 }
}

/// The width of the result of unary minus: the same width if `d` is signed, otherwise the
/// narrowest signed type that holds every value of `d` (capped at 128 bits).
const fn negated_width(d: Descriptor) -> u32 {
  if d.signed {
    d.width
  } else {
    match first_fit(d.width + 1, Family::Signed) {
      Some(native) => native.bits(),
      None => 128,
    }
  }
}

/// Negating a value always yields a signed type with the same exponent.
pub const fn negate(operand: Descriptor) -> Descriptor {
  Descriptor { width: negated_width(operand), signed: true, exponent: operand.exponent }
}

/// Addition: both operands are converted to the result type, then added.
pub const fn add(lhs: Descriptor, rhs: Descriptor) -> Option<Deduction> {
  let result = arithmetic_rep(lhs, rhs).with_exponent(common_exponent(lhs, rhs));
  Some(Deduction { result, lhs: result, rhs: result })
}

/// Subtraction: same as [`add`].
pub const fn subtract(lhs: Descriptor, rhs: Descriptor) -> Option<Deduction> {
  add(lhs, rhs)
}

/// Multiplication. The raw product of the operands has exponent `lhs.exponent + rhs.exponent`.
/// If that is finer than the result exponent, the product has to be shifted down afterwards, and
/// the bits above the result type's width would be lost before that; so in that case the
/// operands are converted to a type wide enough for the whole product (keeping their exponents)
/// before multiplying.
pub const fn multiply(lhs: Descriptor, rhs: Descriptor) -> Option<Deduction> {
  let rep = arithmetic_rep(lhs, rhs);
  let result = rep.with_exponent(common_exponent(lhs, rhs));
  let width =
    if lhs.exponent + rhs.exponent < result.exponent {
      match first_fit(lhs.width + rhs.width, Family::integer(rep.signed)) {
        Some(native) => max(native.bits(), rep.width),
        None => return None,
      }
    } else {
      rep.width
    };
  Some(Deduction {
    result,
    lhs: rep.with_width(width).with_exponent(lhs.exponent),
    rhs: rep.with_width(width).with_exponent(rhs.exponent),
  })
}

/// Division. The raw quotient of the operands has exponent `lhs.exponent - rhs.exponent`. To land
/// on the result exponent directly, the dividend is first rescaled to exponent `result.exponent +
/// rhs.exponent`; if that means shifting it left, it is first converted to a type with enough
/// extra width to hold the shifted-in bits.
pub const fn divide(lhs: Descriptor, rhs: Descriptor) -> Option<Deduction> {
  let rep = arithmetic_rep(lhs, rhs);
  let result = rep.with_exponent(common_exponent(lhs, rhs));
  let dividend_exponent = result.exponent + rhs.exponent;
  let scale = lhs.exponent - dividend_exponent;
  let width =
    if scale > 0 {
      match first_fit(lhs.width + scale as u32, Family::integer(rep.signed)) {
        Some(native) => max(native.bits(), rep.width),
        None => return None,
      }
    } else {
      rep.width
    };
  Some(Deduction {
    result,
    lhs: rep.with_width(width).with_exponent(dividend_exponent),
    rhs: rep.with_width(width).with_exponent(rhs.exponent),
  })
}

/// The type of `1 / x`, for a divisor with `divisor_digits` digits, computed with a dividend of
/// type `dividend`: 1 integer digit and `dividend_digits + divisor_digits - 1` fractional digits,
/// with the signedness of `dividend` (the same as [`make_fixed!`](crate::make_fixed) would pick).
pub const fn reciprocal(dividend: Descriptor, divisor_digits: i32) -> Option<Descriptor> {
  let fractional_digits = dividend.digits() + divisor_digits - 1;
  let digits = 1 + fractional_digits;
  if digits < 0 {
    return None
  }
  let bits = digits as u32 + dividend.signed as u32;
  match first_fit(bits, Family::integer(dividend.signed)) {
    Some(native) => Some(Descriptor {
      width: native.bits(),
      signed: dividend.signed,
      exponent: -fractional_digits,
    }),
    None => None,
  }
}

/// Number of bits a type with the given signedness needs to hold every value of `d`.
const fn bits_to_hold(d: Descriptor, signed: bool) -> u32 {
  if signed && !d.signed { d.width + 1 } else { d.width }
}

const fn max(a: u32, b: u32) -> u32 {
  if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  const fn d(width: u32, signed: bool, exponent: i32) -> Descriptor {
    Descriptor { width, signed, exponent }
  }

  #[test]
  fn digit_counts() {
    let a = Descriptor::of::<i32>(-16);
    assert_eq!(a.digits(), 31);
    assert_eq!(a.integer_digits(), 15);
    assert_eq!(a.fractional_digits(), 16);
    let b = Descriptor::of::<u8>(4);
    assert_eq!(b.integer_digits(), 12);
    assert_eq!(b.fractional_digits(), -4);
  }

  #[test]
  fn common_exponent_prefers_integer_digits() {
    // 15 integer digits beats 7 integer digits
    assert_eq!(common_exponent(d(32, true, -16), d(8, true, 0)), -16);
    assert_eq!(common_exponent(d(8, true, 0), d(32, true, -16)), -16);
    // Tie on integer digits: the larger exponent
    assert_eq!(common_exponent(d(16, false, -8), d(8, false, 0)), 0);
    assert_eq!(common_exponent(d(32, true, -5), d(32, true, -5)), -5);
  }

  #[test]
  fn arithmetic_rep_promotion() {
    assert_eq!(arithmetic_rep(d(8, true, 0), d(8, true, 0)).width, 8);
    assert_eq!(arithmetic_rep(d(8, false, 0), d(32, false, 0)).width, 32);
    assert_eq!(arithmetic_rep(d(8, false, 0), d(8, true, 0)), d(16, true, 0));
    assert_eq!(arithmetic_rep(d(32, false, 0), d(64, true, 0)), d(64, true, 0));
    assert_eq!(arithmetic_rep(d(64, false, 0), d(64, true, 0)), d(128, true, 0));
    assert_eq!(arithmetic_rep(d(128, false, 0), d(8, true, 0)), d(128, true, 0));
  }

  #[test]
  fn negate_is_signed() {
    assert_eq!(negate(d(8, true, -3)), d(8, true, -3));
    assert_eq!(negate(d(8, false, -3)), d(16, true, -3));
    assert_eq!(negate(d(128, false, 2)), d(128, true, 2));
  }

  #[test]
  fn add_subtract() {
    let r = add(d(32, true, -16), d(8, true, 0)).unwrap();
    assert_eq!(r.result, d(32, true, -16));
    assert_eq!(r.lhs, r.result);
    assert_eq!(r.rhs, r.result);
    assert_eq!(subtract(d(8, false, -4), d(8, false, -4)).unwrap().result, d(8, false, -4));
  }

  #[test]
  fn multiply_widens_when_product_is_finer() {
    let r = multiply(d(32, true, -16), d(32, true, -16)).unwrap();
    assert_eq!(r.result, d(32, true, -16));
    assert_eq!(r.lhs, d(64, true, -16));
    assert_eq!(r.rhs, d(64, true, -16));

    // Integer operands: nothing to lose
    let r = multiply(d(32, true, 0), d(32, true, 0)).unwrap();
    assert_eq!(r.lhs, d(32, true, 0));

    // Positive exponents: the product is coarser, it's shifted up
    let r = multiply(d(16, false, 3), d(16, false, 3)).unwrap();
    assert_eq!(r.lhs.width, 16);

    assert_eq!(multiply(d(128, true, -1), d(128, true, -1)), None);
    assert!(multiply(d(128, true, 0), d(128, true, 0)).is_some());
  }

  #[test]
  fn divide_widens_dividend() {
    let r = divide(d(32, true, -16), d(32, true, -16)).unwrap();
    assert_eq!(r.result, d(32, true, -16));
    assert_eq!(r.lhs, d(64, true, -32));
    assert_eq!(r.rhs, d(64, true, -16));

    let r = divide(d(32, true, 0), d(32, true, 0)).unwrap();
    assert_eq!(r.lhs, d(32, true, 0));

    // The dividend is shifted right, so it needs no extra width
    let r = divide(d(32, true, 4), d(32, true, 4)).unwrap();
    assert_eq!(r.lhs, d(32, true, 8));

    assert_eq!(divide(d(64, true, -100), d(64, true, -100)), None);
  }

  #[test]
  fn reciprocal_type() {
    // 1/x for x with 7 digits, computed in an i8: 1 integer digit, 7+7-1 fractional digits
    assert_eq!(reciprocal(d(8, true, 0), 7), Some(d(16, true, -13)));
    assert_eq!(reciprocal(d(8, false, 0), 8), Some(d(16, false, -15)));
    assert_eq!(reciprocal(d(128, false, 0), 128), None);
  }

  fn descriptors() -> impl Strategy<Value = Descriptor> {
    (
      prop::sample::select(&[8_u32, 16, 32, 64, 128][..]),
      any::<bool>(),
      -40 .. 40_i32,
    ).prop_map(|(width, signed, exponent)| d(width, signed, exponent))
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn result_holds_both_operands(a in descriptors(), b in descriptors()) {
      let rep = arithmetic_rep(a, b);
      prop_assert!(rep.digits() >= a.digits().min(127));
      prop_assert!(rep.digits() >= b.digits().min(127));
      prop_assert_eq!(rep.signed, a.signed || b.signed);
    }

    #[test]
    fn common_exponent_is_one_of_them(a in descriptors(), b in descriptors()) {
      let e = common_exponent(a, b);
      prop_assert!(e == a.exponent || e == b.exponent);
      prop_assert_eq!(e, common_exponent(b, a));
    }

    #[test]
    fn multiply_intermediate_holds_product(a in descriptors(), b in descriptors()) {
      if let Some(r) = multiply(a, b) {
        prop_assert!(r.lhs.width >= r.result.width);
        if a.exponent + b.exponent < r.result.exponent {
          prop_assert!(r.lhs.width >= a.width + b.width);
        }
      } else {
        prop_assert!(a.width + b.width > 128);
      }
    }
  }
}
