//! Capacity deduction for [`Elastic`](crate::Elastic) arithmetic: given the capacities of the
//! operands, the capacity that the result needs so that it can hold every possible result.
//!
//! These are `const fn`s over [`Capacity`] values, like the [`policy`](crate::policy) functions
//! for [`FixedPoint`](crate::FixedPoint). The arithmetic methods on `Elastic` check at compile
//! time that the requested result type [`admits`] the deduced capacity.
//!
//! ```
//! # use elastic_fixed::deduce::{self, Capacity};
//! let a = Capacity { integer_digits: 4, fractional_digits: 4, signed: false };
//! let b = Capacity { integer_digits: 3, fractional_digits: 4, signed: true };
//! assert_eq!(deduce::add(a, b), Capacity { integer_digits: 5, fractional_digits: 4, signed: true });
//! assert_eq!(deduce::divide(a, b), Capacity { integer_digits: 8, fractional_digits: 8, signed: true });
//! ```

use crate::Rep;

/// The declared digits of an elastic type, and whether it can hold negative values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capacity {
  pub integer_digits: i32,
  pub fractional_digits: i32,
  pub signed: bool,
}

impl Capacity {
  /// The capacity of `Elastic<I, F, R>`.
  pub const fn of<const I: i32, const F: i32, R: Rep>() -> Self {
    Self { integer_digits: I, fractional_digits: F, signed: R::SIGNED }
  }

  /// The smallest capacity that holds the integer `value` exactly: as many integer digits as the
  /// magnitude of `value` has bits (but at least 1), and minus as many fractional digits as it has
  /// trailing zeros. Signed if `value` is negative.
  ///
  /// ```
  /// # use elastic_fixed::deduce::Capacity;
  /// let c = Capacity::of_literal(1024);
  /// assert_eq!((c.integer_digits, c.fractional_digits, c.signed), (11, -10, false));
  /// assert_eq!(c.digits(), 1);
  /// ```
  pub const fn of_literal(value: i128) -> Self {
    let magnitude = value.unsigned_abs();
    let bits = (u128::BITS - magnitude.leading_zeros()) as i32;
    Self {
      integer_digits: if bits > 1 { bits } else { 1 },
      fractional_digits: if value == 0 { 0 } else { -(magnitude.trailing_zeros() as i32) },
      signed: value < 0,
    }
  }

  /// Total number of digits.
  pub const fn digits(self) -> i32 {
    self.integer_digits + self.fractional_digits
  }

  /// The number of bits of storage needed for this capacity: its digits plus a sign bit if it's
  /// signed, and no fewer than `min_width`. Panics (at compile time, when used in a type) if the
  /// number of digits is negative.
  pub const fn storage_bits(self, min_width: u32) -> u32 {
    let digits = self.digits();
    assert!(digits >= 0, "the number of digits must not be negative");
    let bits = digits as u32 + self.signed as u32;
    if bits > min_width { bits } else { min_width }
  }
}

const fn max(a: i32, b: i32) -> i32 {
  if a > b { a } else { b }
}

/// Negation: the same digits, but always signed.
pub const fn negate(operand: Capacity) -> Capacity {
  Capacity { signed: true, ..operand }
}

/// Addition: one more integer digit than the larger operand (for the carry), as many fractional
/// digits as the finer operand. Signed if either operand is.
pub const fn add(lhs: Capacity, rhs: Capacity) -> Capacity {
  Capacity {
    integer_digits: max(lhs.integer_digits, rhs.integer_digits) + 1,
    fractional_digits: max(lhs.fractional_digits, rhs.fractional_digits),
    signed: lhs.signed || rhs.signed,
  }
}

/// Subtraction: as [`add`], but always signed.
pub const fn subtract(lhs: Capacity, rhs: Capacity) -> Capacity {
  Capacity { signed: true, ..add(lhs, rhs) }
}

/// Multiplication: the digits of the operands add up.
pub const fn multiply(lhs: Capacity, rhs: Capacity) -> Capacity {
  Capacity {
    integer_digits: lhs.integer_digits + rhs.integer_digits,
    fractional_digits: lhs.fractional_digits + rhs.fractional_digits,
    signed: lhs.signed || rhs.signed,
  }
}

/// Division. The largest quotient is the largest dividend over the smallest positive divisor,
/// `2^rhs.fractional_digits`, so it needs `lhs.integer_digits + rhs.fractional_digits` integer
/// digits; and `lhs.fractional_digits + rhs.integer_digits + 1` fractional digits.
pub const fn divide(lhs: Capacity, rhs: Capacity) -> Capacity {
  Capacity {
    integer_digits: lhs.integer_digits + rhs.fractional_digits,
    fractional_digits: lhs.fractional_digits + rhs.integer_digits + 1,
    signed: lhs.signed || rhs.signed,
  }
}

/// Whether a result of capacity `target` can hold every value of capacity `needed`: at least as
/// many integer and fractional digits, and signed if `needed` is.
pub const fn admits(target: Capacity, needed: Capacity) -> bool {
  target.integer_digits >= needed.integer_digits
    && target.fractional_digits >= needed.fractional_digits
    && (target.signed || !needed.signed)
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  const fn c(integer_digits: i32, fractional_digits: i32, signed: bool) -> Capacity {
    Capacity { integer_digits, fractional_digits, signed }
  }

  #[test]
  fn of() {
    assert_eq!(Capacity::of::<7, 8, i16>(), c(7, 8, true));
    assert_eq!(Capacity::of::<12, -8, u8>(), c(12, -8, false));
  }

  #[test]
  fn of_literal() {
    assert_eq!(Capacity::of_literal(0), c(1, 0, false));
    assert_eq!(Capacity::of_literal(1), c(1, 0, false));
    assert_eq!(Capacity::of_literal(2), c(2, -1, false));
    assert_eq!(Capacity::of_literal(-1), c(1, 0, true));
    assert_eq!(Capacity::of_literal(-6), c(3, -1, true));
    assert_eq!(Capacity::of_literal(255), c(8, 0, false));
    assert_eq!(Capacity::of_literal(i128::MIN), c(128, -127, true));
  }

  #[test]
  fn storage_bits() {
    assert_eq!(Capacity::of_literal(1024).storage_bits(8), 8);
    assert_eq!(c(7, 8, true).storage_bits(8), 16);
    assert_eq!(c(7, 8, false).storage_bits(32), 32);
    assert_eq!(c(0, 0, false).storage_bits(0), 0);
  }

  #[test]
  fn rules() {
    let a = c(4, 4, false);
    let b = c(3, 4, true);
    assert_eq!(negate(a), c(4, 4, true));
    assert_eq!(add(a, a), c(5, 4, false));
    assert_eq!(add(a, b), c(5, 4, true));
    assert_eq!(subtract(a, a), c(5, 4, true));
    assert_eq!(multiply(a, b), c(7, 8, true));
    assert_eq!(divide(a, b), c(8, 8, true));
    assert_eq!(divide(b, a), c(7, 9, true));
  }

  #[test]
  fn admits_rules() {
    assert!(admits(c(5, 4, true), c(5, 4, true)));
    assert!(admits(c(6, 5, true), c(5, 4, false)));
    assert!(!admits(c(5, 4, false), c(5, 4, true)));
    assert!(!admits(c(4, 4, true), c(5, 4, true)));
    assert!(!admits(c(5, 3, true), c(5, 4, true)));
  }

  fn capacities() -> impl Strategy<Value = Capacity> {
    (-20 .. 40_i32, -20 .. 40_i32, any::<bool>()).prop_map(|(i, f, s)| c(i, f, s))
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn results_admit_operands(a in capacities(), b in capacities()) {
      // The sum and difference can hold either operand as is
      prop_assert!(admits(add(a, b), a));
      prop_assert!(admits(subtract(a, b), b));
      prop_assert!(admits(negate(a), a));
    }

    #[test]
    fn commutative(a in capacities(), b in capacities()) {
      prop_assert_eq!(add(a, b), add(b, a));
      prop_assert_eq!(multiply(a, b), multiply(b, a));
    }
  }
}
