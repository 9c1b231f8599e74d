//! Arithmetic with an explicit result type.
//!
//! Each function here takes its operands as [`FixedPoint`] values of any reps and exponents, and
//! produces the [`FixedPoint`] type that the caller asks for (usually through a type annotation):
//!
//! ```
//! # use elastic_fixed::{FixedPoint, named};
//! let a = FixedPoint::<u8, -4>::from_data(0xff);  // 15.9375
//! let b: FixedPoint<u16, -8> = named::multiply(a, a);
//! assert!(b == 254.00390625);  // exact
//! ```
//!
//! All of them follow the same pattern: convert each operand's stored integer to an intermediate
//! type, at a scale chosen so that the raw integer operation lands on a known exponent; perform
//! the raw operation; then shift the raw result to the target exponent and store it without any
//! further scaling. Nothing is narrowed implicitly along the way; the only loss of information is
//! in the final rescale to the target type (truncation toward zero, and wrapping if the result
//! doesn't fit).
//!
//! The operators on [`FixedPoint`] (`+`, `*`, etc) are thin wrappers around these same kernels,
//! with the target type being the type of the operands.

use crate::{FixedPoint, Rep, shift_left, shift_right};
use crate::underlying::{Sealed, const_as};

/// Kernel for addition: both operands are converted to `O` at the target exponent, then added
/// (wrapping).
#[inline]
pub(crate) fn add_kernel<O: Rep, L: Rep, R: Rep>(l: L, le: i32, r: R, re: i32, out: i32) -> O {
  shift_right::<O, L>(l, out - le).wrapping_add(shift_right::<O, R>(r, out - re))
}

/// Kernel for subtraction; see [`add_kernel`].
#[inline]
pub(crate) fn subtract_kernel<O: Rep, L: Rep, R: Rep>(l: L, le: i32, r: R, re: i32, out: i32) -> O {
  shift_right::<O, L>(l, out - le).wrapping_sub(shift_right::<O, R>(r, out - re))
}

/// Kernel for negation: the operand is converted to `O` at the target exponent, then negated
/// (wrapping).
#[inline]
pub(crate) fn negate_kernel<O: Rep, A: Rep>(a: A, ae: i32, out: i32) -> O {
  shift_right::<O, A>(a, out - ae).wrapping_neg()
}

/// Run `$kernel` with an intermediate type wide enough for the raw product (or shifted dividend)
/// of the operands.
///
/// If neither operand is wider than the output `O`, that's `O::Wide`, with the signedness of the
/// operands: a product of two unsigned integers of width `w` needs all `2w` bits, but as soon as
/// either operand is signed the product fits in a signed `2w`-bit integer. Otherwise fall back to
/// the 128-bit integers. [`intermediate`] has the width and signedness picked here.
macro_rules! with_intermediate {
  ($kernel:ident::<$o:ident, $l:ident, $r:ident>($($arg:expr),* $(,)?)) => {
    if const { $l::BITS <= $o::BITS && $r::BITS <= $o::BITS } {
      if const { $l::SIGNED || $r::SIGNED } {
        $kernel::<<$o::Wide as Sealed>::Signed, $o, $l, $r>($($arg),*)
      } else {
        $kernel::<<$o::Wide as Sealed>::Unsigned, $o, $l, $r>($($arg),*)
      }
    } else if const { $l::SIGNED || $r::SIGNED } {
      $kernel::<i128, $o, $l, $r>($($arg),*)
    } else {
      $kernel::<u128, $o, $l, $r>($($arg),*)
    }
  }
}

/// Width and signedness of the intermediate type that [`multiply_kernel`] (or, if `dividing`,
/// [`divide_kernel`]) uses for operands `L` and `R` and output `O`.
const fn intermediate<O: Rep, L: Rep, R: Rep>(dividing: bool) -> (u32, bool) {
  let signed = L::SIGNED || R::SIGNED;
  if L::BITS <= O::BITS && R::BITS <= O::BITS {
    let wide = <O::Wide as Sealed>::BITS;
    if dividing && mixed_quotient::<L, R>() && wide < 128 { (2 * wide, signed) } else { (wide, signed) }
  } else {
    (128, signed)
  }
}

/// A signed dividend over an unsigned divisor of width `w`: a quotient that fits in `w` bits times
/// the divisor can take all `2w` bits, and the dividend needs a sign bit on top of that.
const fn mixed_quotient<L: Rep, R: Rep>() -> bool {
  L::SIGNED && !R::SIGNED
}

/// Whether the raw product of an `L` at exponent `le` and an `R` at exponent `re` is formed in full
/// before it's rescaled to exponent `out` in an `O`. Only a product that is shifted down needs
/// every bit: shifting up (or not at all) just drops the bits that `O` can't hold anyway.
pub(crate) const fn multiply_fits<O: Rep, L: Rep, R: Rep>(le: i32, re: i32, out: i32) -> bool {
  let (bits, _) = intermediate::<O, L, R>(false);
  out as i64 <= le as i64 + re as i64 || L::BITS + R::BITS <= bits
}

/// Whether an `L` at exponent `le`, shifted so that its quotient by an `R` at exponent `re` lands
/// on exponent `out` in an `O`, fits in the intermediate type; and so does the `R`.
pub(crate) const fn divide_fits<O: Rep, L: Rep, R: Rep>(le: i32, re: i32, out: i32) -> bool {
  let (bits, signed) = intermediate::<O, L, R>(true);
  let shift = le as i64 - re as i64 - out as i64;
  let extra = if shift > 0 { shift } else { 0 };
  let dividend = L::BITS as i64 + (signed && !L::SIGNED) as i64 + extra;
  let divisor = R::BITS + (signed && !R::SIGNED) as u32;
  dividend <= bits as i64 && divisor <= bits
}

#[inline]
fn product_in<I: Rep, O: Rep, L: Rep, R: Rep>(l: L, le: i32, r: R, re: i32, out: i32) -> O {
  let product = const_as::<L, I>(l).wrapping_mul(const_as::<R, I>(r));
  shift_right::<O, I>(product, out - (le + re))
}

#[inline]
fn quotient_in<I: Rep, O: Rep, L: Rep, R: Rep>(l: L, le: i32, r: R, re: i32, out: i32) -> O {
  // `l × 2^le / (r × 2^re)` has exponent `le - re`; pre-shifting the dividend left by
  // `le - re - out` makes the raw quotient land on exponent `out`.
  let dividend = shift_left::<I, L>(l, le - re - out);
  const_as::<I, O>(dividend.wrapping_div(const_as::<R, I>(r)))
}

/// Kernel for multiplication: the raw product of the operands has exponent `le + re`, and is
/// computed in an intermediate type that holds it in full, then shifted to the target exponent.
///
/// Callers check [`multiply_fits`] at compile time.
#[inline]
pub(crate) fn multiply_kernel<O: Rep, L: Rep, R: Rep>(l: L, le: i32, r: R, re: i32, out: i32) -> O {
  with_intermediate!(product_in::<O, L, R>(l, le, r, re, out))
}

/// Kernel for division: the dividend is shifted in an intermediate type so that the raw quotient
/// lands directly on the target exponent, truncated toward zero. Panics if `r` is zero.
///
/// Callers check [`divide_fits`] at compile time.
#[inline]
pub(crate) fn divide_kernel<O: Rep, L: Rep, R: Rep>(l: L, le: i32, r: R, re: i32, out: i32) -> O {
  if const { mixed_quotient::<L, R>() && L::BITS <= O::BITS && R::BITS <= O::BITS } {
    quotient_in::<<<O::Wide as Sealed>::Wide as Sealed>::Signed, O, L, R>(l, le, r, re, out)
  } else {
    with_intermediate!(quotient_in::<O, L, R>(l, le, r, re, out))
  }
}

/// Fails to compile unless the product of the operands has room in the intermediate type.
macro_rules! assert_multiply_fits {
  ($o:ty, $l:ty, $r:ty, $le:expr, $re:expr, $out:expr) => {
    const {
      assert!(
        $crate::named::multiply_fits::<$o, $l, $r>($le, $re, $out),
        "the product of these fixed-point numbers does not fit in any native integer",
      )
    }
  };
}

/// Fails to compile unless the shifted dividend has room in the intermediate type.
macro_rules! assert_divide_fits {
  ($o:ty, $l:ty, $r:ty, $le:expr, $re:expr, $out:expr) => {
    const {
      assert!(
        $crate::named::divide_fits::<$o, $l, $r>($le, $re, $out),
        "the shifted dividend of these fixed-point numbers does not fit in any native integer",
      )
    }
  };
}

pub(crate) use {assert_multiply_fits, assert_divide_fits};

/// `-operand`, as the fixed-point type `FixedPoint<O, OE>`.
///
/// ```
/// # use elastic_fixed::{FixedPoint, named};
/// let x = FixedPoint::<u8, 0>::from_data(200);
/// let y: FixedPoint<i16, 0> = named::negate(x);
/// assert!(y == -200);
/// ```
#[inline]
pub fn negate<
  O: Rep,
  const OE: i32,
  A: Rep,
  const AE: i32,
>(operand: FixedPoint<A, AE>) -> FixedPoint<O, OE> {
  FixedPoint::from_data(negate_kernel::<O, A>(operand.data(), AE, OE))
}

/// `lhs + rhs`, as the fixed-point type `FixedPoint<O, OE>`.
///
/// ```
/// # use elastic_fixed::{FixedPoint, named};
/// let a = FixedPoint::<i8, 32>::from_data(0x7f);
/// let b = FixedPoint::<i8, 0>::from_data(0x7f);
/// let c: FixedPoint<i64, 0> = named::add(a, b);
/// assert_eq!(c.data(), 0x7f_0000_007f);
/// ```
#[inline]
pub fn add<
  O: Rep,
  const OE: i32,
  L: Rep,
  const LE: i32,
  R: Rep,
  const RE: i32,
>(lhs: FixedPoint<L, LE>, rhs: FixedPoint<R, RE>) -> FixedPoint<O, OE> {
  FixedPoint::from_data(add_kernel::<O, L, R>(lhs.data(), LE, rhs.data(), RE, OE))
}

/// `lhs - rhs`, as the fixed-point type `FixedPoint<O, OE>`.
///
/// ```
/// # use elastic_fixed::{FixedPoint, named};
/// let a = FixedPoint::<u8, -4>::from_data(0x10);  // 1
/// let b = FixedPoint::<u8, -4>::from_data(0x18);  // 1.5
/// let c: FixedPoint<i8, -4> = named::subtract(a, b);
/// assert!(c == -0.5);
/// ```
#[inline]
pub fn subtract<
  O: Rep,
  const OE: i32,
  L: Rep,
  const LE: i32,
  R: Rep,
  const RE: i32,
>(lhs: FixedPoint<L, LE>, rhs: FixedPoint<R, RE>) -> FixedPoint<O, OE> {
  FixedPoint::from_data(subtract_kernel::<O, L, R>(lhs.data(), LE, rhs.data(), RE, OE))
}

/// `lhs × rhs`, as the fixed-point type `FixedPoint<O, OE>`. The product is formed in full before
/// it's rescaled, so with a target exponent of `LE + RE` (and a wide enough `O`) it is exact.
///
/// ```
/// # use elastic_fixed::{FixedPoint, named};
/// let a = FixedPoint::<i32, -16>::from_data(3 << 15);  // 1.5
/// let b = FixedPoint::<i32, -16>::from_data(-5 << 14);  // -1.25
/// let c: FixedPoint<i64, -32> = named::multiply(a, b);
/// assert!(c == -1.875);
/// let d: FixedPoint<i8, 0> = named::multiply(a, b);
/// assert!(d == -1);
/// ```
#[inline]
pub fn multiply<
  O: Rep,
  const OE: i32,
  L: Rep,
  const LE: i32,
  R: Rep,
  const RE: i32,
>(lhs: FixedPoint<L, LE>, rhs: FixedPoint<R, RE>) -> FixedPoint<O, OE> {
  assert_multiply_fits!(O, L, R, LE, RE, OE);
  FixedPoint::from_data(multiply_kernel::<O, L, R>(lhs.data(), LE, rhs.data(), RE, OE))
}

/// `lhs ÷ rhs`, as the fixed-point type `FixedPoint<O, OE>`, truncated toward zero.
///
/// # Panics
///
/// If `rhs` is zero, like integer division.
///
/// ```
/// # use elastic_fixed::{FixedPoint, make_fixed, named};
/// let a = <make_fixed!(7, 0)>::from_int(15);
/// let b = <make_fixed!(7, 0)>::from_int(2);
/// let c: FixedPoint<i32, -7> = named::divide(a, b);
/// assert!(c == 7.5);
/// ```
#[inline]
pub fn divide<
  O: Rep,
  const OE: i32,
  L: Rep,
  const LE: i32,
  R: Rep,
  const RE: i32,
>(lhs: FixedPoint<L, LE>, rhs: FixedPoint<R, RE>) -> FixedPoint<O, OE> {
  assert_divide_fits!(O, L, R, LE, RE, OE);
  FixedPoint::from_data(divide_kernel::<O, L, R>(lhs.data(), LE, rhs.data(), RE, OE))
}

/// `1 ÷ divisor`, as the fixed-point type `FixedPoint<O, OE>`, truncated toward zero.
///
/// For a divisor with `D` digits, a result with 1 integer digit and `D` fractional digits keeps
/// the most significant bits of every reciprocal; see [`policy::reciprocal`](crate::policy::reciprocal)
/// for the type that is also exact for dividends other than 1.
///
/// # Panics
///
/// If `divisor` is zero.
///
/// ```
/// # use elastic_fixed::{FixedPoint, named};
/// let x = FixedPoint::<u8, 0>::from_data(3);
/// let y: FixedPoint<u16, -15> = named::reciprocal(x);
/// assert_eq!(y.data(), 0x2aaa);  // 0.333328...
/// ```
#[inline]
pub fn reciprocal<
  O: Rep,
  const OE: i32,
  R: Rep,
  const RE: i32,
>(divisor: FixedPoint<R, RE>) -> FixedPoint<O, OE> {
  assert_divide_fits!(O, u8, R, 0, RE, OE);
  FixedPoint::from_data(divide_kernel::<O, u8, R>(1, 0, divisor.data(), RE, OE))
}


mod tests_compile_fail {
  /// The product of two `i128` with fractional digits needs 256 bits.
  /// ```compile_fail
  /// use elastic_fixed::{FixedPoint, named};
  /// let a = FixedPoint::<i128, -64>::from_data(3 << 63);
  /// let _: FixedPoint<i128, -64> = named::multiply(a, a);
  /// ```
  #[allow(dead_code)]
  fn multiply_i128_fractional() {}

  /// The dividend would be shifted by 100 bits.
  /// ```compile_fail
  /// use elastic_fixed::{FixedPoint, named};
  /// let a = FixedPoint::<i64, 0>::from_data(3);
  /// let _: FixedPoint<i64, -100> = named::divide(a, a);
  /// ```
  #[allow(dead_code)]
  fn divide_too_fine() {}

  /// ```compile_fail
  /// use elastic_fixed::{FixedPoint, named};
  /// let a = FixedPoint::<u8, 0>::from_data(3);
  /// let _: FixedPoint<u64, -200> = named::reciprocal(a);
  /// ```
  #[allow(dead_code)]
  fn reciprocal_too_fine() {}
}
