use super::*;

use core::cmp::Ordering;

/// Compare the magnitudes `a · 2^ea` and `b · 2^eb` exactly.
fn cmp_magnitudes(a: u128, ea: i32, b: u128, eb: i32) -> Ordering {
  if a == 0 || b == 0 {
    return a.cmp(&b)
  }
  let shift = ea as i64 - eb as i64;
  if shift >= 0 {
    // Compare `a << shift` with `b`; if the shift overflows a `u128`, `a` is the larger.
    if shift >= a.leading_zeros() as i64 { Ordering::Greater } else { (a << shift).cmp(&b) }
  } else {
    let shift = -shift;
    if shift >= b.leading_zeros() as i64 { Ordering::Less } else { a.cmp(&(b << shift)) }
  }
}

/// Compare the values `a · 2^ea` and `b · 2^eb` exactly, for any combination of representations
/// and exponents.
pub(crate) fn cmp_scaled<A: Rep, B: Rep>(a: A, ea: i32, b: B, eb: i32) -> Ordering {
  match (a.is_negative(), b.is_negative()) {
    (false, true) => Ordering::Greater,
    (true, false) => Ordering::Less,
    (false, false) => cmp_magnitudes(a.unsigned_abs128(), ea, b.unsigned_abs128(), eb),
    (true, true) => cmp_magnitudes(b.unsigned_abs128(), eb, a.unsigned_abs128(), ea),
  }
}
