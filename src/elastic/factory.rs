use super::*;

/// Integers that can be made into an [`Elastic`] of the same storage, with as many integer digits
/// as the integer has and no fractional digits. Implemented for all the primitive integers; see
/// [`make_elastic`].
pub trait MakeElastic: Rep {
  /// `Elastic<{Self::DIGITS}, 0, Self>`.
  type Output;

  /// Wrap `self`, unchanged, in an `Elastic`.
  fn make_elastic(self) -> Self::Output;
}

macro_rules! impl_make_elastic {
  ($int:ty) => {
    impl MakeElastic for $int {
      type Output = Elastic<{ <$int>::BITS as i32 - (<$int>::MIN != 0) as i32 }, 0, $int>;

      #[inline]
      fn make_elastic(self) -> Self::Output {
        Elastic::from_data(self)
      }
    }
  }
}

impl_make_elastic!{i8}
impl_make_elastic!{i16}
impl_make_elastic!{i32}
impl_make_elastic!{i64}
impl_make_elastic!{i128}
impl_make_elastic!{u8}
impl_make_elastic!{u16}
impl_make_elastic!{u32}
impl_make_elastic!{u64}
impl_make_elastic!{u128}

/// The [`Elastic`] number with the same value and storage as the integer `value`: all the digits
/// of `T` are integer digits.
///
/// ```
/// # use elastic_fixed::{make_elastic, Elastic};
/// let x: Elastic<7, 0, i8> = make_elastic(-100_i8);
/// let y: Elastic<16, 0, u16> = make_elastic(40_000_u16);
/// assert!(x == -100 && y == 40_000);
/// ```
#[inline]
pub fn make_elastic<T: MakeElastic>(value: T) -> T::Output {
  value.make_elastic()
}
