use super::*;

/// One line of the [`const_as`] function.
macro_rules! const_as_line {
  ($x:ident, $t:ty, $u:ty) => {
    if const {
      T::BITS == <$t>::BITS && T::SIGNED == (<$t>::MIN != 0) &&
      U::BITS == <$u>::BITS && U::SIGNED == (<$u>::MIN != 0)
    } {
      // SAFETY: `T` and `U` are sealed to the primitive integers, and a primitive integer is
      // identified by its width and signedness; therefore `$t` is `T` and `$u` is `U`, and both
      // `transmute_copy` are no-ops.
      let t = unsafe { ::core::mem::transmute_copy::<T, $t>(&$x) };
      let u = t as $u;
      return unsafe { ::core::mem::transmute_copy::<$u, U>(&u) }
    }
  }
}

/// All the lines of [`const_as`] with source type `$t`, for every destination type in `[$u,*]`.
macro_rules! const_as_row {
  ($x:ident, $t:ty, [$($u:ty),*]) => {
    $( const_as_line!($x, $t, $u); )*
  }
}

/// A type-generic and `const` version of the keyword `as`, for casting between [`Rep`]s.
///
/// Like `as`, this sign-extends (from signed types) or zero-extends (from unsigned types) when
/// widening, and keeps the low bits when narrowing.
///
/// ```
/// # use elastic_fixed::const_as;
/// assert_eq!(const_as::<i16, i32>(1234i16), 1234i16 as i32);
/// assert_eq!(const_as::<i128, i64>(-16i128), -16i128 as i64);
/// assert_eq!(const_as::<i8, u16>(-1i8), 0xffff);
/// assert_eq!(const_as::<u8, i16>(0xff), 0xff);
/// ```
pub const fn const_as<T: Rep, U: Rep>(x: T) -> U {
  const_as_row!(x, i8,   [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, i16,  [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, i32,  [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, i64,  [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, i128, [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, u8,   [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, u16,  [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, u32,  [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, u64,  [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  const_as_row!(x, u128, [i8, i16, i32, i64, i128, u8, u16, u32, u64, u128]);
  unreachable!() // cannot be const { unreachable!() }
}
