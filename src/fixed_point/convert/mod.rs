use super::*;

/// Used to do value-to-value conversions that *rescale* the input: the result represents the
/// same real number as the input, as closely as the destination type allows. It is the reciprocal
/// of [`ScaleInto`].
///
/// The interface is identical to the standard [`From`], but unlike that which is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_:
///
///   - Bits below the destination's precision are truncated (toward zero).
///   - Bits above the destination's range are lost, i.e. the stored integer wraps, just like with
///     `as` between integers.
///   - From floats, out of range values saturate and NaN converts to zero, just like with `as`
///     from a float to an integer.
///
/// There's a blanket implementation of `ScaleFrom<T> for T`, and `ScaleFrom<T> for U` implies
/// `ScaleInto<U> for T`. Conversions between two [`FixedPoint`] types are done with
/// [`FixedPoint::convert`] instead (a blanket implementation would overlap with the one for
/// `T`), and likewise between two [`Elastic`](crate::Elastic) types.
///
/// # Examples
///
/// ```
/// # use elastic_fixed::*;
/// type Q8 = FixedPoint<i16, -8>;
/// assert_eq!(Q8::scale_from(3).data(), 0x300);
/// assert_eq!(Q8::scale_from(-0.75).data(), -0xc0);
/// assert_eq!(Q8::scale_from(1e-3).data(), 0);  // truncated
///
/// assert_eq!(i32::scale_from(Q8::from_data(-0x1ff)), -1);  // truncated toward zero
/// assert_eq!(f32::scale_from(Q8::from_data(-0x1ff)), -1.99609375);
/// ```
pub trait ScaleFrom<T> {
  /// Converts to this type from the input type, rescaling and truncating as necessary.
  #[must_use]
  fn scale_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that *rescale* the input. It is the reciprocal of
/// [`ScaleFrom`], which is the one to implement; see there for details.
///
/// # Examples
///
/// ```
/// # use elastic_fixed::*;
/// let x: FixedPoint<u8, -4> = 2.5_f64.scale_into();
/// assert_eq!(x.data(), 40);
///
/// let y: f64 = x.scale_into();
/// assert_eq!(y, 2.5);
/// ```
pub trait ScaleInto<T> {
  /// Converts this type into the (usually inferred) input type, rescaling and truncating as
  /// necessary.
  #[must_use]
  fn scale_into(self) -> T;
}

impl<T> ScaleFrom<T> for T {
  fn scale_from(value: T) -> Self {
    value
  }
}

impl<T, U> ScaleInto<U> for T where U: ScaleFrom<T> {
  fn scale_into(self) -> U {
    U::scale_from(self)
  }
}

mod int;
mod float;
mod fixed;

pub(crate) use float::{scaled_of_f64, scaled_to_f64};
