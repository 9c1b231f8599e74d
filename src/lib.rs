#![cfg_attr(not(test), no_std)]
//! This crate provides binary fixed-point arithmetic with the scale fixed at compile time, and an
//! *elastic* fixed-point type whose arithmetic widens its result instead of overflowing.
//!
//! # Introduction
//!
//! A fixed-point number is an integer with an implicit scale factor: [`FixedPoint<R, E>`] stores
//! an integer of type `R`, and represents that integer times `2^E`. The scale is part of the type,
//! so it costs nothing at runtime, and arithmetic is plain integer arithmetic plus shifts.
//!
//! The design follows the fixed-point proposal for C++ (P0037) and its "elastic" follow-up:
//!
//!   - [`FixedPoint`] operators on two values of the same type give that same type; the result
//!     is computed exactly in a wider intermediate integer and then rescaled, and wraps if it
//!     doesn't fit. The [`policy`] module has the rules for the *optimal* result type of each
//!     operation, and [`named`] has the operations that let the caller pick any result type.
//!   - [`Elastic<I, F, R>`] declares `I` integer and `F` fractional digits independently of its
//!     storage `R`. Its arithmetic requires a result type with enough digits for every possible
//!     result (the rules in [`deduce`]), which is checked at compile time, so it never overflows.
//!   - The [`width`] module picks native integer types by width, which is what the type macros
//!     [`make_fixed!`], [`make_ufixed!`] and [`elastic!`] build on.
//!
//! # Usage
//!
//! ```
//! use elastic_fixed::{make_fixed, Elastic, FixedPoint, ScaleFrom, ScaleInto};
//!
//! // Pick a representation and an exponent, or ask for a number of integer and fractional digits.
//! type Q16 = FixedPoint<i32, -16>;
//! type Byte = make_fixed!(4, 3);  // FixedPoint<i8, -3>
//!
//! // Create values from ints, floats, strings, or a raw stored integer.
//! let a = Q16::scale_from(2.75);
//! let b = Q16::scale_from(-3);
//! let c: Byte = "1.375".parse().unwrap();
//! let d = Byte::from_data(0b1011_100);
//!
//! // Arithmetic, and exact comparisons across types, with the usual operators.
//! assert!(a + b == -0.25);
//! assert!(a * b == -8.25);
//! assert!(c < d && d == 11.5);
//!
//! // Elastic arithmetic: the result type is annotated, and must be big enough.
//! let x = Elastic::<4, 4, u8>::scale_from(15.9375);
//! let y: Elastic<8, 8, u16> = x.mul(x);
//! assert_eq!(y.to_string(), "254.00390625");
//! let z: f64 = y.scale_into();
//! assert_eq!(z, 254.00390625);
//! ```
//!
//! # Performance
//!
//! Every scale and type is resolved at compile time, so the operations compile to a handful of
//! integer instructions. This crate includes benchmarks; run them with `cargo bench -F bench`.

mod underlying;
pub mod width;
pub mod policy;
mod fixed_point;
pub mod named;
mod elastic;

pub use underlying::{Rep, const_as, shift_left, shift_right};
pub use width::{SetWidthT, FitT};
pub use fixed_point::FixedPoint;
pub use fixed_point::ParseFixedError;
pub use fixed_point::convert::{ScaleFrom, ScaleInto};
pub use elastic::{Elastic, MakeElastic, deduce, make_elastic};

/// Export some instances of the arithmetic for inspection, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

/// The number of cases each property test runs: a lot more when the tests are compiled with
/// optimisations.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10_0000};
