#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! Arbitrary-precision signed integers.
//!
//! A [`Bigint`] is a sign flag plus little-endian limbs in base $10^9$,
//! which makes decimal input and output cheap and keeps every limb
//! product inside a 64-bit accumulator.
//!
//! ```
//! use bigmath::Bigint;
//!
//! let a = Bigint::from(342387239127313213i64);
//! let b: Bigint = "2312074892343".parse().unwrap();
//! assert_eq!((&a * &b).to_string(), "791624939044899694217816428059");
//! ```

extern crate alloc;

mod arithmetic;
mod digit;
pub use digit::{Digit, DoubleDigit, BASE, DIGITS_PER_LIMB};
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::{Bigint, Magnitude, One, Zero};

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod proptests;
