use alloc::vec::Vec;
use core::ops::Deref;

use ref_cast::RefCast;
use zeroize::Zeroize;

use crate::digit::{digit_len, Digit, DIGITS_PER_LIMB};
use crate::{Error, Result};

mod decimal;
mod trait_implementations;
pub(crate) use trait_implementations::cmp_magnitudes;

/// Arbitrary-precision signed integer.
///
/// Internal representation is sign-magnitude, with little-endian limbs
/// in base $10^9$.
///
/// Implementation ***must ensure***, after every public operation:
/// - every limb is `< BASE`
/// - the last (most significant) limb is non-zero
/// - zero has no limbs and is positive
#[derive(Clone, Zeroize)]
pub struct Bigint {
    pub(crate) positive: bool,
    pub(crate) limbs: Vec<Digit>,
}

/// Absolute value view of a [`Bigint`].
///
/// Comparisons through this wrapper ignore the sign, which is what the
/// additive and division engines need when routing operands by size.
#[repr(transparent)]
#[derive(RefCast)]
pub struct Magnitude(Bigint);

impl Magnitude {
    pub fn bigint(&self) -> &Bigint {
        &self.0
    }
}

impl Deref for Magnitude {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.0.limbs
    }
}

/// Index + 1 of the last non-zero limb, 0 if all limbs are zero.
pub(crate) fn significant_len(limbs: &[Digit]) -> usize {
    limbs
        .iter()
        .rposition(|&limb| limb != 0)
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Decimal digit count of normalized limbs, 0 if there are none.
pub(crate) fn decimal_len(limbs: &[Digit]) -> usize {
    match limbs.last() {
        None => 0,
        Some(&leading) => DIGITS_PER_LIMB * (limbs.len() - 1) + digit_len(leading),
    }
}

pub trait One: Sized + PartialEq {
    fn one() -> Self;

    fn is_one(&self) -> bool { *self == Self::one() }
    fn set_one(&mut self) { *self = Self::one(); }
}

pub trait Zero: Sized + PartialEq {
    fn zero() -> Self;

    fn is_zero(&self) -> bool { *self == Self::zero() }
    fn set_zero(&mut self) { *self = Self::zero(); }
}

impl Zero for Bigint {
    fn zero() -> Self {
        Self { positive: true, limbs: Vec::new() }
    }

    fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    fn set_zero(&mut self) {
        self.limbs.clear();
        self.positive = true;
    }
}

impl One for Bigint {
    fn one() -> Self {
        Self { positive: true, limbs: alloc::vec![1] }
    }

    fn is_one(&self) -> bool {
        self.positive && self.limbs == [1]
    }
}

// c'tors and such
impl Bigint {
    pub fn zero() -> Self {
        Zero::zero()
    }

    pub fn one() -> Self {
        One::one()
    }

    /// Takes ownership of little-endian limbs, normalizing them.
    ///
    /// Panics if a limb is not below [`BASE`][crate::BASE].
    pub fn from_limbs(positive: bool, limbs: Vec<Digit>) -> Self {
        assert!(
            limbs.iter().all(|&limb| limb < crate::BASE),
            "limb out of range"
        );
        let mut x = Self { positive, limbs };
        x.normalize();
        x
    }

    /// Little-endian limbs of the magnitude.
    pub fn limbs(&self) -> &[Digit] {
        &self.limbs
    }

    /// Sign-ignoring view, see [`Magnitude`].
    pub fn magnitude(&self) -> &Magnitude {
        Magnitude::ref_cast(self)
    }

    /// Drops most significant zero limbs and makes zero positive.
    pub(crate) fn normalize(&mut self) {
        let l = significant_len(&self.limbs);
        self.limbs.truncate(l);
        if self.limbs.is_empty() {
            self.positive = true;
        }
    }

    /// Moves the value out, leaving canonical zero behind.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Wipes the limbs and resets to canonical zero.
    pub fn clear(&mut self) {
        self.zeroize();
        self.positive = true;
    }

    /// The value as an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let mut magnitude: u64 = 0;
        for &limb in self.limbs.iter().rev() {
            magnitude = magnitude
                .checked_mul(crate::BASE as u64)?
                .checked_add(limb as u64)?;
        }
        if self.positive {
            i64::try_from(magnitude).ok()
        } else if magnitude == i64::MIN.unsigned_abs() {
            Some(i64::MIN)
        } else {
            i64::try_from(magnitude).ok().map(|m| -m)
        }
    }
}

// utilities
impl Bigint {
    /// Makes the number non-negative.
    pub fn abs(&mut self) -> &mut Self {
        self.positive = true;
        self
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    pub fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    pub fn is_even(&self) -> bool {
        self.limbs.first().map(|&limb| limb % 2 == 0).unwrap_or(true)
    }

    /// Number of decimal digits, `0` for zero.
    pub fn digits(&self) -> usize {
        decimal_len(&self.limbs)
    }

    /// Decimal digit at `index`, counting from the most significant digit.
    ///
    /// The sign is not a digit: `(-1234).digit(0) == Ok(1)`.
    pub fn digit(&self, index: usize) -> Result<u8> {
        let digits = self.digits();
        if index >= digits {
            return Err(Error::DigitOutOfRange { index, digits });
        }
        self.digit_from_least(digits - 1 - index)
    }

    /// Decimal digit at `index`, counting from the least significant digit.
    pub fn digit_from_least(&self, index: usize) -> Result<u8> {
        let digits = self.digits();
        if index >= digits {
            return Err(Error::DigitOutOfRange { index, digits });
        }
        let limb = self.limbs[index / DIGITS_PER_LIMB];
        let power = crate::digit::POWERS_OF_TEN[index % DIGITS_PER_LIMB];
        Ok(((limb / power) % 10) as u8)
    }
}
