use alloc::vec::Vec;
use core::iter;

use super::divide::div_rem_assign_digit;
use super::multiply::mul_assign_digit;
use crate::Bigint;
use crate::digit::{Digit, DIGITS_PER_LIMB, POWERS_OF_TEN};
use crate::numbers::significant_len;

/// a *= 10^n, on magnitudes.
///
/// Whole limbs are inserted at the low end, the sub-limb part is a
/// single-limb multiplication.
pub(crate) fn shl_decimal(a: &mut Vec<Digit>, n: usize) {
    if a.is_empty() {
        return;
    }

    let n_limbs = n / DIGITS_PER_LIMB;
    a.splice(..0, iter::repeat(0).take(n_limbs));

    let n_digits = n % DIGITS_PER_LIMB;
    if n_digits > 0 {
        mul_assign_digit(a, POWERS_OF_TEN[n_digits]);
    }
}

/// a /= 10^n, on magnitudes, truncating.
pub(crate) fn shr_decimal(a: &mut Vec<Digit>, n: usize) {
    let n_limbs = n / DIGITS_PER_LIMB;
    if n_limbs >= a.len() {
        a.clear();
        return;
    }
    a.drain(..n_limbs);

    let n_digits = n % DIGITS_PER_LIMB;
    if n_digits > 0 {
        div_rem_assign_digit(a, POWERS_OF_TEN[n_digits]);
    }
    a.truncate(significant_len(a));
}

impl Bigint {
    /// Appends `n` decimal zeros, i.e. multiplies by $10^n$.
    pub fn add_zeroes(&mut self, n: usize) -> &mut Self {
        shl_decimal(&mut self.limbs, n);
        self
    }

    /// Drops the `n` least significant decimal digits, truncating toward zero.
    ///
    /// Removing at least [`digits`][Bigint::digits] digits leaves zero.
    pub fn remove_digits(&mut self, n: usize) -> &mut Self {
        shr_decimal(&mut self.limbs, n);
        self.normalize();
        self
    }
}
