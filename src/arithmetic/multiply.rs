use alloc::{vec, vec::Vec};
use core::ops::{Mul, MulAssign};

use super::{forward_binop, forward_native_binop, mac};
use crate::Bigint;
use crate::digit::{Digit, DoubleDigit, NativeDigits};

/// a *= digit, in place, for a single limb `digit < BASE`.
pub(crate) fn mul_assign_digit(a: &mut Vec<Digit>, digit: Digit) {
    if digit == 0 {
        a.clear();
        return;
    }

    let mut carry: DoubleDigit = 0;
    for limb in a.iter_mut() {
        *limb = mac(*limb, digit, 0, &mut carry);
    }
    if carry != 0 {
        a.push(carry as Digit);
    }
}

/// Product-scanning is not worth it here; this is the row-by-row
/// schoolbook method, each row's carry landing in a fresh limb.
pub(crate) fn mul_magnitudes(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }

    let mut product = vec![0; lhs.len() + rhs.len()];
    for (i, &l) in lhs.iter().enumerate() {
        if l == 0 {
            continue;
        }
        let mut carry: DoubleDigit = 0;
        for (j, &r) in rhs.iter().enumerate() {
            product[i + j] = mac(l, r, product[i + j], &mut carry);
        }
        // row i has not reached this limb before
        product[i + rhs.len()] = carry as Digit;
    }
    product
}

/// Magnitude of `lhs * rhs`, taking the single-limb path when one side has it.
fn mul_slices(lhs: &[Digit], rhs: &[Digit]) -> Vec<Digit> {
    match (lhs, rhs) {
        (_, &[digit]) => {
            let mut product = lhs.to_vec();
            mul_assign_digit(&mut product, digit);
            product
        }
        (&[digit], _) => {
            let mut product = rhs.to_vec();
            mul_assign_digit(&mut product, digit);
            product
        }
        _ => mul_magnitudes(lhs, rhs),
    }
}

impl Mul for &Bigint {
    type Output = Bigint;

    fn mul(self, factor: Self) -> Self::Output {
        let mut product = Bigint {
            positive: self.positive == factor.positive,
            limbs: mul_slices(&self.limbs, &factor.limbs),
        };
        product.normalize();
        product
    }
}

impl MulAssign<&Bigint> for Bigint {
    fn mul_assign(&mut self, factor: &Bigint) {
        if let [digit] = factor.limbs[..] {
            mul_assign_digit(&mut self.limbs, digit);
            self.positive = self.positive == factor.positive;
            self.normalize();
        } else {
            *self = &*self * factor;
        }
    }
}

/// A native factor is split into base-sized parts; up to three limbs,
/// held on the stack.
impl MulAssign<i64> for Bigint {
    fn mul_assign(&mut self, factor: i64) {
        let (positive, native) = NativeDigits::signed(factor);
        match native[..] {
            [] => self.limbs.clear(),
            [digit] => mul_assign_digit(&mut self.limbs, digit),
            _ => self.limbs = mul_magnitudes(&self.limbs, &native),
        }
        self.positive = self.positive == positive;
        self.normalize();
    }
}

forward_binop!(impl Mul, mul, MulAssign, mul_assign);
forward_native_binop!(impl commutative Mul, mul, MulAssign, mul_assign);
