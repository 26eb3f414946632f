use alloc::vec::Vec;
use core::{cmp::Ordering, ops::{Add, AddAssign}};

use super::{adc, forward_binop, forward_native_binop};
use super::subtract::{sub_assign_borrow, sub_from_assign};
use crate::Bigint;
use crate::digit::{Digit, DoubleDigit, NativeDigits};
use crate::numbers::cmp_magnitudes;

#[inline]
/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is at least as long as b.
/// The final carry (0 or 1) is returned, not stored.
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry: DoubleDigit = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

/// a += b on magnitudes, growing `a` as needed.
///
/// The shorter operand counts as padded with zeros; a carry out of the
/// last limb becomes a new limb `1`.
pub(crate) fn add_assign_magnitude(a: &mut Vec<Digit>, b: &[Digit]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }
    let carry = add_assign_carry(a, b);
    if carry != 0 {
        a.push(carry);
    }
}

/// x += (±b), where `positive` is the sign of the summand.
///
/// With differing signs, the smaller magnitude is subtracted from the
/// larger one, and the result takes the larger operand's sign.
pub(crate) fn add_signed(x: &mut Bigint, positive: bool, b: &[Digit]) {
    if x.positive == positive {
        add_assign_magnitude(&mut x.limbs, b);
    } else {
        match cmp_magnitudes(&x.limbs, b) {
            Ordering::Less => {
                sub_from_assign(&mut x.limbs, b);
                x.positive = positive;
            }
            _ => {
                let borrow = sub_assign_borrow(&mut x.limbs, b);
                debug_assert_eq!(borrow, 0);
            }
        }
    }
    x.normalize();
}

impl AddAssign<&Bigint> for Bigint {
    fn add_assign(&mut self, summand: &Bigint) {
        add_signed(self, summand.positive, &summand.limbs);
    }
}

/// Works on the native value's limbs directly, no second `Bigint` is built.
impl AddAssign<i64> for Bigint {
    fn add_assign(&mut self, summand: i64) {
        let (positive, native) = NativeDigits::signed(summand);
        add_signed(self, positive, &native);
    }
}

impl Add for &Bigint {
    type Output = Bigint;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = self.clone();
        sum += summand;
        sum
    }
}

forward_binop!(impl Add, add, AddAssign, add_assign);
forward_native_binop!(impl commutative Add, add, AddAssign, add_assign);
