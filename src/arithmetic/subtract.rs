use alloc::vec::Vec;
use core::ops::{Sub, SubAssign};

use super::{forward_binop, forward_native_binop, sbb};
use super::add::add_assign_magnitude;
use crate::Bigint;
use crate::digit::{Digit, NativeDigits, SignedDoubleDigit, BASE};
use crate::numbers::significant_len;

// A non-zero borrow (if a.len() == b.len()) is -1, i.e. a - b + B^len
// is what is left in `a`.
pub(crate) fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> SignedDoubleDigit {
    debug_assert!(a.len() >= b.len());
    let mut borrow = 0;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow
}

/// a = b - a, for magnitudes with `b >= a`.
pub(crate) fn sub_from_assign(a: &mut Vec<Digit>, b: &[Digit]) {
    debug_assert!(significant_len(a) <= b.len());
    a.resize(b.len(), 0);

    let mut borrow = 0;
    for (a, b) in a.iter_mut().zip(b) {
        *a = sbb(*b, *a, &mut borrow);
    }
    debug_assert_eq!(borrow, 0);
}

/// Replaces `a` with $B^{len} - a$.
///
/// This recovers `b - a` from a borrowed `a - b` that wrapped around.
fn reflect(a: &mut [Digit]) {
    let mut limbs = a.iter_mut().skip_while(|limb| **limb == 0);
    if let Some(lowest) = limbs.next() {
        *lowest = BASE - *lowest;
        for limb in limbs {
            *limb = BASE - 1 - *limb;
        }
    }
}

/// x -= (±b), where `positive` is the sign of the subtrahend.
pub(crate) fn sub_signed(x: &mut Bigint, positive: bool, b: &[Digit]) {
    if significant_len(b) == 0 {
        return;
    }

    if x.positive != positive {
        // x - (-b) = x + b, magnitudes add, x keeps its sign
        add_assign_magnitude(&mut x.limbs, b);
    } else {
        if x.limbs.len() < b.len() {
            x.limbs.resize(b.len(), 0);
        }
        if sub_assign_borrow(&mut x.limbs, b) != 0 {
            // |x| < |b|
            reflect(&mut x.limbs);
            x.positive = !x.positive;
        }
    }
    x.normalize();
}

impl SubAssign<&Bigint> for Bigint {
    fn sub_assign(&mut self, subtrahend: &Bigint) {
        sub_signed(self, subtrahend.positive, &subtrahend.limbs);
    }
}

/// Works on the native value's limbs directly, no second `Bigint` is built.
impl SubAssign<i64> for Bigint {
    fn sub_assign(&mut self, subtrahend: i64) {
        let (positive, native) = NativeDigits::signed(subtrahend);
        sub_signed(self, positive, &native);
    }
}

impl Sub for &Bigint {
    type Output = Bigint;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = self.clone();
        difference -= subtrahend;
        difference
    }
}

impl Sub<Bigint> for i64 {
    type Output = Bigint;

    fn sub(self, subtrahend: Bigint) -> Self::Output {
        -(subtrahend - self)
    }
}

impl Sub<&Bigint> for i64 {
    type Output = Bigint;

    fn sub(self, subtrahend: &Bigint) -> Self::Output {
        -(subtrahend - self)
    }
}

forward_binop!(impl Sub, sub, SubAssign, sub_assign);
forward_native_binop!(impl Sub, sub, SubAssign, sub_assign);
