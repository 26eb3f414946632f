//! Arithmetic on [`Bigint`], limb by limb in base $10^9$.
//!
//! The engines in the submodules work on little-endian limb slices
//! (`&[Digit]`/`&mut Vec<Digit>`) for the magnitudes and resolve signs on
//! top. Operands passed by reference are never modified, not even
//! temporarily: where a sign has to be flipped to reuse a code path, an
//! owned temporary or the [`Magnitude`][crate::Magnitude] view is used.
//!
//! Operator traits are implemented for all owned/borrowed combinations;
//! the borrowed-borrowed form does the work, the others forward to it.

use crate::digit::{Digit, DoubleDigit, SignedDoubleDigit, BASE};

mod add;
mod divide;
mod multiply;
mod power;
mod shift;
mod subtract;

/// Add with carry, in base $10^9$.
///
/// `acc` carries in and out; it stays below `2 * BASE`.
#[inline]
pub(crate) fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = (*acc % BASE as DoubleDigit) as Digit;
    *acc /= BASE as DoubleDigit;
    lo
}

/// Subtract with borrow, in base $10^9$.
///
/// `acc` carries the borrow in and out, it is either `0` or `-1`.
#[inline]
pub(crate) fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = acc.rem_euclid(BASE as SignedDoubleDigit) as Digit;
    *acc = acc.div_euclid(BASE as SignedDoubleDigit);
    lo
}

/// Multiply-accumulate: returns the low limb of `a * b + c + carry`,
/// leaves the high part in `carry`.
///
/// $(B - 1)^2 + 2(B - 1) < B^2 < 2^{63}$, so nothing overflows.
#[inline]
pub(crate) fn mac(a: Digit, b: Digit, c: Digit, carry: &mut DoubleDigit) -> Digit {
    let t = (a as DoubleDigit) * (b as DoubleDigit) + c as DoubleDigit + *carry;
    *carry = t / BASE as DoubleDigit;
    (t % BASE as DoubleDigit) as Digit
}

/// Forwards the owned/borrowed combinations of a binary operator to the
/// `&Bigint op &Bigint` implementation, and the assign form to it as well.
macro_rules! forward_binop {
    (impl $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl core::ops::$Op<crate::Bigint> for crate::Bigint {
            type Output = crate::Bigint;
            fn $op(self, other: crate::Bigint) -> Self::Output {
                core::ops::$Op::$op(&self, &other)
            }
        }

        impl core::ops::$Op<&crate::Bigint> for crate::Bigint {
            type Output = crate::Bigint;
            fn $op(self, other: &crate::Bigint) -> Self::Output {
                core::ops::$Op::$op(&self, other)
            }
        }

        impl core::ops::$Op<crate::Bigint> for &crate::Bigint {
            type Output = crate::Bigint;
            fn $op(self, other: crate::Bigint) -> Self::Output {
                core::ops::$Op::$op(self, &other)
            }
        }

        impl core::ops::$OpAssign<crate::Bigint> for crate::Bigint {
            fn $op_assign(&mut self, other: crate::Bigint) {
                core::ops::$OpAssign::$op_assign(self, &other)
            }
        }
    };
}

/// Same as [`forward_binop`], for a native `i64` right-hand side,
/// plus `i64 op Bigint` when the operator commutes.
macro_rules! forward_native_binop {
    (impl $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl core::ops::$Op<i64> for &crate::Bigint {
            type Output = crate::Bigint;
            fn $op(self, other: i64) -> Self::Output {
                let mut result = self.clone();
                core::ops::$OpAssign::$op_assign(&mut result, other);
                result
            }
        }

        impl core::ops::$Op<i64> for crate::Bigint {
            type Output = crate::Bigint;
            fn $op(mut self, other: i64) -> Self::Output {
                core::ops::$OpAssign::$op_assign(&mut self, other);
                self
            }
        }
    };
    (impl commutative $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        $crate::arithmetic::forward_native_binop!(impl $Op, $op, $OpAssign, $op_assign);

        impl core::ops::$Op<crate::Bigint> for i64 {
            type Output = crate::Bigint;
            fn $op(self, other: crate::Bigint) -> Self::Output {
                core::ops::$Op::$op(other, self)
            }
        }

        impl core::ops::$Op<&crate::Bigint> for i64 {
            type Output = crate::Bigint;
            fn $op(self, other: &crate::Bigint) -> Self::Output {
                core::ops::$Op::$op(other, self)
            }
        }
    };
}

pub(crate) use {forward_binop, forward_native_binop};
