//! Shared operands for the unit tests.

use crate::{Bigint, Digit, BASE};

pub const N1: Digit = BASE - 1;
pub const N2: Digit = BASE - 2;
pub const HALF: Digit = BASE / 2;

/// Little-endian limb triples with `a * b == c`.
pub const MUL_TRIPLES: &[(&[Digit], &[Digit], &[Digit])] = &[
    (&[], &[], &[]),
    (&[], &[1], &[]),
    (&[2], &[], &[]),
    (&[1], &[1], &[1]),
    (&[2], &[3], &[6]),
    (&[1], &[1, 1, 1], &[1, 1, 1]),
    (&[1, 2, 3], &[3], &[3, 6, 9]),
    (&[1, 1, 1], &[N1], &[N1, N1, N1]),
    (&[1, 2, 3], &[N1], &[N1, N2, N2, 2]),
    (&[1, 2, 3, 4], &[N1], &[N1, N2, N2, N2, 3]),
    (&[N1], &[N1], &[1, N2]),
    (&[N1, N1], &[N1], &[1, N1, N2]),
    (&[N1, N1, N1], &[N1], &[1, N1, N1, N2]),
    (&[N1, N1, N1, N1], &[N1], &[1, N1, N1, N1, N2]),
    (&[HALF], &[2], &[0, 1]),
    (&[0, HALF], &[2], &[0, 0, 1]),
    (&[1, 2], &[1, 2, 3], &[1, 4, 7, 6]),
    (&[N1, N1], &[N1, N1, N1], &[1, 0, N1, N2, N1]),
    (&[N1, N1, N1], &[N1, N1, N1, N1], &[1, 0, 0, N1, N2, N1, N1]),
    (&[0, 0, 1], &[1, 2, 3], &[0, 0, 1, 2, 3]),
    (&[0, 0, 1], &[0, 0, 0, 1], &[0, 0, 0, 0, 0, 1]),
];

/// Little-endian limb quadruples with `a == q * b + r`, `r < b`.
pub const DIV_REM_QUADRUPLES: &[(&[Digit], &[Digit], &[Digit], &[Digit])] = &[
    (&[1], &[2], &[], &[1]),
    (&[3], &[2], &[1], &[1]),
    (&[1, 1], &[2], &[HALF], &[1]),
    (&[1, 1, 1], &[2], &[HALF, HALF], &[1]),
    (&[0, 1], &[N1], &[1], &[1]),
    (&[N1, N1], &[N2], &[2, 1], &[3]),
    (&[N1, N1, N1], &[0, 1], &[N1, N1], &[N1]),
    (&[5, 0, 1], &[1, 1], &[N1], &[6]),
];

/// 342387239127313213 * 10^24 + 342387239127313213 * 10^6
pub fn big_a() -> Bigint {
    Bigint::from("342387239127313213342387239127313213000000")
}

pub fn big_b() -> Bigint {
    Bigint::from("2312074892343000000001")
}

/// Assert that an op works for all val/ref combinations
macro_rules! assert_op {
    ($left:ident $op:tt $right:ident == $expected:expr) => {
        assert_eq!((&$left) $op (&$right), $expected);
        assert_eq!((&$left) $op $right.clone(), $expected);
        assert_eq!($left.clone() $op (&$right), $expected);
        assert_eq!($left.clone() $op $right.clone(), $expected);
    };
}

pub(crate) use assert_op;
