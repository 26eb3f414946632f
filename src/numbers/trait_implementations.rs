use alloc::vec::Vec;
use core::{cmp::Ordering, fmt, hash::{Hash, Hasher}, ops::{Index, Neg}};

use super::{significant_len, Bigint, Magnitude};
use crate::digit::{Digit, NativeDigits};

/// This is *little endian* ordering, as opposed to the default
/// ordering on arrays and slices!
///
/// Trailing zero limbs are ignored, so non-normalized input compares fine.
pub(crate) fn cmp_magnitudes(m: &[Digit], n: &[Digit]) -> Ordering {
    let l_m = significant_len(m);
    let l_n = significant_len(n);
    match l_m.cmp(&l_n) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    for i in (0..l_m).rev() {
        match m[i].cmp(&n[i]) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

/// Three-way comparison of two sign-magnitude values.
///
/// With `absolute`, signs are ignored. Zero equals zero whatever its sign flag.
pub(crate) fn compare(
    (m_positive, m): (bool, &[Digit]),
    (n_positive, n): (bool, &[Digit]),
    absolute: bool,
) -> Ordering {
    if significant_len(m) == 0 && significant_len(n) == 0 {
        return Ordering::Equal;
    }
    if absolute {
        return cmp_magnitudes(m, n);
    }

    match (m_positive, n_positive) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => cmp_magnitudes(m, n),
        // both negative: larger magnitude is smaller
        (false, false) => cmp_magnitudes(m, n).reverse(),
    }
}

impl Bigint {
    fn parts(&self) -> (bool, &[Digit]) {
        (self.positive, &self.limbs)
    }
}

impl Ord for Bigint {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.parts(), other.parts(), false)
    }
}

impl PartialOrd for Bigint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Bigint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bigint {}

impl PartialOrd<i64> for Bigint {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        let (positive, native) = NativeDigits::signed(*other);
        Some(compare(self.parts(), (positive, &native), false))
    }
}

impl PartialEq<i64> for Bigint {
    fn eq(&self, other: &i64) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialEq<Bigint> for i64 {
    fn eq(&self, other: &Bigint) -> bool {
        other == self
    }
}

impl PartialOrd<Bigint> for i64 {
    fn partial_cmp(&self, other: &Bigint) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl Hash for Bigint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let limbs = &self.limbs[..significant_len(&self.limbs)];
        (self.positive || limbs.is_empty()).hash(state);
        limbs.hash(state);
    }
}

// Absolute mode of the comparator.

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.0.parts(), other.0.parts(), true)
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Magnitude {}

impl Default for Bigint {
    fn default() -> Self {
        super::Zero::zero()
    }
}

impl fmt::Debug for Bigint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bigint({})", self)
    }
}

macro_rules! from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Bigint {
            fn from(value: $t) -> Self {
                let (positive, native) = NativeDigits::signed(value as i64);
                Bigint { positive, limbs: native.to_vec() }
            }
        }
    )*};
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Bigint {
            fn from(value: $t) -> Self {
                Bigint { positive: true, limbs: NativeDigits::new(value as u64).to_vec() }
            }
        }
    )*};
}

from_signed!(i8, i16, i32, i64, isize);
from_unsigned!(u8, u16, u32, u64, usize);

impl From<Bigint> for Vec<Digit> {
    fn from(bigint: Bigint) -> Self {
        bigint.limbs
    }
}

impl Neg for Bigint {
    type Output = Bigint;

    fn neg(mut self) -> Self::Output {
        if !self.limbs.is_empty() {
            self.positive = !self.positive;
        }
        self
    }
}

impl Neg for &Bigint {
    type Output = Bigint;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

static DECIMAL: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Decimal digit counting from the most significant one, see [`Bigint::digit`].
///
/// Panics if `index >= self.digits()`.
impl Index<usize> for Bigint {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        match self.digit(index) {
            Ok(digit) => &DECIMAL[digit as usize],
            Err(error) => panic!("{}", error),
        }
    }
}

#[cfg(feature = "ct-maybe")]
impl subtle::ConstantTimeEq for Bigint {
    /// Constant time in the limbs, not in their count.
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        use subtle::ConstantTimeEq as _;
        (self.positive as u8).ct_eq(&(other.positive as u8)) & self.limbs.ct_eq(&other.limbs)
    }
}
