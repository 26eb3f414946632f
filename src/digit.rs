/// A limb. [`Bigint`][crate::Bigint] is composed of many of these,
/// each holding nine decimal digits.
pub type Digit = u32;

/// Unsigned type wide enough for a limb product plus two carries.
pub type DoubleDigit = u64;

/// Signed counterpart of [`DoubleDigit`], used for borrows.
pub(crate) type SignedDoubleDigit = i64;

/// Numeric base of the limbs, $10^9$.
pub const BASE: Digit = 1_000_000_000;

/// Decimal digits per limb.
pub const DIGITS_PER_LIMB: usize = 9;

/// $10^i$ for `i` in `0..=9`.
pub(crate) const POWERS_OF_TEN: [Digit; DIGITS_PER_LIMB + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Number of decimal digits in a single limb, `0` for `0`.
pub(crate) fn digit_len(digit: Digit) -> usize {
    POWERS_OF_TEN
        .iter()
        .position(|&power| digit < power)
        .unwrap_or(DIGITS_PER_LIMB + 1)
}

/// The limbs of a native magnitude, without touching the heap.
///
/// `u64::MAX` needs three limbs in base $10^9$.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct NativeDigits {
    digits: [Digit; 3],
    len: usize,
}

impl NativeDigits {
    pub fn new(mut value: u64) -> Self {
        let mut native = Self::default();
        while value != 0 {
            native.digits[native.len] = (value % BASE as u64) as Digit;
            value /= BASE as u64;
            native.len += 1;
        }
        native
    }

    /// Sign (`true` for non-negative) and magnitude limbs of `value`.
    pub fn signed(value: i64) -> (bool, Self) {
        (value >= 0, Self::new(value.unsigned_abs()))
    }
}

impl core::ops::Deref for NativeDigits {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.digits[..self.len]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lengths() {
        assert_eq!(digit_len(0), 0);
        assert_eq!(digit_len(7), 1);
        assert_eq!(digit_len(10), 2);
        assert_eq!(digit_len(99_999), 5);
        assert_eq!(digit_len(BASE - 1), 9);
    }

    #[test]
    fn native() {
        assert!(NativeDigits::new(0).is_empty());
        assert_eq!(&*NativeDigits::new(999_999_999), &[999_999_999]);
        assert_eq!(&*NativeDigits::new(1_000_000_000), &[0, 1]);
        assert_eq!(
            &*NativeDigits::new(u64::MAX),
            &[709_551_615, 446_744_073, 18]
        );
    }
}
