use alloc::{vec, vec::Vec};
use core::{cmp::Ordering, ops::{Div, DivAssign, Rem, RemAssign}};

use super::{add::add_assign_carry, forward_binop, subtract::sub_assign_borrow};
use super::multiply::mul_assign_digit;
use super::shift::{shl_decimal, shr_decimal};
use crate::{Bigint, Error, Result};
use crate::digit::{Digit, DoubleDigit, BASE, DIGITS_PER_LIMB, POWERS_OF_TEN};
use crate::numbers::{cmp_magnitudes, decimal_len, significant_len};

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that `hi < divisor`, so the quotient fits
/// into a single digit.
#[inline]
pub(crate) fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = hi as DoubleDigit * BASE as DoubleDigit + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    ((x / divisor) as Digit, (x % divisor) as Digit)
}

/// Divides `number` in place by a single limb, returning the remainder.
pub(crate) fn div_rem_assign_digit(number: &mut [Digit], divisor: Digit) -> Digit {
    let mut remainder = 0;

    // run down the limbs, dividing each, while carrying along the remainder
    for digit in number.iter_mut().rev() {
        let (quotient, r) = div_digits(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

/// The divisor scaled by 1, 2, 4 and 8, with their decimal lengths.
struct Multiples {
    limbs: [Vec<Digit>; 4],
    digits: [usize; 4],
}

impl Multiples {
    fn new(divisor: &[Digit]) -> Self {
        let mut limbs: [Vec<Digit>; 4] = Default::default();
        limbs[0] = divisor.to_vec();
        for k in 1..4 {
            let mut doubled = limbs[k - 1].clone();
            mul_assign_digit(&mut doubled, 2);
            limbs[k] = doubled;
        }
        let digits = core::array::from_fn(|k| decimal_len(&limbs[k]));
        Self { limbs, digits }
    }

    /// Finds the largest `divisor * 2^k` not exceeding the leading digits of
    /// `remainder`, returning `k` and the decimal shift that aligns it there.
    ///
    /// The leading fragment is cut at the multiple's own digit count first;
    /// if no multiple fits under that, one more digit is taken. The cut
    /// truncates, so a match never overshoots the remainder.
    fn leading(&self, remainder: &[Digit]) -> Option<(usize, usize)> {
        let len = decimal_len(remainder);

        for extra in 0..2 {
            for k in (0..4).rev() {
                let precision = self.digits[k] + extra;
                if precision > len {
                    continue;
                }
                let shift = len - precision;

                // only the limbs holding the leading `precision` digits
                let mut fragment = remainder[shift / DIGITS_PER_LIMB..].to_vec();
                shr_decimal(&mut fragment, shift % DIGITS_PER_LIMB);

                if cmp_magnitudes(&fragment, &self.limbs[k]) != Ordering::Less {
                    return Some((k, shift));
                }
            }
        }
        None
    }
}

/// Adds `digit * B^position` to `a`, for a limb `digit < BASE`.
fn add_limb_at(a: &mut Vec<Digit>, position: usize, digit: Digit) {
    if a.len() <= position {
        a.resize(position + 1, 0);
    }
    let carry = add_assign_carry(&mut a[position..], &[digit]);
    if carry != 0 {
        a.push(carry);
    }
}

/// Quotient and remainder of normalized magnitudes, `divisor` non-empty.
///
/// Each round subtracts the largest of divisor * {8, 4, 2, 1}, scaled by
/// a power of ten, that fits under the remainder's leading digits, so up
/// to three quotient bits are settled at once.
pub(crate) fn div_rem_magnitudes(dividend: &[Digit], divisor: &[Digit]) -> (Vec<Digit>, Vec<Digit>) {
    debug_assert!(!divisor.is_empty());

    if let [digit] = *divisor {
        let mut quotient = dividend.to_vec();
        let remainder = div_rem_assign_digit(&mut quotient, digit);
        quotient.truncate(significant_len(&quotient));
        let remainder = if remainder == 0 { Vec::new() } else { vec![remainder] };
        return (quotient, remainder);
    }

    if cmp_magnitudes(dividend, divisor) == Ordering::Less {
        return (Vec::new(), dividend.to_vec());
    }

    let multiples = Multiples::new(divisor);
    let mut quotient = Vec::new();
    let mut remainder = dividend.to_vec();

    while decimal_len(&remainder) >= multiples.digits[0] {
        let (k, shift) = match multiples.leading(&remainder) {
            Some(found) => found,
            // same length as the divisor, but smaller
            None => break,
        };
        log::trace!("subtracting divisor * {} * 10^{}", 1 << k, shift);

        let mut subtrahend = multiples.limbs[k].clone();
        shl_decimal(&mut subtrahend, shift);
        let borrow = sub_assign_borrow(&mut remainder, &subtrahend);
        debug_assert_eq!(borrow, 0);
        remainder.truncate(significant_len(&remainder));

        // 8 * 10^8 still fits a limb
        let digit = (1 << k) * POWERS_OF_TEN[shift % DIGITS_PER_LIMB];
        add_limb_at(&mut quotient, shift / DIGITS_PER_LIMB, digit);
    }

    (quotient, remainder)
}

impl Bigint {
    /// Quotient truncated toward zero, and the remainder, whose sign
    /// follows the dividend: `self == q * divisor + r`.
    pub fn div_rem(&self, divisor: &Bigint) -> Result<(Bigint, Bigint)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self.magnitude() < divisor.magnitude() {
            return Ok((Bigint::zero(), self.clone()));
        }

        let (quotient, remainder) = div_rem_magnitudes(&self.limbs, &divisor.limbs);
        let quotient = Bigint::from_limbs(self.positive == divisor.positive, quotient);
        let remainder = Bigint::from_limbs(self.positive, remainder);
        Ok((quotient, remainder))
    }

    /// Quotient truncated toward zero.
    pub fn checked_div(&self, divisor: &Bigint) -> Result<Bigint> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder modulo a native divisor; the sign follows `self`.
    pub fn checked_rem(&self, divisor: i64) -> Result<i64> {
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }

        // Horner over the limbs, reduced at every step
        let modulus = divisor.unsigned_abs() as u128;
        let remainder = self.limbs.iter().rev().fold(0u128, |remainder, &limb| {
            (remainder * BASE as u128 + limb as u128) % modulus
        });

        // remainder < 2^63
        let remainder = remainder as i64;
        Ok(if self.positive { remainder } else { -remainder })
    }
}

impl Div for &Bigint {
    type Output = Bigint;

    /// Panics if `divisor` is zero.
    fn div(self, divisor: Self) -> Self::Output {
        match self.checked_div(divisor) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{}", error),
        }
    }
}

impl DivAssign<&Bigint> for Bigint {
    fn div_assign(&mut self, divisor: &Bigint) {
        *self = &*self / divisor;
    }
}

impl Rem for &Bigint {
    type Output = Bigint;

    /// Panics if `divisor` is zero.
    fn rem(self, divisor: Self) -> Self::Output {
        match self.div_rem(divisor) {
            Ok((_, remainder)) => remainder,
            Err(error) => panic!("{}", error),
        }
    }
}

impl RemAssign<&Bigint> for Bigint {
    fn rem_assign(&mut self, divisor: &Bigint) {
        *self = &*self % divisor;
    }
}

forward_binop!(impl Div, div, DivAssign, div_assign);
forward_binop!(impl Rem, rem, RemAssign, rem_assign);

impl Rem<i64> for &Bigint {
    type Output = i64;

    /// Panics if `divisor` is zero.
    fn rem(self, divisor: i64) -> Self::Output {
        match self.checked_rem(divisor) {
            Ok(remainder) => remainder,
            Err(error) => panic!("{}", error),
        }
    }
}

impl Rem<i64> for Bigint {
    type Output = i64;

    fn rem(self, divisor: i64) -> Self::Output {
        &self % divisor
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::*;

    #[test]
    fn single_limb() {
        assert_eq!(div_digits(1, 0, 2), (HALF, 0));
        assert_eq!(div_digits(N2, N1, N1), (N1, N2));

        let mut x = [1, 2, 3];
        assert_eq!(div_rem_assign_digit(&mut x, 2), 1);
        assert_eq!(x, [0, HALF + 1, 1]);
    }

    #[test]
    fn products_divide_back() {
        for &(a, b, c) in MUL_TRIPLES {
            let a = Bigint::from_limbs(true, a.to_vec());
            let b = Bigint::from_limbs(true, b.to_vec());
            let c = Bigint::from_limbs(true, c.to_vec());

            if !a.is_zero() {
                assert_op!(c / a == b);
                assert_op!(c % a == Bigint::zero());
                assert_eq!(c.div_rem(&a), Ok((b.clone(), Bigint::zero())));
            }
            if !b.is_zero() {
                assert_op!(c / b == a);
                assert_op!(c % b == Bigint::zero());
                assert_eq!(c.div_rem(&b), Ok((a.clone(), Bigint::zero())));
            }
        }
    }

    #[test]
    fn quotients_and_remainders() {
        for &(a, b, c, d) in DIV_REM_QUADRUPLES {
            let (q, r) = div_rem_magnitudes(a, b);
            assert_eq!(q, c);
            assert_eq!(r, d);

            let a = Bigint::from_limbs(true, a.to_vec());
            let b = Bigint::from_limbs(true, b.to_vec());
            let c = Bigint::from_limbs(true, c.to_vec());
            let d = Bigint::from_limbs(true, d.to_vec());
            assert_op!(a / b == c);
            assert_op!(a % b == d);
        }
    }

    #[test]
    fn signs() {
        assert_eq!(Bigint::from(8) / Bigint::from(2), Bigint::from(4));
        assert_eq!(Bigint::from(141) / Bigint::from(2), Bigint::from(70));
        assert_eq!(Bigint::from(1411) / Bigint::from(123), Bigint::from(11));
        assert_eq!(Bigint::from(-141) / Bigint::from(2), Bigint::from(-70));
        assert_eq!(Bigint::from(1411) / Bigint::from(-123), Bigint::from(-11));
        assert_eq!(Bigint::from(-141) / Bigint::from(-2), Bigint::from(70));

        assert_eq!(Bigint::from(1411) % Bigint::from(-123), Bigint::from(58));
        assert_eq!(Bigint::from(-1411) % Bigint::from(123), Bigint::from(-58));

        let (q, r) = Bigint::from(-5).div_rem(&Bigint::from(7)).unwrap();
        assert!(q.is_zero());
        assert!(!q.is_negative());
        assert_eq!(r, -5i64);
    }

    #[test]
    fn long_division() {
        let a = Bigint::from("23472331074189168931468914618941490718913");
        let b = Bigint::from(942394729842789i64);
        assert_eq!((&a / &b).to_string(), "24907111989160678895558821");
        assert_eq!((&a % &b).to_string(), "793377858527144");

        let (q, r) = big_a().div_rem(&-big_b()).unwrap();
        assert_eq!(q.to_string(), "-148086569453788921652");
        assert_eq!(r.to_string(), "245190847223424078348");
        assert_eq!(&q * &-big_b() + &r, big_a());
    }

    #[test]
    fn limb_boundaries() {
        let a = Bigint::from("1000000000000000000");
        assert_eq!((&a / &Bigint::from(7)).to_string(), "142857142857142857");

        let a = Bigint::from("999999999999999999999999999");
        let b = Bigint::from("1000000001");
        assert_eq!((&a / &b).to_string(), "999999999000000000");
        assert_eq!((&a % &b).to_string(), "999999999");

        // dividend and divisor of the same length, quotient 1
        let a = Bigint::from("1999999999999");
        let b = Bigint::from("1000000000001");
        assert_eq!(&a / &b, 1i64);
        assert_eq!(&a % &b, Bigint::from("999999999998"));
    }

    #[test]
    fn assign_forms() {
        let mut x = big_a();
        x /= big_b();
        x /= &Bigint::from(-4);
        assert_eq!(x.to_string(), "-37021642363447230413");

        x %= Bigint::from(1_000_000);
        assert_eq!(x, -230413i64);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(Bigint::from(123).checked_div(&Bigint::zero()), Err(Error::DivisionByZero));
        assert_eq!(Bigint::from(123).div_rem(&Bigint::zero()), Err(Error::DivisionByZero));
        assert_eq!(Bigint::from(123).checked_rem(0), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "divisor must be non-zero")]
    fn divide_by_zero_panics() {
        let _ = Bigint::from(123) / Bigint::zero();
    }

    #[test]
    fn native_modulo() {
        assert_eq!(Bigint::from(239847892391i64) % 13, 3);
        assert_eq!(Bigint::from(-239847892391i64) % 13, -3);
        assert_eq!(&Bigint::from(-239847892391i64) % -13, -3);
        assert_eq!(Bigint::from(239847892391i64) % -13, 3);
        assert_eq!(Bigint::zero() % 5, 0);

        let x = Bigint::from("18446744073709551621");
        assert_eq!(&x % i64::MIN, 5);
        assert_eq!(&x % i64::MAX, 7);
        assert_eq!(big_a() % 1_000_000_007, big_a().checked_rem(1_000_000_007).unwrap());
    }
}
