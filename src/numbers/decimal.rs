//! Decimal text in and out.
//!
//! Parsing is total: any byte that is not an ASCII digit contributes zero
//! to its position instead of failing the whole number.

use alloc::{string::String, vec::Vec};
use core::{convert::Infallible, fmt::{self, Write}, str::FromStr};

use super::Bigint;
use crate::digit::{Digit, DIGITS_PER_LIMB};

/// Scans right-to-left in chunks of nine bytes, one chunk per limb.
pub(crate) fn parse_decimal(text: &[u8]) -> Bigint {
    let (positive, digits) = match text.split_first() {
        Some((b'-', rest)) => (false, rest),
        _ => (true, text),
    };

    let mut limbs = Vec::with_capacity(digits.len() / DIGITS_PER_LIMB + 1);
    for chunk in digits.rchunks(DIGITS_PER_LIMB) {
        let limb = chunk.iter().fold(0, |limb: Digit, &byte| {
            let digit = if byte.is_ascii_digit() { (byte - b'0') as Digit } else { 0 };
            limb * 10 + digit
        });
        limbs.push(limb);
    }

    let mut x = Bigint { positive, limbs };
    x.normalize();
    x
}

impl Bigint {
    /// Decimal digits of the magnitude, without sign.
    ///
    /// With `grouped`, digits are separated in threes by `_`.
    fn magnitude_to_decimal(&self, grouped: bool) -> String {
        let mut digits = String::with_capacity(self.limbs.len() * DIGITS_PER_LIMB);
        match self.limbs.split_last() {
            None => digits.push('0'),
            Some((leading, rest)) => {
                // writing into a String cannot fail
                let _ = write!(digits, "{}", leading);
                for limb in rest.iter().rev() {
                    let _ = write!(digits, "{:09}", limb);
                }
            }
        }

        if !grouped {
            return digits;
        }
        let mut separated = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                separated.push('_');
            }
            separated.push(c);
        }
        separated
    }

    /// Reads one whitespace-delimited token and parses it as decimal text.
    ///
    /// Fails with `UnexpectedEof` if the reader holds nothing but whitespace.
    #[cfg(feature = "std")]
    pub fn read_from<R: std::io::BufRead>(reader: &mut R) -> std::io::Result<Self> {
        let mut token = Vec::new();
        loop {
            let buffer = reader.fill_buf()?;
            if buffer.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &byte in buffer {
                if byte.is_ascii_whitespace() {
                    if !token.is_empty() {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                }
                used += 1;
            }
            reader.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no number to read",
            ));
        }
        log::trace!("read token of {} bytes", token.len());
        Ok(parse_decimal(&token))
    }
}

impl From<&str> for Bigint {
    fn from(text: &str) -> Self {
        parse_decimal(text.as_bytes())
    }
}

impl FromStr for Bigint {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(parse_decimal(text.as_bytes()))
    }
}

impl fmt::Display for Bigint {
    /// Respects width, fill, `+` and `0` flags; `{:#}` groups digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.magnitude_to_decimal(f.alternate());
        f.pad_integral(self.positive, "", &digits)
    }
}
