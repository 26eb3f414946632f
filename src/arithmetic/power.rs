use alloc::collections::BTreeMap;

use crate::Bigint;

/// Computed powers of one base, by exponent.
type Memo = BTreeMap<u32, Bigint>;

/// $base^n$ for `n >= 1`, splitting off the largest power of two.
///
/// With `c` that power: $base^n = (base^{n/2})^2$ if `n == c`, otherwise
/// $base^c \cdot base^{n - c}$. Every sub-power lands in `memo`.
fn power(base: &Bigint, n: u32, memo: &mut Memo) -> Bigint {
    if n == 1 {
        return base.clone();
    }
    if let Some(known) = memo.get(&n) {
        return known.clone();
    }

    let closest = 1 << (u32::BITS - 1 - n.leading_zeros());
    let result = if n == closest {
        let half = power(base, n / 2, memo);
        &half * &half
    } else {
        let high = power(base, closest, memo);
        let low = power(base, n - closest, memo);
        &high * &low
    };

    memo.insert(n, result.clone());
    result
}

impl Bigint {
    /// Raises to `exponent`, with `x.pow(0) == 1` for every `x`, zero included.
    pub fn pow(&self, exponent: u32) -> Bigint {
        match exponent {
            0 => Bigint::one(),
            1 => self.clone(),
            _ => {
                let mut base = self.clone();
                if exponent % 2 == 0 {
                    base.abs();
                }
                let mut memo = Memo::new();
                let result = power(&base, exponent, &mut memo);
                log::debug!("power {} done, {} intermediate powers kept", exponent, memo.len());
                result
            }
        }
    }

    /// In-place form of [`pow`][Bigint::pow].
    pub fn pow_assign(&mut self, exponent: u32) -> &mut Self {
        if exponent != 1 {
            *self = self.pow(exponent);
        }
        self
    }
}
