//! Randomized checks of the arithmetic identities, with limbs biased
//! toward the base boundaries.

use proptest::prelude::*;

use crate::fixtures::{HALF, N1};
use crate::{Bigint, Digit, BASE};

const CASES: u32 = if cfg!(feature = "extended-testing") { 4096 } else { 256 };

fn limb() -> impl Strategy<Value = Digit> {
    prop_oneof![
        Just(0),
        Just(1),
        Just(HALF),
        Just(N1),
        0..BASE,
    ]
}

fn bigint(max_limbs: usize) -> impl Strategy<Value = Bigint> {
    (any::<bool>(), prop::collection::vec(limb(), 0..=max_limbs))
        .prop_map(|(positive, limbs)| Bigint::from_limbs(positive, limbs))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(CASES))]

    #[test]
    fn addition_round_trips(a in bigint(8), b in bigint(8)) {
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(&(&a - &b) + &b, a.clone());
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn identities(a in bigint(8)) {
        prop_assert_eq!(&a * 1, a.clone());
        prop_assert_eq!(&a * Bigint::one(), a.clone());
        prop_assert!((&a * 0).is_zero());
        prop_assert!(!(&a * Bigint::zero()).is_negative());
        prop_assert_eq!(-(-&a), a.clone());
        prop_assert!((&a - &a).is_zero());
    }

    #[test]
    fn division_reconstructs(a in bigint(8), b in bigint(4)) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&q * &b + &r, a.clone());
        prop_assert!(r.magnitude() < b.magnitude());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        prop_assert_eq!(&a / &b, q);
    }

    #[test]
    fn native_modulo_agrees(a in bigint(6), n in any::<i64>()) {
        prop_assume!(n != 0);
        let expected = (&a % &Bigint::from(n)).to_i64();
        prop_assert_eq!(Some(&a % n), expected);
    }

    #[test]
    fn power_steps(a in bigint(2), n in 0u32..24) {
        prop_assert_eq!(a.pow(n + 1), &a.pow(n) * &a);
        prop_assert_eq!(a.pow(0), Bigint::one());
    }

    #[test]
    fn against_native(x in any::<i64>(), y in any::<i64>()) {
        let (a, b) = (Bigint::from(x), Bigint::from(y));
        let (x, y) = (x as i128, y as i128);

        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        prop_assert_eq!((&a + &b).to_string(), (x + y).to_string());
        prop_assert_eq!((&a - &b).to_string(), (x - y).to_string());
        prop_assert_eq!((&a * &b).to_string(), (x * y).to_string());
        prop_assert_eq!((&a + y as i64).to_string(), (x + y).to_string());
        prop_assert_eq!((&a - y as i64).to_string(), (x - y).to_string());
        prop_assert_eq!((&a * y as i64).to_string(), (x * y).to_string());
        if y != 0 {
            prop_assert_eq!((&a / &b).to_string(), (x / y).to_string());
            prop_assert_eq!((&a % &b).to_string(), (x % y).to_string());
            prop_assert_eq!((&a % y as i64) as i128, x % y);
        }
    }

    #[test]
    fn order_follows_difference(a in bigint(5), b in bigint(5)) {
        prop_assert_eq!(a < b, (&a - &b).is_negative());
        prop_assert_eq!(a == b, (&a - &b).is_zero());
        prop_assert_eq!(a.magnitude() < b.magnitude(), {
            let (mut x, mut y) = (a.clone(), b.clone());
            *x.abs() < *y.abs()
        });
    }

    #[test]
    fn decimal_round_trip(a in bigint(8)) {
        let text = a.to_string();
        prop_assert_eq!(Bigint::from(text.as_str()), a.clone());
        prop_assert_eq!(text.trim_start_matches('-').len(), a.digits().max(1));
    }

    #[test]
    fn decimal_shifts(a in bigint(5), n in 0usize..40) {
        let mut x = a.clone();
        x.add_zeroes(n);
        prop_assert_eq!(&x, &(&a * Bigint::from(10).pow(n as u32)));
        x.remove_digits(n);
        prop_assert_eq!(x, a);
    }
}
