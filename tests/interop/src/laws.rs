//! Algebraic laws of BigInteger, checked against `i128` arithmetic where the
//! operands fit and against each other where they do not.

use std::cmp::Ordering;

use e2ee_bignum::BigInteger;
use proptest::prelude::*;

fn big(v: i64) -> BigInteger {
    BigInteger::from(v)
}

/// Arbitrary values spanning zero to ~40 limbs, both signs.
fn any_bignum() -> impl Strategy<Value = BigInteger> {
    (any::<bool>(), prop::collection::vec(any::<u8>(), 0..40))
        .prop_map(|(negative, limbs)| BigInteger::from_limbs(limbs, negative))
}

proptest! {
    #[test]
    fn add_sub_match_i128(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (a as i128, b as i128);
        prop_assert_eq!(big(a) + big(b), BigInteger::from(x + y));
        prop_assert_eq!(big(a) - big(b), BigInteger::from(x - y));
    }

    #[test]
    fn mul_matches_i128(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(big(a) * big(b), BigInteger::from(a as i128 * b as i128));
    }

    #[test]
    fn div_rem_match_i128(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
        let (x, y) = (a as i128, b as i128);
        let (q, r) = big(a).div_rem(&big(b)).unwrap();
        prop_assert_eq!(q, BigInteger::from(x / y));
        prop_assert_eq!(r, BigInteger::from(x % y));
    }

    #[test]
    fn ordering_matches_i64(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(big(a).cmp(&big(b)), a.cmp(&b));
    }

    #[test]
    fn add_then_sub_is_identity(a in any_bignum(), b in any_bignum()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn double_negation(a in any_bignum()) {
        prop_assert_eq!(-(-&a), a);
    }

    #[test]
    fn exact_multiple_divides_back(a in any_bignum(), b in any_bignum()) {
        prop_assume!(!b.is_zero());
        let product = &a * &b;
        let (q, r) = product.div_rem(&b).unwrap();
        prop_assert_eq!(q, a);
        prop_assert!(r.is_zero());
    }

    #[test]
    fn division_identity(a in any_bignum(), b in any_bignum()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert_eq!(r.cmp_abs(&b), Ordering::Less);
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
    }

    #[test]
    fn ordering_is_total_and_transitive(a in any_bignum(), b in any_bignum(), c in any_bignum()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
        prop_assert_eq!(a.cmp(&b), (&a - &b).signum().cmp(&0));
    }

    #[test]
    fn display_reparses(a in any_bignum()) {
        prop_assert_eq!(a.to_string().parse::<BigInteger>().unwrap(), a.clone());
        prop_assert_eq!(format!("{a:#x}").parse::<BigInteger>().unwrap(), a);
    }

    #[test]
    fn codec_roundtrip(a in any_bignum()) {
        prop_assert_eq!(BigInteger::from_bytes(&a.to_bytes().unwrap()).unwrap(), a);
    }

    #[test]
    fn mod_pow_matches_pow(base in any::<i32>(), exp in 0u32..24, m in 1i64..1_000_000) {
        let modulus = big(m);
        let base = BigInteger::from(base);
        let exp = BigInteger::from(exp);
        let expected = base.pow(&exp).unwrap().mod_reduce(&modulus).unwrap();
        prop_assert_eq!(base.mod_pow(&exp, &modulus).unwrap(), expected);
    }
}
