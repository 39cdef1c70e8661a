//! Truncating division and remainder.

use crate::bignum::{BigInteger, Limb, LIMB_BITS};
use crate::ops::sub_abs;
use e2ee_types::CryptoError;

/// Bit-level restoring long division of magnitudes: returns `(|a| / |b|, |a| % |b|)`.
///
/// `b` must be non-zero.
fn div_rem_abs(a: &BigInteger, b: &BigInteger) -> (BigInteger, BigInteger) {
    if a.cmp_abs(b).is_lt() {
        return (BigInteger::zero(), a.abs());
    }

    let bits = a.bit_len();
    let mut quotient: Vec<Limb> = vec![0; a.num_limbs()];
    let mut remainder = BigInteger::zero();

    for i in (0..bits).rev() {
        remainder.double_with(a.get_bit(i));
        if !remainder.cmp_abs(b).is_lt() {
            remainder = sub_abs(&remainder, b);
            quotient[i / LIMB_BITS] |= 1 << (i % LIMB_BITS);
        }
    }

    (BigInteger::from_limbs(quotient, false), remainder)
}

impl BigInteger {
    /// Division with remainder: returns `(quotient, remainder)`.
    ///
    /// The quotient is truncated toward zero and the remainder takes the
    /// sign of the dividend, so `self == quotient * divisor + remainder`
    /// and `|remainder| < |divisor|`.
    pub fn div_rem(&self, divisor: &BigInteger) -> Result<(BigInteger, BigInteger), CryptoError> {
        if divisor.is_zero() {
            return Err(CryptoError::BnDivisionByZero);
        }
        let (q, r) = div_rem_abs(self, divisor);
        Ok((
            q.with_sign(self.is_negative() != divisor.is_negative()),
            r.with_sign(self.is_negative()),
        ))
    }

    /// Truncating division, failing on a zero divisor.
    pub fn checked_div(&self, divisor: &BigInteger) -> Result<BigInteger, CryptoError> {
        let (q, _) = self.div_rem(divisor)?;
        Ok(q)
    }

    /// Truncating remainder, failing on a zero divisor.
    pub fn checked_rem(&self, divisor: &BigInteger) -> Result<BigInteger, CryptoError> {
        let (_, r) = self.div_rem(divisor)?;
        Ok(r)
    }

    /// Modular reduction into `[0, |modulus|)`.
    pub fn mod_reduce(&self, modulus: &BigInteger) -> Result<BigInteger, CryptoError> {
        let r = self.checked_rem(modulus)?;
        if r.is_negative() {
            Ok(sub_abs(modulus, &r))
        } else {
            Ok(r)
        }
    }
}

/// Operator form of [`BigInteger::checked_div`].
///
/// # Panics
///
/// Panics if the divisor is zero, like the primitive integer types.
fn div(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match a.checked_div(b) {
        Ok(q) => q,
        Err(e) => panic!("{e}"),
    }
}

/// Operator form of [`BigInteger::checked_rem`].
///
/// # Panics
///
/// Panics if the divisor is zero, like the primitive integer types.
fn rem(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match a.checked_rem(b) {
        Ok(r) => r,
        Err(e) => panic!("{e}"),
    }
}

forward_binop!(Div, div, div);
forward_binop!(Rem, rem, rem);
forward_assign!(DivAssign, div_assign, div);
forward_assign!(RemAssign, rem_assign, rem);

#[cfg(test)]
mod tests {
    use super::*;

    fn bn(v: i64) -> BigInteger {
        BigInteger::from(v)
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = bn(100).div_rem(&bn(7)).unwrap();
        assert_eq!(q, bn(14));
        assert_eq!(r, bn(2));
    }

    #[test]
    fn test_truncating_signs() {
        assert_eq!(bn(7) / bn(2), bn(3));
        assert_eq!(bn(7) % bn(2), bn(1));
        assert_eq!(bn(-7) / bn(2), bn(-3));
        assert_eq!(bn(-7) % bn(2), bn(-1));
        assert_eq!(bn(7) / bn(-2), bn(-3));
        assert_eq!(bn(7) % bn(-2), bn(1));
        assert_eq!(bn(-7) / bn(-2), bn(3));
        assert_eq!(bn(-7) % bn(-2), bn(-1));
    }

    #[test]
    fn test_division_identity_all_signs() {
        for a in [-1000i64, -255, -256, -1, 0, 1, 255, 256, 1000, 65537] {
            for b in [-300i64, -7, -1, 1, 2, 7, 256, 300] {
                let (q, r) = bn(a).div_rem(&bn(b)).unwrap();
                assert_eq!(q, bn(a / b), "{a} / {b}");
                assert_eq!(r, bn(a % b), "{a} % {b}");
                assert_eq!(&q * &bn(b) + &r, bn(a));
            }
        }
    }

    #[test]
    fn test_exact_zero_results_are_non_negative() {
        let (q, r) = bn(-6).div_rem(&bn(3)).unwrap();
        assert_eq!(q, bn(-2));
        assert!(r.is_zero());
        assert!(!r.is_negative());

        let (q, r) = bn(-2).div_rem(&bn(5)).unwrap();
        assert!(q.is_zero());
        assert!(!q.is_negative());
        assert_eq!(r, bn(-2));
    }

    #[test]
    fn test_div_by_zero() {
        let zero = BigInteger::zero();
        assert_eq!(bn(100).div_rem(&zero), Err(CryptoError::BnDivisionByZero));
        assert_eq!(bn(100).checked_div(&zero), Err(CryptoError::BnDivisionByZero));
        assert_eq!(bn(100).checked_rem(&zero), Err(CryptoError::BnDivisionByZero));
        assert_eq!(bn(100).mod_reduce(&zero), Err(CryptoError::BnDivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = bn(1) / BigInteger::zero();
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_rem_operator_panics_on_zero() {
        let _ = bn(1) % BigInteger::zero();
    }

    #[test]
    fn test_mod_reduce() {
        assert_eq!(bn(-7).mod_reduce(&bn(5)).unwrap(), bn(3));
        assert_eq!(bn(-7).mod_reduce(&bn(-5)).unwrap(), bn(3));
        assert_eq!(bn(7).mod_reduce(&bn(5)).unwrap(), bn(2));
        assert!(bn(-10).mod_reduce(&bn(5)).unwrap().is_zero());
    }

    #[test]
    fn test_multi_limb_division() {
        let a = BigInteger::from(u128::MAX);
        let b = BigInteger::from(u64::MAX);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, BigInteger::from((1u128 << 64) + 1));
        assert!(r.is_zero());
    }

    #[test]
    fn test_assign_forms() {
        let mut n = bn(1000);
        n /= bn(7);
        assert_eq!(n, bn(142));
        n %= &bn(10);
        assert_eq!(n, bn(2));
    }
}
