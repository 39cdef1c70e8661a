//! Parsing of prefixed integer literals.
//!
//! Accepted forms: an optional leading `-`, then
//! `0b<binary>`, `0x<hex>`, `0<octal>`, a lone `0`, or `<decimal>`.

use std::str::FromStr;

use crate::bignum::{BigInteger, DoubleLimb, Limb, LIMB_BITS};
use e2ee_types::{CryptoError, LiteralError};

/// Split a sign-stripped literal into its radix and digit body.
///
/// Returns `None` for the lone `0` literal.
fn split_radix(text: &str) -> Option<(u32, &str)> {
    match text.strip_prefix('0') {
        None => Some((10, text)),
        Some("") => None,
        Some(rest) => {
            if let Some(body) = rest.strip_prefix('b') {
                Some((2, body))
            } else if let Some(body) = rest.strip_prefix('x') {
                Some((16, body))
            } else {
                Some((8, rest))
            }
        }
    }
}

/// `limbs = limbs * mul + add`, in place.
fn mul_add_small(limbs: &mut Vec<Limb>, mul: Limb, add: Limb) {
    let mut carry = add as DoubleLimb;
    for limb in limbs.iter_mut() {
        let acc = *limb as DoubleLimb * mul as DoubleLimb + carry;
        *limb = acc as Limb;
        carry = acc >> LIMB_BITS;
    }
    if carry != 0 {
        limbs.push(carry as Limb);
    }
}

impl BigInteger {
    /// Parse a literal such as `"-42"`, `"0x1F"`, `"017"` or `"0b101"`.
    pub fn parse(text: &str) -> Result<BigInteger, CryptoError> {
        if text.is_empty() {
            return Err(LiteralError::Empty.into());
        }
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some("") => return Err(LiteralError::BareSign.into()),
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let Some((radix, body)) = split_radix(unsigned) else {
            return Ok(BigInteger::zero());
        };
        if body.is_empty() {
            return Err(LiteralError::EmptyBody.into());
        }

        let mut limbs = Vec::new();
        for c in body.chars() {
            let digit = c
                .to_digit(radix)
                .ok_or(LiteralError::InvalidDigit { digit: c, radix })?;
            mul_add_small(&mut limbs, radix as Limb, digit as Limb);
        }

        Ok(BigInteger::from_limbs(limbs, negative))
    }
}

impl FromStr for BigInteger {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInteger::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    fn reason(s: &str) -> LiteralError {
        match BigInteger::parse(s) {
            Err(CryptoError::BnMalformedLiteral { reason }) => reason,
            other => panic!("{s:?} parsed as {other:?}"),
        }
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(parse("0b101"), BigInteger::from(5));
        assert_eq!(parse("0x1F"), BigInteger::from(31));
        assert_eq!(parse("0x1f"), BigInteger::from(31));
        assert_eq!(parse("017"), BigInteger::from(15));
        assert_eq!(parse("42"), BigInteger::from(42));
        assert_eq!(parse("-42"), BigInteger::from(-42));
        assert_eq!(parse("-0x10"), BigInteger::from(-16));
    }

    #[test]
    fn test_zero_literals() {
        for s in ["0", "-0", "00", "0x0", "0b000", "-0b0"] {
            let z = parse(s);
            assert!(z.is_zero(), "{s}");
            assert!(!z.is_negative(), "{s}");
        }
    }

    #[test]
    fn test_malformed() {
        assert_eq!(reason(""), LiteralError::Empty);
        assert_eq!(reason("-"), LiteralError::BareSign);
        assert_eq!(reason("0x"), LiteralError::EmptyBody);
        assert_eq!(reason("-0b"), LiteralError::EmptyBody);
        assert_eq!(reason("0xg"), LiteralError::InvalidDigit { digit: 'g', radix: 16 });
        assert_eq!(reason("12a"), LiteralError::InvalidDigit { digit: 'a', radix: 10 });
        assert_eq!(reason("08"), LiteralError::InvalidDigit { digit: '8', radix: 8 });
        assert_eq!(reason("0b102"), LiteralError::InvalidDigit { digit: '2', radix: 2 });
        assert_eq!(reason("--1"), LiteralError::InvalidDigit { digit: '-', radix: 10 });
        assert_eq!(reason("+1"), LiteralError::InvalidDigit { digit: '+', radix: 10 });
        assert_eq!(reason("0X1"), LiteralError::InvalidDigit { digit: 'X', radix: 8 });
    }

    #[test]
    fn test_long_decimal() {
        let n = parse("340282366920938463463374607431768211456");
        let mut expected = BigInteger::zero();
        expected.set_bit(128, true);
        assert_eq!(n, expected);
    }

    #[test]
    fn test_long_hex() {
        let n = parse("0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF");
        assert_eq!(n, BigInteger::from(u128::MAX));
    }
}
