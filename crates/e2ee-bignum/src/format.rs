//! Textual formatting in radix 2 through 16.

use std::fmt;

use crate::bignum::{BigInteger, DoubleLimb, Limb, LIMB_BITS};
use e2ee_types::CryptoError;

const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Short division of a magnitude by a single limb: returns `(quotient, remainder)`.
fn div_rem_limb(limbs: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    let mut quotient = vec![0; limbs.len()];
    let mut rem: DoubleLimb = 0;
    for (i, &limb) in limbs.iter().enumerate().rev() {
        let acc = (rem << LIMB_BITS) | limb as DoubleLimb;
        quotient[i] = (acc / divisor as DoubleLimb) as Limb;
        rem = acc % divisor as DoubleLimb;
    }
    while quotient.last() == Some(&0) {
        quotient.pop();
    }
    (quotient, rem as Limb)
}

impl BigInteger {
    /// Magnitude digits, most significant first, by repeated division by `radix`.
    fn magnitude_digits(&self, radix: Limb, table: &[u8; 16]) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut digits = Vec::new();
        let mut rest = self.limbs().to_vec();
        while !rest.is_empty() {
            let (quotient, digit) = div_rem_limb(&rest, radix);
            digits.push(table[digit as usize]);
            rest = quotient;
        }
        digits.reverse();
        digits.into_iter().map(char::from).collect()
    }

    /// Format in the given radix (2..=16), lowercase, with a leading `-`
    /// for negative values and no base prefix.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, CryptoError> {
        if !(2..=16).contains(&radix) {
            return Err(CryptoError::InvalidArg);
        }
        let digits = self.magnitude_digits(radix as Limb, DIGITS_LOWER);
        if self.is_negative() {
            Ok(format!("-{digits}"))
        } else {
            Ok(digits)
        }
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits(10, DIGITS_LOWER))
    }
}

impl fmt::LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(16, DIGITS_LOWER))
    }
}

impl fmt::UpperHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(16, DIGITS_UPPER))
    }
}

impl fmt::Octal for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_digits(8, DIGITS_LOWER))
    }
}

impl fmt::Binary for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.magnitude_digits(2, DIGITS_LOWER))
    }
}
