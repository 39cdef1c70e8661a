//! Exponentiation by square-and-multiply.

use crate::bignum::BigInteger;
use e2ee_types::CryptoError;

impl BigInteger {
    /// Raise to a non-negative power: `self^exp`.
    ///
    /// `x^0` is one for every `x`, including zero. Negative exponents are
    /// rejected with [`CryptoError::BnNegativeExponent`].
    pub fn pow(&self, exp: &BigInteger) -> Result<BigInteger, CryptoError> {
        if exp.is_negative() {
            return Err(CryptoError::BnNegativeExponent);
        }

        let mut result = BigInteger::one();
        let mut base = self.clone();
        let exp_bits = exp.bit_len();

        for i in 0..exp_bits {
            if exp.get_bit(i) {
                result *= &base;
            }
            if i + 1 < exp_bits {
                base = base.square();
            }
        }

        Ok(result)
    }

    /// Modular exponentiation: `self^exp mod modulus`, in `[0, |modulus|)`.
    ///
    /// Every intermediate product is reduced, so the operands never grow past
    /// twice the width of the modulus.
    pub fn mod_pow(&self, exp: &BigInteger, modulus: &BigInteger) -> Result<BigInteger, CryptoError> {
        if modulus.is_zero() {
            return Err(CryptoError::BnDivisionByZero);
        }
        if exp.is_negative() {
            return Err(CryptoError::BnNegativeExponent);
        }

        let mut result = BigInteger::one().mod_reduce(modulus)?;
        let mut base = self.mod_reduce(modulus)?;
        let exp_bits = exp.bit_len();

        for i in 0..exp_bits {
            if exp.get_bit(i) {
                result = (&result * &base).mod_reduce(modulus)?;
            }
            if i + 1 < exp_bits {
                base = base.square().mod_reduce(modulus)?;
            }
        }

        Ok(result)
    }
}
