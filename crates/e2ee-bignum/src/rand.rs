//! Random big integer generation using OS randomness.

use crate::bignum::BigInteger;
use e2ee_types::CryptoError;

impl BigInteger {
    /// Draw `len` random bytes as a non-negative value in `[0, 256^len)`.
    pub fn random_bytes(len: usize) -> Result<BigInteger, CryptoError> {
        let mut buf = vec![0u8; len];
        getrandom::getrandom(&mut buf).map_err(|_| CryptoError::BnRandGenFail)?;
        Ok(BigInteger::from_limbs(buf, false))
    }

    /// Draw `len` random bytes, retrying until the value is non-zero.
    pub fn random_nonzero_bytes(len: usize) -> Result<BigInteger, CryptoError> {
        if len == 0 {
            return Err(CryptoError::InvalidArg);
        }
        loop {
            let candidate = BigInteger::random_bytes(len)?;
            if !candidate.is_zero() {
                return Ok(candidate);
            }
        }
    }

    /// Generate a random BigInteger uniformly in `[1, upper)`.
    ///
    /// Uses rejection sampling over `upper.bit_len()` bits.
    pub fn random_range(upper: &BigInteger) -> Result<BigInteger, CryptoError> {
        if upper.is_negative() || *upper <= BigInteger::one() {
            return Err(CryptoError::InvalidArg);
        }

        let bits = upper.bit_len();
        let excess = upper.num_limbs() * 8 - bits;

        loop {
            let mut buf = vec![0u8; upper.num_limbs()];
            getrandom::getrandom(&mut buf).map_err(|_| CryptoError::BnRandGenFail)?;

            // Mask excess bits in the most significant limb
            if let Some(top) = buf.last_mut() {
                *top &= 0xFF >> excess;
            }

            let candidate = BigInteger::from_limbs(buf, false);
            if !candidate.is_zero() && candidate < *upper {
                return Ok(candidate);
            }
        }
    }
}
