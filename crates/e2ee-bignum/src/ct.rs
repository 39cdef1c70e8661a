//! Constant-time comparison for big integers.
//!
//! Avoids data-dependent branching on limb values so secrets can be compared
//! without a timing side channel. The limb count itself is not hidden.

use crate::bignum::BigInteger;
use subtle::{Choice, ConstantTimeEq};

impl BigInteger {
    /// Constant-time equality over the longer of the two limb lengths.
    pub fn ct_eq(&self, other: &BigInteger) -> Choice {
        let max_len = self.num_limbs().max(other.num_limbs());
        let mut result = (self.is_negative() as u8).ct_eq(&(other.is_negative() as u8));

        for i in 0..max_len {
            result &= self.limb(i).ct_eq(&other.limb(i));
        }

        result
    }
}

impl ConstantTimeEq for BigInteger {
    fn ct_eq(&self, other: &Self) -> Choice {
        BigInteger::ct_eq(self, other)
    }
}
