//! Engine configuration: group parameters and exponent size.

use std::fmt;

use e2ee_bignum::BigInteger;
use e2ee_types::CryptoError;

/// RFC 3526 §4 3072-bit MODP group (group 15) prime, big-endian.
const MODP_3072_P: [u8; 384] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC9, 0x0F, 0xDA, 0xA2,
    0x21, 0x68, 0xC2, 0x34, 0xC4, 0xC6, 0x62, 0x8B, 0x80, 0xDC, 0x1C, 0xD1,
    0x29, 0x02, 0x4E, 0x08, 0x8A, 0x67, 0xCC, 0x74, 0x02, 0x0B, 0xBE, 0xA6,
    0x3B, 0x13, 0x9B, 0x22, 0x51, 0x4A, 0x08, 0x79, 0x8E, 0x34, 0x04, 0xDD,
    0xEF, 0x95, 0x19, 0xB3, 0xCD, 0x3A, 0x43, 0x1B, 0x30, 0x2B, 0x0A, 0x6D,
    0xF2, 0x5F, 0x14, 0x37, 0x4F, 0xE1, 0x35, 0x6D, 0x6D, 0x51, 0xC2, 0x45,
    0xE4, 0x85, 0xB5, 0x76, 0x62, 0x5E, 0x7E, 0xC6, 0xF4, 0x4C, 0x42, 0xE9,
    0xA6, 0x37, 0xED, 0x6B, 0x0B, 0xFF, 0x5C, 0xB6, 0xF4, 0x06, 0xB7, 0xED,
    0xEE, 0x38, 0x6B, 0xFB, 0x5A, 0x89, 0x9F, 0xA5, 0xAE, 0x9F, 0x24, 0x11,
    0x7C, 0x4B, 0x1F, 0xE6, 0x49, 0x28, 0x66, 0x51, 0xEC, 0xE4, 0x5B, 0x3D,
    0xC2, 0x00, 0x7C, 0xB8, 0xA1, 0x63, 0xBF, 0x05, 0x98, 0xDA, 0x48, 0x36,
    0x1C, 0x55, 0xD3, 0x9A, 0x69, 0x16, 0x3F, 0xA8, 0xFD, 0x24, 0xCF, 0x5F,
    0x83, 0x65, 0x5D, 0x23, 0xDC, 0xA3, 0xAD, 0x96, 0x1C, 0x62, 0xF3, 0x56,
    0x20, 0x85, 0x52, 0xBB, 0x9E, 0xD5, 0x29, 0x07, 0x70, 0x96, 0x96, 0x6D,
    0x67, 0x0C, 0x35, 0x4E, 0x4A, 0xBC, 0x98, 0x04, 0xF1, 0x74, 0x6C, 0x08,
    0xCA, 0x18, 0x21, 0x7C, 0x32, 0x90, 0x5E, 0x46, 0x2E, 0x36, 0xCE, 0x3B,
    0xE3, 0x9E, 0x77, 0x2C, 0x18, 0x0E, 0x86, 0x03, 0x9B, 0x27, 0x83, 0xA2,
    0xEC, 0x07, 0xA2, 0x8F, 0xB5, 0xC5, 0x5D, 0xF0, 0x6F, 0x4C, 0x52, 0xC9,
    0xDE, 0x2B, 0xCB, 0xF6, 0x95, 0x58, 0x17, 0x18, 0x39, 0x95, 0x49, 0x7C,
    0xEA, 0x95, 0x6A, 0xE5, 0x15, 0xD2, 0x26, 0x18, 0x98, 0xFA, 0x05, 0x10,
    0x15, 0x72, 0x8E, 0x5A, 0x8A, 0xAA, 0xC4, 0x2D, 0xAD, 0x33, 0x17, 0x0D,
    0x04, 0x50, 0x7A, 0x33, 0xA8, 0x55, 0x21, 0xAB, 0xDF, 0x1C, 0xBA, 0x64,
    0xEC, 0xFB, 0x85, 0x04, 0x58, 0xDB, 0xEF, 0x0A, 0x8A, 0xEA, 0x71, 0x57,
    0x5D, 0x06, 0x0C, 0x7D, 0xB3, 0x97, 0x0F, 0x85, 0xA6, 0xE1, 0xE4, 0xC7,
    0xAB, 0xF5, 0xAE, 0x8C, 0xDB, 0x09, 0x33, 0xD7, 0x1E, 0x8C, 0x94, 0xE0,
    0x4A, 0x25, 0x61, 0x9D, 0xCE, 0xE3, 0xD2, 0x26, 0x1A, 0xD2, 0xEE, 0x6B,
    0xF1, 0x2F, 0xFA, 0x06, 0xD9, 0x8A, 0x08, 0x64, 0xD8, 0x76, 0x02, 0x73,
    0x3E, 0xC8, 0x6A, 0x64, 0x52, 0x1F, 0x2B, 0x18, 0x17, 0x7B, 0x20, 0x0C,
    0xBB, 0xE1, 0x17, 0x57, 0x7A, 0x61, 0x5D, 0x6C, 0x77, 0x09, 0x88, 0xC0,
    0xBA, 0xD9, 0x46, 0xE2, 0x08, 0xE2, 0x4F, 0xA0, 0x74, 0xE5, 0xAB, 0x31,
    0x43, 0xDB, 0x5B, 0xFC, 0xE0, 0xFD, 0x10, 0x8E, 0x4B, 0x82, 0xD1, 0x20,
    0xA9, 0x3A, 0xD2, 0xCA, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

/// Default generator for the MODP groups.
const MODP_GENERATOR: u32 = 2;

/// Default ephemeral exponent size: a small integer in `[1, 255]`.
const DEFAULT_EXPONENT_BYTES: usize = 1;

/// Largest supported ephemeral exponent size.
const MAX_EXPONENT_BYTES: usize = 64;

/// Validated parameters for an [`Engine`](crate::Engine).
#[derive(Clone)]
pub struct EngineConfig {
    prime: BigInteger,
    generator: BigInteger,
    exponent_bytes: usize,
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("prime_bits", &self.prime.bit_len())
            .field("generator", &self.generator)
            .field("exponent_bytes", &self.exponent_bytes)
            .finish()
    }
}

impl EngineConfig {
    /// Create a builder for engine configuration.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// The prime modulus.
    pub fn prime(&self) -> &BigInteger {
        &self.prime
    }

    /// The group generator.
    pub fn generator(&self) -> &BigInteger {
        &self.generator
    }

    /// Number of random bytes drawn for each ephemeral exponent.
    pub fn exponent_bytes(&self) -> usize {
        self.exponent_bytes
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prime: modp_3072_prime(),
            generator: BigInteger::from(MODP_GENERATOR),
            exponent_bytes: DEFAULT_EXPONENT_BYTES,
        }
    }
}

fn modp_3072_prime() -> BigInteger {
    BigInteger::from_bytes_be(&MODP_3072_P)
}

/// Builder for [`EngineConfig`].
pub struct EngineConfigBuilder {
    prime: Option<BigInteger>,
    generator: BigInteger,
    exponent_bytes: usize,
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self {
            prime: None,
            generator: BigInteger::from(MODP_GENERATOR),
            exponent_bytes: DEFAULT_EXPONENT_BYTES,
        }
    }
}

impl fmt::Debug for EngineConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfigBuilder")
            .field("generator", &self.generator)
            .field("exponent_bytes", &self.exponent_bytes)
            .finish_non_exhaustive()
    }
}

impl EngineConfigBuilder {
    /// Set the prime modulus. Defaults to the RFC 3526 group 15 prime.
    pub fn prime(mut self, prime: BigInteger) -> Self {
        self.prime = Some(prime);
        self
    }

    /// Set the group generator. Defaults to 2.
    pub fn generator(mut self, generator: BigInteger) -> Self {
        self.generator = generator;
        self
    }

    /// Set the number of random bytes per ephemeral exponent. Defaults to 1.
    pub fn exponent_bytes(mut self, bytes: usize) -> Self {
        self.exponent_bytes = bytes;
        self
    }

    /// Validate and build the configuration.
    ///
    /// The prime must be odd and greater than 3 so that the peer key range
    /// `[2, prime - 2]` is not empty. The generator must lie in `(1, prime)`
    /// and the exponent size must be 1 to 64 bytes.
    pub fn build(self) -> Result<EngineConfig, CryptoError> {
        let prime = self.prime.unwrap_or_else(modp_3072_prime);

        if prime <= BigInteger::from(3) || !prime.get_bit(0) {
            return Err(CryptoError::InvalidArg);
        }
        if self.generator <= BigInteger::one() || self.generator >= prime {
            return Err(CryptoError::InvalidArg);
        }
        if !(1..=MAX_EXPONENT_BYTES).contains(&self.exponent_bytes) {
            return Err(CryptoError::InvalidArg);
        }

        Ok(EngineConfig {
            prime,
            generator: self.generator,
            exponent_bytes: self.exponent_bytes,
        })
    }
}
