//! Pairing engine: per-user Diffie-Hellman state over a prime group.
//!
//! Pairing with a user goes through two states:
//!
//! 1. pending: a random ephemeral exponent `x` is held and `g^x mod p` can be
//!    sent to the peer;
//! 2. paired: the peer's value `y` has been received and the shared secret
//!    `y^x mod p` is stored; the exponent is discarded.

use std::collections::BTreeMap;

use e2ee_bignum::{BigInteger, Decoder, Encoder};
use e2ee_types::{CryptoError, ExchangeError};

use crate::config::EngineConfig;

/// Key-exchange state for any number of peers.
///
/// Secrets are [`BigInteger`]s, which are zeroized when dropped.
pub struct Engine {
    config: EngineConfig,
    /// Ephemeral exponents of exchanges in flight, by user.
    pending: BTreeMap<String, BigInteger>,
    /// Established shared secrets, by user.
    paired: BTreeMap<String, BigInteger>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("pending", &self.pending.keys().collect::<Vec<_>>())
            .field("paired", &self.paired.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Engine {
    /// Create an engine with no pairings.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            pending: BTreeMap::new(),
            paired: BTreeMap::new(),
        }
    }

    /// Return the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start pairing with `user` by drawing a fresh ephemeral exponent.
    pub fn prepare_to_pair_with(&mut self, user: &str) -> Result<(), ExchangeError> {
        if self.paired.contains_key(user) {
            tracing::warn!(user, "already paired");
            return Err(ExchangeError::AlreadyPaired(user.to_string()));
        }
        if self.pending.contains_key(user) {
            tracing::warn!(user, "pairing already in progress");
            return Err(ExchangeError::AlreadyPending(user.to_string()));
        }

        let exponent = BigInteger::random_nonzero_bytes(self.config.exponent_bytes())?;
        self.pending.insert(user.to_string(), exponent);
        tracing::debug!(user, "pairing prepared");
        Ok(())
    }

    /// Return `g^x mod p` for the exchange in flight with `user`.
    pub fn key_to_send(&self, user: &str) -> Result<BigInteger, ExchangeError> {
        let exponent = self
            .pending
            .get(user)
            .ok_or_else(|| ExchangeError::NotPending(user.to_string()))?;
        let key = self
            .config
            .generator()
            .mod_pow(exponent, self.config.prime())?;
        Ok(key)
    }

    /// Complete the exchange with `user` using the value they sent.
    ///
    /// The peer value must lie in `[2, p - 2]`. On success the ephemeral
    /// exponent is consumed and `key^x mod p` becomes the shared secret.
    pub fn set_received_key(&mut self, user: &str, key: &BigInteger) -> Result<(), ExchangeError> {
        let Some(exponent) = self.pending.get(user) else {
            tracing::warn!(user, "received key without a pairing in progress");
            return Err(ExchangeError::NotPending(user.to_string()));
        };

        let upper = self.config.prime() - BigInteger::one();
        if *key <= BigInteger::one() || *key >= upper {
            tracing::warn!(user, "received key out of range");
            return Err(ExchangeError::InvalidPeerKey(user.to_string()));
        }

        let secret = key.mod_pow(exponent, self.config.prime())?;
        self.pending.remove(user);
        self.paired.insert(user.to_string(), secret);
        tracing::debug!(user, "pairing completed");
        Ok(())
    }

    /// Return the shared secret established with `user`, if any.
    pub fn shared_secret(&self, user: &str) -> Option<&BigInteger> {
        self.paired.get(user)
    }

    /// Check in constant time whether `candidate` is the secret shared with `user`.
    pub fn verify_shared_secret(&self, user: &str, candidate: &BigInteger) -> bool {
        self.paired
            .get(user)
            .is_some_and(|secret| bool::from(secret.ct_eq(candidate)))
    }

    /// Return true if an exchange with `user` is in flight.
    pub fn is_pending(&self, user: &str) -> bool {
        self.pending.contains_key(user)
    }

    /// Return true if a shared secret with `user` exists.
    pub fn is_paired(&self, user: &str) -> bool {
        self.paired.contains_key(user)
    }

    /// Serialize pending exponents and shared secrets.
    ///
    /// Layout: two sequences of `(user, value)` pairs, pending first, each
    /// sorted by user name.
    pub fn serialize(&self) -> Result<Vec<u8>, ExchangeError> {
        let mut enc = Encoder::new();
        write_table(&mut enc, &self.pending)?;
        write_table(&mut enc, &self.paired)?;
        tracing::debug!(
            pending = self.pending.len(),
            paired = self.paired.len(),
            "engine state serialized"
        );
        Ok(enc.finish())
    }

    /// Replace the engine state with one produced by [`Engine::serialize`].
    ///
    /// Pending exponents must be positive and shared secrets must lie in
    /// `[0, p)`. On failure the current state is left untouched.
    pub fn deserialize(&mut self, data: &[u8]) -> Result<(), ExchangeError> {
        let mut dec = Decoder::new(data);
        let pending = read_table(&mut dec)?;
        let paired = read_table(&mut dec)?;
        dec.finish()?;

        if pending.values().any(|x| x.is_zero() || x.is_negative()) {
            tracing::warn!("restored state holds a non-positive exponent");
            return Err(CryptoError::DecodeNonCanonical.into());
        }
        let prime = self.config.prime();
        if paired.values().any(|k| k.is_negative() || k >= prime) {
            tracing::warn!("restored state holds a secret outside the group");
            return Err(CryptoError::DecodeNonCanonical.into());
        }

        tracing::debug!(
            pending = pending.len(),
            paired = paired.len(),
            "engine state restored"
        );
        self.pending = pending;
        self.paired = paired;
        Ok(())
    }
}

fn write_table(
    enc: &mut Encoder,
    table: &BTreeMap<String, BigInteger>,
) -> Result<(), CryptoError> {
    enc.write_len(table.len())?;
    for (user, value) in table {
        enc.write_str(user)?.write_bignum(value)?;
    }
    Ok(())
}

/// Read a table written by [`write_table`]; users must be strictly ascending.
fn read_table(dec: &mut Decoder<'_>) -> Result<BTreeMap<String, BigInteger>, ExchangeError> {
    let count = dec.read_len()?;
    let mut table: BTreeMap<String, BigInteger> = BTreeMap::new();
    for _ in 0..count {
        let user = dec.read_str()?;
        let value = dec.read_bignum()?;
        if table.last_key_value().is_some_and(|(last, _)| last.as_str() >= user) {
            return Err(CryptoError::DecodeNonCanonical.into());
        }
        table.insert(user.to_string(), value);
    }
    Ok(table)
}
