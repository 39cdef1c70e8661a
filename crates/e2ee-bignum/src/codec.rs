//! Length-prefixed byte codec.
//!
//! Scalars are little-endian. Containers are a `u32` element count followed
//! by the elements. A BigInteger is encoded as
//!
//! ```text
//! sign: u8 (0 = non-negative, 1 = negative) || len: u32 || limbs[len]
//! ```
//!
//! with the limbs least significant first. Only canonical encodings decode.

use crate::bignum::BigInteger;
use e2ee_types::CryptoError;

const SIGN_NON_NEGATIVE: u8 = 0;
const SIGN_NEGATIVE: u8 = 1;

/// A builder for length-prefixed binary data.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Consume the encoder and return the encoded bytes.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    /// Write a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Write a container length prefix.
    ///
    /// Fails if `len` does not fit the format's `u32` prefix.
    pub fn write_len(&mut self, len: usize) -> Result<&mut Self, CryptoError> {
        let len = u32::try_from(len).map_err(|_| CryptoError::EncodeTooLong(len))?;
        Ok(self.write_u32(len))
    }

    /// Write a length-prefixed byte string.
    pub fn write_bytes(&mut self, value: &[u8]) -> Result<&mut Self, CryptoError> {
        self.write_len(value.len())?;
        self.buf.extend_from_slice(value);
        Ok(self)
    }

    /// Write a length-prefixed UTF-8 string.
    pub fn write_str(&mut self, value: &str) -> Result<&mut Self, CryptoError> {
        self.write_bytes(value.as_bytes())
    }

    /// Write a BigInteger: sign byte, then its limbs as a byte string.
    pub fn write_bignum(&mut self, value: &BigInteger) -> Result<&mut Self, CryptoError> {
        let sign = if value.is_negative() {
            SIGN_NEGATIVE
        } else {
            SIGN_NON_NEGATIVE
        };
        self.write_u8(sign).write_bytes(value.limbs())
    }
}

/// A streaming decoder over length-prefixed binary data.
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Create a new decoder over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the remaining undecoded bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(&self) -> Result<(), CryptoError> {
        match self.remaining().len() {
            0 => Ok(()),
            n => Err(CryptoError::DecodeTrailingBytes(n)),
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], CryptoError> {
        let rest = self.remaining();
        if rest.len() < len {
            return Err(CryptoError::DecodeTruncated {
                need: len,
                got: rest.len(),
            });
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, CryptoError> {
        Ok(self.take(1)?[0])
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32, CryptoError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a container length prefix.
    pub fn read_len(&mut self) -> Result<usize, CryptoError> {
        Ok(self.read_u32()? as usize)
    }

    /// Read a length-prefixed byte string.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], CryptoError> {
        let len = self.read_len()?;
        self.take(len)
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_str(&mut self) -> Result<&'a str, CryptoError> {
        std::str::from_utf8(self.read_bytes()?).map_err(|_| CryptoError::DecodeInvalidUtf8)
    }

    /// Read a BigInteger, rejecting non-canonical encodings.
    pub fn read_bignum(&mut self) -> Result<BigInteger, CryptoError> {
        let negative = match self.read_u8()? {
            SIGN_NON_NEGATIVE => false,
            SIGN_NEGATIVE => true,
            other => return Err(CryptoError::DecodeInvalidSign(other)),
        };
        let limbs = self.read_bytes()?;
        if limbs.last() == Some(&0) || (negative && limbs.is_empty()) {
            return Err(CryptoError::DecodeNonCanonical);
        }
        Ok(BigInteger::from_limbs(limbs.to_vec(), negative))
    }
}

impl BigInteger {
    /// Encode as `sign || len || limbs`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CryptoError> {
        let mut enc = Encoder::new();
        enc.write_bignum(self)?;
        Ok(enc.finish())
    }

    /// Decode a value produced by [`BigInteger::to_bytes`], requiring that
    /// the whole buffer is consumed.
    pub fn from_bytes(data: &[u8]) -> Result<BigInteger, CryptoError> {
        let mut dec = Decoder::new(data);
        let value = dec.read_bignum()?;
        dec.finish()?;
        Ok(value)
    }

    /// Decode a value from the front of `data`, returning it with the number
    /// of bytes consumed.
    pub fn decode_prefix(data: &[u8]) -> Result<(BigInteger, usize), CryptoError> {
        let mut dec = Decoder::new(data);
        let value = dec.read_bignum()?;
        Ok((value, dec.position()))
    }
}
