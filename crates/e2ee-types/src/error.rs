/// Why a textual integer literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    /// The input string was empty.
    #[error("empty input")]
    Empty,
    /// The input was a lone `-`.
    #[error("sign without digits")]
    BareSign,
    /// A base prefix (`0b`, `0x`) was not followed by any digit.
    #[error("base prefix without digits")]
    EmptyBody,
    /// A character is not a digit of the detected radix.
    #[error("invalid digit {digit:?} for radix {radix}")]
    InvalidDigit { digit: char, radix: u32 },
}

/// Arithmetic and encoding errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    // General errors
    #[error("invalid argument")]
    InvalidArg,

    // BigInteger errors
    #[error("big integer: division by zero")]
    BnDivisionByZero,
    #[error("big integer: malformed literal: {reason}")]
    BnMalformedLiteral { reason: LiteralError },
    #[error("big integer: negative exponent")]
    BnNegativeExponent,
    #[error("big integer: value does not fit the target integer width")]
    BnNarrowingOverflow,
    #[error("big integer: random generation failed")]
    BnRandGenFail,

    // Encoding/Decoding errors
    #[error("decode: buffer too short: need {need}, got {got}")]
    DecodeTruncated { need: usize, got: usize },
    #[error("decode: invalid sign byte {0:#04x}")]
    DecodeInvalidSign(u8),
    #[error("decode: non-canonical big integer")]
    DecodeNonCanonical,
    #[error("decode: string is not valid utf-8")]
    DecodeInvalidUtf8,
    #[error("decode: {0} trailing bytes")]
    DecodeTrailingBytes(usize),
    #[error("encode: container of {0} elements exceeds the u32 length prefix")]
    EncodeTooLong(usize),
}

impl From<LiteralError> for CryptoError {
    fn from(reason: LiteralError) -> Self {
        CryptoError::BnMalformedLiteral { reason }
    }
}

/// Key-exchange engine errors.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("already paired with {0}")]
    AlreadyPaired(String),
    #[error("pairing with {0} is already in progress")]
    AlreadyPending(String),
    #[error("no pairing in progress with {0}")]
    NotPending(String),
    #[error("public key received from {0} is out of range")]
    InvalidPeerKey(String),
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
