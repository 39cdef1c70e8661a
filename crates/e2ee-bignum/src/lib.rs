#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision signed integers over a byte-limb magnitude."]

#[macro_use]
mod macros;

mod bignum;
mod codec;
mod convert;
mod ct;
mod div;
mod format;
mod mul;
mod ops;
mod parse;
mod pow;
mod rand;

pub use bignum::{BigInteger, DoubleLimb, Limb, LIMB_BITS, LIMB_MAX};
pub use codec::{Decoder, Encoder};
pub use convert::NativeInt;
