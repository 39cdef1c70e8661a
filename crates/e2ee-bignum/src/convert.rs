//! Conversions between BigInteger and the primitive integer types.

use crate::bignum::BigInteger;
use e2ee_types::CryptoError;

/// Primitive integers a BigInteger can be narrowed into.
///
/// Implemented for every built-in signed and unsigned integer type.
pub trait NativeInt: Sized + Copy {
    /// Rebuild from the low limbs of a magnitude, wrapping on overflow.
    #[doc(hidden)]
    fn wrapping_from_magnitude(limbs: &[u8], negative: bool) -> Self;

    /// Rebuild from a magnitude, returning `None` if the value does not fit.
    #[doc(hidden)]
    fn checked_from_magnitude(limbs: &[u8], negative: bool) -> Option<Self>;
}

/// Assemble the low `width` limbs into a `u128`.
fn low_word(limbs: &[u8], width: usize) -> u128 {
    limbs
        .iter()
        .take(width)
        .enumerate()
        .fold(0u128, |acc, (i, &limb)| acc | (limb as u128) << (8 * i))
}

/// Assemble the whole magnitude into a `u128`, or `None` if it is wider.
fn full_word(limbs: &[u8]) -> Option<u128> {
    if limbs.len() > std::mem::size_of::<u128>() {
        return None;
    }
    Some(low_word(limbs, limbs.len()))
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(value: $t) -> Self {
                let magnitude = (value.unsigned_abs() as u128).to_le_bytes();
                let width = std::mem::size_of::<$t>();
                BigInteger::from_limbs(magnitude[..width].to_vec(), value < 0)
            }
        }

        impl NativeInt for $t {
            fn wrapping_from_magnitude(limbs: &[u8], negative: bool) -> Self {
                let value = low_word(limbs, std::mem::size_of::<$t>()) as $t;
                if negative { value.wrapping_neg() } else { value }
            }

            fn checked_from_magnitude(limbs: &[u8], negative: bool) -> Option<Self> {
                let magnitude = full_word(limbs)?;
                if negative {
                    if magnitude > (<$t>::MIN as i128).unsigned_abs() {
                        return None;
                    }
                    Some((magnitude as i128).wrapping_neg() as $t)
                } else {
                    <$t>::try_from(magnitude).ok()
                }
            }
        }

        impl TryFrom<&BigInteger> for $t {
            type Error = CryptoError;

            fn try_from(value: &BigInteger) -> Result<Self, Self::Error> {
                value.to_checked()
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            fn from(value: $t) -> Self {
                let magnitude = (value as u128).to_le_bytes();
                let width = std::mem::size_of::<$t>();
                BigInteger::from_limbs(magnitude[..width].to_vec(), false)
            }
        }

        impl NativeInt for $t {
            fn wrapping_from_magnitude(limbs: &[u8], negative: bool) -> Self {
                let value = low_word(limbs, std::mem::size_of::<$t>()) as $t;
                if negative { value.wrapping_neg() } else { value }
            }

            fn checked_from_magnitude(limbs: &[u8], negative: bool) -> Option<Self> {
                if negative {
                    return None;
                }
                <$t>::try_from(full_word(limbs)?).ok()
            }
        }

        impl TryFrom<&BigInteger> for $t {
            type Error = CryptoError;

            fn try_from(value: &BigInteger) -> Result<Self, Self::Error> {
                value.to_checked()
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

impl BigInteger {
    /// Convert to a primitive integer, keeping only the low limbs that fit.
    ///
    /// Higher limbs are dropped and the sign is applied with wrapping
    /// negation, the same as an `as` cast between primitive integers. Use
    /// [`BigInteger::to_checked`] to detect values that do not fit.
    pub fn to_truncated<T: NativeInt>(&self) -> T {
        T::wrapping_from_magnitude(self.limbs(), self.is_negative())
    }

    /// Convert to a primitive integer, failing if the value is out of range.
    pub fn to_checked<T: NativeInt>(&self) -> Result<T, CryptoError> {
        T::checked_from_magnitude(self.limbs(), self.is_negative())
            .ok_or(CryptoError::BnNarrowingOverflow)
    }
}
