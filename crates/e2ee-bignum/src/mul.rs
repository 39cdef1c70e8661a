//! Radix-split multiplication.
//!
//! Each operand is split at a native-word boundary into a low word that fits
//! a `u64` and a high part that stays a BigInteger:
//!
//! ```text
//! a * b = lo(a)*lo(b)
//!       + (hi(a)*lo(b) + hi(b)*lo(a)) << WORD_LIMBS
//!       + (hi(a)*hi(b))               << 2*WORD_LIMBS
//! ```
//!
//! The low product is a native `u128` multiply, the cross terms are
//! big-by-word multiplies, and only the high product recurses.

use crate::bignum::{BigInteger, Limb, LIMB_BITS};
use crate::ops::add_abs;

/// Native word used for the low half of each operand.
type Word = u64;

/// Number of limbs in one native word.
pub(crate) const WORD_LIMBS: usize = std::mem::size_of::<Word>() / std::mem::size_of::<Limb>();

/// Assemble the low `WORD_LIMBS` limbs of the magnitude into a native word.
fn low_word(a: &BigInteger) -> Word {
    (0..WORD_LIMBS).fold(0, |acc, i| acc | (a.limb(i) as Word) << (i * LIMB_BITS))
}

/// Multiply a magnitude by a native word.
pub(crate) fn mul_word(a: &BigInteger, w: Word) -> BigInteger {
    if a.is_zero() || w == 0 {
        return BigInteger::zero();
    }
    let mut limbs = Vec::with_capacity(a.num_limbs() + WORD_LIMBS);
    let mut carry: u128 = 0;
    for &limb in a.limbs() {
        let acc = limb as u128 * w as u128 + carry;
        limbs.push(acc as Limb);
        carry = acc >> LIMB_BITS;
    }
    while carry != 0 {
        limbs.push(carry as Limb);
        carry >>= LIMB_BITS;
    }
    BigInteger::from_limbs(limbs, false)
}

/// Multiply two magnitudes, ignoring signs.
fn mul_abs(a: &BigInteger, b: &BigInteger) -> BigInteger {
    if a.is_zero() || b.is_zero() {
        return BigInteger::zero();
    }

    let a_low = low_word(a);
    let b_low = low_word(b);
    let a_high = a.high_limbs(WORD_LIMBS);
    let b_high = b.high_limbs(WORD_LIMBS);

    let low = BigInteger::from(a_low as u128 * b_low as u128);
    let cross = add_abs(&mul_word(&a_high, b_low), &mul_word(&b_high, a_low)).shl_limbs(WORD_LIMBS);
    let high = mul_abs(&a_high, &b_high).shl_limbs(2 * WORD_LIMBS);

    add_abs(&add_abs(&low, &cross), &high)
}

/// Signed multiplication: the product is negative iff the signs differ.
pub(crate) fn mul(a: &BigInteger, b: &BigInteger) -> BigInteger {
    if a.is_zero() || b.is_zero() {
        return BigInteger::zero();
    }
    mul_abs(a, b).with_sign(a.is_negative() != b.is_negative())
}

forward_binop!(Mul, mul, mul);
forward_assign!(MulAssign, mul_assign, mul);

impl BigInteger {
    /// Return `self * self`.
    pub fn square(&self) -> BigInteger {
        mul(self, self)
    }
}
