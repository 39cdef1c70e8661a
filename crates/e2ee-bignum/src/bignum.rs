//! Big integer type: a sign flag over a little-endian magnitude of byte limbs.

use std::cmp::Ordering;

use zeroize::Zeroize;

/// Limb type of the magnitude (one byte, radix 256).
pub type Limb = u8;
/// Double-width type wide enough for `Limb::MAX + Limb::MAX + carry`.
pub type DoubleLimb = u16;

/// Bits per limb.
pub const LIMB_BITS: usize = 8;
/// Largest value a single limb can hold.
pub const LIMB_MAX: Limb = Limb::MAX;

/// An arbitrary-precision signed integer that is zeroized on drop.
///
/// The magnitude is stored least-significant limb first and is always kept
/// in canonical form: no most-significant zero limb, and zero is the empty
/// magnitude with a non-negative sign. Because the representation is
/// canonical, equality and hashing work directly on the fields.
#[derive(Clone, Default, Hash, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct BigInteger {
    /// Little-endian limbs (limbs[0] is the least significant).
    limbs: Vec<Limb>,
    /// True if the number is negative. Never set for zero.
    negative: bool,
}

impl BigInteger {
    /// Create a zero-valued BigInteger.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Create a BigInteger equal to one.
    pub fn one() -> Self {
        Self {
            limbs: vec![1],
            negative: false,
        }
    }

    /// Create a BigInteger from little-endian limbs and a sign.
    ///
    /// The result is trimmed; a zero magnitude is always non-negative.
    pub fn from_limbs(limbs: Vec<Limb>, negative: bool) -> Self {
        let mut bn = Self { limbs, negative };
        bn.trim();
        bn
    }

    /// Create a non-negative BigInteger from big-endian magnitude bytes.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self::from_limbs(bytes.iter().rev().copied().collect(), false)
    }

    /// Export the magnitude as big-endian bytes. Zero exports as `[0]`.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        self.limbs.iter().rev().copied().collect()
    }

    /// Return the number of significant bits of the magnitude.
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(&top) => {
                (self.limbs.len() - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
            }
            None => 0,
        }
    }

    /// Return the number of limbs in the canonical magnitude.
    pub fn num_limbs(&self) -> usize {
        self.limbs.len()
    }

    /// Return true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Return true if this number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Return `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Return the absolute value.
    pub fn abs(&self) -> BigInteger {
        Self {
            limbs: self.limbs.clone(),
            negative: false,
        }
    }

    /// Return the magnitude limbs as a slice, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Read the limb at `index`; positions past the end read as zero.
    pub fn limb(&self, index: usize) -> Limb {
        self.limbs.get(index).copied().unwrap_or(0)
    }

    /// Write the limb at `index`.
    ///
    /// Writing zero past the end is a no-op. Writing a non-zero value past
    /// the end grows the magnitude, zero-filling the gap. Overwriting the top
    /// limb with zero re-trims the value.
    pub fn set_limb(&mut self, index: usize, value: Limb) {
        if index < self.limbs.len() {
            self.limbs[index] = value;
            if value == 0 {
                self.trim();
            }
        } else if value != 0 {
            self.limbs.resize(index + 1, 0);
            self.limbs[index] = value;
        }
    }

    /// Get bit at position `idx` of the magnitude (0-indexed from LSB).
    pub fn get_bit(&self, idx: usize) -> bool {
        (self.limb(idx / LIMB_BITS) >> (idx % LIMB_BITS)) & 1 == 1
    }

    /// Set or clear bit `idx` of the magnitude.
    pub fn set_bit(&mut self, idx: usize, bit: bool) {
        let limb_idx = idx / LIMB_BITS;
        let mask = 1 << (idx % LIMB_BITS);
        let limb = self.limb(limb_idx);
        self.set_limb(limb_idx, if bit { limb | mask } else { limb & !mask });
    }

    /// Double the magnitude in place, shifting `low_bit` into bit 0.
    pub(crate) fn double_with(&mut self, low_bit: bool) {
        let mut carry = low_bit as Limb;
        for limb in self.limbs.iter_mut() {
            let next = *limb >> (LIMB_BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = next;
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// Return the magnitude shifted up by `count` whole limbs, with the sign kept.
    pub(crate) fn shl_limbs(&self, count: usize) -> BigInteger {
        if self.is_zero() {
            return BigInteger::zero();
        }
        let mut limbs = vec![0; count + self.limbs.len()];
        limbs[count..].copy_from_slice(&self.limbs);
        Self {
            limbs,
            negative: self.negative,
        }
    }

    /// Return limbs `[from..]` as a non-negative value.
    pub(crate) fn high_limbs(&self, from: usize) -> BigInteger {
        match self.limbs.get(from..) {
            Some(high) => Self::from_limbs(high.to_vec(), false),
            None => BigInteger::zero(),
        }
    }

    /// Replace the sign, keeping zero non-negative.
    pub(crate) fn with_sign(mut self, negative: bool) -> BigInteger {
        self.negative = negative && !self.is_zero();
        self
    }

    /// Compare absolute values, most significant limb first.
    pub fn cmp_abs(&self, other: &BigInteger) -> Ordering {
        // Both magnitudes are trimmed, so a longer one is larger.
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }
        for i in (0..self.limbs.len()).rev() {
            match self.limb(i).cmp(&other.limb(i)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }

    /// Remove most-significant zero limbs and canonicalize the sign of zero.
    pub(crate) fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.negative = false;
        }
    }
}

impl std::fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInteger({self})")
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    /// Non-negative beats negative; otherwise the magnitudes decide, with the
    /// result inverted when both operands are negative.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_abs(other),
            (true, true) => other.cmp_abs(self),
        }
    }
}
