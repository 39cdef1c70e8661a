//! Addition, subtraction and negation.

use crate::bignum::{BigInteger, DoubleLimb, Limb, LIMB_BITS, LIMB_MAX};

/// Add two magnitudes, ignoring signs. Returns a non-negative value.
pub(crate) fn add_abs(a: &BigInteger, b: &BigInteger) -> BigInteger {
    BigInteger::from_limbs(add_limbs(a, b, 0, a.num_limbs().max(b.num_limbs())), false)
}

/// Limb-wise `a + b + carry_in` over `width` limbs, keeping the final carry
/// as an extra limb.
fn add_limbs(a: &BigInteger, b: &BigInteger, carry_in: Limb, width: usize) -> Vec<Limb> {
    let mut limbs = Vec::with_capacity(width + 1);
    let mut carry = carry_in as DoubleLimb;

    for i in 0..width {
        let sum = a.limb(i) as DoubleLimb + b.limb(i) as DoubleLimb + carry;
        limbs.push(sum as Limb);
        carry = sum >> LIMB_BITS;
    }
    limbs.push(carry as Limb);
    limbs
}

/// Subtract magnitudes, `|larger| - |smaller|`, with `|larger| >= |smaller|`.
///
/// Adds the limb-wise complement of `smaller` (padded to the width of
/// `larger`) plus one, then drops the carry limb that the padding produces.
pub(crate) fn sub_abs(larger: &BigInteger, smaller: &BigInteger) -> BigInteger {
    let width = larger.num_limbs();
    let complement = BigInteger::from_limbs(
        (0..width).map(|i| LIMB_MAX - smaller.limb(i)).collect(),
        false,
    );
    let mut limbs = add_limbs(larger, &complement, 1, width);
    limbs.truncate(width);
    BigInteger::from_limbs(limbs, false)
}

/// `|a| - |b|` as a signed value.
fn diff_abs(a: &BigInteger, b: &BigInteger) -> BigInteger {
    if a.cmp_abs(b).is_lt() {
        sub_abs(b, a).with_sign(true)
    } else {
        sub_abs(a, b)
    }
}

/// Signed addition, dispatched on the operand signs.
pub(crate) fn add(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match (a.is_negative(), b.is_negative()) {
        (false, false) => add_abs(a, b),
        (true, true) => add_abs(a, b).with_sign(true),
        // a + (-b) = |a| - |b|
        (false, true) => diff_abs(a, b),
        // (-a) + b = |b| - |a|
        (true, false) => diff_abs(b, a),
    }
}

/// Signed subtraction, dispatched on the operand signs.
pub(crate) fn sub(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match (a.is_negative(), b.is_negative()) {
        (false, false) => diff_abs(a, b),
        // (-a) - (-b) = |b| - |a|
        (true, true) => diff_abs(b, a),
        // a - (-b) = |a| + |b|
        (false, true) => add_abs(a, b),
        // (-a) - b = -(|a| + |b|)
        (true, false) => add_abs(a, b).with_sign(true),
    }
}

fn neg(a: &BigInteger) -> BigInteger {
    let negative = !a.is_negative();
    a.clone().with_sign(negative)
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_assign!(AddAssign, add_assign, add);
forward_assign!(SubAssign, sub_assign, sub);

impl std::ops::Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        neg(&self)
    }
}

impl std::ops::Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        neg(self)
    }
}

impl BigInteger {
    /// Prefix increment: add one in place and return the receiver.
    pub fn inc(&mut self) -> &mut Self {
        *self = add(self, &BigInteger::one());
        self
    }

    /// Prefix decrement: subtract one in place and return the receiver.
    pub fn dec(&mut self) -> &mut Self {
        *self = sub(self, &BigInteger::one());
        self
    }

    /// Postfix increment: add one in place and return the previous value.
    pub fn post_inc(&mut self) -> BigInteger {
        let prev = self.clone();
        self.inc();
        prev
    }

    /// Postfix decrement: subtract one in place and return the previous value.
    pub fn post_dec(&mut self) -> BigInteger {
        let prev = self.clone();
        self.dec();
        prev
    }
}
