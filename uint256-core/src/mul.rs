//! Wide multiplication: 256×256→512-bit schoolbook products and the
//! truncated variants.

use std::ops::Mul;

use crate::U256;
use crate::word;

/// One hop of the schoolbook multiply: `z + x·y` as a `(hi, lo)` pair.
///
/// The addition cannot carry out of the high word: `z` is at most
/// 2^64 − 1 and the product is at most (2^64 − 1)².
#[inline]
pub(crate) fn umul_hop(z: u64, x: u64, y: u64) -> (u64, u64) {
    let (hi, lo) = word::widening_mul(x, y);
    let (lo, carry) = word::carrying_add(lo, z, 0);
    let (hi, _) = word::carrying_add(hi, 0, carry);
    (hi, lo)
}

/// One step of the schoolbook multiply: `z + x·y + carry` as a `(hi, lo)`
/// pair.
#[inline]
pub(crate) fn umul_step(z: u64, x: u64, y: u64, carry: u64) -> (u64, u64) {
    let (hi, lo) = word::widening_mul(x, y);
    let (lo, c) = word::carrying_add(lo, carry, 0);
    let (hi, _) = word::carrying_add(hi, 0, c);
    let (lo, c) = word::carrying_add(lo, z, 0);
    let (hi, _) = word::carrying_add(hi, 0, c);
    (hi, lo)
}

/// The full 512-bit product of two 256-bit values: 16 word products
/// accumulated row by row, least significant word first.
pub fn umul(x: U256, y: U256) -> [u64; 8] {
    let U256([x0, x1, x2, x3]) = x;
    let U256([y0, y1, y2, y3]) = y;

    let (carry, p0) = word::widening_mul(x0, y0);
    let (carry, r1) = umul_hop(carry, x1, y0);
    let (carry, r2) = umul_hop(carry, x2, y0);
    let (carry4, r3) = umul_hop(carry, x3, y0);

    let (carry, p1) = umul_hop(r1, x0, y1);
    let (carry, r2) = umul_step(r2, x1, y1, carry);
    let (carry, r3) = umul_step(r3, x2, y1, carry);
    let (carry5, r4) = umul_step(carry4, x3, y1, carry);

    let (carry, p2) = umul_hop(r2, x0, y2);
    let (carry, r3) = umul_step(r3, x1, y2, carry);
    let (carry, r4) = umul_step(r4, x2, y2, carry);
    let (carry6, r5) = umul_step(carry5, x3, y2, carry);

    let (carry, p3) = umul_hop(r3, x0, y3);
    let (carry, p4) = umul_step(r4, x1, y3, carry);
    let (carry, p5) = umul_step(r5, x2, y3, carry);
    let (p7, p6) = umul_step(carry6, x3, y3, carry);

    [p0, p1, p2, p3, p4, p5, p6, p7]
}

impl U256 {
    /// The product truncated to 256 bits. The upper triangle of word
    /// products only feeds the discarded high half, so the top result word
    /// collapses to a plain wrapping sum.
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let U256([x0, x1, x2, x3]) = self;
        let U256([y0, y1, y2, y3]) = rhs;

        let (carry0, p0) = word::widening_mul(x0, y0);
        let (carry0, r1) = umul_hop(carry0, x1, y0);
        let (carry0, r2) = umul_hop(carry0, x2, y0);

        let (carry1, p1) = umul_hop(r1, x0, y1);
        let (carry1, r2) = umul_step(r2, x1, y1, carry1);

        let (carry2, p2) = umul_hop(r2, x0, y2);

        let p3 = x3
            .wrapping_mul(y0)
            .wrapping_add(x2.wrapping_mul(y1))
            .wrapping_add(x1.wrapping_mul(y2))
            .wrapping_add(x0.wrapping_mul(y3))
            .wrapping_add(carry0)
            .wrapping_add(carry1)
            .wrapping_add(carry2);

        Self([p0, p1, p2, p3])
    }

    /// Truncated self-multiply. The symmetric cross terms are computed once
    /// and counted twice, halving the word multiplies of
    /// [`wrapping_mul`](Self::wrapping_mul). Exponentiation squares through
    /// this, so its arithmetic is modulo 2^256 by construction.
    pub fn wrapping_square(self) -> Self {
        let U256([x0, x1, x2, x3]) = self;

        let (carry0, p0) = word::widening_mul(x0, x0);
        let (carry0, r1) = umul_hop(carry0, x0, x1);
        let (carry0, r2) = umul_hop(carry0, x0, x2);

        let (carry1, p1) = umul_hop(r1, x0, x1);
        let (carry1, r2) = umul_step(r2, x1, x1, carry1);

        let (carry2, p2) = umul_hop(r2, x0, x2);

        let p3 = x0
            .wrapping_mul(x3)
            .wrapping_add(x1.wrapping_mul(x2))
            .wrapping_mul(2)
            .wrapping_add(carry0)
            .wrapping_add(carry1)
            .wrapping_add(carry2);

        Self([p0, p1, p2, p3])
    }
}

/// Multiplication wraps modulo 2^256.
impl Mul for U256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use proptest_arbitrary_interop::arb;
    use test_strategy::proptest;

    use super::*;
    use crate::test_oracle::to_biguint;

    fn umul_to_biguint(p: [u64; 8]) -> BigUint {
        let lo = to_biguint(U256([p[0], p[1], p[2], p[3]]));
        let hi = to_biguint(U256([p[4], p[5], p[6], p[7]]));
        (hi << 256) | lo
    }

    #[proptest]
    fn umul_matches_reference(#[strategy(arb())] x: U256, #[strategy(arb())] y: U256) {
        prop_assert_eq!(umul_to_biguint(umul(x, y)), to_biguint(x) * to_biguint(y));
    }

    #[test]
    fn umul_of_max_by_max_fills_all_words() {
        let p = umul(U256::MAX, U256::MAX);
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let expected =
            (BigUint::from(1u8) << 512) - (BigUint::from(1u8) << 257) + BigUint::from(1u8);
        assert!(umul_to_biguint(p) == expected);
    }

    #[proptest]
    fn multiplication_is_commutative(#[strategy(arb())] x: U256, #[strategy(arb())] y: U256) {
        prop_assert_eq!(x * y, y * x);
    }

    #[proptest]
    fn multiplication_identities(#[strategy(arb())] x: U256) {
        prop_assert_eq!(x * U256::ONE, x);
        prop_assert_eq!(x * U256::ZERO, U256::ZERO);
    }

    #[proptest]
    fn wrapping_mul_matches_reference_modulo_2_pow_256(
        #[strategy(arb())] x: U256,
        #[strategy(arb())] y: U256,
    ) {
        let expected = (to_biguint(x) * to_biguint(y)) % (BigUint::from(1u8) << 256);
        prop_assert_eq!(to_biguint(x.wrapping_mul(y)), expected);
    }

    #[proptest]
    fn squaring_agrees_with_the_generic_multiply(#[strategy(arb())] x: U256) {
        prop_assert_eq!(x.wrapping_square(), x.wrapping_mul(x));
    }

    #[test]
    fn squaring_small_values() {
        assert!(U256::from_u64(0xffff_ffff).wrapping_square() == U256::from_u64(0xffff_fffe_0000_0001));
        assert!(U256::MAX.wrapping_square() == U256::ONE);
    }
}
