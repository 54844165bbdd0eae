//! The 25 word operations, composed from the `uint256-core` engine.
//!
//! Every function here is total: for any combination of 256-bit operands
//! it returns a defined result, matching the hosting VM's opcode
//! semantics. The edge-case policy lives in this layer — division and
//! modulo by zero yield zero, shifts saturate at 256 bits, signed
//! operations delegate to the unsigned engine on sign-normalized
//! magnitudes — so the engine below is never invoked outside its
//! preconditions.

use uint256_core::U256;
use uint256_core::div;
use uint256_core::mul;
use uint256_core::reduce;
use uint256_core::shift;

/// Wrapping addition.
pub fn add(x: U256, y: U256) -> U256 {
    x + y
}

/// Wrapping multiplication.
pub fn mul(x: U256, y: U256) -> U256 {
    x * y
}

/// Wrapping subtraction.
pub fn sub(x: U256, y: U256) -> U256 {
    x - y
}

/// Unsigned division. Division by zero yields zero.
pub fn div(x: U256, y: U256) -> U256 {
    if y.is_zero() || y > x {
        return U256::ZERO;
    }
    if x == y {
        return U256::ONE;
    }
    if x.fits_u64() {
        return U256::from_u64(x.low_u64() / y.low_u64());
    }

    let mut quot = [0u64; 4];
    div::udivrem(&mut quot, &x.0, y);
    U256(quot)
}

/// Signed division: the magnitudes are divided unsigned and the quotient
/// is negated when the operand signs differ. Division by zero yields zero.
pub fn sdiv(n: U256, d: U256) -> U256 {
    let n_abs = if n.is_negative() { n.wrapping_neg() } else { n };
    let d_abs = if d.is_negative() { d.wrapping_neg() } else { d };
    let quot = div(n_abs, d_abs);
    if n.is_negative() == d.is_negative() {
        quot
    } else {
        quot.wrapping_neg()
    }
}

/// Unsigned remainder. Modulo zero yields zero.
pub fn modulo(x: U256, y: U256) -> U256 {
    if y.is_zero() || x == y {
        return U256::ZERO;
    }
    if x < y {
        return x;
    }
    if x.fits_u64() {
        return U256::from_u64(x.low_u64() % y.low_u64());
    }

    let mut quot = [0u64; 4];
    div::udivrem(&mut quot, &x.0, y)
}

/// Signed remainder: computed on the magnitudes, with the dividend's sign.
/// Modulo zero yields zero.
pub fn smod(x: U256, m: U256) -> U256 {
    let x_abs = if x.is_negative() { x.wrapping_neg() } else { x };
    let m_abs = if m.is_negative() { m.wrapping_neg() } else { m };
    let rem = modulo(x_abs, m_abs);
    if x.is_negative() { rem.wrapping_neg() } else { rem }
}

/// `(x + y) mod m`, with the sum taken at full width. Modulo zero yields
/// zero.
pub fn addmod(x: U256, y: U256, m: U256) -> U256 {
    if m.0[3] != 0 && x.0[3] <= m.0[3] && y.0[3] <= m.0[3] {
        // both addends are within one subtraction of the modulus: reduce
        // each, add, and reduce the sum once more — no division at all
        let (x_reduced, x_borrow) = x.overflowing_sub(m);
        let x = if x_borrow { x } else { x_reduced };
        let (y_reduced, y_borrow) = y.overflowing_sub(m);
        let y = if y_borrow { y } else { y_reduced };

        let (sum, overflow) = x.overflowing_add(y);
        let (reduced, borrow) = sum.overflowing_sub(m);
        return if !overflow && borrow { sum } else { reduced };
    }

    if m.is_zero() {
        return U256::ZERO;
    }

    let (sum, overflow) = x.overflowing_add(y);
    if overflow {
        let wide_sum = [sum.0[0], sum.0[1], sum.0[2], sum.0[3], 1];
        let mut quot = [0u64; 5];
        return div::udivrem(&mut quot, &wide_sum, m);
    }
    modulo(sum, m)
}

/// `(x · y) mod m`, with the product taken at full 512-bit width. Modulo
/// zero yields zero.
///
/// A modulus occupying the top word is reduced with the Barrett-style
/// reciprocal; a narrower modulus goes through the division engine, or
/// plain `mod` when the product's high half is zero.
pub fn mulmod(x: U256, y: U256, m: U256) -> U256 {
    if x.is_zero() || y.is_zero() || m.is_zero() {
        return U256::ZERO;
    }

    let product = mul::umul(x, y);

    if m.0[3] != 0 {
        let mu = reduce::reciprocal(m);
        return reduce::reduce(&product, m, &mu);
    }

    let low = U256([product[0], product[1], product[2], product[3]]);
    let high = U256([product[4], product[5], product[6], product[7]]);
    if high.is_zero() {
        return modulo(low, m);
    }

    let mut quot = [0u64; 8];
    div::udivrem(&mut quot, &product, m)
}

/// `base` raised to `exponent`, modulo 2^256: square-and-multiply over the
/// exponent's bits, least significant first.
pub fn exp(base: U256, exponent: U256) -> U256 {
    let mut result = U256::ONE;
    let mut multiplier = base;
    for bit in 0..exponent.bit_len() {
        if exponent.bit(bit) {
            result = result.wrapping_mul(multiplier);
        }
        multiplier = multiplier.wrapping_square();
    }
    result
}

/// Extends the sign bit of the byte at `index` (0 = least significant)
/// through all higher bits. Indices past 30 leave the value unchanged.
pub fn signextend(x: U256, index: U256) -> U256 {
    if index.gt_u64(30) {
        return x;
    }

    let byte_index = index.low_u64();
    let word_index = (byte_index / 8) as usize;
    let bit_offset = (byte_index % 8) * 8;

    let sign_byte = (x.0[word_index] >> bit_offset) as u8;
    let fill = (i64::from(sign_byte as i8)) as u64;

    let mut result = x;
    result.0[word_index] = (x.0[word_index] & !(!0 << bit_offset)) | (fill << bit_offset);

    let high_fill = if (sign_byte as i8) < 0 { !0 } else { 0 };
    for word in result.0.iter_mut().skip(word_index + 1) {
        *word = high_fill;
    }
    result
}

/// Unsigned less-than.
pub fn lt(x: U256, y: U256) -> bool {
    x < y
}

/// Unsigned greater-than.
pub fn gt(x: U256, y: U256) -> bool {
    x > y
}

/// Signed less-than: differing signs order by sign alone, same signs fall
/// back to the unsigned comparison.
pub fn slt(x: U256, y: U256) -> bool {
    match (x.is_negative(), y.is_negative()) {
        (true, false) => true,
        (false, true) => false,
        _ => x < y,
    }
}

/// Signed greater-than.
pub fn sgt(x: U256, y: U256) -> bool {
    match (x.is_negative(), y.is_negative()) {
        (true, false) => false,
        (false, true) => true,
        _ => x > y,
    }
}

/// Equality.
pub fn eq(x: U256, y: U256) -> bool {
    x == y
}

/// Zero test.
pub fn iszero(x: U256) -> bool {
    x.is_zero()
}

/// Word-wise conjunction.
pub fn and(x: U256, y: U256) -> U256 {
    x & y
}

/// Word-wise disjunction.
pub fn or(x: U256, y: U256) -> U256 {
    x | y
}

/// Word-wise exclusive or.
pub fn xor(x: U256, y: U256) -> U256 {
    x ^ y
}

/// Word-wise complement.
pub fn not(x: U256) -> U256 {
    !x
}

/// Selects byte `i` of `x`, with byte 0 the most significant. Indices past
/// 31 yield zero.
pub fn byte(x: U256, i: U256) -> U256 {
    if !i.fits_u64() || i.low_u64() >= 32 {
        return U256::ZERO;
    }

    let index = i.low_u64();
    let word = x.0[3 - (index / 8) as usize];
    let shift = 56 - (index % 8) * 8;
    U256::from_u64((word >> shift) & 0xff)
}

/// Left shift; amounts of 256 or more yield zero.
pub fn shl(x: U256, shift_amount: U256) -> U256 {
    if shift_amount.lt_u64(256) {
        shift::shl(x, shift_amount.low_u64())
    } else {
        U256::ZERO
    }
}

/// Logical right shift; amounts of 256 or more yield zero.
pub fn shr(x: U256, shift_amount: U256) -> U256 {
    if shift_amount.lt_u64(256) {
        shift::shr(x, shift_amount.low_u64())
    } else {
        U256::ZERO
    }
}

/// Arithmetic right shift; amounts of 256 or more saturate to the sign
/// fill.
pub fn sar(x: U256, shift_amount: U256) -> U256 {
    if shift_amount.fits_u64() {
        shift::sar(x, shift_amount.low_u64())
    } else if x.is_negative() {
        U256::MAX
    } else {
        U256::ZERO
    }
}
