//! The multi-precision division engine.
//!
//! Three paths, chosen by [`udivrem`] from the significant widths of the
//! operands: direct word division, single-limb long division with a
//! precomputed divisor reciprocal, and Knuth's Algorithm D for divisors
//! wider than one word. Both long-division paths operate on normalized
//! operands (divisor's top bit set) so that each trial quotient digit is
//! off by at most two.

use crate::U256;
use crate::word;

/// The fixed-point reciprocal of a normalized divisor: the low word of
/// ⌊(2^128 − 1) / d⌋, computed by dividing the complemented divisor pair.
pub(crate) fn reciprocal_2x1(d: u64) -> u64 {
    debug_assert!(d >= 1 << 63, "divisor must be normalized");
    word::div_rem(!d, !0, d).0
}

/// Divides `(uh, ul)` by `d` using the precomputed `recip`. The quotient
/// estimate from the single reciprocal multiply is at most two too small
/// and is corrected by comparison with the running remainder.
pub(crate) fn udivrem_2x1(uh: u64, ul: u64, d: u64, recip: u64) -> (u64, u64) {
    let (qh, ql) = word::widening_mul(recip, uh);
    let (ql, carry) = word::carrying_add(ql, ul, 0);
    let (qh, _) = word::carrying_add(qh, uh, carry);
    let mut qh = qh.wrapping_add(1);

    let mut r = ul.wrapping_sub(qh.wrapping_mul(d));
    if r > ql {
        qh = qh.wrapping_sub(1);
        r = r.wrapping_add(d);
    }
    if r >= d {
        qh += 1;
        r -= d;
    }
    (qh, r)
}

/// Single-limb long division: one [`udivrem_2x1`] step per dividend limb,
/// most significant first. Writes the quotient limbs into `quot` (one
/// fewer than the dividend limbs) and returns the remainder. `d` must be
/// normalized.
pub(crate) fn udivrem_by1(quot: &mut [u64], u: &[u64], d: u64) -> u64 {
    debug_assert!(quot.len() == u.len() - 1);

    let recip = reciprocal_2x1(d);
    let mut rem = u[u.len() - 1];
    for j in (0..u.len() - 1).rev() {
        (quot[j], rem) = udivrem_2x1(rem, u[j], d, recip);
    }
    rem
}

/// `x += y`, returning the carry out of the top word.
fn add_assign(x: &mut [u64], y: &[u64]) -> u64 {
    let mut carry = 0;
    for (xi, yi) in x.iter_mut().zip(y) {
        (*xi, carry) = word::carrying_add(*xi, *yi, carry);
    }
    carry
}

/// `x -= y · multiplier`, returning the borrow out of the top word.
fn sub_mul_assign(x: &mut [u64], y: &[u64], multiplier: u64) -> u64 {
    let mut borrow = 0;
    for (xi, yi) in x.iter_mut().zip(y) {
        let (s, carry1) = word::borrowing_sub(*xi, borrow, 0);
        let (ph, pl) = word::widening_mul(*yi, multiplier);
        let (t, carry2) = word::borrowing_sub(s, pl, 0);
        *xi = t;
        borrow = ph.wrapping_add(carry1).wrapping_add(carry2);
    }
    borrow
}

/// Knuth's Algorithm D for a divisor of two or more words.
///
/// `u` holds the normalized dividend extended by one word and is consumed
/// as the working remainder; `d` is the normalized divisor. Each step
/// estimates a trial quotient digit from the top two remainder words
/// against the divisor's top word, multiplies-and-subtracts, and corrects
/// the digit downward (adding the divisor back) if the subtraction
/// underflowed.
pub(crate) fn udivrem_knuth(quot: &mut [u64], u: &mut [u64], d: &[u64]) {
    debug_assert!(d.len() >= 2);
    debug_assert!(u.len() > d.len());

    let dh = d[d.len() - 1];
    let dl = d[d.len() - 2];
    let recip = reciprocal_2x1(dh);

    for j in (0..u.len() - d.len()).rev() {
        let u2 = u[j + d.len()];
        let u1 = u[j + d.len() - 1];
        let u0 = u[j + d.len() - 2];

        let mut qhat = if u2 >= dh {
            // the estimate would overflow a word; clamp and let the
            // correction below settle it
            u64::MAX
        } else {
            let (qhat, rhat) = udivrem_2x1(u2, u1, dh, recip);
            let (ph, pl) = word::widening_mul(qhat, dl);
            if ph > rhat || (ph == rhat && pl > u0) {
                qhat - 1
            } else {
                qhat
            }
        };

        let borrow = sub_mul_assign(&mut u[j..j + d.len()], d, qhat);
        u[j + d.len()] = u2.wrapping_sub(borrow);
        if u2 < borrow {
            qhat -= 1;
            let carry = add_assign(&mut u[j..j + d.len()], d);
            u[j + d.len()] = u[j + d.len()].wrapping_add(carry);
        }

        quot[j] = qhat;
    }
}

/// Divides a dividend of up to eight words by a 256-bit divisor, writing
/// the quotient into `quot` (sized like `u`) and returning the remainder.
///
/// Normalizes both operands by the divisor's leading zeros, dispatches to
/// the single-limb or Algorithm D path, and de-normalizes the remainder.
/// A dividend narrower than the divisor short-circuits to quotient zero
/// and remainder `u`. The divisor must be nonzero; the public operation
/// layer guarantees that by policy.
pub fn udivrem(quot: &mut [u64], u: &[u64], d: U256) -> U256 {
    debug_assert!(!d.is_zero(), "division by zero");
    debug_assert!(u.len() <= 8);
    debug_assert!(quot.len() == u.len());

    quot.fill(0);

    let mut d_len = 0;
    for i in (0..4).rev() {
        if d.0[i] != 0 {
            d_len = i + 1;
            break;
        }
    }

    let shift = d.0[d_len - 1].leading_zeros();

    let mut dn = [0u64; 4];
    for i in (1..d_len).rev() {
        dn[i] = if shift == 0 {
            d.0[i]
        } else {
            d.0[i] << shift | d.0[i - 1] >> (64 - shift)
        };
    }
    dn[0] = d.0[0] << shift;

    let mut u_len = 0;
    for i in (0..u.len()).rev() {
        if u[i] != 0 {
            u_len = i + 1;
            break;
        }
    }

    if u_len < d_len {
        let mut rem = U256::ZERO;
        rem.0[..u_len].copy_from_slice(&u[..u_len]);
        return rem;
    }

    let mut un = [0u64; 9];
    for i in (1..u_len).rev() {
        un[i] = if shift == 0 {
            u[i]
        } else {
            u[i] << shift | u[i - 1] >> (64 - shift)
        };
    }
    un[u_len] = if shift == 0 {
        0
    } else {
        u[u_len - 1] >> (64 - shift)
    };
    un[0] = u[0] << shift;

    if d_len == 1 {
        let r = udivrem_by1(&mut quot[..u_len], &un[..=u_len], dn[0]);
        return U256::from_u64(r >> shift);
    }

    udivrem_knuth(
        &mut quot[..=u_len - d_len],
        &mut un[..=u_len],
        &dn[..d_len],
    );

    let mut rem = U256::ZERO;
    for i in 0..d_len - 1 {
        rem.0[i] = if shift == 0 {
            un[i]
        } else {
            un[i] >> shift | un[i + 1] << (64 - shift)
        };
    }
    rem.0[d_len - 1] = un[d_len - 1] >> shift;
    rem
}
