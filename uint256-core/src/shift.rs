//! The shift engine: left, logical right, and arithmetic right shifts with
//! word-aligned fast paths.
//!
//! Whole multiples of 64 bits move words without touching their contents;
//! the residual sub-word amount is merged across adjacent words. All three
//! shifts are total over any `u64` amount: `shl`/`shr` saturate to zero at
//! 256 bits, `sar` to the sign fill.

use std::ops::Shl;
use std::ops::Shr;

use crate::U256;

/// Left shift; amounts of 256 or more yield zero.
pub fn shl(x: U256, n: u64) -> U256 {
    let U256([x0, x1, x2, x3]) = x;
    match n {
        0 => x,
        1..64 => {
            let s = n as u32;
            let r = 64 - s;
            U256([x0 << s, x1 << s | x0 >> r, x2 << s | x1 >> r, x3 << s | x2 >> r])
        }
        64..128 => {
            let s = (n - 64) as u32;
            if s == 0 {
                U256([0, x0, x1, x2])
            } else {
                let r = 64 - s;
                U256([0, x0 << s, x1 << s | x0 >> r, x2 << s | x1 >> r])
            }
        }
        128..192 => {
            let s = (n - 128) as u32;
            if s == 0 {
                U256([0, 0, x0, x1])
            } else {
                let r = 64 - s;
                U256([0, 0, x0 << s, x1 << s | x0 >> r])
            }
        }
        192..256 => U256([0, 0, 0, x0 << ((n - 192) as u32)]),
        _ => U256::ZERO,
    }
}

/// Logical right shift; amounts of 256 or more yield zero.
pub fn shr(x: U256, n: u64) -> U256 {
    let U256([x0, x1, x2, x3]) = x;
    match n {
        0 => x,
        1..64 => {
            let s = n as u32;
            let r = 64 - s;
            U256([x0 >> s | x1 << r, x1 >> s | x2 << r, x2 >> s | x3 << r, x3 >> s])
        }
        64..128 => {
            let s = (n - 64) as u32;
            if s == 0 {
                U256([x1, x2, x3, 0])
            } else {
                let r = 64 - s;
                U256([x1 >> s | x2 << r, x2 >> s | x3 << r, x3 >> s, 0])
            }
        }
        128..192 => {
            let s = (n - 128) as u32;
            if s == 0 {
                U256([x2, x3, 0, 0])
            } else {
                let r = 64 - s;
                U256([x2 >> s | x3 << r, x3 >> s, 0, 0])
            }
        }
        192..256 => U256([x3 >> ((n - 192) as u32), 0, 0, 0]),
        _ => U256::ZERO,
    }
}

/// Arithmetic right shift: the vacated high bits take the value of the top
/// bit. Amounts of 256 or more saturate to all zeros or all ones.
pub fn sar(x: U256, n: u64) -> U256 {
    if !x.is_negative() {
        return shr(x, n);
    }
    if n == 0 {
        return x;
    }
    if n >= 256 {
        return U256::MAX;
    }

    let s = (n % 64) as u32;
    // sign bits entering the topmost affected word
    let fill = if s == 0 { 0 } else { !0 << (64 - s) };

    let U256([x0, x1, x2, x3]) = x;
    match n {
        1..64 => {
            let r = 64 - s;
            U256([
                x0 >> s | x1 << r,
                x1 >> s | x2 << r,
                x2 >> s | x3 << r,
                x3 >> s | fill,
            ])
        }
        64..128 => {
            if s == 0 {
                U256([x1, x2, x3, !0])
            } else {
                let r = 64 - s;
                U256([x1 >> s | x2 << r, x2 >> s | x3 << r, x3 >> s | fill, !0])
            }
        }
        128..192 => {
            if s == 0 {
                U256([x2, x3, !0, !0])
            } else {
                let r = 64 - s;
                U256([x2 >> s | x3 << r, x3 >> s | fill, !0, !0])
            }
        }
        _ => {
            if s == 0 {
                U256([x3, !0, !0, !0])
            } else {
                U256([x3 >> s | fill, !0, !0, !0])
            }
        }
    }
}

/// Logical left shift; wraps [`shl`].
impl Shl<u32> for U256 {
    type Output = Self;

    fn shl(self, rhs: u32) -> Self {
        shl(self, u64::from(rhs))
    }
}

/// Logical right shift; wraps [`shr`].
impl Shr<u32> for U256 {
    type Output = Self;

    fn shr(self, rhs: u32) -> Self {
        shr(self, u64::from(rhs))
    }
}
