//! The 256-bit word type and its predicates.

use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::LowerHex;
use std::fmt::Result as FmtResult;
use std::fmt::UpperHex;
use std::ops::Add;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::BitXor;
use std::ops::Not;
use std::ops::Sub;

use arbitrary::Arbitrary;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use crate::word;

/// Sign of a 256-bit word under two's-complement interpretation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// An unsigned 256-bit integer: four 64-bit words, least significant first.
///
/// The value is Σ `word[i]`·2^(64·i). The same bit pattern doubles as a
/// two's-complement signed integer for the signed operations; the sign is
/// the top bit of the most significant word. All arithmetic wraps modulo
/// 2^256 and never faults.
///
/// The comparison operators ([`Ord`], [`PartialOrd`]) are unsigned; signed
/// ordering is a property of the operation, not the type.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Arbitrary,
)]
pub struct U256(pub [u64; 4]);

impl U256 {
    pub const ZERO: Self = Self([0; 4]);
    pub const ONE: Self = Self([1, 0, 0, 0]);
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// The word holding the top bit, which decides the two's-complement
    /// sign.
    pub(crate) const SIGN_WORD: usize = 3;

    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    /// The least significant 64 bits.
    pub const fn low_u64(self) -> u64 {
        self.0[0]
    }

    pub const fn is_zero(self) -> bool {
        let [x0, x1, x2, x3] = self.0;
        (x0 | x1 | x2 | x3) == 0
    }

    /// Whether the value is representable in a single word.
    pub const fn fits_u64(self) -> bool {
        let [_, x1, x2, x3] = self.0;
        (x1 | x2 | x3) == 0
    }

    /// Whether the top bit is set, i.e. the value is negative under
    /// two's-complement interpretation.
    pub const fn is_negative(self) -> bool {
        self.0[Self::SIGN_WORD] >> 63 == 1
    }

    /// Two's-complement sign: the zero test comes first, then the top bit.
    pub const fn sign(self) -> Sign {
        if self.is_zero() {
            Sign::Zero
        } else if self.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Strictly-less-than against a single word.
    pub const fn lt_u64(self, n: u64) -> bool {
        self.fits_u64() && self.0[0] < n
    }

    /// Strictly-greater-than against a single word.
    pub const fn gt_u64(self, n: u64) -> bool {
        !self.fits_u64() || self.0[0] > n
    }

    /// Number of bits required to represent the value; 0 for zero. Scans
    /// from the most significant nonzero word down.
    pub const fn bit_len(self) -> u32 {
        let mut i = 4;
        while i > 0 {
            i -= 1;
            if self.0[i] != 0 {
                return 64 * i as u32 + word::bit_len(self.0[i]);
            }
        }
        0
    }

    /// Whether bit `n` is set, with bit 0 the least significant.
    pub const fn bit(self, n: u32) -> bool {
        debug_assert!(n < 256);
        self.0[(n / 64) as usize] >> (n % 64) & 1 == 1
    }

    /// Addition modulo 2^256 with the carry out of the top word.
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (r0, carry) = word::carrying_add(self.0[0], rhs.0[0], 0);
        let (r1, carry) = word::carrying_add(self.0[1], rhs.0[1], carry);
        let (r2, carry) = word::carrying_add(self.0[2], rhs.0[2], carry);
        let (r3, carry) = word::carrying_add(self.0[3], rhs.0[3], carry);
        (Self([r0, r1, r2, r3]), carry != 0)
    }

    pub const fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Subtraction modulo 2^256 with the borrow out of the top word. The
    /// borrow chain doubles as the unsigned comparator.
    pub const fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (r0, borrow) = word::borrowing_sub(self.0[0], rhs.0[0], 0);
        let (r1, borrow) = word::borrowing_sub(self.0[1], rhs.0[1], borrow);
        let (r2, borrow) = word::borrowing_sub(self.0[2], rhs.0[2], borrow);
        let (r3, borrow) = word::borrowing_sub(self.0[3], rhs.0[3], borrow);
        (Self([r0, r1, r2, r3]), borrow != 0)
    }

    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Two's-complement negation.
    pub const fn wrapping_neg(self) -> Self {
        Self::ZERO.wrapping_sub(self)
    }

    /// Reads a 32-byte big-endian word, the wire format of the surrounding
    /// VM: both the byte order within each 8-byte limb and the limb order
    /// are reversed.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut words = [0u64; 4];
        for (i, word) in words.iter_mut().enumerate() {
            let mut limb = [0u8; 8];
            limb.copy_from_slice(&bytes[24 - 8 * i..32 - 8 * i]);
            *word = u64::from_be_bytes(limb);
        }
        Self(words)
    }

    /// Writes the value as a 32-byte big-endian word; the inverse of
    /// [`from_be_bytes`](Self::from_be_bytes).
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, word) in self.0.iter().enumerate() {
            bytes[24 - 8 * i..32 - 8 * i].copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Parses a big-endian hex numeral, with or without a `0x` prefix.
    /// Intended for writing constants.
    ///
    /// # Panics
    ///
    /// Panics if the input is empty, longer than 64 hex digits, or contains
    /// a non-hex character.
    pub fn from_be_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        assert!(
            !digits.is_empty() && digits.len() <= 64,
            "hex numeral must hold 1 to 64 digits"
        );
        let mut words = [0u64; 4];
        for (i, digit) in digits.chars().rev().enumerate() {
            let Some(digit) = digit.to_digit(16) else {
                panic!("invalid hex digit {digit:?}");
            };
            words[i / 16] |= u64::from(digit) << (4 * (i % 16));
        }
        Self(words)
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<bool> for U256 {
    fn from(value: bool) -> Self {
        Self::from_u64(u64::from(value))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            Ordering::Equal
        } else if self.overflowing_sub(*other).1 {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Addition wraps modulo 2^256.
impl Add for U256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

/// Subtraction wraps modulo 2^256.
impl Sub for U256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl BitAnd for U256 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        let [x0, x1, x2, x3] = self.0;
        let [y0, y1, y2, y3] = rhs.0;
        Self([x0 & y0, x1 & y1, x2 & y2, x3 & y3])
    }
}

impl BitOr for U256 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        let [x0, x1, x2, x3] = self.0;
        let [y0, y1, y2, y3] = rhs.0;
        Self([x0 | y0, x1 | y1, x2 | y2, x3 | y3])
    }
}

impl BitXor for U256 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        let [x0, x1, x2, x3] = self.0;
        let [y0, y1, y2, y3] = rhs.0;
        Self([x0 ^ y0, x1 ^ y1, x2 ^ y2, x3 ^ y3])
    }
}

impl Not for U256 {
    type Output = Self;

    fn not(self) -> Self {
        let [x0, x1, x2, x3] = self.0;
        Self([!x0, !x1, !x2, !x3])
    }
}

impl Zero for U256 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(*self)
    }
}

impl One for U256 {
    fn one() -> Self {
        Self::ONE
    }
}

impl Display for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self:#x}")
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if f.alternate() {
            write!(f, "0x")?;
        }
        let [x0, x1, x2, x3] = self.0;
        if x3 != 0 {
            write!(f, "{x3:x}{x2:016x}{x1:016x}{x0:016x}")
        } else if x2 != 0 {
            write!(f, "{x2:x}{x1:016x}{x0:016x}")
        } else if x1 != 0 {
            write!(f, "{x1:x}{x0:016x}")
        } else {
            write!(f, "{x0:x}")
        }
    }
}

impl UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if f.alternate() {
            write!(f, "0x")?;
        }
        let [x0, x1, x2, x3] = self.0;
        if x3 != 0 {
            write!(f, "{x3:X}{x2:016X}{x1:016X}{x0:016X}")
        } else if x2 != 0 {
            write!(f, "{x2:X}{x1:016X}{x0:016X}")
        } else if x1 != 0 {
            write!(f, "{x1:X}{x0:016X}")
        } else {
            write!(f, "{x0:X}")
        }
    }
}
