//! The opcode enumeration for the 25 word operations.

use arbitrary::Arbitrary;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumCount;
use strum::EnumIter;
use strum::EnumString;

/// One of the 25 arithmetic, comparison, or bitwise operations of the word
/// model.
///
/// The name each opcode displays and parses as is its lowercase mnemonic,
/// e.g. `sdiv` or `signextend`.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Arbitrary,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum OpCode {
    Add,
    Mul,
    Sub,
    Div,
    SDiv,
    Mod,
    SMod,
    AddMod,
    MulMod,
    Exp,
    SignExtend,
    Lt,
    Gt,
    Slt,
    Sgt,
    Eq,
    IsZero,
    And,
    Or,
    Xor,
    Not,
    Byte,
    Shl,
    Shr,
    Sar,
}

impl OpCode {
    /// Number of 256-bit operands the operation consumes.
    pub const fn arity(self) -> usize {
        match self {
            Self::IsZero | Self::Not => 1,
            Self::AddMod | Self::MulMod => 3,
            _ => 2,
        }
    }

    /// The exact input length in bytes: one 32-byte big-endian word per
    /// operand.
    pub const fn input_len(self) -> usize {
        self.arity() * 32
    }

    /// Whether the operation's result is a boolean, encoded as the word 0
    /// or 1.
    pub const fn is_predicate(self) -> bool {
        matches!(
            self,
            Self::Lt | Self::Gt | Self::Slt | Self::Sgt | Self::Eq | Self::IsZero
        )
    }
}
