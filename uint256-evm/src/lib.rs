//! The VM-facing surface of the 256-bit word model.
//!
//! The [`ops`] module holds the 25 arithmetic, comparison, and bitwise
//! operations with their fixed edge-case policy: division and modulo by
//! zero yield zero, shifts saturate at 256 bits, exponentiation wraps
//! modulo 2^256 — never a fault, always a defined result. [`dispatch`]
//! maps an [`OpCode`] and a length-validated byte buffer onto one of them,
//! marshaling 32-byte big-endian words at the boundary.
//!
//! The arithmetic itself lives in `uint256-core`; this crate encodes the
//! policy.

pub mod dispatch;
pub mod error;
pub mod opcode;
pub mod ops;

pub use dispatch::execute;
pub use opcode::OpCode;
