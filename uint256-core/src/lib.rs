//! Fixed-width 256-bit integer arithmetic.
//!
//! This crate is the arithmetic engine behind an EVM-style word model: the
//! [`U256`] type with its predicates, 64-bit [word primitives](word) with
//! branch-free carry extraction, [wide multiplication](mul) to double
//! width, a [multi-precision division engine](div), a [Barrett-style
//! modular reduction](reduce), and the [shift engine](shift).
//!
//! Every operation is a pure function over stack values: no heap, no
//! global state, no faults. Unsigned arithmetic wraps modulo 2^256. The
//! VM-facing operations with their edge-case policy (division by zero,
//! shift saturation, and so on) live in the `uint256-evm` crate; this
//! crate supplies the mechanisms.

pub mod div;
pub mod mul;
pub mod reduce;
pub mod shift;
pub mod u256;
pub mod word;

#[cfg(test)]
pub(crate) mod test_oracle;

pub use u256::Sign;
pub use u256::U256;
