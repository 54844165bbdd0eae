//! The byte-buffer call boundary: exact-length validation, big-endian word
//! marshaling, and the dispatch to the operation layer.

use thiserror::Error;
use uint256_core::U256;

use crate::opcode::OpCode;
use crate::ops;

/// Rejection of a call envelope before the engine is invoked. This is the
/// only user-visible failure mode; the operations themselves are total.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum DispatchError {
    #[error("{op} expects exactly {expected} input bytes, got {actual}")]
    InputLength {
        op: OpCode,
        expected: usize,
        actual: usize,
    },
}

/// Executes `op` on a length-validated input buffer.
///
/// The input holds one 32-byte big-endian word per operand — 32 bytes for
/// unary operations, 64 for binary, 96 for ternary — and the result is a
/// single 32-byte big-endian word. Comparisons and `iszero` encode their
/// boolean result as the word 0 or 1.
pub fn execute(op: OpCode, input: &[u8]) -> Result<[u8; 32], DispatchError> {
    let expected = op.input_len();
    if input.len() != expected {
        return Err(DispatchError::InputLength {
            op,
            expected,
            actual: input.len(),
        });
    }

    let mut operands = [U256::ZERO; 3];
    for (operand, chunk) in operands.iter_mut().zip(input.chunks_exact(32)) {
        let mut word = [0u8; 32];
        word.copy_from_slice(chunk);
        *operand = U256::from_be_bytes(word);
    }
    let [x, y, z] = operands;

    let result = match op {
        OpCode::Add => ops::add(x, y),
        OpCode::Mul => ops::mul(x, y),
        OpCode::Sub => ops::sub(x, y),
        OpCode::Div => ops::div(x, y),
        OpCode::SDiv => ops::sdiv(x, y),
        OpCode::Mod => ops::modulo(x, y),
        OpCode::SMod => ops::smod(x, y),
        OpCode::AddMod => ops::addmod(x, y, z),
        OpCode::MulMod => ops::mulmod(x, y, z),
        OpCode::Exp => ops::exp(x, y),
        OpCode::SignExtend => ops::signextend(x, y),
        OpCode::Lt => U256::from(ops::lt(x, y)),
        OpCode::Gt => U256::from(ops::gt(x, y)),
        OpCode::Slt => U256::from(ops::slt(x, y)),
        OpCode::Sgt => U256::from(ops::sgt(x, y)),
        OpCode::Eq => U256::from(ops::eq(x, y)),
        OpCode::IsZero => U256::from(ops::iszero(x)),
        OpCode::And => ops::and(x, y),
        OpCode::Or => ops::or(x, y),
        OpCode::Xor => ops::xor(x, y),
        OpCode::Not => ops::not(x),
        OpCode::Byte => ops::byte(x, y),
        OpCode::Shl => ops::shl(x, y),
        OpCode::Shr => ops::shr(x, y),
        OpCode::Sar => ops::sar(x, y),
    };

    Ok(result.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use assert2::let_assert;
    use proptest::prelude::*;
    use proptest_arbitrary_interop::arb;
    use strum::IntoEnumIterator;
    use test_strategy::proptest;

    use super::*;

    fn word_of(value: u64) -> [u8; 32] {
        U256::from_u64(value).to_be_bytes()
    }

    fn call(op: OpCode, operands: &[[u8; 32]]) -> [u8; 32] {
        let input: Vec<u8> = operands.concat();
        let_assert!(Ok(output) = execute(op, &input));
        output
    }

    #[test]
    fn every_opcode_rejects_wrong_input_lengths() {
        for op in OpCode::iter() {
            for actual in [0, 31, 33, 63, 65, 95, 97, 128] {
                if actual == op.input_len() {
                    continue;
                }
                let input = vec![0u8; actual];
                let_assert!(Err(DispatchError::InputLength { expected, .. }) =
                    execute(op, &input));
                assert!(expected == op.input_len());
            }
        }
    }

    #[test]
    fn every_opcode_accepts_its_exact_input_length() {
        for op in OpCode::iter() {
            let input = vec![0u8; op.input_len()];
            assert!(execute(op, &input).is_ok());
        }
    }

    #[test]
    fn add_marshals_big_endian_words() {
        let output = call(OpCode::Add, &[word_of(2), word_of(40)]);
        assert!(output == word_of(42));

        // a carry out of the lowest limb shows up in the next limb's bytes
        let output = call(OpCode::Add, &[U256([u64::MAX, 0, 0, 0]).to_be_bytes(), word_of(1)]);
        assert!(output == U256([0, 1, 0, 0]).to_be_bytes());
    }

    #[test]
    fn comparisons_encode_booleans_as_words() {
        assert!(call(OpCode::Lt, &[word_of(1), word_of(2)]) == word_of(1));
        assert!(call(OpCode::Lt, &[word_of(2), word_of(1)]) == word_of(0));
        assert!(call(OpCode::Gt, &[word_of(2), word_of(1)]) == word_of(1));
        assert!(call(OpCode::Eq, &[word_of(7), word_of(7)]) == word_of(1));
        assert!(call(OpCode::IsZero, &[word_of(0)]) == word_of(1));
        assert!(call(OpCode::IsZero, &[word_of(3)]) == word_of(0));
    }

    #[test]
    fn ternary_operations_take_96_bytes() {
        let output = call(OpCode::AddMod, &[word_of(7), word_of(10), word_of(5)]);
        assert!(output == word_of(2));

        let output = call(OpCode::MulMod, &[word_of(7), word_of(10), word_of(5)]);
        assert!(output == word_of(0));
    }

    #[test]
    fn shift_operations_take_the_value_first() {
        // the wire format orders inputs (value, amount)
        let output = call(OpCode::Shl, &[word_of(1), word_of(4)]);
        assert!(output == word_of(16));

        let output = call(OpCode::Shr, &[word_of(16), word_of(4)]);
        assert!(output == word_of(1));

        let output = call(OpCode::Byte, &[word_of(0xab), word_of(31)]);
        assert!(output == word_of(0xab));

        let output = call(OpCode::SignExtend, &[word_of(0x87), word_of(0)]);
        assert!(output == U256([0xffff_ffff_ffff_ff87, !0, !0, !0]).to_be_bytes());
    }

    #[proptest]
    fn execute_agrees_with_the_operation_layer(
        #[strategy(arb())] x: U256,
        #[strategy(arb())] y: U256,
    ) {
        let input: Vec<u8> = [x.to_be_bytes(), y.to_be_bytes()].concat();
        let_assert!(Ok(output) = execute(OpCode::Mul, &input));
        prop_assert_eq!(U256::from_be_bytes(output), ops::mul(x, y));
    }

    #[proptest]
    fn round_trip_through_the_wire_format(#[strategy(arb())] x: U256) {
        let input: Vec<u8> = [x.to_be_bytes(), U256::ZERO.to_be_bytes()].concat();
        let_assert!(Ok(output) = execute(OpCode::Add, &input));
        prop_assert_eq!(U256::from_be_bytes(output), x);
    }
}
