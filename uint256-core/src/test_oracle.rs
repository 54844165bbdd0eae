//! Conversions to and from the arbitrary-precision reference used by the
//! cross-checking tests.

use num_bigint::BigUint;

use crate::U256;

pub(crate) fn to_biguint(x: U256) -> BigUint {
    BigUint::from_bytes_be(&x.to_be_bytes())
}

/// # Panics
///
/// Panics if `x` does not fit in 256 bits.
pub(crate) fn from_biguint(x: &BigUint) -> U256 {
    let bytes = x.to_bytes_be();
    assert!(bytes.len() <= 32, "value exceeds 256 bits");
    let mut buf = [0u8; 32];
    buf[32 - bytes.len()..].copy_from_slice(&bytes);
    U256::from_be_bytes(buf)
}
