//! Utilities for the pairing precompile output.
use alloy_primitives::{b256, Bytes, B256};

/// Converts a boolean to a left-padded 32-byte `Bytes` value.
///
/// This is optimized to not allocate at runtime by using 2 static arrays.
#[inline]
pub const fn bool_to_bytes32(value: bool) -> Bytes {
    Bytes::from_static(&bool_to_b256(value).0)
}

/// Converts a boolean to a left-padded `B256` value.
///
/// This is optimized to not allocate at runtime by using 2 static arrays.
#[inline]
pub const fn bool_to_b256(value: bool) -> &'static B256 {
    const TRUE: &B256 = &b256!("0000000000000000000000000000000000000000000000000000000000000001");
    const FALSE: &B256 = &b256!("0000000000000000000000000000000000000000000000000000000000000000");
    if value {
        TRUE
    } else {
        FALSE
    }
}
