//! The EIP-197 `ecPairing` precompile.
//!
//! The input is a concatenation of 192 byte elements, each a G1 point followed by a G2 point.
//! The call succeeds with `1` when the product of the pairings of all elements is the identity
//! of the target group and with `0` otherwise.
use crate::{
    bn254::{pairing, read_g1_point, read_g2_point, G1Affine, G2Affine, Gt, G1_LEN, PAIR_ELEMENT_LEN},
    utilities::bool_to_bytes32,
    PrecompileError, PrecompileOutput, PrecompileResult,
};
use std::vec::Vec;
use tracing::{debug, trace};

pub mod pair {
    //! `ecPairing` at address `0x08` under its two gas schedules.
    use super::*;
    use crate::{u64_to_address, PrecompileWithAddress};
    use alloy_primitives::Address;

    /// Address of the pairing precompile.
    pub const ADDRESS: Address = u64_to_address(8);

    /// Per element cost since EIP-1108.
    pub const ISTANBUL_PAIR_PER_POINT: u64 = PairingGasParams::ISTANBUL.per_pair;
    /// Base cost since EIP-1108.
    pub const ISTANBUL_PAIR_BASE: u64 = PairingGasParams::ISTANBUL.base;
    /// The precompile with the EIP-1108 gas schedule.
    pub const ISTANBUL: PrecompileWithAddress =
        PrecompileWithAddress(ADDRESS, |input, gas_limit| {
            run_pair(input, ISTANBUL_PAIR_PER_POINT, ISTANBUL_PAIR_BASE, gas_limit)
        });

    /// Per element cost under EIP-197.
    pub const BYZANTIUM_PAIR_PER_POINT: u64 = PairingGasParams::BYZANTIUM.per_pair;
    /// Base cost under EIP-197.
    pub const BYZANTIUM_PAIR_BASE: u64 = PairingGasParams::BYZANTIUM.base;
    /// The precompile with the EIP-197 gas schedule.
    pub const BYZANTIUM: PrecompileWithAddress =
        PrecompileWithAddress(ADDRESS, |input, gas_limit| {
            run_pair(
                input,
                BYZANTIUM_PAIR_PER_POINT,
                BYZANTIUM_PAIR_BASE,
                gas_limit,
            )
        });
}

/// Gas schedule of the pairing precompile: `base + per_pair * k` for `k` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PairingGasParams {
    /// Cost charged for every call.
    pub base: u64,
    /// Cost charged for each 192 byte element.
    pub per_pair: u64,
}

impl PairingGasParams {
    /// EIP-197 prices.
    pub const BYZANTIUM: Self = Self {
        base: 100_000,
        per_pair: 80_000,
    };

    /// EIP-1108 prices.
    pub const ISTANBUL: Self = Self {
        base: 45_000,
        per_pair: 34_000,
    };

    /// Gas charged for an input of `input_len` bytes.
    ///
    /// A trailing partial element is not charged; such input fails afterwards anyway.
    pub const fn gas_cost(&self, input_len: usize) -> u64 {
        let elements = (input_len / PAIR_ELEMENT_LEN) as u64;
        elements.saturating_mul(self.per_pair).saturating_add(self.base)
    }
}

/// Runs the pairing precompile: charges gas, then evaluates the pairing check.
///
/// Gas is charged before any decoding, so out of gas takes precedence over malformed input.
pub fn run_pair(
    input: &[u8],
    pair_per_point_cost: u64,
    pair_base_cost: u64,
    gas_limit: u64,
) -> PrecompileResult {
    let gas_used = PairingGasParams {
        base: pair_base_cost,
        per_pair: pair_per_point_cost,
    }
    .gas_cost(input.len());
    if gas_used > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let success = evaluate(input)?;
    Ok(PrecompileOutput::new(gas_used, bool_to_bytes32(success)))
}

/// Decodes the input and checks whether the product of the pairings is the identity.
///
/// Empty input is a vacuously true check and is answered without decoding anything. Decoding
/// stops at the first invalid element and no pairing is computed in that case.
pub fn evaluate(input: &[u8]) -> Result<bool, PrecompileError> {
    if input.len() % PAIR_ELEMENT_LEN != 0 {
        debug!(len = input.len(), "pairing input is not a whole number of elements");
        return Err(PrecompileError::Bn254PairLength);
    }

    if input.is_empty() {
        return Ok(true);
    }

    let pairs = decode_pairs(input)?;
    Ok(pairing_check(&pairs))
}

/// Decodes every element, failing on the first one that is invalid.
///
/// The input length must be a multiple of [`PAIR_ELEMENT_LEN`].
fn decode_pairs(input: &[u8]) -> Result<Vec<(G1Affine, G2Affine)>, PrecompileError> {
    input
        .chunks_exact(PAIR_ELEMENT_LEN)
        .enumerate()
        .map(|(idx, element)| {
            let (g1, g2) = element.split_at(G1_LEN);
            let decoded = read_g1_point(g1).and_then(|p| read_g2_point(g2).map(|q| (p, q)));
            match &decoded {
                Ok((p, q)) => trace!(
                    idx,
                    g1_infinity = p.is_identity(),
                    g2_infinity = q.is_identity(),
                    "decoded pairing element"
                ),
                Err(err) => debug!(idx, %err, "rejected pairing element"),
            }
            decoded
        })
        .collect()
}

/// Performs a pairing check on a list of G1 and G2 point pairs and returns true if the
/// product of their pairings is the identity element.
///
/// The pairings are multiplied in input order.
///
/// Note: If the input is empty, this function returns true.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    let mut acc = Gt::identity();
    for (p, q) in pairs {
        acc *= pairing(p, q);
    }
    acc.is_identity()
}
