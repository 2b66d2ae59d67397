//! # revm-ecpairing
//!
//! The EIP-197 `ecPairing` precompile: an optimal ate pairing check on the alt_bn128 curve.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod bn254;
pub mod ecpairing;
pub mod interface;
pub mod utilities;

pub use alloy_primitives::{Address, Bytes};
pub use ecpairing::{evaluate, pairing_check, run_pair, PairingGasParams};
pub use interface::*;

/// Precompile with address and function.
#[derive(Clone, Debug)]
pub struct PrecompileWithAddress(pub Address, pub PrecompileFn);

impl From<(Address, PrecompileFn)> for PrecompileWithAddress {
    fn from(value: (Address, PrecompileFn)) -> Self {
        PrecompileWithAddress(value.0, value.1)
    }
}

impl From<PrecompileWithAddress> for (Address, PrecompileFn) {
    fn from(value: PrecompileWithAddress) -> Self {
        (value.0, value.1)
    }
}

impl PrecompileWithAddress {
    /// Returns reference of address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.0
    }

    /// Returns reference of precompile.
    #[inline]
    pub fn precompile(&self) -> &PrecompileFn {
        &self.1
    }
}

/// Hardforks that changed the pairing precompile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum PrecompileSpecId {
    /// EIP-197 introduces the precompile.
    BYZANTIUM,
    /// EIP-1108 reprices it.
    ISTANBUL,
}

impl PrecompileSpecId {
    /// Returns the gas schedule in force for this hardfork.
    pub const fn pairing_gas(self) -> PairingGasParams {
        match self {
            Self::BYZANTIUM => PairingGasParams::BYZANTIUM,
            Self::ISTANBUL => PairingGasParams::ISTANBUL,
        }
    }

    /// Returns the precompile in force for this hardfork.
    pub const fn precompile(self) -> PrecompileWithAddress {
        match self {
            Self::BYZANTIUM => ecpairing::pair::BYZANTIUM,
            Self::ISTANBUL => ecpairing::pair::ISTANBUL,
        }
    }
}

/// Const function for making an address by concatenating the bytes from two given numbers.
///
/// Note that 32 + 128 = 160 = 20 bytes (the length of an address).
///
/// This function is used as a convenience for specifying the addresses of the various precompiles.
#[inline]
pub const fn u64_to_address(x: u64) -> Address {
    let x = x.to_be_bytes();
    Address::new([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7],
    ])
}
