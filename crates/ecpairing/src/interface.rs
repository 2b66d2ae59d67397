//! Interface for the pairing precompile. It contains the precompile result type,
//! the precompile output type, and the precompile error type.
use alloy_primitives::Bytes;
use core::fmt;

/// A precompile operation result type
///
/// Returns either `Ok(PrecompileOutput)` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, PrecompileError>;

/// Precompile function type. Takes input and gas limit and returns precompile result.
pub type PrecompileFn = fn(&[u8], u64) -> PrecompileResult;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas used by the precompile
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// Precompile error type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// out of gas is the main error. Others are here just for completeness
    OutOfGas,
    /// Bn254 pair length
    Bn254PairLength,
    /// Bn254 field element is not below the modulus
    Bn254FieldPointNotAMember,
    /// Bn254 affine g failed to create
    Bn254AffineGFailedToCreate,
    /// Bn254 G2 point is on the twist but outside the order `r` subgroup
    Bn254G2NotInSubgroup,
}

impl PrecompileError {
    /// Returns `true` if the error is out of gas.
    pub fn is_oog(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }

    /// Returns `true` if the error comes from the contents of a point encoding, as opposed to
    /// the input length or gas.
    pub fn is_malformed_point(&self) -> bool {
        matches!(
            self,
            Self::Bn254FieldPointNotAMember
                | Self::Bn254AffineGFailedToCreate
                | Self::Bn254G2NotInSubgroup
        )
    }
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OutOfGas => "out of gas",
            Self::Bn254PairLength => "bn254 invalid pair length",
            Self::Bn254FieldPointNotAMember => "field point not a member of bn254 curve",
            Self::Bn254AffineGFailedToCreate => "failed to create affine g point for bn254 curve",
            Self::Bn254G2NotInSubgroup => "bn254 g2 point not in subgroup",
        };
        f.write_str(s)
    }
}
