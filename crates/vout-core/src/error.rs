//! Error types for vout core.

use std::fmt;

use thiserror::Error;

/// Where in a validation pass an output sits.
///
/// Isolated checks (single-output encode/decode) have no index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputPosition {
    /// Validated on its own, outside of any batch.
    Isolated,
    /// Validated as the `n`-th element of a batch.
    Index(usize),
}

impl fmt::Display for OutputPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputPosition::Isolated => write!(f, "isolated output"),
            OutputPosition::Index(i) => write!(f, "output {}", i),
        }
    }
}

/// Errors that can occur while encoding or decoding outputs and addresses.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("input too short: required {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("not enough data: {0}")]
    NotEnoughData(&'static str),

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: u8, actual: u8 },

    #[error("unknown output type: {0}")]
    UnknownOutputType(u8),

    #[error("unknown address kind: {0}")]
    UnknownAddressKind(u8),

    #[error("unable to decode address: {0}")]
    MalformedAddress(#[source] Box<CodecError>),

    #[error("invalid JSON document: {0}")]
    InvalidJson(String),

    #[error("encoding error: {0}")]
    EncodingError(String),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CodecError {
    /// Whether the input was structurally unusable (too short, truncated,
    /// unparsable) as opposed to well-formed but rejected.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            CodecError::TooShort { .. }
                | CodecError::NotEnoughData(_)
                | CodecError::MalformedAddress(_)
                | CodecError::InvalidJson(_)
        )
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        CodecError::InvalidJson(e.to_string())
    }
}

/// Invariant violations found by the validator chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("deposit amount must be greater than zero: {position}")]
    AmountZero { position: OutputPosition },

    #[error("deposit of {amount} exceeds the total supply: {position}")]
    AmountExceedsSupply { amount: u64, position: OutputPosition },

    #[error("sum of deposits exceeds the total supply: {position}")]
    SumExceedsSupply { position: OutputPosition },

    #[error("output {first} and {duplicate} share the same address")]
    DuplicateAddress { first: usize, duplicate: usize },

    #[error("isolated output shares its address with output {first}")]
    AddressAlreadyUsed { first: usize },

    #[error("can only validate sig locked single outputs: {position}")]
    UnknownOutputType { position: OutputPosition },
}
