//! # vout
//!
//! Encoding, decoding and validation of value outputs: the amount-bearing
//! records a transaction deposits onto addresses.
//!
//! ## Overview
//!
//! - **Outputs**: a sig locked single output deposits an amount onto one address
//! - **Codecs**: a fixed little-endian binary layout and a JSON document form
//! - **Validators**: positive amounts, the total supply bound over a whole set,
//!   and address uniqueness
//! - **Sequences**: count-prefixed lists of outputs, as carried in a transaction
//!
//! ## Usage
//!
//! ```rust
//! use vout::{CodecConfig, OutputCodec};
//! use vout::core::{Ed25519Address, Output, SigLockedSingleOutput};
//!
//! let codec = OutputCodec::new(CodecConfig::default()).unwrap();
//!
//! let outputs: Vec<Output> = vec![
//!     SigLockedSingleOutput::new(Ed25519Address::from_bytes([1; 32]), 1_000).into(),
//!     SigLockedSingleOutput::new(Ed25519Address::from_bytes([2; 32]), 2_000).into(),
//! ];
//!
//! let bytes = codec.encode_outputs(&outputs).unwrap();
//! let (decoded, _) = codec.decode_outputs(&bytes).unwrap();
//! assert_eq!(decoded, outputs);
//! ```
//!
//! ## Re-exports
//!
//! - `vout::core` - Core primitives (addresses, outputs, validators)

pub mod codec;
pub mod error;

pub use vout_core as core;

pub use codec::{CodecConfig, OutputCodec};
pub use error::{Result, VoutError};

pub use vout_core::{
    validate_outputs, Address, AddressKind, CodecError, CodecMode, Ed25519Address, Output,
    OutputType, SigLockedSingleOutput, ValidationError, ValidatorChain, WotsAddress, TOTAL_SUPPLY,
};
