//! # vout core
//!
//! Pure primitives for value outputs: addresses, outputs, their binary and
//! JSON codecs, and the validators a set of outputs must pass.
//!
//! This crate contains no I/O. Every operation is a computation over
//! in-memory bytes or JSON values.
//!
//! ## Key Types
//!
//! - [`SigLockedSingleOutput`] - An amount deposited onto one address
//! - [`Output`] - Any registered output type
//! - [`Address`] - A deposit address of any registered kind
//! - [`ValidatorChain`] - Stateful validators applied over a set of outputs
//!
//! ## Encoding
//!
//! Binary encodings are fixed-layout and little-endian, see [`output`].
//! JSON encodings embed the address document verbatim, see [`json`].

pub mod address;
pub mod codec;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod json;
pub mod output;
pub mod validation;

pub use address::{Address, AddressKind, Ed25519Address, WotsAddress};
pub use codec::CodecMode;
pub use constants::TOTAL_SUPPLY;
pub use crypto::{Ed25519PublicKey, Keypair};
pub use error::{CodecError, OutputPosition, ValidationError};
pub use output::{Output, OutputType, SigLockedSingleOutput};
pub use validation::{
    validate_outputs, AddressUniqueValidator, DepositAmountValidator, OutputValidator,
    ValidatorChain,
};
