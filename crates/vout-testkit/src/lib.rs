//! # vout testkit
//!
//! Testing utilities for the vout output codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known outputs with their expected binary encodings
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic addresses and output batches for test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use vout_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, hex) in verify_all_vectors() {
//!     assert!(ok, "{}: {}", name, hex);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use vout_testkit::generators::{output_from_params, OutputParams};
//!
//! proptest! {
//!     #[test]
//!     fn encoding_is_deterministic(params: OutputParams) {
//!         let output = output_from_params(&params);
//!         prop_assert_eq!(output.encode(Default::default())?, output.encode(Default::default())?);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use vout_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed([7; 32]);
//! let output = fixture.make_output(1_000);
//! assert_eq!(output.amount, 1_000);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{output_from_params, OutputParams};
pub use vectors::{all_vectors, output_from_vector, verify_all_vectors, GoldenVector};
