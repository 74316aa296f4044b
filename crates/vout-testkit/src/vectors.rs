//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the exact binary encoding of known outputs so every
//! implementation of the codec produces identical bytes.

use vout_core::{
    Address, AddressKind, CodecMode, Ed25519Address, SigLockedSingleOutput, WotsAddress, TOTAL_SUPPLY,
};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Address kind.
    pub address_kind: AddressKind,
    /// Fill byte for the raw address.
    pub address_fill: u8,
    /// Deposited amount.
    pub amount: u64,
    /// Expected binary encoding (hex).
    pub expected_bytes: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "Ed25519 deposit of 1000",
            address_kind: AddressKind::Ed25519,
            address_fill: 0x01,
            amount: 1000,
            expected_bytes: concat!(
                "0001",
                "0101010101010101010101010101010101010101010101010101010101010101",
                "e803000000000000",
            ),
        },
        GoldenVector {
            name: "WOTS deposit of the total supply",
            address_kind: AddressKind::Wots,
            address_fill: 0xab,
            amount: TOTAL_SUPPLY,
            expected_bytes: concat!(
                "0000",
                "abababababababababababababababababababababababababababababababababab",
                "ababababababababababababababab",
                "c15d2dd3f7df0900",
            ),
        },
        GoldenVector {
            name: "Ed25519 single token",
            address_kind: AddressKind::Ed25519,
            address_fill: 0xff,
            amount: 1,
            expected_bytes: concat!(
                "0001",
                "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
                "0100000000000000",
            ),
        },
    ]
}

/// Build the output a golden vector describes.
pub fn output_from_vector(vector: &GoldenVector) -> SigLockedSingleOutput {
    let address: Address = match vector.address_kind {
        AddressKind::Wots => WotsAddress::from_bytes([vector.address_fill; 49]).into(),
        AddressKind::Ed25519 => Ed25519Address::from_bytes([vector.address_fill; 32]).into(),
    };
    SigLockedSingleOutput::new(address, vector.amount)
}

/// Verify all golden vectors encode to their expected bytes.
///
/// Returns `(name, matches, actual_hex)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let hex = match output_from_vector(v).encode(CodecMode::Strict) {
                Ok(bytes) => hex::encode(bytes),
                Err(e) => e.to_string(),
            };
            let matches = hex == v.expected_bytes;

            (v.name.to_string(), matches, hex)
        })
        .collect()
}
