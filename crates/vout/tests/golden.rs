//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of the output codec must produce identical:
//! - output_bytes (binary encoding)
//! - output_json (textual encoding)
//! - sequence_bytes (count-prefixed sequence of one output)

use serde::Serialize;
use vout::core::constants::SIG_LOCKED_SINGLE_OUTPUT_MIN_SIZE;
use vout::{
    Address, CodecConfig, CodecError, CodecMode, Ed25519Address, Output, OutputCodec,
    SigLockedSingleOutput, ValidationError, VoutError, WotsAddress, TOTAL_SUPPLY,
};

/// A single golden test vector.
#[derive(Debug, Serialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,

    // Inputs
    pub address_kind: u8,
    pub address: String, // raw bytes hex
    pub amount: u64,

    // Derived outputs
    pub output_bytes: String,
    pub output_json: String,
    pub sequence_bytes: String,
}

fn generate_vector(name: &str, description: &str, address: Address, amount: u64) -> GoldenVector {
    let codec = OutputCodec::default();
    let output: Output = SigLockedSingleOutput::new(address, amount).into();

    let output_bytes = codec.encode_output(&output).unwrap();
    let sequence_bytes = codec.encode_outputs(std::slice::from_ref(&output)).unwrap();

    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        address_kind: address.kind().to_u8(),
        address: hex::encode(address.raw_bytes()),
        amount,
        output_bytes: hex::encode(output_bytes),
        output_json: output.to_json().to_string(),
        sequence_bytes: hex::encode(sequence_bytes),
    }
}

fn generate_all_vectors() -> Vec<GoldenVector> {
    vec![
        generate_vector(
            "ed25519_small_amount",
            "Ed25519 address, 1000 tokens",
            Ed25519Address::from_bytes([0x01; 32]).into(),
            1000,
        ),
        generate_vector(
            "wots_total_supply",
            "WOTS address holding the whole supply",
            WotsAddress::from_bytes([0xab; 49]).into(),
            TOTAL_SUPPLY,
        ),
        generate_vector(
            "ed25519_single_token",
            "Smallest legal deposit",
            Ed25519Address::from_bytes([0xff; 32]).into(),
            1,
        ),
    ]
}

#[test]
fn test_vector_bytes() {
    let vectors = generate_all_vectors();
    assert_eq!(vectors.len(), 3);

    assert_eq!(
        vectors[0].output_bytes,
        format!("0001{}e803000000000000", "01".repeat(32))
    );
    assert_eq!(
        vectors[1].output_bytes,
        format!("0000{}c15d2dd3f7df0900", "ab".repeat(49))
    );
    assert_eq!(
        vectors[2].output_bytes,
        format!("0001{}0100000000000000", "ff".repeat(32))
    );

    for v in &vectors {
        assert_eq!(
            v.sequence_bytes,
            format!("0100{}", v.output_bytes),
            "sequence_bytes mismatch for {}",
            v.name
        );
    }
}

#[test]
fn test_vector_json() {
    let vectors = generate_all_vectors();

    assert_eq!(
        vectors[0].output_json,
        format!(
            r#"{{"type":0,"address":{{"type":1,"address":"{}"}},"amount":1000}}"#,
            "01".repeat(32)
        )
    );
    assert_eq!(
        vectors[1].output_json,
        format!(
            r#"{{"type":0,"address":{{"type":0,"address":"{}"}},"amount":2779530283277761}}"#,
            "ab".repeat(49)
        )
    );
}

#[test]
fn test_vectors_decode() {
    let codec = OutputCodec::default();

    for v in generate_all_vectors() {
        let bytes = hex::decode(&v.output_bytes).unwrap();
        let (output, read) = codec.decode_output(&bytes).unwrap();
        assert_eq!(read, bytes.len(), "length mismatch for {}", v.name);

        let o = output.as_sig_locked_single().unwrap();
        assert_eq!(o.amount, v.amount, "amount mismatch for {}", v.name);
        assert_eq!(o.address.kind().to_u8(), v.address_kind);
        assert_eq!(hex::encode(o.address.raw_bytes()), v.address);

        let json: serde_json::Value = serde_json::from_str(&v.output_json).unwrap();
        assert_eq!(Output::from_json(&json).unwrap(), output, "json mismatch for {}", v.name);

        let sequence = hex::decode(&v.sequence_bytes).unwrap();
        let (outputs, consumed) = codec.decode_outputs(&sequence).unwrap();
        assert_eq!(outputs, vec![output]);
        assert_eq!(consumed, sequence.len());
    }
}

#[test]
fn print_golden_vectors_json() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let vectors = generate_all_vectors();
    let json = serde_json::to_string_pretty(&vectors).unwrap();
    println!("{}", json);
}

// =============================================================================
// REJECTION TEST VECTORS
// These test that invalid inputs are properly rejected.
// =============================================================================

#[test]
fn test_reject_wrong_type_byte() {
    let mut bytes = hex::decode(&generate_all_vectors()[0].output_bytes).unwrap();
    bytes[0] = 0x01;

    assert!(
        matches!(
            OutputCodec::default().decode_output(&bytes),
            Err(VoutError::Codec(CodecError::UnknownOutputType(1)))
        ),
        "must reject unknown output type"
    );
    assert!(
        matches!(
            SigLockedSingleOutput::decode(&bytes, CodecMode::Strict),
            Err(CodecError::TypeMismatch { expected: 0, actual: 1 })
        ),
        "must reject mismatched type byte"
    );
}

#[test]
fn test_reject_short_input() {
    let bytes = hex::decode(&generate_all_vectors()[0].output_bytes).unwrap();

    for len in 0..SIG_LOCKED_SINGLE_OUTPUT_MIN_SIZE {
        let result = OutputCodec::default().decode_output(&bytes[..len]);
        assert!(
            matches!(result, Err(VoutError::Codec(ref e)) if e.is_malformed()),
            "must reject {} byte input as malformed",
            len
        );
    }
}

#[test]
fn test_reject_zero_amount() {
    let output: Output = SigLockedSingleOutput::new(Ed25519Address::from_bytes([1; 32]), 0).into();
    assert!(
        matches!(
            OutputCodec::default().encode_output(&output),
            Err(VoutError::Codec(CodecError::Validation(ValidationError::AmountZero { .. })))
        ),
        "must reject zero deposit"
    );
}

#[test]
fn test_reject_over_supply() {
    let output: Output =
        SigLockedSingleOutput::new(Ed25519Address::from_bytes([1; 32]), TOTAL_SUPPLY + 1).into();
    assert!(
        matches!(
            OutputCodec::default().encode_output(&output),
            Err(VoutError::Codec(CodecError::Validation(
                ValidationError::AmountExceedsSupply { .. }
            )))
        ),
        "must reject deposit above total supply"
    );
}

#[test]
fn test_reject_cumulative_supply() {
    let lenient = OutputCodec::new(CodecConfig {
        mode: CodecMode::Lenient,
        ..CodecConfig::default()
    })
    .unwrap();
    let outputs: Vec<Output> = vec![
        SigLockedSingleOutput::new(Ed25519Address::from_bytes([1; 32]), TOTAL_SUPPLY).into(),
        SigLockedSingleOutput::new(Ed25519Address::from_bytes([2; 32]), TOTAL_SUPPLY).into(),
    ];
    let bytes = lenient.encode_outputs(&outputs).unwrap();

    assert!(
        matches!(
            OutputCodec::default().decode_outputs(&bytes),
            Err(VoutError::Validation(ValidationError::SumExceedsSupply { .. }))
        ),
        "must reject outputs summing above total supply"
    );
}
