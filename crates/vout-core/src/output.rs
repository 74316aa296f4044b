//! Value outputs and their binary codec.
//!
//! A sig locked single output deposits an amount onto one address:
//!
//! ```text
//! offset 0    : 1 byte   output type (0)
//! offset 1    : N bytes  address (kind byte || raw bytes)
//! offset 1+N  : 8 bytes  amount, u64 little-endian
//! ```
//!
//! The output itself does not enforce a positive amount. Strict mode runs the
//! amount validator in isolation on both encode and decode.

use crate::address::{Address, AddressKind};
use crate::codec::{check_min_length, check_type_byte, peek_u8, read_u64_le, CodecMode};
use crate::constants::{
    SIG_LOCKED_SINGLE_OUTPUT_ADDRESS_OFFSET, SIG_LOCKED_SINGLE_OUTPUT_ED25519_SIZE,
    SIG_LOCKED_SINGLE_OUTPUT_MIN_SIZE, SIG_LOCKED_SINGLE_OUTPUT_WOTS_SIZE, TYPE_DENOTATION_SIZE,
    UINT64_SIZE,
};
use crate::error::CodecError;
use crate::validation::{DepositAmountValidator, OutputValidator};

/// The type of output, written as the first byte of its encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OutputType {
    /// Unlocked by a signature, deposits onto a single address.
    SigLockedSingle = 0,
}

impl OutputType {
    /// Convert to u8 for serialization.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Resolve a type byte. `None` for unregistered output types.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::SigLockedSingle),
            _ => None,
        }
    }
}

/// An output unlocked by a signature, depositing onto a single address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SigLockedSingleOutput {
    /// The address receiving the deposit.
    pub address: Address,

    /// The amount deposited.
    pub amount: u64,
}

impl SigLockedSingleOutput {
    /// Create a new output.
    pub fn new(address: impl Into<Address>, amount: u64) -> Self {
        Self {
            address: address.into(),
            amount,
        }
    }

    /// Size of the binary encoding, fixed per address kind.
    pub fn serialized_size(&self) -> usize {
        match self.address.kind() {
            AddressKind::Wots => SIG_LOCKED_SINGLE_OUTPUT_WOTS_SIZE,
            AddressKind::Ed25519 => SIG_LOCKED_SINGLE_OUTPUT_ED25519_SIZE,
        }
    }

    /// Decode an output from the front of `data`.
    ///
    /// Returns the output and the number of bytes consumed. Trailing bytes
    /// are left to the caller.
    pub fn decode(data: &[u8], mode: CodecMode) -> Result<(Self, usize), CodecError> {
        if mode.validates() {
            check_min_length(SIG_LOCKED_SINGLE_OUTPUT_MIN_SIZE, data)?;
            check_type_byte(data, OutputType::SigLockedSingle.to_u8())?;
        }

        if data.len() < SIG_LOCKED_SINGLE_OUTPUT_ADDRESS_OFFSET {
            return Err(CodecError::NotEnoughData("output type"));
        }
        let rest = &data[SIG_LOCKED_SINGLE_OUTPUT_ADDRESS_OFFSET..];

        let (address, address_len) = Address::decode(rest, mode)?;

        let mut buf = &rest[address_len..];
        let amount = read_u64_le(&mut buf, "sig locked single output amount")?;

        let output = Self { address, amount };
        if mode.validates() {
            DepositAmountValidator::new().validate_isolated(&output)?;
        }

        Ok((output, TYPE_DENOTATION_SIZE + address_len + UINT64_SIZE))
    }

    /// Encode the output.
    pub fn encode(&self, mode: CodecMode) -> Result<Vec<u8>, CodecError> {
        if mode.validates() {
            DepositAmountValidator::new().validate_isolated(self)?;
        }

        let size = self.serialized_size();
        let address_bytes = self.address.serialize();
        let expected_address_len = size - TYPE_DENOTATION_SIZE - UINT64_SIZE;
        if address_bytes.len() != expected_address_len {
            return Err(CodecError::EncodingError(format!(
                "{} address encoded to {} bytes, expected {}",
                self.address.kind().name(),
                address_bytes.len(),
                expected_address_len
            )));
        }

        let mut buf = Vec::with_capacity(size);
        buf.push(OutputType::SigLockedSingle.to_u8());
        buf.extend_from_slice(&address_bytes);
        buf.extend_from_slice(&self.amount.to_le_bytes());

        debug_assert_eq!(buf.len(), size);
        Ok(buf)
    }
}

/// Any output that can appear in a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Output {
    SigLockedSingle(SigLockedSingleOutput),
}

impl Output {
    /// The type byte of this output.
    pub fn output_type(&self) -> OutputType {
        match self {
            Output::SigLockedSingle(_) => OutputType::SigLockedSingle,
        }
    }

    /// The sig locked single output, if this is one.
    pub fn as_sig_locked_single(&self) -> Option<&SigLockedSingleOutput> {
        match self {
            Output::SigLockedSingle(o) => Some(o),
        }
    }

    /// Decode any registered output type from the front of `data`.
    pub fn decode(data: &[u8], mode: CodecMode) -> Result<(Self, usize), CodecError> {
        let tag = peek_u8(data, "output type")?;
        match OutputType::from_u8(tag).ok_or(CodecError::UnknownOutputType(tag))? {
            OutputType::SigLockedSingle => {
                let (output, read) = SigLockedSingleOutput::decode(data, mode)?;
                Ok((Output::SigLockedSingle(output), read))
            }
        }
    }

    /// Encode the output.
    pub fn encode(&self, mode: CodecMode) -> Result<Vec<u8>, CodecError> {
        match self {
            Output::SigLockedSingle(o) => o.encode(mode),
        }
    }
}

impl From<SigLockedSingleOutput> for Output {
    fn from(o: SigLockedSingleOutput) -> Self {
        Output::SigLockedSingle(o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{Ed25519Address, WotsAddress};
    use crate::constants::TOTAL_SUPPLY;
    use crate::error::ValidationError;

    fn ed25519_output(amount: u64) -> SigLockedSingleOutput {
        SigLockedSingleOutput::new(Ed25519Address::from_bytes([0x5a; 32]), amount)
    }

    fn wots_output(amount: u64) -> SigLockedSingleOutput {
        SigLockedSingleOutput::new(WotsAddress::from_bytes([0x7e; 49]), amount)
    }

    #[test]
    fn test_encode_layout() {
        let output = ed25519_output(0x0009_0807_0605_0403);
        let bytes = output.encode(CodecMode::Strict).unwrap();

        assert_eq!(bytes.len(), 42);
        assert_eq!(bytes[0], 0); // output type
        assert_eq!(bytes[1], 1); // address kind
        assert!(bytes[2..34].iter().all(|b| *b == 0x5a));
        assert_eq!(&bytes[34..], &[0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x00]);
    }

    #[test]
    fn test_exact_size_per_kind() {
        for output in [ed25519_output(1), wots_output(1)] {
            let bytes = output.encode(CodecMode::Strict).unwrap();
            assert_eq!(bytes.len(), 9 + output.address.serialized_size());
            assert_eq!(bytes.len(), output.serialized_size());
        }
    }

    #[test]
    fn test_binary_roundtrip() {
        for output in [ed25519_output(1_000_000), wots_output(TOTAL_SUPPLY)] {
            let bytes = output.encode(CodecMode::Strict).unwrap();
            let (decoded, read) = SigLockedSingleOutput::decode(&bytes, CodecMode::Strict).unwrap();
            assert_eq!(decoded, output);
            assert_eq!(read, bytes.len());
        }
    }

    #[test]
    fn test_decode_ignores_trailing_data() {
        let output = ed25519_output(42);
        let mut bytes = output.encode(CodecMode::Strict).unwrap();
        bytes.extend_from_slice(&[0xff; 5]);

        let (decoded, read) = SigLockedSingleOutput::decode(&bytes, CodecMode::Strict).unwrap();
        assert_eq!(decoded, output);
        assert_eq!(read, 42);
    }

    #[test]
    fn test_decode_rejects_wrong_type_byte() {
        let mut bytes = ed25519_output(1).encode(CodecMode::Strict).unwrap();
        bytes[0] = 1;

        let result = SigLockedSingleOutput::decode(&bytes, CodecMode::Strict);
        assert!(matches!(
            result,
            Err(CodecError::TypeMismatch {
                expected: 0,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_decode_too_short_never_panics() {
        let bytes = ed25519_output(1).encode(CodecMode::Strict).unwrap();

        for len in 0..bytes.len() {
            let strict = SigLockedSingleOutput::decode(&bytes[..len], CodecMode::Strict);
            assert!(matches!(strict, Err(CodecError::TooShort { .. })), "len {}", len);

            let lenient = SigLockedSingleOutput::decode(&bytes[..len], CodecMode::Lenient);
            assert!(lenient.unwrap_err().is_malformed(), "len {}", len);
        }
    }

    #[test]
    fn test_decode_missing_amount() {
        // Long enough for the minimum and the WOTS address, four bytes short of the amount.
        let bytes = wots_output(1).encode(CodecMode::Strict).unwrap();
        let result = SigLockedSingleOutput::decode(&bytes[..55], CodecMode::Strict);
        assert!(matches!(result, Err(CodecError::NotEnoughData(_))));
    }

    #[test]
    fn test_decode_unknown_address_kind() {
        let mut bytes = ed25519_output(1).encode(CodecMode::Strict).unwrap();
        bytes[1] = 0x09;

        let result = SigLockedSingleOutput::decode(&bytes, CodecMode::Strict);
        assert!(matches!(result, Err(CodecError::UnknownAddressKind(9))));
    }

    #[test]
    fn test_strict_rejects_zero_amount() {
        let output = ed25519_output(0);
        assert!(matches!(
            output.encode(CodecMode::Strict),
            Err(CodecError::Validation(ValidationError::AmountZero { .. }))
        ));

        let bytes = output.encode(CodecMode::Lenient).unwrap();
        assert!(matches!(
            SigLockedSingleOutput::decode(&bytes, CodecMode::Strict),
            Err(CodecError::Validation(ValidationError::AmountZero { .. }))
        ));

        let (decoded, _) = SigLockedSingleOutput::decode(&bytes, CodecMode::Lenient).unwrap();
        assert_eq!(decoded.amount, 0);
    }

    #[test]
    fn test_strict_supply_bound() {
        assert!(ed25519_output(TOTAL_SUPPLY).encode(CodecMode::Strict).is_ok());
        assert!(matches!(
            ed25519_output(TOTAL_SUPPLY + 1).encode(CodecMode::Strict),
            Err(CodecError::Validation(ValidationError::AmountExceedsSupply { .. }))
        ));
    }

    #[test]
    fn test_lenient_skips_type_check() {
        let mut bytes = ed25519_output(5).encode(CodecMode::Strict).unwrap();
        bytes[0] = 0x33;

        let (decoded, read) = SigLockedSingleOutput::decode(&bytes, CodecMode::Lenient).unwrap();
        assert_eq!(decoded.amount, 5);
        assert_eq!(read, 42);
    }

    #[test]
    fn test_output_selector() {
        let bytes = wots_output(9).encode(CodecMode::Strict).unwrap();
        let (output, read) = Output::decode(&bytes, CodecMode::Strict).unwrap();
        assert_eq!(output.output_type(), OutputType::SigLockedSingle);
        assert_eq!(read, 59);
        assert_eq!(output.encode(CodecMode::Strict).unwrap(), bytes);

        let mut unknown = bytes.clone();
        unknown[0] = 4;
        assert!(matches!(
            Output::decode(&unknown, CodecMode::Strict),
            Err(CodecError::UnknownOutputType(4))
        ));
        assert!(matches!(
            Output::decode(&[], CodecMode::Strict),
            Err(CodecError::NotEnoughData(_))
        ));
    }
}
