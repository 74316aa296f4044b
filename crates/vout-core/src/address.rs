//! Deposit addresses.
//!
//! An address is a closed set of kinds. [`AddressKind`] is the single
//! registry mapping a kind byte to its raw length and serialized size; both
//! the binary and the JSON decoders dispatch through
//! [`AddressKind::from_u8`].
//!
//! Binary form: `kind byte || raw bytes`. JSON form:
//! `{"type": <kind>, "address": "<hex raw bytes>"}`.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::codec::{check_min_length, read_array, read_u8, CodecMode};
use crate::constants::{ED25519_ADDRESS_LENGTH, TYPE_DENOTATION_SIZE, WOTS_ADDRESS_LENGTH};
use crate::crypto::Ed25519PublicKey;
use crate::error::CodecError;

/// The kind of address, determining its raw length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AddressKind {
    /// Winternitz one-time signature address.
    Wots = 0,
    /// Ed25519 address (hash of a public key).
    Ed25519 = 1,
}

impl AddressKind {
    /// Convert to u8 for serialization.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Resolve a kind byte. `None` for unregistered kinds.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Wots),
            1 => Some(Self::Ed25519),
            _ => None,
        }
    }

    /// Length of the raw address bytes.
    pub fn raw_length(self) -> usize {
        match self {
            Self::Wots => WOTS_ADDRESS_LENGTH,
            Self::Ed25519 => ED25519_ADDRESS_LENGTH,
        }
    }

    /// Length of the binary encoding (kind byte + raw bytes).
    pub fn serialized_size(self) -> usize {
        TYPE_DENOTATION_SIZE + self.raw_length()
    }

    /// Lowercase name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wots => "wots",
            Self::Ed25519 => "ed25519",
        }
    }
}

/// A 49-byte WOTS address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WotsAddress(pub [u8; WOTS_ADDRESS_LENGTH]);

impl WotsAddress {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; WOTS_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; WOTS_ADDRESS_LENGTH] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for WotsAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WotsAddress({})", &self.to_hex()[..16])
    }
}

impl TryFrom<&[u8]> for WotsAddress {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; WOTS_ADDRESS_LENGTH] = slice.try_into()?;
        Ok(Self(arr))
    }
}

/// A 32-byte Ed25519 address: the BLAKE3-256 digest of a public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519Address(pub [u8; ED25519_ADDRESS_LENGTH]);

impl Ed25519Address {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; ED25519_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Derive the address owned by a public key.
    pub fn from_public_key(public_key: &Ed25519PublicKey) -> Self {
        Self(public_key.address_digest())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ED25519_ADDRESS_LENGTH] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Ed25519Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Address({})", &self.to_hex()[..16])
    }
}

impl TryFrom<&[u8]> for Ed25519Address {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; ED25519_ADDRESS_LENGTH] = slice.try_into()?;
        Ok(Self(arr))
    }
}

/// A deposit address of any registered kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    Wots(WotsAddress),
    Ed25519(Ed25519Address),
}

/// JSON shape shared by every address kind.
#[derive(Debug, Deserialize)]
struct JsonAddress {
    #[serde(rename = "type")]
    kind: u8,
    address: String,
}

impl Address {
    /// The kind of this address.
    pub fn kind(&self) -> AddressKind {
        match self {
            Address::Wots(_) => AddressKind::Wots,
            Address::Ed25519(_) => AddressKind::Ed25519,
        }
    }

    /// The raw address bytes, without kind byte or length prefix.
    ///
    /// This is the canonical form used for uniqueness checks. The match is
    /// exhaustive, so every registered kind has one.
    pub fn raw_bytes(&self) -> &[u8] {
        match self {
            Address::Wots(a) => &a.0,
            Address::Ed25519(a) => &a.0,
        }
    }

    /// Size of the binary encoding.
    pub fn serialized_size(&self) -> usize {
        self.kind().serialized_size()
    }

    /// Encode to `kind byte || raw bytes`.
    pub fn serialize(&self) -> Vec<u8> {
        let raw = self.raw_bytes();
        let mut buf = Vec::with_capacity(TYPE_DENOTATION_SIZE + raw.len());
        buf.push(self.kind().to_u8());
        buf.extend_from_slice(raw);
        buf
    }

    /// Decode an address from the front of `data`.
    ///
    /// Returns the address and the number of bytes consumed.
    pub fn decode(data: &[u8], mode: CodecMode) -> Result<(Self, usize), CodecError> {
        let mut buf = data;
        let tag = read_u8(&mut buf, "address kind")?;
        let kind = AddressKind::from_u8(tag).ok_or(CodecError::UnknownAddressKind(tag))?;

        if mode.validates() {
            check_min_length(kind.serialized_size(), data)?;
        }

        let address = match kind {
            AddressKind::Wots => {
                Address::Wots(WotsAddress(read_array(&mut buf, "wots address")?))
            }
            AddressKind::Ed25519 => {
                Address::Ed25519(Ed25519Address(read_array(&mut buf, "ed25519 address")?))
            }
        };

        Ok((address, kind.serialized_size()))
    }

    /// Encode to the address JSON document.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "type": self.kind().to_u8(),
            "address": hex::encode(self.raw_bytes()),
        })
    }

    /// Decode from the address JSON document.
    pub fn from_json(value: &Value) -> Result<Self, CodecError> {
        let doc = JsonAddress::deserialize(value)?;
        let kind = AddressKind::from_u8(doc.kind).ok_or(CodecError::UnknownAddressKind(doc.kind))?;

        let raw = hex::decode(&doc.address)
            .map_err(|e| CodecError::InvalidJson(format!("{} address hex: {}", kind.name(), e)))?;
        if raw.len() != kind.raw_length() {
            return Err(CodecError::InvalidJson(format!(
                "{} address must be {} bytes, got {}",
                kind.name(),
                kind.raw_length(),
                raw.len()
            )));
        }

        // Length checked above.
        let address = match kind {
            AddressKind::Wots => WotsAddress::try_from(raw.as_slice())
                .map(Address::Wots)
                .map_err(|e| CodecError::InvalidJson(e.to_string()))?,
            AddressKind::Ed25519 => Ed25519Address::try_from(raw.as_slice())
                .map(Address::Ed25519)
                .map_err(|e| CodecError::InvalidJson(e.to_string()))?,
        };
        Ok(address)
    }
}

impl From<WotsAddress> for Address {
    fn from(a: WotsAddress) -> Self {
        Address::Wots(a)
    }
}

impl From<Ed25519Address> for Address {
    fn from(a: Ed25519Address) -> Self {
        Address::Ed25519(a)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind().name(), hex::encode(self.raw_bytes()))
    }
}
