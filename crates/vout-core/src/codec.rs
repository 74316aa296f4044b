//! Binary codec primitives shared by outputs and addresses.
//!
//! All multi-byte integers are little-endian. Every read is bounds-checked:
//! lenient mode skips the up-front length and tag checks but never reads past
//! the end of the input.

use bytes::Buf;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Whether a codec call also enforces invariants inline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecMode {
    /// Check minimum lengths, type tags and run the amount validator.
    #[default]
    Strict,
    /// Only decode structure; no invariant checks.
    Lenient,
}

impl CodecMode {
    /// Whether this mode runs validation.
    pub fn validates(self) -> bool {
        self == CodecMode::Strict
    }
}

/// Fail if `data` is shorter than `required` bytes.
pub fn check_min_length(required: usize, data: &[u8]) -> Result<(), CodecError> {
    if data.len() < required {
        return Err(CodecError::TooShort {
            required,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Fail if the first byte of `data` is not `expected`.
pub fn check_type_byte(data: &[u8], expected: u8) -> Result<(), CodecError> {
    let actual = peek_u8(data, "type denotation")?;
    if actual != expected {
        return Err(CodecError::TypeMismatch { expected, actual });
    }
    Ok(())
}

/// Read the first byte without consuming it.
pub fn peek_u8(data: &[u8], what: &'static str) -> Result<u8, CodecError> {
    data.first().copied().ok_or(CodecError::NotEnoughData(what))
}

/// Consume one byte.
pub fn read_u8(buf: &mut &[u8], what: &'static str) -> Result<u8, CodecError> {
    if buf.remaining() < 1 {
        return Err(CodecError::NotEnoughData(what));
    }
    Ok(buf.get_u8())
}

/// Consume a little-endian `u16`.
pub fn read_u16_le(buf: &mut &[u8], what: &'static str) -> Result<u16, CodecError> {
    if buf.remaining() < 2 {
        return Err(CodecError::NotEnoughData(what));
    }
    Ok(buf.get_u16_le())
}

/// Consume a little-endian `u64`.
pub fn read_u64_le(buf: &mut &[u8], what: &'static str) -> Result<u64, CodecError> {
    if buf.remaining() < 8 {
        return Err(CodecError::NotEnoughData(what));
    }
    Ok(buf.get_u64_le())
}

/// Consume exactly `N` bytes.
pub fn read_array<const N: usize>(
    buf: &mut &[u8],
    what: &'static str,
) -> Result<[u8; N], CodecError> {
    if buf.remaining() < N {
        return Err(CodecError::NotEnoughData(what));
    }
    let mut arr = [0u8; N];
    buf.copy_to_slice(&mut arr);
    Ok(arr)
}
