//! Fixed sizes and system-wide bounds.
//!
//! Every wire size is derived from the raw address lengths, so adding an
//! address kind means adding its length here and registering it in
//! [`AddressKind`](crate::address::AddressKind).

/// The total amount of tokens that will ever exist.
///
/// Every single deposit and every sum of deposits within one set of outputs
/// is bounded by this value.
pub const TOTAL_SUPPLY: u64 = 2_779_530_283_277_761;

/// Size of the single-byte type denotation preceding outputs and addresses.
pub const TYPE_DENOTATION_SIZE: usize = 1;

/// Size of an encoded `u64`.
pub const UINT64_SIZE: usize = 8;

/// Size of an encoded `u16` (sequence counts).
pub const UINT16_SIZE: usize = 2;

/// Raw length of a WOTS address.
pub const WOTS_ADDRESS_LENGTH: usize = 49;

/// Raw length of an Ed25519 address.
pub const ED25519_ADDRESS_LENGTH: usize = 32;

/// Serialized size of a WOTS address (kind byte + raw bytes).
pub const WOTS_ADDRESS_SERIALIZED_SIZE: usize = TYPE_DENOTATION_SIZE + WOTS_ADDRESS_LENGTH;

/// Serialized size of an Ed25519 address (kind byte + raw bytes).
pub const ED25519_ADDRESS_SERIALIZED_SIZE: usize = TYPE_DENOTATION_SIZE + ED25519_ADDRESS_LENGTH;

/// Size of a sig locked single output depositing onto a WOTS address.
pub const SIG_LOCKED_SINGLE_OUTPUT_WOTS_SIZE: usize =
    TYPE_DENOTATION_SIZE + WOTS_ADDRESS_SERIALIZED_SIZE + UINT64_SIZE;

/// Size of a sig locked single output depositing onto an Ed25519 address.
pub const SIG_LOCKED_SINGLE_OUTPUT_ED25519_SIZE: usize =
    TYPE_DENOTATION_SIZE + ED25519_ADDRESS_SERIALIZED_SIZE + UINT64_SIZE;

/// The smallest possible sig locked single output encoding.
pub const SIG_LOCKED_SINGLE_OUTPUT_MIN_SIZE: usize = SIG_LOCKED_SINGLE_OUTPUT_ED25519_SIZE;

/// Offset at which the address begins within a sig locked single output.
pub const SIG_LOCKED_SINGLE_OUTPUT_ADDRESS_OFFSET: usize = TYPE_DENOTATION_SIZE;

/// Minimum number of outputs in a framed output sequence.
pub const MIN_OUTPUTS_COUNT: usize = 1;

/// Maximum number of outputs in a framed output sequence.
pub const MAX_OUTPUTS_COUNT: usize = 127;
