//! Codec error types.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Failure to encode or decode a framed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The buffer ends before the frame does.
    #[error("frame truncated: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    /// The stored checksum does not match the recomputed one.
    #[error("checksum mismatch: computed {computed:08x}, stored {stored:08x}")]
    ChecksumMismatch { computed: u32, stored: u32 },

    /// The frame passed its checksum but the payload is not a legal value.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// The value cannot be serialized.
    #[error("unencodable value: {0}")]
    Unencodable(String),
}
