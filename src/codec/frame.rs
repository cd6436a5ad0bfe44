//! Frame encoding and decoding.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::checksum::compute_checksum;
use super::errors::{CodecError, CodecResult};

// Length field + checksum field.
const OVERHEAD: usize = 4 + 4;

/// Encodes a value into a checksummed frame.
///
/// # Errors
///
/// Returns [`CodecError::Unencodable`] when the value cannot be
/// serialized or the payload does not fit the u32 length field.
pub fn encode<T: Serialize>(value: &T) -> CodecResult<Vec<u8>> {
    let payload =
        serde_json::to_vec(value).map_err(|e| CodecError::Unencodable(e.to_string()))?;
    let frame_length = frame_length_of(payload.len())?;

    let mut frame = Vec::with_capacity(frame_length as usize);
    frame.extend_from_slice(&frame_length.to_le_bytes());
    frame.extend_from_slice(&payload);

    // Checksum covers length + payload.
    let checksum = compute_checksum(&frame);
    frame.extend_from_slice(&checksum.to_le_bytes());
    Ok(frame)
}

/// Total frame length for a payload of the given size.
///
/// The length field is u32; a payload too large for it is unencodable, not
/// silently truncated.
fn frame_length_of(payload_len: usize) -> CodecResult<u32> {
    payload_len
        .checked_add(OVERHEAD)
        .and_then(|total| u32::try_from(total).ok())
        .ok_or_else(|| {
            CodecError::Unencodable(format!(
                "payload of {} bytes exceeds the u32 frame limit",
                payload_len
            ))
        })
}

/// Decodes one frame, verifying its checksum.
///
/// Returns the value and the number of bytes consumed, so callers can walk
/// a buffer holding several frames.
///
/// # Errors
///
/// Returns [`CodecError::Truncated`] when the buffer ends before the frame
/// does, [`CodecError::ChecksumMismatch`] on corruption, and
/// [`CodecError::Malformed`] when the payload is not a legal value of `T`.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> CodecResult<(T, usize)> {
    if data.len() < OVERHEAD {
        return Err(CodecError::Truncated {
            expected: OVERHEAD,
            got: data.len(),
        });
    }

    let frame_length = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
    if frame_length < OVERHEAD {
        return Err(CodecError::Malformed(format!(
            "frame length {} is below the fixed overhead",
            frame_length
        )));
    }
    if data.len() < frame_length {
        return Err(CodecError::Truncated {
            expected: frame_length,
            got: data.len(),
        });
    }

    let checksum_offset = frame_length - 4;
    let stored = u32::from_le_bytes([
        data[checksum_offset],
        data[checksum_offset + 1],
        data[checksum_offset + 2],
        data[checksum_offset + 3],
    ]);
    let computed = compute_checksum(&data[..checksum_offset]);
    if computed != stored {
        return Err(CodecError::ChecksumMismatch { computed, stored });
    }

    let value = serde_json::from_slice(&data[4..checksum_offset])
        .map_err(|e| CodecError::Malformed(e.to_string()))?;
    Ok((value, frame_length))
}
