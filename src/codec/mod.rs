//! Generic object codec.
//!
//! Byte-level round-trip for any serde value:
//!
//! ```text
//! +------------------+
//! | Frame Length     | (u32 LE, includes this field and the checksum)
//! +------------------+
//! | Payload          | (JSON bytes)
//! +------------------+
//! | Checksum         | (u32 LE, CRC32 over length + payload)
//! +------------------+
//! ```
//!
//! `decode(encode(v)) == v` by structural equality; truncation and
//! corruption are detected, never silently accepted.

mod checksum;
mod errors;
mod frame;

pub use checksum::{compute_checksum, verify_checksum};
pub use errors::{CodecError, CodecResult};
pub use frame::{decode, encode};
