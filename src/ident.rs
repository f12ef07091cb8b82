//! 128-bit identifier codec.
//!
//! The downstream layer schema stores unit identifiers as two 64-bit integers
//! (`FirstLong`/`SecondLong`) using the Java UUID convention: the high half is
//! the big-endian accumulation of bytes 0-7 of the canonical 16-byte form,
//! the low half bytes 8-15. Both halves are rendered as unsigned decimal text.

use crate::error::{CopError, Result};
use uuid::Uuid;

/// High-order 64 bits of the identifier (bytes 0-7, big-endian).
pub fn most_significant_bits(id: &Uuid) -> u64 {
    id.as_bytes()[..8]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Low-order 64 bits of the identifier (bytes 8-15, big-endian).
pub fn least_significant_bits(id: &Uuid) -> u64 {
    id.as_bytes()[8..]
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Mint a fresh random (version 4) identifier.
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Parse a canonical hyphenated identifier.
///
/// Malformed text is an error, never coerced to a fresh identifier: a unit
/// whose identity cannot be recovered must fail the whole export.
pub fn parse(text: &str) -> Result<Uuid> {
    Uuid::parse_str(text).map_err(|_| CopError::MalformedIdentifier(text.to_string()))
}
