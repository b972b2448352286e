//! The symbol alphabet every engine operates over.
//!
//! Symbols are single bytes: the printable ASCII range plus carriage return
//! and line feed. NUL is reserved as a delimiter that is guaranteed never to
//! occur in valid input; the prefix-function engine splices it between the
//! pattern and the base and relies on that guarantee to keep a match from
//! spanning the boundary.

use crate::error::SearchError;

/// The reserved delimiter symbol. Never valid inside base or pattern input.
pub const DELIMITER: u8 = 0x00;

/// Number of distinct byte values; sizes the bad-character shift table.
pub const TABLE_SIZE: usize = 256;

/// Returns true if `byte` is a valid input symbol: printable ASCII
/// (`0x20..=0x7E`), carriage return or line feed.
pub fn contains(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7E | b'\r' | b'\n')
}

/// Checks that every byte of `input` belongs to the alphabet.
///
/// Fails on the first offending byte. The delimiter is outside the alphabet,
/// so this also guarantees no input can collide with the composite-sequence
/// boundary marker.
pub fn validate(input: &str) -> Result<(), SearchError> {
    for (offset, &byte) in input.as_bytes().iter().enumerate() {
        if !contains(byte) {
            return Err(SearchError::InvalidSymbol { byte, offset });
        }
    }
    Ok(())
}
