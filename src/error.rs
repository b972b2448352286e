//! Error taxonomy shared by every engine.

use thiserror::Error;

/// Reasons a search is rejected before any algorithm runs.
///
/// All four engines apply the same checks in the same order, so degenerate
/// inputs produce the same error regardless of the engine, keeping outputs
/// comparable across algorithms.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The pattern is empty; every window would trivially match.
    #[error("empty pattern")]
    EmptyPattern,

    /// The pattern is longer than the base; no window can contain it.
    #[error("pattern longer than base ({pattern} > {base})")]
    PatternTooLong {
        /// Pattern length in symbols.
        pattern: usize,
        /// Base length in symbols.
        base: usize,
    },

    /// An input byte falls outside the alphabet (printable ASCII, CR, LF).
    /// Shift tables and hash values are only defined for alphabet members.
    #[error("invalid symbol {byte:#04x} at offset {offset}")]
    InvalidSymbol {
        /// The offending byte value.
        byte: u8,
        /// Byte offset of the offender within its input sequence.
        offset: usize,
    },
}
