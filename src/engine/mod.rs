//! The four search engines.
//!
//! Each engine is an independent peer: it consumes a base and a pattern,
//! validates them the same way as every other engine, and produces a
//! [`MatchResult`](crate::MatchResult). No engine depends on another's
//! output, and the discovery order is strictly increasing start offset for
//! all of them.
//!
//! | Engine | Time | Extra memory |
//! |---|---|---|
//! | [`NaiveEngine`] | O((n-m)·m) | O(1) |
//! | [`RabinKarpEngine`] | O(n+m) | O(1) |
//! | [`PrefixEngine`] | O(n+m) | O(n+m) |
//! | [`BoyerMooreEngine`] | O((n-m)·m) worst, sublinear average | O(alphabet) |
//!
//! The naive scan is the oracle: every other engine must report the same set
//! of start offsets, except the unverified Rabin–Karp search, whose set may
//! additionally contain hash-collision false positives.

pub mod boyer_moore;
pub mod naive;
pub mod prefix;
pub mod rabin_karp;

pub use boyer_moore::BoyerMooreEngine;
pub use naive::NaiveEngine;
pub use prefix::PrefixEngine;
pub use rabin_karp::RabinKarpEngine;

use crate::alphabet;
use crate::error::SearchError;

/// Validates a base/pattern pair on behalf of an engine.
///
/// Checks, in order: non-empty pattern, pattern no longer than base, alphabet
/// membership of base then pattern. Every engine calls this before touching
/// its own preprocessing so the error policy is uniform across algorithms.
pub(crate) fn validate(base: &str, pattern: &str) -> Result<(), SearchError> {
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }
    if pattern.len() > base.len() {
        return Err(SearchError::PatternTooLong {
            pattern: pattern.len(),
            base: base.len(),
        });
    }
    alphabet::validate(base)?;
    alphabet::validate(pattern)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_pattern() {
        assert_eq!(validate("abc", ""), Err(SearchError::EmptyPattern));
    }

    #[test]
    fn rejects_long_pattern() {
        assert_eq!(
            validate("ab", "abc"),
            Err(SearchError::PatternTooLong { pattern: 3, base: 2 })
        );
    }

    #[test]
    fn rejects_alphabet_violations() {
        assert!(matches!(
            validate("ab\u{1}cd", "ab"),
            Err(SearchError::InvalidSymbol { byte: 1, offset: 2 })
        ));
        assert!(matches!(
            validate("abcd", "b\u{7f}"),
            Err(SearchError::InvalidSymbol { byte: 0x7F, offset: 1 })
        ));
    }

    #[test]
    fn accepts_equal_lengths() {
        assert!(validate("abc", "abc").is_ok());
    }
}
