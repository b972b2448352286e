//! Naive window-by-window scan.
//!
//! The reference engine: it compares every m-length window of the base to the
//! pattern, element by element. O((n-m)·m) time, O(1) extra memory. Its
//! output is the correctness baseline the other engines are tested against.

use std::fmt::{Display, Error, Formatter};

use crate::engine::validate;
use crate::{Hit, MatchResult, SearchEngine, SearchError, SearchOptions};

/// Brute-force scan over every candidate window.
#[derive(Clone, Debug, Default)]
pub struct NaiveEngine {
    options: SearchOptions,
}

impl NaiveEngine {
    /// Creates an engine with the given result options.
    pub fn with_options(options: SearchOptions) -> Self {
        NaiveEngine { options }
    }
}

impl SearchEngine for NaiveEngine {
    fn search(&self, base: &str, pattern: &str) -> Result<MatchResult, SearchError> {
        validate(base, pattern)?;
        let b = base.as_bytes();
        let p = pattern.as_bytes();
        let (n, m) = (b.len(), p.len());

        let mut hits = Vec::new();
        // Every start offset up to and including n - m is a candidate.
        for i in 0..=n - m {
            if &b[i..i + m] == p {
                trace!("naive: hit at {i}");
                hits.push(Hit::new(i, m));
            }
        }
        debug!("naive: {} hit(s) for pattern of length {m}", hits.len());

        Ok(MatchResult::new(base, pattern, hits, &self.options))
    }
}

impl Display for NaiveEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Naive)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match() {
        let result = NaiveEngine::default().search("abcabcabc", "zzz").unwrap();
        assert!(result.hits().is_empty());
    }

    #[test]
    fn single_exact_match() {
        let result = NaiveEngine::default().search("abcXYZdef", "XYZ").unwrap();
        assert_eq!(result.hits(), &[Hit::new(3, 3)]);
    }

    #[test]
    fn overlapping_matches() {
        let result = NaiveEngine::default().search("aaaa", "aa").unwrap();
        assert_eq!(result.starts(), vec![0, 1, 2]);
    }

    #[test]
    fn match_at_final_window() {
        // The last valid start offset (n - m) must be tested.
        let result = NaiveEngine::default().search("xxab", "ab").unwrap();
        assert_eq!(result.starts(), vec![2]);
    }

    #[test]
    fn pattern_equal_to_base() {
        let result = NaiveEngine::default().search("abc", "abc").unwrap();
        assert_eq!(result.starts(), vec![0]);
    }

    #[test]
    fn degenerate_inputs_fail_fast() {
        let engine = NaiveEngine::default();
        assert_eq!(engine.search("abc", "").unwrap_err(), SearchError::EmptyPattern);
        assert_eq!(
            engine.search("ab", "abc").unwrap_err(),
            SearchError::PatternTooLong { pattern: 3, base: 2 }
        );
    }
}
