//! Prefix-function (Knuth–Morris–Pratt) search.
//!
//! Splices the pattern, the reserved delimiter and the base into one
//! composite sequence and computes its prefix function in a single pass.
//! Wherever the prefix length reaches the pattern length, a full occurrence
//! has just ended inside the base. O(n+m) time and memory.
//!
//! The delimiter never occurs in valid input (the alphabet excludes it), so
//! the prefix length can never exceed the pattern length and no match can
//! bleed across the pattern/base boundary. That makes this the one engine
//! immune both to rolling-hash false positives and to window-bound mistakes:
//! match ends fall out of the recurrence itself.

use std::fmt::{Display, Error, Formatter};

use crate::alphabet::DELIMITER;
use crate::engine::validate;
use crate::{Hit, MatchResult, SearchEngine, SearchError, SearchOptions};

/// Computes the prefix function of `s`: for each position, the length of the
/// longest proper prefix of `s` that is also a suffix ending there.
///
/// Standard single-pass recurrence: start from the previous position's
/// length, fall back through failure links while the next symbols disagree,
/// extend by one if they agree. The returned array is the implicit failure
/// automaton the search walks.
pub fn prefix_function(s: &[u8]) -> Vec<usize> {
    let mut prefix = vec![0; s.len()];
    for i in 1..s.len() {
        let mut j = prefix[i - 1];
        while j > 0 && s[i] != s[j] {
            j = prefix[j - 1];
        }
        if s[i] == s[j] {
            j += 1;
        }
        prefix[i] = j;
    }
    prefix
}

/// Failure-function search over a delimited composite sequence.
#[derive(Clone, Debug, Default)]
pub struct PrefixEngine {
    options: SearchOptions,
}

impl PrefixEngine {
    /// Creates an engine with the given result options.
    pub fn with_options(options: SearchOptions) -> Self {
        PrefixEngine { options }
    }
}

impl SearchEngine for PrefixEngine {
    fn search(&self, base: &str, pattern: &str) -> Result<MatchResult, SearchError> {
        validate(base, pattern)?;
        let m = pattern.len();

        // pattern + delimiter + base; the delimiter caps the prefix length at m.
        let mut composite = Vec::with_capacity(m + 1 + base.len());
        composite.extend_from_slice(pattern.as_bytes());
        composite.push(DELIMITER);
        composite.extend_from_slice(base.as_bytes());

        let prefix = prefix_function(&composite);
        debug_assert!(prefix.iter().all(|&j| j <= m));

        let mut hits = Vec::new();
        for (i, &j) in prefix.iter().enumerate() {
            if j == m {
                // An occurrence ends at composite index i; shift back past the
                // pattern-and-delimiter frame to the base-relative start.
                let start = i - 2 * m;
                trace!("prefix: hit at {start}");
                hits.push(Hit::new(start, m));
            }
        }
        debug!("prefix: {} hit(s) for pattern of length {m}", hits.len());

        Ok(MatchResult::new(base, pattern, hits, &self.options))
    }
}

impl Display for PrefixEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Prefix)")
    }
}
