//! Bad-character-shift (Boyer–Moore) search.
//!
//! Compares pattern to window right-to-left and, on a mismatch, skips ahead
//! using a per-symbol shift table built from the pattern's rightmost
//! occurrences. Only the bad-character rule is implemented (no good-suffix
//! rule), so worst-case time degrades to O((n-m)·m) on pathological inputs,
//! while the average case is sublinear over a large alphabet. O(alphabet)
//! extra memory for the shift table.

use std::fmt::{Display, Error, Formatter};

use crate::alphabet::TABLE_SIZE;
use crate::engine::validate;
use crate::{Hit, MatchResult, SearchEngine, SearchError, SearchOptions};

/// How far the window may advance, keyed by the base symbol under the
/// window's final position.
///
/// Symbols absent from the pattern shift the full pattern length; symbols in
/// the pattern shift their distance from the final pattern position. The
/// final position itself is excluded so the shift is never zero. The table
/// is only sound for the last window position, so that is the one symbol
/// the search indexes it with, wherever the mismatch occurred.
fn bad_character_table(pattern: &[u8]) -> [usize; TABLE_SIZE] {
    let m = pattern.len();
    let mut table = [m; TABLE_SIZE];
    for (i, &byte) in pattern[..m - 1].iter().enumerate() {
        table[byte as usize] = m - 1 - i;
    }
    table
}

/// Right-to-left window comparison with bad-character skips.
#[derive(Clone, Debug, Default)]
pub struct BoyerMooreEngine {
    options: SearchOptions,
}

impl BoyerMooreEngine {
    /// Creates an engine with the given result options.
    pub fn with_options(options: SearchOptions) -> Self {
        BoyerMooreEngine { options }
    }
}

impl SearchEngine for BoyerMooreEngine {
    fn search(&self, base: &str, pattern: &str) -> Result<MatchResult, SearchError> {
        validate(base, pattern)?;
        let b = base.as_bytes();
        let p = pattern.as_bytes();
        let (n, m) = (b.len(), p.len());

        let table = bad_character_table(p);
        let mut hits = Vec::new();
        let mut shift = 0;
        while shift <= n - m {
            // Walk the pattern backwards from its last index.
            let mut i = m;
            while i > 0 && p[i - 1] == b[shift + i - 1] {
                i -= 1;
            }
            if i == 0 {
                trace!("boyer-moore: hit at {shift}");
                hits.push(Hit::new(shift, m));
                // Step one symbol so overlapping occurrences are all found.
                shift += 1;
            } else {
                // Skip by the symbol under the window's last position; the
                // guard keeps forward progress even if a table entry were 0.
                shift += table[b[shift + m - 1] as usize].max(1);
            }
        }
        debug!("boyer-moore: {} hit(s) for pattern of length {m}", hits.len());

        Ok(MatchResult::new(base, pattern, hits, &self.options))
    }
}

impl Display for BoyerMooreEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(BoyerMoore)")
    }
}
