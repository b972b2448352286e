//! Subfind is a library of exact substring search algorithms.
//!
//! It implements four classic algorithms — a naive scan, a Rabin–Karp
//! rolling-hash search, a prefix-function (Knuth–Morris–Pratt) search and a
//! Boyer–Moore bad-character search — behind one common interface, so that a
//! caller can run them over identical inputs and compare where they match and
//! what work they do.
//!
//! # Examples
//!
//! ```
//! use subfind::prelude::*;
//!
//! let engine = PrefixEngine::default();
//! let result = engine.search("abcXYZdef", "XYZ").unwrap();
//!
//! assert_eq!(result.hits().len(), 1);
//! assert_eq!(result.hits()[0].start, 3);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::fmt::Display;

use derive_builder::Builder;

pub use crate::error::SearchError;

pub mod alphabet;
pub mod engine;
mod error;
pub mod prelude;
pub mod render;

//------------------------------------------------------------------------------
// Hit

/// A single occurrence of the pattern inside the base sequence.
///
/// Immutable once created. `accuracy` is a confidence score in `[0, 1]`;
/// every algorithm in this crate performs exact matching and reports `1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// Start offset into the base sequence, `0 <= start <= n - length`.
    pub start: usize,
    /// Number of matched symbols (the pattern length for all engines here).
    pub length: usize,
    /// Fractional confidence in `[0, 1]`.
    pub accuracy: f32,
}

impl Hit {
    /// Creates an exact-match hit (accuracy 1.0).
    pub fn new(start: usize, length: usize) -> Self {
        Hit {
            start,
            length,
            accuracy: 1.0,
        }
    }

    /// Creates a hit with an explicit confidence score.
    pub fn with_accuracy(start: usize, length: usize, accuracy: f32) -> Self {
        Hit {
            start,
            length,
            accuracy,
        }
    }

    /// One-past-the-end offset of the matched range.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

//------------------------------------------------------------------------------
// Search options

/// Configuration shared by every engine.
///
/// Neither field affects *which* hits an engine finds, only the order they are
/// reported in and how a downstream renderer frames them.
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(default)]
pub struct SearchOptions {
    /// Reorder hits by descending accuracy at construction time (stable, so
    /// equal-accuracy hits keep their discovery order). When unset, hits stay
    /// in discovery order, which is strictly increasing start offset.
    pub sort_by_accuracy: bool,
    /// Number of context symbols a renderer shows on each side of a hit.
    pub indent: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            sort_by_accuracy: true,
            indent: 5,
        }
    }
}

//------------------------------------------------------------------------------
// Match result

/// The outcome of running one engine over one base/pattern pair.
///
/// Owns copies of both input sequences plus the hit list; read-only after
/// construction. The base and pattern are kept so a renderer can show context
/// around each hit without re-threading the inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    base: String,
    pattern: String,
    hits: Vec<Hit>,
    sorted: bool,
    indent: usize,
}

impl MatchResult {
    /// Builds a result from the hits an engine discovered.
    ///
    /// If `options.sort_by_accuracy` is set, the hits are stable-sorted by
    /// descending accuracy; otherwise they are left in discovery order.
    ///
    /// # Panics
    ///
    /// Panics if any hit's `[start, start + length)` range falls outside the
    /// base. Renderers byte-slice the base by these offsets, so the invariant
    /// is enforced here, at construction, in every build profile.
    pub fn new(base: &str, pattern: &str, mut hits: Vec<Hit>, options: &SearchOptions) -> Self {
        assert!(
            hits.iter().all(|h| h.end() <= base.len()),
            "hit range out of base bounds"
        );
        if options.sort_by_accuracy {
            hits.sort_by(|a, b| b.accuracy.total_cmp(&a.accuracy));
        }
        MatchResult {
            base: base.to_string(),
            pattern: pattern.to_string(),
            hits,
            sorted: options.sort_by_accuracy,
            indent: options.indent,
        }
    }

    /// The base (haystack) sequence this result was produced from.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The pattern (needle) sequence this result was produced from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The hits, in accuracy order if [`Self::is_sorted`], else discovery order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Whether the hit list was reordered by descending accuracy.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Context width a renderer should use around each hit.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Start offsets of all hits, in the order they are stored.
    pub fn starts(&self) -> Vec<usize> {
        self.hits.iter().map(|h| h.start).collect()
    }
}

//------------------------------------------------------------------------------
// Engine trait

/// A search engine locates every occurrence of a pattern inside a base
/// sequence.
///
/// Engines are pure: the same inputs always produce the same result, and a
/// single engine value may be shared across threads.
pub trait SearchEngine: Display {
    /// Finds all occurrences of `pattern` in `base`.
    ///
    /// Inputs are validated identically by every engine before any
    /// preprocessing: the pattern must be non-empty and no longer than the
    /// base, and both sequences must stay inside the crate's
    /// [alphabet](crate::alphabet).
    fn search(&self, base: &str, pattern: &str) -> Result<MatchResult, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hits() -> Vec<Hit> {
        vec![
            Hit::with_accuracy(0, 2, 0.5),
            Hit::with_accuracy(3, 2, 1.0),
            Hit::with_accuracy(6, 2, 0.5),
            Hit::with_accuracy(9, 2, 1.0),
        ]
    }

    #[test]
    fn sort_by_accuracy_is_stable() {
        let options = SearchOptionsBuilder::default()
            .sort_by_accuracy(true)
            .build()
            .unwrap();
        let result = MatchResult::new("abcdefghijk", "xy", sample_hits(), &options);

        // Descending accuracy, equal-accuracy hits keep their input order.
        assert_eq!(result.starts(), vec![3, 9, 0, 6]);
        assert!(result.is_sorted());
    }

    #[test]
    fn unsorted_keeps_discovery_order() {
        let options = SearchOptionsBuilder::default()
            .sort_by_accuracy(false)
            .build()
            .unwrap();
        let result = MatchResult::new("abcdefghijk", "xy", sample_hits(), &options);

        assert_eq!(result.starts(), vec![0, 3, 6, 9]);
        assert!(!result.is_sorted());
    }

    #[test]
    fn default_options() {
        let options = SearchOptions::default();
        assert!(options.sort_by_accuracy);
        assert_eq!(options.indent, 5);
    }

    #[test]
    #[should_panic(expected = "hit range out of base bounds")]
    fn out_of_bounds_hit_is_rejected() {
        let _ = MatchResult::new("abc", "ab", vec![Hit::new(2, 2)], &SearchOptions::default());
    }

    #[test]
    fn hit_end() {
        assert_eq!(Hit::new(3, 4).end(), 7);
        assert_eq!(Hit::new(3, 4).accuracy, 1.0);
    }
}
