//! Commonly used types, re-exported for one-line imports.

pub use crate::engine::{BoyerMooreEngine, NaiveEngine, PrefixEngine, RabinKarpEngine};
pub use crate::{Hit, MatchResult, SearchEngine, SearchError, SearchOptions, SearchOptionsBuilder};
