//! Rolling-hash (Rabin–Karp) search.
//!
//! Hashes the pattern and the first m-length window of the base with a
//! polynomial hash, then slides the window one symbol at a time, updating the
//! hash in O(1) per step. O(n+m) time, O(1) extra memory.
//!
//! All hash arithmetic is modular: multiplier 257, modulus 1e9+7, with every
//! intermediate product staying inside `u64`. Sliding divides out one
//! multiplier factor via its modular inverse (the modulus is prime), so the
//! scheme is internally consistent and cannot overflow regardless of input
//! length.
//!
//! **Fast-and-approximate by default**: a window is reported as a hit the
//! moment its hash equals the pattern's hash, with no symbol-by-symbol
//! confirmation. Hash collisions therefore surface as false positives. That
//! is the documented contract of this engine; [`RabinKarpEngine::verify`]
//! opts into a separately named verified mode that re-checks each hash hit
//! before reporting it.

use std::fmt::{Display, Error, Formatter};

use crate::engine::validate;
use crate::{Hit, MatchResult, SearchEngine, SearchError, SearchOptions};

/// Polynomial hash multiplier: one position shifts one factor of 257.
pub const MULTIPLIER: u64 = 257;

/// Hash modulus, a prime below 2^30 so products of two residues fit in `u64`.
pub const MODULUS: u64 = 1_000_000_007;

/// `base^exp mod modulus` by square-and-multiply.
fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut acc = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    acc
}

/// Modular inverse of `value` by Fermat's little theorem; `modulus` is prime.
fn mod_inverse(value: u64, modulus: u64) -> u64 {
    mod_pow(value, modulus - 2, modulus)
}

/// Rolling-hash search over m-length windows.
#[derive(Clone, Debug, Default)]
pub struct RabinKarpEngine {
    options: SearchOptions,
    verify: bool,
}

impl RabinKarpEngine {
    /// Creates an engine with the given result options.
    pub fn with_options(options: SearchOptions) -> Self {
        RabinKarpEngine {
            options,
            verify: false,
        }
    }

    /// Enables symbol-by-symbol confirmation of every hash hit.
    ///
    /// With verification on, the hit set is exactly the naive scan's; without
    /// it, hash collisions pass through as false positives.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

impl SearchEngine for RabinKarpEngine {
    fn search(&self, base: &str, pattern: &str) -> Result<MatchResult, SearchError> {
        validate(base, pattern)?;
        let b = base.as_bytes();
        let p = pattern.as_bytes();
        let (n, m) = (b.len(), p.len());

        // hash(s) = sum of s[j] * MULTIPLIER^j, all mod MODULUS.
        let mut pattern_hash = 0u64;
        let mut window_hash = 0u64;
        let mut factor = 1u64; // MULTIPLIER^j while filling, MULTIPLIER^m after
        for j in 0..m {
            pattern_hash = (pattern_hash + p[j] as u64 * factor) % MODULUS;
            window_hash = (window_hash + b[j] as u64 * factor) % MODULUS;
            factor = factor * MULTIPLIER % MODULUS;
        }
        let inverse = mod_inverse(MULTIPLIER, MODULUS);
        debug!("rabin-karp: pattern hash {pattern_hash}, initial window hash {window_hash}");

        let mut hits = Vec::new();
        for i in 0..=n - m {
            if window_hash == pattern_hash {
                if !self.verify || &b[i..i + m] == p {
                    trace!("rabin-karp: hit at {i}");
                    hits.push(Hit::new(i, m));
                } else {
                    debug!("rabin-karp: hash collision at {i} discarded by verification");
                }
            }
            if i < n - m {
                // Drop the outgoing symbol, append the incoming one scaled by
                // MULTIPLIER^m, then divide one multiplier factor back out.
                window_hash = (window_hash + MODULUS - b[i] as u64) % MODULUS;
                window_hash = (window_hash + b[i + m] as u64 * factor) % MODULUS;
                window_hash = window_hash * inverse % MODULUS;
            }
        }
        debug!("rabin-karp: {} hit(s) for pattern of length {m}", hits.len());

        Ok(MatchResult::new(base, pattern, hits, &self.options))
    }
}

impl Display for RabinKarpEngine {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(
            f,
            "(RabinKarp|{})",
            if self.verify { "verified" } else { "unverified" }
        )
    }
}
