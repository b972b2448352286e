//! Cross-engine properties: every engine must find the same occurrences on
//! the same input, fail the same way on the same bad input, and be
//! deterministic run to run.

use rand::RngExt;

use subfind::prelude::*;

fn all_engines() -> Vec<Box<dyn SearchEngine>> {
    vec![
        Box::new(NaiveEngine::default()),
        Box::new(RabinKarpEngine::default().verify(true)),
        Box::new(PrefixEngine::default()),
        Box::new(BoyerMooreEngine::default()),
    ]
}

/// Exact engines only: naive is the oracle the others must equal. The
/// unverified Rabin-Karp variant is checked separately as a superset.
fn exact_engines() -> Vec<Box<dyn SearchEngine>> {
    vec![
        Box::new(NaiveEngine::default()),
        Box::new(PrefixEngine::default()),
        Box::new(BoyerMooreEngine::default()),
    ]
}

fn assert_agreement(base: &str, pattern: &str) {
    let oracle = NaiveEngine::default().search(base, pattern).unwrap();
    for engine in exact_engines() {
        let result = engine.search(base, pattern).unwrap();
        assert_eq!(
            result.starts(),
            oracle.starts(),
            "{engine} disagrees with naive on base={base:?} pattern={pattern:?}"
        );
    }

    // Unverified hashing may only add hits, never drop one.
    let hashed = RabinKarpEngine::default().search(base, pattern).unwrap();
    let hashed_starts = hashed.starts();
    for start in oracle.starts() {
        assert!(
            hashed_starts.contains(&start),
            "unverified rabin-karp missed {start} on base={base:?} pattern={pattern:?}"
        );
    }
}

#[test]
fn agreement_on_fixed_inputs() {
    let base = "Sampletestsampletestingsample.";
    for pattern in ["amp", "ample", "test", "sample", "S", ".", "Sampletest"] {
        assert_agreement(base, pattern);
    }
}

#[test]
fn agreement_on_edge_windows() {
    assert_agreement("abab", "ab"); // hit at offset 0 and at the final window
    assert_agreement("aaaa", "aa"); // overlapping occurrences
    assert_agreement("abc", "abc"); // pattern fills the base
    assert_agreement("xyzabc", "abcxyz"); // no hit, boundary non-bleed shape
}

#[test]
fn agreement_on_random_inputs() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        // Two-symbol alphabet makes overlaps and near-misses common.
        let base: String = (0..rng.random_range(2..120))
            .map(|_| if rng.random_range(0..2) == 0 { 'a' } else { 'b' })
            .collect();
        let pattern: String = (0..rng.random_range(1..5))
            .map(|_| if rng.random_range(0..2) == 0 { 'a' } else { 'b' })
            .collect();
        if pattern.len() <= base.len() {
            assert_agreement(&base, &pattern);
        }
    }
}

#[test]
fn idempotence() {
    for engine in all_engines() {
        let first = engine.search("Sampletestsampletestingsample.", "amp").unwrap();
        let second = engine.search("Sampletestsampletestingsample.", "amp").unwrap();
        assert_eq!(first, second, "{engine} is not deterministic");
    }
}

#[test]
fn uniform_error_policy() {
    for engine in all_engines() {
        assert_eq!(
            engine.search("abc", "").unwrap_err(),
            SearchError::EmptyPattern,
            "{engine}"
        );
        assert_eq!(
            engine.search("ab", "abc").unwrap_err(),
            SearchError::PatternTooLong { pattern: 3, base: 2 },
            "{engine}"
        );
        assert_eq!(
            engine.search("a\u{0}c", "ac").unwrap_err(),
            SearchError::InvalidSymbol { byte: 0, offset: 1 },
            "{engine}"
        );
        assert_eq!(
            engine.search("abc", "b\u{1}").unwrap_err(),
            SearchError::InvalidSymbol { byte: 1, offset: 1 },
            "{engine}"
        );
    }
}

#[test]
fn hits_carry_pattern_length_and_full_accuracy() {
    for engine in all_engines() {
        let result = engine.search("abcXYZdefXYZ", "XYZ").unwrap();
        assert_eq!(result.hits().len(), 2, "{engine}");
        for hit in result.hits() {
            assert_eq!(hit.length, 3);
            assert_eq!(hit.accuracy, 1.0);
            assert!(hit.end() <= result.base().len());
        }
    }
}
