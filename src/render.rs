//! Plain-text rendering of a [`MatchResult`].
//!
//! Rendering lives outside the result type on purpose: a `MatchResult` is a
//! pure data object, and alternative renderers (structured records, colored
//! terminal output) can be layered on without touching the core. Nothing
//! here performs I/O.

use std::fmt::Write;

use crate::MatchResult;

/// Renders a result in the report format the CLI prints:
///
/// ```text
/// string = "abcXYZdef";
/// pattern = "XYZ", 1 hits produced (sorted)
/// hit (100%, pos 3 to 6): abc<XYZ>def
/// ```
///
/// Each hit shows up to `indent` symbols of context on either side, with an
/// `...` ellipsis marking a truncated side, the confidence percentage, and
/// the start / one-past-end offsets.
pub fn render(result: &MatchResult) -> String {
    let base = result.base();
    let indent = result.indent();

    let mut out = String::new();
    let _ = writeln!(out, "string = \"{base}\";");
    let _ = writeln!(
        out,
        "pattern = \"{}\", {} hits produced ({})",
        result.pattern(),
        result.hits().len(),
        if result.is_sorted() { "sorted" } else { "unsorted" }
    );

    for hit in result.hits() {
        let (start, end) = (hit.start, hit.end());
        let prefix = if start > indent {
            format!("...{}", &base[start - indent..start])
        } else {
            base[..start].to_string()
        };
        let suffix = if end + indent < base.len() {
            format!("{}...", &base[end..end + indent])
        } else {
            base[end..].to_string()
        };
        let _ = writeln!(
            out,
            "hit ({}%, pos {start} to {end}): {prefix}<{}>{suffix}",
            hit.accuracy * 100.0,
            &base[start..end],
        );
    }
    out
}
