//! Query and blob normalization.
//!
//! Both sides of the matcher go through the same function: entry blobs at
//! index build time, query text at match time. Matching is then plain
//! substring containment, so every equivalence the site cares about
//! (case, punctuation, `&` vs "and", whitespace runs) has to be erased here
//! and only here.

use std::sync::LazyLock;

use regex::Regex;

/// Any run of characters that is neither a letter nor a digit, Unicode-aware.
static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("non-alphanumeric pattern is valid"));

/// Canonicalize text for matching.
///
/// Lowercases, trims, spells `&` out as " and ", collapses every run of
/// non-alphanumeric characters to a single space, and trims again. The result
/// is stable: `normalize(normalize(s)) == normalize(s)`.
///
/// A string with no letters or digits at all normalizes to `""`.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let spelled = lowered.trim().replace('&', " and ");
    NON_ALNUM_RUN.replace_all(&spelled, " ").trim().to_string()
}
