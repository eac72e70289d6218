//! Domain-specific assertion macros for quickdex harnesses.
//!
//! These add context-rich failure messages that show the query and the full
//! hit list whenever a match expectation is violated.

// ---------------------------------------------------------------------------
// Match assertions
// ---------------------------------------------------------------------------

/// Assert that a query against an index yields exactly these titles, in order.
///
/// ```rust
/// assert_hits!(index, "bmi", ["BMI Calculator"]);
/// ```
#[macro_export]
macro_rules! assert_hits {
    ($index:expr, $query:expr, [$($title:expr),* $(,)?]) => {{
        let index: &quickdex_core::SearchIndex = &$index;
        let query: &str = $query;
        let expected: Vec<&str> = vec![$($title),*];
        let actual: Vec<&str> = index
            .matches(query)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        if actual != expected {
            panic!(
                "assert_hits! failed for query {:?}:\n  expected: {:?}\n  actual:   {:?}",
                query, expected, actual
            );
        }
    }};
}

/// Assert that a query against an index yields nothing.
#[macro_export]
macro_rules! assert_no_hits {
    ($index:expr, $query:expr) => {{
        let index: &quickdex_core::SearchIndex = &$index;
        let query: &str = $query;
        let actual: Vec<&str> = index
            .matches(query)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        if !actual.is_empty() {
            panic!(
                "assert_no_hits! failed for query {:?}:\n  unexpected hits: {:?}",
                query, actual
            );
        }
    }};
}
