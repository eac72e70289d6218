//! Static search-index payloads used across harnesses.
//!
//! Each fixture is the raw body a site could actually serve at
//! `search-index.json`, including the malformed shapes the loader has to
//! tolerate without erroring.

/// A well-formed index: every entry valid, categories and aliases present.
pub const INDEX_WELL_FORMED: &str = r#"[
  {"title": "BMI Calculator", "url": "/bmi", "category": "Health", "aliases": ["body mass index", "weight"]},
  {"title": "Loan Calculator", "url": "/loan", "category": "Finance", "aliases": ["borrow", "repayment"]},
  {"title": "Mortgage Calculator", "url": "/mortgage", "category": "Finance", "aliases": ["home loan"]},
  {"title": "Percentage Calculator", "url": "/percentage", "category": "Math", "aliases": ["percent", "%"]},
  {"title": "Age Calculator", "url": "/age", "category": "Date & Time", "aliases": ["birthday", "how old"]}
]"#;

/// An index mixing valid entries with every malformed shape validation must
/// drop or salvage. Survivors, in order: Tip Calculator, Fuel Cost
/// Calculator (url trimmed, aliases coerced to petrol/95/true/mpg), Density
/// Calculator (non-array aliases ignored).
pub const INDEX_MIXED: &str = r#"[
  {"title": "Tip Calculator", "url": "/tip", "category": "Finance"},
  {"title": "", "url": "/empty-title"},
  {"url": "/no-title"},
  {"title": "No URL Here"},
  {"title": "   ", "url": "/blank-title"},
  {"title": 42, "url": "/numeric-title"},
  "just a string",
  17,
  null,
  {"title": "Fuel Cost Calculator", "url": "  /fuel  ", "category": null,
   "aliases": ["petrol", null, 95, true, {"nested": 1}, ["list"], "", "  mpg  "]},
  {"title": "Density Calculator", "url": "/density", "aliases": "not-an-array"}
]"#;

/// Valid JSON that is not an array. The whole document must be rejected.
pub const INDEX_NOT_AN_ARRAY: &str = r#"{"entries": []}"#;

/// Not JSON at all; what a misconfigured host serves instead of the index.
pub const INDEX_GARBAGE: &str = "<!DOCTYPE html><html><body>502 Bad Gateway</body></html>";

/// An empty but valid index.
pub const INDEX_EMPTY: &str = "[]";
