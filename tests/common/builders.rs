//! Test builders: ergonomic constructors for entries and whole indexes.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use fake::faker::company::en::CompanyName;
use fake::Fake;
use quickdex_core::{SearchEntry, SearchIndex};

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchEntry`] test fixtures.
///
/// The URL defaults to a slug derived from the title, so most call sites only
/// name what the test cares about:
///
/// ```rust
/// let entry = EntryBuilder::new("BMI Calculator")
///     .category("Health")
///     .alias("body mass index")
///     .build();
/// assert_eq!(entry.url, "/bmi-calculator");
/// ```
pub struct EntryBuilder {
    title: String,
    url: Option<String>,
    category: Option<String>,
    aliases: Vec<String>,
}

impl EntryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            category: None,
            aliases: Vec::new(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn build(self) -> SearchEntry {
        let url = self
            .url
            .unwrap_or_else(|| format!("/{}", self.title.to_lowercase().replace(' ', "-")));
        SearchEntry::new(self.title, url, self.category, self.aliases)
    }
}

// ---------------------------------------------------------------------------
// Index helpers
// ---------------------------------------------------------------------------

/// The five-page catalog most matcher tests run against.
pub fn calculator_index() -> SearchIndex {
    SearchIndex::from_entries(vec![
        EntryBuilder::new("BMI Calculator")
            .url("/bmi")
            .category("Health")
            .alias("body mass index")
            .alias("weight")
            .build(),
        EntryBuilder::new("Loan Calculator")
            .url("/loan")
            .category("Finance")
            .alias("borrow")
            .build(),
        EntryBuilder::new("Mortgage Calculator")
            .url("/mortgage")
            .category("Finance")
            .alias("home loan")
            .build(),
        EntryBuilder::new("Percentage Calculator")
            .url("/percentage")
            .category("Math")
            .alias("percent")
            .build(),
        EntryBuilder::new("Age Calculator")
            .url("/age")
            .category("Date & Time")
            .alias("birthday")
            .build(),
    ])
}

/// Build an index of `n` entries, every title containing "Calculator" so a
/// broad query overflows the result cap. Titles are numbered, so index order
/// is checkable from the outside.
pub fn big_index(n: usize) -> SearchIndex {
    let entries = (0..n)
        .map(|i| {
            let company: String = CompanyName().fake();
            EntryBuilder::new(format!("{} Calculator {}", company, i))
                .url(format!("/calc/{i}"))
                .category("Generated")
                .build()
        })
        .collect();
    SearchIndex::from_entries(entries)
}
