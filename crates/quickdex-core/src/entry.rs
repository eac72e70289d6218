//! The catalog entry model and per-entry payload validation.

use serde_json::Value;

use crate::normalize::normalize;

/// One page of the site catalog.
///
/// `title` and `url` are always non-empty and trimmed; construction from a
/// raw payload rejects anything else. The search blob is computed once here
/// and never touched again, so matching a keystroke costs one substring scan
/// per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub title: String,
    pub url: String,
    pub category: Option<String>,
    pub aliases: Vec<String>,
    blob: String,
}

impl SearchEntry {
    /// Aliases considered per entry; raw elements past this many are ignored
    /// before any coercion happens.
    pub const MAX_ALIASES: usize = 10;

    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        category: Option<String>,
        aliases: Vec<String>,
    ) -> Self {
        let title = title.into();
        let url = url.into();
        let mut searchable = title.clone();
        if let Some(category) = &category {
            searchable.push(' ');
            searchable.push_str(category);
        }
        for alias in &aliases {
            searchable.push(' ');
            searchable.push_str(alias);
        }
        let blob = normalize(&searchable);
        Self {
            title,
            url,
            category,
            aliases,
            blob,
        }
    }

    /// The normalized text this entry is matched against: title, category,
    /// and aliases joined and canonicalized.
    pub fn search_blob(&self) -> &str {
        &self.blob
    }

    /// Build an entry from one element of the raw index array.
    ///
    /// Returns `None` when the element is unusable: not an object, or missing
    /// a non-empty string `title` or `url`. Everything else is salvaged:
    /// `category` only counts if it is a non-empty string, and aliases go
    /// through [`coerce_alias`] one by one.
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let title = object.get("title")?.as_str()?.trim();
        let url = object.get("url")?.as_str()?.trim();
        if title.is_empty() || url.is_empty() {
            return None;
        }
        let category = object
            .get("category")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .map(String::from);
        let aliases = object
            .get("aliases")
            .and_then(Value::as_array)
            .map(|raw| {
                raw.iter()
                    .take(Self::MAX_ALIASES)
                    .filter_map(coerce_alias)
                    .collect()
            })
            .unwrap_or_default();
        Some(Self::new(title, url, category, aliases))
    }
}

/// Coerce one raw alias element to text.
///
/// Strings are trimmed, numbers and booleans are stringified; `null`, arrays,
/// and objects are dropped, as is anything that ends up empty.
fn coerce_alias(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
