//! Case-insensitive search matching shared by all list panels.

/// A normalized search query.
///
/// The query is lowercased once at construction so that each field check is
/// a single `contains` on the lowercased field. An empty query matches every
/// field.
///
/// # Example
///
/// ```
/// use globe_model::SearchQuery;
///
/// let query = SearchQuery::new("PaR");
/// assert!(query.matches("Paris"));
/// assert!(!query.matches("Berlin"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalize raw search text.
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// Check whether `field` contains the query, ignoring case.
    pub fn matches(&self, field: &str) -> bool {
        self.needle.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// Check an optional field. An absent field never matches.
    pub fn matches_opt(&self, field: Option<&str>) -> bool {
        field.is_some_and(|f| self.matches(f))
    }
}
