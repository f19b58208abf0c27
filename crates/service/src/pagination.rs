//! List query utilities for the service layer
//!
//! Raw `query/queryType/position/size` parameters arrive as [`ListParams`];
//! [`ListParams::resolve`] applies defaults and the size ceiling and yields the
//! [`ListQuery`] every `ServiceProvider::list*` call receives.

use serde::Deserialize;

/// Page size used when the caller omits `size`.
pub const DEFAULT_SIZE: u32 = 25;
/// Upper bound for `size`.
pub const MAX_SIZE: u32 = 100;

/// Raw list parameters as they appear on the query string.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub query_type: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
}

/// Page size settings, normally taken from `[listing]` in the config.
#[derive(Clone, Copy, Debug)]
pub struct ListLimits {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for ListLimits {
    fn default() -> Self { Self { default_size: DEFAULT_SIZE, max_size: MAX_SIZE } }
}

/// Normalized filter and offset/limit window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Opaque filter text; blank matches everything.
    pub query: String,
    /// Opaque hint about how to read `query`; backends may ignore it.
    pub query_type: String,
    pub position: u64,
    pub size: u64,
}

impl ListParams {
    pub fn resolve(self, limits: ListLimits) -> ListQuery {
        let size = self.size.unwrap_or(limits.default_size).min(limits.max_size);
        ListQuery {
            query: self.query.unwrap_or_default(),
            query_type: self.query_type.unwrap_or_default(),
            position: u64::from(self.position.unwrap_or(0)),
            size: u64::from(size),
        }
    }
}

impl ListQuery {
    pub fn new(query: impl Into<String>, query_type: impl Into<String>, position: u64, size: u64) -> Self {
        Self { query: query.into(), query_type: query_type.into(), position, size }
    }

    /// Case-insensitive substring match against an entity's searchable text.
    pub fn matches(&self, haystack: &str) -> bool {
        let needle = self.query.trim();
        needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Apply the offset/limit window to an already ordered sequence.
    pub fn window<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skip = usize::try_from(self.position).unwrap_or(usize::MAX);
        let take = usize::try_from(self.size).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(take).collect()
    }
}

impl Default for ListQuery {
    fn default() -> Self { ListParams::default().resolve(ListLimits::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_defaults() {
        let q = ListParams::default().resolve(ListLimits::default());
        assert_eq!(q.query, "");
        assert_eq!(q.query_type, "");
        assert_eq!(q.position, 0);
        assert_eq!(q.size, 25);
    }

    #[test]
    fn resolve_clamps_upper_bound() {
        let q = ListParams { size: Some(1000), ..Default::default() }
            .resolve(ListLimits { default_size: 10, max_size: 50 });
        assert_eq!(q.size, 50);
    }

    #[test]
    fn window_is_offset_limit() {
        let q = ListQuery::new("", "", 0, 2);
        assert_eq!(q.window(1..=5), vec![1, 2]);
        let q = ListQuery::new("", "", 3, 10);
        assert_eq!(q.window(1..=5), vec![4, 5]);
        let q = ListQuery::new("", "", 9, 10);
        assert!(q.window(1..=5).is_empty());
    }

    #[test]
    fn zero_size_yields_nothing() {
        let q = ListQuery::new("", "", 0, 0);
        assert!(q.window(1..=5).is_empty());
    }

    #[test]
    fn matches_is_case_insensitive() {
        let q = ListQuery::new("ACME", "", 0, 10);
        assert!(q.matches("jo@acme.com"));
        assert!(!q.matches("jo@example.com"));
        assert!(ListQuery::new("  ", "", 0, 10).matches("anything"));
    }
}
