//! Tag parsing and set-membership filters
//!
//! Items carry a semicolon-delimited tag cell; filters compare lowercase
//! tags so all matching is case-insensitive.

/// Split a raw tag cell into trimmed, lowercase tags. Empty fragments are
/// dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Composed include/require/exclude filter over an item's tag set.
///
/// Applied in the fixed order include -> require -> exclude; each predicate
/// is a pass-through when its tag list is empty.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    include: Vec<String>,
    require: Vec<String>,
    exclude: Vec<String>,
}

impl TagFilter {
    pub fn new(include: &[String], require: &[String], exclude: &[String]) -> Self {
        let lower = |tags: &[String]| tags.iter().map(|t| t.to_lowercase()).collect();
        Self {
            include: lower(include),
            require: lower(require),
            exclude: lower(exclude),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.require.is_empty() && self.exclude.is_empty()
    }

    /// True when the item's tags pass every configured predicate: at least
    /// one included tag, every required tag, no excluded tag.
    pub fn keep(&self, item_tags: &[String]) -> bool {
        (self.include.is_empty() || self.include.iter().any(|t| item_tags.contains(t)))
            && self.require.iter().all(|t| item_tags.contains(t))
            && self.exclude.iter().all(|t| !item_tags.contains(t))
    }
}
