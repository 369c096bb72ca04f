use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

/// A single filter criterion value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Free-text match, e.g. a search term or a role name.
    Text(String),
    /// Boolean criterion, e.g. "active accounts only".
    Flag(bool),
    /// Reference to another entity by its id.
    Id(Uuid),
    /// Calendar date, rendered as ISO `YYYY-MM-DD`.
    Date(NaiveDate),
}

impl FilterValue {
    /// The value as it appears in a query string.
    pub fn render(&self) -> String {
        match self {
            FilterValue::Text(text) => text.clone(),
            FilterValue::Flag(flag) => flag.to_string(),
            FilterValue::Id(id) => id.to_string(),
            FilterValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Flag(value)
    }
}

impl From<Uuid> for FilterValue {
    fn from(value: Uuid) -> Self {
        FilterValue::Id(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        FilterValue::Date(value)
    }
}

/// Named filter criteria attached to a list query.
///
/// Keys are the wire-level parameter names. Entries iterate in key order, so
/// equal sets always produce identical requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSet {
    values: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    /// An empty set; matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for literal construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace one criterion.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Drop one criterion, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<FilterValue> {
        self.values.remove(name)
    }

    /// Look up one criterion.
    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.values.get(name)
    }

    /// Number of criteria present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate criteria in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_value_kind() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(FilterValue::from("mystery").render(), "mystery");
        assert_eq!(FilterValue::from(true).render(), "true");
        assert_eq!(FilterValue::from(date).render(), "2026-08-24");
    }

    #[test]
    fn iterates_in_key_order() {
        let filters = FilterSet::new()
            .with("search", "twain")
            .with("isActive", true)
            .with("role", "Admin");
        let keys: Vec<&str> = filters.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, vec!["isActive", "role", "search"]);
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut filters = FilterSet::new().with("role", "Admin");
        filters.insert("role", "Staff");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.get("role"), Some(&FilterValue::Text("Staff".into())));
    }
}
