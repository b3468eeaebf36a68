//! Render input types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Condition name for sellers registered under GST.
pub const GST: &str = "GST";

/// Condition name set when item rows carry HSN/SAC codes.
pub const HAS_HSN: &str = "HAS_HSN";

/// Condition name set when the billed party is outside the country.
pub const INTERNATIONAL_PARTY: &str = "INTERNATIONAL_PARTY";

/// Named boolean flags consulted by directives and strip rules.
///
/// Names are matched exactly, case included. A name absent from the set
/// reads as false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionSet {
    flags: HashMap<String, bool>,
}

impl ConditionSet {
    /// Create an empty set; every condition reads false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a condition flag.
    pub fn set(&mut self, name: impl Into<String>, value: bool) -> &mut Self {
        self.flags.insert(name.into(), value);
        self
    }

    /// Look up a condition; absent names are false.
    pub fn is_true(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

impl<N: Into<String>> FromIterator<(N, bool)> for ConditionSet {
    fn from_iter<T: IntoIterator<Item = (N, bool)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.set(name, value);
        }
        set
    }
}

/// Replacement text keyed by placeholder name.
///
/// Values are inserted verbatim; callers own the HTML safety of what they
/// put in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderMap {
    values: HashMap<String, String>,
}

impl PlaceholderMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the replacement for a placeholder name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Replacement for a name, if one was supplied.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Copy every entry of `other` into this map, overwriting duplicates.
    pub fn extend_from(&mut self, other: &PlaceholderMap) {
        for (name, value) in &other.values {
            self.values.insert(name.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for PlaceholderMap {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_condition_is_false() {
        let set = ConditionSet::new();
        assert!(!set.is_true("GST"));
    }

    #[test]
    fn test_set_and_read_conditions() {
        let mut set = ConditionSet::new();
        set.set(GST, true).set(HAS_HSN, false);
        assert!(set.is_true(GST));
        assert!(!set.is_true(HAS_HSN));
    }

    #[test]
    fn test_condition_names_are_case_sensitive() {
        let set = ConditionSet::from_iter([("gst", true)]);
        assert!(set.is_true("gst"));
        assert!(!set.is_true("GST"));
    }

    #[test]
    fn test_placeholder_overwrite_and_merge() {
        let mut values = PlaceholderMap::from_iter([("A", "1"), ("B", "2")]);
        let overlay = PlaceholderMap::from_iter([("B", "20"), ("C", "30")]);
        values.extend_from(&overlay);
        assert_eq!(values.get("A"), Some("1"));
        assert_eq!(values.get("B"), Some("20"));
        assert_eq!(values.get("C"), Some("30"));
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_transparent_json_form() {
        let set: ConditionSet = serde_json::from_str(r#"{"GST": true, "HAS_HSN": false}"#).unwrap();
        assert!(set.is_true("GST"));
        assert!(!set.is_true("HAS_HSN"));
        assert!(!set.is_true("INTERNATIONAL_PARTY"));

        let values: PlaceholderMap =
            serde_json::from_str(r#"{"COMPANY_NAME": "Acme"}"#).unwrap();
        assert_eq!(values.get("COMPANY_NAME"), Some("Acme"));
    }
}
