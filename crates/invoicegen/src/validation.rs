//! Required-field validation
//!
//! Failures are collected rather than short-circuited, so a caller fixing
//! its input sees every missing field at once.

use std::fmt;

/// Collected validation failures.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    missing: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of the fields that failed, in check order.
    pub fn fields(&self) -> &[String] {
        &self.missing
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    pub(crate) fn missing_field(&mut self, label: &str) {
        self.missing.push(label.to_string());
    }

    pub(crate) fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required fields: {}", self.missing.join(", "))
    }
}

/// Record `label` as missing when `value` is empty after trimming.
pub(crate) fn require(value: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.missing_field(label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_treats_whitespace_as_missing() {
        let mut errors = ValidationErrors::new();
        require("value", "a", &mut errors);
        require("", "b", &mut errors);
        require("  \t ", "c", &mut errors);
        assert_eq!(errors.fields(), ["b", "c"]);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.missing_field("x");
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_display_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.missing_field("company name");
        errors.missing_field("PAN");
        assert_eq!(
            errors.to_string(),
            "missing required fields: company name, PAN"
        );
    }
}
