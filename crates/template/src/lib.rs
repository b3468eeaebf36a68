//! Template Engine - conditional skeleton rendering
//!
//! This crate provides:
//! - Directive resolution for `<? if (NAME) { ?> ... <? } ?>` blocks
//! - Condition-driven strip rules for fixed markup
//! - `{{NAME}}` placeholder substitution with leftover cleanup
//! - Accent-color swapping via the skeleton's sentinel color
//!
//! # Example
//!
//! ```
//! use template::{render, ConditionSet, PlaceholderMap};
//!
//! let doc = "<? if (PAID) { ?><p>Paid</p><? } else { ?><p>Due: {{AMOUNT}}</p><? } ?>";
//!
//! let mut values = PlaceholderMap::new();
//! values.insert("AMOUNT", "₹ 500.00");
//!
//! let html = render(doc, &ConditionSet::new(), &values).unwrap();
//! assert_eq!(html, "<p>Due: ₹ 500.00</p>");
//! ```

mod directive;
mod placeholder;
mod renderer;
mod rules;
mod schema;

pub use directive::resolve_directives;
pub use renderer::{render, RenderRequest, Renderer, ACCENT_SENTINEL};
pub use rules::{StripRule, DEFAULT_STRIP_RULES};
pub use schema::{ConditionSet, PlaceholderMap, GST, HAS_HSN, INTERNATIONAL_PARTY};

use thiserror::Error;

/// Errors that can occur while preparing a renderer
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid strip rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_and_cleans() {
        let mut values = PlaceholderMap::new();
        values.insert("NAME", "Acme");
        let html = render("{{NAME}} {{MISSING}}", &ConditionSet::new(), &values).unwrap();
        assert_eq!(html, "Acme ");
    }

    #[test]
    fn test_render_resolves_directives() {
        let mut conditions = ConditionSet::new();
        conditions.set("SHOW", true);
        let html = render(
            "<? if (SHOW) { ?>yes<? } ?>",
            &conditions,
            &PlaceholderMap::new(),
        )
        .unwrap();
        assert_eq!(html, "yes");
    }
}
