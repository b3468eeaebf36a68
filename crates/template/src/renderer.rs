//! Skeleton rendering pipeline

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::placeholder;
use crate::rules::{self, CompiledRule, StripRule, DEFAULT_STRIP_RULES};
use crate::schema::{ConditionSet, PlaceholderMap};
use crate::{directive, Result};

/// Accent color carried by skeleton styles.
///
/// Swapped for the caller's theme color before any other processing, so a
/// branch dropped by a directive is themed the same as kept content.
pub const ACCENT_SENTINEL: &str = "#3b0764";

/// Inputs to one render call.
///
/// The request is read-only for the duration of the render; build a fresh
/// one per call rather than mutating between calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Boolean flags consulted by directives and strip rules.
    #[serde(default)]
    pub conditions: ConditionSet,
    /// Placeholder values, inserted verbatim.
    #[serde(default)]
    pub values: PlaceholderMap,
    /// Replacement for [`ACCENT_SENTINEL`], when theming is wanted.
    #[serde(default)]
    pub accent: Option<String>,
}

/// Skeleton renderer holding compiled strip rules.
#[derive(Debug)]
pub struct Renderer {
    rules: Vec<CompiledRule>,
    token: Regex,
}

impl Renderer {
    /// Create a renderer with [`DEFAULT_STRIP_RULES`].
    pub fn new() -> Result<Self> {
        Self::with_rules(DEFAULT_STRIP_RULES)
    }

    /// Create a renderer with a custom strip-rule table.
    pub fn with_rules(rules: &[StripRule]) -> Result<Self> {
        Ok(Self {
            rules: rules::compile(rules)?,
            token: placeholder::token_regex()?,
        })
    }

    /// Render a skeleton document.
    ///
    /// Stages run in a fixed order: accent swap, directive resolution, strip
    /// rules, placeholder substitution, cleanup of unresolved placeholders.
    /// Rendering itself never fails; malformed directive markers pass
    /// through untouched and unknown placeholders are deleted.
    pub fn render(&self, skeleton: &str, request: &RenderRequest) -> String {
        let mut doc = match &request.accent {
            Some(color) => skeleton.replace(ACCENT_SENTINEL, color),
            None => skeleton.to_string(),
        };
        doc = directive::resolve_directives(&doc, &request.conditions);
        doc = rules::apply(&self.rules, doc, &request.conditions);
        doc = placeholder::substitute(&self.token, &doc, &request.values);
        placeholder::strip_unresolved(&self.token, &doc)
    }
}

/// Render `doc` once with the default rule table and no accent swap.
pub fn render(doc: &str, conditions: &ConditionSet, values: &PlaceholderMap) -> Result<String> {
    let renderer = Renderer::new()?;
    let request = RenderRequest {
        conditions: conditions.clone(),
        values: values.clone(),
        accent: None,
    };
    Ok(renderer.render(doc, &request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn renderer() -> Renderer {
        Renderer::new().unwrap()
    }

    #[test]
    fn test_accent_swapped_everywhere() {
        let skeleton = "<style>h1 { color: #3b0764; } th { background: #3b0764; }</style>";
        let request = RenderRequest {
            accent: Some("#0f766e".to_string()),
            ..Default::default()
        };
        let html = renderer().render(skeleton, &request);
        assert!(!html.contains("#3b0764"));
        assert_eq!(html.matches("#0f766e").count(), 2);
    }

    #[test]
    fn test_accent_swap_reaches_directive_branches() {
        let skeleton = "<? if (ON) { ?><b style=\"color: #3b0764\">x</b><? } ?>";
        let mut conditions = ConditionSet::new();
        conditions.set("ON", true);
        let request = RenderRequest {
            conditions,
            accent: Some("#123456".to_string()),
            ..Default::default()
        };
        assert_eq!(
            renderer().render(skeleton, &request),
            "<b style=\"color: #123456\">x</b>"
        );
    }

    #[test]
    fn test_values_containing_directive_syntax_stay_literal() {
        let mut values = PlaceholderMap::new();
        values.insert("NOTE", "<? if (GST) { ?>never resolved<? } ?>");
        let request = RenderRequest {
            values,
            ..Default::default()
        };
        assert_eq!(
            renderer().render("{{NOTE}}", &request),
            "<? if (GST) { ?>never resolved<? } ?>"
        );
    }

    #[test]
    fn test_unresolved_tokens_deleted_last() {
        let request = RenderRequest::default();
        assert_eq!(renderer().render("a{{NOPE}}b", &request), "ab");
    }

    #[test]
    fn test_injected_token_text_is_also_deleted() {
        // Cleanup runs on the substituted document, so token syntax inside a
        // value does not survive either.
        let mut values = PlaceholderMap::new();
        values.insert("X", "see {{Y}}");
        let request = RenderRequest {
            values,
            ..Default::default()
        };
        assert_eq!(renderer().render("{{X}}", &request), "see ");
    }

    #[test]
    fn test_custom_rule_table() {
        let rules = [StripRule {
            condition: "DRAFT",
            strip_when: true,
            pattern: r"<p>watermark</p>\s*",
        }];
        let renderer = Renderer::with_rules(&rules).unwrap();
        let mut conditions = ConditionSet::new();
        conditions.set("DRAFT", true);
        let request = RenderRequest {
            conditions,
            ..Default::default()
        };
        assert_eq!(renderer.render("<p>watermark</p>\n<p>body</p>", &request), "<p>body</p>");
    }

    #[test]
    fn test_strip_rules_run_before_substitution() {
        // The GST row is matched on its raw token form, so stripping wins
        // over filling in the amount.
        let doc = "<tr>\n<th>GST @ 18%</th>\n<td>₹ {{GST_DISPLAY}}</td>\n</tr>";
        let mut values = PlaceholderMap::new();
        values.insert("GST_DISPLAY", "18,000.00");
        let request = RenderRequest {
            values,
            ..Default::default()
        };
        assert_eq!(renderer().render(doc, &request), "");
    }
}
