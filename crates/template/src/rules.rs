//! Structural strip rules
//!
//! A few pieces of invoice markup are tied to condition flags without being
//! wrapped in directives: GST identifier lines and the GST totals row make
//! no sense on a GST-free or export invoice. The coupling lives in one
//! declarative table rather than in checks scattered through the pipeline.

use regex::Regex;

use crate::schema::{ConditionSet, GST, INTERNATIONAL_PARTY};
use crate::Result;

/// The company GST line in the header block.
const COMPANY_GST_LINE: &str = r"<div><strong>GST:</strong>\s*\{\{COMPANY_GST\}\}</div>\s*";

/// The party GST line in the billed-to block.
const PARTY_GST_LINE: &str = r"<div><strong>GST:</strong>\s*\{\{PARTY_GST\}\}</div>\s*";

/// The GST totals row.
///
/// Written against the raw placeholder token, so the rule can never touch a
/// row whose amount has already been substituted.
const GST_TOTAL_ROW: &str =
    r"<tr>\s*<th>GST @ 18%</th>\s*<td>₹ \{\{GST_DISPLAY\}\}</td>\s*</tr>\s*";

/// Removal of one fixed piece of markup, keyed to a condition value.
#[derive(Debug, Clone, Copy)]
pub struct StripRule {
    /// Condition name looked up in the render's [`ConditionSet`].
    pub condition: &'static str,
    /// Condition value that triggers the removal. Absent names read false.
    pub strip_when: bool,
    /// Whitespace-tolerant pattern for the markup to remove.
    pub pattern: &'static str,
}

/// Rules applied on every render, after directive resolution.
pub const DEFAULT_STRIP_RULES: &[StripRule] = &[
    StripRule {
        condition: GST,
        strip_when: false,
        pattern: COMPANY_GST_LINE,
    },
    StripRule {
        condition: GST,
        strip_when: false,
        pattern: PARTY_GST_LINE,
    },
    StripRule {
        condition: GST,
        strip_when: false,
        pattern: GST_TOTAL_ROW,
    },
    StripRule {
        condition: INTERNATIONAL_PARTY,
        strip_when: true,
        pattern: GST_TOTAL_ROW,
    },
];

/// A strip rule with its pattern compiled.
#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    condition: &'static str,
    strip_when: bool,
    pattern: Regex,
}

pub(crate) fn compile(rules: &[StripRule]) -> Result<Vec<CompiledRule>> {
    rules
        .iter()
        .map(|rule| {
            Ok(CompiledRule {
                condition: rule.condition,
                strip_when: rule.strip_when,
                pattern: Regex::new(rule.pattern)?,
            })
        })
        .collect()
}

/// Apply every rule whose condition currently matches its trigger value.
pub(crate) fn apply(rules: &[CompiledRule], mut doc: String, conditions: &ConditionSet) -> String {
    for rule in rules {
        if conditions.is_true(rule.condition) == rule.strip_when {
            doc = rule.pattern.replace_all(&doc, "").into_owned();
        }
    }
    doc
}
