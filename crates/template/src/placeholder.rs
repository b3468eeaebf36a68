//! Placeholder substitution and cleanup

use regex::{Captures, Regex};

use crate::schema::PlaceholderMap;

/// Token form accepted for substitution and cleanup: upper-case ASCII
/// letters, digits and underscores inside double braces.
const TOKEN_PATTERN: &str = r"\{\{([A-Z0-9_]+)\}\}";

pub(crate) fn token_regex() -> Result<Regex, regex::Error> {
    Regex::new(TOKEN_PATTERN)
}

/// Replace every known token with its value in one pass.
///
/// Unknown tokens stay in place for the cleanup step. Replacement text is
/// never rescanned, so values containing token syntax are inert.
pub(crate) fn substitute(token: &Regex, doc: &str, values: &PlaceholderMap) -> String {
    token
        .replace_all(doc, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Delete every remaining well-formed token.
pub(crate) fn strip_unresolved(token: &Regex, doc: &str) -> String {
    token.replace_all(doc, "").into_owned()
}
