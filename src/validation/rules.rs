//! Rule Table
//!
//! Fixed, ordered Markdown-vs-RST pattern checks and the known TYPO3
//! directive names.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use super::engine::Severity;

/// A single pattern check
#[derive(Debug)]
pub struct Rule {
    pub pattern: Regex,
    pub message: &'static str,
    pub severity: Severity,
}

/// Source form of the rule table, in evaluation order
const RULE_SOURCES: &[(&str, &str, Severity)] = &[
    (
        r"^(#{1,6})\s",
        "Markdown heading detected. RST uses underlines: = for h1, - for h2, ~ for h3",
        Severity::Error,
    ),
    (
        r"```\w*\n",
        "Markdown code block detected. RST uses: .. code-block:: language",
        Severity::Error,
    ),
    (
        r"\[([^\]]+)\]\(([^)]+)\)",
        "Markdown link detected. RST uses: `Link text <url>`_",
        Severity::Error,
    ),
    (
        r"^\*\*[^*]+\*\*$",
        "Consider using RST admonition (.. note::, .. tip::) instead of bold for callouts",
        Severity::Info,
    ),
    (
        r"^\s*-\s+\w",
        "List item found. Ensure blank line before list and consistent indentation",
        Severity::Info,
    ),
];

/// Compiled rule table, multi-line mode so `^`/`$` anchor to lines
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    RULE_SOURCES
        .iter()
        .filter_map(|&(source, message, severity)| {
            match RegexBuilder::new(source).multi_line(true).build() {
                Ok(pattern) => Some(Rule {
                    pattern,
                    message,
                    severity,
                }),
                Err(e) => {
                    log::warn!("Skipping rule with invalid pattern {source:?}: {e}");
                    None
                }
            }
        })
        .collect()
});

/// TYPO3 directives recognized by the documentation toolchain
pub const TYPO3_DIRECTIVES: &[&str] = &[
    "confval",
    "versionadded",
    "versionchanged",
    "deprecated",
    "card-grid",
    "card",
    "tabs",
    "tab",
    "accordion",
    "accordion-item",
    "note",
    "tip",
    "warning",
    "important",
    "attention",
    "seealso",
];

/// Whether `name` is one of the TYPO3 directives
pub fn is_known_directive(name: &str) -> bool {
    TYPO3_DIRECTIVES.contains(&name)
}
