//! Validation Engine
//!
//! Applies the rule table to pending RST content. Separated from payload
//! handling and output rendering.

use crate::config::Config;

use super::rules::{RULES, Rule};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Lowercase label, as used in hook output
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A diagnostic message for a matched rule
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a piece of content, in rule order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, severity: Severity, message: String) {
        self.diagnostics.push(Diagnostic { message, severity });
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Validate content destined for `file_path`.
///
/// Paths outside the documentation tree, or without the RST suffix, yield an
/// empty result.
pub fn validate_content(content: &str, file_path: &str, config: &Config) -> ValidationResult {
    if !config.is_applicable(file_path) {
        return ValidationResult::new();
    }
    apply_rules(content, &RULES)
}

/// Evaluate every rule independently against the whole content
pub fn apply_rules(content: &str, rules: &[Rule]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for rule in rules {
        if rule.pattern.is_match(content) {
            log::debug!("Rule matched: {}", rule.message);
            result.add(rule.severity, rule.message.to_string());
        }
    }

    result
}
