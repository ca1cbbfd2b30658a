//! Advisory block rendering.

use crate::validation::ValidationResult;

/// Tag wrapping the advisory so the editor surfaces it as a reminder
pub const REMINDER_TAG: &str = "system-reminder";

/// Static footer shown under every advisory
pub const QUICK_REFERENCE: &str = "\
TYPO3 RST Quick Reference:
- Headings: Use = (h1), - (h2), ~ (h3) underlines
- Code: .. code-block:: php
- Links: `Link text <url>`_
- Notes: .. note::, .. tip::, .. warning::
- TYPO3 directives: .. confval::, .. versionadded::

See typo3-docs skill for full RST reference.";

/// Icon for a severity label; unknown labels get a plain bullet
pub fn severity_icon(label: &str) -> &'static str {
    match label {
        "error" => "❌",
        "warning" => "⚠️",
        "info" => "ℹ️",
        _ => "•",
    }
}

/// Render the advisory block for `file_path`, or `None` when there is
/// nothing to report. The block carries no trailing newline.
pub fn render_advisory(file_path: &str, result: &ValidationResult) -> Option<String> {
    if result.is_empty() {
        return None;
    }

    let issue_lines: Vec<String> = result
        .diagnostics
        .iter()
        .map(|d| format!("{} {}", severity_icon(d.severity.as_str()), d.message))
        .collect();

    Some(format!(
        "<{REMINDER_TAG}>\nRST validation for {file_path}:\n\n{}\n\n{QUICK_REFERENCE}\n</{REMINDER_TAG}>",
        issue_lines.join("\n")
    ))
}
