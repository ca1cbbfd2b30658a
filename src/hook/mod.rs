//! Pre-write Hook
//!
//! Entry sequencing from raw stdin text to an optional advisory block.

pub mod payload;

pub use payload::HookPayload;

use anyhow::Result;

use crate::config::Config;
use crate::output::render_advisory;
use crate::validation::{Severity, validate_content};

/// Run the hook over raw input.
///
/// `Ok(None)` covers every silent skip: empty input, a path outside the
/// documentation tree, a non-RST path, or content with no issues. `Err` is
/// returned only for input that is not JSON; callers swallow it.
pub fn run_hook(input: &str, config: &Config) -> Result<Option<String>> {
    if input.is_empty() {
        log::debug!("Empty input, nothing to check");
        return Ok(None);
    }

    let payload = HookPayload::from_json(input)?;

    if payload.file_path.is_empty() || !payload.file_path.contains(&config.docs_marker) {
        log::debug!(
            "Skipping {:?}: not under {:?}",
            payload.file_path,
            config.docs_marker
        );
        return Ok(None);
    }

    if !payload.file_path.ends_with(&config.extension) {
        log::debug!(
            "Skipping {:?}: no {:?} suffix",
            payload.file_path,
            config.extension
        );
        return Ok(None);
    }

    let result = validate_content(&payload.content, &payload.file_path, config);
    log::info!(
        "{}: {} issue(s), {} error(s)",
        payload.file_path,
        result.diagnostics.len(),
        result.count(Severity::Error)
    );

    Ok(render_advisory(&payload.file_path, &result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(value: serde_json::Value) -> Option<String> {
        run_hook(&value.to_string(), &Config::default()).expect("valid JSON")
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run_hook("", &Config::default()).expect("empty is ok"), None);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(run_hook("{\"file_path\": \"Documentation/a.rst\"", &Config::default()).is_err());
    }

    #[test]
    fn test_missing_path() {
        assert_eq!(run(json!({ "content": "# Heading\n" })), None);
    }

    #[test]
    fn test_wrong_extension() {
        assert_eq!(
            run(json!({ "file_path": "Documentation/Index.md", "content": "# Heading\n" })),
            None
        );
    }

    #[test]
    fn test_missing_marker() {
        assert_eq!(
            run(json!({ "file_path": "docs/Index.rst", "content": "# Heading\n" })),
            None
        );
    }

    #[test]
    fn test_clean_content() {
        assert_eq!(
            run(json!({ "file_path": "Documentation/Index.rst", "content": "Title\n=====\n" })),
            None
        );
    }

    #[test]
    fn test_heading_advisory() {
        let block = run(json!({
            "file_path": "Documentation/Index.rst",
            "content": "# Heading\n"
        }))
        .expect("advisory");
        assert!(block.starts_with("<system-reminder>\nRST validation for Documentation/Index.rst:"));
        assert!(block.contains("❌ Markdown heading detected."));
        assert!(!block.contains("Markdown code block"));
        assert!(!block.contains("Markdown link"));
        assert!(!block.contains("instead of bold"));
        assert!(!block.contains("List item found"));
    }

    #[test]
    fn test_fallback_keys_advisory() {
        let block = run(json!({
            "path": "Documentation/Index.rst",
            "new_string": "**Heads up**\n"
        }))
        .expect("advisory");
        assert!(block.contains("ℹ️ Consider using RST admonition"));
    }

    #[test]
    fn test_idempotent() {
        let input = json!({
            "file_path": "Documentation/Index.rst",
            "content": "```php\n[a](b)\n- x\n"
        })
        .to_string();
        let config = Config::default();
        let first = run_hook(&input, &config).expect("first run");
        let second = run_hook(&input, &config).expect("second run");
        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
