//! TYPO3 RST pre-write hook
//!
//! Advisory checks for reStructuredText documentation content before it is
//! written to a TYPO3 `Documentation/` tree.
//!
//! This library provides:
//! - Lenient extraction of the pending write from a JSON hook payload
//! - A fixed table of Markdown-vs-RST pattern rules
//! - Rendering of the advisory reminder block
//! - Configuration management

pub mod config;
pub mod hook;
pub mod output;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use hook::{HookPayload, run_hook};
pub use output::render_advisory;
pub use validation::{Diagnostic, Severity, ValidationResult, validate_content};
