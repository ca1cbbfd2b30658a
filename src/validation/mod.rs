//! Validation Engine
//!
//! Rule table and evaluation, kept apart from payload and output concerns.

pub mod engine;
pub mod rules;

pub use engine::{Diagnostic, Severity, ValidationResult, apply_rules, validate_content};
pub use rules::{RULES, Rule, TYPO3_DIRECTIVES, is_known_directive};
