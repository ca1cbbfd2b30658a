//! Hook Payload
//!
//! Typed, lenient view of the pending write described on stdin.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Raw key set as sent by the editor; values are left untyped so a wrong
/// type degrades to "absent" instead of failing the parse.
#[derive(Debug, Default, Deserialize)]
struct RawPayload {
    #[serde(default)]
    file_path: Option<Value>,
    #[serde(default)]
    path: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
    #[serde(default)]
    new_string: Option<Value>,
}

/// The pending write, with key preference already resolved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HookPayload {
    pub file_path: String,
    pub content: String,
}

impl HookPayload {
    /// Parse a payload from JSON text.
    ///
    /// Fails only when the text is not JSON at all. Any JSON value that is
    /// not an object, and any recognized key holding a non-string, is read
    /// as empty.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input).context("payload is not valid JSON")?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            log::debug!("Payload is not a JSON object");
            return Self::default();
        }
        let raw = RawPayload::deserialize(value).unwrap_or_else(|e| {
            log::debug!("Payload keys unreadable: {e}");
            RawPayload::default()
        });

        HookPayload {
            file_path: first_non_empty(&[&raw.file_path, &raw.path]),
            content: first_non_empty(&[&raw.content, &raw.new_string]),
        }
    }
}

/// First candidate holding a non-empty string, else empty
fn first_non_empty(candidates: &[&Option<Value>]) -> String {
    candidates
        .iter()
        .filter_map(|v| match v {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        })
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}
