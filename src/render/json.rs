//! JSON serialization of compiled output.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Human-readable, indented.
    #[default]
    Pretty,
    /// Single line, no extra whitespace.
    Compact,
}

/// Serialize a value to JSON in the requested layout.
pub fn to_json<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let out = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };
    out.map_err(|e| Error::Render(format!("JSON serialization failed: {e}")))
}
