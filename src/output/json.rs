//! JSON output formatting

use serde::Serialize;

/// Format data as pretty-printed JSON with 2-space indentation
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
