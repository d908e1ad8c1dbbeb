use serde_json::Value;

/// One decoded line of the `/api/create` status stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Status(String),
    /// JSON without a `status` field, e.g. `{"error": "..."}` sent after a 200
    Failure(String),
}

/// Decode one newline-delimited JSON line; `None` for lines that are not JSON
#[must_use]
pub fn decode_status_line(line: &str) -> Option<StatusLine> {
    let value: Value = serde_json::from_str(line).ok()?;

    let decoded = match value.get("status") {
        Some(Value::String(status)) => StatusLine::Status(status.clone()),
        Some(status) => StatusLine::Status(status.to_string()),
        None => match value.get("error").and_then(Value::as_str) {
            Some(error) => StatusLine::Failure(error.to_string()),
            None => StatusLine::Failure(line.trim().to_string()),
        },
    };

    Some(decoded)
}
