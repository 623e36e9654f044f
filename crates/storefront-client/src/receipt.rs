//! Successful order submission result

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::error::SubmitError;

/// What the order backend sent back for an accepted order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    /// HTTP status of the response (always 2xx)
    pub status: u16,
    /// Parsed response body, `Value::Null` when the body was empty
    pub body: Value,
    pub received_at: DateTime<Local>,
}

impl OrderReceipt {
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            received_at: Local::now(),
        }
    }

    /// Parse a 2xx response body.
    ///
    /// Empty bodies are accepted; anything else must be JSON.
    pub fn from_body(status: u16, body: &str) -> Result<Self, SubmitError> {
        let body = body.trim();
        if body.is_empty() {
            return Ok(Self::new(status, Value::Null));
        }

        let value = serde_json::from_str(body)
            .map_err(|e| SubmitError::invalid_response(format!("body is not JSON: {e}")))?;
        Ok(Self::new(status, value))
    }

    /// Order identifier assigned by the backend, if it sent one.
    ///
    /// Looks at `orderId`, `id` and `_id`, at the top level first and then
    /// inside a `data` object.
    pub fn order_id(&self) -> Option<String> {
        find_id(&self.body).or_else(|| self.body.get("data").and_then(find_id))
    }
}

fn find_id(value: &Value) -> Option<String> {
    ["orderId", "id", "_id"]
        .iter()
        .find_map(|key| match value.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}
