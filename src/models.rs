//! Frontend Models
//!
//! Data structures matching the item-store wire format.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Todo item (server-owned, cached copy)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub text: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_at: String,
}

/// Accept any JSON value for a display-only field: `null` becomes empty,
/// numbers and other non-strings keep their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Body of `POST /api/todos`
#[derive(Debug, Serialize)]
pub struct CreateTodoArgs<'a> {
    pub text: &'a str,
}

/// Error body returned by the item store on non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
