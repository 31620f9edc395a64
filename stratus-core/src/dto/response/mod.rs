//! Response envelope DTOs

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Common envelope wrapping every API response body.
///
/// Either key may be absent; a non-empty `errors` list means the request
/// failed at the application level regardless of what `data` contains.
#[derive(Debug, Deserialize)]
pub struct ResponseEnvelope {
    /// Raw payload, decoded further by the caller.
    pub data: Option<Box<RawValue>>,
    /// Application-level error entries.
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// A single application-level error entry reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Server-defined error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
    /// Additional key/value detail attached by the server.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
