/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"error": {"code": .., "message": ..}}` body the exchange returns on failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl ApiErrorEnvelope {
    /// Parse a response body as an error envelope, if it is one
    ///
    /// Only a JSON object whose `error` member is itself an object qualifies;
    /// list bodies and objects with a scalar `error` field are regular payloads.
    pub fn parse(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        if !value.get("error").is_some_and(Value::is_object) {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}
