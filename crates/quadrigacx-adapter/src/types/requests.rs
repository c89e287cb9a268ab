/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Authentication fields carried by every signed request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub key: String,
    pub signature: String,
    pub nonce: String,
}

/// Signed request body: auth fields merged with endpoint parameters
#[derive(Debug, Clone, Serialize)]
pub struct SignedBody<P> {
    #[serde(flatten)]
    pub auth: AuthPayload,
    #[serde(flatten)]
    pub params: P,
}

/// Endpoints that take no parameters beyond authentication
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyParams {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIdRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,
}
