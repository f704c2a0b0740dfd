use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for an error
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: String,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            status: status.to_string(),
            error: error.into(),
        }
    }
}

/// Category of a single field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Missing,
    StringType,
    FloatType,
    ModelType,
    JsonInvalid,
    ContentType,
}

/// One failed field, located by its path in the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind,
        }
    }
}

/// Response for a request body that failed validation
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub code: u16,
    pub status: String,
    pub error: String,
    pub detail: Vec<FieldError>,
}

impl ValidationErrorResponse {
    pub fn new(detail: Vec<FieldError>) -> Self {
        let status = StatusCode::UNPROCESSABLE_ENTITY;
        Self {
            code: status.as_u16(),
            status: status.to_string(),
            error: "Request validation failed".to_string(),
            detail,
        }
    }
}
