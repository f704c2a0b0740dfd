use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operands for the arithmetic endpoints
#[derive(Debug, Deserialize)]
pub struct CalcQuery {
    pub a: f64,
    pub b: f64,
}

/// Result of an arithmetic endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CalcResponse {
    pub result: f64,
}
