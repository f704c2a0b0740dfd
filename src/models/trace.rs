use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgement for a traced request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct TraceResponse {
    pub user_id: i64,
    pub message: String,
}
