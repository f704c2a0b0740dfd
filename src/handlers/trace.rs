use axum::{extract::Path, Json};
use tracing::Span;

use crate::models::TraceResponse;

/// Log-only stand-in for distributed tracing: tags the request's log line with the user id
pub async fn trace_example(Path(user_id): Path<i64>) -> Json<TraceResponse> {
    Span::current()
        .record("user_id", user_id)
        .record("detail", "Tracing request for user");
    Json(TraceResponse {
        user_id,
        message: format!("Hello user {}!", user_id),
    })
}
