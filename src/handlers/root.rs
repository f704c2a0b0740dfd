use axum::Json;

use crate::models::RootResponse;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello, DevOps!".to_string(),
    })
}
