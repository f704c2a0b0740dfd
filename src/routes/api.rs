use crate::handlers::{
    create_item, delete_item, health_check, metrics_export, multiply, read_item, root, sum,
    trace_example, update_item,
};
use axum::{routing::get, routing::post, Router};

/// Create API routes
pub fn create_api_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/items/", post(create_item))
        .route("/items/:item_id", get(read_item).put(update_item).delete(delete_item))
        .route("/trace-example/:user_id", get(trace_example))
        .route("/sum", get(sum))
        .route("/multiply", get(multiply))
        .route("/metrics", get(metrics_export))
}
