use axum::{
    http::{header, StatusCode},
    Json,
};
use tracing::{field, Span};

use crate::{metrics, models::ErrorResponse};

type Exposition = (StatusCode, [(header::HeaderName, &'static str); 1], String);

/// Prometheus scrape endpoint
pub async fn metrics_export() -> Result<Exposition, (StatusCode, Json<ErrorResponse>)> {
    let status = StatusCode::INTERNAL_SERVER_ERROR;

    let Some(registry) = metrics::global() else {
        Span::current().record("detail", "Metrics registry not initialized");
        return Err((status, Json(ErrorResponse::new(status, "Metrics registry not initialized"))));
    };

    match registry.render() {
        Ok(body) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )),
        Err(e) => {
            Span::current().record("detail", field::display(format_args!("Failed to encode metrics: {}", e)));
            Err((status, Json(ErrorResponse::new(status, format!("Failed to encode metrics: {}", e)))))
        }
    }
}
