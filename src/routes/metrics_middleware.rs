use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{field::Empty, info, info_span, Instrument};

use crate::metrics::{self, UNMATCHED_ROUTE};

/// Count, time and log every request, whatever its outcome.
///
/// Exactly one log line is written per request. Handlers attach their own
/// fields (`item_id`, `user_id`, `detail`) to the request span with
/// `Span::current().record(..)`, and those fields show up on that line.
///
/// Recording happens after the response is produced, so a `/metrics` scrape
/// only shows up in the next one.
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let span = info_span!("request", item_id = Empty, user_id = Empty, detail = Empty);
    let response = next.run(req).instrument(span.clone()).await;

    let latency = start.elapsed();
    let status = response.status().as_u16();
    if let Some(registry) = metrics::global() {
        registry.observe_request(method.as_str(), &route, status, latency);
    }

    span.in_scope(|| {
        info!(
            method = %method,
            route = %route,
            path = %path,
            status,
            latency_ms = latency.as_secs_f64() * 1000.0,
            "request completed"
        )
    });

    response
}
