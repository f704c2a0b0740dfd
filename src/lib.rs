pub mod config;
pub mod docs;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod validation;

use axum::{http::HeaderValue, middleware, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;
use docs::ApiDoc;
use routes::{create_api_routes, metrics_middleware};

/// Build the application router.
///
/// Initialises the process-wide metrics registry on first use.
pub fn create_app(config: &Config) -> Result<Router, prometheus::Error> {
    metrics::init(&config.service_name)?;

    let app = Router::new()
        .merge(create_api_routes())
        // Mount Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));

    let app = match cors_layer(config) {
        Some(cors) => app.layer(cors),
        None => app,
    };

    // Outside CORS so preflight answers are counted and logged too
    Ok(app
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(config: &Config) -> Option<CorsLayer> {
    let origins = config.cors_origin_list()?;

    if origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
