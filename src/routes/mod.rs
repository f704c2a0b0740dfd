pub mod api;
pub mod metrics_middleware;

pub use api::create_api_routes;
pub use metrics_middleware::metrics_middleware;
