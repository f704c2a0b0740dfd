use utoipa::OpenApi;
use crate::models::*;

/// Greeting
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static greeting", body = RootResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Read an item
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(("item_id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item synthesized from its id", body = ItemResponse),
        (status = 400, description = "Item id is not an integer")
    )
)]
#[allow(dead_code)]
pub async fn read_item_doc() {}

/// Create an item
#[utoipa::path(
    post,
    path = "/items/",
    request_body = Item,
    responses(
        (status = 200, description = "Validated item echoed back", body = ItemEchoResponse),
        (status = 422, description = "Validation failed", body = ValidationErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Update an item
#[utoipa::path(
    put,
    path = "/items/{item_id}",
    params(("item_id" = i64, Path, description = "Item id")),
    request_body = Item,
    responses(
        (status = 200, description = "Validated item echoed back with its id", body = ItemEchoResponse),
        (status = 422, description = "Validation failed", body = ValidationErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn update_item_doc() {}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    params(("item_id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Delete acknowledged", body = ItemDeleteResponse)
    )
)]
#[allow(dead_code)]
pub async fn delete_item_doc() {}

/// Log a trace line for a user
#[utoipa::path(
    get,
    path = "/trace-example/{user_id}",
    params(("user_id" = i64, Path, description = "User id to tag the log line with")),
    responses(
        (status = 200, description = "Trace acknowledged", body = TraceResponse)
    )
)]
#[allow(dead_code)]
pub async fn trace_example_doc() {}

/// Sum two numbers
#[utoipa::path(
    get,
    path = "/sum",
    params(
        ("a" = f64, Query, description = "First operand"),
        ("b" = f64, Query, description = "Second operand")
    ),
    responses(
        (status = 200, description = "Sum of a and b", body = CalcResponse)
    )
)]
#[allow(dead_code)]
pub async fn sum_doc() {}

/// Multiply two numbers
#[utoipa::path(
    get,
    path = "/multiply",
    params(
        ("a" = f64, Query, description = "First operand"),
        ("b" = f64, Query, description = "Second operand")
    ),
    responses(
        (status = 200, description = "Product of a and b", body = CalcResponse)
    )
)]
#[allow(dead_code)]
pub async fn multiply_doc() {}

/// Prometheus metrics endpoint
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus text exposition", body = String, content_type = "text/plain")
    )
)]
#[allow(dead_code)]
pub async fn metrics_doc() {}

#[derive(OpenApi)]
#[openapi(
    info(title = "DevOps API", version = "1.0"),
    paths(
        root_doc,
        health_check_doc,
        read_item_doc,
        create_item_doc,
        update_item_doc,
        delete_item_doc,
        trace_example_doc,
        sum_doc,
        multiply_doc,
        metrics_doc,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            Item,
            ItemResponse,
            ItemEchoResponse,
            ItemDeleteResponse,
            TraceResponse,
            CalcResponse,
            ErrorResponse,
            FieldError,
            FieldErrorKind,
            ValidationErrorResponse,
        )
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
