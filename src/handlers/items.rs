use axum::{
    extract::{rejection::JsonRejection, Path},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{field, Span};

use crate::{
    models::{FieldError, FieldErrorKind, Item, ItemDeleteResponse, ItemEchoResponse, ItemResponse, ValidationErrorResponse},
    validation::validate_item,
};

type ValidationRejection = (StatusCode, Json<ValidationErrorResponse>);

/// Map a body extraction failure onto a single `body` field error.
fn rejection_error(rejection: JsonRejection) -> FieldError {
    let kind = match &rejection {
        JsonRejection::MissingJsonContentType(_) => FieldErrorKind::ContentType,
        _ => FieldErrorKind::JsonInvalid,
    };
    FieldError::new(&["body"], rejection.body_text(), kind)
}

/// Decode and validate an item body. Malformed JSON is reported like any other validation failure.
fn parse_item(payload: Result<Json<Value>, JsonRejection>) -> Result<Item, ValidationRejection> {
    let detail = match payload {
        Ok(Json(body)) => match validate_item(&body) {
            Ok(item) => return Ok(item),
            Err(errors) => errors,
        },
        Err(rejection) => vec![rejection_error(rejection)],
    };
    Span::current().record("detail", field::display(format_args!("Item rejected: {} field error(s)", detail.len())));
    Err((StatusCode::UNPROCESSABLE_ENTITY, Json(ValidationErrorResponse::new(detail))))
}

/// Synthesize an item from its id; nothing is looked up
pub async fn read_item(Path(item_id): Path<i64>) -> Json<ItemResponse> {
    Span::current()
        .record("item_id", item_id)
        .record("detail", "Item requested");
    Json(ItemResponse::synthesize(item_id))
}

/// Echo a validated item back
pub async fn create_item(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemEchoResponse>), ValidationRejection> {
    let item = parse_item(payload)?;
    let span = Span::current();
    match item.total_price() {
        Some(total_price) => span.record(
            "detail",
            field::display(format_args!("Item created: {} with total_price={}", item.name, total_price)),
        ),
        None => span.record("detail", field::display(format_args!("Item created: {}", item.name))),
    };
    Ok((StatusCode::OK, Json(ItemEchoResponse::new(None, item))))
}

/// Echo a validated item back under the path id
pub async fn update_item(
    Path(item_id): Path<i64>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemEchoResponse>), ValidationRejection> {
    Span::current().record("item_id", item_id);
    let item = parse_item(payload)?;
    Span::current().record("detail", field::display(format_args!("Updating item -> {}", item.name)));
    Ok((StatusCode::OK, Json(ItemEchoResponse::new(Some(item_id), item))))
}

/// Acknowledge a delete; there is no stored state to remove
pub async fn delete_item(Path(item_id): Path<i64>) -> Json<ItemDeleteResponse> {
    Span::current()
        .record("item_id", item_id)
        .record("detail", "Deleting item");
    Json(ItemDeleteResponse {
        status: "deleted".to_string(),
        item_id,
    })
}
