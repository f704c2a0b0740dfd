//! Item body validation, independent of the HTTP layer.

use crate::models::{FieldError, FieldErrorKind, Item};
use serde_json::{Map, Value};

/// Validate a decoded JSON body as an [`Item`].
///
/// Every failing field is reported, not just the first one. Unknown fields
/// are ignored.
pub fn validate_item(body: &Value) -> Result<Item, Vec<FieldError>> {
    let Some(fields) = body.as_object() else {
        return Err(vec![FieldError::new(
            &["body"],
            "Input should be a valid dictionary",
            FieldErrorKind::ModelType,
        )]);
    };

    let name = required(fields, "name", string_value);
    let description = optional(fields, "description", string_value);
    let price = required(fields, "price", number_value);
    let tax = optional(fields, "tax", number_value);

    match (name, description, price, tax) {
        (Ok(name), Ok(description), Ok(price), Ok(tax)) => Ok(Item {
            name,
            description,
            price,
            tax,
        }),
        (name, description, price, tax) => Err([
            name.err(),
            description.err(),
            price.err(),
            tax.err(),
        ]
        .into_iter()
        .flatten()
        .collect()),
    }
}

fn required<T>(
    fields: &Map<String, Value>,
    key: &str,
    parse: fn(&str, &Value) -> Result<T, FieldError>,
) -> Result<T, FieldError> {
    match fields.get(key) {
        Some(value) => parse(key, value),
        None => Err(FieldError::new(
            &["body", key],
            "Field required",
            FieldErrorKind::Missing,
        )),
    }
}

fn optional<T>(
    fields: &Map<String, Value>,
    key: &str,
    parse: fn(&str, &Value) -> Result<T, FieldError>,
) -> Result<Option<T>, FieldError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse(key, value).map(Some),
    }
}

fn string_value(key: &str, value: &Value) -> Result<String, FieldError> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        FieldError::new(
            &["body", key],
            "Input should be a valid string",
            FieldErrorKind::StringType,
        )
    })
}

fn number_value(key: &str, value: &Value) -> Result<f64, FieldError> {
    value.as_f64().ok_or_else(|| {
        FieldError::new(
            &["body", key],
            "Input should be a valid number",
            FieldErrorKind::FloatType,
        )
    })
}
