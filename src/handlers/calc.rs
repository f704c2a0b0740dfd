use axum::{extract::Query, Json};
use tracing::{field, Span};

use crate::models::{CalcQuery, CalcResponse};

/// Sum two numbers
pub async fn sum(Query(CalcQuery { a, b }): Query<CalcQuery>) -> Json<CalcResponse> {
    let result = a + b;
    Span::current().record("detail", field::display(format_args!("Summing {} + {} = {}", a, b, result)));
    Json(CalcResponse { result })
}

/// Multiply two numbers
pub async fn multiply(Query(CalcQuery { a, b }): Query<CalcQuery>) -> Json<CalcResponse> {
    let result = a * b;
    Span::current().record("detail", field::display(format_args!("Multiplying {} * {} = {}", a, b, result)));
    Json(CalcResponse { result })
}
