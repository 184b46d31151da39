use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use validator::{Validate, ValidationErrors};

pub fn into_response(errors: ValidationErrors) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}

/// Rejects the request body with a 400 listing the failing fields.
pub fn validate<T: Validate>(payload: &T) -> Result<(), Response> {
    payload.validate().map_err(into_response)
}
