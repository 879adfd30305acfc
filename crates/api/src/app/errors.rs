use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use prodapi_core::DomainError;

pub const MSG_READING_PRODUCT: &str = "Error reading product";
pub const MSG_CONVERT_ID: &str = "Unable to convert id";
pub const MSG_NOT_FOUND: &str = "Product not found";
pub const MSG_INTERNAL: &str = "Internal server error";

/// Translate a domain failure into its HTTP response.
///
/// Internal details are logged here and never reach the client.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Decode(_) => json_error(StatusCode::BAD_REQUEST, "bad_request", MSG_READING_PRODUCT),
        DomainError::Validation(reasons) => json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("Error validating product: {reasons}"),
        ),
        DomainError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, "invalid_id", MSG_CONVERT_ID),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", MSG_NOT_FOUND),
        DomainError::Internal(detail) => {
            tracing::error!(error = %detail, "internal error while handling product request");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", MSG_INTERNAL)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
