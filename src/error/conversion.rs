/**
 * Error Conversion
 *
 * Converts `AppError` into an HTTP response at the handler boundary.
 *
 * # Response Format
 *
 * Every error becomes a JSON body of the form:
 * ```json
 * { "message": "Unauthorized." }
 * ```
 * with the status code taken from `AppError::status_code()`. Server-side
 * failures are logged with their detail before the opaque body is sent.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        } else {
            tracing::debug!("request rejected: {self}");
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}
