//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roomtemp_domain::error::{RoomTempError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps [`RoomTempError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RoomTempError);

impl From<RoomTempError> for ApiError {
    fn from(err: RoomTempError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            RoomTempError::Validation(_) => StatusCode::BAD_REQUEST,
            RoomTempError::Conflict(_) => StatusCode::CONFLICT,
            RoomTempError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            RoomTempError::Validation(err) => err.to_string(),
            RoomTempError::Conflict(err) => err.to_string(),
            RoomTempError::Storage(err) => {
                tracing::error!(error = %err, source = ?err.source(), "storage error");
                "internal server error".to_string()
            }
        };

        error_response(status, message)
    }
}

/// Render `{"message": ...}` with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

/// Give a JSON body to error responses produced outside the handlers, such
/// as timeouts and method rejections, which otherwise arrive empty.
///
/// Responses that already carry a `Content-Type` are passed through.
#[allow(clippy::unused_async)]
pub(crate) async fn json_error_body(response: Response) -> Response {
    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    if !is_error || response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let message = status.canonical_reason().unwrap_or("request failed");
    let (mut parts, _) = response.into_parts();
    let (json_parts, body) = error_response(status, message).into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(json_parts.headers);
    Response::from_parts(parts, body)
}
