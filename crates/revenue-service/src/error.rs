//! HTTP mapping for `RevenueError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use revenue_core::error::{ClientCode, RevenueError};

/// Handler error: renders as `{"error":{"code","message"}}`.
#[derive(Debug)]
pub struct ApiError(pub RevenueError);

impl From<RevenueError> for ApiError {
    fn from(e: RevenueError) -> Self {
        Self(e)
    }
}

fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::InvalidConfig | ClientCode::UnsupportedVersion | ClientCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let message = match &self.0 {
            RevenueError::BadRequest(msg) => msg.clone(),
            other => {
                tracing::error!(error = %other, "request failed");
                "internal error".to_string()
            }
        };
        let body = json!({
            "error": {
                "code": code.as_str(),
                "message": message,
            }
        });
        (status_for(code), Json(body)).into_response()
    }
}
