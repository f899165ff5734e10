//! API Routes
//!
//! Liveness probe plus the two chat endpoints.

mod chat;
mod health;


use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chatgate_types::GatewayError;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/chat", post(chat::handle_chat))
        .route("/chat/conversation", post(chat::handle_conversation))
        .fallback(api_not_found)
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}

/// HTTP rendering of a `GatewayError`.
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.0.is_client_error() {
            tracing::debug!("[API] Rejected request: {}", self.0);
        }
        (status, Json(self.0.response_body())).into_response()
    }
}
