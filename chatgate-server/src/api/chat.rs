//! Chat completion handlers
//!
//! Bodies are taken as raw bytes so that absent, malformed or oversized
//! bodies are reported with the gateway's own JSON shape instead of axum's
//! plain-text extractor rejection.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::Json,
};
use chatgate_core::gateway::{self, request_parser};
use chatgate_types::{CompletionResult, GatewayError};

use super::ApiError;
use crate::state::AppState;

pub const BODY_TOO_LARGE: &str = "Request body too large";

pub async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CompletionResult>, ApiError> {
    let body = read_body(body)?;
    let request = request_parser::parse_chat_request(&body)?;
    let result = gateway::chat(state.client(), request).await?;
    Ok(Json(result))
}

pub async fn handle_conversation(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<CompletionResult>, ApiError> {
    let body = read_body(body)?;
    let request = request_parser::parse_conversation_request(&body)?;
    let result = gateway::conversation(state.client(), request).await?;
    Ok(Json(result))
}

fn read_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, GatewayError> {
    body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => GatewayError::payload_too_large(BODY_TOO_LARGE),
        _ => GatewayError::validation(request_parser::NO_JSON_DATA),
    })
}
