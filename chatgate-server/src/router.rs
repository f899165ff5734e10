use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::cors::cors_layer;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    api::router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
