use crate::config::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "meraki-mcp",
        "version": env!("CARGO_PKG_VERSION"),
        "tools": state.mcp.registry().len(),
        "uptime_secs": (Utc::now() - state.started_at).num_seconds(),
    }))
}

/// One JSON-RPC message per request; notifications get 202 with no body
pub async fn mcp_message(State(state): State<Arc<AppState>>, body: String) -> Response {
    match state.mcp.handle_message(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
