//! Health check reporting the mock data setup

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{MethodRouter, get};
use serde::Serialize;
use tokio::sync::watch;
use utoipa::ToSchema;

use crate::core::config::MockConfig;

#[derive(Clone)]
pub struct HealthState {
    mock_config: MockConfig,
    shutdown_rx: watch::Receiver<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok`, or `shutting_down` once a stop signal arrived
    pub status: &'static str,
    pub version: &'static str,
    /// `seeded` when every request replays the same data, else `random`
    pub data: &'static str,
    pub traders_count: usize,
    pub trades_count: usize,
}

/// `GET` handler with its state attached, ready to mount
pub fn route(mock_config: MockConfig, shutdown_rx: watch::Receiver<bool>) -> MethodRouter {
    get(health).with_state(HealthState {
        mock_config,
        shutdown_rx,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "health",
    responses(
        (status = 200, description = "Serving mock data", body = HealthResponse),
        (status = 503, description = "Shutting down", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let shutting_down = *state.shutdown_rx.borrow();
    let (code, status) = if shutting_down {
        (StatusCode::SERVICE_UNAVAILABLE, "shutting_down")
    } else {
        (StatusCode::OK, "ok")
    };

    let mock = &state.mock_config;
    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            data: if mock.seed.is_some() { "seeded" } else { "random" },
            traders_count: mock.traders_count,
            trades_count: mock.trades_count,
        }),
    )
}
