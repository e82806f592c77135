// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /v1/queries and GET /health.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use switchyard_flow::extract_query;

use crate::server::GatewayState;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

/// POST /v1/queries
///
/// Accepts a request envelope, runs the dispatch flow, and returns the
/// `{route, answer}` record. A missing or empty query is a client error
/// answered before any external call; only an orchestration failure inside
/// the flow produces a 500, with a generic payload.
pub async fn post_queries(State(state): State<GatewayState>, Json(event): Json<Value>) -> Response {
    let request_id = uuid::Uuid::new_v4();

    let Some(query) = extract_query(&event) else {
        info!(%request_id, "request rejected: no usable query");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing 'query' parameter".to_string(),
            }),
        )
            .into_response();
    };

    match state.dispatcher.dispatch(&query).await {
        Ok(record) => {
            info!(%request_id, route = %record.route, "request dispatched");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => {
            error!(%request_id, error = %e, "flow execution failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "execution failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health
///
/// Returns health status of the gateway.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
