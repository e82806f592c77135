// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use switchyard_core::SwitchyardError;
use switchyard_flow::Dispatcher;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Shared state for axum request handlers.
///
/// Holds only stateless shared handles; cloning is cheap and the same
/// state serves every request.
#[derive(Clone)]
pub struct GatewayState {
    /// The dispatch flow, shared across requests.
    pub dispatcher: Arc<Dispatcher>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

impl GatewayState {
    /// Create gateway state around a dispatcher.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            start_time: Instant::now(),
        }
    }
}

/// Gateway server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the gateway router.
///
/// Exposed separately from [`start_server`] so tests can drive handlers
/// without binding a socket.
pub fn app(state: GatewayState) -> Router {
    Router::new()
        .route("/v1/queries", post(handlers::post_queries))
        .route("/health", get(handlers::get_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server.
///
/// Binds to the configured host:port and serves:
/// - POST /v1/queries
/// - GET /health
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), SwitchyardError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SwitchyardError::Gateway {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app(state))
        .await
        .map_err(|e| SwitchyardError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
