// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the secrets demo
//!
//! Read-only status endpoints over the loaded configuration. No handler
//! returns a secret value; only presence flags leave the process.
//!
//! # Endpoints
//! - `GET /health` — health check
//! - `GET /api/status` — simulated dependency status
//! - `GET /api/config` — application metadata and feature flags
//! - `GET /api/insecure-example` — what not to do, minus the secrets

mod error_handling;
pub mod handlers;
mod state;

use axum::{Router, routing::get};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

pub use error_handling::with_error_handling;
pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/status", get(handlers::status_handler))
        .route("/api/config", get(handlers::config_handler))
        .route("/api/insecure-example", get(handlers::insecure_example))
        .with_state(state);

    with_error_handling(routes)
}

/// Current UTC time as RFC 3339 with millisecond precision, e.g.
/// `2025-01-01T12:00:00.000Z`
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
