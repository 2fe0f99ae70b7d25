// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! `/api/status`: simulated dependency checks driven by secret presence

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::api::AppState;
use crate::config::{Config, SecretsLoaded};

/// Simulated database reachability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected { host: String, database: String },
    Disconnected { reason: String },
}

/// Simulated external API reachability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiStatus {
    Enabled { endpoint: String },
    Disabled { reason: String },
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub database: DatabaseStatus,
    pub external_api: ApiStatus,
    pub secrets_loaded: SecretsLoaded,
}

impl DatabaseStatus {
    fn from_config(config: &Config) -> Self {
        if !config.secrets.loaded().db_password {
            return DatabaseStatus::Disconnected {
                reason: "No database password configured".to_string(),
            };
        }
        DatabaseStatus::Connected {
            host: config.database.host.clone(),
            database: config.database.name.clone(),
        }
    }
}

impl ApiStatus {
    fn from_config(config: &Config) -> Self {
        if !config.secrets.loaded().api_key {
            return ApiStatus::Disabled {
                reason: "No API key configured".to_string(),
            };
        }
        ApiStatus::Enabled {
            endpoint: config.api_endpoint.clone(),
        }
    }
}

/// GET /api/status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let config = &state.config;
    tracing::debug!("/api/status requested");

    Json(StatusResponse {
        database: DatabaseStatus::from_config(config),
        external_api: ApiStatus::from_config(config),
        secrets_loaded: config.secrets.loaded(),
    })
}
