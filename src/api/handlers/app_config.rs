// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;

use crate::api::AppState;

pub const APP_NAME: &str = "ALA Secrets Demo";

/// Features switched on by the presence of their credential
#[derive(Debug, Serialize)]
pub struct FeatureFlags {
    pub database_enabled: bool,
    pub external_api_enabled: bool,
    pub auth_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub app_name: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub features: FeatureFlags,
}

/// GET /api/config
pub async fn config_handler(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    let loaded = state.config.secrets.loaded();

    Json(ConfigResponse {
        app_name: APP_NAME,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        features: FeatureFlags {
            database_enabled: loaded.db_password,
            external_api_enabled: loaded.api_key,
            auth_enabled: loaded.jwt_secret,
        },
    })
}
