// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! `/api/insecure-example`
//!
//! Documents the anti-pattern of echoing credentials in a response. The
//! `exposed_secrets` object is always empty.

use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

pub const INSECURE_WARNING: &str =
    "This endpoint demonstrates INSECURE practices - DO NOT USE IN PRODUCTION";

#[derive(Debug, Serialize)]
pub struct InsecureExampleResponse {
    pub warning: &'static str,
    pub exposed_secrets: BTreeMap<String, String>,
    pub message: &'static str,
}

/// GET /api/insecure-example
pub async fn insecure_example() -> Json<InsecureExampleResponse> {
    tracing::warn!("/api/insecure-example requested; returning warning only");

    Json(InsecureExampleResponse {
        warning: INSECURE_WARNING,
        exposed_secrets: BTreeMap::new(),
        message: "Secrets should never be exposed in API responses or logs",
    })
}
