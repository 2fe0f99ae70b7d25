// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the secrets demo service and checker

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or network IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Invalid scan pattern
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Unexpected failure inside a request handler
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;

/// Body returned for every unhandled failure.
///
/// Deliberately carries nothing from the underlying error.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: "Internal server error",
            timestamp: crate::api::iso_timestamp(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Error: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal()),
        )
            .into_response()
    }
}
