// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Secrets Demo
//!
//! A small HTTP service demonstrating safe handling of credentials supplied
//! through environment variables, plus a static checker that looks for
//! common secrets-management mistakes in the repository.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `checker`: secrets-hygiene checks used by the `security-check` binary
//! - `config`: configuration management
//! - `error`: error types
//! - `logging`: tracing subscriber setup
//! - `prelude`: commonly used types and traits

mod api;
mod checker;
mod config;
mod error;
mod logging;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, DatabaseConfig, Secrets, SecretsLoaded};

/// Application error and result type
pub use error::{AppError, ErrorResponse, Result};

/// HTTP API router and state
pub use api::{AppState, create_router, iso_timestamp, with_error_handling};

/// Security checker
pub use checker::{
    CheckReport, CheckerConfig, Finding, Level, SAFE_LOGGING_MARKER, SecurityCheck,
    SecurityReport, run_checks,
};

/// Tracing initialization shared by both binaries
pub use logging::setup_tracing;
