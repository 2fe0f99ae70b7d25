// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use secrets_demo::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, Secrets, SecretsLoaded};
pub use crate::error::{AppError, Result};

// HTTP API
pub use crate::api::{AppState, create_router};

// Checker
pub use crate::checker::{CheckReport, CheckerConfig, Finding, Level, SecurityReport, run_checks};
