// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Last-resort error handling for the HTTP layer
//!
//! A panicking handler is turned into the same generic 500 response that
//! [`AppError`] produces. The panic payload is logged, never returned.

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;

use crate::error::AppError;

/// Wraps every route of `router` with the panic-catching layer
pub fn with_error_handling(router: Router) -> Router {
    router.layer(middleware::from_fn(catch_panic))
}

async fn catch_panic(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!("Handler for {} panicked", path);
            AppError::Internal(detail).into_response()
        }
    }
}
