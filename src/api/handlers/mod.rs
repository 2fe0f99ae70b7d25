// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod app_config;
mod health;
mod insecure;
mod status;

pub use app_config::config_handler;
pub use health::health_check;
pub use insecure::insecure_example;
pub use status::status_handler;
