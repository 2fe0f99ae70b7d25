// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the secrets demo
//!
//! Loads configuration from environment variables.
//! The environment is read once; everything else receives a `Config`.

mod secrets;


pub use secrets::{Secrets, SecretsLoaded};

/// Default configuration values
pub mod defaults {
    pub const BIND_HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
    pub const ENVIRONMENT: &str = "development";
    pub const DB_HOST: &str = "localhost";
    pub const DB_NAME: &str = "ala_demo";
    pub const API_ENDPOINT: &str = "https://api.example.com";
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const NODE_ENV: &str = "NODE_ENV";
    pub const DB_PASSWORD: &str = "DB_PASSWORD";
    pub const API_KEY: &str = "API_KEY";
    pub const JWT_SECRET: &str = "JWT_SECRET";
    pub const DB_HOST: &str = "DB_HOST";
    pub const DB_NAME: &str = "DB_NAME";
    pub const API_ENDPOINT: &str = "API_ENDPOINT";
}

/// Non-secret database connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            host: defaults::DB_HOST.to_string(),
            name: defaults::DB_NAME.to_string(),
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub database: DatabaseConfig,
    pub api_endpoint: String,
    pub secrets: Secrets,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: defaults::PORT,
            environment: defaults::ENVIRONMENT.to_string(),
            database: DatabaseConfig::default(),
            api_endpoint: defaults::API_ENDPOINT.to_string(),
            secrets: Secrets::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// Does not read `.env`; the service loads it in `main` before this is
    /// called, while the checker must only see real runtime variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup
    ///
    /// Empty values are treated the same as unset ones. Whitespace is a
    /// value like any other.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let port = match var(env_vars::PORT) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to parse PORT '{}': {}. Using {}.",
                    raw,
                    e,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        let environment =
            var(env_vars::NODE_ENV).unwrap_or_else(|| defaults::ENVIRONMENT.to_string());

        let database = DatabaseConfig {
            host: var(env_vars::DB_HOST).unwrap_or_else(|| defaults::DB_HOST.to_string()),
            name: var(env_vars::DB_NAME).unwrap_or_else(|| defaults::DB_NAME.to_string()),
        };

        let api_endpoint =
            var(env_vars::API_ENDPOINT).unwrap_or_else(|| defaults::API_ENDPOINT.to_string());

        let secrets = Secrets::new(
            var(env_vars::DB_PASSWORD),
            var(env_vars::API_KEY),
            var(env_vars::JWT_SECRET),
        );

        Config {
            port,
            environment,
            database,
            api_endpoint,
            secrets,
        }
    }

    /// Address the HTTP server binds to
    pub fn server_addr(&self) -> String {
        format!("{}:{}", defaults::BIND_HOST, self.port)
    }
}
