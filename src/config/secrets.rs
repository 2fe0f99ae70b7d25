// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Secret values loaded from the environment
//!
//! Values are wrapped in [`SecretString`] so they are redacted from
//! `Debug` output. Outside this module only their presence is observable.

use secrecy::SecretString;
use serde::Serialize;

use super::env_vars;

/// The three credentials the service expects
#[derive(Debug, Clone, Default)]
pub struct Secrets {
    db_password: Option<SecretString>,
    api_key: Option<SecretString>,
    jwt_secret: Option<SecretString>,
}

/// Presence flags for each secret, safe to serialize and log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecretsLoaded {
    pub db_password: bool,
    pub api_key: bool,
    pub jwt_secret: bool,
}

impl Secrets {
    pub fn new(
        db_password: Option<String>,
        api_key: Option<String>,
        jwt_secret: Option<String>,
    ) -> Self {
        Secrets {
            db_password: db_password.map(SecretString::from),
            api_key: api_key.map(SecretString::from),
            jwt_secret: jwt_secret.map(SecretString::from),
        }
    }

    pub fn loaded(&self) -> SecretsLoaded {
        SecretsLoaded {
            db_password: self.db_password.is_some(),
            api_key: self.api_key.is_some(),
            jwt_secret: self.jwt_secret.is_some(),
        }
    }

    /// Names of the variables that were not provided, in declaration order
    pub fn missing(&self) -> Vec<&'static str> {
        let loaded = self.loaded();
        [
            (env_vars::DB_PASSWORD, loaded.db_password),
            (env_vars::API_KEY, loaded.api_key),
            (env_vars::JWT_SECRET, loaded.jwt_secret),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_debug_output_is_redacted() {
        let secrets = Secrets::new(Some("pg-value-123".to_string()), None, None);
        let debug = format!("{:?}", secrets);
        assert!(!debug.contains("pg-value-123"));
    }

    #[test]
    fn test_value_is_kept_behind_expose_secret() {
        let secrets = Secrets::new(None, Some("sk-value-456".to_string()), None);
        let exposed = secrets.api_key.as_ref().map(|s| s.expose_secret().to_string());
        assert_eq!(exposed.as_deref(), Some("sk-value-456"));
    }

    #[test]
    fn test_missing_lists_absent_names_in_order() {
        let secrets = Secrets::new(None, Some("x".to_string()), None);
        assert_eq!(secrets.missing(), vec!["DB_PASSWORD", "JWT_SECRET"]);
        assert!(Secrets::new(Some("a".into()), Some("b".into()), Some("c".into()))
            .missing()
            .is_empty());
    }

    #[test]
    fn test_loaded_serializes_booleans_only() {
        let secrets = Secrets::new(Some("db-value".into()), None, Some("jwt-value".into()));
        let json = serde_json::to_value(secrets.loaded()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"db_password": true, "api_key": false, "jwt_secret": true})
        );
    }
}
