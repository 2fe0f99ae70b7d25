// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use secrets_demo::{AppState, Config, create_router};
use std::sync::Arc;
use tower::ServiceExt;

const DB_PASSWORD_VALUE: &str = "pg-9f2c1e7a";
const API_KEY_VALUE: &str = "ak-51d0b3e8";
const JWT_SECRET_VALUE: &str = "jwt-77aa03c4";

fn make_state(vars: &'static [(&'static str, &'static str)]) -> Arc<AppState> {
    let config = Config::from_lookup(|name| {
        vars.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.to_string())
    });
    Arc::new(AppState::new(config))
}

fn state_with_all_secrets() -> Arc<AppState> {
    make_state(&[
        ("NODE_ENV", "staging"),
        ("DB_PASSWORD", DB_PASSWORD_VALUE),
        ("API_KEY", API_KEY_VALUE),
        ("JWT_SECRET", JWT_SECRET_VALUE),
        ("DB_HOST", "db.internal"),
    ])
}

async fn get(state: Arc<AppState>, uri: &str) -> (StatusCode, String) {
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get(uri).body(String::new()).unwrap())
        .await
        .unwrap();

    let status = resp.status();
    let body = String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap();

    (status, body)
}

fn assert_no_secret_values(body: &str) {
    for value in [DB_PASSWORD_VALUE, API_KEY_VALUE, JWT_SECRET_VALUE] {
        assert!(!body.contains(value), "response leaked a secret value: {body}");
    }
}

// --- /health endpoint ---

#[tokio::test]
async fn health_returns_ok_with_timestamp() {
    let (status, body) = get(make_state(&[]), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "OK");
    assert_eq!(health["environment"], "development");

    let timestamp = health["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn health_reports_configured_environment() {
    let (_, body) = get(state_with_all_secrets(), "/health").await;

    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["environment"], "staging");
}

// --- /api/status endpoint ---

#[tokio::test]
async fn status_does_not_expose_secrets() {
    let (status, body) = get(state_with_all_secrets(), "/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_no_secret_values(&body);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["database"]["status"], "connected");
    assert_eq!(json["database"]["host"], "db.internal");
    assert_eq!(json["database"]["database"], "ala_demo");
    assert_eq!(json["external_api"]["status"], "enabled");
    assert_eq!(json["external_api"]["endpoint"], "https://api.example.com");
    assert_eq!(
        json["secrets_loaded"],
        serde_json::json!({"db_password": true, "api_key": true, "jwt_secret": true})
    );
}

#[tokio::test]
async fn status_without_secrets_reports_disconnected() {
    let (status, body) = get(make_state(&[]), "/api/status").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["database"]["status"], "disconnected");
    assert_eq!(json["database"]["reason"], "No database password configured");
    assert!(json["database"].get("host").is_none());
    assert_eq!(json["external_api"]["status"], "disabled");
    assert_eq!(json["external_api"]["reason"], "No API key configured");
    assert_eq!(json["secrets_loaded"]["jwt_secret"], false);
}

// --- /api/config endpoint ---

#[tokio::test]
async fn config_does_not_expose_secrets() {
    let (status, body) = get(state_with_all_secrets(), "/api/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_no_secret_values(&body);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["app_name"], "ALA Secrets Demo");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["environment"], "staging");
    assert_eq!(
        json["features"],
        serde_json::json!({
            "database_enabled": true,
            "external_api_enabled": true,
            "auth_enabled": true
        })
    );
}

#[tokio::test]
async fn config_feature_flags_follow_secret_presence() {
    let (_, body) = get(make_state(&[("JWT_SECRET", JWT_SECRET_VALUE)]), "/api/config").await;

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["features"]["database_enabled"], false);
    assert_eq!(json["features"]["external_api_enabled"], false);
    assert_eq!(json["features"]["auth_enabled"], true);
}

// --- /api/insecure-example endpoint ---

#[tokio::test]
async fn insecure_example_has_warning() {
    let (status, body) = get(state_with_all_secrets(), "/api/insecure-example").await;

    assert_eq!(status, StatusCode::OK);
    assert_no_secret_values(&body);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["warning"].as_str().unwrap().contains("INSECURE"));
    assert_eq!(json["exposed_secrets"], serde_json::json!({}));
}

// --- 404 for unknown routes ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let (status, _) = get(make_state(&[]), "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
