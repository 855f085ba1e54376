// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, resource-container, and HTTP request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `tare`
//!
//! Common setup to reduce duplication across integration tests: an
//! in-memory record store, a resource container pinned to a fixed date, and
//! oneshot helpers for driving the router without a listening socket.

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::{Arc, Once};
use tare::auth::hash_password;
use tare::clock::FixedClock;
use tare::config::environment::ServerConfig;
use tare::database_plugins::factory::Database;
use tare::models::WeightRecord;
use tare::resources::ServerResources;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// The password whose digest the test configuration carries
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory record store setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Test configuration with login enabled and backups under `backup_dir`
pub fn test_config(backup_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        database_url: "sqlite::memory:".into(),
        backup_dir,
        access_password_hash: Some(hash_password(TEST_PASSWORD)),
    }
}

/// Resource container over `database` with today pinned to `today`
pub fn test_resources(
    database: Database,
    today: NaiveDate,
    backup_dir: PathBuf,
) -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        database,
        Arc::new(FixedClock::new(today)),
        test_config(backup_dir),
    ))
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Build a record from a date literal
pub fn record(day: &str, weight: f64) -> WeightRecord {
    WeightRecord::new(date(day), weight)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

fn parse_body(body: &[u8]) -> Value {
    if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(body).unwrap()
    }
}

/// GET a JSON endpoint
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, parse_body(&body))
}

/// GET an endpoint, returning the raw body as text
pub async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, String::from_utf8(body).unwrap())
}

/// POST a JSON body
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, parse_body(&body))
}

/// POST a plain-text body (CSV import)
pub async fn post_text(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, parse_body(&body))
}

/// DELETE an endpoint
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, parse_body(&body))
}
