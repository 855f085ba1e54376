// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness is unconditional; readiness probes the record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Health check routes for service monitoring

use crate::database_plugins::DatabaseProvider;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    /// Liveness: the process is up
    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    /// Readiness: the record store answers a trivial query
    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<Value>, AppError> {
        let records = resources.database.get_record_count().await?;
        Ok(Json(json!({
            "status": "ready",
            "records": records,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })))
    }
}
