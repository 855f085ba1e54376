// ABOUTME: HTTP route assembly for the weight tracking API
// ABOUTME: Merges per-surface routers and applies tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! HTTP routes
//!
//! Each surface owns a small router built in its own module; this module
//! merges them and applies the shared middleware stack.

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Password check endpoint
pub mod auth;
/// Materialized chart series endpoint
pub mod chart;
/// Liveness and readiness endpoints
pub mod health;
/// Weight record CRUD endpoints
pub mod records;
/// CSV/JSON import, export, and backup endpoints
pub mod transfer;

/// Build the full application router
#[must_use]
pub fn router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(records::RecordRoutes::routes(resources.clone()))
        .merge(chart::ChartRoutes::routes(resources.clone()))
        .merge(transfer::TransferRoutes::routes(resources.clone()))
        .merge(auth::AuthRoutes::routes(resources.clone()))
        .merge(health::HealthRoutes::routes(resources.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
