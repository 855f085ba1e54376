// ABOUTME: Chart series route handler materializing trailing windows on demand
// ABOUTME: Returns the dense series plus the raw records for marker emphasis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Chart series route
//!
//! The window is re-anchored at today on every call, with today taken from
//! the injected clock. Alongside the dense labels/values the response
//! carries the raw records (so the client can emphasize days that hold real
//! measurements rather than forward-filled ones) and the per-window default
//! for drawing markers.

use crate::database_plugins::DatabaseProvider;
use crate::errors::AppError;
use crate::models::WeightRecord;
use crate::resources::ServerResources;
use crate::series::{build_series, TrailingWindow};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for the chart endpoint
#[derive(Deserialize, Default)]
struct ChartQuery {
    /// Window selector; the original UI opens on the month view
    #[serde(default)]
    window: Option<String>,
}

/// Chart payload consumed by the presentation layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ChartResponse {
    /// Window the series covers
    pub window: TrailingWindow,
    /// One label per day, thinned per the window policy
    pub labels: Vec<String>,
    /// One value per day, forward-filled
    pub values: Vec<f64>,
    /// The raw records, for rendering real data points distinctly
    pub records: Vec<WeightRecord>,
    /// Whether per-day markers should be drawn by default
    pub show_markers: bool,
}

/// Chart series routes
pub struct ChartRoutes;

impl ChartRoutes {
    /// Create the chart route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/chart", get(Self::handle_chart))
            .with_state(resources)
    }

    /// Materialize the series for the requested window ending today
    async fn handle_chart(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ChartQuery>,
    ) -> Result<Json<ChartResponse>, AppError> {
        let window = params
            .window
            .as_deref()
            .unwrap_or("month")
            .parse::<TrailingWindow>()?;

        let records = resources.database.get_all_records().await?;
        let today = resources.clock.today();
        let series = build_series(&records, window, today);

        Ok(Json(ChartResponse {
            window,
            labels: series.labels,
            values: series.values,
            records,
            show_markers: window.show_markers_default(),
        }))
    }
}
