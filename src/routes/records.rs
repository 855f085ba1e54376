// ABOUTME: Weight record CRUD route handlers
// ABOUTME: Upsert by date, list ascending, latest lookup, delete by date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Weight record routes
//!
//! One resource, keyed by calendar date. Saving an existing date replaces
//! the stored weight; deleting an absent date succeeds with `removed:false`.

use crate::database_plugins::DatabaseProvider;
use crate::errors::AppError;
use crate::models::{parse_date, WeightRecord};
use crate::resources::ServerResources;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Query parameters for listing records
#[derive(Deserialize, Default)]
struct ListQuery {
    /// When true, return only the record with the maximum date
    #[serde(default)]
    latest: Option<bool>,
}

/// Query parameters for deleting a record
#[derive(Deserialize, Default)]
struct DeleteQuery {
    #[serde(default)]
    date: Option<String>,
}

/// Body of a save request; the date arrives as text so malformed dates are
/// rejected with a precise error instead of a generic body rejection
#[derive(Deserialize)]
struct SaveRecordRequest {
    date: String,
    weight: f64,
}

/// Weight record routes
pub struct RecordRoutes;

impl RecordRoutes {
    /// Create all weight record routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/weight-records",
                get(Self::handle_list)
                    .post(Self::handle_save)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// List all records ascending, or just the latest with `?latest=true`
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        if params.latest.unwrap_or(false) {
            let record = resources.database.get_latest_record().await?;
            return Ok(Json(record).into_response());
        }

        let records = resources.database.get_all_records().await?;
        Ok(Json(records).into_response())
    }

    /// Insert or replace the record for a date
    async fn handle_save(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SaveRecordRequest>,
    ) -> Result<Response, AppError> {
        let date = parse_date(&request.date)?;
        let record = WeightRecord::new(date, request.weight);
        record.validate()?;

        resources.database.upsert_record(&record).await?;
        info!(date = %record.date, weight = record.weight, "record saved");

        Ok(Json(json!({ "success": true })).into_response())
    }

    /// Delete the record for a date; absence is not an error
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<DeleteQuery>,
    ) -> Result<Response, AppError> {
        let date_param = params
            .date
            .ok_or_else(|| AppError::invalid_input("date query parameter is required"))?;
        let date = parse_date(&date_param)?;

        let removed = resources.database.delete_record(date).await?;
        if removed {
            info!(date = %date, "record deleted");
        }

        Ok(Json(json!({ "success": true, "removed": removed })).into_response())
    }
}
