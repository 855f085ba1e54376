// ABOUTME: Import, export, and backup route handlers for bulk record transfer
// ABOUTME: CSV in/out, JSON migration import, and timestamped JSON snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Bulk transfer routes
//!
//! Import accepts CSV text or a JSON array; rows that fail to parse are
//! dropped before the store and the caller learns only the counts. Export
//! serves the whole history as a CSV attachment; backup writes a JSON
//! snapshot server-side.

use crate::database_plugins::DatabaseProvider;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::transfer;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// Bulk transfer routes
pub struct TransferRoutes;

impl TransferRoutes {
    /// Create all import/export/backup routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/import", post(Self::handle_import_csv))
            .route("/api/import/json", post(Self::handle_import_json))
            .route("/api/export", get(Self::handle_export))
            .route("/api/export/template", get(Self::handle_export_template))
            .route("/api/backup", get(Self::handle_backup))
            .with_state(resources)
    }

    /// Import records from CSV text in the request body
    async fn handle_import_csv(
        State(resources): State<Arc<ServerResources>>,
        body: String,
    ) -> Result<Response, AppError> {
        let records = transfer::parse_csv(&body);
        if records.is_empty() {
            return Err(AppError::invalid_input("no valid records to import"));
        }

        let summary = resources.database.import_records(&records).await?;
        info!(
            imported = summary.imported,
            attempted = summary.attempted,
            "CSV import finished"
        );

        Ok(Json(json!({
            "success": true,
            "imported": summary.imported,
            "attempted": summary.attempted,
        }))
        .into_response())
    }

    /// Import records from a JSON array (the client-migration path)
    async fn handle_import_json(
        State(resources): State<Arc<ServerResources>>,
        Json(rows): Json<Vec<Value>>,
    ) -> Result<Response, AppError> {
        let records = transfer::parse_json_records(&rows);
        if records.is_empty() {
            return Err(AppError::invalid_input("no valid records to import"));
        }

        let summary = resources.database.import_records(&records).await?;
        info!(
            imported = summary.imported,
            attempted = summary.attempted,
            "JSON import finished"
        );

        Ok(Json(json!({
            "success": true,
            "imported": summary.imported,
            "attempted": summary.attempted,
        }))
        .into_response())
    }

    /// Export all records as a CSV attachment
    async fn handle_export(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let records = resources.database.get_all_records().await?;
        let csv = transfer::to_csv(&records).map_err(|e| AppError::internal(e.to_string()))?;

        Ok((
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"weight_records.csv\"",
                ),
            ],
            csv,
        )
            .into_response())
    }

    /// Serve the sample CSV showing the import format
    async fn handle_export_template() -> Response {
        (
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"weight_records_template.csv\"",
                ),
            ],
            transfer::template_csv(),
        )
            .into_response()
    }

    /// Write a JSON snapshot of all records under the configured backup dir
    async fn handle_backup(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let records = resources.database.get_all_records().await?;
        let stamp = chrono::Local::now().format("%Y%m%d%H%M%S").to_string();

        let path = transfer::write_backup(&resources.config.backup_dir, &records, &stamp)
            .await
            .map_err(|e| AppError::internal(format!("backup failed: {e}")))?;
        info!(path = %path.display(), records = records.len(), "backup written");

        Ok(Json(json!({
            "success": true,
            "path": path.display().to_string(),
        }))
        .into_response())
    }
}
