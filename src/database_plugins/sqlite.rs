// ABOUTME: SQLite implementation of the record store contract
// ABOUTME: Single weight_records table keyed by ISO date text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! SQLite record store implementation
//!
//! The default backend: an embedded file database (or `sqlite::memory:` in
//! tests) holding the single `weight_records` table.

use super::DatabaseProvider;
use crate::models::{format_date, ImportSummary, WeightRecord, DATE_FORMAT};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::warn;

/// SQLite record store
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

fn row_to_record(row: &SqliteRow) -> Result<WeightRecord> {
    let date_text: String = row.try_get("date")?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|e| anyhow!("corrupt date {date_text:?} in weight_records: {e}"))?;
    let weight: f64 = row.try_get("weight")?;
    Ok(WeightRecord::new(date, weight))
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;
        Ok(Self { pool })
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weight_records (
                date TEXT PRIMARY KEY,
                weight REAL NOT NULL,
                created_at TEXT DEFAULT CURRENT_TIMESTAMP,
                updated_at TEXT DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn upsert_record(&self, record: &WeightRecord) -> Result<bool> {
        let result = sqlx::query(
            "INSERT OR REPLACE INTO weight_records (date, weight) VALUES (?1, ?2)",
        )
        .bind(format_date(record.date))
        .bind(record.weight)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_record(&self, date: NaiveDate) -> Result<bool> {
        let result = sqlx::query("DELETE FROM weight_records WHERE date = ?1")
            .bind(format_date(date))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_all_records(&self) -> Result<Vec<WeightRecord>> {
        let rows = sqlx::query("SELECT date, weight FROM weight_records ORDER BY date")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_record).collect()
    }

    async fn get_latest_record(&self) -> Result<Option<WeightRecord>> {
        let row = sqlx::query("SELECT date, weight FROM weight_records ORDER BY date DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn import_records(&self, records: &[WeightRecord]) -> Result<ImportSummary> {
        let mut imported = 0;

        for record in records {
            match self.upsert_record(record).await {
                Ok(true) => imported += 1,
                Ok(false) => {}
                Err(e) => warn!(date = %record.date, "skipping record that failed to import: {e}"),
            }
        }

        Ok(ImportSummary {
            imported,
            attempted: records.len(),
        })
    }

    async fn get_record_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM weight_records")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("count")?)
    }
}
