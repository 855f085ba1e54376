// ABOUTME: PostgreSQL implementation of the record store contract
// ABOUTME: Mirrors the SQLite backend with ON CONFLICT upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! PostgreSQL record store implementation
//!
//! Enabled with the `postgresql` feature for deployments backed by a remote
//! relational store rather than an embedded file.

use super::DatabaseProvider;
use crate::models::{format_date, ImportSummary, WeightRecord, DATE_FORMAT};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::warn;

/// PostgreSQL record store
#[derive(Clone)]
pub struct PostgresDatabase {
    pool: PgPool,
}

fn row_to_record(row: &PgRow) -> Result<WeightRecord> {
    let date_text: String = row.try_get("date")?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
        .map_err(|e| anyhow!("corrupt date {date_text:?} in weight_records: {e}"))?;
    let weight: f64 = row.try_get("weight")?;
    Ok(WeightRecord::new(date, weight))
}

#[async_trait]
impl DatabaseProvider for PostgresDatabase {
    async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS weight_records (
                date TEXT PRIMARY KEY,
                weight DOUBLE PRECISION NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn upsert_record(&self, record: &WeightRecord) -> Result<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO weight_records (date, weight) VALUES ($1, $2)
            ON CONFLICT (date)
            DO UPDATE SET weight = EXCLUDED.weight, updated_at = NOW()
            ",
        )
        .bind(format_date(record.date))
        .bind(record.weight)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_record(&self, date: NaiveDate) -> Result<bool> {
        let result = sqlx::query("DELETE FROM weight_records WHERE date = $1")
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
