// ABOUTME: Record store abstraction with pluggable SQLite and PostgreSQL backends
// ABOUTME: Defines the async contract every storage implementation must satisfy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Record store abstraction layer.
//!
//! All storage backends implement [`DatabaseProvider`] so the HTTP layer and
//! tests consume one interface. The store holds at most one record per
//! calendar date; writes are keyed upserts with last-write-wins semantics.
//! Every operation persists immediately, there is no caller-side cache, and
//! failures surface to the caller without internal retries.

use crate::models::{ImportSummary, WeightRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod factory;
pub mod sqlite;

#[cfg(feature = "postgresql")]
pub mod postgres;

/// Core record store trait
///
/// All database implementations must implement this trait to provide a
/// consistent interface to the application layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Open a connection pool for the given connection string
    async fn new(database_url: &str) -> Result<Self>
    where
        Self: Sized;

    /// Create the schema if it does not exist yet; safe to run repeatedly
    async fn migrate(&self) -> Result<()>;

    /// Insert or replace the record for its date key
    ///
    /// Returns whether a row was affected. Replaying the same record is
    /// idempotent; a different weight for the same date replaces the old row.
    async fn upsert_record(&self, record: &WeightRecord) -> Result<bool>;

    /// Remove the record for the given date
    ///
    /// Returns `false` when no record existed; absence is not an error.
    async fn delete_record(&self, date: NaiveDate) -> Result<bool>;

    /// All records ordered by date ascending
    async fn get_all_records(&self) -> Result<Vec<WeightRecord>>;

    /// The record with the maximum date, if any
    async fn get_latest_record(&self) -> Result<Option<WeightRecord>>;

    /// Upsert each record independently; one failing row does not abort the
    /// batch
    ///
    /// Rows are applied in slice order, so duplicate dates within one call
    /// deterministically resolve to the last occurrence.
    async fn import_records(&self, records: &[WeightRecord]) -> Result<ImportSummary>;

    /// Number of stored records
    async fn get_record_count(&self) -> Result<i64>;
}
