// ABOUTME: Database factory and provider wrapper for multi-backend support
// ABOUTME: Detects the backend from the connection string and delegates the store contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Database factory for creating record store providers
//!
//! Detects the database type from the connection string, opens the pool, and
//! runs the idempotent schema migration once, at construction time. Nothing
//! downstream performs lazy initialization.

use super::DatabaseProvider;
use crate::models::{ImportSummary, WeightRecord};
use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

#[cfg(feature = "postgresql")]
use super::postgres::PostgresDatabase;
use super::sqlite::SqliteDatabase;

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Embedded file-based backend, the default
    SQLite,
    /// Client-server backend behind the `postgresql` feature
    PostgreSQL,
}

/// Detect the backend from a connection string
///
/// # Errors
///
/// Returns an error for schemes that are neither SQLite nor PostgreSQL.
pub fn detect_database_type(database_url: &str) -> Result<DatabaseType> {
    if database_url.starts_with("sqlite:") {
        return Ok(DatabaseType::SQLite);
    }
    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        return Ok(DatabaseType::PostgreSQL);
    }
    bail!("unsupported database URL scheme: {database_url}")
}

/// Record store instance that delegates to the configured backend
#[derive(Clone)]
pub enum Database {
    /// SQLite backend
    SQLite(SqliteDatabase),
    /// PostgreSQL backend
    #[cfg(feature = "postgresql")]
    PostgreSQL(PostgresDatabase),
}

impl Database {
    /// Connect to the store named by the URL and ensure its schema exists
    ///
    /// # Errors
    ///
    /// Returns an error when the URL scheme is unsupported, the scheme names
    /// a backend this build does not include, or the connection/migration
    /// fails.
    pub async fn new(database_url: &str) -> Result<Self> {
        let db = match detect_database_type(database_url)? {
            DatabaseType::SQLite => {
                let db = SqliteDatabase::new(database_url).await?;
                Self::SQLite(db)
            }
            DatabaseType::PostgreSQL => {
                #[cfg(feature = "postgresql")]
                {
                    let db = PostgresDatabase::new(database_url).await?;
                    Self::PostgreSQL(db)
                }
                #[cfg(not(feature = "postgresql"))]
                {
                    bail!("PostgreSQL support not compiled in; rebuild with --features postgresql")
                }
            }
        };

        db.migrate().await?;
        info!("database ready: {}", db.backend_info());
        Ok(db)
    }

    /// Descriptive string for the active backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite",
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(_) => "PostgreSQL",
        }
    }
}

#[async_trait]
impl DatabaseProvider for Database {
    async fn new(database_url: &str) -> Result<Self> {
        Self::new(database_url).await
    }

    async fn migrate(&self) -> Result<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.migrate().await,
        }
    }

    async fn upsert_record(&self, record: &WeightRecord) -> Result<bool> {
        match self {
            Self::SQLite(db) => db.upsert_record(record).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.upsert_record(record).await,
        }
    }

    async fn delete_record(&self, date: NaiveDate) -> Result<bool> {
        match self {
            Self::SQLite(db) => db.delete_record(date).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.delete_record(date).await,
        }
    }

    async fn get_all_records(&self) -> Result<Vec<WeightRecord>> {
        match self {
            Self::SQLite(db) => db.get_all_records().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.get_all_records().await,
        }
    }

    async fn get_latest_record(&self) -> Result<Option<WeightRecord>> {
        match self {
            Self::SQLite(db) => db.get_latest_record().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.get_latest_record().await,
        }
    }

    async fn import_records(&self, records: &[WeightRecord]) -> Result<ImportSummary> {
        match self {
            Self::SQLite(db) => db.import_records(records).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.import_records(records).await,
        }
    }

    async fn get_record_count(&self) -> Result<i64> {
        match self {
            Self::SQLite(db) => db.get_record_count().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.get_record_count().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_database_type() {
        assert_eq!(
            detect_database_type("sqlite::memory:").unwrap(),
            DatabaseType::SQLite
        );
        assert_eq!(
            detect_database_type("sqlite:tare.db").unwrap(),
            DatabaseType::SQLite
        );
        assert_eq!(
            detect_database_type("postgresql://localhost/tare").unwrap(),
            DatabaseType::PostgreSQL
        );
        assert!(detect_database_type("mysql://localhost/tare").is_err());
    }
}
