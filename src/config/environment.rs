// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, defaults, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration management for production deployment

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::warn;

/// Default HTTP port when `HTTP_PORT` is unset
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default SQLite database location when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:tare.db";

/// Default directory for backup snapshots when `BACKUP_DIR` is unset
pub const DEFAULT_BACKUP_DIR: &str = "backups";

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP API listens on
    pub http_port: u16,
    /// Connection string for the record store (`sqlite:` or `postgresql://`)
    pub database_url: String,
    /// Directory where backup snapshots are written
    pub backup_dir: PathBuf,
    /// Hex-encoded SHA-256 digest of the access password; login is disabled
    /// (fails closed) when unset
    pub access_password_hash: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when `HTTP_PORT` is not a number or
    /// `ACCESS_PASSWORD_HASH` is not a 64-character hex string.
    pub fn from_env() -> Result<Self> {
        let http_port = env::var("HTTP_PORT")
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .context("HTTP_PORT must be a port number")?
            .unwrap_or(DEFAULT_HTTP_PORT);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        let backup_dir = env::var("BACKUP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BACKUP_DIR));

        let access_password_hash = match env::var("ACCESS_PASSWORD_HASH") {
            Ok(hash) if !hash.is_empty() => {
                if hash.len() != 64 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
                    bail!("ACCESS_PASSWORD_HASH must be a 64-character hex SHA-256 digest");
                }
                Some(hash.to_lowercase())
            }
            _ => {
                warn!("ACCESS_PASSWORD_HASH not set; login requests will be rejected");
                None
            }
        };

        Ok(Self {
            http_port,
            database_url,
            backup_dir,
            access_password_hash,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} database_url={} backup_dir={} login={}",
            self.http_port,
            self.database_url,
            self.backup_dir.display(),
            if self.access_password_hash.is_some() {
                "enabled"
            } else {
                "disabled"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_masks_nothing_sensitive() {
        let config = ServerConfig {
            http_port: 9000,
            database_url: "sqlite::memory:".into(),
            backup_dir: PathBuf::from("backups"),
            access_password_hash: Some("ab".repeat(32)),
        };
        let summary = config.summary();
        assert!(summary.contains("http_port=9000"));
        assert!(summary.contains("login=enabled"));
        assert!(!summary.contains(&"ab".repeat(32)));
    }
}
