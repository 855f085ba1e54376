// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and output destinations from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Production logging configuration with structured output

use anyhow::Result;
use std::env;
use tracing::info;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread names
    pub include_thread: bool,
    /// Service name for startup logging
    pub service_name: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            service_name: env!("CARGO_PKG_NAME").into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| env!("CARGO_PKG_NAME").into()),
            environment,
        }
    }

    /// Install the global tracing subscriber described by this configuration
    ///
    /// # Errors
    ///
    /// Returns an error when the level filter does not parse or a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        // `level` already defaults from RUST_LOG, so it may carry either a
        // plain level or a full filter directive
        let filter = EnvFilter::try_new(&self.level)?;

        let base = fmt::layer()
            .with_target(true)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_names(self.include_thread);

        let registry = tracing_subscriber::registry().with(filter);
        match self.format {
            LogFormat::Json => registry.with(base.json()).try_init()?,
            LogFormat::Pretty => registry.with(base.pretty()).try_init()?,
            LogFormat::Compact => registry.with(base.compact()).try_init()?,
        }

        info!(
            service = %self.service_name,
            environment = %self.environment,
            format = ?self.format,
            "logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error when the configured filter does not parse or a global
/// subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
