// ABOUTME: Main library entry point for the Tare weight tracking service
// ABOUTME: Record store, chart series engine, and HTTP API for a single user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Tare
//!
//! A single-user service for recording daily body-weight measurements and
//! charting them over trailing windows (week, month, quarter, year).
//!
//! ## Architecture
//!
//! - **Record store**: one date-keyed table behind [`database_plugins`],
//!   SQLite by default, PostgreSQL behind a feature flag. Writes are keyed
//!   upserts, last write wins.
//! - **Series engine**: [`series`] densifies the sparse history into one
//!   value per calendar day, forward-filling gaps, with per-window label
//!   thinning.
//! - **HTTP API**: [`routes`] exposes record CRUD, the chart series, CSV and
//!   JSON import/export, backup snapshots, and the access-password check.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tare::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("listening on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Access password verification
pub mod auth;

/// Injectable source of the current calendar day
pub mod clock;

/// Configuration management
pub mod config;

/// Record store abstraction with pluggable backends
pub mod database_plugins;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Common data models
pub mod models;

/// Dependency-injection container for route handlers
pub mod resources;

/// `HTTP` routes for records, charts, transfer, and health
pub mod routes;

/// Chart series construction and trailing window policy
pub mod series;

/// CSV/JSON import, export, and backup boundary
pub mod transfer;
