// ABOUTME: Centralized resource container for dependency injection across route handlers
// ABOUTME: One Arc-shared bundle of database handle, clock, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Server Resources Module
//!
//! Centralized resource container for dependency injection. Handlers receive
//! one `Arc<ServerResources>` instead of constructing their own database
//! handles or reading the wall clock, which keeps every collaborator
//! swappable in tests.

use crate::clock::Clock;
use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;
use std::sync::Arc;

/// Shared server resources handed to every route handler
#[derive(Clone)]
pub struct ServerResources {
    /// Record store handle
    pub database: Arc<Database>,
    /// Source of the current calendar day
    pub clock: Arc<dyn Clock>,
    /// Environment configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle the shared resources behind Arcs
    #[must_use]
    pub fn new(database: Database, clock: Arc<dyn Clock>, config: ServerConfig) -> Self {
        Self {
            database: Arc::new(database),
            clock,
            config: Arc::new(config),
        }
    }
}
