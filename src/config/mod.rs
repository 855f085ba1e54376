// ABOUTME: Configuration module grouping environment-driven runtime settings
// ABOUTME: All configuration comes from environment variables, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration management

/// Environment-based server configuration
pub mod environment;
