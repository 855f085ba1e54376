// ABOUTME: Login route checking the access password against the configured digest
// ABOUTME: Fails closed when no password hash is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Login route
//!
//! Single-user access control: one password, verified against the SHA-256
//! digest from configuration. The server keeps no session state; the client
//! remembers a successful login.

use crate::auth::verify_password;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

/// Login request body
#[derive(Deserialize)]
struct LoginRequest {
    password: String,
}

/// Login routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create the login route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/login", post(Self::handle_login))
            .with_state(resources)
    }

    /// Verify the access password
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<LoginRequest>,
    ) -> Result<Json<Value>, AppError> {
        let Some(expected) = resources.config.access_password_hash.as_deref() else {
            warn!("login attempt while ACCESS_PASSWORD_HASH is unset");
            return Err(AppError::auth_invalid("login is not configured"));
        };

        if verify_password(&request.password, expected) {
            Ok(Json(json!({ "success": true })))
        } else {
            Err(AppError::auth_invalid("invalid password"))
        }
    }
}
