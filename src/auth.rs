// ABOUTME: Access password verification against a configured SHA-256 digest
// ABOUTME: Constant-time comparison, session state stays with the client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Password check for the single-user deployment.
//!
//! The server never stores the password, only the hex SHA-256 digest from
//! configuration. The comparison runs in constant time regardless of where
//! the digests diverge.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Hex SHA-256 digest of a password, as stored in configuration
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Check a password attempt against the configured hex digest
///
/// An undecodable or wrong-length digest fails closed.
#[must_use]
pub fn verify_password(password: &str, expected_hex: &str) -> bool {
    let digest = Sha256::digest(password.as_bytes());
    let Ok(expected) = hex::decode(expected_hex) else {
        return false;
    };
    if expected.len() != digest.len() {
        return false;
    }
    digest.as_slice().ct_eq(&expected).into()
}
