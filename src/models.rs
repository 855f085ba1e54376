// ABOUTME: Common data models for weight tracking records and import accounting
// ABOUTME: Enforces the one-record-per-date key and positive-weight invariants at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Core data models shared across the storage, charting, and HTTP layers.
//!
//! A [`WeightRecord`] is one measurement for one calendar date; the store
//! keeps at most one record per date and a later write replaces the earlier
//! one. Dates travel as ISO `YYYY-MM-DD` strings on the wire and are parsed
//! strictly, never coerced.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used everywhere a date crosses a process boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One recorded body-weight measurement (kilograms) for a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    /// Calendar date of the measurement, unique key
    pub date: NaiveDate,
    /// Measured weight in kilograms, strictly positive
    pub weight: f64,
}

impl WeightRecord {
    /// Create a record without validating the weight
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }

    /// Check the measurement invariant: a finite, strictly positive weight
    ///
    /// # Errors
    ///
    /// Returns [`AppError::invalid_value`] when the weight is zero, negative,
    /// NaN, or infinite.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(AppError::invalid_value(format!(
                "weight must be a positive number, got {}",
                self.weight
            )));
        }
        Ok(())
    }
}

/// Parse an ISO `YYYY-MM-DD` date string strictly
///
/// # Errors
///
/// Returns [`AppError::invalid_date`] when the string does not parse as a
/// real calendar date. Malformed dates are rejected, never defaulted.
pub fn parse_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|e| AppError::invalid_date(format!("{input:?}: {e}")))
}

/// Format a date the way it is stored and served
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Outcome of a bulk import: how many rows were written out of how many
/// reached the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Rows successfully written
    pub imported: usize,
    /// Rows the store attempted to write
    pub attempted: usize,
}
