// ABOUTME: Trailing window definitions with per-window label formatting and thinning rules
// ABOUTME: Four fixed spans (7/30/90/365 days), always right-anchored at today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Trailing window policy.
//!
//! A window is a span of calendar days ending today. The policy decides how
//! long each window is, which days carry a visible axis label (dense windows
//! thin their labels to stay legible), and whether the chart should draw
//! per-day markers by default.

use crate::errors::AppError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trailing span of calendar days ending today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingWindow {
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// Last 90 days
    Quarter,
    /// Last 365 days
    Year,
}

impl TrailingWindow {
    /// All supported windows, in ascending length
    pub const ALL: [Self; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// Number of calendar days the window spans
    #[must_use]
    pub const fn length_days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// First day of the window ending on `today` (inclusive on both ends)
    #[must_use]
    pub fn start_for(self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.length_days() - 1)
    }

    /// Axis label for one day of this window; empty when the policy thins
    /// the label away
    ///
    /// The week view names every weekday. Month and quarter views label days
    /// 1, 6, 11, 16, 21, 26, 31 of each month; the year view labels only the
    /// 1st and 15th.
    #[must_use]
    pub fn label_for(self, day: NaiveDate) -> String {
        match self {
            Self::Week => day.format("%a").to_string(),
            Self::Month | Self::Quarter => {
                if day.day() % 5 == 1 {
                    day.format("%m-%d").to_string()
                } else {
                    String::new()
                }
            }
            Self::Year => {
                if day.day() == 1 || day.day() == 15 {
                    day.format("%m-%d").to_string()
                } else {
                    String::new()
                }
            }
        }
    }

    /// Whether the chart draws per-day markers by default
    ///
    /// Suppressed for the dense quarter and year views.
    #[must_use]
    pub const fn show_markers_default(self) -> bool {
        !matches!(self, Self::Quarter | Self::Year)
    }

    /// Selector string used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for TrailingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrailingWindow {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(AppError::invalid_input(format!(
                "unknown window {other:?}, expected one of week, month, quarter, year"
            ))),
        }
    }
}
