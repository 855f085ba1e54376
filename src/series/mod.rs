// ABOUTME: Turns sparse dated weight records into dense, forward-filled chart series
// ABOUTME: Pure date-walk over a trailing window, no I/O and no wall-clock reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Chart series construction.
//!
//! Weight measurements are sparse and irregular; charts need one value per
//! calendar day. [`build_series`] walks every day of a trailing window and
//! carries the most recent known weight forward through days without their
//! own record. Days before the first record ever are emitted as `0.0`.
//! Values are carried verbatim, never interpolated or averaged.

use crate::models::WeightRecord;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub mod window;

pub use window::TrailingWindow;

/// A dense, index-aligned label/value series covering one trailing window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// One label per day, empty where the window policy thins them
    pub labels: Vec<String>,
    /// One value per day: recorded, forward-filled, or `0.0` when nothing
    /// is known yet
    pub values: Vec<f64>,
}

/// Build the dense series for `window` ending on `today`
///
/// Records may arrive in any order; they are sorted by date here. The value
/// in effect when the window opens is taken from the latest record strictly
/// before the window start, so a window that begins mid-history starts from
/// the right carried weight instead of zero.
#[must_use]
pub fn build_series(
    records: &[WeightRecord],
    window: TrailingWindow,
    today: NaiveDate,
) -> ChartSeries {
    let mut sorted: Vec<&WeightRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let start = window.start_for(today);
    let len = window.length_days() as usize;

    // Records before the window decide the carried value on day one.
    let mut next = sorted.partition_point(|r| r.date < start);
    let mut carried = next.checked_sub(1).map(|i| sorted[i].weight);

    let mut labels = Vec::with_capacity(len);
    let mut values = Vec::with_capacity(len);

    let mut day = start;
    for _ in 0..len {
        // The store holds one record per date; the loop still tolerates
        // duplicates in ad-hoc input by letting the last one win.
        while next < sorted.len() && sorted[next].date == day {
            carried = Some(sorted[next].weight);
            next += 1;
        }

        values.push(carried.unwrap_or(0.0));
        labels.push(window.label_for(day));
        day += Duration::days(1);
    }

    ChartSeries { labels, values }
}
