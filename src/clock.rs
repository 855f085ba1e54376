// ABOUTME: Injectable clock abstraction so date-window logic never reads the wall clock directly
// ABOUTME: Production uses the local calendar day; tests pin an exact date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Clock abstraction for the single "today" capability.
//!
//! Trailing chart windows are right-anchored at today and must be recomputed
//! on every request. Handlers read today through this trait, which keeps the
//! series code a pure function of its inputs and deterministic under test.

use chrono::{Local, NaiveDate};

/// Source of the current calendar day
pub trait Clock: Send + Sync {
    /// The current date in the local calendar
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by the system's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Deterministic clock pinned to one date, for tests and offline tooling
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    /// The date reported as today
    pub today: NaiveDate,
}

impl FixedClock {
    /// Pin the clock to the given date
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
