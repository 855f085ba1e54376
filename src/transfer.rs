// ABOUTME: CSV and JSON boundary for bulk import, export, and backup snapshots
// ABOUTME: Malformed rows are dropped before they reach the record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Import/export boundary.
//!
//! Bulk input arrives as CSV text or a JSON array. A row survives parsing
//! only with a real `YYYY-MM-DD` date and a weight coercible to a positive
//! real number; everything else is dropped here, silently, so one bad row
//! never aborts a batch. The caller learns only the success/attempt counts.

use crate::models::{format_date, WeightRecord, DATE_FORMAT};
use anyhow::Result;
use chrono::NaiveDate;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Header row of exported CSV files
pub const CSV_HEADER: [&str; 2] = ["date", "weight_kg"];

fn record_from_fields(date_field: &str, weight_field: &str) -> Option<WeightRecord> {
    let date = NaiveDate::parse_from_str(date_field, DATE_FORMAT).ok()?;
    let weight = weight_field.trim().parse::<f64>().ok()?;
    let record = WeightRecord::new(date, weight);
    record.validate().ok()?;
    Some(record)
}

/// Parse CSV text into records, skipping the header line
///
/// Rows that do not parse are dropped, not reported.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<WeightRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let Ok(row) = row else {
            debug!("dropping unreadable CSV row");
            continue;
        };
        let (Some(date_field), Some(weight_field)) = (row.get(0), row.get(1)) else {
            debug!("dropping CSV row with missing fields");
            continue;
        };
        match record_from_fields(date_field, weight_field) {
            Some(record) => records.push(record),
            None => debug!(date = date_field, "dropping malformed CSV row"),
        }
    }
    records
}

/// Parse a JSON array of `{date, weight}` objects into records
///
/// Same dropping rules as [`parse_csv`].
#[must_use]
pub fn parse_json_records(rows: &[Value]) -> Vec<WeightRecord> {
    rows.iter()
        .filter_map(|row| {
            let date = row.get("date")?.as_str()?;
            let weight = row.get("weight")?.as_f64()?;
            let date = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
            let record = WeightRecord::new(date, weight);
            record.validate().ok().map(|()| record)
        })
        .collect()
}

/// Serialize records to CSV with the standard header
///
/// # Errors
///
/// Returns an error only when the in-memory CSV writer fails, which does not
/// happen for well-formed records.
pub fn to_csv(records: &[WeightRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([format_date(record.date), record.weight.to_string()])?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Sample CSV handed out so users can see the expected import format
#[must_use]
pub fn template_csv() -> String {
    "date,weight_kg\n2024-03-24,75.5\n2024-03-25,75.2\n2024-03-26,75.0\n".to_owned()
}

/// Write a JSON snapshot of all records under `dir`
///
/// The directory is created if missing; the filename carries the given
/// timestamp so snapshots never overwrite each other.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be written.
pub async fn write_backup(
    dir: &Path,
    records: &[WeightRecord],
    stamp: &str,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("weight-records-{stamp}.json"));
    let json = serde_json::to_vec_pretty(records)?;
    tokio::fs::write(&path, json).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_date;

    #[test]
    fn test_parse_csv_skips_header_and_malformed_rows() {
        let text = "date,weight_kg\n\
                    2024-03-24,75.5\n\
                    not-a-date,70.0\n\
                    2024-03-25,heavy\n\
                    2024-03-26,-3\n\
                    ,72.0\n\
                    2024-03-27,74.9\n";
        let records = parse_csv(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, parse_date("2024-03-24").unwrap());
        assert_eq!(records[1].weight, 74.9);
    }

    #[test]
    fn test_parse_csv_empty_input() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("date,weight_kg\n").is_empty());
    }

    #[test]
    fn test_parse_json_records_drops_malformed_entries() {
        let rows: Vec<Value> = serde_json::from_str(
            r#"[
                {"date": "2024-03-24", "weight": 75.5},
                {"date": "03/24/2024", "weight": 75.5},
                {"date": "2024-03-25", "weight": "75.2"},
                {"weight": 70.0},
                {"date": "2024-03-26", "weight": 0},
                {"date": "2024-03-27", "weight": 74.9}
            ]"#,
        )
        .unwrap();
        let records = parse_json_records(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].date, parse_date("2024-03-27").unwrap());
    }

    #[test]
    fn test_to_csv_round_trips_through_parse() {
        let records = vec![
            WeightRecord::new(parse_date("2024-03-24").unwrap(), 75.5),
            WeightRecord::new(parse_date("2024-03-25").unwrap(), 75.2),
        ];
        let csv = to_csv(&records).unwrap();
        assert!(csv.starts_with("date,weight_kg\n"));
        assert_eq!(parse_csv(&csv), records);
    }

    #[test]
    fn test_template_parses_cleanly() {
        assert_eq!(parse_csv(&template_csv()).len(), 3);
    }
}
