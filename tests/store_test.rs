// ABOUTME: Integration tests for the record store contract
// ABOUTME: Covers upsert idempotence, replacement, deletes, ordering, and bulk import accounting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{create_test_database, date, record};
use tare::database_plugins::DatabaseProvider;

#[tokio::test]
async fn test_upsert_reports_row_affected() {
    let db = create_test_database().await.unwrap();
    assert!(db.upsert_record(&record("2024-03-24", 75.5)).await.unwrap());
}

#[tokio::test]
async fn test_upsert_is_idempotent() {
    let db = create_test_database().await.unwrap();
    let r = record("2024-03-24", 75.5);

    db.upsert_record(&r).await.unwrap();
    let once = db.get_all_records().await.unwrap();

    db.upsert_record(&r).await.unwrap();
    let twice = db.get_all_records().await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(twice.len(), 1);
}

#[tokio::test]
async fn test_upsert_replaces_same_date() {
    let db = create_test_database().await.unwrap();
    db.upsert_record(&record("2024-03-24", 75.5)).await.unwrap();
    db.upsert_record(&record("2024-03-24", 76.0)).await.unwrap();

    let records = db.get_all_records().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].weight, 76.0);
    assert_eq!(records[0].date, date("2024-03-24"));
}

#[tokio::test]
async fn test_delete_existing_and_absent() {
    let db = create_test_database().await.unwrap();
    db.upsert_record(&record("2024-03-24", 75.5)).await.unwrap();

    assert!(db.delete_record(date("2024-03-24")).await.unwrap());
    // Deleting again is not an error, just a no-op
    assert!(!db.delete_record(date("2024-03-24")).await.unwrap());
    assert!(!db.delete_record(date("1999-01-01")).await.unwrap());
}

#[tokio::test]
async fn test_delete_then_latest_is_none() {
    let db = create_test_database().await.unwrap();
    db.upsert_record(&record("2024-03-24", 75.5)).await.unwrap();
    db.delete_record(date("2024-03-24")).await.unwrap();

    assert!(db.get_latest_record().await.unwrap().is_none());
}

#[tokio::test]
async fn test_latest_empty_store() {
    let db = create_test_database().await.unwrap();
    assert!(db.get_latest_record().await.unwrap().is_none());
}

#[tokio::test]
async fn test_latest_picks_maximum_date() {
    let db = create_test_database().await.unwrap();
    db.upsert_record(&record("2024-03-26", 74.8)).await.unwrap();
    db.upsert_record(&record("2024-03-24", 75.5)).await.unwrap();
    db.upsert_record(&record("2024-03-25", 75.1)).await.unwrap();

    let latest = db.get_latest_record().await.unwrap().unwrap();
    assert_eq!(latest.date, date("2024-03-26"));
    assert_eq!(latest.weight, 74.8);
}

#[tokio::test]
async fn test_list_is_ordered_ascending() {
    let db = create_test_database().await.unwrap();
    for r in [
        record("2024-03-26", 74.8),
        record("2024-03-22", 76.1),
        record("2024-03-24", 75.5),
    ] {
        db.upsert_record(&r).await.unwrap();
    }

    let records = db.get_all_records().await.unwrap();
    let dates: Vec<_> = records.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-03-22"), date("2024-03-24"), date("2024-03-26")]
    );
}

#[tokio::test]
async fn test_import_counts_and_overlap() {
    let db = create_test_database().await.unwrap();
    db.upsert_record(&record("2024-03-24", 75.5)).await.unwrap();

    let batch = [
        record("2024-03-24", 75.0), // overwrites the existing date
        record("2024-03-25", 74.9),
        record("2024-03-26", 74.7),
    ];
    let summary = db.import_records(&batch).await.unwrap();
    assert_eq!(summary.imported, 3);
    assert_eq!(summary.attempted, 3);

    let records = db.get_all_records().await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].weight, 75.0);
}

#[tokio::test]
async fn test_import_duplicate_dates_last_wins() {
    let db = create_test_database().await.unwrap();

    let batch = [
        record("2024-03-24", 75.5),
        record("2024-03-24", 76.0),
        record("2024-03-24", 74.2),
    ];
    let summary = db.import_records(&batch).await.unwrap();
    assert_eq!(summary.attempted, 3);

    let records = db.get_all_records().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].weight, 74.2);
}

#[tokio::test]
async fn test_import_empty_batch() {
    let db = create_test_database().await.unwrap();
    let summary = db.import_records(&[]).await.unwrap();
    assert_eq!(summary.imported, 0);
    assert_eq!(summary.attempted, 0);
}

#[tokio::test]
async fn test_record_count() {
    let db = create_test_database().await.unwrap();
    assert_eq!(db.get_record_count().await.unwrap(), 0);

    db.upsert_record(&record("2024-03-24", 75.5)).await.unwrap();
    db.upsert_record(&record("2024-03-25", 75.2)).await.unwrap();
    // Same date again must not grow the count
    db.upsert_record(&record("2024-03-25", 75.0)).await.unwrap();

    assert_eq!(db.get_record_count().await.unwrap(), 2);
}
