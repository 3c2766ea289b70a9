// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use tallybook::models::Category;
use tallybook::store::{RecordStore, SqliteStore};
use tempfile::TempDir;

fn setup() -> (TempDir, SqliteStore) {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::new(dir.path().join("tally.sqlite"));
    store.ensure_schema().unwrap();
    (dir, store)
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn schema_creation_is_idempotent() {
    let (_dir, store) = setup();
    store
        .insert(Category::Expenses, "Rent", Some(50000), day("2025-03-01"))
        .unwrap();
    store.ensure_schema().unwrap();
    assert_eq!(store.list_all(Category::Expenses).unwrap().len(), 1);
}

#[test]
fn categories_are_disjoint_with_own_ids() {
    let (_dir, store) = setup();
    let e = store
        .insert(Category::Expenses, "Rent", Some(50000), day("2025-03-01"))
        .unwrap();
    let g = store
        .insert(Category::Earnings, "Salary", Some(250000), day("2025-03-02"))
        .unwrap();
    assert_eq!(e, 1);
    assert_eq!(g, 1);
    assert_eq!(store.sum(Category::Expenses).unwrap(), 50000);
    assert_eq!(store.sum(Category::Earnings).unwrap(), 250000);

    let earnings = store.list_all(Category::Earnings).unwrap();
    assert_eq!(earnings.len(), 1);
    assert_eq!(earnings[0].name, "Salary");
    assert_eq!(earnings[0].date, day("2025-03-02"));
}

#[test]
fn list_keeps_insertion_order() {
    let (_dir, store) = setup();
    for (name, cents) in [("a", 1), ("b", 2), ("c", 3)] {
        store
            .insert(Category::Expenses, name, Some(cents), day("2025-01-01"))
            .unwrap();
    }
    let names: Vec<String> = store
        .list_all(Category::Expenses)
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn empty_sum_is_zero_and_null_amounts_count_as_zero() {
    let (_dir, store) = setup();
    assert_eq!(store.sum(Category::Earnings).unwrap(), 0);
    store
        .insert(Category::Earnings, "gift", None, day("2025-01-01"))
        .unwrap();
    store
        .insert(Category::Earnings, "bonus", Some(1500), day("2025-01-02"))
        .unwrap();
    assert_eq!(store.sum(Category::Earnings).unwrap(), 1500);
    let rows = store.list_all(Category::Earnings).unwrap();
    assert_eq!(rows[0].amount, None);
}

#[test]
fn delete_reports_misses_without_failing() {
    let (_dir, store) = setup();
    let id = store
        .insert(Category::Expenses, "Coffee", Some(350), day("2025-01-01"))
        .unwrap();
    assert!(!store.delete(Category::Earnings, id).unwrap());
    assert!(store.delete(Category::Expenses, id).unwrap());
    assert!(!store.delete(Category::Expenses, id).unwrap());
    assert!(store.list_all(Category::Expenses).unwrap().is_empty());
}

#[test]
fn stored_layout_matches_file_format() {
    let (dir, store) = setup();
    store
        .insert(Category::Expenses, "Rent", Some(50000), day("2025-03-01"))
        .unwrap();
    let conn = Connection::open(dir.path().join("tally.sqlite")).unwrap();
    let (name, amount, date): (String, i64, String) = conn
        .query_row("SELECT name, amount, date FROM expenses WHERE id=1", [], |r| {
            Ok((r.get(0)?, r.get(1)?, r.get(2)?))
        })
        .unwrap();
    assert_eq!(name, "Rent");
    assert_eq!(amount, 50000);
    assert_eq!(date, "2025-03-01");
}

#[test]
fn snapshot_agrees_with_list_and_sum() {
    let (_dir, store) = setup();
    store
        .insert(Category::Expenses, "x", Some(100), day("2025-01-01"))
        .unwrap();
    store
        .insert(Category::Expenses, "y", Some(250), day("2025-01-01"))
        .unwrap();
    let (records, total) = store.snapshot(Category::Expenses).unwrap();
    assert_eq!(records, store.list_all(Category::Expenses).unwrap());
    assert_eq!(total, 350);
}
