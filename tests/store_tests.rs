// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use pocketledger::error::Error;
use pocketledger::models::{TransactionDraft, TransactionKind};
use pocketledger::store::TransactionStore;

fn draft(title: &str, amount: rust_decimal::Decimal) -> TransactionDraft {
    TransactionDraft {
        title: title.to_string(),
        amount,
        kind: TransactionKind::Expense,
        category: "Food".to_string(),
        notes: None,
        date: None,
    }
}

#[test]
fn add_assigns_id_and_timestamp() {
    let mut store = TransactionStore::new();
    let before = Utc::now();
    let record = store.add(draft("Groceries", dec!(42.50))).unwrap();
    assert!(!record.id.is_empty());
    assert!(record.date >= before);
    assert_eq!(record.amount, dec!(42.50));
    assert_eq!(store.len(), 1);
}

#[test]
fn add_keeps_supplied_date() {
    let mut store = TransactionStore::new();
    let when = Utc.with_ymd_and_hms(2025, 1, 5, 9, 30, 0).unwrap();
    let mut d = draft("Groceries", dec!(10));
    d.date = Some(when);
    let record = store.add(d).unwrap();
    assert_eq!(record.date, when);
}

#[test]
fn add_rejects_empty_title() {
    let mut store = TransactionStore::new();
    let err = store.add(draft("", dec!(10))).unwrap_err();
    assert!(matches!(err, Error::EmptyTitle));
    // Whitespace-only counts as empty too.
    let err = store.add(draft("   ", dec!(10))).unwrap_err();
    assert!(matches!(err, Error::EmptyTitle));
    assert!(store.is_empty());
}

#[test]
fn add_rejects_non_positive_amounts() {
    let mut store = TransactionStore::new();
    let err = store.add(draft("Refund", dec!(0))).unwrap_err();
    assert!(matches!(err, Error::NonPositiveAmount(_)));
    let err = store.add(draft("Refund", dec!(-5))).unwrap_err();
    assert!(matches!(err, Error::NonPositiveAmount(_)));
    assert!(store.is_empty());
}

#[test]
fn insertion_order_is_preserved() {
    let mut store = TransactionStore::new();
    for title in ["a", "b", "c"] {
        store.add(draft(title, dec!(1))).unwrap();
    }
    let titles: Vec<&str> = store.all().iter().map(|tx| tx.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn query_scans_in_store_order() {
    let mut store = TransactionStore::new();
    store.add(draft("a", dec!(1))).unwrap();
    let mut income = draft("pay", dec!(1000));
    income.kind = TransactionKind::Income;
    store.add(income).unwrap();
    store.add(draft("b", dec!(2))).unwrap();

    let expenses = store.query(|tx| tx.kind == TransactionKind::Expense);
    let titles: Vec<&str> = expenses.iter().map(|tx| tx.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b"]);

    assert!(store.query(|tx| tx.category == "Travel").is_empty());
}

#[test]
fn ids_are_unique() {
    let mut store = TransactionStore::new();
    let first = store.add(draft("a", dec!(1))).unwrap();
    let second = store.add(draft("a", dec!(1))).unwrap();
    assert_ne!(first.id, second.id);
}
