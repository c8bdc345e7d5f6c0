// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pocketledger::error::Error;
use pocketledger::models::{Transaction, TransactionKind};
use pocketledger::summary::summarize;

fn tx(
    title: &str,
    amount: Decimal,
    kind: TransactionKind,
    category: &str,
    y: i32,
    m: u32,
    d: u32,
) -> Transaction {
    Transaction {
        id: title.to_string(),
        title: title.to_string(),
        amount,
        kind,
        category: category.to_string(),
        notes: None,
        date: Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap(),
    }
}

fn january_set() -> Vec<Transaction> {
    vec![
        tx("Groceries", dec!(42.50), TransactionKind::Expense, "Food", 2025, 1, 5),
        tx("Metro", dec!(3.20), TransactionKind::Expense, "Transport", 2025, 1, 6),
        tx("Salary", dec!(1800.00), TransactionKind::Income, "Other", 2025, 1, 1),
    ]
}

#[test]
fn worked_example() {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let s = summarize(&january_set(), dec!(1200), reference).unwrap();
    assert_eq!(s.income, dec!(1800.00));
    assert_eq!(s.expense, dec!(45.70));
    assert_eq!(s.balance, dec!(1754.30));
    assert_eq!(s.month_spend, dec!(45.70));
    assert_eq!(s.budget_progress.round_dp(4), dec!(0.0381));
}

#[test]
fn balance_is_income_minus_expense() {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let s = summarize(&january_set(), dec!(1200), reference).unwrap();
    assert_eq!(s.balance, s.income - s.expense);
}

#[test]
fn empty_history_is_all_zeros() {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let s = summarize(&[], dec!(1200), reference).unwrap();
    assert_eq!(s.balance, Decimal::ZERO);
    assert_eq!(s.income, Decimal::ZERO);
    assert_eq!(s.expense, Decimal::ZERO);
    assert_eq!(s.month_spend, Decimal::ZERO);
    assert_eq!(s.budget_progress, Decimal::ZERO);
}

#[test]
fn zero_budget_means_zero_progress() {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let s = summarize(&january_set(), Decimal::ZERO, reference).unwrap();
    assert_eq!(s.budget_progress, Decimal::ZERO);
    // Spend is still reported.
    assert_eq!(s.month_spend, dec!(45.70));
}

#[test]
fn progress_is_not_capped_at_one() {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let s = summarize(&january_set(), dec!(10), reference).unwrap();
    assert!(s.budget_progress > Decimal::ONE);
}

#[test]
fn month_spend_includes_month_boundaries() {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let records = vec![
        Transaction {
            date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            ..tx("first instant", dec!(10), TransactionKind::Expense, "Bills", 2025, 1, 1)
        },
        Transaction {
            date: Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap(),
            ..tx("last instant", dec!(20), TransactionKind::Expense, "Bills", 2025, 1, 31)
        },
        tx("prior month", dec!(40), TransactionKind::Expense, "Bills", 2024, 12, 31),
        tx("next month", dec!(80), TransactionKind::Expense, "Bills", 2025, 2, 1),
        // Same month a year off must not count.
        tx("prior year", dec!(160), TransactionKind::Expense, "Bills", 2024, 1, 10),
    ];
    let s = summarize(&records, dec!(100), reference).unwrap();
    assert_eq!(s.month_spend, dec!(30));
    // Full-history totals still see everything.
    assert_eq!(s.expense, dec!(310));
}

#[test]
fn income_never_counts_toward_month_spend() {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let records = vec![tx("Salary", dec!(1800), TransactionKind::Income, "Other", 2025, 1, 10)];
    let s = summarize(&records, dec!(1200), reference).unwrap();
    assert_eq!(s.month_spend, Decimal::ZERO);
    assert_eq!(s.budget_progress, Decimal::ZERO);
}

#[test]
fn non_positive_amount_is_an_invariant_violation() {
    let reference = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let mut records = january_set();
    records[0].amount = dec!(-42.50);
    let err = summarize(&records, dec!(1200), reference).unwrap_err();
    assert!(matches!(err, Error::InvariantViolation(_)));
}
