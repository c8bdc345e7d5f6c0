// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Direction of a transaction. The stored amount is always positive; the
/// kind alone decides whether it counts toward income or expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single dated income or expense record. Immutable once created; the
/// store exposes no update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// The amount with its sign restored from the kind, for balance math
    /// and display.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// User input for a new transaction, before the store has assigned an id
/// and timestamp. Serializes to the POST /transactions body.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl TransactionDraft {
    /// Entry-time validation: a blank title or a non-positive amount never
    /// makes it past this point, whether the draft is headed for the
    /// backend or the local store.
    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// The onboarding-derived configuration: currency symbol, monthly budget
/// target, and the category set. Built by the wizard's `finish`, or parsed
/// from the backend; the default stands in when neither is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "currency")]
    pub currency_symbol: String,
    #[serde(rename = "target", default)]
    pub budget_target: Decimal,
    #[serde(default = "crate::onboarding::default_categories")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub onboarded: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            currency_symbol: "$".to_string(),
            budget_target: Decimal::ZERO,
            categories: crate::onboarding::default_categories(),
            onboarded: false,
        }
    }
}

impl Profile {
    /// Categories are validated at entry time only: anything outside the
    /// profile's set lands in "Other".
    pub fn normalize_category(&self, raw: &str) -> String {
        if self.categories.iter().any(|c| c == raw) {
            raw.to_string()
        } else {
            "Other".to_string()
        }
    }
}

/// Derived aggregate over the full transaction history. Never persisted;
/// recomputed from the store on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub balance: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
    pub month_spend: Decimal,
    #[serde(rename = "progress")]
    pub budget_progress: Decimal,
}

/// Optional predicates narrowing a history query. Date bounds are compared
/// at day granularity, inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.kind.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}
