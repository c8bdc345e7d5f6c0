// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use uuid::Uuid;

use crate::error::Error;
use crate::models::{Transaction, TransactionDraft};

/// Ordered, add-only collection of transaction records.
///
/// Insertion order is preserved so the default view is stable. Mutation goes
/// through `&mut self`, which gives the single-writer discipline the rest of
/// the crate assumes: no reader ever sees a partially applied add.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    entries: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a draft and append it, assigning an id and a creation
    /// timestamp when the draft carries none. Returns the stored record.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Transaction, Error> {
        draft.validate()?;
        let record = Transaction {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            notes: draft.notes.filter(|n| !n.is_empty()),
            date: draft.date.unwrap_or_else(Utc::now),
        };
        self.entries.push(record.clone());
        Ok(record)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    /// Records matching the predicate, in store order. A linear scan: the
    /// collection is bounded by one user's lifetime entry count.
    pub fn query(&self, predicate: impl Fn(&Transaction) -> bool) -> Vec<&Transaction> {
        self.entries.iter().filter(|tx| predicate(tx)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
