// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Filter, Transaction};

impl Filter {
    /// Whether a record satisfies every present predicate. Category match
    /// is exact and case-sensitive; date bounds are inclusive and compared
    /// at day granularity, so time of day never excludes a record.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(category) = &self.category {
            if tx.category != *category {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        let day = tx.date.date_naive();
        if let Some(start) = self.start_date {
            if day < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if day > end {
                return false;
            }
        }
        true
    }
}

/// Filter a history slice into the canonical presentation order: most
/// recent first, with equal timestamps keeping their input order (the sort
/// is stable). An empty result is a valid result, and applying the same
/// filter to its own output changes nothing.
pub fn apply(transactions: &[Transaction], filter: &Filter) -> Vec<Transaction> {
    let mut matched: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}
