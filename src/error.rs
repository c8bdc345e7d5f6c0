// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// The failures the library itself can produce.
///
/// Validation variants are rejected at the boundary and never enter the
/// store. Transport failures are recovered at the boundary adapters, never
/// surfaced as hard failures. An invariant violation means a caller fed the
/// aggregator data the store would have refused.
#[derive(Debug, Error)]
pub enum Error {
    /// A transaction was submitted without a title.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// Amounts are stored positive; sign comes from the kind.
    #[error("transaction amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// The wire `type` field held something other than income/expense.
    #[error("unknown transaction kind '{0}'")]
    UnknownKind(String),

    /// A backend payload carried a budget target below zero.
    #[error("budget target cannot be negative, got {0}")]
    NegativeBudgetTarget(Decimal),

    /// The backend could not be reached or answered with garbage.
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Pre-validated data turned out not to be. Indicates a bug upstream.
    #[error("aggregation invariant violated: {0}")]
    InvariantViolation(String),
}
