// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::Error;
use crate::models::{Summary, Transaction, TransactionKind};

/// Fold the full history into a [`Summary`].
///
/// Income, expense, and balance cover every record; month spend is limited
/// to expenses falling in the reference date's calendar month. Budget
/// progress is month spend over the target, zero when no target is set, so
/// callers never have to special-case a missing budget.
///
/// Pure over its inputs. Amounts are expected to have passed store
/// validation already; a non-positive amount here is an upstream bug and
/// comes back as an invariant violation.
pub fn summarize(
    transactions: &[Transaction],
    budget_target: Decimal,
    reference: NaiveDate,
) -> Result<Summary, Error> {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    let mut month_spend = Decimal::ZERO;

    for tx in transactions {
        if tx.amount <= Decimal::ZERO {
            return Err(Error::InvariantViolation(format!(
                "non-positive amount {} on '{}'",
                tx.amount, tx.title
            )));
        }
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => {
                expense += tx.amount;
                let day = tx.date.date_naive();
                if day.year() == reference.year() && day.month() == reference.month() {
                    month_spend += tx.amount;
                }
            }
        }
    }

    let budget_progress = if budget_target > Decimal::ZERO {
        (month_spend / budget_target).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    Ok(Summary {
        balance: income - expense,
        income,
        expense,
        month_spend,
        budget_progress,
    })
}
