// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::models::Profile;

/// The currencies offered during onboarding. The first entry is the
/// default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
}

pub const CURRENCIES: [Currency; 7] = [
    Currency { code: "USD", symbol: "$" },
    Currency { code: "EUR", symbol: "€" },
    Currency { code: "GBP", symbol: "£" },
    Currency { code: "JPY", symbol: "¥" },
    Currency { code: "INR", symbol: "₹" },
    Currency { code: "AUD", symbol: "A$" },
    Currency { code: "CAD", symbol: "C$" },
];

pub const DEFAULT_CATEGORIES: [&str; 6] =
    ["Food", "Bills", "Transport", "Shopping", "Savings", "Other"];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.]").expect("literal pattern"));

/// Lenient budget-amount parsing: currency symbols and grouping separators
/// are stripped, and anything that still fails to parse becomes zero, so a
/// malformed number can never dead-end the flow.
pub fn parse_target(input: &str) -> Decimal {
    let cleaned = NON_NUMERIC.replace_all(input, "");
    cleaned.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// The wizard's position in the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    Currency,
    BudgetTarget,
    Categories,
    Complete,
}

/// Linear onboarding flow: Welcome, currency choice, monthly target,
/// category picks, then `finish`.
///
/// Field selections live on the wizard rather than on individual steps, so
/// stepping back and forward never loses them. Every field has a safe
/// default and `finish` works from any step, which makes the wizard
/// infallible by construction.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    currency: Currency,
    target_input: String,
    categories: Vec<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Wizard {
            step: Step::Welcome,
            currency: CURRENCIES[0],
            // The target field starts pre-filled, like the onboarding form.
            target_input: "1000".to_string(),
            categories: default_categories(),
        }
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Advance one step. No-op once the category step is reached; only
    /// `finish` leaves the flow.
    pub fn next(&mut self) {
        self.step = match self.step {
            Step::Welcome => Step::Currency,
            Step::Currency => Step::BudgetTarget,
            Step::BudgetTarget | Step::Categories => Step::Categories,
            Step::Complete => Step::Complete,
        };
    }

    /// Retreat one step. No-op at the start.
    pub fn prev(&mut self) {
        self.step = match self.step {
            Step::Welcome | Step::Currency => Step::Welcome,
            Step::BudgetTarget => Step::Currency,
            Step::Categories => Step::BudgetTarget,
            Step::Complete => Step::Complete,
        };
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Select a currency by code. Unknown codes leave the selection alone
    /// and report false.
    pub fn select_currency(&mut self, code: &str) -> bool {
        match CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code)) {
            Some(c) => {
                self.currency = *c;
                true
            }
            None => false,
        }
    }

    pub fn target_input(&self) -> &str {
        &self.target_input
    }

    pub fn set_target_input(&mut self, input: impl Into<String>) {
        self.target_input = input.into();
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Toggle a category: removes it when present, appends it otherwise.
    /// The set may legally become empty.
    pub fn toggle_category(&mut self, name: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == name) {
            self.categories.remove(pos);
        } else {
            self.categories.push(name.to_string());
        }
    }

    /// Materialize the profile from the current selections and mark the
    /// flow complete. This is the only place a wizard-built profile comes
    /// from.
    pub fn finish(&mut self) -> Profile {
        self.step = Step::Complete;
        Profile {
            currency_symbol: self.currency.symbol.to_string(),
            budget_target: parse_target(&self.target_input),
            categories: self.categories.clone(),
            onboarded: true,
        }
    }
}
