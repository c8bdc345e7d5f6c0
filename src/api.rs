// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;
use crate::filter;
use crate::models::{Filter, Profile, Summary, Transaction, TransactionDraft, TransactionKind};

const UA: &str = concat!(
    "pocketledger/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/pocketledger)"
);

/// Blocking JSON client for the budget backend.
pub struct Client {
    base: String,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(base: impl Into<String>) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        Ok(Client {
            base: base.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn fetch_profile(&self) -> Result<Profile, Error> {
        let url = format!("{}/profile", self.base);
        tracing::debug!("GET {url}");
        let payload: ProfilePayload = self.http.get(&url).send()?.error_for_status()?.json()?;
        payload.try_into()
    }

    pub fn fetch_summary(&self) -> Result<SummaryView, Error> {
        let url = format!("{}/summary", self.base);
        tracing::debug!("GET {url}");
        let payload: SummaryPayload = self.http.get(&url).send()?.error_for_status()?.json()?;
        payload.into_view()
    }

    pub fn fetch_transactions(&self, filter: &Filter) -> Result<Vec<Transaction>, Error> {
        let url = format!("{}/transactions", self.base);
        tracing::debug!("GET {url}");
        let payloads: Vec<TransactionPayload> = self
            .http
            .get(&url)
            .query(&filter_query(filter))
            .send()?
            .error_for_status()?
            .json()?;
        payloads.into_iter().map(Transaction::try_from).collect()
    }

    pub fn submit_transaction(&self, draft: &TransactionDraft) -> Result<(), Error> {
        let url = format!("{}/transactions", self.base);
        tracing::debug!("POST {url}");
        self.http.post(&url).json(draft).send()?.error_for_status()?;
        Ok(())
    }

    pub fn submit_onboarding(&self, profile: &Profile) -> Result<(), Error> {
        let url = format!("{}/onboarding", self.base);
        tracing::debug!("POST {url}");
        let body = OnboardingBody {
            currency: &profile.currency_symbol,
            target: profile.budget_target,
            categories: &profile.categories,
        };
        self.http.post(&url).json(&body).send()?.error_for_status()?;
        Ok(())
    }
}

/// Query parameters for GET /transactions; absent predicates are simply
/// omitted from the request.
pub fn filter_query(filter: &Filter) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(category) = &filter.category {
        params.push(("category", category.clone()));
    }
    if let Some(kind) = filter.kind {
        params.push(("type", kind.as_str().to_string()));
    }
    if let Some(start) = filter.start_date {
        params.push(("start_date", start.to_string()));
    }
    if let Some(end) = filter.end_date {
        params.push(("end_date", end.to_string()));
    }
    params
}

/// The GET /summary aggregate: the derived totals plus the month they were
/// computed for, the configured budget, and a short recent-activity slice.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    #[serde(flatten)]
    pub summary: Summary,
    pub month: String,
    pub budget: Decimal,
    pub recent: Vec<Transaction>,
}

// Wire shapes. Backend JSON is deserialized into these loose structs and
// then converted into the typed entities, so a malformed payload fails the
// fetch instead of leaking missing fields into the core.

#[derive(Debug, Deserialize)]
struct ProfilePayload {
    currency: String,
    #[serde(default)]
    target: Option<Decimal>,
    #[serde(default)]
    categories: Option<Vec<String>>,
    #[serde(default)]
    onboarded: Option<bool>,
}

impl TryFrom<ProfilePayload> for Profile {
    type Error = Error;

    fn try_from(payload: ProfilePayload) -> Result<Self, Error> {
        let target = payload.target.unwrap_or(Decimal::ZERO);
        if target < Decimal::ZERO {
            return Err(Error::NegativeBudgetTarget(target));
        }
        Ok(Profile {
            currency_symbol: payload.currency,
            budget_target: target,
            categories: payload
                .categories
                .unwrap_or_else(crate::onboarding::default_categories),
            onboarded: payload.onboarded.unwrap_or(false),
        })
    }
}

#[derive(Debug, Deserialize)]
struct TransactionPayload {
    #[serde(default)]
    id: Option<String>,
    title: String,
    amount: Decimal,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
}

impl TryFrom<TransactionPayload> for Transaction {
    type Error = Error;

    fn try_from(payload: TransactionPayload) -> Result<Self, Error> {
        if payload.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }
        if payload.amount <= Decimal::ZERO {
            return Err(Error::NonPositiveAmount(payload.amount));
        }
        Ok(Transaction {
            id: payload.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            title: payload.title,
            amount: payload.amount,
            kind: TransactionKind::parse(&payload.kind)?,
            category: payload.category.unwrap_or_else(|| "Other".to_string()),
            notes: payload.notes.filter(|n| !n.is_empty()),
            date: payload.date.unwrap_or_else(Utc::now),
        })
    }
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    balance: Decimal,
    income: Decimal,
    expense: Decimal,
    #[serde(default)]
    month: Option<String>,
    #[serde(default)]
    month_spend: Option<Decimal>,
    #[serde(default)]
    budget: Option<Decimal>,
    #[serde(default)]
    progress: Option<Decimal>,
    #[serde(default)]
    recent: Option<Vec<TransactionPayload>>,
}

impl SummaryPayload {
    fn into_view(self) -> Result<SummaryView, Error> {
        let recent = self
            .recent
            .unwrap_or_default()
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SummaryView {
            summary: Summary {
                balance: self.balance,
                income: self.income,
                expense: self.expense,
                month_spend: self.month_spend.unwrap_or(Decimal::ZERO),
                budget_progress: self.progress.unwrap_or(Decimal::ZERO).max(Decimal::ZERO),
            },
            month: self
                .month
                .unwrap_or_else(|| Utc::now().format("%Y-%m").to_string()),
            budget: self.budget.unwrap_or(Decimal::ZERO),
            recent,
        })
    }
}

#[derive(Debug, Serialize)]
struct OnboardingBody<'a> {
    currency: &'a str,
    target: Decimal,
    categories: &'a [String],
}

// Boundary adapters. Each fallback happens exactly once, here, behind an
// explicit Result match; callers get a plain value either way.

/// Fetch the profile, or fall back to the unonboarded default.
pub fn profile_or_default(client: &Client) -> Profile {
    match client.fetch_profile() {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!("profile fetch failed, using defaults: {err}");
            Profile::default()
        }
    }
}

/// Fetch the summary, or fall back to the static demo aggregate.
pub fn summary_or_demo(client: &Client) -> SummaryView {
    match client.fetch_summary() {
        Ok(view) => view,
        Err(err) => {
            tracing::warn!("summary fetch failed, using demo data: {err}");
            demo_summary()
        }
    }
}

/// Fetch filtered history, or run the same filter locally over a fallback
/// slice (typically the recent-activity view already in hand).
pub fn transactions_or_local(
    client: &Client,
    query: &Filter,
    fallback: &[Transaction],
) -> Vec<Transaction> {
    match client.fetch_transactions(query) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!("history fetch failed, filtering local records: {err}");
            filter::apply(fallback, query)
        }
    }
}

/// The demo aggregate shown when the backend is not reachable.
pub fn demo_summary() -> SummaryView {
    SummaryView {
        summary: Summary {
            balance: Decimal::new(108_740, 2),
            income: Decimal::new(1800, 0),
            expense: Decimal::new(71_260, 2),
            month_spend: Decimal::new(41_260, 2),
            budget_progress: Decimal::new(34, 2),
        },
        month: Utc::now().format("%Y-%m").to_string(),
        budget: Decimal::new(1200, 0),
        recent: demo_recent(),
    }
}

/// The demo recent-activity slice, stamped with the current time.
pub fn demo_recent() -> Vec<Transaction> {
    let now = Utc::now();
    vec![
        Transaction {
            id: "1".to_string(),
            title: "Groceries".to_string(),
            amount: Decimal::new(4250, 2),
            kind: TransactionKind::Expense,
            category: "Food".to_string(),
            notes: None,
            date: now,
        },
        Transaction {
            id: "2".to_string(),
            title: "Metro".to_string(),
            amount: Decimal::new(320, 2),
            kind: TransactionKind::Expense,
            category: "Transport".to_string(),
            notes: None,
            date: now,
        },
        Transaction {
            id: "3".to_string(),
            title: "Salary".to_string(),
            amount: Decimal::new(1800, 0),
            kind: TransactionKind::Income,
            category: "Other".to_string(),
            notes: None,
            date: now,
        },
    ]
}
