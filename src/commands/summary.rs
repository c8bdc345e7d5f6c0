// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::api::{self, SummaryView};
use crate::models::{Filter, Profile, TransactionDraft};
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::{config, filter, summary};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let local = sub.get_flag("local");

    let client = api::Client::new(config::backend_url())?;
    let profile = match config::load_cached_profile()? {
        Some(profile) => profile,
        None => api::profile_or_default(&client),
    };

    let view = if local {
        local_view(&client, &profile)?
    } else {
        api::summary_or_demo(&client)
    };

    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    let ccy = &profile.currency_symbol;
    let percent = (view.summary.budget_progress * Decimal::ONE_HUNDRED).round();
    let rows = vec![
        vec!["Balance".to_string(), fmt_money(view.summary.balance, ccy)],
        vec!["Income".to_string(), fmt_money(view.summary.income, ccy)],
        vec!["Expenses".to_string(), fmt_money(view.summary.expense, ccy)],
        vec![
            format!("Spend ({})", view.month),
            fmt_money(view.summary.month_spend, ccy),
        ],
        vec!["Budget".to_string(), fmt_money(view.budget, ccy)],
        vec!["Progress".to_string(), format!("{}%", percent)],
    ];
    println!("{}", pretty_table(&["", "Amount"], rows));

    if !view.recent.is_empty() {
        let recent_rows = view
            .recent
            .iter()
            .take(6)
            .map(|tx| {
                vec![
                    tx.date.format("%Y-%m-%d").to_string(),
                    tx.title.clone(),
                    tx.category.clone(),
                    fmt_money(tx.signed_amount(), ccy),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Recent", "Category", "Amount"], recent_rows)
        );
    }
    Ok(())
}

/// Rebuild the aggregate from fetched history through the local store and
/// engine instead of trusting the backend's precomputed numbers.
fn local_view(client: &api::Client, profile: &Profile) -> Result<SummaryView> {
    let everything = Filter::default();
    let fetched = api::transactions_or_local(client, &everything, &api::demo_recent());

    let mut store = TransactionStore::new();
    for tx in fetched {
        store.add(TransactionDraft {
            title: tx.title,
            amount: tx.amount,
            kind: tx.kind,
            category: tx.category,
            notes: tx.notes,
            date: Some(tx.date),
        })?;
    }

    let today = Utc::now().date_naive();
    let summary = summary::summarize(store.all(), profile.budget_target, today)?;
    let recent = filter::apply(store.all(), &everything)
        .into_iter()
        .take(6)
        .collect();

    Ok(SummaryView {
        summary,
        month: today.format("%Y-%m").to_string(),
        budget: profile.budget_target,
        recent,
    })
}
