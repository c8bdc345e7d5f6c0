// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Filter, TransactionDraft, TransactionKind};
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use crate::{api, config, filter};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    match sub.subcommand() {
        Some(("add", sub)) => add(sub)?,
        Some(("list", sub)) => list(sub)?,
        _ => {}
    }
    Ok(())
}

fn add(sub: &clap::ArgMatches) -> Result<()> {
    let client = api::Client::new(config::backend_url())?;
    let profile = match config::load_cached_profile()? {
        Some(profile) => profile,
        None => api::profile_or_default(&client),
    };

    let title = sub.get_one::<String>("title").unwrap().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let kind = TransactionKind::parse(sub.get_one::<String>("type").unwrap())?;
    let category = sub
        .get_one::<String>("category")
        .map(|c| profile.normalize_category(c))
        .or_else(|| profile.categories.first().cloned())
        .unwrap_or_else(|| "Other".to_string());
    let notes = sub.get_one::<String>("notes").map(|s| s.to_string());

    let draft = TransactionDraft {
        title,
        amount,
        kind,
        category,
        notes,
        date: None,
    };
    draft.validate()?;

    match client.submit_transaction(&draft) {
        Ok(()) => {
            println!(
                "Recorded {} {} '{}' ({})",
                draft.kind,
                fmt_money(draft.amount, &profile.currency_symbol),
                draft.title,
                draft.category
            );
        }
        Err(err) => {
            // Optimistic degraded mode: the entry gets a client-side id and
            // timestamp and lives in the session view only.
            tracing::warn!("submission failed, keeping the entry locally: {err}");
            let mut session = TransactionStore::new();
            let record = session.add(draft)?;
            println!(
                "Backend unreachable; kept locally as {} ({})",
                record.id,
                record.date.format("%Y-%m-%d %H:%M")
            );
        }
    }
    Ok(())
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let query = filter_from_args(sub)?;

    let client = api::Client::new(config::backend_url())?;
    let profile = match config::load_cached_profile()? {
        Some(profile) => profile,
        None => api::profile_or_default(&client),
    };

    let fetched = api::transactions_or_local(&client, &query, &api::demo_recent());
    // The local engine re-sorts into most-recent-first; server order is
    // not assumed.
    let mut records = filter::apply(&fetched, &query);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        records.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &records)? {
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|tx| {
                vec![
                    tx.date.format("%Y-%m-%d").to_string(),
                    tx.title.clone(),
                    tx.category.clone(),
                    tx.kind.to_string(),
                    fmt_money(tx.signed_amount(), &profile.currency_symbol),
                    tx.notes.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Title", "Category", "Type", "Amount", "Notes"],
                rows,
            )
        );
    }
    Ok(())
}

/// Build a [`Filter`] from the shared --category/--type/--start/--end
/// arguments.
pub fn filter_from_args(sub: &clap::ArgMatches) -> Result<Filter> {
    let kind = sub
        .get_one::<String>("type")
        .map(|s| TransactionKind::parse(s))
        .transpose()?;
    let start_date = sub
        .get_one::<String>("start")
        .map(|s| parse_date(s))
        .transpose()?;
    let end_date = sub
        .get_one::<String>("end")
        .map(|s| parse_date(s))
        .transpose()?;
    Ok(Filter {
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
        kind,
        start_date,
        end_date,
    })
}
