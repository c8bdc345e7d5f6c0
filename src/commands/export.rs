// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Transaction;
use crate::{api, config, filter};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let query = super::transactions::filter_from_args(sub)?;

    let client = api::Client::new(config::backend_url())?;
    let fetched = api::transactions_or_local(&client, &query, &api::demo_recent());
    let records = filter::apply(&fetched, &query);

    write_export(&fmt, out, &records)?;
    println!("Exported {} transactions to {}", records.len(), out);
    Ok(())
}

pub fn write_export(fmt: &str, out: &str, records: &[Transaction]) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "title", "amount", "type", "category", "notes"])?;
            for tx in records {
                wtr.write_record([
                    tx.date.format("%Y-%m-%d").to_string(),
                    tx.title.clone(),
                    tx.amount.to_string(),
                    tx.kind.to_string(),
                    tx.category.clone(),
                    tx.notes.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(records)?)?;
        }
        other => {
            eprintln!("Unknown format: {} (use csv|json)", other);
        }
    }
    Ok(())
}
