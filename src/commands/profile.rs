// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::Profile;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::{api, config};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let profile = match config::load_cached_profile()? {
        Some(profile) => profile,
        None => {
            let client = api::Client::new(config::backend_url())?;
            api::profile_or_default(&client)
        }
    };

    if !maybe_print_json(json_flag, jsonl_flag, &profile)? {
        print_profile(&profile);
    }
    Ok(())
}

pub(crate) fn print_profile(profile: &Profile) {
    let rows = vec![
        vec!["Currency".to_string(), profile.currency_symbol.clone()],
        vec![
            "Monthly target".to_string(),
            fmt_money(profile.budget_target, &profile.currency_symbol),
        ],
        vec!["Categories".to_string(), profile.categories.join(", ")],
        vec![
            "Onboarded".to_string(),
            if profile.onboarded { "yes" } else { "no" }.to_string(),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
}
