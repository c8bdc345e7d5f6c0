// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::onboarding::Wizard;
use crate::{api, config};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let mut wizard = Wizard::new();

    wizard.next();
    if let Some(code) = sub.get_one::<String>("currency") {
        if !wizard.select_currency(code) {
            anyhow::bail!("Unknown currency code '{}'", code);
        }
    }

    wizard.next();
    if let Some(target) = sub.get_one::<String>("target") {
        wizard.set_target_input(target.as_str());
    }

    wizard.next();
    if let Some(toggles) = sub.get_many::<String>("toggle") {
        for name in toggles {
            wizard.toggle_category(name);
        }
    }

    let profile = wizard.finish();

    let client = api::Client::new(config::backend_url())?;
    if let Err(err) = client.submit_onboarding(&profile) {
        // The profile is adopted locally whether or not the backend heard us.
        tracing::warn!("onboarding submission failed, keeping profile locally: {err}");
    }
    config::store_cached_profile(&profile)?;

    println!("You're set up. Profile:");
    super::profile::print_profile(&profile);
    Ok(())
}
