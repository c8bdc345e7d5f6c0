// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pocketledger::{cli, commands, utils};

fn main() -> Result<()> {
    utils::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("onboard", sub)) => commands::onboard::handle(sub)?,
        Some(("profile", sub)) => commands::profile::handle(sub)?,
        Some(("summary", sub)) => commands::summary::handle(sub)?,
        Some(("tx", sub)) => commands::transactions::handle(sub)?,
        Some(("export", sub)) => commands::export::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
