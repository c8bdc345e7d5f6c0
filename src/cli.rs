// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("category")
            .long("category")
            .value_name("NAME")
            .help("Only this category (exact match)"),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .value_name("KIND")
            .help("Only this kind: income or expense"),
    )
    .arg(
        Arg::new("start")
            .long("start")
            .value_name("YYYY-MM-DD")
            .help("On or after this day"),
    )
    .arg(
        Arg::new("end")
            .long("end")
            .value_name("YYYY-MM-DD")
            .help("On or before this day"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Personal budget tracking, monthly targets, and spending history")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("onboard")
                .about("Set up currency, monthly target, and categories")
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .value_name("CODE")
                        .help("Currency code (USD, EUR, GBP, JPY, INR, AUD, CAD)"),
                )
                .arg(
                    Arg::new("target")
                        .long("target")
                        .value_name("AMOUNT")
                        .help("Monthly budget target; empty or malformed becomes 0"),
                )
                .arg(
                    Arg::new("toggle")
                        .long("toggle")
                        .value_name("CATEGORY")
                        .action(ArgAction::Append)
                        .help("Toggle a category on/off (repeatable)"),
                ),
        )
        .subcommand(json_flags(
            Command::new("profile").about("Show the adopted profile"),
        ))
        .subcommand(
            json_flags(Command::new("summary").about("Balance, totals, and budget progress")).arg(
                Arg::new("local")
                    .long("local")
                    .help("Recompute the summary from fetched history instead of the precomputed aggregate")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense entry")
                        .arg(
                            Arg::new("title")
                                .long("title")
                                .value_name("TEXT")
                                .required(true),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .value_name("AMOUNT")
                                .required(true),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("KIND")
                                .default_value("expense")
                                .help("income or expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_name("NAME")
                                .help("Defaults to the profile's first category"),
                        )
                        .arg(Arg::new("notes").long("notes").value_name("TEXT")),
                )
                .subcommand(
                    json_flags(filter_args(
                        Command::new("list").about("Filtered history, most recent first"),
                    ))
                    .arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_name("N")
                            .value_parser(value_parser!(usize))
                            .help("Show at most N records"),
                    ),
                ),
        )
        .subcommand(
            filter_args(Command::new("export").about("Export transaction history"))
                .arg(
                    Arg::new("out")
                        .long("out")
                        .value_name("PATH")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FMT")
                        .default_value("csv")
                        .help("csv or json"),
                ),
        )
}
