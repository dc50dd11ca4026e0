// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print JSON instead of a table")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print one JSON object per line")
            .action(ArgAction::SetTrue),
    )
}

pub fn build_cli() -> Command {
    Command::new("tradeclip")
        .about("P2P crypto trade simulation, arbitrage math, and operations ledger")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("simulate")
                .about("Run trade calculations without recording anything")
                .subcommand(json_flags(
                    Command::new("p2p")
                        .about("Simulate a single P2P trade")
                        .arg(
                            Arg::new("direction")
                                .long("direction")
                                .help("Sell or Buy")
                                .required(true),
                        )
                        .arg(Arg::new("crypto").long("crypto").required(true))
                        .arg(Arg::new("fiat").long("fiat").required(true))
                        .arg(Arg::new("exchange").long("exchange").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .help("Quantity given up: crypto if selling, fiat if buying")
                                .required(true),
                        )
                        .arg(
                            Arg::new("rate")
                                .long("rate")
                                .help("Exchange rate, fiat per crypto unit")
                                .required(true),
                        )
                        .arg(
                            Arg::new("fee")
                                .long("fee")
                                .help("Fee in the received unit (default 0)"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("arbitrage")
                        .about("Simulate a two-leg cross-exchange arbitrage")
                        .arg(Arg::new("crypto").long("crypto").required(true))
                        .arg(
                            Arg::new("buy-exchange")
                                .long("buy-exchange")
                                .required(true),
                        )
                        .arg(
                            Arg::new("sell-exchange")
                                .long("sell-exchange")
                                .required(true),
                        )
                        .arg(Arg::new("buy-price").long("buy-price").required(true))
                        .arg(Arg::new("sell-price").long("sell-price").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .help("Crypto units traded")
                                .required(true),
                        )
                        .arg(Arg::new("buy-fee").long("buy-fee").help("Fiat (default 0)"))
                        .arg(
                            Arg::new("sell-fee")
                                .long("sell-fee")
                                .help("Fiat (default 0)"),
                        ),
                )),
        )
        .subcommand(
            Command::new("ops")
                .about("Record and list operations")
                .subcommand(
                    Command::new("add")
                        .about("Record one operation; the fiat amount is derived, not supplied")
                        .arg(Arg::new("user").long("user").required(true))
                        .arg(Arg::new("exchange").long("exchange").required(true))
                        .arg(Arg::new("direction").long("direction").required(true))
                        .arg(Arg::new("crypto").long("crypto").required(true))
                        .arg(Arg::new("fiat").long("fiat").required(true))
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .help("Crypto amount")
                                .required(true),
                        )
                        .arg(Arg::new("rate").long("rate").required(true))
                        .arg(Arg::new("fee").long("fee")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List a user's operations, newest first")
                        .arg(Arg::new("user").long("user").required(true))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Aggregate a user's operations into summary statistics")
                .arg(Arg::new("user").long("user").required(true)),
        ))
}
