// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn category_arg() -> Arg {
    Arg::new("category")
        .long("category")
        .short('c')
        .help("expenses or earnings")
        .default_value("expenses")
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(clap::crate_version!())
        .about("Record expenses and earnings and keep a running total")
        .arg(
            Arg::new("db")
                .long("db")
                .env("TALLYBOOK_DB")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("SQLite file to use instead of the platform data dir"),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Store records even when the amount does not parse"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .help("Defaults to warn, overridden by RUST_LOG"),
        )
        .subcommand(Command::new("init").about("Create the database tables"))
        .subcommand(
            Command::new("add")
                .about("Add a record dated today")
                .arg(category_arg())
                .arg(Arg::new("name").long("name").default_value(""))
                .arg(Arg::new("amount").long("amount").required(true)),
        )
        .subcommand(
            Command::new("list")
                .about("List records with their total")
                .arg(category_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("jsonl")
                        .long("jsonl")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json"),
                ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a record by id")
                .arg(category_arg())
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(
            Command::new("total")
                .about("Print the category total")
                .arg(category_arg()),
        )
        .subcommand(Command::new("form").about("Interactive entry form"))
}
