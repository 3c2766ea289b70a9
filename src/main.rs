// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use tallybook::controller::ViewController;
use tallybook::store::{RecordStore, SqliteStore};
use tallybook::utils::submit_policy;
use tallybook::{cli, commands, db, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    logging::init(level);

    let path = db::resolve_db_path(matches.get_one::<PathBuf>("db").map(PathBuf::as_path))?;
    let store = SqliteStore::new(path.clone());
    let policy = submit_policy(&matches);

    match matches.subcommand() {
        Some(("init", _)) => {
            store.ensure_schema()?;
            println!("Database initialized at {}", path.display());
        }
        Some(("form", _)) => {
            let mut ctl = ViewController::new(store, policy)?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            commands::form::run(&mut ctl, stdin.lock(), &mut stdout)?;
        }
        Some((name, sub)) => commands::records::handle(store, policy, (name, sub))?,
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
