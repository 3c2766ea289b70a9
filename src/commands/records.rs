// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::controller::{SubmitPolicy, ViewController};
use crate::models::{Category, RowView, View};
use crate::store::RecordStore;
use crate::utils::{category_arg, maybe_print_json, parse_id, total_label, view_table};
use anyhow::{Context, Result};

pub fn handle<S: RecordStore>(
    store: S,
    policy: SubmitPolicy,
    m: (&str, &clap::ArgMatches),
) -> Result<()> {
    match m {
        ("add", sub) => {
            let category = category_arg(sub)?;
            let name = sub.get_one::<String>("name").map(String::as_str).unwrap_or("");
            let amount = sub
                .get_one::<String>("amount")
                .context("--amount is required")?;
            let row = add(store, policy, category, name, amount)?;
            println!("Recorded #{} in {}: '{}' {}", row.id, category, row.name, row.amount);
        }
        ("list", sub) => {
            let view = list(store, category_arg(sub)?)?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view.rows)? {
                println!("{}", view_table(&view));
                println!("{}", total_label(&view));
            }
        }
        ("rm", sub) => {
            let category = category_arg(sub)?;
            let raw = sub.get_one::<String>("id").context("--id is required")?;
            let id = parse_id(raw)?;
            if remove(store, category, id)? {
                println!("Removed #{} from {}", id, category);
            } else {
                println!("No record #{} in {}", id, category);
            }
        }
        ("total", sub) => {
            let view = list(store, category_arg(sub)?)?;
            println!("{}", total_label(&view));
        }
        _ => {}
    }
    Ok(())
}

pub fn add<S: RecordStore>(
    store: S,
    policy: SubmitPolicy,
    category: Category,
    name: &str,
    amount: &str,
) -> Result<RowView> {
    let mut ctl = ViewController::with_category(store, policy, category)?;
    let id = ctl.submit(name, amount)?;
    ctl.view()
        .rows
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .with_context(|| format!("Record #{} missing after insert", id))
}

pub fn list<S: RecordStore>(store: S, category: Category) -> Result<View> {
    let ctl = ViewController::with_category(store, SubmitPolicy::default(), category)?;
    Ok(ctl.view().clone())
}

/// Deletes through the form path: select, then delete the selection.
pub fn remove<S: RecordStore>(store: S, category: Category, id: i64) -> Result<bool> {
    let mut ctl = ViewController::with_category(store, SubmitPolicy::default(), category)?;
    if !ctl.select(id) {
        return Ok(false);
    }
    Ok(ctl.delete_selected()?)
}
