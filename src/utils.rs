// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::controller::SubmitPolicy;
use crate::models::{Category, View};
use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL};

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Record list in the same column order as the form, amounts right-aligned.
pub fn view_table(view: &View) -> Table {
    let rows = view
        .rows
        .iter()
        .map(|r| vec![r.id.to_string(), r.name.clone(), r.amount.clone(), r.date.clone()])
        .collect();
    let mut t = pretty_table(&["ID", "Name", "Amount", "Date"], rows);
    if let Some(col) = t.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    t
}

pub fn total_label(view: &View) -> String {
    format!("Total: {}", view.total)
}

pub fn category_arg(sub: &clap::ArgMatches) -> Result<Category> {
    let raw = sub
        .get_one::<String>("category")
        .map(String::as_str)
        .unwrap_or("expenses");
    Ok(raw.parse::<Category>()?)
}

pub fn parse_id(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid id '{}'", s))
}

pub fn submit_policy(m: &clap::ArgMatches) -> SubmitPolicy {
    if m.get_flag("lenient") {
        SubmitPolicy::Lenient
    } else {
        SubmitPolicy::Strict
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
