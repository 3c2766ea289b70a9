// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-oriented stand-in for the entry window. Reads commands from any
//! `BufRead` so sessions can be scripted.

use crate::controller::{ViewController, check_amount_field};
use crate::error::{AMOUNT_FORMAT_HINT, TallyError};
use crate::store::RecordStore;
use crate::utils::{parse_id, total_label, view_table};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

/// Pre-filled into the amount prompt as an example.
pub const SAMPLE_AMOUNT: &str = "1.23";

const HELP: &str = "\
commands:
  add           enter a new record (name, then amount)
  select <id>   pick a row for deletion
  delete        delete the picked row
  toggle        switch between expenses and earnings
  show          redraw the list
  help          this text
  quit          leave";

pub fn run<S, R, W>(ctl: &mut ViewController<S>, mut input: R, out: &mut W) -> Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    draw(ctl, out)?;
    loop {
        write!(out, "{}> ", ctl.active())?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let mut words = line.split_whitespace();
        match words.next() {
            None => continue,
            Some("quit") | Some("exit") => break,
            Some("help") => writeln!(out, "{}", HELP)?,
            Some("show") => match ctl.render().map(|_| ()) {
                Ok(_) => draw(ctl, out)?,
                Err(e) => report(out, e)?,
            },
            Some("toggle") => match ctl.toggle() {
                Ok(_) => draw(ctl, out)?,
                Err(e) => report(out, e)?,
            },
            Some("select") => match words.next().map(parse_id) {
                Some(Ok(id)) => {
                    if ctl.select(id) {
                        writeln!(out, "Selected #{}", id)?;
                    }
                }
                _ => writeln!(out, "usage: select <id>")?,
            },
            Some("delete") => {
                let Some(id) = ctl.selected() else {
                    continue;
                };
                match ctl.delete_selected() {
                    Ok(true) => {
                        writeln!(out, "Deleted #{}", id)?;
                        draw(ctl, out)?;
                    }
                    Ok(false) => {
                        writeln!(out, "#{} was already gone", id)?;
                        draw(ctl, out)?;
                    }
                    Err(e) => report(out, e)?,
                }
            }
            Some("add") => {
                let Some(name) = prompt(&mut input, out, "Name: ")? else {
                    break;
                };
                let Some(amount) = amount_field(&mut input, out)? else {
                    break;
                };
                match ctl.submit(&name, &amount) {
                    Ok(id) => {
                        writeln!(out, "Saved #{}", id)?;
                        draw(ctl, out)?;
                    }
                    Err(e) => report(out, e)?,
                }
            }
            Some(other) => writeln!(out, "Unknown command '{}', try 'help'", other)?,
        }
    }
    Ok(())
}

/// Controller failures are shown and the session carries on.
fn report<W: Write>(out: &mut W, e: TallyError) -> Result<()> {
    warn!(error = %e, "form action failed");
    writeln!(out, "Error: {}", e)?;
    Ok(())
}

fn draw<S: RecordStore, W: Write>(ctl: &ViewController<S>, out: &mut W) -> Result<()> {
    let view = ctl.view();
    writeln!(out, "[{}]", view.category)?;
    writeln!(out, "{}", view_table(view))?;
    writeln!(out, "{}", total_label(view))?;
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    read_line(input)
}

/// Keeps asking until the amount passes the strict format check. An empty
/// answer accepts the pre-filled sample.
fn amount_field<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<String>> {
    loop {
        let Some(raw) = prompt(input, out, &format!("Amount [{}]: ", SAMPLE_AMOUNT))? else {
            return Ok(None);
        };
        let text = if raw.trim().is_empty() {
            SAMPLE_AMOUNT.to_string()
        } else {
            raw.trim().to_string()
        };
        match check_amount_field(&text) {
            Ok(()) => return Ok(Some(text)),
            Err(_) => {
                warn!(input = %text, "rejected amount field");
                writeln!(out, "Error: {}", AMOUNT_FORMAT_HINT)?;
            }
        }
    }
}
