// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! State behind the expense/earnings form: which category is shown, which
//! row is selected, and the last rendered list and total.

use crate::error::{TallyError, TallyResult};
use crate::models::{Category, RowView, View};
use crate::money::{format_cents, is_valid_decimal, parse_cents};
use crate::store::RecordStore;
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

/// What to do when the submitted amount does not parse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Refuse the submission.
    #[default]
    Strict,
    /// Store the record with no amount.
    Lenient,
}

/// Focus-loss check for the amount field.
pub fn check_amount_field(text: &str) -> TallyResult<()> {
    if is_valid_decimal(text) {
        Ok(())
    } else {
        Err(TallyError::AmountFormat(text.to_string()))
    }
}

pub struct ViewController<S: RecordStore> {
    store: S,
    policy: SubmitPolicy,
    active: Category,
    selected: Option<i64>,
    view: View,
}

impl<S: RecordStore> ViewController<S> {
    /// Creates the schema if needed and renders the expenses list.
    pub fn new(store: S, policy: SubmitPolicy) -> TallyResult<Self> {
        Self::with_category(store, policy, Category::default())
    }

    pub fn with_category(store: S, policy: SubmitPolicy, category: Category) -> TallyResult<Self> {
        store.ensure_schema()?;
        let mut ctl = ViewController {
            store,
            policy,
            active: category,
            selected: None,
            view: View::empty(category),
        };
        ctl.render()?;
        Ok(ctl)
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switch to the other category.
    pub fn toggle(&mut self) -> TallyResult<Category> {
        self.active = self.active.toggled();
        self.selected = None;
        info!(category = %self.active, "switched category");
        self.render()?;
        Ok(self.active)
    }

    /// Remember `id` if it is on screen. Unknown ids keep the old selection.
    pub fn select(&mut self, id: i64) -> bool {
        if self.view.contains(id) {
            self.selected = Some(id);
            true
        } else {
            debug!(id, category = %self.active, "selection lookup missed");
            false
        }
    }

    pub fn submit(&mut self, name: &str, amount_text: &str) -> TallyResult<i64> {
        self.submit_on(name, amount_text, Local::now().date_naive())
    }

    pub fn submit_on(&mut self, name: &str, amount_text: &str, date: NaiveDate) -> TallyResult<i64> {
        let amount = parse_cents(amount_text);
        if amount.is_none() {
            match self.policy {
                SubmitPolicy::Strict => {
                    return Err(TallyError::InvalidAmount(amount_text.to_string()));
                }
                SubmitPolicy::Lenient => {
                    debug!(amount_text, "storing record without amount");
                }
            }
        }
        if let Some(cents) = amount {
            let current = self.store.sum(self.active)?;
            if current.checked_add(cents).is_none() {
                return Err(TallyError::TotalOverflow(cents, self.active.to_string()));
            }
        }
        let id = self.store.insert(self.active, name, amount, date)?;
        self.selected = None;
        self.render()?;
        Ok(id)
    }

    /// Delete the selected record. Without a selection nothing happens.
    pub fn delete_selected(&mut self) -> TallyResult<bool> {
        let Some(id) = self.selected.take() else {
            debug!("delete requested with nothing selected");
            return Ok(false);
        };
        let removed = self.store.delete(self.active, id)?;
        self.render()?;
        Ok(removed)
    }

    /// Reload list and total for the active category.
    pub fn render(&mut self) -> TallyResult<&View> {
        let (records, total) = self.store.snapshot(self.active)?;
        let rows = records
            .into_iter()
            .map(|r| RowView {
                id: r.id,
                name: r.name,
                amount: format_cents(r.amount),
                date: r.date.format("%Y-%m-%d").to_string(),
            })
            .collect();
        self.view = View {
            category: self.active,
            rows,
            total: format_cents(Some(total)),
        };
        if let Some(id) = self.selected {
            if !self.view.contains(id) {
                self.selected = None;
            }
        }
        Ok(&self.view)
    }
}
