// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::TallyError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Expenses,
    Earnings,
}

impl Category {
    /// Backing table. Only these two names ever reach SQL text.
    pub fn table(self) -> &'static str {
        match self {
            Category::Expenses => "expenses",
            Category::Earnings => "earnings",
        }
    }

    pub fn toggled(self) -> Category {
        match self {
            Category::Expenses => Category::Earnings,
            Category::Earnings => Category::Expenses,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

impl FromStr for Category {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expenses" | "expense" => Ok(Category::Expenses),
            "earnings" | "earning" => Ok(Category::Earnings),
            other => Err(TallyError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub amount: Option<i64>, // cents
    pub date: NaiveDate,
}

/// One displayed line of the record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: i64,
    pub name: String,
    pub amount: String,
    pub date: String,
}

/// Everything the form shows for the active category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub category: Category,
    pub rows: Vec<RowView>,
    pub total: String,
}

impl View {
    pub fn empty(category: Category) -> Self {
        View {
            category,
            rows: Vec::new(),
            total: crate::money::format_cents(None),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.rows.iter().any(|r| r.id == id)
    }
}
