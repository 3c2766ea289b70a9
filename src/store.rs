// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db;
use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Record};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Persistence for the two record collections.
pub trait RecordStore {
    fn ensure_schema(&self) -> TallyResult<()>;

    fn insert(
        &self,
        category: Category,
        name: &str,
        amount: Option<i64>,
        date: NaiveDate,
    ) -> TallyResult<i64>;

    /// Returns false when no record had that id.
    fn delete(&self, category: Category, id: i64) -> TallyResult<bool>;

    /// Records in insertion order.
    fn list_all(&self, category: Category) -> TallyResult<Vec<Record>>;

    fn sum(&self, category: Category) -> TallyResult<i64>;

    /// List and sum taken together.
    fn snapshot(&self, category: Category) -> TallyResult<(Vec<Record>, i64)> {
        Ok((self.list_all(category)?, self.sum(category)?))
    }
}

/// SQLite file store. Every call opens its own connection and closes it on return.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SqliteStore { path: path.into() }
    }

    fn connect(&self) -> TallyResult<Connection> {
        trace!(path = %self.path.display(), "opening database");
        Ok(db::open(&self.path)?)
    }
}

fn list_with(conn: &Connection, category: Category) -> TallyResult<Vec<Record>> {
    let sql = format!(
        "SELECT id, name, amount, date FROM {} ORDER BY id",
        category.table()
    );
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let name: Option<String> = r.get(1)?;
        let amount: Option<i64> = r.get(2)?;
        let date: String = r.get(3)?;
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|_| TallyError::InvalidDate(date.clone()))?;
        data.push(Record {
            id,
            name: name.unwrap_or_default(),
            amount,
            date,
        });
    }
    Ok(data)
}

/// Totals in Rust so an oversized table still renders, pinned at the i64 bounds.
pub fn total_of<I: IntoIterator<Item = Option<i64>>>(amounts: I) -> i64 {
    amounts
        .into_iter()
        .flatten()
        .fold(0_i64, |acc, a| acc.saturating_add(a))
}

fn sum_with(conn: &Connection, category: Category) -> TallyResult<i64> {
    let sql = format!("SELECT amount FROM {}", category.table());
    let mut stmt = conn.prepare(&sql)?;
    let amounts = stmt
        .query_map([], |r| r.get::<_, Option<i64>>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(total_of(amounts))
}

impl RecordStore for SqliteStore {
    fn ensure_schema(&self) -> TallyResult<()> {
        let conn = self.connect()?;
        db::init_schema(&conn)?;
        Ok(())
    }

    fn insert(
        &self,
        category: Category,
        name: &str,
        amount: Option<i64>,
        date: NaiveDate,
    ) -> TallyResult<i64> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            &format!(
                "INSERT INTO {}(name, amount, date) VALUES (?1, ?2, ?3)",
                category.table()
            ),
            params![name, amount, date.format("%Y-%m-%d").to_string()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        debug!(%category, id, ?amount, "inserted record");
        Ok(id)
    }

    fn delete(&self, category: Category, id: i64) -> TallyResult<bool> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let n = tx.execute(
            &format!("DELETE FROM {} WHERE id=?1", category.table()),
            params![id],
        )?;
        tx.commit()?;
        debug!(%category, id, removed = n, "deleted record");
        Ok(n > 0)
    }

    fn list_all(&self, category: Category) -> TallyResult<Vec<Record>> {
        let conn = self.connect()?;
        list_with(&conn, category)
    }

    fn sum(&self, category: Category) -> TallyResult<i64> {
        let conn = self.connect()?;
        sum_with(&conn, category)
    }

    fn snapshot(&self, category: Category) -> TallyResult<(Vec<Record>, i64)> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let records = list_with(&tx, category)?;
        tx.commit()?;
        let total = total_of(records.iter().map(|r| r.amount));
        Ok((records, total))
    }
}
