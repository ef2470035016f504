// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

use crate::models::{Category, Transaction, TxKind};

/// Read side consumed by the reporting layer: a full snapshot of the
/// transaction set. Reports never mutate; each call re-reads.
pub trait TransactionStore {
    fn snapshot(&self) -> Result<Vec<Transaction>>;
}

/// Optional filters for `tx list`.
#[derive(Debug, Default)]
pub struct TxFilter {
    pub month: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TxKind>,
    pub limit: Option<usize>,
}

/// Fields of an existing transaction to overwrite. `None` leaves the
/// stored value untouched.
#[derive(Debug, Default)]
pub struct TxPatch {
    pub date: Option<NaiveDate>,
    pub kind: Option<TxKind>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub note: Option<String>,
}

pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn add_transaction(
        &self,
        date: NaiveDate,
        kind: TxKind,
        amount: Decimal,
        category: &str,
        note: Option<&str>,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO transactions(type, amount, category, note, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![kind.as_str(), amount.to_string(), category, note, date],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn update_transaction(&self, id: i64, patch: &TxPatch) -> Result<bool> {
        let mut sets: Vec<&str> = Vec::new();
        let mut params_vec: Vec<String> = Vec::new();
        if let Some(date) = patch.date {
            sets.push("date=?");
            params_vec.push(date.to_string());
        }
        if let Some(kind) = patch.kind {
            sets.push("type=?");
            params_vec.push(kind.as_str().to_string());
        }
        if let Some(amount) = patch.amount {
            sets.push("amount=?");
            params_vec.push(amount.to_string());
        }
        if let Some(ref category) = patch.category {
            sets.push("category=?");
            params_vec.push(category.clone());
        }
        if let Some(ref note) = patch.note {
            sets.push("note=?");
            params_vec.push(note.clone());
        }
        if sets.is_empty() {
            bail!("Nothing to update for transaction {}", id);
        }
        let sql = format!("UPDATE transactions SET {} WHERE id=?", sets.join(", "));
        params_vec.push(id.to_string());
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        let changed = self
            .conn
            .execute(&sql, rusqlite::params_from_iter(params))?;
        Ok(changed > 0)
    }

    pub fn delete_transaction(&self, id: i64) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(changed > 0)
    }

    pub fn transactions(&self, filter: &TxFilter) -> Result<Vec<Transaction>> {
        let mut sql = String::from(
            "SELECT id, type, amount, category, note, date, created_at
             FROM transactions WHERE 1=1",
        );
        let mut params_vec: Vec<String> = Vec::new();
        if let Some(ref month) = filter.month {
            sql.push_str(" AND substr(date,1,7)=?");
            params_vec.push(month.clone());
        }
        if let Some(ref category) = filter.category {
            sql.push_str(" AND category=?");
            params_vec.push(category.clone());
        }
        if let Some(kind) = filter.kind {
            sql.push_str(" AND type=?");
            params_vec.push(kind.as_str().to_string());
        }
        sql.push_str(" ORDER BY date DESC, created_at DESC, id DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(" LIMIT ?");
            params_vec.push(limit.to_string());
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = if params_vec.is_empty() {
            stmt.query([])?
        } else {
            let params: Vec<&dyn rusqlite::ToSql> = params_vec
                .iter()
                .map(|s| s as &dyn rusqlite::ToSql)
                .collect();
            stmt.query(rusqlite::params_from_iter(params))?
        };

        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            let id: i64 = r.get(0)?;
            let kind_s: String = r.get(1)?;
            let amount_s: String = r.get(2)?;
            let category: String = r.get(3)?;
            let note: Option<String> = r.get(4)?;
            let date_s: String = r.get(5)?;
            let created_at: String = r.get(6)?;

            // Rows that fail to parse are excluded rather than poisoning
            // every report derived from the snapshot.
            let Ok(kind) = kind_s.parse::<TxKind>() else {
                tracing::warn!("skipping transaction {}: unknown type '{}'", id, kind_s);
                continue;
            };
            let Ok(amount) = amount_s.parse::<Decimal>() else {
                tracing::warn!("skipping transaction {}: malformed amount '{}'", id, amount_s);
                continue;
            };
            let Ok(date) = NaiveDate::parse_from_str(&date_s, "%Y-%m-%d") else {
                tracing::warn!("skipping transaction {}: invalid date '{}'", id, date_s);
                continue;
            };
            data.push(Transaction {
                id,
                r#type: kind,
                amount,
                category,
                note,
                date,
                created_at,
            });
        }
        Ok(data)
    }

    pub fn add_category(&self, name: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO categories(name) VALUES (?1)", params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY name")?;
        let rows = stmt.query_map([], |r| {
            Ok(Category {
                id: r.get(0)?,
                name: r.get(1)?,
            })
        })?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }

    pub fn delete_category(&self, name: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE name=?1", params![name])?;
        Ok(changed > 0)
    }
}

impl TransactionStore for SqliteStore<'_> {
    fn snapshot(&self) -> Result<Vec<Transaction>> {
        self.transactions(&TxFilter::default())
    }
}
