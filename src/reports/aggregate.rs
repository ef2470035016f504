// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{CategoryTotal, MonthlyTotal};
use crate::models::Transaction;

/// Month key used by every report: the YYYY-MM prefix of the ISO date.
/// Lexicographic order on these keys equals chronological order.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// The one group-by reducer behind both reports: per key, sum of amounts
/// (accumulated in input order) and row count.
fn group_totals<K, F>(transactions: &[Transaction], key: F) -> BTreeMap<K, (Decimal, u64)>
where
    K: Ord,
    F: Fn(&Transaction) -> K,
{
    let mut groups: BTreeMap<K, (Decimal, u64)> = BTreeMap::new();
    for t in transactions {
        let entry = groups.entry(key(t)).or_insert((Decimal::ZERO, 0));
        entry.0 += t.amount;
        entry.1 += 1;
    }
    groups
}

/// Totals per distinct (month, type) pair, newest month first. Within a
/// month the type order is fixed by the key ordering.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    group_totals(transactions, |t| (month_key(t.date), t.r#type))
        .into_iter()
        .rev()
        .map(|((month, kind), (total, _))| MonthlyTotal {
            month,
            r#type: kind,
            total,
        })
        .collect()
}

/// Totals and counts per distinct (category, type) pair, sorted
/// non-increasing by total. The sort is stable, so equal totals keep the
/// (category, type) ordering the map produced.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut rows: Vec<CategoryTotal> =
        group_totals(transactions, |t| (t.category.clone(), t.r#type))
            .into_iter()
            .map(|((category, kind), (total, count))| CategoryTotal {
                category,
                r#type: kind,
                total,
                count,
            })
            .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows
}
