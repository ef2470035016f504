// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use super::aggregate::month_key;
use super::{Prediction, Trend};
use crate::models::{Transaction, TxKind};

/// Naive next-month expense projection.
///
/// Deliberately simple, and kept that way: the estimate is the mean of the
/// per-month expense totals, and the trend compares only the two most
/// recent months against a +/-10% band. Not a forecasting model.
pub fn project(transactions: &[Transaction]) -> Prediction {
    let mut monthly: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.r#type == TxKind::Expense) {
        *monthly.entry(month_key(t.date)).or_insert(Decimal::ZERO) += t.amount;
    }

    if monthly.is_empty() {
        return Prediction {
            next_month_expense: Decimal::ZERO,
            trend: Trend::NoData,
        };
    }

    let total = monthly.values().fold(Decimal::ZERO, |acc, v| acc + *v);
    let avg = total / Decimal::from(monthly.len() as u64);

    let mut newest = monthly.values().rev().copied();
    let trend = match (newest.next(), newest.next()) {
        (Some(recent), Some(previous)) => {
            // 1.1 / 0.9 thresholds around the previous month's total
            if recent > previous * Decimal::new(11, 1) {
                Trend::Increasing
            } else if recent < previous * Decimal::new(9, 1) {
                Trend::Decreasing
            } else {
                Trend::Stable
            }
        }
        _ => Trend::Stable,
    };

    Prediction {
        next_month_expense: avg.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        trend,
    }
}
