// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod trend;

use std::fmt;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::TxKind;
use crate::store::TransactionStore;

/// One row of the monthly report: total per distinct (month, type) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub r#type: TxKind,
    pub total: Decimal,
}

/// One row of the category report: total and row count per distinct
/// (category, type) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub r#type: TxKind,
    pub total: Decimal,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    NoData,
    Increasing,
    Decreasing,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::NoData => "no_data",
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub next_month_expense: Decimal,
    pub trend: Trend,
}

/// `predictions` envelope kept for compatibility with the JSON surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictReport {
    pub predictions: Prediction,
}

/// Read-only report facade. Every call fetches a fresh snapshot from the
/// store and derives the report from it; nothing is cached or mutated.
pub struct ReportService<S> {
    store: S,
}

impl<S: TransactionStore> ReportService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn monthly(&self) -> Result<Vec<MonthlyTotal>> {
        Ok(aggregate::monthly_totals(&self.store.snapshot()?))
    }

    pub fn by_category(&self) -> Result<Vec<CategoryTotal>> {
        Ok(aggregate::category_totals(&self.store.snapshot()?))
    }

    pub fn predict(&self) -> Result<PredictReport> {
        Ok(PredictReport {
            predictions: trend::project(&self.store.snapshot()?),
        })
    }
}
