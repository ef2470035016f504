// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::models::{Transaction, TxKind};
use fintrack::reports::{PredictReport, Trend, aggregate, trend};
use rust_decimal::Decimal;

fn tx(date: &str, kind: TxKind, amount: &str, category: &str) -> Transaction {
    Transaction {
        id: 0,
        r#type: kind,
        amount: amount.parse::<Decimal>().unwrap(),
        category: category.into(),
        note: None,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        created_at: String::new(),
    }
}

#[test]
fn monthly_groups_and_orders_newest_first() {
    let txs = vec![
        tx("2024-01-15", TxKind::Expense, "50", "Food"),
        tx("2024-01-20", TxKind::Expense, "30", "Food"),
        tx("2024-02-01", TxKind::Expense, "40", "Transportation"),
    ];
    let rows = aggregate::monthly_totals(&txs);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].month, "2024-02");
    assert_eq!(rows[0].r#type, TxKind::Expense);
    assert_eq!(rows[0].total, Decimal::from(40));
    assert_eq!(rows[1].month, "2024-01");
    assert_eq!(rows[1].total, Decimal::from(80));
}

#[test]
fn monthly_one_row_per_distinct_pair() {
    let txs = vec![
        tx("2024-01-05", TxKind::Income, "100", "Salary"),
        tx("2024-01-12", TxKind::Income, "50", "Freelance"),
        tx("2024-01-20", TxKind::Expense, "20", "Food"),
        tx("2024-02-03", TxKind::Income, "10", "Salary"),
    ];
    let rows = aggregate::monthly_totals(&txs);
    assert_eq!(rows.len(), 3);

    let income_sum: Decimal = rows
        .iter()
        .filter(|r| r.r#type == TxKind::Income)
        .map(|r| r.total)
        .sum();
    assert_eq!(income_sum, Decimal::from(160));
    let expense_sum: Decimal = rows
        .iter()
        .filter(|r| r.r#type == TxKind::Expense)
        .map(|r| r.total)
        .sum();
    assert_eq!(expense_sum, Decimal::from(20));
}

#[test]
fn empty_set_yields_empty_reports() {
    assert!(aggregate::monthly_totals(&[]).is_empty());
    assert!(aggregate::category_totals(&[]).is_empty());
}

#[test]
fn categories_sorted_by_total_descending() {
    let txs = vec![
        tx("2024-01-15", TxKind::Expense, "50", "Food"),
        tx("2024-01-20", TxKind::Expense, "30", "Food"),
        tx("2024-02-01", TxKind::Expense, "40", "Transportation"),
        tx("2024-02-02", TxKind::Income, "100", "Salary"),
    ];
    let rows = aggregate::category_totals(&txs);
    assert_eq!(rows.len(), 3);
    for pair in rows.windows(2) {
        assert!(pair[0].total >= pair[1].total);
    }
    assert_eq!(rows[0].category, "Salary");
    assert_eq!(rows[1].category, "Food");
    assert_eq!(rows[1].count, 2);
    assert_eq!(rows[2].count, 1);
}

#[test]
fn categories_tie_break_is_deterministic() {
    let txs = vec![
        tx("2024-01-10", TxKind::Expense, "50", "B"),
        tx("2024-01-11", TxKind::Expense, "50", "A"),
    ];
    let rows = aggregate::category_totals(&txs);
    assert_eq!(rows[0].category, "A");
    assert_eq!(rows[1].category, "B");
}

#[test]
fn predict_on_empty_expenses_is_sentinel() {
    let p = trend::project(&[]);
    assert_eq!(p.trend, Trend::NoData);
    assert_eq!(p.next_month_expense, Decimal::ZERO);
}

#[test]
fn predict_ignores_income_rows() {
    let txs = vec![tx("2024-01-05", TxKind::Income, "100", "Salary")];
    let p = trend::project(&txs);
    assert_eq!(p.trend, Trend::NoData);
}

#[test]
fn predict_single_month_is_stable() {
    let txs = vec![
        tx("2024-01-15", TxKind::Expense, "50", "Food"),
        tx("2024-01-20", TxKind::Expense, "30", "Food"),
    ];
    let p = trend::project(&txs);
    assert_eq!(p.trend, Trend::Stable);
    assert_eq!(p.next_month_expense, Decimal::from(80));
}

#[test]
fn predict_increasing_above_ten_percent() {
    let txs = vec![
        tx("2024-01-10", TxKind::Expense, "100", "Food"),
        tx("2024-02-10", TxKind::Expense, "115", "Food"),
    ];
    let p = trend::project(&txs);
    assert_eq!(p.trend, Trend::Increasing);
    assert_eq!(p.next_month_expense, "107.5".parse::<Decimal>().unwrap());
}

#[test]
fn predict_stable_within_band() {
    let txs = vec![
        tx("2024-01-10", TxKind::Expense, "100", "Food"),
        tx("2024-02-10", TxKind::Expense, "95", "Food"),
    ];
    assert_eq!(trend::project(&txs).trend, Trend::Stable);
}

#[test]
fn predict_decreasing_below_ten_percent() {
    let txs = vec![
        tx("2024-01-10", TxKind::Expense, "100", "Food"),
        tx("2024-02-10", TxKind::Expense, "85", "Food"),
    ];
    assert_eq!(trend::project(&txs).trend, Trend::Decreasing);
}

#[test]
fn predict_rounds_to_cents_half_away_from_zero() {
    let txs = vec![tx("2024-01-10", TxKind::Expense, "33.335", "Food")];
    let p = trend::project(&txs);
    assert_eq!(p.next_month_expense, "33.34".parse::<Decimal>().unwrap());
}

#[test]
fn predict_json_carries_predictions_envelope() {
    let report = PredictReport {
        predictions: trend::project(&[]),
    };
    let val = serde_json::to_value(&report).unwrap();
    assert_eq!(val["predictions"]["trend"], "no_data");
    assert_eq!(val["predictions"]["next_month_expense"], 0.0);
}

#[test]
fn monthly_json_serializes_numbers_and_lowercase_types() {
    let txs = vec![tx("2024-02-01", TxKind::Expense, "40", "Transportation")];
    let val = serde_json::to_value(aggregate::monthly_totals(&txs)).unwrap();
    assert_eq!(val[0]["month"], "2024-02");
    assert_eq!(val[0]["type"], "expense");
    assert_eq!(val[0]["total"], 40.0);
}
