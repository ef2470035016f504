// Copyright (c) 2025 Fintrack Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::reports::ReportService;
use crate::store::{SqliteStore, TransactionStore};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let reports = ReportService::new(SqliteStore::new(conn));
    match m.subcommand() {
        Some(("monthly", sub)) => monthly(&reports, sub)?,
        Some(("categories", sub)) => categories(&reports, sub)?,
        Some(("predict", sub)) => predict(&reports, sub)?,
        _ => {}
    }
    Ok(())
}

fn monthly<S: TransactionStore>(reports: &ReportService<S>, sub: &clap::ArgMatches) -> Result<()> {
    let rows = reports.monthly()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    r.r#type.to_string(),
                    format!("{:.2}", r.total),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Type", "Total"], data));
    }
    Ok(())
}

fn categories<S: TransactionStore>(
    reports: &ReportService<S>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let rows = reports.by_category()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    r.r#type.to_string(),
                    format!("{:.2}", r.total),
                    r.count.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Type", "Total", "Count"], data)
        );
    }
    Ok(())
}

fn predict<S: TransactionStore>(reports: &ReportService<S>, sub: &clap::ArgMatches) -> Result<()> {
    let report = reports.predict()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        let p = &report.predictions;
        let data = vec![vec![
            format!("{:.2}", p.next_month_expense),
            p.trend.to_string(),
        ]];
        println!(
            "{}",
            pretty_table(&["Next month expense", "Trend"], data)
        );
    }
    Ok(())
}
