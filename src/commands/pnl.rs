// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::aggregate::{MonthBuckets, aggregate};
use crate::api::FinanceBackend;
use crate::commands::{fetched, session_client, transactions::month_rows};
use crate::models::{Source, TransactionKind};
use crate::reconcile::{ProfitLossEntry, ProfitLossReport, reconcile};
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let api = session_client(conn)?;
    let symbol = get_currency_symbol(conn)?;
    show(&api, sub, &symbol)
}

pub struct ProfitLossView {
    pub income: MonthBuckets,
    pub expenses: MonthBuckets,
    pub sources: Vec<Source>,
    pub report: ProfitLossReport,
}

/// All three fetches must succeed before anything is derived.
pub fn load(backend: &dyn FinanceBackend, month: Option<&str>) -> Result<ProfitLossView> {
    let income_records = fetched(backend.transactions(TransactionKind::Income))?;
    let expense_records = fetched(backend.transactions(TransactionKind::Expense))?;
    let sources = fetched(backend.sources())?;

    let mut income = aggregate(&income_records)?;
    let mut expenses = aggregate(&expense_records)?;
    if let Some(month) = month {
        income.retain_month(month);
        expenses.retain_month(month);
    }
    let report = reconcile(&income, &expenses);
    Ok(ProfitLossView {
        income,
        expenses,
        sources,
        report,
    })
}

pub fn pnl_row(e: &ProfitLossEntry, symbol: &str) -> Vec<String> {
    vec![
        e.month_label.clone(),
        fmt_money(&e.total_income, symbol),
        fmt_money(&e.total_expenses, symbol),
        fmt_money(&e.profit_loss, symbol),
        if e.is_surplus() { "surplus" } else { "deficit" }.to_string(),
    ]
}

fn show(backend: &dyn FinanceBackend, sub: &clap::ArgMatches, symbol: &str) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let detail = sub.get_flag("detail");
    let month = sub.get_one::<String>("month").map(|s| s.as_str());
    let view = load(backend, month)?;

    let ordered = view.report.newest_first();
    if maybe_print_json(json_flag, jsonl_flag, &ordered)? {
        return Ok(());
    }
    if ordered.is_empty() {
        println!("No data found.");
        return Ok(());
    }

    if !detail {
        let rows = ordered.iter().map(|e| pnl_row(e, symbol)).collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Profit/Loss", ""], rows)
        );
        return Ok(());
    }

    for e in ordered {
        println!(
            "{}  Profit/Loss: {} ({})",
            e.month_label,
            fmt_money(&e.profit_loss, symbol),
            if e.is_surplus() { "surplus" } else { "deficit" }
        );
        for (title, total, side) in [
            ("Income", &e.total_income, &view.income),
            ("Expenses", &e.total_expenses, &view.expenses),
        ] {
            println!("  {}  Total {}: {}", title, title, fmt_money(total, symbol));
            if let Some(m) = side.get(&e.month_label) {
                println!(
                    "{}",
                    pretty_table(
                        &["Day", "Name", "Amount", "Source", "Description"],
                        month_rows(m, &view.sources, symbol),
                    )
                );
            }
        }
    }
    Ok(())
}
