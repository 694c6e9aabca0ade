// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Local};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::FinanceBackend;
use crate::commands::{fetched, session_client};
use crate::models::DailySeries;
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPoint {
    pub day: u32,
    pub income: Decimal,
    pub expenses: Decimal,
    pub profit_loss: Decimal,
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let api = session_client(conn)?;
    let symbol = get_currency_symbol(conn)?;
    let today = Local::now().date_naive();
    let year = sub.get_one::<i32>("year").copied().unwrap_or(today.year());
    let month = sub.get_one::<u32>("month").copied().unwrap_or(today.month());
    show(&api, sub, year, month, &symbol)
}

/// Chart series for one month. Income days come first, then days that
/// only have expenses. A backend profit/loss value is matched by day when
/// it carries one, by position otherwise, and computed when missing.
pub fn build_series(series: &DailySeries) -> Vec<DayPoint> {
    let mut days: Vec<u32> = series.incomes.iter().map(|i| i.key.day).collect();
    for e in &series.expenses {
        if !days.contains(&e.key.day) {
            days.push(e.key.day);
        }
    }

    days.iter()
        .enumerate()
        .map(|(pos, &day)| {
            let income: Decimal = series
                .incomes
                .iter()
                .filter(|i| i.key.day == day)
                .map(|i| i.total_income)
                .sum();
            let expenses: Decimal = series
                .expenses
                .iter()
                .filter(|e| e.key.day == day)
                .map(|e| e.total_expenses)
                .sum();
            let keyed = series
                .profit_loss
                .iter()
                .find(|p| p.key.map(|k| k.day) == Some(day));
            let profit_loss = match keyed {
                Some(p) => p.profit_loss,
                None => series
                    .profit_loss
                    .get(pos)
                    .filter(|p| p.key.is_none())
                    .map(|p| p.profit_loss)
                    .unwrap_or(income - expenses),
            };
            DayPoint {
                day,
                income,
                expenses,
                profit_loss,
            }
        })
        .collect()
}

fn show(
    backend: &dyn FinanceBackend,
    sub: &clap::ArgMatches,
    year: i32,
    month: u32,
    symbol: &str,
) -> Result<()> {
    let series = fetched(backend.daily(year, month))?;
    let points = build_series(&series);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        return Ok(());
    }
    if points.is_empty() {
        println!("No data for {}-{:02}.", year, month);
        return Ok(());
    }
    let rows = points
        .iter()
        .map(|p| {
            vec![
                p.day.to_string(),
                fmt_money(&p.income, symbol),
                fmt_money(&p.expenses, symbol),
                fmt_money(&p.profit_loss, symbol),
            ]
        })
        .collect();
    println!("Dashboard {}-{:02}", year, month);
    println!(
        "{}",
        pretty_table(&["Day", "Income", "Expenses", "Profit/Loss"], rows)
    );
    Ok(())
}
