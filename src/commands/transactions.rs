// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::Local;
use rusqlite::Connection;

use crate::aggregate::{MonthBucket, MonthBuckets, aggregate};
use crate::api::{ApiClient, FinanceBackend};
use crate::commands::{fetched, session_client};
use crate::forms::{TransactionForm, TransactionPatch};
use crate::models::{Source, TransactionKind, resolve_source_name};
use crate::utils::{fmt_money, get_currency_symbol, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches, kind: TransactionKind) -> Result<()> {
    let api = session_client(conn)?;
    let symbol = get_currency_symbol(conn)?;
    match m.subcommand() {
        Some(("list", sub)) => list(&api, sub, kind, &symbol)?,
        Some(("add", sub)) => add(&api, sub, kind, &symbol)?,
        Some(("edit", sub)) => edit(&api, sub, kind, &symbol)?,
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            api.delete_transaction(kind, id)
                .with_context(|| format!("Error deleting {}", kind.label()))?;
            println!("Deleted {} {}", kind.label(), id);
        }
        _ => {}
    }
    Ok(())
}

/// Fetches records and sources, then groups the records. Either fetch
/// failing aborts the whole screen.
pub fn load_grouped(
    backend: &dyn FinanceBackend,
    kind: TransactionKind,
    month: Option<&str>,
) -> Result<(MonthBuckets, Vec<Source>)> {
    let records = fetched(backend.transactions(kind))?;
    let sources = fetched(backend.sources())?;
    let mut grouped = aggregate(&records)?;
    if let Some(month) = month {
        grouped.retain_month(month);
    }
    Ok((grouped, sources))
}

/// One row per record, followed by a total row for each day.
pub fn month_rows(month: &MonthBucket, sources: &[Source], symbol: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for day in month.days_newest_first() {
        for r in &day.records {
            rows.push(vec![
                day.label.clone(),
                r.name.clone(),
                fmt_money(&r.amount, symbol),
                resolve_source_name(r.source_id.as_deref(), sources).to_string(),
                r.description.clone(),
            ]);
        }
        rows.push(vec![
            day.label.clone(),
            "Total".into(),
            fmt_money(&day.total_amount, symbol),
            String::new(),
            String::new(),
        ]);
    }
    rows
}

fn list(
    backend: &dyn FinanceBackend,
    sub: &clap::ArgMatches,
    kind: TransactionKind,
    symbol: &str,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = sub.get_one::<String>("month").map(|s| s.as_str());
    let (grouped, sources) = load_grouped(backend, kind, month)?;

    let ordered = grouped.newest_first();
    if maybe_print_json(json_flag, jsonl_flag, &ordered)? {
        return Ok(());
    }
    if ordered.is_empty() {
        println!("No {}s found.", kind.label());
        return Ok(());
    }
    for m in ordered {
        println!("{}  Total: {}", m.label, fmt_money(&m.total(), symbol));
        println!(
            "{}",
            pretty_table(
                &["Day", "Name", "Amount", "Source", "Description"],
                month_rows(m, &sources, symbol),
            )
        );
    }
    Ok(())
}

fn add(
    api: &ApiClient,
    sub: &clap::ArgMatches,
    kind: TransactionKind,
    symbol: &str,
) -> Result<()> {
    let form = TransactionForm {
        name: sub.get_one::<String>("name").unwrap().to_string(),
        source_id: sub.get_one::<String>("source").unwrap().to_string(),
        description: sub.get_one::<String>("description").unwrap().to_string(),
        amount: sub.get_one::<String>("amount").unwrap().to_string(),
        date: sub.get_one::<String>("date").cloned(),
    };
    let draft = form.validate(Local::now().date_naive())?;
    let sources = fetched(api.sources())?;
    if !sources.iter().any(|s| s.id == draft.source_id) {
        bail!("Unknown source id '{}'", draft.source_id);
    }
    let created = api
        .create_transaction(kind, &draft)
        .with_context(|| format!("Error adding {}", kind.label()))?;
    println!(
        "Added {} '{}' ({} on {}) [{}]",
        kind.label(),
        created.name,
        fmt_money(&created.amount, symbol),
        draft.date,
        created.id
    );
    Ok(())
}

fn edit(
    api: &ApiClient,
    sub: &clap::ArgMatches,
    kind: TransactionKind,
    symbol: &str,
) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let patch = TransactionPatch::from_raw(
        sub.get_one::<String>("name").map(|s| s.as_str()),
        sub.get_one::<String>("source").map(|s| s.as_str()),
        sub.get_one::<String>("description").map(|s| s.as_str()),
        sub.get_one::<String>("amount").map(|s| s.as_str()),
        sub.get_one::<String>("date").map(|s| s.as_str()),
    )?;
    if let Some(ref source_id) = patch.source_id {
        let sources = fetched(api.sources())?;
        if !sources.iter().any(|s| &s.id == source_id) {
            bail!("Unknown source id '{}'", source_id);
        }
    }
    let updated = api
        .update_transaction(kind, id, &patch)
        .with_context(|| format!("Error updating {}", kind.label()))?;
    println!(
        "Updated {} '{}' ({})",
        kind.label(),
        updated.name,
        fmt_money(&updated.amount, symbol)
    );
    Ok(())
}
