// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::Connection;
use std::path::Path;

use crate::aggregate::MonthBuckets;
use crate::commands::{session_client, transactions::load_grouped};
use crate::models::TransactionKind;
use crate::utils::round_money;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind_raw = sub.get_one::<String>("kind").unwrap();
    let kind = TransactionKind::parse(kind_raw)
        .ok_or_else(|| anyhow!("Unknown kind: {} (use expense|income)", kind_raw))?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let api = session_client(conn)?;
    let (grouped, _) = load_grouped(&api, kind, None)?;
    export_buckets(&grouped, &fmt, Path::new(out))?;
    println!("Exported {}s to {}", kind.label(), out);
    Ok(())
}

/// Writes one line per day bucket (csv) or the grouped tree (json),
/// newest month first.
pub fn export_buckets(grouped: &MonthBuckets, fmt: &str, out: &Path) -> Result<()> {
    let months = grouped.newest_first();
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["month", "day", "total", "records"])?;
            for m in months {
                for d in m.days_newest_first() {
                    wtr.write_record([
                        m.label.clone(),
                        d.label.clone(),
                        format!("{:.2}", round_money(d.total_amount)),
                        d.records.len().to_string(),
                    ])?;
                }
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&months)?)?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    Ok(())
}
