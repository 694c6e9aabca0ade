// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rusqlite::Connection;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::db::{get_setting, set_setting};

const UA: &str = concat!(
    "pesoclip/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/pesoclip)"
);

pub const API_BASE_ENV: &str = "PESOCLIP_API_BASE_URL";
pub const DEFAULT_API_BASE: &str = "http://localhost:4000";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Calendar date of a backend date string. Accepts plain `YYYY-MM-DD`,
/// RFC 3339 timestamps (taken in UTC) and zone-less timestamps.
pub fn record_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// "March 2024"
pub fn month_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

/// en-US short date, "3/1/2024"
pub fn day_label(d: NaiveDate) -> String {
    format!("{}/{}/{}", d.month(), d.day(), d.year())
}

/// Two places, halves rounded away from zero (0.125 -> 0.13).
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, round_money(*d))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn get_currency_symbol(conn: &Connection) -> Result<String> {
    Ok(get_setting(conn, "currency_symbol")?
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string()))
}

pub fn set_currency_symbol(conn: &Connection, symbol: &str) -> Result<()> {
    set_setting(conn, "currency_symbol", symbol)
}

/// Environment override first, then the stored setting, then the default.
pub fn get_api_base_url(conn: &Connection) -> Result<String> {
    if let Ok(v) = std::env::var(API_BASE_ENV) {
        if !v.trim().is_empty() {
            return Ok(v.trim().trim_end_matches('/').to_string());
        }
    }
    Ok(get_setting(conn, "api_base_url")?
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string()))
}

pub fn set_api_base_url(conn: &Connection, url: &str) -> Result<()> {
    let url = url.trim().trim_end_matches('/');
    reqwest::Url::parse(url).with_context(|| format!("Invalid API base URL '{}'", url))?;
    set_setting(conn, "api_base_url", url)
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Installs the global subscriber; `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pesoclip=warn"));

        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    });
}
