// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::session::Session;
use crate::utils::{
    get_api_base_url, get_currency_symbol, pretty_table, set_api_base_url, set_currency_symbol,
};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-api", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            set_api_base_url(conn, url)?;
            println!("API base URL set to {}", get_api_base_url(conn)?);
        }
        Some(("set-currency", sub)) => {
            let symbol = sub.get_one::<String>("symbol").unwrap().trim();
            set_currency_symbol(conn, symbol)?;
            println!("Currency symbol set to {}", symbol);
        }
        Some(("show", _)) => {
            let signed_in = Session::load(conn)?.is_some();
            let rows = vec![
                vec!["api_base_url".into(), get_api_base_url(conn)?],
                vec!["currency_symbol".into(), get_currency_symbol(conn)?],
                vec!["signed_in".into(), signed_in.to_string()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
