// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::api::FinanceBackend;
use crate::commands::{fetched, session_client};
use crate::forms::SourceTypeForm;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let api = session_client(conn)?;
    match m.subcommand() {
        Some(("list", sub)) => {
            let types = fetched(api.source_types())?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &types)? {
                let rows = types
                    .into_iter()
                    .map(|t| vec![t.id, t.type_name])
                    .collect();
                println!("{}", pretty_table(&["Id", "Type"], rows));
            }
        }
        Some(("add", sub)) => {
            let form = SourceTypeForm {
                type_name: sub.get_one::<String>("name").unwrap().to_string(),
            };
            form.validate()?;
            let added = api
                .create_source_type(&form)
                .context("Error adding source type")?;
            println!("Added source type '{}' [{}]", added.type_name, added.id);
        }
        _ => {}
    }
    Ok(())
}
