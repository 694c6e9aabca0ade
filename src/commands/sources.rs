// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use rusqlite::Connection;

use crate::api::{ApiClient, FinanceBackend};
use crate::commands::{fetched, session_client};
use crate::forms::SourceForm;
use crate::models::{Source, SourceType};
use crate::utils::{maybe_print_json, pretty_table};

pub const ALL_TYPES: &str = "all";

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let api = session_client(conn)?;
    match m.subcommand() {
        Some(("list", sub)) => list(&api, sub)?,
        Some(("add", sub)) => add(&api, sub)?,
        _ => {}
    }
    Ok(())
}

/// Sources of one type; `None` or "all" keeps every source.
pub fn filter_by_type<'a>(sources: &'a [Source], type_id: Option<&str>) -> Vec<&'a Source> {
    match type_id.map(str::trim) {
        None => sources.iter().collect(),
        Some(t) if t.eq_ignore_ascii_case(ALL_TYPES) => sources.iter().collect(),
        Some(t) => sources.iter().filter(|s| s.source_type_id == t).collect(),
    }
}

pub fn type_name<'a>(type_id: &str, types: &'a [SourceType]) -> &'a str {
    types
        .iter()
        .find(|t| t.id == type_id)
        .map(|t| t.type_name.as_str())
        .unwrap_or("")
}

fn list(backend: &dyn FinanceBackend, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let types = fetched(backend.source_types())?;
    let sources = fetched(backend.sources())?;
    let shown = filter_by_type(&sources, sub.get_one::<String>("type").map(|s| s.as_str()));

    if maybe_print_json(json_flag, jsonl_flag, &shown)? {
        return Ok(());
    }
    if shown.is_empty() {
        println!("No sources available");
        return Ok(());
    }
    let rows = shown
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.source_name.clone(),
                type_name(&s.source_type_id, &types).to_string(),
                s.source_description.clone(),
                s.source_image.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Name", "Type", "Description", "Image"], rows)
    );
    Ok(())
}

fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let form = SourceForm {
        source_name: sub.get_one::<String>("name").unwrap().to_string(),
        source_image: sub.get_one::<String>("image").unwrap().to_string(),
        source_type_id: sub.get_one::<String>("type").unwrap().to_string(),
        source_description: sub.get_one::<String>("description").unwrap().to_string(),
    };
    form.validate()?;
    let types = fetched(api.source_types())?;
    if !types.iter().any(|t| t.id == form.source_type_id.trim()) {
        bail!("Unknown source type id '{}'", form.source_type_id.trim());
    }
    let added = api.create_source(&form).context("Error adding source")?;
    println!("Added source '{}' [{}]", added.source_name, added.id);
    Ok(())
}
