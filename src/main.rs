// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pesoclip::models::TransactionKind;
use pesoclip::{cli, commands, db, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Settings store initialized at {}", db::db_path()?.display());
        }
        Some(("login", sub)) => commands::auth::login(&conn, sub)?,
        Some(("logout", _)) => commands::auth::logout(&conn)?,
        Some(("register", sub)) => commands::auth::register(&conn, sub)?,
        Some(("whoami", _)) => commands::auth::whoami(&conn)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        Some(("expense", sub)) => {
            commands::transactions::handle(&conn, sub, TransactionKind::Expense)?
        }
        Some(("income", sub)) => {
            commands::transactions::handle(&conn, sub, TransactionKind::Income)?
        }
        Some(("pnl", sub)) => commands::pnl::handle(&conn, sub)?,
        Some(("source", sub)) => commands::sources::handle(&conn, sub)?,
        Some(("source-type", sub)) => commands::source_types::handle(&conn, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&conn, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
