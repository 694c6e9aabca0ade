// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pesoclip::{cli, commands::config, db, session::Session, utils};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn no_session_until_saved() {
    let conn = setup();
    assert!(Session::load(&conn).unwrap().is_none());
    let err = Session::require(&conn).unwrap_err();
    assert_eq!(err.to_string(), "User token not available");
}

#[test]
fn session_round_trips_through_settings() {
    let conn = setup();
    let s = Session {
        token: "jwt.abc".into(),
        user_id: Some("u1".into()),
        is_admin: true,
    };
    s.save(&conn).unwrap();
    assert_eq!(Session::require(&conn).unwrap(), s);
}

#[test]
fn clear_keeps_configuration() {
    let conn = setup();
    utils::set_currency_symbol(&conn, "$").unwrap();
    Session::new("tok").save(&conn).unwrap();

    Session::clear(&conn).unwrap();
    assert!(Session::load(&conn).unwrap().is_none());
    assert_eq!(utils::get_currency_symbol(&conn).unwrap(), "$");
}

#[test]
fn empty_token_counts_as_signed_out() {
    let conn = setup();
    db::set_setting(&conn, "token", "").unwrap();
    assert!(Session::load(&conn).unwrap().is_none());
}

#[test]
fn currency_symbol_defaults_to_peso() {
    let conn = setup();
    assert_eq!(utils::get_currency_symbol(&conn).unwrap(), "₱");
}

#[test]
fn config_set_currency_and_api_via_cli() {
    let conn = setup();
    let m = cli::build_cli().get_matches_from(["pesoclip", "config", "set-currency", "US$"]);
    if let Some(("config", sub)) = m.subcommand() {
        config::handle(&conn, sub).unwrap();
    } else {
        panic!("config command not parsed");
    }
    assert_eq!(utils::get_currency_symbol(&conn).unwrap(), "US$");

    let m = cli::build_cli().get_matches_from([
        "pesoclip",
        "config",
        "set-api",
        "https://finance.example.com/api/",
    ]);
    if let Some(("config", sub)) = m.subcommand() {
        config::handle(&conn, sub).unwrap();
    }
    assert_eq!(
        db::get_setting(&conn, "api_base_url").unwrap().as_deref(),
        Some("https://finance.example.com/api")
    );
}

#[test]
fn set_api_rejects_garbage() {
    let conn = setup();
    assert!(utils::set_api_base_url(&conn, "not a url").is_err());
}
