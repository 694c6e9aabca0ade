// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rusqlite::Connection;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::forms::{LoginForm, RegisterForm};
use crate::session::Session;
use crate::utils::{get_api_base_url, http_client};

pub const REGISTERED: &str = "Registered Successfully";

fn public_client(conn: &Connection) -> Result<ApiClient> {
    Ok(ApiClient::new(http_client()?, &get_api_base_url(conn)?))
}

/// Message shown when the backend refuses a login.
pub fn login_failure_message(email: &str, error: Option<&str>) -> String {
    match error {
        Some("No Email Found") => format!("{} does not exist.", email.trim()),
        _ => "Check your login details and try again.".to_string(),
    }
}

/// Field-specific message for a backend registration error.
pub fn register_failure_message(error: Option<&str>) -> String {
    match error {
        Some("Username already exists") => "username: Username already exists".into(),
        Some("Email already exists") => "email: Email already exists".into(),
        Some("Email invalid") => "email: Email is invalid".into(),
        Some("Password must be at least 8 characters") => {
            "password: Password must be at least 8 characters".into()
        }
        _ => "Something went wrong. Please try again.".into(),
    }
}

pub fn login(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let form = LoginForm {
        email: sub.get_one::<String>("email").unwrap().to_string(),
        password: sub.get_one::<String>("password").unwrap().to_string(),
    };
    form.validate()?;
    let api = public_client(conn)?;
    let resp = api.login(&form)?;
    let Some(token) = resp.access.filter(|t| !t.is_empty()) else {
        warn!("login refused");
        bail!(login_failure_message(&form.email, resp.error.as_deref()));
    };

    let user = api.user_details(&token)?;
    let session = Session {
        token,
        user_id: Some(user.id),
        is_admin: user.is_admin,
    };
    session.save(conn)?;
    info!(user_id = ?session.user_id, "signed in");
    println!("Login Successful. Welcome to your account.");
    Ok(())
}

pub fn logout(conn: &Connection) -> Result<()> {
    Session::clear(conn)?;
    println!("Signed out.");
    Ok(())
}

pub fn register(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let form = RegisterForm {
        username: sub.get_one::<String>("username").unwrap().to_string(),
        email: sub.get_one::<String>("email").unwrap().to_string(),
        password: sub.get_one::<String>("password").unwrap().to_string(),
        confirm_password: sub.get_one::<String>("confirm_password").unwrap().to_string(),
    };
    form.validate()?;
    let resp = public_client(conn)?.register(&form)?;
    if resp.message.as_deref() != Some(REGISTERED) {
        bail!(register_failure_message(resp.error.as_deref()));
    }
    println!("Registration successful! Sign in with `pesoclip login`.");
    Ok(())
}

pub fn whoami(conn: &Connection) -> Result<()> {
    match Session::load(conn)? {
        Some(s) => println!(
            "User {} ({})",
            s.user_id.as_deref().unwrap_or("?"),
            if s.is_admin { "admin" } else { "member" }
        ),
        None => println!("Not signed in."),
    }
    Ok(())
}
