// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod exporter;
pub mod pnl;
pub mod source_types;
pub mod sources;
pub mod transactions;

use anyhow::Result;
use rusqlite::Connection;
use tracing::warn;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::session::Session;
use crate::utils::{get_api_base_url, http_client};

/// Client for the stored session; fails when nobody is signed in.
pub fn session_client(conn: &Connection) -> Result<ApiClient> {
    let session = Session::require(conn)?;
    let base = get_api_base_url(conn)?;
    Ok(ApiClient::authenticated(http_client()?, &base, &session))
}

/// Wraps a failed load in the generic message screens show. Nothing derived
/// from a partial load is printed.
pub(crate) fn fetched<T>(r: Result<T, ApiError>) -> Result<T> {
    r.map_err(|e| {
        warn!(error = %e, "fetch failed");
        anyhow::Error::new(e).context("Error fetching data")
    })
}
