// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::db::{delete_settings, get_setting, set_setting};
use crate::errors::ApiError;

const KEY_TOKEN: &str = "token";
const KEY_USER_ID: &str = "user_id";
const KEY_IS_ADMIN: &str = "is_admin";

/// Signed-in identity, loaded once per command and handed down by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: Option<String>,
    pub is_admin: bool,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: None,
            is_admin: false,
        }
    }

    pub fn load(conn: &Connection) -> Result<Option<Session>> {
        let Some(token) = get_setting(conn, KEY_TOKEN)?.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        let user_id = get_setting(conn, KEY_USER_ID)?;
        let is_admin = get_setting(conn, KEY_IS_ADMIN)?.as_deref() == Some("1");
        Ok(Some(Session {
            token,
            user_id,
            is_admin,
        }))
    }

    pub fn require(conn: &Connection) -> Result<Session> {
        Self::load(conn)?.ok_or_else(|| ApiError::MissingToken.into())
    }

    pub fn save(&self, conn: &Connection) -> Result<()> {
        set_setting(conn, KEY_TOKEN, &self.token)?;
        match self.user_id {
            Some(ref id) => set_setting(conn, KEY_USER_ID, id)?,
            None => delete_settings(conn, &[KEY_USER_ID])?,
        }
        set_setting(conn, KEY_IS_ADMIN, if self.is_admin { "1" } else { "0" })?;
        Ok(())
    }

    /// Drops the stored identity; API and display settings stay.
    pub fn clear(conn: &Connection) -> Result<()> {
        delete_settings(conn, &[KEY_TOKEN, KEY_USER_ID, KEY_IS_ADMIN])
    }
}
