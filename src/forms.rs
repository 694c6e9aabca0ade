// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value, json};

use crate::errors::ValidationError;
use crate::models::TransactionKind;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

pub const MIN_PASSWORD_LEN: usize = 8;

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(v.to_string())
}

fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let amount = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::field("amount", format!("'{}' is not a number", raw.trim())))?;
    if amount < Decimal::ZERO {
        return Err(ValidationError::field("amount", "must not be negative"));
    }
    Ok(amount)
}

fn parse_form_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::field("date", format!("'{}' is not a YYYY-MM-DD date", raw.trim()))
    })
}

fn amount_value(amount: Decimal) -> Value {
    amount
        .to_f64()
        .map(Value::from)
        .unwrap_or_else(|| Value::String(amount.to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub name: String,
    pub source_id: String,
    pub description: String,
    pub amount: String,
    // today when None
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub name: String,
    pub source_id: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl TransactionForm {
    pub fn validate(&self, today: NaiveDate) -> Result<TransactionDraft, ValidationError> {
        let name = required("name", &self.name)?;
        let source_id = required("source", &self.source_id)?;
        let description = required("description", &self.description)?;
        let amount = parse_amount(&required("amount", &self.amount)?)?;
        let date = match self.date.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => parse_form_date(d)?,
            _ => today,
        };
        Ok(TransactionDraft {
            name,
            source_id,
            description,
            amount,
            date,
        })
    }
}

impl TransactionDraft {
    pub fn to_body(&self, kind: TransactionKind) -> Value {
        let p = kind.label();
        let mut body = Map::new();
        body.insert(format!("{p}Name"), json!(self.name));
        body.insert("sourceId".into(), json!(self.source_id));
        body.insert(format!("{p}Description"), json!(self.description));
        body.insert(format!("{p}Amount"), amount_value(self.amount));
        body.insert("date".into(), json!(self.date.format("%Y-%m-%d").to_string()));
        Value::Object(body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub name: Option<String>,
    pub source_id: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub date: Option<NaiveDate>,
}

impl TransactionPatch {
    pub fn from_raw(
        name: Option<&str>,
        source_id: Option<&str>,
        description: Option<&str>,
        amount: Option<&str>,
        date: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let patch = TransactionPatch {
            name: name.map(|v| required("name", v)).transpose()?,
            source_id: source_id.map(|v| required("source", v)).transpose()?,
            description: description.map(|v| required("description", v)).transpose()?,
            amount: amount.map(parse_amount).transpose()?,
            date: date.map(parse_form_date).transpose()?,
        };
        if patch.is_empty() {
            return Err(ValidationError::field("update", "nothing to change"));
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.source_id.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }

    pub fn to_body(&self, kind: TransactionKind) -> Value {
        let p = kind.label();
        let mut body = Map::new();
        if let Some(ref v) = self.name {
            body.insert(format!("{p}Name"), json!(v));
        }
        if let Some(ref v) = self.source_id {
            body.insert("sourceId".into(), json!(v));
        }
        if let Some(ref v) = self.description {
            body.insert(format!("{p}Description"), json!(v));
        }
        if let Some(v) = self.amount {
            body.insert(format!("{p}Amount"), amount_value(v));
        }
        if let Some(v) = self.date {
            body.insert("date".into(), json!(v.format("%Y-%m-%d").to_string()));
        }
        Value::Object(body)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceForm {
    pub source_name: String,
    pub source_image: String,
    pub source_type_id: String,
    pub source_description: String,
}

impl SourceForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("source name", &self.source_name)?;
        let image = required("source image", &self.source_image)?;
        let url = reqwest::Url::parse(&image)
            .map_err(|_| ValidationError::field("source image", format!("'{}' is not a URL", image)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ValidationError::field(
                "source image",
                "must be an http or https URL",
            ));
        }
        required("source type", &self.source_type_id)?;
        required("source description", &self.source_description)?;
        Ok(())
    }

    pub fn to_body(&self) -> Value {
        json!({
            "sourceName": self.source_name.trim(),
            "sourceImage": self.source_image.trim(),
            "sourceTypeId": self.source_type_id.trim(),
            "sourceDescription": self.source_description.trim(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SourceTypeForm {
    pub type_name: String,
}

impl SourceTypeForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let name = required("type name", &self.type_name)?;
        // "All" is the list filter, not a storable type
        if name.eq_ignore_ascii_case("all") {
            return Err(ValidationError::field("type name", "'All' is reserved"));
        }
        Ok(())
    }

    pub fn to_body(&self) -> Value {
        json!({ "typeName": self.type_name.trim() })
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("email", &self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::Required { field: "password" });
        }
        Ok(())
    }

    pub fn to_body(&self) -> Value {
        json!({ "email": self.email.trim(), "password": self.password })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("username", &self.username)?;
        let email = required("email", &self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError::Required { field: "password" });
        }
        if self.confirm_password.is_empty() {
            return Err(ValidationError::Required {
                field: "confirm password",
            });
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::field("password", "passwords do not match"));
        }
        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::field("email", "Email is invalid"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::field(
                "password",
                "Password must be at least 8 characters",
            ));
        }
        Ok(())
    }

    pub fn to_body(&self) -> Value {
        json!({
            "username": self.username.trim(),
            "email": self.email.trim(),
            "password": self.password,
        })
    }
}
