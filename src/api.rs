// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::aggregate::sort_newest_first;
use crate::errors::ApiError;
use crate::forms::{
    LoginForm, RegisterForm, SourceForm, SourceTypeForm, TransactionDraft, TransactionPatch,
};
use crate::models::{
    DailySeries, ExpenseDoc, IncomeDoc, LoginResponse, RegisterResponse, Source, SourceType,
    TransactionKind, TransactionRecord, UserDetails, UserEnvelope,
};
use crate::session::Session;

pub trait FinanceBackend {
    fn transactions(&self, kind: TransactionKind) -> Result<Vec<TransactionRecord>, ApiError>;
    fn sources(&self) -> Result<Vec<Source>, ApiError>;
    fn source_types(&self) -> Result<Vec<SourceType>, ApiError>;
    fn daily(&self, year: i32, month: u32) -> Result<DailySeries, ApiError>;
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn authenticated(http: Client, base_url: &str, session: &Session) -> Self {
        let mut c = Self::new(http, base_url);
        c.token = Some(session.token.clone());
        c
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken)?;
        let url = self.url(path);
        debug!(%method, %url, "backend request");
        Ok(self.http.request(method, url).bearer_auth(token))
    }

    fn checked(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %resp.url(), "backend returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(resp)
    }

    fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let resp = self.request(Method::GET, path)?.send()?;
        Ok(Self::checked(resp)?.json()?)
    }

    fn send_value(&self, method: Method, path: &str, body: &Value) -> Result<Value, ApiError> {
        let resp = self.request(method, path)?.json(body).send()?;
        Ok(Self::checked(resp)?.json()?)
    }

    /// Login and register answer with a JSON body even on failure, so the
    /// body is decoded before the status is looked at.
    fn post_public<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "backend request");
        let resp = self.http.post(url).json(body).send()?;
        let status = resp.status();
        let text = resp.text()?;
        match serde_json::from_str::<T>(&text) {
            Ok(v) => Ok(v),
            Err(_) if !status.is_success() => Err(ApiError::Status {
                status: status.as_u16(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    pub fn login(&self, form: &LoginForm) -> Result<LoginResponse, ApiError> {
        self.post_public("users/login", &form.to_body())
    }

    pub fn register(&self, form: &RegisterForm) -> Result<RegisterResponse, ApiError> {
        self.post_public("users/", &form.to_body())
    }

    pub fn user_details(&self, token: &str) -> Result<UserDetails, ApiError> {
        let url = self.url("users/details");
        debug!(%url, "backend request");
        let resp = self.http.get(url).bearer_auth(token).send()?;
        let env: UserEnvelope = Self::checked(resp)?.json()?;
        Ok(env.user)
    }

    pub fn create_transaction(
        &self,
        kind: TransactionKind,
        draft: &TransactionDraft,
    ) -> Result<TransactionRecord, ApiError> {
        let v = self.send_value(Method::POST, kind.endpoint(), &draft.to_body(kind))?;
        decode_transaction(kind, v)
    }

    pub fn update_transaction(
        &self,
        kind: TransactionKind,
        id: &str,
        patch: &TransactionPatch,
    ) -> Result<TransactionRecord, ApiError> {
        let path = format!("{}/{}", kind.endpoint(), id);
        let v = self.send_value(Method::PATCH, &path, &patch.to_body(kind))?;
        decode_transaction(kind, v)
    }

    pub fn delete_transaction(&self, kind: TransactionKind, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}", kind.endpoint(), id);
        let resp = self.request(Method::DELETE, &path)?.send()?;
        Self::checked(resp)?;
        Ok(())
    }

    pub fn create_source(&self, form: &SourceForm) -> Result<Source, ApiError> {
        let v = self.send_value(Method::POST, "sources", &form.to_body())?;
        Ok(serde_json::from_value(v)?)
    }

    pub fn create_source_type(&self, form: &SourceTypeForm) -> Result<SourceType, ApiError> {
        let v = self.send_value(Method::POST, "sourcetypes", &form.to_body())?;
        Ok(serde_json::from_value(v)?)
    }
}

impl FinanceBackend for ApiClient {
    fn transactions(&self, kind: TransactionKind) -> Result<Vec<TransactionRecord>, ApiError> {
        let v = self.get_value(kind.endpoint())?;
        let mut records = decode_transactions(kind, v)?;
        sort_newest_first(&mut records);
        debug!(kind = kind.label(), count = records.len(), "fetched records");
        Ok(records)
    }

    fn sources(&self) -> Result<Vec<Source>, ApiError> {
        decode_list(self.get_value("sources")?, "sources")
    }

    fn source_types(&self) -> Result<Vec<SourceType>, ApiError> {
        decode_list(self.get_value("sourcetypes")?, "source types")
    }

    fn daily(&self, year: i32, month: u32) -> Result<DailySeries, ApiError> {
        let v = self.get_value(&format!("data/daily/{year}/{month}"))?;
        Ok(serde_json::from_value(v)?)
    }
}

pub fn decode_list<T: DeserializeOwned>(v: Value, what: &'static str) -> Result<Vec<T>, ApiError> {
    if !v.is_array() {
        return Err(ApiError::UnexpectedFormat(what));
    }
    Ok(serde_json::from_value(v)?)
}

pub fn decode_transactions(
    kind: TransactionKind,
    v: Value,
) -> Result<Vec<TransactionRecord>, ApiError> {
    Ok(match kind {
        TransactionKind::Expense => decode_list::<ExpenseDoc>(v, "expense")?
            .into_iter()
            .map(TransactionRecord::from)
            .collect(),
        TransactionKind::Income => decode_list::<IncomeDoc>(v, "income")?
            .into_iter()
            .map(TransactionRecord::from)
            .collect(),
    })
}

pub fn decode_transaction(kind: TransactionKind, v: Value) -> Result<TransactionRecord, ApiError> {
    Ok(match kind {
        TransactionKind::Expense => serde_json::from_value::<ExpenseDoc>(v)?.into(),
        TransactionKind::Income => serde_json::from_value::<IncomeDoc>(v)?.into(),
    })
}
