// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Which ledger a record belongs to. Both kinds share one shape client side,
/// but the backend prefixes every field with the kind name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expenses",
            TransactionKind::Income => "incomes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "expenses" => Some(TransactionKind::Expense),
            "income" | "incomes" => Some(TransactionKind::Income),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub amount: Decimal,
    pub date: String, // as sent by the backend, parsed during aggregation
    pub source_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "sourceName")]
    pub source_name: String,
    #[serde(rename = "sourceTypeId", default)]
    pub source_type_id: String,
    #[serde(rename = "sourceImage", default)]
    pub source_image: String,
    #[serde(rename = "sourceDescription", default)]
    pub source_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceType {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "typeName")]
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserDetails {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: UserDetails,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    pub access: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseDoc {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "expenseName", default)]
    pub name: String,
    #[serde(rename = "expenseDescription", default)]
    pub description: String,
    #[serde(rename = "expenseAmount")]
    pub amount: Decimal,
    pub date: String,
    #[serde(rename = "sourceId", default, deserialize_with = "blank_as_none")]
    pub source_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomeDoc {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "incomeName", default)]
    pub name: String,
    #[serde(rename = "incomeDescription", default)]
    pub description: String,
    #[serde(rename = "incomeAmount")]
    pub amount: Decimal,
    pub date: String,
    #[serde(rename = "sourceId", default, deserialize_with = "blank_as_none")]
    pub source_id: Option<String>,
}

impl From<ExpenseDoc> for TransactionRecord {
    fn from(v: ExpenseDoc) -> Self {
        Self {
            id: v.id,
            name: v.name,
            description: v.description,
            amount: v.amount,
            date: v.date,
            source_id: v.source_id,
        }
    }
}

impl From<IncomeDoc> for TransactionRecord {
    fn from(v: IncomeDoc) -> Self {
        Self {
            id: v.id,
            name: v.name,
            description: v.description,
            amount: v.amount,
            date: v.date,
            source_id: v.source_id,
        }
    }
}

fn blank_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Option<String> = Option::deserialize(de)?;
    Ok(v.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DayKey {
    pub day: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyIncome {
    #[serde(rename = "_id")]
    pub key: DayKey,
    #[serde(rename = "totalIncome")]
    pub total_income: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyExpense {
    #[serde(rename = "_id")]
    pub key: DayKey,
    #[serde(rename = "totalExpenses")]
    pub total_expenses: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyProfitLoss {
    #[serde(rename = "_id", default)]
    pub key: Option<DayKey>,
    #[serde(rename = "profitLoss")]
    pub profit_loss: Decimal,
}

/// Per-day totals for one month as computed by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub incomes: Vec<DailyIncome>,
    #[serde(default)]
    pub expenses: Vec<DailyExpense>,
    #[serde(rename = "profitLoss", default)]
    pub profit_loss: Vec<DailyProfitLoss>,
}

pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Name of the source with exactly this id, or "Unknown".
pub fn resolve_source_name<'a>(source_id: Option<&str>, sources: &'a [Source]) -> &'a str {
    let Some(id) = source_id else {
        return UNKNOWN_SOURCE;
    };
    sources
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.source_name.as_str())
        .unwrap_or(UNKNOWN_SOURCE)
}
