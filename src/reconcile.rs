// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Reverse;

use crate::aggregate::MonthBuckets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfitLossEntry {
    pub month_label: String,
    pub period: NaiveDate,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub profit_loss: Decimal,
}

impl ProfitLossEntry {
    pub fn is_surplus(&self) -> bool {
        self.profit_loss >= Decimal::ZERO
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfitLossReport {
    entries: Vec<ProfitLossEntry>,
}

impl ProfitLossReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ProfitLossEntry] {
        &self.entries
    }

    pub fn get(&self, month_label: &str) -> Option<&ProfitLossEntry> {
        self.entries.iter().find(|e| e.month_label == month_label)
    }

    pub fn newest_first(&self) -> Vec<&ProfitLossEntry> {
        let mut out: Vec<&ProfitLossEntry> = self.entries.iter().collect();
        out.sort_by_key(|e| Reverse(e.period));
        out
    }

    pub fn net_total(&self) -> Decimal {
        self.entries.iter().map(|e| e.profit_loss).sum()
    }
}

pub fn reconcile(income: &MonthBuckets, expenses: &MonthBuckets) -> ProfitLossReport {
    let mut entries: Vec<ProfitLossEntry> = Vec::with_capacity(income.len() + expenses.len());

    let periods = income
        .months()
        .iter()
        .chain(expenses.months().iter())
        .map(|m| (m.label.as_str(), m.period));

    for (label, period) in periods {
        if entries.iter().any(|e| e.month_label == label) {
            continue;
        }
        let total_income = income.month_total(label);
        let total_expenses = expenses.month_total(label);
        entries.push(ProfitLossEntry {
            month_label: label.to_string(),
            period,
            total_income,
            total_expenses,
            profit_loss: total_income - total_expenses,
        });
    }

    ProfitLossReport { entries }
}
