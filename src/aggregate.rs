// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::errors::ValidationError;
use crate::models::TransactionRecord;
use crate::utils::{day_label, month_label, record_date};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    pub label: String,
    pub date: NaiveDate,
    pub total_amount: Decimal,
    pub records: Vec<TransactionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub label: String,
    pub period: NaiveDate,
    pub days: Vec<DayBucket>,
}

impl MonthBucket {
    pub fn total(&self) -> Decimal {
        self.days.iter().map(|d| d.total_amount).sum()
    }

    pub fn day(&self, label: &str) -> Option<&DayBucket> {
        self.days.iter().find(|d| d.label == label)
    }

    pub fn days_newest_first(&self) -> Vec<&DayBucket> {
        let mut days: Vec<&DayBucket> = self.days.iter().collect();
        days.sort_by_key(|d| Reverse(d.date));
        days
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MonthBuckets {
    months: Vec<MonthBucket>,
}

impl MonthBuckets {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn months(&self) -> &[MonthBucket] {
        &self.months
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.months.iter().map(|m| m.label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&MonthBucket> {
        self.months.iter().find(|m| m.label == label)
    }

    pub fn month_total(&self, label: &str) -> Decimal {
        self.get(label).map(MonthBucket::total).unwrap_or(Decimal::ZERO)
    }

    pub fn grand_total(&self) -> Decimal {
        self.months.iter().map(MonthBucket::total).sum()
    }

    pub fn newest_first(&self) -> Vec<&MonthBucket> {
        let mut months: Vec<&MonthBucket> = self.months.iter().collect();
        months.sort_by_key(|m| Reverse(m.period));
        months
    }

    pub fn retain_month(&mut self, label: &str) {
        self.months.retain(|m| m.label.eq_ignore_ascii_case(label.trim()));
    }
}

pub fn aggregate(records: &[TransactionRecord]) -> Result<MonthBuckets, ValidationError> {
    let mut months: Vec<MonthBucket> = Vec::new();
    let mut month_idx: HashMap<String, usize> = HashMap::new();
    let mut day_idx: HashMap<(usize, String), usize> = HashMap::new();

    for rec in records {
        let date = record_date(&rec.date).ok_or_else(|| ValidationError::Date {
            id: rec.id.clone(),
            value: rec.date.clone(),
        })?;
        if rec.amount < Decimal::ZERO {
            return Err(ValidationError::Amount {
                id: rec.id.clone(),
                value: rec.amount.to_string(),
            });
        }

        let m_label = month_label(date);
        let mi = *month_idx.entry(m_label.clone()).or_insert_with(|| {
            months.push(MonthBucket {
                label: m_label,
                period: date.with_day(1).unwrap_or(date),
                days: Vec::new(),
            });
            months.len() - 1
        });

        let month = &mut months[mi];
        let d_label = day_label(date);
        let di = *day_idx.entry((mi, d_label.clone())).or_insert_with(|| {
            month.days.push(DayBucket {
                label: d_label,
                date,
                total_amount: Decimal::ZERO,
                records: Vec::new(),
            });
            month.days.len() - 1
        });

        let day = &mut month.days[di];
        day.total_amount += rec.amount;
        day.records.push(rec.clone());
    }

    Ok(MonthBuckets { months })
}

// undated records sink to the end
pub fn sort_newest_first(records: &mut [TransactionRecord]) {
    records.sort_by_key(|r| Reverse(record_date(&r.date)));
}
