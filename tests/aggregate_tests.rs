// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pesoclip::aggregate::{aggregate, sort_newest_first};
use pesoclip::errors::ValidationError;
use pesoclip::models::TransactionRecord;
use rust_decimal::Decimal;

fn rec(id: &str, amount: Decimal, date: &str) -> TransactionRecord {
    TransactionRecord {
        id: id.into(),
        name: format!("item {}", id),
        description: String::new(),
        amount,
        date: date.into(),
        source_id: None,
    }
}

#[test]
fn groups_march_scenario_into_two_days() {
    let records = vec![
        rec("a", Decimal::new(100, 0), "2024-03-01"),
        rec("b", Decimal::new(50, 0), "2024-03-01"),
        rec("c", Decimal::new(30, 0), "2024-03-02"),
    ];
    let grouped = aggregate(&records).unwrap();

    assert_eq!(grouped.len(), 1);
    let march = grouped.get("March 2024").unwrap();
    assert_eq!(march.days.len(), 2);
    assert_eq!(march.day("3/1/2024").unwrap().total_amount, Decimal::new(150, 0));
    assert_eq!(march.day("3/1/2024").unwrap().records.len(), 2);
    assert_eq!(march.day("3/2/2024").unwrap().total_amount, Decimal::new(30, 0));
    assert_eq!(march.total(), Decimal::new(180, 0));
}

#[test]
fn empty_input_is_empty_mapping() {
    let grouped = aggregate(&[]).unwrap();
    assert!(grouped.is_empty());
    assert_eq!(grouped.grand_total(), Decimal::ZERO);
}

#[test]
fn leaf_totals_conserve_input_sum() {
    let records = vec![
        rec("1", Decimal::new(1999, 2), "2024-01-31"),
        rec("2", Decimal::new(1, 2), "2024-02-01"),
        rec("3", Decimal::new(250, 1), "2024-02-01"),
        rec("4", Decimal::new(333, 2), "2023-12-25"),
        rec("5", Decimal::ZERO, "2024-02-29"),
    ];
    let input: Decimal = records.iter().map(|r| r.amount).sum();
    let grouped = aggregate(&records).unwrap();
    let leaves: Decimal = grouped
        .months()
        .iter()
        .flat_map(|m| m.days.iter())
        .map(|d| d.total_amount)
        .sum();
    assert_eq!(leaves, input);
    assert_eq!(grouped.grand_total(), input);
}

#[test]
fn totals_are_not_rounded_when_stored() {
    let records = vec![
        rec("1", Decimal::new(1005, 3), "2024-05-05"),
        rec("2", Decimal::new(1, 3), "2024-05-05"),
    ];
    let grouped = aggregate(&records).unwrap();
    let day = grouped.get("May 2024").unwrap().day("5/5/2024").unwrap();
    assert_eq!(day.total_amount, Decimal::new(1006, 3));
}

#[test]
fn keeps_first_seen_order_without_sorting() {
    let records = vec![
        rec("1", Decimal::ONE, "2024-01-10"),
        rec("2", Decimal::ONE, "2024-03-02"),
        rec("3", Decimal::ONE, "2024-01-05"),
        rec("4", Decimal::ONE, "2024-03-01"),
    ];
    let grouped = aggregate(&records).unwrap();
    let labels: Vec<&str> = grouped.labels().collect();
    assert_eq!(labels, vec!["January 2024", "March 2024"]);
    let jan_days: Vec<&str> = grouped.months()[0]
        .days
        .iter()
        .map(|d| d.label.as_str())
        .collect();
    assert_eq!(jan_days, vec!["1/10/2024", "1/5/2024"]);

    let newest: Vec<&str> = grouped
        .newest_first()
        .iter()
        .map(|m| m.label.as_str())
        .collect();
    assert_eq!(newest, vec!["March 2024", "January 2024"]);
}

#[test]
fn newest_first_orders_across_years() {
    let records = vec![
        rec("1", Decimal::ONE, "2023-12-31"),
        rec("2", Decimal::ONE, "2024-01-01"),
        rec("3", Decimal::ONE, "2023-02-14"),
    ];
    let grouped = aggregate(&records).unwrap();
    let newest: Vec<&str> = grouped
        .newest_first()
        .iter()
        .map(|m| m.label.as_str())
        .collect();
    assert_eq!(newest, vec!["January 2024", "December 2023", "February 2023"]);
}

#[test]
fn aggregating_twice_is_identical() {
    let records = vec![
        rec("1", Decimal::new(12, 0), "2024-06-01T08:30:00.000Z"),
        rec("2", Decimal::new(7, 0), "2024-06-03"),
    ];
    assert_eq!(aggregate(&records).unwrap(), aggregate(&records).unwrap());
}

#[test]
fn accepts_backend_timestamps() {
    let records = vec![rec("1", Decimal::TEN, "2024-03-01T00:00:00.000Z")];
    let grouped = aggregate(&records).unwrap();
    assert!(grouped.get("March 2024").unwrap().day("3/1/2024").is_some());
}

#[test]
fn unparsable_date_is_a_validation_error() {
    let records = vec![
        rec("ok", Decimal::ONE, "2024-03-01"),
        rec("bad", Decimal::ONE, "next tuesday"),
    ];
    let err = aggregate(&records).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Date {
            id: "bad".into(),
            value: "next tuesday".into()
        }
    );
}

#[test]
fn negative_amount_is_a_validation_error() {
    let records = vec![rec("neg", Decimal::new(-5, 0), "2024-03-01")];
    assert!(matches!(
        aggregate(&records),
        Err(ValidationError::Amount { .. })
    ));
}

#[test]
fn retain_month_filters_by_label() {
    let records = vec![
        rec("1", Decimal::ONE, "2024-03-01"),
        rec("2", Decimal::ONE, "2024-04-01"),
    ];
    let mut grouped = aggregate(&records).unwrap();
    grouped.retain_month("april 2024");
    assert_eq!(grouped.labels().collect::<Vec<_>>(), vec!["April 2024"]);
}

#[test]
fn pre_sort_puts_newest_first_and_undated_last() {
    let mut records = vec![
        rec("old", Decimal::ONE, "2024-01-01"),
        rec("bad", Decimal::ONE, "garbage"),
        rec("new", Decimal::ONE, "2024-03-01T10:00:00Z"),
        rec("mid", Decimal::ONE, "2024-02-01"),
    ];
    sort_newest_first(&mut records);
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old", "bad"]);
}
