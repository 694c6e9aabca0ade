// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pesoclip::aggregate::aggregate;
use pesoclip::models::TransactionRecord;
use pesoclip::reconcile::reconcile;
use rust_decimal::Decimal;

fn rec(id: &str, amount: i64, date: &str) -> TransactionRecord {
    TransactionRecord {
        id: id.into(),
        name: id.into(),
        description: String::new(),
        amount: Decimal::new(amount, 0),
        date: date.into(),
        source_id: None,
    }
}

#[test]
fn march_loss_of_120() {
    let income = aggregate(&[rec("i1", 300, "2024-03-05"), rec("i2", 200, "2024-03-20")]).unwrap();
    let expenses = aggregate(&[rec("e1", 620, "2024-03-11")]).unwrap();
    let report = reconcile(&income, &expenses);

    let march = report.get("March 2024").unwrap();
    assert_eq!(march.total_income, Decimal::new(500, 0));
    assert_eq!(march.total_expenses, Decimal::new(620, 0));
    assert_eq!(march.profit_loss, Decimal::new(-120, 0));
    assert!(!march.is_surplus());
}

#[test]
fn disjoint_months_carry_one_side_only() {
    let income = aggregate(&[rec("i1", 400, "2024-01-15"), rec("i2", 50, "2024-02-02")]).unwrap();
    let expenses = aggregate(&[rec("e1", 75, "2024-04-01"), rec("e2", 25, "2024-05-09")]).unwrap();
    let report = reconcile(&income, &expenses);

    assert_eq!(report.len(), 4);
    for e in report.entries() {
        assert!(e.profit_loss == e.total_income || e.profit_loss == -e.total_expenses);
    }
    assert_eq!(report.get("April 2024").unwrap().profit_loss, Decimal::new(-75, 0));
    assert_eq!(report.get("January 2024").unwrap().profit_loss, Decimal::new(400, 0));
}

#[test]
fn union_keeps_income_months_then_expense_only_months() {
    let income = aggregate(&[rec("i1", 10, "2024-03-01"), rec("i2", 10, "2024-01-01")]).unwrap();
    let expenses = aggregate(&[rec("e1", 5, "2024-02-01"), rec("e2", 5, "2024-03-02")]).unwrap();
    let report = reconcile(&income, &expenses);

    let labels: Vec<&str> = report.entries().iter().map(|e| e.month_label.as_str()).collect();
    assert_eq!(labels, vec!["March 2024", "January 2024", "February 2024"]);

    let newest: Vec<&str> = report
        .newest_first()
        .iter()
        .map(|e| e.month_label.as_str())
        .collect();
    assert_eq!(newest, vec!["March 2024", "February 2024", "January 2024"]);
    assert_eq!(report.get("March 2024").unwrap().profit_loss, Decimal::new(5, 0));
}

#[test]
fn break_even_counts_as_surplus() {
    let income = aggregate(&[rec("i", 90, "2024-07-01")]).unwrap();
    let expenses = aggregate(&[rec("e", 90, "2024-07-30")]).unwrap();
    let report = reconcile(&income, &expenses);
    let july = report.get("July 2024").unwrap();
    assert_eq!(july.profit_loss, Decimal::ZERO);
    assert!(july.is_surplus());
}

#[test]
fn reconcile_is_repeatable_and_values_do_not_depend_on_input_order() {
    let a = vec![rec("1", 10, "2024-01-01"), rec("2", 20, "2024-02-01")];
    let b = vec![rec("2", 20, "2024-02-01"), rec("1", 10, "2024-01-01")];
    let expenses = aggregate(&[rec("e", 3, "2024-02-10")]).unwrap();

    let first = reconcile(&aggregate(&a).unwrap(), &expenses);
    let again = reconcile(&aggregate(&a).unwrap(), &expenses);
    assert_eq!(first, again);

    let reordered = reconcile(&aggregate(&b).unwrap(), &expenses);
    for e in first.entries() {
        assert_eq!(reordered.get(&e.month_label), Some(e));
    }
    assert_eq!(first.net_total(), Decimal::new(27, 0));
}

#[test]
fn both_sides_empty_gives_empty_report() {
    let empty = aggregate(&[]).unwrap();
    assert!(reconcile(&empty, &empty).is_empty());
}
