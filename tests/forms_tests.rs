// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pesoclip::errors::ValidationError;
use pesoclip::forms::{
    LoginForm, RegisterForm, SourceForm, SourceTypeForm, TransactionForm, TransactionPatch,
};
use pesoclip::models::TransactionKind;
use rust_decimal::Decimal;
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

fn form() -> TransactionForm {
    TransactionForm {
        name: " Rice ".into(),
        source_id: "s2".into(),
        description: "5kg".into(),
        amount: "250.50".into(),
        date: None,
    }
}

#[test]
fn transaction_form_defaults_date_to_today() {
    let d = form().validate(today()).unwrap();
    assert_eq!(d.name, "Rice");
    assert_eq!(d.amount, Decimal::new(25050, 2));
    assert_eq!(d.date, today());
}

#[test]
fn transaction_form_builds_kind_prefixed_body() {
    let mut f = form();
    f.date = Some("2024-03-01".into());
    let body = f.validate(today()).unwrap().to_body(TransactionKind::Expense);
    assert_eq!(
        body,
        json!({
            "expenseName": "Rice",
            "sourceId": "s2",
            "expenseDescription": "5kg",
            "expenseAmount": 250.5,
            "date": "2024-03-01"
        })
    );
    let body = f.validate(today()).unwrap().to_body(TransactionKind::Income);
    assert!(body.get("incomeAmount").is_some());
    assert!(body.get("expenseAmount").is_none());
}

#[test]
fn transaction_form_rejects_bad_input() {
    let mut f = form();
    f.name = "  ".into();
    assert_eq!(
        f.validate(today()).unwrap_err(),
        ValidationError::Required { field: "name" }
    );

    let mut f = form();
    f.amount = "-3".into();
    assert!(f.validate(today()).unwrap_err().to_string().contains("negative"));

    let mut f = form();
    f.amount = "ten".into();
    assert!(f.validate(today()).is_err());

    let mut f = form();
    f.date = Some("03/01/2024".into());
    assert!(matches!(
        f.validate(today()),
        Err(ValidationError::Field { field: "date", .. })
    ));
}

#[test]
fn patch_only_serializes_given_fields() {
    let patch = TransactionPatch::from_raw(None, None, None, Some("99.90"), Some("2024-02-02")).unwrap();
    assert_eq!(
        patch.to_body(TransactionKind::Income),
        json!({"incomeAmount": 99.9, "date": "2024-02-02"})
    );
}

#[test]
fn empty_patch_is_rejected() {
    let err = TransactionPatch::from_raw(None, None, None, None, None).unwrap_err();
    assert!(err.to_string().contains("nothing to change"));
    assert!(TransactionPatch::default().is_empty());
}

#[test]
fn patch_validates_each_given_field() {
    assert!(TransactionPatch::from_raw(Some(""), None, None, None, None).is_err());
    assert!(TransactionPatch::from_raw(None, None, None, Some("-1"), None).is_err());
}

#[test]
fn source_form_requires_http_image() {
    let mut f = SourceForm {
        source_name: "Payroll".into(),
        source_image: "https://example.com/p.png".into(),
        source_type_id: "t1".into(),
        source_description: "Day job".into(),
    };
    assert!(f.validate().is_ok());
    assert_eq!(f.to_body()["sourceTypeId"], "t1");

    f.source_image = "ftp://example.com/p.png".into();
    assert!(f.validate().is_err());
    f.source_image = "not a url".into();
    assert!(f.validate().is_err());
}

#[test]
fn source_type_all_is_reserved() {
    assert!(SourceTypeForm { type_name: "All".into() }.validate().is_err());
    assert!(SourceTypeForm { type_name: "".into() }.validate().is_err());
    assert!(SourceTypeForm { type_name: "Utilities".into() }.validate().is_ok());
}

#[test]
fn login_form_needs_both_fields() {
    let ok = LoginForm {
        email: "a@b.co".into(),
        password: "secret".into(),
    };
    assert!(ok.validate().is_ok());
    let missing = LoginForm {
        email: "a@b.co".into(),
        password: String::new(),
    };
    assert_eq!(
        missing.validate().unwrap_err(),
        ValidationError::Required { field: "password" }
    );
}

#[test]
fn register_form_checks_match_email_and_length() {
    let good = RegisterForm {
        username: "juan".into(),
        email: "juan@example.ph".into(),
        password: "longenough".into(),
        confirm_password: "longenough".into(),
    };
    assert!(good.validate().is_ok());

    let mut f = good.clone();
    f.confirm_password = "different1".into();
    assert!(f.validate().unwrap_err().to_string().contains("do not match"));

    let mut f = good.clone();
    f.email = "juan.example.ph".into();
    assert!(f.validate().unwrap_err().to_string().contains("Email is invalid"));

    let mut f = good.clone();
    f.password = "short".into();
    f.confirm_password = "short".into();
    assert!(f.validate().unwrap_err().to_string().contains("at least 8"));
}
