// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Malformed input reaching the aggregator or a form before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date '{value}' on record {id}")]
    Date { id: String, value: String },
    #[error("Negative amount {value} on record {id}")]
    Amount { id: String, value: String },
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field}: {message}")]
    Field {
        field: &'static str,
        message: String,
    },
}

impl ValidationError {
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field,
            message: message.into(),
        }
    }
}

/// Failures talking to the REST backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User token not available")]
    MissingToken,
    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },
    #[error("Unexpected {0} data format")]
    UnexpectedFormat(&'static str),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
