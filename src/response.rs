//! Module for error responses returned from the dashboard API.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InnerError {
    code: Option<String>,
    message: Option<String>,
    validation_errors: Option<HashMap<String, Vec<String>>>,
}

impl From<InnerError> for Error {
    fn from(value: InnerError) -> Self {
        let message = value.message.unwrap_or_default();
        match value.code.as_deref() {
            Some("account_not_found") => Self::AccountNotFound { message },
            _ => Self::Other {
                message,
                validation_errors: value.validation_errors.unwrap_or_default(),
            },
        }
    }
}

/// An error returned from the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Error, Deserialize)]
#[serde(from = "InnerError")]
pub enum Error {
    /// The requested account does not exist.
    #[error("Account not found: {}", .message)]
    AccountNotFound { message: String },
    /// An unknown error occurred.
    #[error("Unknown error: {}", .message)]
    Other {
        message: String,
        validation_errors: HashMap<String, Vec<String>>,
    },
}
