use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::http_client::HttpError;

/// Input validation errors raised before any upstream call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error(
        "invalid delta: '{value}'. Valid options are '1min', '5min', '15min', '30min', '60min', \
         'daily', 'weekly', 'monthly'"
    )]
    InvalidDelta { value: String },

    #[error("limit must be greater than zero")]
    ZeroLimit,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not set in the environment or .env file")]
    Missing { key: &'static str },

    #[error("{key} must be an absolute http(s) URL, got '{value}'")]
    InvalidBaseUrl { key: &'static str, value: String },

    #[error("failed to read env file '{}': {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Failures of a single upstream call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("error making API request: {0}")]
    Network(#[from] HttpError),

    #[error("unexpected status code: {status}")]
    HttpStatus { status: u16 },

    #[error("error decoding API response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unexpected response format: missing '{key}'{}", advisory_suffix(.payload))]
    UnexpectedFormat { key: String, payload: Value },
}

impl ClientError {
    /// Raw upstream document attached to an `UnexpectedFormat` error.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::UnexpectedFormat { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Alpha Vantage reports some failures as HTTP 200 with one of these fields.
const ADVISORY_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Upstream advisory text carried by a document, if any.
pub fn upstream_advisory(payload: &Value) -> Option<&str> {
    ADVISORY_KEYS
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_str))
}

fn advisory_suffix(payload: &Value) -> String {
    match upstream_advisory(payload) {
        Some(message) => format!(" (upstream said: {message})"),
        None => format!(" in {payload}"),
    }
}

/// Handler errors: a client failure with the operation that produced it.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("error fetching stock quote for {symbol}: {source}")]
    Quote {
        symbol: String,
        #[source]
        source: ClientError,
    },

    #[error("error fetching {delta} history for {symbol}: {source}")]
    History {
        symbol: String,
        delta: String,
        #[source]
        source: ClientError,
    },

    #[error("error formatting stock data: {0}")]
    Format(#[from] serde_json::Error),
}

impl QueryError {
    /// The underlying client error, when the failure came from the upstream call.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Quote { source, .. } | Self::History { source, .. } => Some(source),
            Self::Format(_) => None,
        }
    }
}
