//! # Domain Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker symbol |
//! | [`Delta`] | Historical granularity and its upstream function/interval/series key |
//! | [`Document`] | Untyped upstream JSON object |
//! | [`truncate_latest`] | Series truncation to the most recent entries |
//!
//! Upstream payloads are kept as generic JSON trees. Alpha Vantage field names are
//! human-readable and inconsistent (`"1. open"`, `"05. price"`), so no fixed schema is imposed.

mod delta;
mod series;
mod symbol;

pub use delta::Delta;
pub use series::truncate_latest;
pub use symbol::Symbol;

/// Untyped key-value JSON document returned by the upstream API.
pub type Document = serde_json::Map<String, serde_json::Value>;
