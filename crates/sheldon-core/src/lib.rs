//! # Sheldon Core
//!
//! Alpha Vantage access for the `sheldon` CLI: configuration, URL building, the single GET per
//! invocation, time-series truncation and JSON rendering.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | `BASE_URL` / `ALPHA_VANTAGE_API_KEY` resolution from env and dotenv files |
//! | [`domain`] | Symbols, deltas, untyped documents and series truncation |
//! | [`http_client`] | Transport trait and the reqwest implementation |
//! | [`client`] | Quote and history calls against the upstream API |
//! | [`handler`] | Calls the client and renders indented JSON text |
//! | [`error`] | Error types for every layer |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheldon_core::{AlphaVantageClient, Config, QueryHandler, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None)?;
//!     let handler = QueryHandler::new(AlphaVantageClient::new(config));
//!
//!     let symbol = Symbol::parse("AAPL")?;
//!     println!("{}", handler.get_history(&symbol, 5, "daily").await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Security
//!
//! The API key is never logged: request URLs are redacted before tracing, transport errors are
//! stripped of their URL, and `Config`'s `Debug` output hides the key.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod http_client;

pub use client::AlphaVantageClient;
pub use config::Config;
pub use domain::{truncate_latest, Delta, Document, Symbol};
pub use error::{ClientError, ConfigError, QueryError, ValidationError};
pub use handler::QueryHandler;
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, DEFAULT_TIMEOUT_MS,
};
