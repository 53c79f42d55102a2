use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{truncate_latest, Delta, Document, Symbol};
use crate::error::{upstream_advisory, ClientError, ValidationError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient, DEFAULT_TIMEOUT_MS};

const GLOBAL_QUOTE: &str = "GLOBAL_QUOTE";

/// Alpha Vantage client issuing one GET per call.
#[derive(Clone)]
pub struct AlphaVantageClient {
    config: Config,
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl AlphaVantageClient {
    /// Client over the reqwest transport.
    pub fn new(config: Config) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: Config, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn quote_url(&self, symbol: &Symbol) -> String {
        self.endpoint(&[("function", GLOBAL_QUOTE), ("symbol", symbol.as_str())])
    }

    pub fn history_url(&self, symbol: &Symbol, delta: Delta) -> String {
        let mut params = vec![("function", delta.function()), ("symbol", symbol.as_str())];
        if let Some(interval) = delta.interval() {
            params.push(("interval", interval));
        }
        self.endpoint(&params)
    }

    /// Fetch the latest quote and return the upstream document unmodified.
    pub async fn fetch_quote(&self, symbol: &Symbol) -> Result<Document, ClientError> {
        self.get_document(self.quote_url(symbol)).await
    }

    /// Fetch a time series and keep its `limit` most recent entries.
    ///
    /// Returns `{ "symbol": .., "series": {..} }`. The delta and limit are validated before any
    /// request is sent.
    pub async fn fetch_history(
        &self,
        symbol: &Symbol,
        limit: usize,
        delta: &str,
    ) -> Result<Document, ClientError> {
        let delta = Delta::from_str(delta)?;
        if limit == 0 {
            return Err(ValidationError::ZeroLimit.into());
        }

        let document = self.get_document(self.history_url(symbol, delta)).await?;

        let key = delta.series_key();
        let truncated = match document.get(key) {
            Some(Value::Object(series)) => Some((series.len(), truncate_latest(series, limit))),
            _ => None,
        };
        let Some((available, series)) = truncated else {
            let payload = Value::Object(document);
            warn!(
                symbol = %symbol,
                key,
                advisory = upstream_advisory(&payload).unwrap_or("none"),
                "time series missing from response"
            );
            return Err(ClientError::UnexpectedFormat {
                key: key.to_owned(),
                payload,
            });
        };

        debug!(symbol = %symbol, %delta, available, kept = series.len(), "truncated time series");

        let mut result = Document::new();
        result.insert(String::from("symbol"), Value::String(symbol.to_string()));
        result.insert(String::from("series"), Value::Object(series));
        Ok(result)
    }

    async fn get_document(&self, url: String) -> Result<Document, ClientError> {
        debug!(url = %self.redact(&url), timeout_ms = self.timeout_ms, "sending request");

        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);
        let response = self.http_client.execute(request).await?;

        if !response.is_ok() {
            warn!(status = response.status, "upstream returned non-200 status");
            return Err(ClientError::HttpStatus {
                status: response.status,
            });
        }

        debug!(bytes = response.body.len(), "decoding response");
        serde_json::from_str::<Document>(&response.body).map_err(ClientError::Decode)
    }

    fn endpoint(&self, params: &[(&str, &str)]) -> String {
        let mut query = params
            .iter()
            .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>();
        // The key goes after the symbol so intraday URLs end with `&interval=`.
        query.insert(
            2.min(query.len()),
            format!("apikey={}", urlencoding::encode(self.config.api_key())),
        );

        let base = self.config.base_url();
        let separator = match base.find('?') {
            None => "?",
            Some(_) if base.ends_with('?') || base.ends_with('&') => "",
            Some(_) => "&",
        };
        format!("{base}{separator}{}", query.join("&"))
    }

    fn redact(&self, url: &str) -> String {
        let key = urlencoding::encode(self.config.api_key());
        url.replace(&format!("apikey={key}"), "apikey=<redacted>")
    }
}
