use tracing::info;

use crate::client::AlphaVantageClient;
use crate::domain::{Document, Symbol};
use crate::error::QueryError;

/// Runs one upstream call and renders the result as indented JSON.
#[derive(Clone)]
pub struct QueryHandler {
    client: AlphaVantageClient,
}

impl QueryHandler {
    pub fn new(client: AlphaVantageClient) -> Self {
        Self { client }
    }

    pub async fn get_quote(&self, symbol: &Symbol) -> Result<String, QueryError> {
        info!(symbol = %symbol, "fetching quote");
        let document = self
            .client
            .fetch_quote(symbol)
            .await
            .map_err(|source| QueryError::Quote {
                symbol: symbol.to_string(),
                source,
            })?;

        render(&document)
    }

    pub async fn get_history(
        &self,
        symbol: &Symbol,
        limit: usize,
        delta: &str,
    ) -> Result<String, QueryError> {
        info!(symbol = %symbol, limit, delta, "fetching history");
        let document = self
            .client
            .fetch_history(symbol, limit, delta)
            .await
            .map_err(|source| QueryError::History {
                symbol: symbol.to_string(),
                delta: delta.to_owned(),
                source,
            })?;

        render(&document)
    }
}

fn render(document: &Document) -> Result<String, QueryError> {
    Ok(serde_json::to_string_pretty(document)?)
}
