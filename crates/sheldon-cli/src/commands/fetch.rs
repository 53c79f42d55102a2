use sheldon_core::{AlphaVantageClient, Config, QueryHandler, Symbol};
use tracing::debug;

use crate::cli::{Cli, FetchArgs};
use crate::error::CliError;

/// Which upstream call a `fetch` invocation maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    Quote,
    History { limit: usize, delta: String },
}

impl FetchPlan {
    /// A single entry with no delta is a quote lookup; anything else is a history request.
    pub fn from_args(args: &FetchArgs) -> Self {
        let delta = args.delta.as_deref().map(str::trim).unwrap_or_default();
        if args.limit == 1 && delta.is_empty() {
            Self::Quote
        } else {
            Self::History {
                limit: args.limit,
                delta: delta.to_owned(),
            }
        }
    }
}

pub async fn run(args: &FetchArgs, cli: &Cli) -> Result<String, CliError> {
    // Bad tickers fail before configuration is touched.
    let symbol = Symbol::parse(&args.ticker)?;
    let plan = FetchPlan::from_args(args);
    debug!(?plan, symbol = %symbol, "resolved fetch plan");

    let config = Config::load(cli.env_file.as_deref())?;
    let client = AlphaVantageClient::new(config).with_timeout_ms(cli.timeout_ms);

    execute(&QueryHandler::new(client), &symbol, &plan).await
}

pub async fn execute(
    handler: &QueryHandler,
    symbol: &Symbol,
    plan: &FetchPlan,
) -> Result<String, CliError> {
    let output = match plan {
        FetchPlan::Quote => handler.get_quote(symbol).await?,
        FetchPlan::History { limit, delta } => handler.get_history(symbol, *limit, delta).await?,
    };
    Ok(output)
}
