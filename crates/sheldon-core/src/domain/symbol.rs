use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ValidationError;

const MAX_TICKER_CHARS: usize = 15;

/// Ticker as sent in the `symbol` query parameter, always upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Trim, upper-case and validate a user-supplied ticker.
    ///
    /// Tickers are ASCII alphanumerics with optional exchange or class suffixes (`SHOP.TRT`,
    /// `BRK-B`, `600104.SHH`).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let ticker = raw.trim().to_ascii_uppercase();
        if ticker.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let len = ticker.chars().count();
        if len > MAX_TICKER_CHARS {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_TICKER_CHARS,
            });
        }

        if let Some((index, ch)) = ticker
            .chars()
            .enumerate()
            .find(|(_, ch)| !is_ticker_char(*ch))
        {
            return Err(ValidationError::SymbolInvalidChar { ch, index });
        }

        Ok(Self(ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_ticker_char(ch: char) -> bool {
    matches!(ch, 'A'..='Z' | '0'..='9' | '.' | '-')
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
