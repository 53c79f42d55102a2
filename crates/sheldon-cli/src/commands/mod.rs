mod fetch;

use crate::cli::{Cli, Command};
use crate::error::CliError;

const WELCOME: &str = "Welcome to Sheldon CLI!\nUse 'sheldon help' to explore available commands.";

/// Run the selected command and return the text to print on stdout.
pub async fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Some(Command::Fetch(args)) => fetch::run(args, cli).await,
        None => Ok(String::from(WELCOME)),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[tokio::test]
    async fn bare_invocation_prints_welcome() {
        let cli = Cli::try_parse_from(["sheldon"]).expect("bare invocation parses");

        let output = run(&cli).await.expect("welcome never fails");

        assert!(output.starts_with("Welcome to Sheldon CLI!"));
        assert!(output.contains("sheldon help"));
    }
}
