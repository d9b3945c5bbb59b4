use anyhow::{Context, Result};
use apiquery_core::{ApiClient, Config};
use clap::{Parser, Subcommand};
use inquire::{CustomType, CustomUserError, Text, validator::Validation};

use crate::menu::Session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "apiquery", version, about = "Query public REST APIs from an interactive menu")]
pub struct Cli {
    /// Print debug logs to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Ignore the config file and use the built-in endpoints.
    #[arg(long)]
    pub config_defaults: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set service endpoints and the request timeout.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => {
                let config = if self.config_defaults { Config::default() } else { Config::load()? };
                tracing::debug!(?config, "starting menu");

                let client = ApiClient::new(&config)?;
                let stdin = std::io::stdin().lock();
                let stdout = std::io::stdout().lock();
                Session::new(client, stdin, stdout).run().await
            }
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;
    let endpoints = &mut config.endpoints;

    endpoints.users_base = ask_url("Users/posts/todos base URL:", &endpoints.users_base)?;
    endpoints.crypto_base = ask_url("Crypto tickers base URL:", &endpoints.crypto_base)?;
    endpoints.geocoding_base = ask_url("Geocoding base URL:", &endpoints.geocoding_base)?;
    endpoints.forecast_base = ask_url("Forecast base URL:", &endpoints.forecast_base)?;

    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .with_validator(nonzero_timeout)
        .prompt()
        .context("Failed to read timeout")?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn ask_url(message: &str, current: &str) -> Result<String> {
    let answer = Text::new(message)
        .with_default(current)
        .prompt()
        .with_context(|| format!("Failed to read answer for '{message}'"))?;

    Ok(answer.trim().trim_end_matches('/').to_string())
}

fn nonzero_timeout(secs: &u64) -> Result<Validation, CustomUserError> {
    if *secs == 0 {
        Ok(Validation::Invalid("Timeout must be at least 1 second".into()))
    } else {
        Ok(Validation::Valid)
    }
}
