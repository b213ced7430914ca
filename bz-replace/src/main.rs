// ABOUTME: Main entry point for the bz-replace application
// ABOUTME: Wires config, credentials and the Bugzilla client into a single run

use anyhow::{Context, Result};
use bugzilla_sdk::{ApiKeyFile, BugzillaClient, CredentialProvider};
use clap::Parser;
use std::io;
use std::process::ExitCode;

use bz_replace::cli::Cli;
use bz_replace::cli_output::CliOutput;
use bz_replace::config::Config;
use bz_replace::output::ReportFormatter;
use bz_replace::runner::{Outcome, Runner};
use bz_replace::types::ReplacementPair;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Usage errors exit before any file or network access
    let pairs = cli.replacement_pairs().unwrap_or_else(|e| e.exit());

    match run(&cli, &pairs).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            CliOutput::with_color(cli.use_color()).report(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

async fn run(cli: &Cli, pairs: &[ReplacementPair]) -> Result<Outcome> {
    let config = Config::load().context("Failed to load configuration")?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());
    log::debug!("Using Bugzilla API at {}", api_url);

    let key_file = ApiKeyFile::new(config.resolve_api_key_file()?);
    let api_key = key_file.load_api_key()?;

    let client = BugzillaClient::builder()
        .api_key(api_key)
        .base_url(api_url)
        .build()
        .context("Failed to create Bugzilla client")?;

    let runner = Runner::new(ReportFormatter::new(cli.use_color()));
    runner
        .run(&client, pairs, cli.update, &mut io::stdout(), &mut io::stderr())
        .await
}
