// ABOUTME: CLI argument definitions for the bz-replace application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::env;

use crate::types::ReplacementPair;

#[derive(Parser, Debug)]
#[command(name = "bz-replace")]
#[command(about = "Find and replace text in the summaries of open Bugzilla bugs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bugzilla REST endpoint [default: https://bugzilla.mozilla.org/rest]
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Submit the new summaries (default is a dry run)
    #[arg(short, long)]
    pub update: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short)]
    pub verbose: bool,

    /// Needle/replacement pairs, applied in order
    #[arg(value_name = "NEEDLE REPLACEMENT", required = true, num_args = 2..)]
    pub pairs: Vec<String>,
}

impl Cli {
    /// Group the positional values into ordered pairs
    pub fn replacement_pairs(&self) -> Result<Vec<ReplacementPair>, clap::Error> {
        if self.pairs.len() % 2 != 0 {
            let mut cmd = Cli::command();
            return Err(cmd.error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "expected NEEDLE REPLACEMENT pairs, got {} values; '{}' has no replacement",
                    self.pairs.len(),
                    self.pairs.last().map(String::as_str).unwrap_or_default()
                ),
            ));
        }

        Ok(self
            .pairs
            .chunks_exact(2)
            .map(|chunk| ReplacementPair::new(&chunk[0], &chunk[1]))
            .collect())
    }

    /// Color unless disabled by flag, NO_COLOR, or a dumb terminal
    pub fn use_color(&self) -> bool {
        !self.no_color
            && env::var_os("NO_COLOR").is_none()
            && env::var("TERM").unwrap_or_default() != "dumb"
    }
}
