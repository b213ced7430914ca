// ABOUTME: Drives one run: search, substitute, report, and optionally update
// ABOUTME: Writes the report to stdout-like sinks and progress to stderr-like sinks

use anyhow::{Context, Result};
use bugzilla_sdk::{BugId, BugzillaClient, BugzillaError, SearchQuery};
use std::io::Write;
use std::process::ExitCode;

use crate::constants::messages;
use crate::output::ReportFormatter;
use crate::replace::plan_updates;
use crate::types::ReplacementPair;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoMatches,
    DryRun { planned: usize },
    Applied { updated: usize },
    SearchFailed,
    UpdateFailed { id: BugId },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::NoMatches | Outcome::DryRun { .. } | Outcome::Applied { .. }
        )
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Open bugs whose summary contains any of the needles
pub fn summary_search(pairs: &[ReplacementPair]) -> SearchQuery {
    SearchQuery::new().summary_contains_any(pairs.iter().map(|p| p.needle.as_str()))
}

pub struct Runner {
    formatter: ReportFormatter,
}

impl Runner {
    pub fn new(formatter: ReportFormatter) -> Self {
        Self { formatter }
    }

    /// Requests are issued one at a time; the first failed update stops the
    /// run and leaves earlier updates applied.
    pub async fn run<O, E>(
        &self,
        client: &BugzillaClient,
        pairs: &[ReplacementPair],
        update: bool,
        out: &mut O,
        err: &mut E,
    ) -> Result<Outcome>
    where
        O: Write,
        E: Write,
    {
        let bugs = match client.search_bugs(&summary_search(pairs)).await {
            Ok(bugs) => bugs,
            Err(e) => {
                writeln!(err, "search failed: {}", e)?;
                return Ok(Outcome::SearchFailed);
            }
        };

        if bugs.is_empty() {
            writeln!(out, "{}", messages::NO_MATCHES)?;
            return Ok(Outcome::NoMatches);
        }

        let planned = plan_updates(bugs, pairs);
        writeln!(out, "{}", self.formatter.format_report(&planned, pairs))?;

        if !update {
            writeln!(out, "{}", messages::UPDATE_HINT)?;
            return Ok(Outcome::DryRun {
                planned: planned.len(),
            });
        }

        for item in &planned {
            write!(err, "{} ...", item.id())?;
            err.flush()?;

            match client.update_summary(item.id(), &item.new_summary).await {
                Ok(()) => writeln!(err, " ok")?,
                Err(e @ BugzillaError::IdMismatch { .. }) => {
                    writeln!(err, " failed: {}", e)?;
                    return Err(e).context("Bugzilla updated a different bug than requested");
                }
                Err(e) => {
                    writeln!(err, " failed: {}", e)?;
                    return Ok(Outcome::UpdateFailed { id: item.id() });
                }
            }
        }

        log::debug!("Updated {} bug(s)", planned.len());
        Ok(Outcome::Applied {
            updated: planned.len(),
        })
    }
}
