// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Provides standardized formatting for errors, warnings and hints on stderr

use bugzilla_sdk::BugzillaError;
use owo_colors::OwoColorize;

/// Centralized CLI output utilities for consistent formatting
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create CLI output utility with explicit color setting
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    /// Format an error line with its prefix
    pub fn format_error(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", "error:".red().bold(), message)
        } else {
            format!("error: {}", message)
        }
    }

    /// Format a hint line with its prefix
    pub fn format_hint(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", "hint:".blue().bold(), message)
        } else {
            format!("hint: {}", message)
        }
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    /// Display an error with its cause chain and any SDK hint
    pub fn report(&self, err: &anyhow::Error) {
        self.error(&format!("{:#}", err));

        if let Some(help) = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<BugzillaError>())
            .and_then(BugzillaError::help_text)
        {
            eprintln!("{}", self.format_hint(help));
        }
    }
}
