// ABOUTME: Centralized constants for the bz-replace CLI application
// ABOUTME: Contains file locations, report layout widths and user-facing messages

/// Files and directories the CLI reads
pub mod paths {
    /// API key file, relative to the home directory
    pub const API_KEY_FILE: &str = ".bugzilla_api_key";

    /// Directory name under the user config directory
    pub const CONFIG_DIR: &str = "bz-replace";

    pub const CONFIG_FILE: &str = "config.toml";

    /// Project-local config file in the working directory
    pub const PROJECT_CONFIG_FILE: &str = "bz-replace.toml";
}

/// Report layout
pub mod ui {
    /// Leading indent of the original summary line
    pub const LINE_INDENT: &str = "  ";

    /// Bug ids are right-aligned to this width
    pub const ID_WIDTH: usize = 7;
}

/// Messages printed by the run
pub mod messages {
    pub const NO_MATCHES: &str = "No matching bugs found.";

    pub const UPDATE_HINT: &str = "Run again with -u/--update to apply these changes.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert!(paths::API_KEY_FILE.starts_with('.'));
        assert_eq!(paths::CONFIG_FILE, "config.toml");
        assert!(paths::PROJECT_CONFIG_FILE.ends_with(".toml"));
    }

    #[test]
    fn test_ui_constants() {
        assert_eq!(ui::LINE_INDENT.len(), 2);
        assert_eq!(ui::ID_WIDTH, 7);
    }

    #[test]
    fn test_messages_mention_update_flag() {
        assert!(messages::UPDATE_HINT.contains("--update"));
        assert!(messages::NO_MATCHES.contains("No matching bugs"));
    }
}
