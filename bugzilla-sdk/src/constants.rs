// ABOUTME: Centralized constants for the Bugzilla SDK
// ABOUTME: Contains API URLs, REST parameter names and search operator values

/// Bugzilla API URLs
pub mod urls {
    /// Default REST endpoint
    pub const DEFAULT_API_URL: &str = "https://bugzilla.mozilla.org/rest";

    /// Path of the bug resource, relative to the REST endpoint
    pub const BUG_PATH: &str = "bug";
}

/// REST parameter names
pub mod params {
    /// Carries the API key in query strings and JSON bodies
    pub const API_KEY: &str = "Bugzilla_api_key";

    pub const INCLUDE_FIELDS: &str = "include_fields";
    pub const RESOLUTION: &str = "resolution";
    pub const TOP_JOIN: &str = "j_top";
}

/// Values used when building a custom search
pub mod search {
    /// Resolution value of bugs that are still open
    pub const OPEN_RESOLUTION: &str = "---";

    /// Boolean join of the top-level search terms
    pub const JOIN_OR: &str = "OR";

    /// Search field holding the bug summary
    pub const SUMMARY_FIELD: &str = "short_desc";

    /// Case-sensitive substring operator
    pub const SUBSTRING_OPERATOR: &str = "substring";

    /// Fields requested from the bug search
    pub const DEFAULT_FIELDS: &[&str] = &["id", "summary"];
}
