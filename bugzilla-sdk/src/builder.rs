// ABOUTME: Builder pattern implementation for BugzillaClient configuration
// ABOUTME: Provides type-safe configuration with compile-time validation

use crate::BugzillaClient;
use crate::constants::urls;
use crate::error::BugzillaError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<BugzillaClient, BugzillaError>))]
pub struct BugzillaClientConfig {
    pub api_key: SecretString,

    #[builder(default = urls::DEFAULT_API_URL.to_string(), setter(into))]
    pub base_url: String,

    /// No timeout unless one is set
    #[builder(default = None)]
    pub timeout: Option<Duration>,
}

impl From<BugzillaClientConfig> for Result<BugzillaClient, BugzillaError> {
    fn from(config: BugzillaClientConfig) -> Self {
        BugzillaClient::from_config(config)
    }
}

impl BugzillaClient {
    pub fn builder() -> BugzillaClientConfigBuilder<((), (), ())> {
        BugzillaClientConfig::builder()
    }
}
