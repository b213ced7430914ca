// ABOUTME: Bugzilla SDK library providing a typed REST client for bug search and update
// ABOUTME: Includes authentication, search query building, and error mapping

pub mod builder;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod search;

#[cfg(test)]
pub mod test_helpers;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

pub use builder::BugzillaClientConfig;
pub use credentials::{ApiKeyFile, CredentialProvider, StaticApiKey};
pub use error::BugzillaError;
pub use search::SearchQuery;

pub type Result<T> = std::result::Result<T, BugzillaError>;

/// Numeric bug identifier
pub type BugId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    pub id: BugId,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct BugList {
    bugs: Vec<Bug>,
}

#[derive(Debug, Deserialize)]
struct UpdatedBug {
    id: BugId,
}

#[derive(Debug, Deserialize)]
struct UpdateResponse {
    #[serde(default)]
    bugs: Vec<UpdatedBug>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct SummaryUpdate<'a> {
    #[serde(rename = "Bugzilla_api_key")]
    api_key: &'a str,
    ids: [BugId; 1],
    summary: &'a str,
}

pub struct BugzillaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl BugzillaClient {
    pub fn new(api_key: SecretString) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub(crate) fn from_config(config: BugzillaClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| {
            BugzillaError::Configuration(format!("Invalid API URL '{}': {}", base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BugzillaError::Configuration(format!(
                "Invalid API URL '{}': scheme must be http or https",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("bugzilla-sdk/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BugzillaError::Configuration(format!("HTTP client setup: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bug_url(&self) -> String {
        format!("{}/{}", self.base_url, constants::urls::BUG_PATH)
    }

    /// Run a bug search; bugs come back in server order
    pub async fn search_bugs(&self, query: &SearchQuery) -> Result<Vec<Bug>> {
        let mut params = query.to_params();
        params.push((
            constants::params::API_KEY.to_string(),
            self.api_key.expose_secret().to_string(),
        ));

        log::debug!(
            "Searching {} for {} summary term(s)",
            self.bug_url(),
            query.summary_terms().len()
        );

        let response = self.client.get(self.bug_url()).query(&params).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: BugList = response.json().await?;
        log::debug!("Search returned {} bug(s)", body.bugs.len());
        Ok(body.bugs)
    }

    /// Set the summary of one bug; fails if the response names another bug
    pub async fn update_summary(&self, id: BugId, summary: &str) -> Result<()> {
        let url = format!("{}/{}", self.bug_url(), id);
        let body = SummaryUpdate {
            api_key: self.api_key.expose_secret(),
            ids: [id],
            summary,
        };

        log::debug!("Updating summary of bug {}", id);

        let response = self.client.put(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let updated: UpdateResponse = response.json().await?;
        let returned = updated
            .bugs
            .first()
            .map(|bug| bug.id)
            .ok_or_else(|| BugzillaError::InvalidResponse("update returned no bugs".to_string()))?;

        if returned != id {
            return Err(BugzillaError::IdMismatch {
                requested: id,
                returned,
            });
        }

        Ok(())
    }
}

async fn api_error(response: reqwest::Response) -> BugzillaError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    log::debug!("Request failed with {}: {}", status, message);
    BugzillaError::Api {
        status: status.as_u16(),
        message,
    }
}
