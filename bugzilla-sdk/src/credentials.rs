// ABOUTME: API key lookup for authenticating against Bugzilla
// ABOUTME: Reads a plaintext key file behind a small provider trait

use secrecy::SecretString;
use std::path::{Path, PathBuf};

use crate::error::BugzillaError;

/// Source of the Bugzilla API key
pub trait CredentialProvider {
    fn load_api_key(&self) -> Result<SecretString, BugzillaError>;
}

/// API key stored as a single line in a plaintext file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyFile {
    path: PathBuf,
}

impl ApiKeyFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialProvider for ApiKeyFile {
    fn load_api_key(&self) -> Result<SecretString, BugzillaError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| BugzillaError::Credentials {
                path: self.path.clone(),
                source,
            })?;

        let key = content.trim();
        if key.is_empty() {
            log::warn!("API key file {} is empty", self.path.display());
        }

        log::debug!("Loaded API key from {}", self.path.display());
        Ok(SecretString::new(key.to_string().into_boxed_str()))
    }
}

/// Key already held in memory
pub struct StaticApiKey(SecretString);

impl StaticApiKey {
    pub fn new(key: SecretString) -> Self {
        Self(key)
    }
}

impl CredentialProvider for StaticApiKey {
    fn load_api_key(&self) -> Result<SecretString, BugzillaError> {
        Ok(self.0.clone())
    }
}
