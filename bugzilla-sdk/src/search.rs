// ABOUTME: Query builder for Bugzilla custom searches over the REST bug endpoint
// ABOUTME: Encodes field selection, resolution filter and OR-joined summary terms

use crate::constants::{params, search};

/// A Bugzilla bug search, rendered as REST query parameters.
///
/// Summary terms are numbered from 1 and joined with `j_top=OR`, so a bug
/// matches when its summary contains any of the needles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    fields: Vec<String>,
    open_only: bool,
    summary_terms: Vec<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    /// Create a query for open bugs returning only `id` and `summary`
    pub fn new() -> Self {
        Self {
            fields: search::DEFAULT_FIELDS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            open_only: true,
            summary_terms: Vec::new(),
        }
    }

    /// Replace the requested field list
    pub fn include_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict (or not) to bugs with an empty resolution
    pub fn open_only(mut self, open_only: bool) -> Self {
        self.open_only = open_only;
        self
    }

    /// Match bugs whose summary contains `needle`
    pub fn summary_contains(mut self, needle: impl Into<String>) -> Self {
        self.summary_terms.push(needle.into());
        self
    }

    /// Match bugs whose summary contains any of `needles`
    pub fn summary_contains_any<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.summary_terms
            .extend(needles.into_iter().map(Into::into));
        self
    }

    pub fn summary_terms(&self) -> &[String] {
        &self.summary_terms
    }

    /// Query parameters in the order they are sent, without the API key
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.fields.len() + 2 + self.summary_terms.len() * 3);

        for field in &self.fields {
            out.push((params::INCLUDE_FIELDS.to_string(), field.clone()));
        }

        if self.open_only {
            out.push((
                params::RESOLUTION.to_string(),
                search::OPEN_RESOLUTION.to_string(),
            ));
        }

        if !self.summary_terms.is_empty() {
            out.push((params::TOP_JOIN.to_string(), search::JOIN_OR.to_string()));
        }

        for (i, needle) in self.summary_terms.iter().enumerate() {
            let n = i + 1;
            out.push((format!("f{n}"), search::SUMMARY_FIELD.to_string()));
            out.push((format!("o{n}"), search::SUBSTRING_OPERATOR.to_string()));
            out.push((format!("v{n}"), needle.clone()));
        }

        out
    }
}
