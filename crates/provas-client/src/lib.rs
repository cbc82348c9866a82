//! # provas-client
//!
//! HTTP client for the exam-sharing API, plus the flows built on top of it:
//! - [`ApiClient`]: one method per API endpoint (auth, grouped exams,
//!   categories, disciplines, exam registration, view counters)
//! - [`pages`]: load/search the Disciplines and Instructors views and
//!   register new exams, reporting outcomes through a
//!   [`provas_core::alert::Notify`] sink
//! - [`viewer`]: the host that drives a row's view-count state machine

pub mod auth;
pub mod exams;
pub mod pages;
pub mod viewer;

mod error;
mod http;

pub use error::ClientError;

use provas_config::{ApiConfig, ProvasConfig};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the exam API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build an unauthenticated client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for unusable settings, or
    /// [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("provas/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Build a client from the full config, carrying the token if one is set.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &ProvasConfig) -> Result<Self, ClientError> {
        let client = Self::new(&config.api)?;
        Ok(match config.require_token() {
            Ok(token) => client.with_token(token),
            Err(_) => client,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn bearer(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }

    fn get(&self, path: &str) -> Result<reqwest::RequestBuilder, ClientError> {
        tracing::debug!(method = "GET", path, "api request");
        Ok(self.http.get(self.url(path)).bearer_auth(self.bearer()?))
    }

    fn post(&self, path: &str) -> Result<reqwest::RequestBuilder, ClientError> {
        tracing::debug!(method = "POST", path, "api request");
        Ok(self.http.post(self.url(path)).bearer_auth(self.bearer()?))
    }

    fn post_public(&self, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(method = "POST", path, "api request");
        self.http.post(self.url(path))
    }
}
