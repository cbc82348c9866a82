//! Client error types.

use provas_config::ConfigError;
use provas_core::errors::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the exam API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// An authenticated call was attempted without a token.
    #[error("not authenticated: sign in and set PROVAS_AUTH__TOKEN or pass --token")]
    NotAuthenticated,

    /// Caller-side input failed validation.
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// Client settings are unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The exam link could not be opened.
    #[error("could not open {url}: {reason}")]
    Open { url: String, reason: String },
}

impl ClientError {
    /// Notification text used when the API gave nothing better.
    pub const GENERIC_MESSAGE: &'static str = "Erro, tente novamente em alguns segundos!";

    /// Whether the failure happened on the way to or from the API.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. } | Self::Parse(_))
    }

    /// Text to show the user: the API's own error body when it sent one.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => String::from(Self::GENERIC_MESSAGE),
        }
    }
}
