//! Bearer token for authenticated API calls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT returned by `POST /sign-in`.
    #[serde(default)]
    pub token: String,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty()
    }
}
