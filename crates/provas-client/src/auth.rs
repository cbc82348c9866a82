//! Account endpoints: `POST /sign-up` and `POST /sign-in`.
//!
//! These are the only calls that do not send a bearer token.

use serde::{Deserialize, Serialize};

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode_json},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SignInResponse {
    token: String,
}

impl ApiClient {
    /// Create an account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the API rejects it.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<(), ClientError> {
        check_response(self.post_public("/sign-up").json(credentials).send().await?).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API rejects the
    /// credentials, or the response has no token.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let resp = self.post_public("/sign-in").json(credentials).send().await?;
        let data: SignInResponse = decode_json(resp).await?;
        Ok(data.token)
    }
}
