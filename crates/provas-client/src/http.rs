//! Shared HTTP response helpers.
//!
//! Centralizes the status check (non-success → [`ClientError::Api`] carrying
//! the body) and JSON decoding (→ [`ClientError::Parse`]) so the endpoint
//! methods stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Return the response unchanged on success, otherwise an API error with
/// the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Check the status and decode the body as JSON.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = check_response(resp).await?.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}
