//! Server-to-server OAuth token exchange.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Credentials;
use crate::{Error, Result};

/// Zoom's name for the client-credentials grant.
pub const GRANT_TYPE: &str = "account_credentials";

/// Token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Exchange account credentials for a short-lived bearer token.
///
/// Basic auth with `client_id:client_secret`, form body with the grant type
/// and account id. Any non-2xx answer becomes [`Error::Auth`] with the
/// upstream status and body.
pub async fn get_access_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    debug!(url = %token_url, account_id = %credentials.account_id, "Requesting access token");

    let response = http
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", GRANT_TYPE),
            ("account_id", credentials.account_id.as_str()),
        ])
        .send()
        .await
        .map_err(|e| Error::ConnectionError(format!("Token request failed: {}", e)))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| Error::ConnectionError(format!("Failed to read token response: {}", e)))?;

    if !status.is_success() {
        warn!(status = status.as_u16(), "Token request rejected");
        return Err(Error::Auth {
            status: status.as_u16(),
            message: text,
        });
    }

    let token: AccessToken = serde_json::from_str(&text).map_err(|e| Error::Auth {
        status: status.as_u16(),
        message: format!("Unexpected token response: {} ({})", text, e),
    })?;

    if token.access_token.trim().is_empty() {
        return Err(Error::Auth {
            status: status.as_u16(),
            message: "Token endpoint returned an empty access_token".to_string(),
        });
    }

    debug!(expires_in = ?token.expires_in, "Access token acquired");
    Ok(token)
}
