//! Authenticated Zoom REST client.

use reqwest::{Client, Method, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{self, AccessToken};
use crate::config::{Credentials, ZoomConfig};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct ZoomClient {
    http: Client,
    credentials: Credentials,
    api_url: String,
    oauth_url: String,
}

impl ZoomClient {
    pub fn new(config: ZoomConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(format!("zoom_meetings/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::ConnectionError(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            credentials: config.credentials,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            oauth_url: config.oauth_url,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Fetch a fresh bearer token. Nothing is cached between calls.
    pub async fn access_token(&self) -> Result<String> {
        let token: AccessToken =
            auth::get_access_token(&self.http, &self.oauth_url, &self.credentials).await?;
        Ok(token.access_token)
    }

    /// Build an endpoint URL from path segments; each segment is
    /// percent-encoded on its own so ids cannot escape their slot.
    /// Empty, `.` and `..` segments are rejected since the URL parser would
    /// collapse them into a different resource.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || s.chars().all(|c| c == '.'))
        {
            return Err(Error::InvalidArgument(format!(
                "Invalid path segment '{}'",
                bad
            )));
        }

        let mut url = Url::parse(&self.api_url)
            .map_err(|e| Error::Config(format!("Invalid API URL '{}': {}", self.api_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("API URL cannot be a base: {}", self.api_url)))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Issue one authenticated call.
    ///
    /// Returns the parsed JSON body, or `Value::Null` for 204 and empty
    /// bodies. Non-2xx answers become [`Error::Api`] with the original status.
    pub async fn request(
        &self,
        token: &str,
        method: Method,
        url: Url,
        body: Option<&Value>,
    ) -> Result<Value> {
        debug!(%method, path = url.path(), "Zoom API request");

        let mut builder = self.http.request(method.clone(), url).bearer_auth(token);
        if let Some(payload) = body {
            builder = builder.json(payload);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::ConnectionError(format!("Zoom request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::ConnectionError(format!("Failed to read Zoom response: {}", e)))?;

        if !status.is_success() {
            warn!(%method, status = status.as_u16(), "Zoom API call failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message: upstream_message(&text),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            Error::SerializationError(format!("Zoom returned non-JSON body: {} ({})", text, e))
        })
    }
}

/// Zoom error bodies look like `{"code":3001,"message":"..."}`; keep the
/// message and code when present, the raw text otherwise.
fn upstream_message(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(json) => match json.get("message").and_then(Value::as_str) {
            Some(message) => match json.get("code") {
                Some(code) => format!("{} (code {})", message, code),
                None => message.to_string(),
            },
            None => text.to_string(),
        },
        Err(_) => text.to_string(),
    }
}
