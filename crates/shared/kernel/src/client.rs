//! The HTTP client all backend traffic goes through.
//!
//! The backend address is injected at construction as an immutable
//! [`EndpointConfig`] instead of living in process-wide client state. A
//! component that issues requests therefore cannot exist before the address
//! is resolved; the configure-before-request ordering holds by construction.

use moneta_domain::config::EndpointConfig;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = concat!("moneta/", env!("CARGO_PKG_VERSION"));

/// Errors surfaced by the API client.
///
/// A malformed base URL shows up here as [`ClientError::Request`] on the
/// first call; resolution itself never rejects an address.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to construct the HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Backend API client with an injected, immutable base address.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// Builds a client around the resolved endpoint.
    ///
    /// # Errors
    /// Returns [`ClientError::Build`] if the underlying HTTP stack cannot
    /// be initialized. The base URL is taken as-is and not validated here.
    pub fn new(endpoint: &EndpointConfig) -> Result<Self, ClientError> {
        let http = Client::builder().user_agent(USER_AGENT_VALUE).build().map_err(ClientError::Build)?;
        Ok(Self { http, base_url: Arc::from(endpoint.base_url()) })
    }

    /// The address all relative request paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &str) -> Result<Response, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Request { url: url.to_owned(), source })?;

        let status = response.status();
        debug!(%status, url, "Backend response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Status { status, url: url.to_owned() })
        }
    }

    /// GET a JSON resource relative to the base address.
    ///
    /// # Errors
    /// [`ClientError::Request`] on transport failure, [`ClientError::Status`]
    /// on a non-success status, [`ClientError::Decode`] on a body that does
    /// not deserialize into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        let response = self.send(self.http.get(&url), &url).await?;
        response.json::<T>().await.map_err(|source| ClientError::Decode { url, source })
    }

    /// POST a JSON body and decode the JSON reply.
    ///
    /// # Errors
    /// Same taxonomy as [`ApiClient::get_json`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = self.send(self.http.post(&url).json(body), &url).await?;
        response.json::<T>().await.map_err(|source| ClientError::Decode { url, source })
    }

    /// Probes the backend root.
    ///
    /// # Errors
    /// [`ClientError::Request`] when the backend is unreachable or the base
    /// address is malformed.
    pub async fn health(&self) -> Result<StatusCode, ClientError> {
        let url = self.url("");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Request { url, source })?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&EndpointConfig::from_override(Some(base))).expect("client build")
    }

    #[test]
    fn url_joining_normalizes_slashes() {
        let api = client("http://localhost:5005");
        assert_eq!(api.url("/transactions"), "http://localhost:5005/transactions");
        assert_eq!(api.url("transactions"), "http://localhost:5005/transactions");

        let api = client("http://localhost:5005/");
        assert_eq!(api.url("/transactions"), "http://localhost:5005/transactions");
    }

    #[test]
    fn construction_accepts_malformed_addresses() {
        // Resolution is identity passthrough; failure belongs to request time.
        let endpoint = EndpointConfig::from_override(Some("not a url"));
        assert!(ApiClient::new(&endpoint).is_ok());
    }
}
