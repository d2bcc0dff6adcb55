//! HTTP client abstraction for testability

use std::io::Read;

use tracing::debug;

use super::types::ApiError;

/// Base URL for the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com/";

/// User agent sent with every request. GitHub rejects requests without one.
const USER_AGENT: &str = concat!("relget/", env!("CARGO_PKG_VERSION"));

/// Trait for HTTP client operations against the forge API.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests. Endpoints may be given as
/// paths relative to the API base (e.g. `repos/owner/repo/releases`) or
/// as absolute URLs (asset download URLs come absolute from the API).
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request and buffers the full response body.
    ///
    /// Used for JSON endpoints, whose payloads are small.
    fn get(&self, endpoint: &str) -> Result<Vec<u8>, ApiError>;

    /// Performs an HTTP GET request and returns the response body as a
    /// reader, so arbitrarily large bodies can be streamed to disk.
    ///
    /// `accept` overrides the `Accept` header when set (asset downloads
    /// need `application/octet-stream` to force raw bytes rather than a
    /// JSON redirect wrapper).
    fn get_stream(
        &self,
        endpoint: &str,
        accept: Option<&str>,
    ) -> Result<Box<dyn Read + Send>, ApiError>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn get(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        (**self).get(endpoint)
    }

    fn get_stream(
        &self,
        endpoint: &str,
        accept: Option<&str>,
    ) -> Result<Box<dyn Read + Send>, ApiError> {
        (**self).get_stream(endpoint, accept)
    }
}

/// Real HTTP client implementation using reqwest.
///
/// Sends a bearer token from the `GITHUB_TOKEN` environment variable when
/// one is set, which raises rate limits and grants access to private
/// repositories. Anonymous requests work for public repositories.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl ReqwestClient {
    /// Creates a new client against the public GitHub API.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Creates a new client against a custom API base URL (GitHub
    /// Enterprise installations).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
        })
    }

    /// Resolve an endpoint to a full URL.
    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}{}", self.base_url, endpoint)
        }
    }

    fn request(
        &self,
        endpoint: &str,
        accept: &str,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let url = self.url_for(endpoint);
        debug!(url = %url, accept = %accept, "GET");

        let mut request = self.client.get(&url).header("Accept", accept);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| ApiError::Http(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        Ok(response)
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.request(endpoint, "application/vnd.github+json")?;

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| ApiError::Http(format!("failed to read response: {}", e)))
    }

    fn get_stream(
        &self,
        endpoint: &str,
        accept: Option<&str>,
    ) -> Result<Box<dyn Read + Send>, ApiError> {
        let response = self.request(endpoint, accept.unwrap_or("application/vnd.github+json"))?;
        Ok(Box::new(response))
    }
}
