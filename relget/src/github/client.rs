//! Release lookup and listing against the GitHub Releases API.

use serde::de::DeserializeOwned;

use super::http::HttpClient;
use super::types::{ApiError, Release};

/// Endpoint for a single release.
///
/// A tag selects "get release by tag"; no tag selects "get latest
/// release". Exactly one request shape - there is no fallback from
/// tag-not-found to latest.
///
/// # Example
///
/// ```
/// use relget::github::release_endpoint;
///
/// assert_eq!(
///     release_endpoint("owner/repo", None),
///     "repos/owner/repo/releases/latest"
/// );
/// assert_eq!(
///     release_endpoint("owner/repo", Some("v1.0.0")),
///     "repos/owner/repo/releases/tags/v1.0.0"
/// );
/// ```
pub fn release_endpoint(repo: &str, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("repos/{}/releases/tags/{}", repo, tag),
        None => format!("repos/{}/releases/latest", repo),
    }
}

/// Endpoint for the release listing of a repository.
pub fn releases_endpoint(repo: &str) -> String {
    format!("repos/{}/releases", repo)
}

/// Client for fetching release records.
///
/// Generic over [`HttpClient`] so tests can substitute a mock transport.
pub struct ReleaseClient<C: HttpClient> {
    http_client: C,
}

impl<C: HttpClient> ReleaseClient<C> {
    /// Creates a new release client on top of the given HTTP client.
    pub fn new(http_client: C) -> Self {
        Self { http_client }
    }

    /// Fetch a single release, by tag when given, otherwise the latest.
    pub fn get_release(&self, repo: &str, tag: Option<&str>) -> Result<Release, ApiError> {
        self.fetch_json(&release_endpoint(repo, tag))
    }

    /// Fetch all releases of a repository.
    ///
    /// Only the first page the API serves is observed; pagination is a
    /// known limitation.
    pub fn list_releases(&self, repo: &str) -> Result<Vec<Release>, ApiError> {
        self.fetch_json(&releases_endpoint(repo))
    }

    fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let body = self.http_client.get(endpoint)?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}
