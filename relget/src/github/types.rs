//! Wire types and errors for the GitHub Releases API.
//!
//! Only the fields this tool consumes are modeled; unknown fields in the
//! JSON payload are ignored. GitHub serves `null` for a release's `name`
//! and `body` when they were never set, so those fields deserialize to
//! empty strings rather than options.

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors from the HTTP layer or response decoding.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Non-success HTTP status from the API.
    #[error("HTTP {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    /// Response body could not be decoded as the expected JSON.
    #[error("failed to decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

/// A GitHub release.
///
/// Immutable once fetched; the asset list preserves server-provided order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub id: u64,

    /// Tag name (e.g. `"v1.0.0"`).
    #[serde(default)]
    pub tag_name: String,

    /// Display name. May equal the tag name.
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,

    /// Release notes body.
    #[serde(default, deserialize_with = "null_to_default")]
    pub body: String,

    #[serde(default)]
    pub draft: bool,

    #[serde(default)]
    pub prerelease: bool,

    /// Creation timestamp, ISO 8601 (e.g. `"2023-12-01T10:30:00Z"`).
    #[serde(default)]
    pub created_at: String,

    /// Publish timestamp, ISO 8601. Empty for unpublished drafts.
    #[serde(default, deserialize_with = "null_to_default")]
    pub published_at: String,

    /// Attached binary assets, in server-provided order.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// A single release asset (downloadable file).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub id: u64,

    /// Flat file name (e.g. `"app-1.0.0-linux-amd64.tar.gz"`).
    #[serde(default)]
    pub name: String,

    /// MIME content type reported by the API.
    #[serde(default)]
    pub content_type: String,

    /// Size in bytes.
    #[serde(default)]
    pub size: u64,

    /// Public download URL.
    #[serde(default)]
    pub browser_download_url: String,

    /// API download URL, requested with `Accept: application/octet-stream`.
    #[serde(default)]
    pub url: String,
}

/// Deserialize a nullable JSON field to its default value.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
