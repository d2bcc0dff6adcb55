//! GitHub Releases REST API client.
//!
//! This module provides the wire types and the HTTP plumbing for talking
//! to the GitHub Releases API:
//!
//! - [`Release`] / [`Asset`]: the consumed subset of the release JSON schema
//! - [`HttpClient`]: injectable HTTP-get capability, enabling test doubles
//! - [`ReqwestClient`]: production implementation backed by `reqwest`
//! - [`ReleaseClient`]: release lookup and listing on top of [`HttpClient`]
//!
//! # Example
//!
//! ```ignore
//! use relget::github::{ReleaseClient, ReqwestClient};
//!
//! let http_client = ReqwestClient::new()?;
//! let client = ReleaseClient::new(http_client);
//! let release = client.get_release("owner/repo", None)?;
//! ```

mod client;
mod http;
mod types;

pub use client::{release_endpoint, releases_endpoint, ReleaseClient};
pub use http::{HttpClient, ReqwestClient, GITHUB_API_BASE};
pub use types::{ApiError, Asset, Release};

#[cfg(test)]
pub use http::tests::MockHttpClient;
