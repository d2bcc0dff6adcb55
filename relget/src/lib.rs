//! relget - Download assets and source archives from GitHub releases
//!
//! This library provides the core functionality for resolving a repository
//! and optional tag to a release record, listing releases and assets,
//! filtering assets by a shell-glob pattern, and streaming matching files
//! (or a source archive) to a local directory.
//!
//! # Architecture
//!
//! - [`github`]: GitHub Releases REST client behind an injectable
//!   [`HttpClient`] trait
//! - [`filter`]: glob-based asset filtering
//! - [`present`]: pure text rendering of release and asset listings
//! - [`download`]: orchestration of the list/archive/asset-download flows
//! - [`config`]: per-invocation configuration

pub mod config;
pub mod download;
pub mod filter;
pub mod github;
pub mod present;

pub use config::Config;
pub use download::{ConsoleOutput, DownloadError, Downloader, Output};
pub use filter::{filter_assets, PatternError};
pub use github::{ApiError, Asset, HttpClient, Release, ReleaseClient, ReqwestClient};
