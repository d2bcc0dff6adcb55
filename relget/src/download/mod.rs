//! Download orchestration.
//!
//! The [`Downloader`] executes exactly one of five mutually exclusive
//! branches per invocation, chosen by fixed precedence:
//!
//! 1. Empty repository: fail before any network call.
//! 2. Releases flag: list all releases.
//! 3. Resolve the release (by tag or latest), then:
//!    a. List flag: list matching assets.
//!    b. Archive format set: download the source archive.
//!    c. Otherwise: download all assets matching the pattern.
//!
//! Asset downloads are fully sequential, one asset at a time. The first
//! failing download aborts the whole operation; files already written
//! stay on disk.

mod output;

pub use output::{ConsoleOutput, Output};

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::filter::{filter_assets, PatternError};
use crate::github::{ApiError, Asset, HttpClient, ReleaseClient};
use crate::present;

/// Result type for download operations.
pub type DownloadResult<T> = Result<T, DownloadError>;

/// Errors that can occur while executing a download invocation.
///
/// Every variant is fatal; there is no retry and no partial-failure
/// aggregation. Wrapped errors carry one layer of context naming the
/// operation that failed.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Bad or missing user input.
    #[error("{0}")]
    Config(String),

    /// Transport failure or non-success response from the forge API.
    #[error("{context}: {source}")]
    Api {
        context: String,
        source: ApiError,
    },

    /// Malformed glob pattern.
    #[error("failed to filter assets: {0}")]
    Pattern(#[from] PatternError),

    /// Zero assets matched the pattern in download mode.
    ///
    /// Deliberately asymmetric with list mode, where zero matches is
    /// informational success: download mode means "I expected to
    /// download something".
    #[error("no assets found matching pattern '{pattern}'")]
    NoMatch { pattern: String },

    /// Failed to create the target directory.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        source: io::Error,
    },

    /// Failed to create a target file.
    #[error("failed to create file {}: {source}", path.display())]
    CreateFileFailed {
        path: PathBuf,
        source: io::Error,
    },

    /// Failed while streaming a response body to a file.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: io::Error,
    },
}

impl DownloadError {
    fn api(context: impl Into<String>) -> impl FnOnce(ApiError) -> Self {
        let context = context.into();
        move |source| Self::Api { context, source }
    }
}

/// Source archive format for repository downloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

impl ArchiveFormat {
    /// Parse a user-supplied format string. Only the exact spellings
    /// `zip` and `tar.gz` are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "zip" => Some(Self::Zip),
            "tar.gz" => Some(Self::TarGz),
            _ => None,
        }
    }

    /// File extension for the downloaded archive.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::TarGz => "tar.gz",
        }
    }

    /// API endpoint path segment serving this format.
    fn endpoint_segment(self) -> &'static str {
        match self {
            Self::Zip => "zipball",
            Self::TarGz => "tarball",
        }
    }
}

/// Endpoint for a repository source archive at the given ref.
pub fn archive_endpoint(repo: &str, tag_ref: &str, format: ArchiveFormat) -> String {
    format!("repos/{}/{}/{}", repo, format.endpoint_segment(), tag_ref)
}

/// Deterministic local filename for a repository source archive.
///
/// # Example
///
/// ```
/// use relget::download::{archive_filename, ArchiveFormat};
///
/// assert_eq!(
///     archive_filename("owner/repo", "v1.0.0", ArchiveFormat::Zip),
///     "owner-repo-v1.0.0.zip"
/// );
/// ```
pub fn archive_filename(repo: &str, tag_ref: &str, format: ArchiveFormat) -> String {
    format!(
        "{}-{}.{}",
        repo.replace('/', "-"),
        tag_ref,
        format.extension()
    )
}

/// Orchestrates release resolution and file downloads.
///
/// Generic over [`HttpClient`] so the whole flow can be exercised in
/// tests without a network.
pub struct Downloader<C: HttpClient> {
    http_client: C,
}

impl<C: HttpClient> Downloader<C> {
    /// Creates a new downloader on top of the given HTTP client.
    pub fn new(http_client: C) -> Self {
        Self { http_client }
    }

    /// Execute the invocation described by `config`, writing progress and
    /// listings to `out`.
    pub fn run(&self, config: &Config, out: &mut dyn Output) -> DownloadResult<()> {
        if config.repository.is_empty() {
            return Err(DownloadError::Config("repository is required".to_string()));
        }

        let client = ReleaseClient::new(&self.http_client);

        if config.releases {
            let releases = client
                .list_releases(&config.repository)
                .map_err(DownloadError::api("failed to get releases"))?;
            emit(out, &present::render_releases(&config.repository, &releases));
            return Ok(());
        }

        let release = client
            .get_release(&config.repository, config.tag.as_deref())
            .map_err(DownloadError::api("failed to get release"))?;

        let annotation = match &config.tag {
            Some(tag) => format!("tag: {}", tag),
            None => "latest".to_string(),
        };
        out.line(&format!(
            "Release: {} ({}) from {}",
            release.name, annotation, config.repository
        ));

        if config.list {
            emit(out, &present::render_assets(&release.assets, &config.pattern)?);
            return Ok(());
        }

        if config.archive.is_some() {
            return self.download_archive(config, out);
        }

        let matching = filter_assets(&release.assets, &config.pattern)?;
        if matching.is_empty() {
            return Err(DownloadError::NoMatch {
                pattern: config.pattern.clone(),
            });
        }

        out.line(&format!(
            "Found {} matching assets to download to {}:",
            matching.len(),
            config.directory.display()
        ));
        for asset in &matching {
            out.line(&format!("  - {} ({} bytes)", asset.name, asset.size));
        }

        self.download_assets(&matching, config, out)
    }

    /// Download the repository source archive for the configured ref.
    ///
    /// The ref defaults to `HEAD` (default branch tip) when no tag was
    /// given.
    fn download_archive(&self, config: &Config, out: &mut dyn Output) -> DownloadResult<()> {
        let format = config
            .archive
            .as_deref()
            .and_then(ArchiveFormat::parse)
            .ok_or_else(|| {
                DownloadError::Config("archive format must be 'zip' or 'tar.gz'".to_string())
            })?;

        let tag_ref = config.tag.as_deref().unwrap_or("HEAD");
        let endpoint = archive_endpoint(&config.repository, tag_ref, format);
        let filename = archive_filename(&config.repository, tag_ref, format);

        let mut body = self
            .http_client
            .get_stream(&endpoint, None)
            .map_err(DownloadError::api("failed to download archive"))?;

        fs::create_dir_all(&config.directory).map_err(|e| DownloadError::CreateDirFailed {
            path: config.directory.clone(),
            source: e,
        })?;

        let path = config.directory.join(&filename);
        let mut file = File::create(&path).map_err(|e| DownloadError::CreateFileFailed {
            path: path.clone(),
            source: e,
        })?;

        let written = io::copy(&mut body, &mut file).map_err(|e| DownloadError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
        debug!(path = %path.display(), bytes = written, "archive downloaded");

        out.line(&format!("Downloaded archive: {}", path.display()));
        Ok(())
    }

    /// Download each asset sequentially, streaming one body fully to
    /// disk before starting the next.
    ///
    /// Same-named or pre-existing files are overwritten by
    /// create-truncate semantics; there is no collision handling and no
    /// cleanup of files written before a failure.
    fn download_assets(
        &self,
        assets: &[Asset],
        config: &Config,
        out: &mut dyn Output,
    ) -> DownloadResult<()> {
        fs::create_dir_all(&config.directory).map_err(|e| DownloadError::CreateDirFailed {
            path: config.directory.clone(),
            source: e,
        })?;

        for asset in assets {
            out.partial(&format!("Downloading {}... ", asset.name));

            let mut body = self
                .http_client
                .get_stream(&asset.url, Some("application/octet-stream"))
                .map_err(DownloadError::api(format!(
                    "failed to download {}",
                    asset.name
                )))?;

            let path = config.directory.join(&asset.name);
            let mut file = File::create(&path).map_err(|e| DownloadError::CreateFileFailed {
                path: path.clone(),
                source: e,
            })?;

            let written = io::copy(&mut body, &mut file).map_err(|e| {
                DownloadError::WriteFailed {
                    path: path.clone(),
                    source: e,
                }
            })?;
            debug!(asset = %asset.name, bytes = written, "asset downloaded");

            out.line(&format!("done ({} bytes)", written));
        }

        out.line(&format!(
            "Successfully downloaded {} assets to {}",
            assets.len(),
            config.directory.display()
        ));
        Ok(())
    }
}

fn emit(out: &mut dyn Output, lines: &[String]) {
    for line in lines {
        out.line(line);
    }
}
