//! Integration tests for the full download flow.
//!
//! These tests drive [`Downloader::run`] end to end through the public
//! API with a mock HTTP transport:
//! - branch precedence (config error, releases, list, archive, assets)
//! - filtering and the list/download zero-match asymmetry
//! - files landing on disk with the expected bytes
//!
//! Run with: `cargo test --test download_flow`

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::sync::Mutex;

use tempfile::TempDir;

use relget::github::ApiError;
use relget::{Config, DownloadError, Downloader, HttpClient, Output};

// ============================================================================
// Helper Functions
// ============================================================================

/// Output sink collecting display text.
#[derive(Default)]
struct CapturedOutput {
    text: String,
}

impl Output for CapturedOutput {
    fn line(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    fn partial(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Mock transport serving fixed bodies per endpoint.
struct FakeForge {
    routes: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl FakeForge {
    fn new(routes: &[(&str, &[u8])]) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|(endpoint, body)| (endpoint.to_string(), body.to_vec()))
                .collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn lookup(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        self.requests.lock().unwrap().push(endpoint.to_string());
        self.routes
            .get(endpoint)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                status: 404,
                endpoint: endpoint.to_string(),
            })
    }
}

impl HttpClient for FakeForge {
    fn get(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        self.lookup(endpoint)
    }

    fn get_stream(
        &self,
        endpoint: &str,
        _accept: Option<&str>,
    ) -> Result<Box<dyn Read + Send>, ApiError> {
        self.lookup(endpoint)
            .map(|bytes| Box::new(std::io::Cursor::new(bytes)) as Box<dyn Read + Send>)
    }
}

/// Run an invocation against the fake forge, returning the result and
/// everything written to the output sink.
fn run(forge: &FakeForge, config: &Config) -> (Result<(), DownloadError>, String) {
    let downloader = Downloader::new(forge);
    let mut out = CapturedOutput::default();
    let result = downloader.run(config, &mut out);
    (result, out.text)
}

const LATEST: &str = "repos/owner/repo/releases/latest";

fn latest_release_json() -> Vec<u8> {
    br#"{
        "id": 1,
        "tag_name": "v1.0.0",
        "name": "Release v1.0.0",
        "assets": [
            {"name": "a.zip", "size": 3, "content_type": "application/zip",
             "url": "https://api.github.com/repos/owner/repo/releases/assets/1"},
            {"name": "b.tar.gz", "size": 4, "content_type": "application/gzip",
             "url": "https://api.github.com/repos/owner/repo/releases/assets/2"}
        ]
    }"#
    .to_vec()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn empty_repository_is_rejected_without_network_access() {
    let forge = FakeForge::new(&[]);
    let (result, _) = run(&forge, &Config::default());

    let err = result.unwrap_err();
    assert!(err.to_string().contains("repository is required"));
    assert!(forge.requests.lock().unwrap().is_empty());
}

#[test]
fn pattern_narrows_downloads_to_matching_assets() {
    let dir = TempDir::new().unwrap();
    let forge = FakeForge::new(&[
        (LATEST, latest_release_json().as_slice()),
        (
            "https://api.github.com/repos/owner/repo/releases/assets/2",
            b"gzip" as &[u8],
        ),
    ]);

    let config = Config {
        pattern: "*.tar.gz".to_string(),
        directory: dir.path().to_path_buf(),
        ..Config::new("owner/repo")
    };
    let (result, output) = run(&forge, &config);

    result.unwrap();
    assert_eq!(fs::read(dir.path().join("b.tar.gz")).unwrap(), b"gzip");
    assert!(!dir.path().join("a.zip").exists());
    assert!(output.contains("Release: Release v1.0.0 (latest) from owner/repo"));
    assert!(output.contains("Found 1 matching assets to download to"));
    assert!(output.contains("Downloading b.tar.gz... done (4 bytes)"));
    assert!(output.contains("Successfully downloaded 1 assets to"));
}

#[test]
fn list_mode_zero_matches_succeeds_with_message() {
    let forge = FakeForge::new(&[(LATEST, latest_release_json().as_slice())]);

    let config = Config {
        list: true,
        pattern: "*.exe".to_string(),
        ..Config::new("owner/repo")
    };
    let (result, output) = run(&forge, &config);

    result.unwrap();
    assert!(output.contains("No assets found matching pattern '*.exe'"));
}

#[test]
fn download_mode_zero_matches_fails_naming_the_pattern() {
    let forge = FakeForge::new(&[(LATEST, latest_release_json().as_slice())]);

    let config = Config {
        pattern: "*.exe".to_string(),
        ..Config::new("owner/repo")
    };
    let (result, _) = run(&forge, &config);

    let err = result.unwrap_err();
    assert!(err
        .to_string()
        .contains("no assets found matching pattern '*.exe'"));
}

#[test]
fn list_mode_renders_numbered_assets_with_total() {
    let forge = FakeForge::new(&[(LATEST, latest_release_json().as_slice())]);

    let config = Config {
        list: true,
        ..Config::new("owner/repo")
    };
    let (result, output) = run(&forge, &config);

    result.unwrap();
    assert!(output.contains("Assets matching pattern '*':"));
    assert!(output.contains("1. a.zip"));
    assert!(output.contains("   Size: 3 bytes"));
    assert!(output.contains("   Content-Type: application/zip"));
    assert!(output.contains("2. b.tar.gz"));
    assert!(output.contains("Total: 2 assets"));
}

#[test]
fn releases_mode_lists_all_releases_first_page_only() {
    let forge = FakeForge::new(&[(
        "repos/owner/repo/releases",
        br#"[
            {"tag_name": "v1.1.0", "name": "Fancy name", "prerelease": true,
             "published_at": "2023-12-01T10:30:00Z"},
            {"tag_name": "v1.0.0", "name": "v1.0.0", "draft": true, "prerelease": true}
        ]"# as &[u8],
    )]);

    let config = Config {
        releases: true,
        ..Config::new("owner/repo")
    };
    let (result, output) = run(&forge, &config);

    result.unwrap();
    assert!(output.contains("Releases for owner/repo:"));
    assert!(output.contains("1. Fancy name (v1.1.0) [prerelease]"));
    assert!(output.contains("   Published: 2023-12-01"));
    assert!(output.contains("2. v1.0.0 [draft, prerelease]"));
    assert!(output.contains("Total: 2 releases"));
    assert_eq!(
        *forge.requests.lock().unwrap(),
        vec!["repos/owner/repo/releases".to_string()]
    );
}

#[test]
fn releases_mode_with_no_releases_succeeds() {
    let forge = FakeForge::new(&[("repos/owner/repo/releases", b"[]" as &[u8])]);

    let config = Config {
        releases: true,
        ..Config::new("owner/repo")
    };
    let (result, output) = run(&forge, &config);

    result.unwrap();
    assert!(output.contains("No releases found for owner/repo"));
}

#[test]
fn invalid_archive_format_is_rejected() {
    let forge = FakeForge::new(&[(LATEST, latest_release_json().as_slice())]);

    let config = Config {
        archive: Some("exe".to_string()),
        ..Config::new("owner/repo")
    };
    let (result, _) = run(&forge, &config);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("archive format must be"));
}

#[test]
fn archive_download_derives_filename_from_repo_and_ref() {
    let dir = TempDir::new().unwrap();
    let forge = FakeForge::new(&[
        (
            "repos/owner/repo/releases/tags/v2.0.0",
            br#"{"tag_name": "v2.0.0", "name": "v2.0.0"}"# as &[u8],
        ),
        ("repos/owner/repo/tarball/v2.0.0", b"tarball" as &[u8]),
    ]);

    let config = Config {
        archive: Some("tar.gz".to_string()),
        tag: Some("v2.0.0".to_string()),
        directory: dir.path().to_path_buf(),
        ..Config::new("owner/repo")
    };
    let (result, output) = run(&forge, &config);

    result.unwrap();
    let path = dir.path().join("owner-repo-v2.0.0.tar.gz");
    assert_eq!(fs::read(&path).unwrap(), b"tarball");
    assert!(output.contains("Downloaded archive:"));
}

#[test]
fn missing_release_error_carries_context() {
    let forge = FakeForge::new(&[]);

    let config = Config {
        tag: Some("v9.9.9".to_string()),
        ..Config::new("owner/repo")
    };
    let (result, _) = run(&forge, &config);

    let err = result.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("failed to get release"));
    assert!(message.contains("repos/owner/repo/releases/tags/v9.9.9"));
}

#[test]
fn target_directory_is_created_on_demand() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("downloads").join("nested");
    let forge = FakeForge::new(&[
        (LATEST, latest_release_json().as_slice()),
        (
            "https://api.github.com/repos/owner/repo/releases/assets/1",
            b"zip" as &[u8],
        ),
        (
            "https://api.github.com/repos/owner/repo/releases/assets/2",
            b"gzip" as &[u8],
        ),
    ]);

    let config = Config {
        directory: nested.clone(),
        ..Config::new("owner/repo")
    };
    let (result, _) = run(&forge, &config);

    result.unwrap();
    assert_eq!(fs::read(nested.join("a.zip")).unwrap(), b"zip");
    assert_eq!(fs::read(nested.join("b.tar.gz")).unwrap(), b"gzip");
}
