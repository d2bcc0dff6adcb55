//! Pure text rendering of release and asset listings.
//!
//! All functions here take data and produce display lines; nothing is
//! printed and no I/O happens. The downloader feeds the lines to its
//! output sink.

use crate::filter::{filter_assets, PatternError};
use crate::github::{Asset, Release};

/// Render the asset listing for a release under a glob pattern.
///
/// Zero matches is informational success, not an error: listing mode
/// answers "show me what's there". Matching assets are numbered from 1
/// and a trailing total closes the listing.
pub fn render_assets(assets: &[Asset], pattern: &str) -> Result<Vec<String>, PatternError> {
    let matching = filter_assets(assets, pattern)?;

    if matching.is_empty() {
        return Ok(vec![format!(
            "No assets found matching pattern '{}'",
            pattern
        )]);
    }

    let mut lines = Vec::new();
    lines.push(String::new());
    lines.push(format!("Assets matching pattern '{}':", pattern));

    for (i, asset) in matching.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, asset.name));
        lines.push(format!("   Size: {} bytes", asset.size));
        lines.push(format!("   Content-Type: {}", asset.content_type));
        if i < matching.len() - 1 {
            lines.push(String::new());
        }
    }

    lines.push(String::new());
    lines.push(format!("Total: {} assets", matching.len()));
    Ok(lines)
}

/// Render the release listing for a repository.
///
/// Each release gets a 1-based numbered line with its display name, the
/// tag in parentheses only when it differs from the name, and status
/// annotations in the fixed order draft before prerelease.
pub fn render_releases(repo: &str, releases: &[Release]) -> Vec<String> {
    if releases.is_empty() {
        return vec![format!("No releases found for {}", repo)];
    }

    let mut lines = Vec::new();
    lines.push(format!("Releases for {}:", repo));
    lines.push(String::new());

    for (i, release) in releases.iter().enumerate() {
        lines.push(release_line(i + 1, release));

        if !release.published_at.is_empty() {
            lines.push(format!("   Published: {}", format_date(&release.published_at)));
        }

        lines.push(format!("   Assets: {}", release.assets.len()));

        if i < releases.len() - 1 {
            lines.push(String::new());
        }
    }

    lines.push(String::new());
    lines.push(format!("Total: {} releases", releases.len()));
    lines
}

/// Render the numbered headline for one release.
fn release_line(number: usize, release: &Release) -> String {
    let mut line = format!("{}. {}", number, release.name);

    if !release.tag_name.is_empty() && release.tag_name != release.name {
        line.push_str(&format!(" ({})", release.tag_name));
    }

    let mut status = Vec::new();
    if release.draft {
        status.push("draft");
    }
    if release.prerelease {
        status.push("prerelease");
    }
    if !status.is_empty() {
        line.push_str(&format!(" [{}]", status.join(", ")));
    }

    line
}

/// Reduce an ISO 8601 timestamp to its `YYYY-MM-DD` date part.
///
/// A defensive substring, not a validated date: inputs shorter than ten
/// characters pass through unchanged.
fn format_date(timestamp: &str) -> &str {
    if timestamp.len() >= 10 {
        &timestamp[..10]
    } else {
        timestamp
    }
}
