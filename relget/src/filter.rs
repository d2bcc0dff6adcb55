//! Glob-based asset filtering.
//!
//! Asset names are flat file names, so no path-separator special-casing
//! is needed: `*` matches any run of characters, `?` exactly one, and
//! `[...]` a character class.

use glob::Pattern;
use thiserror::Error;

use crate::github::Asset;

/// A malformed glob pattern (e.g. an unterminated character class `[`).
#[derive(Debug, Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The offending pattern text.
    pub pattern: String,
    source: glob::PatternError,
}

/// Filter assets whose names match the given glob pattern.
///
/// `*` and the empty string are a fast path meaning "match everything"
/// and return the input unchanged. Matching never reorders: the result
/// is a subsequence of the input. Zero matches yields an empty vec, not
/// an error.
///
/// # Example
///
/// ```
/// use relget::github::Asset;
/// use relget::filter_assets;
///
/// let assets = vec![
///     Asset { name: "a.zip".to_string(), ..Default::default() },
///     Asset { name: "b.tar.gz".to_string(), ..Default::default() },
/// ];
///
/// let matched = filter_assets(&assets, "*.tar.gz").unwrap();
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].name, "b.tar.gz");
/// ```
pub fn filter_assets(assets: &[Asset], pattern: &str) -> Result<Vec<Asset>, PatternError> {
    if pattern == "*" || pattern.is_empty() {
        return Ok(assets.to_vec());
    }

    let matcher = Pattern::new(pattern).map_err(|e| PatternError {
        pattern: pattern.to_string(),
        source: e,
    })?;

    Ok(assets
        .iter()
        .filter(|asset| matcher.matches(&asset.name))
        .cloned()
        .collect())
}
