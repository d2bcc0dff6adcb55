//! Per-invocation configuration.
//!
//! A [`Config`] is constructed once from external input (CLI flags and
//! positional arguments) and never mutated afterwards. Validation that
//! depends on the selected operation happens at execution time in the
//! downloader, not here: an empty repository or a bad archive format is
//! only an error once a command actually needs it.

use std::path::PathBuf;

/// Configuration for a single download invocation.
///
/// # Example
///
/// ```
/// use relget::Config;
///
/// let config = Config::new("owner/repo");
/// assert_eq!(config.repository, "owner/repo");
/// assert_eq!(config.pattern, "*");
/// assert_eq!(config.directory, std::path::PathBuf::from("."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository in `owner/name` format.
    pub repository: String,

    /// Release tag. `None` selects the latest release.
    pub tag: Option<String>,

    /// Glob pattern matched against asset file names.
    pub pattern: String,

    /// Directory downloaded files are written to.
    pub directory: PathBuf,

    /// Source archive format (`"zip"` or `"tar.gz"`), if an archive
    /// download was requested instead of release assets.
    pub archive: Option<String>,

    /// List matching assets without downloading.
    pub list: bool,

    /// List all releases of the repository.
    pub releases: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: String::new(),
            tag: None,
            pattern: "*".to_string(),
            directory: PathBuf::from("."),
            archive: None,
            list: false,
            releases: false,
        }
    }
}

impl Config {
    /// Create a configuration for the given repository with all other
    /// fields at their defaults.
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            ..Self::default()
        }
    }
}
