//! relget CLI - download assets and source archives from GitHub releases.
//!
//! This binary parses arguments into a [`relget::Config`], builds the
//! production HTTP client, and dispatches to the library downloader. Any
//! error is printed as `Error: <message>` on stderr with a non-zero exit.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use relget::{Config, ConsoleOutput, DownloadError, Downloader, ReqwestClient};

const AFTER_HELP: &str = "\
Examples:
  relget owner/repo                       # Download all assets from latest release
  relget owner/repo v1.0.0                # Download all assets from v1.0.0
  relget -R owner/repo -p \"*.tar.gz\"      # Download only .tar.gz files
  relget --repo owner/repo --archive zip  # Download source code as zip
  relget --repo owner/repo --list         # List all assets without downloading
  relget --repo owner/repo --releases     # List all releases";

/// Download files from GitHub releases.
#[derive(Debug, Parser)]
#[command(name = "relget", version, about, after_help = AFTER_HELP)]
struct Cli {
    /// Repository in format owner/repo
    #[arg(value_name = "REPOSITORY")]
    repository: Option<String>,

    /// Release tag (optional, defaults to latest)
    #[arg(value_name = "TAG")]
    tag: Option<String>,

    /// Repository in format owner/repo
    #[arg(short = 'R', long = "repo", value_name = "OWNER/REPO")]
    repo_flag: Option<String>,

    /// Release tag (defaults to latest)
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    tag_flag: Option<String>,

    /// Glob pattern to match asset names
    #[arg(short = 'p', long, default_value = "*", value_name = "PATTERN")]
    pattern: String,

    /// Directory to download files to
    #[arg(short = 'd', long, default_value = ".", value_name = "DIR")]
    dir: PathBuf,

    /// Download source archive (zip or tar.gz)
    #[arg(long, value_name = "FORMAT")]
    archive: Option<String>,

    /// List release assets without downloading
    #[arg(short = 'l', long)]
    list: bool,

    /// List all releases
    #[arg(short = 'r', long)]
    releases: bool,
}

impl Cli {
    /// Merge flags and positional arguments into the library
    /// configuration. Flags win over positionals; positionals fill in
    /// when the corresponding flag is unset.
    fn into_config(self) -> Config {
        Config {
            repository: self.repo_flag.or(self.repository).unwrap_or_default(),
            tag: self.tag_flag.or(self.tag),
            pattern: self.pattern,
            directory: self.dir,
            archive: self.archive,
            list: self.list,
            releases: self.releases,
        }
    }
}

fn run(config: &Config) -> Result<(), DownloadError> {
    let http_client = ReqwestClient::new().map_err(|e| DownloadError::Api {
        context: "failed to create GitHub client".to_string(),
        source: e,
    })?;

    let downloader = Downloader::new(http_client);
    downloader.run(config, &mut ConsoleOutput::new())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
