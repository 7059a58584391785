// bases/fetch_covers/src/config.rs
use clap::Parser;
use cover_fetcher::{FetchSettings, DEFAULT_SIZE, DEFAULT_TOOL};
use std::path::PathBuf;
use thiserror::Error;

/// Exit status when no albums file is given (-1 as seen by the shell)
pub const USAGE_EXIT_CODE: i32 = 255;

/// Exit status for `--fail-on-error` when a download failed
pub const FAILED_DOWNLOADS_EXIT_CODE: i32 = 1;

/// Fetch album covers for every "artist" "album" line of a file
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Text file with one `"<artist>" "<album>"` pair per line
    pub albums_file: Option<PathBuf>,

    /// Cover size in pixels passed to the tool
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: u32,

    /// Directory to save covers in (defaults to the working directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Cover tool to invoke
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Print the commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Warn about malformed lines and continue instead of stopping
    #[arg(long)]
    pub skip_malformed: bool,

    /// Exit with an error if any tool invocation failed
    #[arg(long)]
    pub fail_on_error: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Usage: fetch-covers <albums-txt-file>")]
    MissingAlbumsFile,
}

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::MissingAlbumsFile => USAGE_EXIT_CODE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub albums_file: PathBuf,
    pub fetch: FetchSettings,
    pub dry_run: bool,
    pub skip_malformed: bool,
    pub fail_on_error: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let albums_file = args.albums_file.ok_or(ConfigError::MissingAlbumsFile)?;

        Ok(Self {
            albums_file,
            fetch: FetchSettings {
                program: args.tool,
                size: args.size,
                output_dir: args.output_dir,
            },
            dry_run: args.dry_run,
            skip_malformed: args.skip_malformed,
            fail_on_error: args.fail_on_error,
            verbose: args.verbose,
        })
    }
}
