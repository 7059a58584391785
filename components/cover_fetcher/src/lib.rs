// components/cover_fetcher/src/lib.rs
mod command;
mod naming;
mod parse;
mod sacad;
mod types;

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use command::{CoverCommand, DEFAULT_SIZE, DEFAULT_TOOL};
pub use naming::{album_basename, cover_filename};
pub use parse::{entries, parse_line};
pub use sacad::{CoverTool, Sacad};
#[cfg(any(test, feature = "stub"))]
pub use sacad::stub;
pub use types::{AlbumEntry, FetchError, FetchSummary, ParseError, ToolStatus};

/// How commands are built: which program, what size, and where covers land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub program: String,
    pub size: u32,
    /// `None` leaves covers in the working directory
    pub output_dir: Option<PathBuf>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOL.to_string(),
            size: DEFAULT_SIZE,
            output_dir: None,
        }
    }
}

pub struct CoverFetcher {
    settings: FetchSettings,
    tool: Arc<dyn CoverTool + Send + Sync>,
}

impl CoverFetcher {
    /// Create a CoverFetcher that runs the real cover tool
    pub fn new(settings: FetchSettings) -> Self {
        Self::new_with_tool(settings, Arc::new(Sacad))
    }

    /// Create a CoverFetcher with a specific tool implementation
    pub fn new_with_tool(settings: FetchSettings, tool: Arc<dyn CoverTool + Send + Sync>) -> Self {
        Self { settings, tool }
    }

    /// Verify the tool is installed and create the output directory.
    /// Not needed when commands are only printed.
    pub async fn prepare(&self) -> Result<(), FetchError> {
        self.tool.check_available(&self.settings.program).await?;

        if let Some(dir) = &self.settings.output_dir {
            tokio::fs::create_dir_all(dir).await?;
        }

        Ok(())
    }

    pub fn command_for(&self, entry: &AlbumEntry) -> CoverCommand {
        CoverCommand::new(
            self.settings.program.as_str(),
            entry,
            self.settings.size,
            self.settings.output_dir.as_deref(),
        )
    }

    /// Run one command and wait for it. A failing tool is logged and reported
    /// through the returned status; only a spawn failure is an error.
    pub async fn fetch(&self, command: &CoverCommand) -> Result<ToolStatus, FetchError> {
        tracing::info!("Fetching cover for {} - {}", command.artist, command.album);

        let status = self.tool.run(command).await?;

        if let ToolStatus::Failed { code } = status {
            match code {
                Some(code) => tracing::warn!("`{}` exited with status {}", command, code),
                None => tracing::warn!("`{}` was terminated by a signal", command),
            }
        }

        Ok(status)
    }
}

/// Read the whole albums file into memory
pub async fn read_albums(path: impl AsRef<Path>) -> Result<String, FetchError> {
    let path = path.as_ref();
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FetchError::ReadAlbums {
            path: path.to_path_buf(),
            source,
        })
}
