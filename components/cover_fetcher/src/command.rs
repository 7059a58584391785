// components/cover_fetcher/src/command.rs
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::naming::cover_filename;
use crate::types::AlbumEntry;

pub const DEFAULT_TOOL: &str = "sacad";
pub const DEFAULT_SIZE: u32 = 600;

/// A single invocation of the cover tool: `<program> <artist> <album> <size> <output>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverCommand {
    pub program: String,
    pub artist: String,
    pub album: String,
    pub size: u32,
    pub output: PathBuf,
}

impl CoverCommand {
    pub fn new(
        program: impl Into<String>,
        entry: &AlbumEntry,
        size: u32,
        output_dir: Option<&Path>,
    ) -> Self {
        let filename = cover_filename(&entry.album);
        let output = match output_dir {
            Some(dir) => dir.join(filename),
            None => filename,
        };

        Self {
            program: program.into(),
            artist: entry.artist.clone(),
            album: entry.album.clone(),
            size,
            output,
        }
    }

    /// Process invocation with every field passed as its own argument.
    /// Nothing goes through a shell, so quotes in titles are harmless.
    pub fn to_process(&self) -> Command {
        let mut process = Command::new(&self.program);
        process
            .arg(&self.artist)
            .arg(&self.album)
            .arg(self.size.to_string())
            .arg(&self.output);
        process
    }
}

impl fmt::Display for CoverCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" \"{}\" {} {}",
            self.program,
            self.artist,
            self.album,
            self.size,
            self.output.display()
        )
    }
}
