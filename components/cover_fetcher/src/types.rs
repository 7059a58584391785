// components/cover_fetcher/src/types.rs
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// One "artist album" pair read from the albums file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumEntry {
    pub artist: String,
    pub album: String,
}

impl AlbumEntry {
    pub fn new(artist: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            album: album.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: could not split {text:?}: {reason}")]
    Tokenize {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("line {line}: expected an artist and an album, found {found} field(s) in {text:?}")]
    MissingField {
        line: usize,
        text: String,
        found: usize,
    },
}

impl ParseError {
    /// 1-based line number the error was found on
    pub fn line(&self) -> usize {
        match self {
            ParseError::Tokenize { line, .. } | ParseError::MissingField { line, .. } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Cover tool not found on PATH: {0}")]
    ToolNotFound(String),

    #[error("failed to read albums file {path}")]
    ReadAlbums {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Observed outcome of a single tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    Succeeded,
    /// `code` is `None` when the tool was killed by a signal
    Failed { code: Option<i32> },
}

impl ToolStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolStatus::Succeeded)
    }
}

impl From<ExitStatus> for ToolStatus {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            ToolStatus::Succeeded
        } else {
            ToolStatus::Failed {
                code: status.code(),
            }
        }
    }
}

/// Tally of a whole run. Tool failures are counted, never acted on here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub executed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl FetchSummary {
    pub fn record(&mut self, status: ToolStatus) {
        self.executed += 1;
        if status.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_outcomes() {
        let mut summary = FetchSummary::default();
        summary.record(ToolStatus::Succeeded);
        summary.record(ToolStatus::Failed { code: Some(1) });
        summary.record(ToolStatus::Failed { code: None });
        summary.record_skipped();

        assert_eq!(
            summary,
            FetchSummary {
                executed: 3,
                succeeded: 1,
                failed: 2,
                skipped: 1,
            }
        );
        assert!(summary.has_failures());
    }

    #[test]
    fn empty_summary_has_no_failures() {
        assert!(!FetchSummary::default().has_failures());
    }

    #[test]
    fn parse_error_reports_line() {
        let error = ParseError::MissingField {
            line: 7,
            text: "\"Beck\"".to_string(),
            found: 1,
        };
        assert_eq!(error.line(), 7);
        assert!(error.to_string().starts_with("line 7:"));
    }
}
