// components/cover_fetcher/src/sacad.rs
use async_trait::async_trait;

use crate::command::CoverCommand;
use crate::types::{FetchError, ToolStatus};

#[async_trait]
pub trait CoverTool {
    /// Check that `program` can be found before any line is processed
    async fn check_available(&self, program: &str) -> Result<(), FetchError>;

    /// Run one command to completion and report how it exited
    async fn run(&self, command: &CoverCommand) -> Result<ToolStatus, FetchError>;
}

pub struct Sacad;

#[async_trait]
impl CoverTool for Sacad {
    async fn check_available(&self, program: &str) -> Result<(), FetchError> {
        which::which(program)
            .map(|_| ())
            .map_err(|_| FetchError::ToolNotFound(program.to_string()))
    }

    async fn run(&self, command: &CoverCommand) -> Result<ToolStatus, FetchError> {
        let status = command
            .to_process()
            .status()
            .await
            .map_err(|source| FetchError::Spawn {
                command: command.to_string(),
                source,
            })?;

        Ok(ToolStatus::from(status))
    }
}

#[cfg(any(test, feature = "stub"))]
pub mod stub {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every command instead of running it. Albums listed in
    /// `failing` report a non-zero exit. With a transcript attached, each
    /// run appends `ran <album>` to it.
    #[derive(Default)]
    pub struct RecordingTool {
        pub missing: bool,
        pub failing: Vec<String>,
        pub calls: Mutex<Vec<CoverCommand>>,
        pub transcript: Option<Arc<Mutex<Vec<u8>>>>,
    }

    impl RecordingTool {
        pub fn failing_on(albums: &[&str]) -> Self {
            Self {
                failing: albums.iter().map(|a| a.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn missing() -> Self {
            Self {
                missing: true,
                ..Self::default()
            }
        }

        pub fn with_transcript(mut self, transcript: Arc<Mutex<Vec<u8>>>) -> Self {
            self.transcript = Some(transcript);
            self
        }

        pub fn calls(&self) -> Vec<CoverCommand> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl CoverTool for RecordingTool {
        async fn check_available(&self, program: &str) -> Result<(), FetchError> {
            if self.missing {
                Err(FetchError::ToolNotFound(program.to_string()))
            } else {
                Ok(())
            }
        }

        async fn run(&self, command: &CoverCommand) -> Result<ToolStatus, FetchError> {
            self.calls.lock().push(command.clone());
            if let Some(transcript) = &self.transcript {
                transcript
                    .lock()
                    .extend_from_slice(format!("ran {}\n", command.album).as_bytes());
            }
            if self.failing.contains(&command.album) {
                Ok(ToolStatus::Failed { code: Some(1) })
            } else {
                Ok(ToolStatus::Succeeded)
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::types::AlbumEntry;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_missing_program_is_reported() {
        let result = Sacad
            .check_available("definitely-not-an-installed-cover-tool")
            .await;
        assert_matches!(result, Err(FetchError::ToolNotFound(name)) if name == "definitely-not-an-installed-cover-tool");
    }

    #[tokio::test]
    async fn test_exit_status_is_reported_not_raised() {
        let entry = AlbumEntry::new("Beck", "Odelay");
        let failing = CoverCommand::new("false", &entry, 600, None);
        let passing = CoverCommand::new("true", &entry, 600, None);

        assert_matches!(
            Sacad.run(&failing).await,
            Ok(ToolStatus::Failed { code: Some(1) })
        );
        assert_matches!(Sacad.run(&passing).await, Ok(ToolStatus::Succeeded));
    }

    #[tokio::test]
    async fn test_spawn_failure_names_the_command() {
        let entry = AlbumEntry::new("Beck", "Odelay");
        let command = CoverCommand::new("definitely-not-an-installed-cover-tool", &entry, 600, None);

        assert_matches!(
            Sacad.run(&command).await,
            Err(FetchError::Spawn { command, .. }) if command.starts_with("definitely-not-an-installed-cover-tool")
        );
    }
}
