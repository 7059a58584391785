// bases/fetch_covers/src/app.rs
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use cover_fetcher::{CoverFetcher, CoverTool, FetchSummary, Sacad};
use std::sync::Arc;

use crate::config::{Config, FAILED_DOWNLOADS_EXIT_CODE};
use crate::output::OutputHandler;

pub struct App {
    config: Config,
    tool: Arc<dyn CoverTool + Send + Sync>,
    output: OutputHandler,
}

impl App {
    pub fn new(config: Config) -> Self {
        let output = OutputHandler::new(config.verbose);
        Self::with_parts(config, Arc::new(Sacad), output)
    }

    pub fn with_parts(
        config: Config,
        tool: Arc<dyn CoverTool + Send + Sync>,
        output: OutputHandler,
    ) -> Self {
        Self {
            config,
            tool,
            output,
        }
    }

    pub async fn run(&self) -> Result<FetchSummary> {
        let albums = cover_fetcher::read_albums(&self.config.albums_file).await?;

        let fetcher = CoverFetcher::new_with_tool(self.config.fetch.clone(), self.tool.clone());
        if !self.config.dry_run {
            fetcher.prepare().await?;
        }

        let mut summary = FetchSummary::default();

        for parsed in cover_fetcher::entries(&albums) {
            let (line, entry) = match parsed {
                Ok(parsed) => parsed,
                Err(error) if self.config.skip_malformed => {
                    self.output.print_skipped(&error);
                    summary.record_skipped();
                    continue;
                }
                Err(error) => {
                    return Err(error).wrap_err_with(|| {
                        format!("stopped reading {}", self.config.albums_file.display())
                    })
                }
            };
            tracing::debug!("line {}: {:?}", line, entry);

            let command = fetcher.command_for(&entry);
            self.output
                .print_command(&command)
                .wrap_err("failed to write command")?;

            if self.config.dry_run {
                continue;
            }
            summary.record(fetcher.fetch(&command).await?);
        }

        Ok(summary)
    }

    /// Process exit status for a completed run. Failed downloads only count
    /// when `--fail-on-error` was given.
    pub fn exit_code(&self, summary: &FetchSummary) -> i32 {
        if self.config.fail_on_error && summary.has_failures() {
            FAILED_DOWNLOADS_EXIT_CODE
        } else {
            0
        }
    }

    pub fn print_summary(&self, summary: &FetchSummary) {
        self.output.print_summary(summary);
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
