// bases/fetch_covers/src/output.rs
use cover_fetcher::{CoverCommand, FetchSummary, ParseError};
use parking_lot::Mutex;
use std::io::{self, Write};

pub struct OutputHandler {
    verbose: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self::with_writer(verbose, Box::new(io::stdout()))
    }

    /// Send command lines somewhere other than stdout
    pub fn with_writer(verbose: bool, out: Box<dyn Write + Send>) -> Self {
        Self {
            verbose,
            out: Mutex::new(out),
        }
    }

    /// Only these lines go to `out`, one per album, in file order. Flushed so
    /// the line is visible before the tool starts writing.
    pub fn print_command(&self, command: &CoverCommand) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{}", command)?;
        out.flush()
    }

    pub fn print_skipped(&self, error: &ParseError) {
        tracing::warn!("Skipping malformed line {}", error.line());
        if self.verbose {
            eprintln!("Skipped: {}", error);
        }
    }

    pub fn print_summary(&self, summary: &FetchSummary) {
        if !self.verbose {
            return;
        }
        eprintln!(
            "Ran {} command(s): {} succeeded, {} failed, {} line(s) skipped",
            summary.executed, summary.succeeded, summary.failed, summary.skipped
        );
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
