// bases/fetch_covers/src/main.rs
mod app;
mod config;
mod output;

use app::App;
use clap::Parser;
use color_eyre::Result;
use config::{CliArgs, Config};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch_covers=warn,cover_fetcher=warn".into()),
        )
        .init();

    let args = CliArgs::parse();
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(usage) => {
            eprintln!("{}", usage);
            std::process::exit(usage.exit_code());
        }
    };

    let app = App::new(config);

    match app.run().await {
        Ok(summary) => {
            app.print_summary(&summary);
            let code = app.exit_code(&summary);
            if code != 0 {
                eprintln!("{} cover download(s) failed", summary.failed);
                std::process::exit(code);
            }
        }
        Err(error) => {
            app.print_error(&error);
            std::process::exit(1);
        }
    }

    Ok(())
}
