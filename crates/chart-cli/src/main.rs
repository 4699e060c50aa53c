// File: crates/chart-cli/src/main.rs
// Summary: Binary entry: parse flags, load config, fetch the dataset once and write the chart.

mod app;
mod cli;
mod config;
mod logging;
mod target;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use cyclist_loader::CurlClient;

use crate::app::{App, AppError, TracingDiagnostics};
use crate::cli::Cli;

async fn run(cli: Cli) -> Result<()> {
    let mut cfg = config::load_or_default(cli.config.as_deref())?;
    cli.apply_to(&mut cfg);

    let mut client = CurlClient::new();
    if let Some(secs) = cfg.connect_timeout_secs {
        client = client.with_connect_timeout(Duration::from_secs(secs));
    }
    let target = target::file_target(cfg.format, cfg.output_path());
    let mut app = App::new(client, target, TracingDiagnostics, cfg.url.clone(), cfg.chart_options());
    app.run().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging_stderr(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Run failures were already reported by the diagnostic sink.
            if err.downcast_ref::<AppError>().is_none() {
                eprintln!("cyclist-chart: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
