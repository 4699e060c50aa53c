// File: crates/chart-cli/src/cli.rs
// Summary: Command-line surface. Flags override values from the config file.

use std::path::PathBuf;

use clap::Parser;
use cyclist_chart_core::Variant;

use crate::config::{ChartConfig, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "cyclist-chart", version, about = "Fetch the cyclist doping dataset and draw it as a scatter plot")]
pub struct Cli {
    /// TOML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dataset URL.
    #[arg(long)]
    pub url: Option<String>,

    /// Output file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Chart variant: basic, labeled or annotated.
    #[arg(long)]
    pub variant: Option<Variant>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Theme preset: light or dark.
    #[arg(long)]
    pub theme: Option<String>,

    /// Debug-level logging for the chart crates.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn apply_to(&self, cfg: &mut ChartConfig) {
        if let Some(url) = &self.url {
            cfg.url = url.clone();
        }
        if let Some(output) = &self.output {
            cfg.output = Some(output.clone());
        }
        if let Some(variant) = self.variant {
            cfg.variant = variant;
        }
        if let Some(format) = self.format {
            cfg.format = format;
        }
        if let Some(theme) = &self.theme {
            cfg.theme = theme.clone();
        }
    }
}
