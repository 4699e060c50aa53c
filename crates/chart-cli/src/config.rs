// File: crates/chart-cli/src/config.rs
// Summary: Run configuration: TOML file with defaults, output format and path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cyclist_chart_core::{theme, ChartOptions, Variant};
use cyclist_loader::CYCLIST_DATA_URL;
use serde::{Deserialize, Serialize};

/// Output surface written by the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// Run configuration, optionally loaded from a TOML file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Dataset URL.
    pub url: String,
    /// Output path; defaults to `cyclist-chart.<format>` in the working directory.
    pub output: Option<PathBuf>,
    pub variant: Variant,
    pub format: OutputFormat,
    /// Theme preset name (`light` or `dark`).
    pub theme: String,
    /// Wrap threshold for doping text in tooltips, in characters.
    pub tooltip_wrap: usize,
    /// Optional connect timeout in seconds; unset keeps the transport default.
    pub connect_timeout_secs: Option<u64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            url: CYCLIST_DATA_URL.to_string(),
            output: None,
            variant: Variant::Annotated,
            format: OutputFormat::Svg,
            theme: "light".to_string(),
            tooltip_wrap: cyclist_chart_core::tooltip::DEFAULT_WRAP,
            connect_timeout_secs: None,
        }
    }
}

impl ChartConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("cyclist-chart.{}", self.format.extension())))
    }

    pub fn chart_options(&self) -> ChartOptions {
        let mut opts = ChartOptions::for_variant(self.variant).with_theme(theme::find(&self.theme));
        opts.tooltip_wrap = self.tooltip_wrap;
        opts
    }
}

/// Load configuration from `path`.
pub fn load(path: &Path) -> Result<ChartConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ChartConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Load `path` when given, otherwise use built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ChartConfig> {
    match path {
        Some(p) => load(p),
        None => Ok(ChartConfig::default()),
    }
}
