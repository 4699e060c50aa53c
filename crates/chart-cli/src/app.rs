// File: crates/chart-cli/src/app.rs
// Summary: Composition root: loader -> scene -> render target, with injected collaborators.

use cyclist_chart_core::{build_scene, ChartOptions};
use cyclist_loader::{fetch_records, HttpClient, LoadError};

use crate::target::RenderTarget;

/// Why a run produced no chart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("rendering failed: {0:#}")]
    Render(anyhow::Error),
}

/// Receives each failed run's error, exactly once.
pub trait DiagnosticSink {
    fn report(&mut self, error: &AppError);
}

/// Default sink: logs through `tracing`.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn report(&mut self, error: &AppError) {
        match error {
            AppError::Load(LoadError::Server { status }) => {
                tracing::error!(status = *status, "the server returned an error; no chart drawn")
            }
            AppError::Load(LoadError::Connection(reason)) => {
                tracing::error!(%reason, "there was a connection error; no chart drawn")
            }
            other => tracing::error!("fatal: {other}"),
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub markers: usize,
}

pub struct App<C, T, D> {
    pub client: C,
    pub target: T,
    pub diagnostics: D,
    pub url: String,
    pub options: ChartOptions,
}

impl<C, T, D> App<C, T, D>
where
    C: HttpClient,
    T: RenderTarget,
    D: DiagnosticSink,
{
    pub fn new(client: C, target: T, diagnostics: D, url: impl Into<String>, options: ChartOptions) -> Self {
        Self { client, target, diagnostics, url: url.into(), options }
    }

    /// Fetch once, then build and draw the chart. Any failure is reported to the sink and returned.
    pub async fn run(&mut self) -> Result<Outcome, AppError> {
        let result = self.load_and_draw().await;
        if let Err(e) = &result {
            self.diagnostics.report(e);
        }
        result
    }

    async fn load_and_draw(&mut self) -> Result<Outcome, AppError> {
        let records = fetch_records(&self.client, &self.url).await?;
        let scene = build_scene(&records, &self.options);
        self.target.draw(&scene).map_err(AppError::Render)?;
        tracing::info!(markers = scene.marker_count(), variant = %self.options.variant, "chart drawn");
        Ok(Outcome { markers: scene.marker_count() })
    }
}
