// File: crates/chart-cli/src/target.rs
// Summary: Render targets: where a built scene ends up.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cyclist_chart_core::chart::write_output;
use cyclist_chart_core::{rasterize, scene_to_svg, RenderOptions, Scene};

use crate::config::OutputFormat;

/// Consumes a scene. Called at most once per run.
pub trait RenderTarget {
    fn draw(&mut self, scene: &Scene) -> Result<()>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        (**self).draw(scene)
    }
}

/// Writes the SVG document to a file.
pub struct SvgFileTarget {
    pub path: PathBuf,
}

impl RenderTarget for SvgFileTarget {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        write_output(&self.path, scene_to_svg(scene).as_bytes())
            .with_context(|| format!("writing SVG to {}", self.path.display()))
    }
}

/// Rasterizes with Skia and writes a PNG file.
pub struct PngFileTarget {
    pub path: PathBuf,
    pub render: RenderOptions,
}

impl RenderTarget for PngFileTarget {
    fn draw(&mut self, scene: &Scene) -> Result<()> {
        let bytes = rasterize(scene, &self.render).context("rasterizing chart")?;
        write_output(&self.path, &bytes).with_context(|| format!("writing PNG to {}", self.path.display()))
    }
}

/// File target for the requested format.
pub fn file_target(format: OutputFormat, path: PathBuf) -> Box<dyn RenderTarget> {
    match format {
        OutputFormat::Svg => Box::new(SvgFileTarget { path }),
        OutputFormat::Png => Box::new(PngFileTarget { path, render: RenderOptions::default() }),
    }
}
