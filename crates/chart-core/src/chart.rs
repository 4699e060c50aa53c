// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and the output pipelines: SVG documents and headless PNG via Skia CPU raster surfaces.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::record::Record;
use crate::scene::{build_scene, ChartOptions, Scene, Shape};
use crate::svg::scene_to_svg;
use crate::text::TextShaper;

/// Raster output switches.
pub struct RenderOptions {
    /// Draw text runs (labels, ticks, titles). Off in tests to avoid font variance.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true }
    }
}

pub struct Chart {
    pub records: Vec<Record>,
    pub options: ChartOptions,
}

impl Chart {
    pub fn new(records: Vec<Record>, options: ChartOptions) -> Self {
        Self { records, options }
    }

    /// Geometry for the current records and options.
    pub fn scene(&self) -> Scene {
        build_scene(&self.records, &self.options)
    }

    pub fn to_svg_string(&self) -> String {
        scene_to_svg(&self.scene())
    }

    /// Write the chart as an SVG document at `output_svg_path`.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<Path>) -> Result<()> {
        write_output(output_svg_path.as_ref(), self.to_svg_string().as_bytes())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        rasterize(&self.scene(), opts)
    }
}

/// Create parent directories, then write `bytes` to `path`.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    tracing::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Draw a scene onto a CPU raster surface and encode it as PNG.
pub fn rasterize(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let w = scene.canvas_width.round().max(1.0) as i32;
    let h = scene.canvas_height.round().max(1.0) as i32;
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();

    // Background
    canvas.clear(scene.theme.background);

    canvas.save();
    canvas.translate((scene.origin.x, scene.origin.y));
    let shaper = opts.draw_labels.then(TextShaper::new);
    for cmd in &scene.commands {
        draw_shape(canvas, &cmd.shape, shaper.as_ref());
    }
    canvas.restore();

    // Snapshot and encode PNG
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn draw_shape(canvas: &skia::Canvas, shape: &Shape, shaper: Option<&TextShaper>) {
    match shape {
        Shape::Line { from, to, color, width } => {
            let mut paint = skia::Paint::default();
            paint.set_color(*color);
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(*width);
            canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
        }
        Shape::Circle { center, radius, fill } => {
            let mut paint = skia::Paint::default();
            paint.set_color(*fill);
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            canvas.draw_circle((center.x, center.y), *radius, &paint);
        }
        Shape::Rect { rect, fill } => {
            let mut paint = skia::Paint::default();
            paint.set_color(*fill);
            paint.set_style(skia::paint::Style::Fill);
            canvas.draw_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), &paint);
        }
        Shape::Text { at, text, size, color, anchor, rotate } => {
            let Some(shaper) = shaper else { return };
            if *rotate != 0.0 {
                canvas.save();
                canvas.rotate(*rotate, Some(skia::Point::new(at.x, at.y)));
                shaper.draw_anchored(canvas, text, at.x, at.y, *size, *color, *anchor);
                canvas.restore();
            } else {
                shaper.draw_anchored(canvas, text, at.x, at.y, *size, *color, *anchor);
            }
        }
    }
}
