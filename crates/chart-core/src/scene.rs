// File: crates/chart-core/src/scene.rs
// Summary: Pure data-to-shape mapping: records + options -> positioned draw commands.
// Notes:
// - Coordinates in `DrawCommand`s are plot-local; `Scene::origin` is the margin offset
//   that every render step applies before drawing.
// - Nothing in here touches a surface. SVG and raster output live in `svg.rs` / `chart.rs`.

use skia_safe as skia;

use crate::axis::{Axis, Orientation, DEFAULT_GAP_OFFSETS, TICK_SIZE};
use crate::geometry::{Point, Rect};
use crate::legend;
use crate::record::Record;
use crate::scale::{extent, rank_scale, seconds_scale, LinearScale};
use crate::text::TextAnchor;
use crate::theme::Theme;
use crate::tooltip::{TooltipContent, DEFAULT_WRAP};
use crate::types::{Layout, Variant};

pub const CHART_TITLE: &str = "Doping in Professional Bicycle Racing";
pub const X_TITLE: &str = "Minutes Behind Fastest Time";
pub const Y_TITLE: &str = "Ranking";

const TICK_FONT: f32 = 11.0;
const LABEL_FONT: f32 = 10.0;
const AXIS_TITLE_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 24.0;
/// Extra pointer slack around a marker when hit testing.
const HIT_SLACK: f32 = 1.5;

/// Feature switches and geometry for one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub variant: Variant,
    pub layout: Layout,
    pub marker_radius: f32,
    /// Fill markers by doping status instead of the neutral marker colour.
    pub color_by_status: bool,
    pub point_labels: bool,
    pub label_offset: (f32, f32),
    pub tooltips: bool,
    pub tooltip_wrap: usize,
    pub legend: bool,
    /// Horizontal tick offsets from the fastest time, in seconds.
    pub gap_offsets: Vec<f64>,
    pub title: Option<String>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub theme: Theme,
}

impl ChartOptions {
    pub fn for_variant(variant: Variant) -> Self {
        let annotated = variant == Variant::Annotated;
        Self {
            variant,
            layout: variant.layout(),
            marker_radius: variant.marker_radius(),
            color_by_status: variant != Variant::Basic,
            point_labels: variant != Variant::Basic,
            label_offset: (8.0, 4.0),
            tooltips: annotated,
            tooltip_wrap: DEFAULT_WRAP,
            legend: annotated,
            gap_offsets: DEFAULT_GAP_OFFSETS.to_vec(),
            title: annotated.then(|| CHART_TITLE.to_string()),
            x_title: annotated.then(|| X_TITLE.to_string()),
            y_title: annotated.then(|| Y_TITLE.to_string()),
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Marker fill for a record under these options.
    pub fn marker_color(&self, record: &Record) -> skia::Color {
        if self.color_by_status { self.theme.status_color(record.is_flagged()) } else { self.theme.marker }
    }
}

impl Default for ChartOptions {
    fn default() -> Self { Self::for_variant(Variant::Basic) }
}

/// What a command belongs to; SVG output uses it as the element class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    XAxis,
    YAxis,
    Marker,
    Label,
    Legend,
    Title,
}

impl Layer {
    pub const fn class(self) -> &'static str {
        match self {
            Layer::XAxis => "x axis",
            Layer::YAxis => "y axis",
            Layer::Marker => "dot",
            Layer::Label => "label",
            Layer::Legend => "legend",
            Layer::Title => "title",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point, color: skia::Color, width: f32 },
    Circle { center: Point, radius: f32, fill: skia::Color },
    Rect { rect: Rect, fill: skia::Color },
    /// `rotate` is in degrees around `at`.
    Text { at: Point, text: String, size: f32, color: skia::Color, anchor: TextAnchor, rotate: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    pub layer: Layer,
    pub shape: Shape,
    /// Record index for marker circles.
    pub marker: Option<usize>,
}

impl DrawCommand {
    fn new(layer: Layer, shape: Shape) -> Self { Self { layer, shape, marker: None } }
}

/// One plotted record.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    /// Plot-local centre.
    pub center: Point,
    pub radius: f32,
    pub fill: skia::Color,
    pub flagged: bool,
}

/// Fully positioned chart, ready for a render step.
#[derive(Clone, Debug)]
pub struct Scene {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Top-left of the plot area in canvas space.
    pub origin: Point,
    pub width: f32,
    pub height: f32,
    pub theme: Theme,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub markers: Vec<Marker>,
    pub commands: Vec<DrawCommand>,
    /// Per-marker tooltip content; empty when tooltips are off.
    pub tooltips: Vec<TooltipContent>,
}

impl Scene {
    pub fn marker_count(&self) -> usize { self.markers.len() }

    /// Canvas-space point to plot-local space.
    pub fn to_plot(&self, p: Point) -> Point { p.offset(-self.origin.x, -self.origin.y) }

    /// Closest marker under a canvas-space pointer.
    pub fn marker_at(&self, pointer: Point) -> Option<usize> {
        let p = self.to_plot(pointer);
        self.markers
            .iter()
            .map(|m| (m, m.center.distance_sq(p)))
            .filter(|(m, d)| *d <= (m.radius + HIT_SLACK).powi(2))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(m, _)| m.index)
    }

    pub fn tooltip(&self, marker: usize) -> Option<&TooltipContent> { self.tooltips.get(marker) }

    pub fn commands_in(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.layer == layer)
    }
}

/// Map records onto scales, axes, markers and annotations.
pub fn build_scene(records: &[Record], opts: &ChartOptions) -> Scene {
    let width = opts.layout.width() as f32;
    let height = opts.layout.height() as f32;
    let theme = opts.theme;

    let (min_s, max_s) = extent(records.iter().map(|r| r.seconds)).unwrap_or((0.0, 0.0));
    let x_scale = seconds_scale(min_s, max_s, width);
    let y_scale = rank_scale(records.len(), height);

    let mut x_axis = Axis::seconds(&x_scale, min_s, &opts.gap_offsets);
    if let Some(t) = &opts.x_title { x_axis = x_axis.with_title(t.clone()); }
    let mut y_axis = Axis::ranks(&y_scale, records.len());
    if let Some(t) = &opts.y_title { y_axis = y_axis.with_title(t.clone()); }

    let mut commands = Vec::new();
    push_axis(&mut commands, &x_axis, width, height, &theme);
    push_axis(&mut commands, &y_axis, width, height, &theme);

    let markers: Vec<Marker> = records
        .iter()
        .enumerate()
        .map(|(index, r)| Marker {
            index,
            center: Point::new(x_scale.to_px(r.seconds), y_scale.to_px(index as f64)),
            radius: opts.marker_radius,
            fill: opts.marker_color(r),
            flagged: r.is_flagged(),
        })
        .collect();

    for m in &markers {
        commands.push(DrawCommand {
            layer: Layer::Marker,
            shape: Shape::Circle { center: m.center, radius: m.radius, fill: m.fill },
            marker: Some(m.index),
        });
    }

    if opts.point_labels {
        let (dx, dy) = opts.label_offset;
        for (m, r) in markers.iter().zip(records) {
            commands.push(DrawCommand::new(Layer::Label, Shape::Text {
                at: m.center.offset(dx, dy),
                text: r.label(),
                size: LABEL_FONT,
                color: theme.point_label,
                anchor: TextAnchor::Start,
                rotate: 0.0,
            }));
        }
    }

    if opts.legend {
        for e in legend::entries(width, &theme) {
            commands.push(DrawCommand::new(Layer::Legend, Shape::Rect { rect: e.swatch, fill: e.color }));
            commands.push(DrawCommand::new(Layer::Legend, Shape::Text {
                at: Point::new(e.label_x, e.label_y),
                text: e.label.to_string(),
                size: TICK_FONT,
                color: theme.axis_label,
                anchor: TextAnchor::End,
                rotate: 0.0,
            }));
        }
    }

    if let Some(title) = &opts.title {
        let top = opts.layout.insets.top as f32;
        commands.push(DrawCommand::new(Layer::Title, Shape::Text {
            at: Point::new(width * 0.5, -top * 0.5),
            text: title.clone(),
            size: TITLE_FONT,
            color: theme.title,
            anchor: TextAnchor::Middle,
            rotate: 0.0,
        }));
    }

    let tooltips = if opts.tooltips {
        records.iter().map(|r| TooltipContent::for_record(r, opts.tooltip_wrap)).collect()
    } else {
        Vec::new()
    };

    tracing::debug!(
        records = records.len(),
        commands = commands.len(),
        min_seconds = min_s,
        max_seconds = max_s,
        "built scene"
    );

    Scene {
        canvas_width: opts.layout.canvas_width as f32,
        canvas_height: opts.layout.canvas_height as f32,
        origin: Point::new(opts.layout.insets.left as f32, opts.layout.insets.top as f32),
        width,
        height,
        theme,
        x_scale,
        y_scale,
        x_axis,
        y_axis,
        markers,
        commands,
        tooltips,
    }
}

fn push_axis(out: &mut Vec<DrawCommand>, axis: &Axis, width: f32, height: f32, theme: &Theme) {
    let (layer, domain) = match axis.orientation {
        Orientation::Bottom => (Layer::XAxis, (Point::new(0.0, height), Point::new(axis.length, height))),
        Orientation::Left => (Layer::YAxis, (Point::new(0.0, 0.0), Point::new(0.0, axis.length))),
    };
    let line = |from: Point, to: Point, color| DrawCommand::new(layer, Shape::Line { from, to, color, width: 1.0 });
    let text = |at: Point, text: String, size, anchor, rotate| {
        DrawCommand::new(layer, Shape::Text { at, text, size, color: theme.axis_label, anchor, rotate })
    };

    out.push(line(domain.0, domain.1, theme.axis_line));
    for t in &axis.ticks {
        match axis.orientation {
            Orientation::Bottom => {
                out.push(line(Point::new(t.position, height), Point::new(t.position, height + TICK_SIZE), theme.tick));
                out.push(text(
                    Point::new(t.position, height + TICK_SIZE + TICK_FONT + 3.0),
                    t.label.clone(),
                    TICK_FONT,
                    TextAnchor::Middle,
                    0.0,
                ));
            }
            Orientation::Left => {
                out.push(line(Point::new(-TICK_SIZE, t.position), Point::new(0.0, t.position), theme.tick));
                out.push(text(
                    Point::new(-TICK_SIZE - 3.0, t.position + TICK_FONT * 0.35),
                    t.label.clone(),
                    TICK_FONT,
                    TextAnchor::End,
                    0.0,
                ));
            }
        }
    }
    if let Some(title) = &axis.title {
        let (at, rotate) = match axis.orientation {
            Orientation::Bottom => (Point::new(width * 0.5, height + 45.0), 0.0),
            Orientation::Left => (Point::new(-45.0, height * 0.5), -90.0),
        };
        out.push(text(at, title.clone(), AXIS_TITLE_FONT, TextAnchor::Middle, rotate));
    }
}
