// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the record model, scene building and rendering API.

pub mod axis;
pub mod chart;
pub mod geometry;
pub mod legend;
pub mod record;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::{format_gap, Axis};
pub use chart::{rasterize, Chart, RenderOptions};
pub use record::{records_from_json, DataError, Record};
pub use scale::LinearScale;
pub use scene::{build_scene, ChartOptions, DrawCommand, Layer, Marker, Scene, Shape};
pub use svg::scene_to_svg;
pub use text::{wrap_words, TextShaper};
pub use theme::Theme;
pub use tooltip::{TooltipContent, TooltipState};
pub use types::{Insets, Layout, Variant};
