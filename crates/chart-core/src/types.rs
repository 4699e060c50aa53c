// File: crates/chart-core/src/types.rs
// Summary: Shared layout types (canvas size, margin box) and per-variant presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 20, 20, 30)
    }
}

/// Canvas size plus the margin box around the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub insets: Insets,
}

impl Layout {
    pub const fn new(canvas_width: u32, canvas_height: u32, insets: Insets) -> Self {
        Self { canvas_width, canvas_height, insets }
    }

    /// Drawable width: canvas width minus left and right margins (saturating).
    pub const fn width(&self) -> u32 { self.canvas_width.saturating_sub(self.insets.hsum()) }

    /// Drawable height: canvas height minus top and bottom margins (saturating).
    pub const fn height(&self) -> u32 { self.canvas_height.saturating_sub(self.insets.vsum()) }
}

impl Default for Layout {
    fn default() -> Self {
        Variant::Basic.layout()
    }
}

/// The three chart presets, from the bare scatter plot to the fully annotated one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Axes and plain markers.
    #[default]
    Basic,
    /// Coloured markers with per-point labels.
    Labeled,
    /// Large canvas with labels, tooltips, legend and titles.
    Annotated,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Basic, Variant::Labeled, Variant::Annotated];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Labeled => "labeled",
            Variant::Annotated => "annotated",
        }
    }

    pub const fn layout(self) -> Layout {
        match self {
            Variant::Basic | Variant::Labeled => Layout::new(915, 500, Insets::new(70, 20, 20, 30)),
            Variant::Annotated => Layout::new(900, 900, Insets::new(200, 200, 200, 70)),
        }
    }

    pub const fn marker_radius(self) -> f32 {
        match self {
            Variant::Basic | Variant::Labeled => 4.0,
            Variant::Annotated => 5.0,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart variant '{0}' (expected basic, labeled or annotated)")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
