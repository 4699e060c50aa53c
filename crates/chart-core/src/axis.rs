// File: crates/chart-core/src/axis.rs
// Summary: Axis model with tick placement and gap-to-leader label formatting.

use crate::scale::{LinearScale, Value};

/// Default horizontal tick offsets from the fastest time, in seconds.
pub const DEFAULT_GAP_OFFSETS: [f64; 3] = [60.0, 120.0, 180.0];
/// Vertical ticks mark rank 1 and then every `RANK_TICK_STEP`-th rank.
pub const RANK_TICK_STEP: usize = 5;
/// Length of a tick mark, in pixels.
pub const TICK_SIZE: f32 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Horizontal axis drawn along the bottom of the plot area.
    Bottom,
    /// Vertical axis drawn along the left of the plot area.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: Value,
    /// Pixel position along the axis (x for `Bottom`, y for `Left`).
    pub position: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    /// Axis line length in pixels (plot width or height).
    pub length: f32,
    pub ticks: Vec<Tick>,
    pub title: Option<String>,
}

/// Label a tick by whole minutes behind `data_min`, e.g. `3780` with min `3720` gives `1:00`.
pub fn format_gap(tick_value: Value, data_min: Value) -> String {
    let minutes = ((tick_value - data_min) / 60.0).floor() as i64;
    format!("{minutes}:00")
}

impl Axis {
    /// Horizontal axis over `scale`, with ticks at `data_min + offset` for each offset inside the domain.
    pub fn seconds(scale: &LinearScale, data_min: Value, offsets: &[f64]) -> Self {
        let ticks = offsets
            .iter()
            .map(|off| data_min + off)
            .filter(|v| scale.contains(*v))
            .map(|value| Tick { value, position: scale.to_px(value), label: format_gap(value, data_min) })
            .collect();
        Self { orientation: Orientation::Bottom, length: scale.range.1.max(scale.range.0), ticks, title: None }
    }

    /// Vertical axis over the rank scale, ticking rank 1 and every fifth rank up to `n`.
    pub fn ranks(scale: &LinearScale, n: usize) -> Self {
        let ticks = std::iter::once(1)
            .chain((RANK_TICK_STEP..=n).step_by(RANK_TICK_STEP))
            .filter(|rank| *rank <= n)
            .map(|rank| {
                let value = (rank - 1) as f64;
                Tick { value, position: scale.to_px(value), label: rank.to_string() }
            })
            .collect();
        Self { orientation: Orientation::Left, length: scale.range.0.max(scale.range.1), ticks, title: None }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
