// File: crates/chart-core/src/legend.rs
// Summary: Two-entry doping-status legend anchored to the plot's right edge.

use skia_safe as skia;

use crate::geometry::Rect;
use crate::theme::Theme;

pub const FLAGGED_LABEL: &str = "Doping Allegations";
pub const UNFLAGGED_LABEL: &str = "No Doping Allegations";

const SWATCH: f32 = 18.0;
const ROW_SPACING: f32 = 22.0;
const TEXT_GAP: f32 = 6.0;
/// Vertical offset of the first row from the top of the plot area.
const TOP: f32 = 200.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub swatch: Rect,
    pub color: skia::Color,
    pub label: &'static str,
    /// Text anchor point (end-anchored, left of the swatch).
    pub label_x: f32,
    pub label_y: f32,
}

/// Legend rows for a plot of the given `width`: swatches flush with the right edge, labels to their left.
pub fn entries(width: f32, theme: &Theme) -> Vec<LegendEntry> {
    [(theme.flagged, FLAGGED_LABEL), (theme.unflagged, UNFLAGGED_LABEL)]
        .into_iter()
        .enumerate()
        .map(|(row, (color, label))| {
            let top = TOP + row as f32 * ROW_SPACING;
            LegendEntry {
                swatch: Rect::from_ltwh(width - SWATCH, top, SWATCH, SWATCH),
                color,
                label,
                label_x: width - SWATCH - TEXT_GAP,
                label_y: top + SWATCH * 0.5 + 4.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_stack_at_right_edge() {
        let t = Theme::light();
        let rows = entries(500.0, &t);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, FLAGGED_LABEL);
        assert_eq!(rows[0].color, t.flagged);
        assert_eq!(rows[1].color, t.unflagged);
        assert_eq!(rows[0].swatch.right, 500.0);
        assert!(rows[1].swatch.top > rows[0].swatch.top);
        assert!(rows[0].label_x < rows[0].swatch.left);
    }
}
