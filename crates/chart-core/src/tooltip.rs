// File: crates/chart-core/src/tooltip.rs
// Summary: Hover tooltip content, placement near the pointer, and show/hide fades.

use crate::geometry::Point;
use crate::record::Record;
use crate::scene::Scene;
use crate::text::wrap_words;

/// Default wrap threshold for the doping-allegation text, in characters.
pub const DEFAULT_WRAP: usize = 30;
/// Panel offset from the pointer position.
pub const POINTER_OFFSET: (f32, f32) = (5.0, -28.0);

/// Opacity transition applied to the tooltip panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub opacity: f32,
    pub duration_ms: u32,
}

pub const SHOW_FADE: Fade = Fade { opacity: 0.9, duration_ms: 200 };
pub const HIDE_FADE: Fade = Fade { opacity: 0.0, duration_ms: 500 };

/// Text lines shown for one record.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub lines: Vec<String>,
}

impl TooltipContent {
    pub fn for_record(record: &Record, wrap: usize) -> Self {
        let mut lines = vec![
            format!("{}: {}", record.name, record.nationality),
            format!("Year: {}, Time: {}", record.year, record.time),
        ];
        if record.is_flagged() {
            lines.push(String::new());
            lines.extend(wrap_words(&record.doping, wrap));
        }
        Self { lines }
    }
}

/// A tooltip panel positioned in canvas space.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipPanel {
    pub marker: usize,
    pub origin: Point,
    pub lines: Vec<String>,
    pub fade: Fade,
}

/// What a pointer movement did to the tooltip.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverChange {
    Show(TooltipPanel),
    Hide(Fade),
    Unchanged,
}

/// Pointer-hover state for one scene.
#[derive(Clone, Debug, Default)]
pub struct TooltipState {
    active: Option<usize>,
}

impl TooltipState {
    pub fn new() -> Self { Self::default() }

    /// Index of the marker whose tooltip is showing.
    pub fn active(&self) -> Option<usize> { self.active }

    /// Show the panel for `marker` near `pointer`.
    pub fn pointer_enter(&mut self, marker: usize, content: &TooltipContent, pointer: Point) -> TooltipPanel {
        self.active = Some(marker);
        TooltipPanel {
            marker,
            origin: pointer.offset(POINTER_OFFSET.0, POINTER_OFFSET.1),
            lines: content.lines.clone(),
            fade: SHOW_FADE,
        }
    }

    /// Hide the panel; `None` when nothing was showing.
    pub fn pointer_leave(&mut self) -> Option<Fade> {
        self.active.take().map(|_| HIDE_FADE)
    }

    /// Track a canvas-space pointer over `scene`, entering and leaving markers as it moves.
    pub fn pointer_move(&mut self, scene: &Scene, pointer: Point) -> HoverChange {
        let hit = scene.marker_at(pointer).filter(|i| scene.tooltip(*i).is_some());
        match (self.active, hit) {
            (Some(a), Some(h)) if a == h => HoverChange::Unchanged,
            (_, Some(h)) => match scene.tooltip(h) {
                Some(content) => HoverChange::Show(self.pointer_enter(h, content, pointer)),
                None => HoverChange::Unchanged,
            },
            (Some(_), None) => self.pointer_leave().map_or(HoverChange::Unchanged, HoverChange::Hide),
            (None, None) => HoverChange::Unchanged,
        }
    }
}
