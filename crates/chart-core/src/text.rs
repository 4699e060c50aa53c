// File: crates/chart-core/src/text.rs
// Summary: Word wrapping for tooltip text, plus a Skia textlayout shaper for raster labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Break `text` into lines on whitespace.
///
/// Tokens accumulate on the current line; once the summed token length (spaces not counted)
/// reaches `width`, the line is closed. A `width` of 0 puts every token on its own line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line: Vec<&str> = Vec::new();
    let mut len = 0usize;
    for token in text.split_whitespace() {
        line.push(token);
        len += token.chars().count();
        if len >= width {
            lines.push(line.join(" "));
            line.clear();
            len = 0;
        }
    }
    if !line.is_empty() {
        lines.push(line.join(" "));
    }
    lines
}

/// Horizontal anchoring of a text run relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub const fn svg_name(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, anchored horizontally at `x`.
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        anchor: TextAnchor,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - w * 0.5,
            TextAnchor::End => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }
}
