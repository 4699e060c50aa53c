// File: crates/chart-core/src/svg.rs
// Summary: SVG serializer for a built `Scene`, with CSS-driven hover tooltips.

use std::fmt::Write as _;

use crate::geometry::Point;
use crate::scene::{DrawCommand, Layer, Scene, Shape};
use crate::theme::css_color;
use crate::tooltip::{HIDE_FADE, POINTER_OFFSET, SHOW_FADE};

/// Class of the group holding the plot area.
pub const CHART_CLASS: &str = "chart";

const TOOLTIP_FONT: f32 = 12.0;
const TOOLTIP_LINE: f32 = 15.0;
const TOOLTIP_PAD: f32 = 6.0;
/// Rough glyph advance used to size the tooltip box.
const CHAR_ADVANCE: f32 = 6.6;

/// Escape text for element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Compact number formatting (two decimals max, no trailing zeros).
fn num(v: f32) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == 0.0 { "0".to_string() } else { format!("{r}") }
}

fn style_block(scene: &Scene) -> String {
    let t = &scene.theme;
    format!(
        "<style>\
.{chart} text{{font-family:sans-serif}}\
.point .tooltip{{opacity:0;transition:opacity {hide}ms;pointer-events:none}}\
.point:hover .tooltip{{opacity:{show};transition:opacity {show_ms}ms}}\
.tooltip rect{{fill:{fill}}}\
.tooltip text{{fill:{text};font-size:{font}px}}\
</style>",
        chart = CHART_CLASS,
        hide = HIDE_FADE.duration_ms,
        show = SHOW_FADE.opacity,
        show_ms = SHOW_FADE.duration_ms,
        fill = css_color(t.tooltip_fill),
        text = css_color(t.tooltip_text),
        font = num(TOOLTIP_FONT),
    )
}

fn write_shape(out: &mut String, cmd: &DrawCommand) {
    match &cmd.shape {
        Shape::Line { from, to, color, width } => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                num(from.x), num(from.y), num(to.x), num(to.y), css_color(*color), num(*width)
            );
        }
        Shape::Circle { center, radius, fill } => {
            let index = cmd.marker.map(|i| format!(r#" data-index="{i}""#)).unwrap_or_default();
            let _ = write!(
                out,
                r#"<circle class="{}"{} cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                cmd.layer.class(), index, num(center.x), num(center.y), num(*radius), css_color(*fill)
            );
        }
        Shape::Rect { rect, fill } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                num(rect.left), num(rect.top), num(rect.width()), num(rect.height()), css_color(*fill)
            );
        }
        Shape::Text { at, text, size, color, anchor, rotate } => {
            let transform = if *rotate != 0.0 {
                format!(r#" transform="rotate({} {} {})""#, num(*rotate), num(at.x), num(at.y))
            } else {
                String::new()
            };
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}"{}>{}</text>"#,
                num(at.x), num(at.y), num(*size), css_color(*color), anchor.svg_name(), transform, escape(text)
            );
        }
    }
}

/// Tooltip group anchored at the marker centre plus `POINTER_OFFSET`.
///
/// A static document has no pointer position, so the panel sits beside the marker and CSS
/// `:hover` drives the fades. Pointer-following placement lives in `TooltipState`.
fn write_tooltip(out: &mut String, at: Point, lines: &[String]) {
    let origin = at.offset(POINTER_OFFSET.0, POINTER_OFFSET.1);
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f32;
    let w = longest * CHAR_ADVANCE + TOOLTIP_PAD * 2.0;
    let h = lines.len() as f32 * TOOLTIP_LINE + TOOLTIP_PAD * 2.0;
    let _ = write!(
        out,
        r#"<g class="tooltip" transform="translate({},{})"><rect width="{}" height="{}" rx="4"/>"#,
        num(origin.x), num(origin.y), num(w), num(h)
    );
    let _ = write!(out, r#"<text x="{}" y="{}">"#, num(TOOLTIP_PAD), num(TOOLTIP_PAD));
    for line in lines {
        let _ = write!(out, r#"<tspan x="{}" dy="{}">{}</tspan>"#, num(TOOLTIP_PAD), num(TOOLTIP_LINE), escape(line));
    }
    out.push_str("</text></g>");
}

/// Serialize the scene into a standalone SVG document.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(scene.canvas_width),
        h = num(scene.canvas_height)
    );
    out.push_str(&style_block(scene));
    let _ = write!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, css_color(scene.theme.background));
    let _ = write!(
        out,
        r#"<g class="{}" transform="translate({},{})">"#,
        CHART_CLASS,
        num(scene.origin.x),
        num(scene.origin.y)
    );

    let mut open: Option<Layer> = None;
    for cmd in &scene.commands {
        if open != Some(cmd.layer) {
            if open.is_some() {
                out.push_str("</g>");
            }
            let _ = write!(out, r#"<g class="{}">"#, group_class(cmd.layer));
            open = Some(cmd.layer);
        }
        match (cmd.marker, &cmd.shape) {
            (Some(i), Shape::Circle { center, .. }) => {
                out.push_str(r#"<g class="point">"#);
                write_shape(&mut out, cmd);
                if let Some(tip) = scene.tooltip(i) {
                    write_tooltip(&mut out, *center, &tip.lines);
                }
                out.push_str("</g>");
            }
            _ => write_shape(&mut out, cmd),
        }
    }
    if open.is_some() {
        out.push_str("</g>");
    }
    out.push_str("</g></svg>\n");
    out
}

fn group_class(layer: Layer) -> &'static str {
    match layer {
        Layer::Marker => "dots",
        Layer::Label => "labels",
        other => other.class(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::scene::{build_scene, ChartOptions};
    use crate::types::Variant;

    fn rec(seconds: f64, name: &str, doping: &str) -> Record {
        Record {
            place: None,
            seconds,
            year: 1997,
            name: name.into(),
            nationality: "ITA".into(),
            time: "37:15".into(),
            doping: doping.into(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn one_circle_per_marker() {
        let records = vec![rec(2210.0, "A", ""), rec(2220.0, "B", "x"), rec(2230.0, "C", "")];
        let svg = scene_to_svg(&build_scene(&records, &ChartOptions::default()));
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(r#"<g class="chart" transform="translate(70,20)">"#));
        assert!(!svg.contains(r#"class="tooltip""#));
    }

    #[test]
    fn annotated_svg_embeds_tooltips_and_legend() {
        let records = vec![rec(2210.0, "Marco <Pantani>", "Alleged drug use"), rec(2300.0, "B", "")];
        let svg = scene_to_svg(&build_scene(&records, &ChartOptions::for_variant(Variant::Annotated)));
        assert_eq!(svg.matches(r#"<g class="tooltip""#).count(), 2);
        assert!(svg.contains("Marco &lt;Pantani&gt;: ITA"));
        assert!(svg.contains("No Doping Allegations"));
        assert!(svg.contains("rotate(-90"));
        assert!(svg.contains("transition:opacity 500ms"));
    }

    #[test]
    fn tooltip_sits_beside_its_marker() {
        let records = vec![rec(2210.0, "A", "EPO"), rec(2300.0, "B", "")];
        let scene = build_scene(&records, &ChartOptions::for_variant(Variant::Annotated));
        assert_eq!(scene.markers[0].center, Point::new(500.0, 0.0));
        let svg = scene_to_svg(&scene);
        assert!(svg.contains(r#"<g class="tooltip" transform="translate(505,-28)">"#));
    }

    #[test]
    fn empty_scene_keeps_axis_groups() {
        let svg = scene_to_svg(&build_scene(&[], &ChartOptions::default()));
        assert!(svg.contains(r#"<g class="x axis">"#));
        assert!(svg.contains(r#"<g class="y axis">"#));
        assert_eq!(svg.matches("<circle").count(), 0);
    }
}
