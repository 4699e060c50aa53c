// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, including the flagged/unflagged marker palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    /// Marker fill when colouring by doping status is off.
    pub marker: skia::Color,
    /// Marker fill for records with doping allegations.
    pub flagged: skia::Color,
    /// Marker fill for records without doping allegations.
    pub unflagged: skia::Color,
    pub point_label: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            marker: skia::Color::from_argb(255, 70, 130, 180),    // steelblue
            flagged: skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
            unflagged: skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
            point_label: skia::Color::from_argb(255, 60, 60, 70),
            tooltip_fill: skia::Color::from_argb(230, 176, 196, 222), // lightsteelblue
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 235, 235, 245),
            marker: skia::Color::from_argb(255, 64, 160, 255),
            flagged: skia::Color::from_argb(255, 255, 140, 60),
            unflagged: skia::Color::from_argb(255, 64, 160, 255),
            point_label: skia::Color::from_argb(255, 200, 200, 210),
            tooltip_fill: skia::Color::from_argb(230, 40, 40, 48),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    /// Marker fill for a record's flagged status.
    pub fn status_color(&self, flagged: bool) -> skia::Color {
        if flagged { self.flagged } else { self.unflagged }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    tracing::warn!("unknown theme '{}', using light", name);
    Theme::light()
}

/// CSS `rgb()`/`rgba()` notation for a color, as used by the SVG writer.
pub fn css_color(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    } else {
        format!("rgba({},{},{},{:.3})", c.r(), c.g(), c.b(), c.a() as f32 / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_color_picks_palette_entry() {
        let t = Theme::light();
        assert_eq!(t.status_color(true), t.flagged);
        assert_eq!(t.status_color(false), t.unflagged);
        assert_ne!(t.flagged, t.unflagged);
    }

    #[test]
    fn find_falls_back_to_light() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("neon").name, "light");
    }

    #[test]
    fn css_color_formats() {
        assert_eq!(css_color(skia::Color::from_argb(255, 0xff, 0x7f, 0x0e)), "#ff7f0e");
        assert_eq!(css_color(skia::Color::from_argb(0, 1, 2, 3)), "rgba(1,2,3,0.000)");
    }
}
