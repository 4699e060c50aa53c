// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the fixture dataset per chart variant to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

mod common;

use cyclist_chart_core::{Chart, ChartOptions, RenderOptions, Variant};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(variant: Variant) -> Vec<u8> {
    let chart = Chart::new(common::fixture_records(), ChartOptions::for_variant(variant));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_variants() {
    for variant in Variant::ALL {
        let bytes = render_bytes(variant);
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(format!("tests/__snapshots__/{variant}.png"));
        write_or_compare(&path, &bytes);
    }
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(render_bytes(Variant::Annotated), render_bytes(Variant::Annotated));
}
