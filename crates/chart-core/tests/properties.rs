// File: crates/chart-core/tests/properties.rs
// Purpose: Geometry properties of built scenes over the fixture dataset.

mod common;

use cyclist_chart_core::geometry::Point;
use cyclist_chart_core::tooltip::{HoverChange, HIDE_FADE, SHOW_FADE};
use cyclist_chart_core::{build_scene, format_gap, wrap_words, ChartOptions, Layer, TooltipState, Variant};

#[test]
fn marker_count_matches_records() {
    let records = common::fixture_records();
    let scene = build_scene(&records, &ChartOptions::for_variant(Variant::Annotated));
    assert_eq!(scene.marker_count(), records.len());
    let indices: Vec<_> = scene.markers.iter().map(|m| m.index).collect();
    assert_eq!(indices, (0..records.len()).collect::<Vec<_>>());
}

#[test]
fn x_does_not_increase_with_seconds() {
    let records = common::fixture_records();
    let scene = build_scene(&records, &ChartOptions::default());
    let mut pairs: Vec<_> = records.iter().zip(&scene.markers).map(|(r, m)| (r.seconds, m.center.x)).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert!(pairs.windows(2).all(|w| w[1].1 <= w[0].1));
    // Fastest time anchors the right edge, slowest the left.
    assert_eq!(pairs.first().map(|p| p.1), Some(scene.width));
    assert_eq!(pairs.last().map(|p| p.1), Some(0.0));
}

#[test]
fn y_follows_source_order() {
    let records = common::fixture_records();
    let scene = build_scene(&records, &ChartOptions::default());
    assert_eq!(scene.markers[0].center.y, 0.0);
    assert!(scene.markers.windows(2).all(|w| w[0].center.y <= w[1].center.y));
    assert_eq!(scene.y_scale.to_px(records.len() as f64), scene.height);
}

#[test]
fn gap_tick_labels() {
    assert_eq!(format_gap(3720.0 + 60.0, 3720.0), "1:00");
    assert_eq!(format_gap(3720.0 + 120.0, 3720.0), "2:00");
    assert_eq!(format_gap(3720.0 + 180.0, 3720.0), "3:00");

    let scene = build_scene(&common::fixture_records(), &ChartOptions::default());
    let labels: Vec<_> = scene.x_axis.ticks.iter().map(|t| t.label.clone()).collect();
    assert_eq!(labels, ["1:00", "2:00", "3:00"]);
}

#[test]
fn wrap_helper() {
    assert_eq!(wrap_words("a bb ccc dddd", 5), ["a bb ccc", "dddd"]);
}

#[test]
fn flagged_records_use_flagged_colour() {
    let records = common::fixture_records();
    let opts = ChartOptions::for_variant(Variant::Annotated);
    let scene = build_scene(&records, &opts);
    for (r, m) in records.iter().zip(&scene.markers) {
        let want = if r.doping.is_empty() { opts.theme.unflagged } else { opts.theme.flagged };
        assert_eq!(m.fill, want, "{}", r.name);
    }
}

#[test]
fn whitespace_doping_uses_flagged_colour() {
    let mut records = common::fixture_records();
    records[0].doping = " ".into();
    let opts = ChartOptions::for_variant(Variant::Labeled);
    let scene = build_scene(&records, &opts);
    assert!(scene.markers[0].flagged);
    assert_eq!(scene.markers[0].fill, opts.theme.flagged);
}

#[test]
fn empty_dataset_builds_axes_only() {
    let scene = build_scene(&[], &ChartOptions::for_variant(Variant::Annotated));
    assert_eq!(scene.marker_count(), 0);
    assert!(scene.commands_in(Layer::XAxis).next().is_some());
    assert!(scene.commands_in(Layer::YAxis).next().is_some());
}

#[test]
fn hover_shows_then_hides_tooltip() {
    let records = common::fixture_records();
    let scene = build_scene(&records, &ChartOptions::for_variant(Variant::Annotated));
    let m = &scene.markers[3];
    let over = Point::new(m.center.x + scene.origin.x, m.center.y + scene.origin.y);

    let mut state = TooltipState::new();
    match state.pointer_move(&scene, over) {
        HoverChange::Show(panel) => {
            assert_eq!(panel.marker, 3);
            assert_eq!(panel.fade, SHOW_FADE);
            assert_eq!(panel.lines[0], "Lance Armstrong: USA");
        }
        other => panic!("expected tooltip, got {other:?}"),
    }
    assert_eq!(state.pointer_move(&scene, over), HoverChange::Unchanged);
    assert_eq!(state.pointer_move(&scene, Point::new(1.0, 1.0)), HoverChange::Hide(HIDE_FADE));
    assert_eq!(state.active(), None);
}

#[test]
fn hover_without_tooltips_is_inert() {
    let scene = build_scene(&common::fixture_records(), &ChartOptions::default());
    let m = &scene.markers[0];
    let over = Point::new(m.center.x + scene.origin.x, m.center.y + scene.origin.y);
    assert_eq!(TooltipState::new().pointer_move(&scene, over), HoverChange::Unchanged);
}
