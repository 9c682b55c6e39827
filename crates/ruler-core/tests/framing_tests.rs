// Host-side tests for camera framing and visibility math.
// A 1200 px wide, 300 px tall viewport gives aspect 4 and a 320-unit wide
// frustum over the 40-unit ruler.

use glam::DVec3;
use ruler_core::*;

const EPS: f64 = 1e-9;

fn make_state() -> ViewportState {
    ViewportState::new(FramingConfig::default(), 1200.0, default_ruler_bounds())
        .expect("default config is valid")
}

fn make_state_with(config: FramingConfig) -> ViewportState {
    ViewportState::new(config, 1200.0, default_ruler_bounds()).expect("config is valid")
}

#[test]
fn set_zoom_always_lands_in_limits() {
    let mut s = make_state();
    for z in [
        -5.0,
        0.0,
        0.05,
        0.1,
        1.0,
        42.5,
        100.0,
        150.0,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ] {
        let applied = s.set_zoom(z);
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&applied), "{z} -> {applied}");
        assert_eq!(applied, s.zoom());
    }
}

#[test]
fn set_zoom_keeps_in_range_values() {
    let mut s = make_state();
    for z in [0.1, 0.5, 1.0, 7.25, 100.0] {
        assert_eq!(s.set_zoom(z), z);
    }
    assert_eq!(s.set_zoom(1000.0), MAX_ZOOM);
    assert_eq!(s.set_zoom(0.001), MIN_ZOOM);
}

#[test]
fn set_zoom_nan_keeps_current_zoom() {
    let mut s = make_state();
    s.set_zoom(3.0);
    assert_eq!(s.set_zoom(f64::NAN), 3.0);
    assert_eq!(s.zoom(), 3.0);
}

#[test]
fn zoom_by_factor_ignores_non_positive_factors() {
    let mut s = make_state();
    s.set_zoom(2.0);
    assert_eq!(s.zoom_by_factor(0.0), 2.0);
    assert_eq!(s.zoom_by_factor(-1.0), 2.0);
    assert!((s.zoom_by_factor(1.5) - 3.0).abs() < EPS);
}

#[test]
fn visibility_matches_object_when_span_equals_bounds() {
    let mut s = make_state();
    // 320 / 40 = 8 makes the visible span exactly [-20, 20].
    s.set_zoom(8.0);
    let v = s.visibility();
    assert!(
        v.approx_eq(
            &Visibility {
                total: 100.0,
                start: 0.0,
                end: 100.0
            },
            EPS
        ),
        "{v:?}"
    );
}

#[test]
fn visibility_is_zero_without_overlap() {
    let mut s = make_state();
    s.set_zoom(8.0);
    s.focus_on_number(1);
    s.pan_by_pixels(100_000.0, 0.0);
    let v = s.visibility();
    assert_eq!(v.total, 0.0);
    // The view sits left of the ruler, so its right edge maps below 0%.
    assert!(v.end < 0.0);
}

#[test]
fn visibility_reports_partial_overlap() {
    let mut s = make_state();
    s.set_zoom(8.0);
    s.focus_on_number(1);
    let v = s.visibility();
    assert!((v.total - 50.0).abs() < EPS);
    assert!(v.start.abs() < EPS);
    assert!((v.end - 50.0).abs() < EPS);
}

#[test]
fn visibility_of_zero_width_object_is_none() {
    let s = make_state();
    let sliver = Bounds::new(DVec3::new(1.0, -1.0, 0.0), DVec3::new(1.0, 1.0, 0.0));
    assert_eq!(s.horizontal_visibility(&sliver), Visibility::NONE);
}

#[test]
fn set_view_by_percentages_round_trips_through_visibility() {
    let mut s = make_state();
    s.set_view_by_percentages(25.0, 75.0);
    let v = s.visibility();
    assert!((v.start - 25.0).abs() < 1e-6, "{v:?}");
    assert!((v.end - 75.0).abs() < 1e-6, "{v:?}");
    assert!((v.total - 50.0).abs() < 1e-6, "{v:?}");
    assert!(s.camera_x().abs() < EPS);
}

#[test]
fn set_view_by_percentages_clamps_inputs() {
    let mut a = make_state();
    let mut b = make_state();
    a.set_view_by_percentages(-30.0, 140.0);
    b.set_view_by_percentages(0.0, 100.0);
    assert_eq!(a.zoom(), b.zoom());
    assert_eq!(a.camera_x(), b.camera_x());
}

#[test]
fn set_view_by_percentages_normalizes_inverted_range() {
    let mut a = make_state();
    let mut b = make_state();
    a.set_view_by_percentages(80.0, 20.0);
    b.set_view_by_percentages(20.0, 80.0);
    assert_eq!(a.zoom(), b.zoom());
    assert_eq!(a.camera_x(), b.camera_x());
}

#[test]
fn set_view_by_percentages_empty_range_hits_max_zoom() {
    let mut s = make_state();
    s.set_view_by_percentages(50.0, 50.0);
    assert_eq!(s.zoom(), MAX_ZOOM);
    assert!(s.camera_x().abs() < EPS);
}

#[test]
fn set_view_by_percentages_leaves_height_fit_alone() {
    let mut s = make_state();
    s.fit_to_height();
    s.set_view_by_percentages(0.0, 100.0);
    assert!((s.zoom() - 8.0).abs() < EPS);
}

#[test]
fn focus_on_number_hits_both_edges() {
    let mut s = make_state();
    let bounds = *s.object();

    s.focus_on_number(1);
    assert!((s.camera_x() - bounds.min.x).abs() < EPS);
    assert!((s.camera().target.x - bounds.min.x).abs() < EPS);

    s.focus_on_number(36);
    assert!((s.camera_x() - bounds.max.x).abs() < EPS);
    assert!((s.camera().target.x - bounds.max.x).abs() < EPS);
}

#[test]
fn focus_on_number_clamps_out_of_range() {
    let mut s = make_state();
    s.focus_on_number(1);
    let first = s.camera_x();
    s.focus_on_number(0);
    assert_eq!(s.camera_x(), first);
    s.focus_on_number(-12);
    assert_eq!(s.camera_x(), first);

    s.focus_on_number(36);
    let last = s.camera_x();
    s.focus_on_number(37);
    assert_eq!(s.camera_x(), last);
}

#[test]
fn focus_on_number_keeps_zoom() {
    let mut s = make_state();
    s.set_zoom(5.0);
    s.focus_on_number(10);
    assert_eq!(s.zoom(), 5.0);
}

#[test]
fn fit_object_height_inverts_to_frustum_size() {
    let mut s = make_state();
    let object = *s.object();
    for fraction in [0.6, 0.8, 1.0] {
        let applied = s.fit_object_height(&object, fraction);
        let back = applied * object.height() / fraction;
        assert!((back - FRUSTUM_SIZE).abs() < 1e-9, "{fraction}: {back}");
    }
}

#[test]
fn fit_to_height_uses_configured_fraction() {
    let mut s = make_state_with(FramingConfig {
        height_fraction: 0.6,
        ..Default::default()
    });
    // 80 / 2 * 0.6
    assert!((s.fit_to_height() - 24.0).abs() < EPS);
}

#[test]
fn fit_flat_object_clamps_to_max_zoom() {
    let mut s = make_state();
    let flat = Bounds::new(DVec3::new(-20.0, 0.0, 0.0), DVec3::new(20.0, 0.0, 0.0));
    assert_eq!(s.fit_object_height(&flat, 0.8), MAX_ZOOM);
}

#[test]
fn focus_on_number_range_centers_with_margin() {
    let mut s = make_state();
    let center = s.focus_on_number_range(0.0, 10.0);

    // [-20, -16] -> center -18, which is 1.75 spacings from the left edge.
    assert!((s.camera_x() + 18.0).abs() < EPS);
    assert!((s.camera().target.x + 18.0).abs() < EPS);
    assert_eq!(center, 3);

    let expected_zoom = FRUSTUM_SIZE / (4.0 * RANGE_MARGIN);
    assert!((s.zoom() - expected_zoom).abs() < EPS);
}

#[test]
fn focus_on_number_range_never_exceeds_height_fit() {
    let mut s = make_state();
    s.focus_on_number_range(50.0, 51.0);
    // 80 / 2 * 0.8
    assert!((s.zoom() - 32.0).abs() < EPS);
}

#[test]
fn focus_on_number_range_prefers_range_zoom_for_wide_ranges() {
    let mut s = make_state();
    let center = s.focus_on_number_range(0.0, 50.0);
    // [-20, 0] is 20 units wide: 80 / (20 * 1.2) stays under the height fit of 32.
    let expected_zoom = FRUSTUM_SIZE / (20.0 * RANGE_MARGIN);
    assert!(expected_zoom < 32.0);
    assert!((s.zoom() - expected_zoom).abs() < EPS);
    assert!((s.camera_x() + 10.0).abs() < EPS);
    // -10 is 8.75 spacings from the left edge.
    assert_eq!(center, 10);
}

#[test]
fn focus_on_number_range_normalizes_inverted_range() {
    let mut a = make_state();
    let mut b = make_state();
    let ca = a.focus_on_number_range(90.0, 60.0);
    let cb = b.focus_on_number_range(60.0, 90.0);
    assert_eq!(ca, cb);
    assert_eq!(a.zoom(), b.zoom());
    assert_eq!(a.camera_x(), b.camera_x());
}

#[test]
fn resize_recomputes_frustum_from_aspect() {
    let mut s = make_state();
    s.set_viewport_width(600.0);
    let f = s.camera().frustum;
    assert!((f.width() - FRUSTUM_SIZE * 2.0).abs() < EPS);
    assert!((f.width() - s.frustum_width()).abs() < EPS);
    assert!((f.height() - FRUSTUM_SIZE).abs() < EPS);
    assert_eq!(s.viewport().height, VIEWPORT_HEIGHT_PX);
}

#[test]
fn resize_ignores_invalid_sizes() {
    let mut s = make_state();
    let before = s.viewport();
    s.set_viewport_width(0.0);
    s.resize(f64::NAN, 300.0);
    s.resize(800.0, -1.0);
    assert_eq!(s.viewport(), before);
}

#[test]
fn resize_changes_visible_span() {
    let mut s = make_state();
    s.set_zoom(8.0);
    s.set_viewport_width(600.0);
    // Half the width shows half the ruler.
    assert!((s.visibility().total - 50.0).abs() < EPS);
}

#[test]
fn horizontal_only_pan_drops_vertical_motion() {
    let mut s = make_state();
    s.set_zoom(8.0);
    s.pan_by_pixels(120.0, 75.0);
    // 120 px * 320 units / 8 / 1200 px = 4 units, opposite the drag.
    assert!((s.camera_x() + 4.0).abs() < EPS);
    assert!((s.camera().target.x + 4.0).abs() < EPS);
    assert_eq!(s.camera().position.y, 0.0);
    assert_eq!(s.camera().target.y, 0.0);
}

#[test]
fn free_pan_moves_vertically() {
    let mut s = make_state_with(FramingConfig {
        pan_mode: PanMode::Free,
        ..Default::default()
    });
    s.set_zoom(8.0);
    s.pan_by_pixels(0.0, 30.0);
    // 30 px * 80 units / 8 / 300 px = 1 unit
    assert!((s.camera().position.y - 1.0).abs() < EPS);
    assert_eq!(s.camera_x(), 0.0);
}

#[test]
fn world_to_pixel_maps_ruler_edges_to_canvas_edges() {
    let mut s = make_state();
    s.set_zoom(8.0);
    let left = s.world_to_pixel(DVec3::new(-20.0, 0.0, 0.0));
    let right = s.world_to_pixel(DVec3::new(20.0, 0.0, 0.0));
    assert!(left.x.abs() < 1e-6, "{left:?}");
    assert!((right.x - 1200.0).abs() < 1e-6, "{right:?}");
    assert!((left.y - 150.0).abs() < 1e-6, "{left:?}");
}

#[test]
fn tick_positions_span_the_ruler() {
    let s = make_state();
    let ticks = s.tick_positions();
    assert_eq!(ticks.len(), 36);
    assert_eq!(ticks[0].0, 1);
    assert!((ticks[0].1 + 20.0).abs() < EPS);
    assert_eq!(ticks[35].0, 36);
    assert!((ticks[35].1 - 20.0).abs() < EPS);

    let (minor, y0, y1) = s.minor_tick_positions();
    assert_eq!(minor.len(), 201);
    assert!((y0 + 1.2).abs() < EPS);
    assert!((y1 - 1.2).abs() < EPS);
}

#[test]
fn new_rejects_invalid_config_and_bounds() {
    let bad = FramingConfig {
        frustum_size: -1.0,
        ..Default::default()
    };
    assert_eq!(
        ViewportState::new(bad, 1200.0, default_ruler_bounds()).err(),
        Some(ConfigError::FrustumSize(-1.0))
    );

    let sliver = Bounds::new(DVec3::ZERO, DVec3::new(0.0, 1.0, 1.0));
    assert!(ViewportState::new(FramingConfig::default(), 1200.0, sliver).is_err());
}

#[test]
fn new_rejects_oversized_tick_count() {
    let huge = FramingConfig {
        tick_count: 3_000_000_000,
        ..Default::default()
    };
    assert_eq!(
        ViewportState::new(huge, 1200.0, default_ruler_bounds()).err(),
        Some(ConfigError::TickCount(3_000_000_000))
    );
}

#[test]
fn focus_on_number_at_max_tick_count_stays_on_the_ruler() {
    let mut s = make_state_with(FramingConfig {
        tick_count: MAX_TICK_COUNT,
        ..Default::default()
    });
    s.focus_on_number(i32::MAX);
    assert!((s.camera_x() - 20.0).abs() < EPS);
    s.focus_on_number(i32::MIN);
    assert!((s.camera_x() + 20.0).abs() < EPS);
}

#[test]
fn visibility_display_is_readable() {
    let v = Visibility {
        total: 50.0,
        start: 25.0,
        end: 75.0,
    };
    assert_eq!(v.to_string(), "visible 50.00%, from 25.00% to 75.00%");
}
