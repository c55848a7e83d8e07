// File: crates/graph-core/tests/render.rs
// Purpose: Validate rasterization output: markers, segments, fill, z-order,
// and the surface-cache lifecycle.

use graph_core::{Color, Graph, GraphError, Series, Surface};

const RED: Color = Color::from_rgb(255, 0, 0);
const GREEN: Color = Color::from_rgb(0, 255, 0);
const BLUE: Color = Color::from_rgb(0, 0, 255);

fn count_pixels(surface: &Surface, color: Color) -> usize {
    let mut n = 0;
    for y in 0..surface.height() as i32 {
        for x in 0..surface.width() as i32 {
            if surface.pixel(x, y) == Some(color) {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn single_point_series_draws_marker_only() {
    let mut graph = Graph::with_viewport(100, 100, 0.0, 100.0, 0.0, 100.0);
    let mut s = Series::new(RED);
    assert!(s.add_point((50.0, 50.0)));
    graph.add_series(s);

    let surface = graph.render().expect("render");

    // 2x2 marker block centered on (50, 50); no segments for one point
    for (x, y) in [(49, 50), (49, 51), (50, 50), (50, 51)] {
        assert_eq!(surface.pixel(x, y), Some(RED), "marker pixel ({x}, {y})");
    }
    assert_eq!(count_pixels(surface, RED), 4);
}

#[test]
fn fractional_point_size_truncates() {
    let mut graph = Graph::with_viewport(100, 100, 0.0, 100.0, 0.0, 100.0);
    let mut s = Series::new(RED).with_point_size(2.7);
    assert!(s.add_point((50.0, 50.0)));
    graph.add_series(s);

    let surface = graph.render().expect("render");
    // size 2.7 stamps the same 2x2 block as size 2
    assert_eq!(count_pixels(surface, RED), 4);
}

#[test]
fn horizontal_segment_stamps_one_row() {
    let mut graph = Graph::with_viewport(10, 10, 0.0, 10.0, 0.0, 10.0);
    let mut s = Series::new(BLUE).with_point_size(0.0);
    assert!(s.add_point((0.0, 5.0)));
    assert!(s.add_point((9.0, 5.0)));
    graph.add_series(s);

    let surface = graph.render().expect("render");

    // nine columns, thickness-1 blocks land at x 1..=9 on row 6
    for x in 1..=9 {
        assert_eq!(surface.pixel(x, 6), Some(BLUE), "segment pixel ({x}, 6)");
    }
    assert_eq!(count_pixels(surface, BLUE), 9);
}

#[test]
fn fill_paints_columns_down_to_the_bottom_edge() {
    let mut graph = Graph::with_viewport(10, 10, 0.0, 10.0, 0.0, 10.0);
    let background = graph.theme().background;
    let mut s = Series::new(BLUE).with_point_size(0.0).with_fill(GREEN);
    assert!(s.add_point((0.0, 5.0)));
    assert!(s.add_point((9.0, 5.0)));
    graph.add_series(s);

    let surface = graph.render().expect("render");

    for x in 0..10 {
        for y in 6..10 {
            assert_eq!(surface.pixel(x, y), Some(GREEN), "fill pixel ({x}, {y})");
        }
    }
    // above the segment stays untouched
    assert_eq!(surface.pixel(0, 4), Some(background));
}

#[test]
fn later_series_draws_on_top() {
    let mut graph = Graph::with_viewport(100, 100, 0.0, 100.0, 0.0, 100.0);

    let mut first = Series::new(RED);
    assert!(first.add_point((50.0, 50.0)));
    graph.add_series(first);

    let mut second = Series::new(GREEN);
    assert!(second.add_point((50.0, 50.0)));
    graph.add_series(second);

    let surface = graph.render().expect("render");
    assert_eq!(surface.pixel(50, 50), Some(GREEN));
    assert_eq!(count_pixels(surface, RED), 0);
}

#[test]
fn renders_are_additive_until_invalidated() {
    let mut graph = Graph::with_viewport(100, 100, 0.0, 100.0, 0.0, 100.0);
    let background = graph.theme().background;

    let mut first = Series::new(RED);
    assert!(first.add_point((25.0, 25.0)));
    let first_id = graph.add_series(first);
    graph.render().expect("render");

    // removing a series does not erase its pixels
    graph.remove_series(first_id).expect("series exists");
    let mut second = Series::new(GREEN);
    assert!(second.add_point((75.0, 75.0)));
    graph.add_series(second);

    let surface = graph.render().expect("render");
    assert_eq!(surface.pixel(25, 75), Some(RED), "stale pixels persist");
    assert_eq!(surface.pixel(75, 25), Some(GREEN));

    // a size setter discards the cached surface, even with the same size
    graph.set_size(100, 100);
    let surface = graph.render().expect("render");
    assert_eq!(surface.pixel(25, 75), Some(background), "fresh surface");
    assert_eq!(surface.pixel(75, 25), Some(GREEN));
}

#[test]
fn degenerate_viewport_is_reported() {
    let mut graph = Graph::with_viewport(10, 10, 5.0, 5.0, 0.0, 10.0);
    let err = graph.render().err().expect("zero x span must fail");
    match err {
        GraphError::DegenerateViewport { x_span, .. } => assert_eq!(x_span, 0.0),
        other => panic!("expected DegenerateViewport, got {other:?}"),
    }
}

#[test]
fn out_of_bounds_writes_are_dropped() {
    let mut surface = Surface::new(10, 10, RED);
    surface.set_pixel(-1, 0, GREEN);
    surface.set_pixel(0, -1, GREEN);
    surface.set_pixel(10, 0, GREEN);
    surface.set_pixel(0, 10, GREEN);

    assert_eq!(surface.pixel(-1, 0), None);
    assert_eq!(count_pixels(&surface, GREEN), 0);
    assert_eq!(count_pixels(&surface, RED), 100);
}
