// File: crates/graph-core/src/series.rs
// Summary: Ordered XY series with style attributes and point-acceptance policy.

use tracing::warn;

use crate::point::DataPoint;
use crate::types::Color;

/// An x-sorted sequence of data points plus the style used to draw it.
///
/// The points stay non-decreasing in x across every successful `add_point`
/// call and are never handed out mutably.
#[derive(Clone, Debug)]
pub struct Series {
    points: Vec<DataPoint>,
    /// Color of the point markers.
    pub point_color: Color,
    /// Color of the connecting line segments.
    pub line_color: Color,
    /// Color of the area under the curve when `fill` is on.
    pub fill_color: Color,
    /// Marker block edge length in pixels; fractional sizes truncate.
    pub point_size: f64,
    /// Line block edge length in pixels; fractional sizes truncate.
    pub line_thickness: f64,
    /// Paint the area between the line and the bottom edge of the surface.
    pub fill: bool,
    /// Accept points with a NaN coordinate.
    pub allow_nan: bool,
    /// Accept points with an infinite coordinate.
    pub allow_infinite: bool,
}

impl Series {
    /// New empty series with every color initialized to `color`.
    pub fn new(color: Color) -> Self {
        Self {
            points: Vec::new(),
            point_color: color,
            line_color: color,
            fill_color: color,
            point_size: 2.0,
            line_thickness: 1.0,
            fill: false,
            allow_nan: false,
            allow_infinite: false,
        }
    }

    pub fn with_point_size(mut self, size: f64) -> Self {
        self.point_size = size;
        self
    }

    pub fn with_line_thickness(mut self, thickness: f64) -> Self {
        self.line_thickness = thickness;
        self
    }

    /// Enable fill-under-curve in the given color.
    pub fn with_fill(mut self, fill_color: Color) -> Self {
        self.fill = true;
        self.fill_color = fill_color;
        self
    }

    /// Read-only ordered view of the points.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Insert a point, keeping the x-sort invariant.
    ///
    /// Returns false and leaves the series unchanged when a coordinate is
    /// NaN and `allow_nan` is off, or infinite and `allow_infinite` is off.
    /// The insertion position is found by scanning back from the end for the
    /// last point with a strictly smaller x.
    pub fn add_point(&mut self, point: impl Into<DataPoint>) -> bool {
        let point = point.into();
        if !self.allow_nan && (point.y.is_nan() || point.x.is_nan()) {
            warn!(x = point.x, y = point.y, "rejected NaN point");
            return false;
        }
        if !self.allow_infinite && (point.y.is_infinite() || point.x.is_infinite()) {
            warn!(x = point.x, y = point.y, "rejected infinite point");
            return false;
        }

        for i in (1..=self.points.len()).rev() {
            if self.points[i - 1].x < point.x {
                self.points.insert(i, point);
                return true;
            }
        }
        // no smaller x found, this is the new smallest
        self.points.insert(0, point);
        true
    }
}
