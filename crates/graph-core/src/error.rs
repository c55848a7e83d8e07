// File: crates/graph-core/src/error.rs
// Summary: Library error type for graph operations.

use thiserror::Error;

use crate::graph::SeriesId;

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors surfaced by graph operations.
///
/// Zero-span viewports and empty-series fits would otherwise fall into
/// divide-by-zero arithmetic; both are reported explicitly instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// The viewport spans zero width or height in data space.
    #[error("degenerate viewport: x_span={x_span}, y_span={y_span}")]
    DegenerateViewport { x_span: f64, y_span: f64 },

    /// A fit was requested against a series with no points.
    #[error("cannot fit the viewport to an empty series")]
    EmptySeries,

    /// No series with the given id exists in the graph.
    #[error("unknown series id {0:?}")]
    UnknownSeries(SeriesId),
}
