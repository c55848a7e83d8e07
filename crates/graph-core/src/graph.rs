// File: crates/graph-core/src/graph.rs
// Summary: Graph container: viewport, surface cache, and ordered series list.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, trace};

use crate::error::GraphError;
use crate::raster::draw_series;
use crate::scale::PixelScale;
use crate::series::Series;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::view::Viewport;

/// Stable handle for a series inside a graph.
///
/// Removal goes through the id rather than value equality; two series can
/// hold identical content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeriesId(u64);

/// Lifecycle of the cached render surface.
///
/// Bound/size/theme setters drop the cache back to `Absent`; `render`
/// allocates a `Fresh` surface when absent and leaves it `Drawn` once any
/// series has been rasterized onto it. Renders against a non-absent cache
/// draw additively onto the existing pixels.
enum SurfaceCache {
    Absent,
    Fresh(Surface),
    Drawn(Surface),
}

impl SurfaceCache {
    fn take(&mut self) -> Option<Surface> {
        match std::mem::replace(self, SurfaceCache::Absent) {
            SurfaceCache::Absent => None,
            SurfaceCache::Fresh(surface) | SurfaceCache::Drawn(surface) => Some(surface),
        }
    }

    /// Store the surface back and hand out a borrow of it.
    fn store(&mut self, surface: Surface, drawn: bool) -> &Surface {
        *self = if drawn {
            SurfaceCache::Drawn(surface)
        } else {
            SurfaceCache::Fresh(surface)
        };
        match self {
            SurfaceCache::Fresh(surface) | SurfaceCache::Drawn(surface) => surface,
            // just written above
            SurfaceCache::Absent => unreachable!("cache populated by store"),
        }
    }
}

/// A graph: one viewport, one pixel surface, and an ordered list of series.
///
/// Insertion order is draw order; later series overwrite earlier ones where
/// their pixels overlap. Rendering is synchronous and single-threaded.
pub struct Graph {
    viewport: Viewport,
    width: u32,
    height: u32,
    theme: Theme,
    series: Vec<(SeriesId, Series)>,
    next_id: u64,
    cache: SurfaceCache,
}

impl Graph {
    /// Graph whose viewport covers 0..width and 0..height in data space.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_viewport(width, height, 0.0, width as f64, 0.0, height as f64)
    }

    /// Graph with an explicit data-space viewport.
    pub fn with_viewport(
        width: u32,
        height: u32,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Self {
        Self {
            viewport: Viewport::new(min_x, max_x, min_y, max_y),
            width,
            height,
            theme: Theme::dark(),
            series: Vec::new(),
            next_id: 0,
            cache: SurfaceCache::Absent,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set the smallest drawn x. Infinite values are ignored, but the cached
    /// surface is discarded either way.
    pub fn set_min_x(&mut self, value: f64) {
        self.viewport.set_min_x(value);
        self.invalidate();
    }

    /// Set the largest drawn x. Infinite values are ignored, but the cached
    /// surface is discarded either way.
    pub fn set_max_x(&mut self, value: f64) {
        self.viewport.set_max_x(value);
        self.invalidate();
    }

    /// Set the smallest drawn y. Infinite values are ignored, but the cached
    /// surface is discarded either way.
    pub fn set_min_y(&mut self, value: f64) {
        self.viewport.set_min_y(value);
        self.invalidate();
    }

    /// Set the largest drawn y. Infinite values are ignored, but the cached
    /// surface is discarded either way.
    pub fn set_max_y(&mut self, value: f64) {
        self.viewport.set_max_y(value);
        self.invalidate();
    }

    /// Resize the pixel surface; the cached surface is discarded.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.invalidate();
    }

    /// Change the theme used for freshly allocated surfaces.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.invalidate();
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Append a series; it draws after (on top of) every earlier series.
    /// Adding a series does not discard the cached surface.
    pub fn add_series(&mut self, series: Series) -> SeriesId {
        let id = SeriesId(self.next_id);
        self.next_id += 1;
        self.series.push((id, series));
        id
    }

    /// Remove a series by id. Does not discard the cached surface, so pixels
    /// already drawn stay until the next invalidation.
    pub fn remove_series(&mut self, id: SeriesId) -> Option<Series> {
        let idx = self.series.iter().position(|(sid, _)| *sid == id)?;
        Some(self.series.remove(idx).1)
    }

    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.series
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s)
    }

    pub fn series_mut(&mut self, id: SeriesId) -> Option<&mut Series> {
        self.series
            .iter_mut()
            .find(|(sid, _)| *sid == id)
            .map(|(_, s)| s)
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Raise `max_y` to the mean of the series' 10 largest y values (all of
    /// them if fewer) plus 10. Other bounds are untouched.
    pub fn fit(&mut self, id: SeriesId) -> Result<(), GraphError> {
        let series = self.series(id).ok_or(GraphError::UnknownSeries(id))?;
        if series.is_empty() {
            return Err(GraphError::EmptySeries);
        }

        let mut ys: Vec<f64> = series.points().iter().map(|p| p.y).collect();
        ys.sort_by(|a, b| b.total_cmp(a));
        ys.truncate(10);
        let top_mean = ys.iter().sum::<f64>() / ys.len() as f64;

        self.set_max_y(top_mean + 10.0);
        Ok(())
    }

    /// Render every series, in insertion order, onto the current surface.
    ///
    /// When the cache is absent (first render, or after a bound/size/theme
    /// setter) a fresh surface is allocated first and prior pixel content is
    /// discarded; otherwise the draw is additive onto the existing pixels.
    pub fn render(&mut self) -> Result<&Surface, GraphError> {
        let scale = self.pixel_scale()?;

        let was_drawn = matches!(self.cache, SurfaceCache::Drawn(_));
        let mut surface = match self.cache.take() {
            Some(surface) => surface,
            None => {
                debug!(width = self.width, height = self.height, "reallocating surface");
                Surface::new(self.width, self.height, self.theme.background)
            }
        };

        for (id, series) in &self.series {
            trace!(id = ?id, points = series.len(), "drawing series");
            draw_series(series, &scale, &mut surface);
        }

        let drawn = was_drawn || !self.series.is_empty();
        Ok(self.cache.store(surface, drawn))
    }

    /// Render and write the surface as a PNG at `output_png_path`.
    pub fn render_to_png(&mut self, output_png_path: impl AsRef<Path>) -> Result<()> {
        let image = self.render()?.to_image();
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        image.save(output_png_path.as_ref())?;
        Ok(())
    }

    /// Render and encode the surface as in-memory PNG bytes.
    pub fn render_to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let surface = self.render()?;
        surface.to_png_bytes()
    }

    fn pixel_scale(&self) -> Result<PixelScale, GraphError> {
        let scale = PixelScale::new(&self.viewport, self.width, self.height);
        if scale.x_scale == 0.0 || scale.y_scale == 0.0 {
            return Err(GraphError::DegenerateViewport {
                x_span: self.viewport.x_span(),
                y_span: self.viewport.y_span(),
            });
        }
        Ok(scale)
    }

    fn invalidate(&mut self) {
        self.cache = SurfaceCache::Absent;
    }
}
