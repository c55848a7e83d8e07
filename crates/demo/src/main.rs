// File: crates/demo/src/main.rs
// Summary: Demo loads an XY CSV and renders line, filled, and scatter-style PNGs.

use anyhow::{Context, Result};
use graph_core::types::{HEIGHT, WIDTH};
use graph_core::{theme, DataPoint, Graph, Series};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept path from CLI or fall back to the sample filename
    let raw = std::env::args().nth(1).unwrap_or_else(|| "points.csv".to_string());
    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "dark".to_string());
    let theme = theme::find(&theme_name);

    let path = PathBuf::from(&raw);
    let points = load_xy_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} rows from {}", points.len(), path.display());

    if points.is_empty() {
        anyhow::bail!("no points loaded - check headers/delimiter.");
    }

    let (min_x, max_x) = minmax(points.iter().map(|p| p.0));

    // 1) Line with markers
    let mut graph_line = Graph::new(WIDTH, HEIGHT);
    graph_line.set_theme(theme);
    graph_line.set_min_x(min_x);
    graph_line.set_max_x(max_x);
    graph_line.set_min_y(0.0);
    let mut series = Series::new(theme.series).with_point_size(3.0);
    let rejected = fill_series(&mut series, &points);
    if rejected > 0 {
        println!("  ({rejected} rows rejected by the NaN/infinity policy)");
    }
    let id = graph_line.add_series(series);
    graph_line.fit(id).context("fit viewport to series")?;
    let out_line = out_name(&path, "line");
    graph_line.render_to_png(&out_line)?;
    println!("Wrote {}", out_line.display());

    // 2) Filled area under the same data
    let mut graph_fill = Graph::new(WIDTH, HEIGHT);
    graph_fill.set_theme(theme);
    graph_fill.set_min_x(min_x);
    graph_fill.set_max_x(max_x);
    graph_fill.set_min_y(0.0);
    let mut filled = Series::new(theme.accent)
        .with_line_thickness(2.0)
        .with_fill(theme.fill);
    fill_series(&mut filled, &points);
    let id = graph_fill.add_series(filled);
    graph_fill.fit(id).context("fit viewport to series")?;
    let out_fill = out_name(&path, "fill");
    graph_fill.render_to_png(&out_fill)?;
    println!("Wrote {}", out_fill.display());

    // 3) Big markers, hairline connection
    let mut graph_scatter = Graph::new(WIDTH, HEIGHT);
    graph_scatter.set_theme(theme);
    graph_scatter.set_min_x(min_x);
    graph_scatter.set_max_x(max_x);
    graph_scatter.set_min_y(0.0);
    let mut scatter = Series::new(theme.series).with_point_size(5.0);
    fill_series(&mut scatter, &points);
    let id = graph_scatter.add_series(scatter);
    graph_scatter.fit(id).context("fit viewport to series")?;
    let out_scatter = out_name(&path, "scatter");
    graph_scatter.render_to_png(&out_scatter)?;
    println!("Wrote {}", out_scatter.display());

    Ok(())
}

/// Add every row to the series; returns how many rows the policy rejected.
fn fill_series(series: &mut Series, points: &[(f64, f64)]) -> usize {
    let mut rejected = 0;
    for &(x, y) in points {
        if !series.add_point((x, y)) {
            println!("  rejected point {}", DataPoint::new(x, y));
            rejected += 1;
        }
    }
    rejected
}

/// Produce output file name like target/out/graph_<stem>_<suffix>.png
fn out_name(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("graph");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("graph_{stem}_{suffix}.png"));
    out
}

/// Load an XY CSV into (x, y) rows, finding columns by header name.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    // Common column names; fall back to the first two columns
    let i_x = idx(&["x", "time", "index", "t"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "close", "v"]).unwrap_or(1);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> { rec.get(i).and_then(|s| s.trim().parse::<f64>().ok()) };
        if let (Some(x), Some(y)) = (parse(i_x), parse(i_y)) {
            out.push((x, y));
        }
    }
    Ok(out)
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;
    for v in values {
        min_v = min_v.min(v);
        max_v = max_v.max(v);
    }
    (min_v, max_v)
}
