// File: crates/chart-layout/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::geometry::Size;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Y offsets of `count` horizontal grid lines, top and bottom edges included.
pub fn horizontal_grid_lines(size: Size, count: usize) -> Vec<f64> {
    linspace(0.0, size.height.max(0.0), count)
}

/// X offsets of `count` vertical grid lines, left and right edges included.
pub fn vertical_grid_lines(size: Size, count: usize) -> Vec<f64> {
    linspace(0.0, size.width.max(0.0), count)
}
