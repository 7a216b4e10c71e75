// File: crates/chart-layout/src/types.rs
// Summary: Shared types and constants (range epsilon, default sizes, insets).

use serde::{Deserialize, Serialize};

/// Added to every computed value range so a data set of identical values
/// still has a non-zero range to divide by.
pub const RANGE_EPSILON: f64 = 0.001;

/// Default chart width in pixels.
pub const WIDTH: f64 = 1024.0;
/// Default chart height in pixels.
pub const HEIGHT: f64 = 640.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative, also when loaded from config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawInsets")]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Insets as written in config, before clamping.
#[derive(Deserialize)]
struct RawInsets {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl From<RawInsets> for Insets {
    fn from(raw: RawInsets) -> Self { Self::new(raw.left, raw.right, raw.top, raw.bottom) }
}

impl Insets {
    /// Create new insets; negative inputs are clamped to zero.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
    pub fn uniform(v: f64) -> Self { Self::new(v, v, v, v) }
}
