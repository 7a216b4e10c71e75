// File: crates/chart-layout/src/style.rs
// Summary: Chart-level layout configuration (axis policies, orientation, bar sizing, label settings).

use serde::{Deserialize, Serialize};

use crate::axis::LabelFormat;
use crate::error::{LayoutError, Result};
use crate::range::{Baseline, Topline};
use crate::scale::Orientation;
use crate::types::Insets;

/// Layout settings of a chart. Missing fields in JSON take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub baseline: Baseline,
    pub topline: Topline,
    pub orientation: Orientation,
    /// Gap between groups of a grouped bar chart, in pixels.
    pub group_spacing: f64,
    /// Bar thickness as a fraction of its section (0..=1).
    pub bar_width: f64,
    /// How many labels the value axis shows, both ends included.
    pub y_axis_label_count: usize,
    /// printf-style precision specifier for axis labels, e.g. `"%.2f"`.
    pub label_specifier: String,
    /// Space kept free around the chart by the layout pass.
    pub padding: Insets,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            baseline: Baseline::MinimumValue,
            topline: Topline::MaximumValue,
            orientation: Orientation::Vertical,
            group_spacing: 0.0,
            bar_width: 0.7,
            y_axis_label_count: 3,
            label_specifier: "%.0f".to_string(),
            padding: Insets::uniform(8.0),
        }
    }
}

impl ChartStyle {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| LayoutError::Config(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LayoutError::Config(e.to_string()))
    }

    pub fn label_format(&self) -> Result<LabelFormat> { LabelFormat::parse(&self.label_specifier) }

    /// `bar_width` clamped into `0..=1`.
    pub fn bar_fraction(&self) -> f64 {
        if self.bar_width.is_finite() { self.bar_width.clamp(0.0, 1.0) } else { 1.0 }
    }
}
