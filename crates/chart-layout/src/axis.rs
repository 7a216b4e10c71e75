// File: crates/chart-layout/src/axis.rs
// Summary: Value-axis label generation, label formatting hooks and label placement.

use crate::error::{LayoutError, Result};
use crate::geometry::protected_div;
use crate::range::{Baseline, Topline, ValueRange};
use crate::scale::ValueScale;

/// `count + 1` evenly spaced values starting at `min_value` and spanning `range`.
///
/// `count == 0` yields just `[min_value]`.
pub fn generate_labels(min_value: f64, range: f64, count: usize) -> Vec<f64> {
    let step = protected_div(range, count as f64);
    (0..=count).map(|i| min_value + step * i as f64).collect()
}

/// `count + 1` evenly spaced values from zero up to `max_value`, the
/// convention bar charts use.
pub fn generate_labels_from_zero(max_value: f64, count: usize) -> Vec<f64> {
    let step = if max_value.is_finite() { protected_div(max_value, count as f64) } else { 0.0 };
    (0..=count).map(|i| step * i as f64).collect()
}

/// Exactly `number_of_labels` values covering the scope's axis
/// (`number_of_labels - 1` divisions). Zero is treated as one label.
pub fn y_axis_labels<R: ValueRange + ?Sized>(
    scope: &R,
    baseline: Baseline,
    topline: Topline,
    number_of_labels: usize,
) -> Vec<f64> {
    generate_labels(
        scope.min_value(baseline),
        scope.range(baseline, topline),
        number_of_labels.saturating_sub(1),
    )
}

/// Parsed printf-style number specifier such as `"%.2f"` or `"$%.0f k"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelFormat {
    pub prefix: String,
    pub precision: usize,
    pub suffix: String,
}

impl LabelFormat {
    /// Accepts one `%f`, `%.Nf`, `%d` or `%i` conversion with optional
    /// literal text around it. `%f` means six decimals.
    pub fn parse(specifier: &str) -> Result<Self> {
        let bad = || LayoutError::LabelSpecifier(specifier.to_string());
        let start = specifier.find('%').ok_or_else(bad)?;
        let rest = &specifier[start + 1..];
        let conv_at = rest.find(|c: char| c.is_ascii_alphabetic()).ok_or_else(bad)?;
        let (body, tail) = rest.split_at(conv_at);
        let conv = tail.chars().next().ok_or_else(bad)?;
        let precision = match (conv, body) {
            ('f', "") => 6,
            ('f', b) => b.strip_prefix('.').and_then(|p| p.parse::<usize>().ok()).ok_or_else(bad)?,
            ('d' | 'i', "") => 0,
            _ => return Err(bad()),
        };
        let suffix = &tail[conv.len_utf8()..];
        if suffix.contains('%') {
            return Err(bad());
        }
        Ok(Self { prefix: specifier[..start].to_string(), precision, suffix: suffix.to_string() })
    }
}

/// Turns label values into display strings. Implement this to plug in a
/// locale-aware formatter.
pub trait NumberFormatter {
    fn format(&self, value: f64, format: &LabelFormat) -> String;
}

/// Fixed-precision formatter using `.` as decimal separator.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedFormatter;

impl NumberFormatter for FixedFormatter {
    fn format(&self, value: f64, format: &LabelFormat) -> String {
        let rounded = format!("{:.*}", format.precision, value);
        // "-0.00" reads as noise on an axis
        let text = if rounded.starts_with('-') && rounded[1..].chars().all(|c| c == '0' || c == '.') {
            rounded[1..].to_string()
        } else {
            rounded
        };
        format!("{}{}{}", format.prefix, text, format.suffix)
    }
}

pub fn format_labels(values: &[f64], format: &LabelFormat, formatter: &dyn NumberFormatter) -> Vec<String> {
    values.iter().map(|&v| formatter.format(v, format)).collect()
}

/// A value-axis label placed on the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub value: f64,
    pub text: String,
    /// Offset along the value axis (y for vertical charts, x for horizontal).
    pub position: f64,
}

pub fn place_labels(
    values: &[f64],
    scale: &ValueScale,
    format: &LabelFormat,
    formatter: &dyn NumberFormatter,
) -> Vec<AxisLabel> {
    values
        .iter()
        .map(|&value| AxisLabel { value, text: formatter.format(value, format), position: scale.to_px(value) })
        .collect()
}
