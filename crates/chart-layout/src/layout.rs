// File: crates/chart-layout/src/layout.rs
// Summary: Single synchronous layout pass: measures axis labels and titles, returns insets and the plot rect.

use crate::geometry::{Rect, Size};
use crate::types::Insets;

/// Measures rendered text. Supplied by the rendering layer, which owns fonts.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Size;
}

/// Fixed advance per character; good enough for monospaced fonts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    pub char_width: f64,
    pub line_height: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self { Self { char_width: 7.0, line_height: 14.0 } }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> Size {
        Size::new(text.chars().count() as f64 * self.char_width, self.line_height)
    }
}

/// Everything placed around the plot area.
#[derive(Clone, Debug, Default)]
pub struct LayoutRequest<'a> {
    /// Labels stacked along the left edge (values for vertical charts, categories for horizontal).
    pub leading_labels: &'a [String],
    /// Labels along the bottom edge.
    pub bottom_labels: &'a [String],
    /// Title drawn rotated beside the leading labels.
    pub leading_title: Option<&'a str>,
    pub bottom_title: Option<&'a str>,
    pub padding: Insets,
    /// Space between labels and the plot, and between labels and titles.
    pub gap: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutResult {
    pub insets: Insets,
    /// Area left for the data, in the coordinates of the full chart.
    pub plot: Rect,
}

/// Compute insets so every label and title fits, in one pass.
///
/// Leading labels are centred on their ticks, so half a label height is kept
/// free above the plot; bottom labels are centred too, so half the last
/// label's width is kept free on the right.
pub fn layout(size: Size, request: &LayoutRequest<'_>, measure: &dyn TextMeasure) -> LayoutResult {
    let widest = |labels: &[String]| labels.iter().map(|l| measure.measure(l).width).fold(0.0, f64::max);
    let tallest = |labels: &[String]| labels.iter().map(|l| measure.measure(l).height).fold(0.0, f64::max);
    let gap = request.gap.max(0.0);
    let pad = request.padding;

    let mut left = pad.left;
    if !request.leading_labels.is_empty() {
        left += widest(request.leading_labels) + gap;
    }
    if let Some(title) = request.leading_title {
        // rotated 90 degrees, so its height takes horizontal space
        left += measure.measure(title).height + gap;
    }

    let mut bottom = pad.bottom;
    if !request.bottom_labels.is_empty() {
        bottom += tallest(request.bottom_labels) + gap;
    }
    if let Some(title) = request.bottom_title {
        bottom += measure.measure(title).height + gap;
    }

    let top = pad.top + tallest(request.leading_labels) * 0.5;
    let right = pad.right + request.bottom_labels.last().map_or(0.0, |l| measure.measure(l).width * 0.5);

    let insets = Insets::new(left, right, top, bottom);
    let plot_right = (size.width - insets.right).max(insets.left);
    let plot_bottom = (size.height - insets.bottom).max(insets.top);
    let plot = Rect::from_ltrb(insets.left, insets.top, plot_right, plot_bottom);
    tracing::trace!(?insets, plot_width = plot.width(), plot_height = plot.height(), "layout pass");
    LayoutResult { insets, plot }
}
