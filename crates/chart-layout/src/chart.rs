// File: crates/chart-layout/src/chart.rs
// Summary: Chart struct tying data and style to the range, label, mapping and touch pipeline.

use crate::axis::{self, AxisLabel, FixedFormatter, NumberFormatter};
use crate::error::Result;
use crate::geometry::{Point, Size};
use crate::layout::{self, LayoutRequest, LayoutResult, TextMeasure};
use crate::mapper::{self, Frame, PointGeometry};
use crate::markers;
use crate::range::ValueRange;
use crate::scale::Orientation;
use crate::style::ChartStyle;
use crate::topology::ChartData;
use crate::touch::{self, ResolvedHit};

/// Data plus layout settings. Cheap to rebuild: a data change is a new `Chart`.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub data: ChartData,
    pub style: ChartStyle,
}

impl Chart {
    pub fn new(data: ChartData) -> Self {
        Self { data, style: ChartStyle::default() }
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn min_value(&self) -> f64 { self.data.min_value(self.style.baseline) }
    pub fn max_value(&self) -> f64 { self.data.max_value() }
    pub fn range(&self) -> f64 { self.data.range(self.style.baseline, self.style.topline) }
    pub fn average(&self) -> f64 { self.data.average() }

    pub fn frame(&self, size: Size) -> Frame { Frame::for_chart(&self.data, &self.style, size) }

    /// Pixel geometry of every point for a plot area of `size`.
    pub fn points(&self, size: Size) -> Result<Vec<PointGeometry>> {
        mapper::map_points(&self.data, &self.style, &self.frame(size))
    }

    /// Point(s) under `pointer`; see [`touch::resolve`].
    pub fn resolve(&self, pointer: Point, size: Size) -> Result<Vec<ResolvedHit<'_>>> {
        touch::resolve(pointer, &self.data, &self.style, &self.frame(size))
    }

    /// `style.y_axis_label_count` values spanning the value axis.
    pub fn y_axis_values(&self) -> Vec<f64> {
        axis::y_axis_labels(&self.data, self.style.baseline, self.style.topline, self.style.y_axis_label_count)
    }

    /// Value-axis labels, formatted with the style's specifier.
    pub fn y_axis_labels(&self, formatter: &dyn NumberFormatter) -> Result<Vec<String>> {
        let format = self.style.label_format()?;
        Ok(axis::format_labels(&self.y_axis_values(), &format, formatter))
    }

    /// Value-axis labels with their offsets along the value axis.
    pub fn placed_y_axis_labels(&self, size: Size, formatter: &dyn NumberFormatter) -> Result<Vec<AxisLabel>> {
        let format = self.style.label_format()?;
        Ok(axis::place_labels(&self.y_axis_values(), &self.frame(size).value_scale(), &format, formatter))
    }

    pub fn average_marker(&self, size: Size) -> Option<f64> {
        markers::average_marker(&self.data, &self.frame(size))
    }

    pub fn x_axis_label_anchors(&self, size: Size) -> Vec<f64> {
        markers::x_axis_label_anchors(&self.data, &self.style, &self.frame(size))
    }

    /// Run the layout pass for a chart of `size` whose bottom edge carries
    /// `bottom_labels`, using the fixed formatter for the value labels.
    pub fn layout(&self, size: Size, bottom_labels: &[String], measure: &dyn TextMeasure) -> Result<LayoutResult> {
        let value_labels = self.y_axis_labels(&FixedFormatter)?;
        let horizontal = self.style.orientation == Orientation::Horizontal;
        let (leading, bottom) = if horizontal {
            (bottom_labels, value_labels.as_slice())
        } else {
            (value_labels.as_slice(), bottom_labels)
        };
        let request = LayoutRequest {
            leading_labels: leading,
            bottom_labels: bottom,
            padding: self.style.padding,
            gap: 4.0,
            ..LayoutRequest::default()
        };
        Ok(layout::layout(size, &request, measure))
    }
}
