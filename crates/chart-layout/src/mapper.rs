// File: crates/chart-layout/src/mapper.rs
// Summary: Coordinate mapping from data indices and values to pixel points and bar rects for every topology.
// Notes:
// - All series of one chart share a single `Frame` (min/range over the whole scope),
//   so multi-series charts stay comparable.
// - Horizontal charts run the same section math along the height instead of the width.

use crate::data::{GroupedDataSets, MultiDataSet, RangedDataSet, SingleDataSet, StackedDataSets};
use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::range::ValueRange;
use crate::scale::{GroupSections, Orientation, Sections, ValueScale};
use crate::style::ChartStyle;
use crate::topology::ChartData;

/// Chart size plus the value window every point is mapped against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub size: Size,
    pub min: f64,
    pub range: f64,
    pub orientation: Orientation,
}

impl Frame {
    pub fn new(size: Size, min: f64, range: f64, orientation: Orientation) -> Self {
        Self { size, min, range, orientation }
    }

    /// Frame for `data` under the style's baseline, top line and orientation.
    pub fn for_chart(data: &ChartData, style: &ChartStyle, size: Size) -> Self {
        Self::new(
            size,
            data.min_value(style.baseline),
            data.range(style.baseline, style.topline),
            style.orientation,
        )
    }

    /// Length of the axis that carries point indices.
    pub fn index_extent(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.size.width,
            Orientation::Horizontal => self.size.height,
        }
    }

    /// Length of the axis that carries values.
    pub fn value_extent(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.size.height,
            Orientation::Horizontal => self.size.width,
        }
    }

    pub fn value_scale(&self) -> ValueScale {
        ValueScale::new(self.min, self.range, self.value_extent(), self.orientation)
    }

    /// Screen point from an index-axis offset and a value-axis offset.
    pub fn place(&self, along: f64, across: f64) -> Point {
        match self.orientation {
            Orientation::Vertical => Point::new(along, across),
            Orientation::Horizontal => Point::new(across, along),
        }
    }

    /// Inverse of [`Frame::place`]: `(index-axis, value-axis)` offsets of a screen point.
    pub fn split(&self, p: Point) -> (f64, f64) {
        match self.orientation {
            Orientation::Vertical => (p.x, p.y),
            Orientation::Horizontal => (p.y, p.x),
        }
    }

    /// Value-axis offset of a point `distance` pixels away from the chart's base
    /// (bottom edge for vertical charts, left edge for horizontal ones).
    pub fn from_base(&self, distance: f64) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.value_extent() - distance,
            Orientation::Horizontal => distance,
        }
    }

    /// Bar body centred at `along`, `thickness` wide, between two value-axis offsets.
    pub fn bar_rect(&self, along: f64, thickness: f64, from: f64, to: f64) -> Rect {
        let half = thickness * 0.5;
        Rect::from_corners(self.place(along - half, from), self.place(along + half, to))
    }
}

/// Mapped location of one data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointGeometry {
    /// Index of the point within its own data set.
    pub index: usize,
    /// Series of a multi-series chart; category slot of grouped and stacked charts.
    pub series_index: Option<usize>,
    /// Group (grouped bars) or stack (stacked bars) the point belongs to.
    pub group_index: Option<usize>,
    /// Anchor of the point: line vertex, bar top, segment or range midpoint.
    pub position: Point,
    /// Bar body; `None` for line points.
    pub bar: Option<Rect>,
}

/// Heights of the segments of one stack, measured from its base.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackElements {
    pub heights: Vec<f64>,
    /// Running sum of `heights`: the far edge of each segment.
    pub tops: Vec<f64>,
}

impl StackElements {
    /// Each segment spans its own value on `scale`, so a stack's top lands
    /// where the value axis places the stack total.
    pub fn new(set: &SingleDataSet, scale: &ValueScale) -> Self {
        let heights: Vec<f64> = set.data_points.iter().map(|p| scale.span_px(p.value())).collect();
        let tops = heights
            .iter()
            .scan(0.0, |acc, h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
        Self { heights, tops }
    }

    pub fn column_height(&self) -> f64 { self.tops.last().copied().unwrap_or(0.0) }

    /// Distance from the base to the middle of segment `k`.
    pub fn midpoint(&self, k: usize) -> f64 { self.tops[k] - self.heights[k] * 0.5 }

    /// First segment reaching beyond `distance` from the base. Linear scan:
    /// segment sizes depend on the data.
    pub fn segment_at(&self, distance: f64) -> Option<usize> {
        if distance.is_nan() || distance < 0.0 {
            return None;
        }
        self.tops.iter().position(|&top| top > distance)
    }
}

pub fn line_points(set: &SingleDataSet, frame: &Frame) -> Vec<PointGeometry> {
    series_line_points(set, frame, None)
}

pub fn bar_points(set: &SingleDataSet, frame: &Frame, bar_width: f64) -> Vec<PointGeometry> {
    series_bar_points(set, frame, bar_width, None)
}

/// Points of every series, series after series in input order.
pub fn multi_line_points(multi: &MultiDataSet, frame: &Frame) -> Vec<PointGeometry> {
    multi
        .data_sets
        .iter()
        .enumerate()
        .flat_map(|(s, set)| series_line_points(set, frame, Some(s)))
        .collect()
}

pub fn multi_bar_points(multi: &MultiDataSet, frame: &Frame, bar_width: f64) -> Vec<PointGeometry> {
    multi
        .data_sets
        .iter()
        .enumerate()
        .flat_map(|(s, set)| series_bar_points(set, frame, bar_width, Some(s)))
        .collect()
}

pub fn grouped_bar_points(
    grouped: &GroupedDataSets,
    frame: &Frame,
    spacing: f64,
    bar_width: f64,
) -> Result<Vec<PointGeometry>> {
    grouped.validate()?;
    let sections = GroupSections::new(
        frame.index_extent(),
        grouped.data_sets.len(),
        grouped.points_per_group(),
        spacing,
    );
    let scale = frame.value_scale();
    let base = scale.to_px(frame.min);
    let thickness = sections.bar_width() * bar_width;

    let mut out = Vec::with_capacity(grouped.data_sets.len() * sections.per_group);
    for (g, set) in grouped.data_sets.iter().enumerate() {
        for (i, p) in set.data_points.iter().enumerate() {
            let along = sections.position(g, i);
            let across = scale.to_px(p.value());
            out.push(PointGeometry {
                index: i,
                series_index: Some(i),
                group_index: Some(g),
                position: frame.place(along, across),
                bar: Some(frame.bar_rect(along, thickness, base, across)),
            });
        }
    }
    Ok(out)
}

/// Segments of every stack; `position` is the middle of each segment.
pub fn stacked_bar_points(
    stacked: &StackedDataSets,
    frame: &Frame,
    bar_width: f64,
) -> Result<Vec<PointGeometry>> {
    stacked.validate()?;
    let sections = Sections::bar(frame.index_extent(), stacked.data_sets.len());
    let scale = frame.value_scale();
    let thickness = sections.width() * bar_width;

    let mut out = Vec::new();
    for (s, set) in stacked.data_sets.iter().enumerate() {
        let along = sections.position(s);
        let elements = StackElements::new(set, &scale);
        for k in 0..elements.heights.len() {
            let bottom = frame.from_base(elements.tops[k] - elements.heights[k]);
            let top = frame.from_base(elements.tops[k]);
            out.push(PointGeometry {
                index: k,
                series_index: Some(k),
                group_index: Some(s),
                position: frame.place(along, frame.from_base(elements.midpoint(k))),
                bar: Some(frame.bar_rect(along, thickness, bottom, top)),
            });
        }
    }
    Ok(out)
}

/// Ranged bars span lower..upper; `position` sits on the midpoint value.
pub fn ranged_bar_points(ranged: &RangedDataSet, frame: &Frame, bar_width: f64) -> Vec<PointGeometry> {
    let sections = Sections::bar(frame.index_extent(), ranged.len());
    let scale = frame.value_scale();
    let thickness = sections.width() * bar_width;
    ranged
        .data_points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let along = sections.position(i);
            PointGeometry {
                index: i,
                series_index: None,
                group_index: None,
                position: frame.place(along, scale.to_px(p.midpoint())),
                bar: Some(frame.bar_rect(along, thickness, scale.to_px(p.lower_value()), scale.to_px(p.upper_value()))),
            }
        })
        .collect()
}

/// Map every point of `data` into `frame`.
pub fn map_points(data: &ChartData, style: &ChartStyle, frame: &Frame) -> Result<Vec<PointGeometry>> {
    if frame.size.is_degenerate() {
        tracing::debug!(width = frame.size.width, height = frame.size.height, "degenerate chart size");
    }
    let bar_width = style.bar_fraction();
    let points = match data {
        ChartData::Line(set) => line_points(set, frame),
        ChartData::Bar(set) => bar_points(set, frame, bar_width),
        ChartData::MultiLine(multi) => multi_line_points(multi, frame),
        ChartData::MultiBar(multi) => multi_bar_points(multi, frame, bar_width),
        ChartData::GroupedBar(grouped) => grouped_bar_points(grouped, frame, style.group_spacing, bar_width)?,
        ChartData::StackedBar(stacked) => stacked_bar_points(stacked, frame, bar_width)?,
        ChartData::RangedBar(ranged) => ranged_bar_points(ranged, frame, bar_width),
    };
    tracing::trace!(
        topology = ?data.topology(),
        points = points.len(),
        width = frame.size.width,
        height = frame.size.height,
        "mapped chart points"
    );
    Ok(points)
}

fn series_line_points(set: &SingleDataSet, frame: &Frame, series_index: Option<usize>) -> Vec<PointGeometry> {
    let sections = Sections::line(frame.index_extent(), set.len());
    let scale = frame.value_scale();
    set.data_points
        .iter()
        .enumerate()
        .map(|(i, p)| PointGeometry {
            index: i,
            series_index,
            group_index: None,
            position: frame.place(sections.position(i), scale.to_px(p.value())),
            bar: None,
        })
        .collect()
}

fn series_bar_points(
    set: &SingleDataSet,
    frame: &Frame,
    bar_width: f64,
    series_index: Option<usize>,
) -> Vec<PointGeometry> {
    let sections = Sections::bar(frame.index_extent(), set.len());
    let scale = frame.value_scale();
    let base = scale.to_px(frame.min);
    let thickness = sections.width() * bar_width;
    set.data_points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let along = sections.position(i);
            let across = scale.to_px(p.value());
            PointGeometry {
                index: i,
                series_index,
                group_index: None,
                position: frame.place(along, across),
                bar: Some(frame.bar_rect(along, thickness, base, across)),
            }
        })
        .collect()
}
