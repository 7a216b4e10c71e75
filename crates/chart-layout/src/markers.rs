// File: crates/chart-layout/src/markers.rs
// Summary: Positions of chart markers: average line, point-of-interest line, on-line touch indicator, X-axis label anchors.

use crate::geometry::{protected_div, Point};
use crate::mapper::{Frame, PointGeometry};
use crate::range::ValueRange;
use crate::scale::{GroupSections, Sections};
use crate::style::ChartStyle;
use crate::topology::ChartData;

/// Value-axis offset of a marker line drawn at `value`.
pub fn poi_marker(value: f64, frame: &Frame) -> f64 { frame.value_scale().to_px(value) }

/// Value-axis offset of the average line, `None` when there is nothing to average.
pub fn average_marker(data: &ChartData, frame: &Frame) -> Option<f64> {
    let average = data.average();
    average.is_finite().then(|| poi_marker(average, frame))
}

/// Point on a line series under `pointer`, linearly interpolated between the
/// two neighbouring vertices. Pointers before the first or past the last
/// vertex stick to that vertex.
///
/// `points` must be the mapped points of one series, in index order.
pub fn line_indicator(pointer: Point, points: &[PointGeometry], frame: &Frame) -> Option<Point> {
    let (along, _) = frame.split(pointer);
    let first = points.first()?.position;
    let last = points.last()?.position;
    if along <= frame.split(first).0 {
        return Some(first);
    }
    if along >= frame.split(last).0 {
        return Some(last);
    }
    points.windows(2).find_map(|pair| {
        let (a_along, a_across) = frame.split(pair[0].position);
        let (b_along, b_across) = frame.split(pair[1].position);
        (along >= a_along && along <= b_along).then(|| {
            let t = protected_div(along - a_along, b_along - a_along);
            frame.place(along, a_across + (b_across - a_across) * t)
        })
    })
}

/// Index-axis offsets where per-slot labels go: vertices for line charts,
/// section centres for bar charts, group centres for grouped bars.
pub fn x_axis_label_anchors(data: &ChartData, style: &ChartStyle, frame: &Frame) -> Vec<f64> {
    let extent = frame.index_extent();
    let slots = data.slot_count();
    match data {
        ChartData::Line(_) | ChartData::MultiLine(_) => {
            let sections = Sections::line(extent, slots);
            (0..slots).map(|i| sections.position(i)).collect()
        }
        ChartData::GroupedBar(grouped) => {
            let sections = GroupSections::new(extent, slots, grouped.points_per_group(), style.group_spacing);
            (0..slots).map(|g| sections.group_center(g)).collect()
        }
        _ => {
            let sections = Sections::bar(extent, slots);
            (0..slots).map(|i| sections.position(i)).collect()
        }
    }
}
