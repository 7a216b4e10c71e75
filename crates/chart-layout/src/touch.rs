// File: crates/chart-layout/src/touch.rs
// Summary: Pointer hit-testing: inverts the coordinate mapping to find the touched point(s).
// Notes:
// - Stateless. The caller keeps any "currently touched" state and calls `resolve`
//   on every pointer move.
// - Uses the same `Sections`/`GroupSections`/`StackElements` math as the mapper, so a
//   pointer placed on a mapped point resolves back to that point.

use crate::data::{DataPoint, GroupedDataSets, Id, MultiDataSet, RangedDataPoint, RangedDataSet, SingleDataSet, StackedDataSets};
use crate::error::Result;
use crate::geometry::Point;
use crate::mapper::{Frame, StackElements};
use crate::scale::{GroupSections, Sections};
use crate::style::ChartStyle;
use crate::topology::ChartData;

/// The point a hit refers to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitPoint<'a> {
    Value(&'a DataPoint),
    Ranged(&'a RangedDataPoint),
}

impl<'a> HitPoint<'a> {
    /// Value to show for the hit; the midpoint for ranged points.
    pub fn value(&self) -> f64 {
        match *self {
            HitPoint::Value(p) => p.value(),
            HitPoint::Ranged(p) => p.midpoint(),
        }
    }

    pub fn id(&self) -> Id {
        match *self {
            HitPoint::Value(p) => p.id(),
            HitPoint::Ranged(p) => p.id(),
        }
    }

    pub fn label(&self) -> Option<&'a str> {
        match *self {
            HitPoint::Value(p) => p.label(),
            HitPoint::Ranged(p) => p.label(),
        }
    }

    pub fn as_data_point(&self) -> Option<&'a DataPoint> {
        match *self {
            HitPoint::Value(p) => Some(p),
            HitPoint::Ranged(_) => None,
        }
    }

    pub fn as_ranged(&self) -> Option<&'a RangedDataPoint> {
        match *self {
            HitPoint::Ranged(p) => Some(p),
            HitPoint::Value(_) => None,
        }
    }
}

/// A resolved touch: which point, and where it is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedHit<'a> {
    pub point: HitPoint<'a>,
    /// Pixel location of the point (segment middle for stacks, range middle for ranged bars).
    pub location: Point,
    /// Index of the point within its data set.
    pub index: usize,
    pub series_index: Option<usize>,
    pub group_index: Option<usize>,
}

/// Find the point(s) under `pointer`. Multi-series charts yield one hit per
/// series that has a point there, in series order; other charts yield at most
/// one. A pointer outside the chart yields no hits.
pub fn resolve<'a>(
    pointer: Point,
    data: &'a ChartData,
    style: &ChartStyle,
    frame: &Frame,
) -> Result<Vec<ResolvedHit<'a>>> {
    data.validate()?;
    let (along, across) = frame.split(pointer);
    if across.is_nan() || across < 0.0 || across > frame.value_extent() {
        return Ok(Vec::new());
    }

    let hits: Vec<ResolvedHit<'a>> = match data {
        ChartData::Line(set) => resolve_line(along, set, frame, None).into_iter().collect(),
        ChartData::Bar(set) => resolve_bar(along, set, frame, None).into_iter().collect(),
        ChartData::MultiLine(multi) => resolve_multi(along, multi, frame, resolve_line),
        ChartData::MultiBar(multi) => resolve_multi(along, multi, frame, resolve_bar),
        ChartData::GroupedBar(grouped) => {
            resolve_grouped(along, grouped, frame, style.group_spacing).into_iter().collect()
        }
        ChartData::StackedBar(stacked) => {
            resolve_stacked(along, across, stacked, frame).into_iter().collect()
        }
        ChartData::RangedBar(ranged) => resolve_ranged(along, ranged, frame).into_iter().collect(),
    };

    tracing::trace!(
        topology = ?data.topology(),
        x = pointer.x,
        y = pointer.y,
        hits = hits.len(),
        "resolved pointer"
    );
    Ok(hits)
}

type SeriesResolver = for<'a> fn(f64, &'a SingleDataSet, &Frame, Option<usize>) -> Option<ResolvedHit<'a>>;

fn resolve_multi<'a>(along: f64, multi: &'a MultiDataSet, frame: &Frame, single: SeriesResolver) -> Vec<ResolvedHit<'a>> {
    multi
        .data_sets
        .iter()
        .enumerate()
        .filter_map(|(s, set)| single(along, set, frame, Some(s)))
        .collect()
}

fn resolve_line<'a>(along: f64, set: &'a SingleDataSet, frame: &Frame, series_index: Option<usize>) -> Option<ResolvedHit<'a>> {
    let sections = Sections::line(frame.index_extent(), set.len());
    resolve_in_sections(along, set, frame, sections, series_index)
}

fn resolve_bar<'a>(along: f64, set: &'a SingleDataSet, frame: &Frame, series_index: Option<usize>) -> Option<ResolvedHit<'a>> {
    let sections = Sections::bar(frame.index_extent(), set.len());
    resolve_in_sections(along, set, frame, sections, series_index)
}

fn resolve_in_sections<'a>(
    along: f64,
    set: &'a SingleDataSet,
    frame: &Frame,
    sections: Sections,
    series_index: Option<usize>,
) -> Option<ResolvedHit<'a>> {
    let index = sections.index_at(along)?;
    let point = set.data_points.get(index)?;
    let location = frame.place(sections.position(index), frame.value_scale().to_px(point.value()));
    Some(ResolvedHit { point: HitPoint::Value(point), location, index, series_index, group_index: None })
}

fn resolve_grouped<'a>(along: f64, grouped: &'a GroupedDataSets, frame: &Frame, spacing: f64) -> Option<ResolvedHit<'a>> {
    let sections = GroupSections::new(
        frame.index_extent(),
        grouped.data_sets.len(),
        grouped.points_per_group(),
        spacing,
    );
    let (group, index) = sections.index_at(along)?;
    let point = grouped.data_sets.get(group)?.data_points.get(index)?;
    let location = frame.place(sections.position(group, index), frame.value_scale().to_px(point.value()));
    Some(ResolvedHit {
        point: HitPoint::Value(point),
        location,
        index,
        series_index: Some(index),
        group_index: Some(group),
    })
}

fn resolve_stacked<'a>(
    along: f64,
    across: f64,
    stacked: &'a StackedDataSets,
    frame: &Frame,
) -> Option<ResolvedHit<'a>> {
    let sections = Sections::bar(frame.index_extent(), stacked.data_sets.len());
    let stack = sections.index_at(along)?;
    let set = stacked.data_sets.get(stack)?;
    let elements = StackElements::new(set, &frame.value_scale());
    // `from_base` is its own inverse
    let distance = frame.from_base(across);
    let segment = elements.segment_at(distance)?;
    let point = set.data_points.get(segment)?;
    let location = frame.place(sections.position(stack), frame.from_base(elements.midpoint(segment)));
    Some(ResolvedHit {
        point: HitPoint::Value(point),
        location,
        index: segment,
        series_index: Some(segment),
        group_index: Some(stack),
    })
}

fn resolve_ranged<'a>(along: f64, ranged: &'a RangedDataSet, frame: &Frame) -> Option<ResolvedHit<'a>> {
    let sections = Sections::bar(frame.index_extent(), ranged.len());
    let index = sections.index_at(along)?;
    let point = ranged.data_points.get(index)?;
    let location = frame.place(sections.position(index), frame.value_scale().to_px(point.midpoint()));
    Some(ResolvedHit { point: HitPoint::Ranged(point), location, index, series_index: None, group_index: None })
}
