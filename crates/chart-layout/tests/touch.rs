// File: crates/chart-layout/tests/touch.rs
// Purpose: Pointer resolution for every topology, including round trips from mapped points.

use chart_layout::{
    map_points, resolve, Baseline, ChartData, ChartStyle, Frame, GroupedDataSets, HitPoint, LayoutError,
    MultiDataSet, Orientation, Point, RangedDataSet, SingleDataSet, Size, StackedDataSets,
};

fn sales() -> SingleDataSet { SingleDataSet::from_values(&[10.0, 40.0, 30.0, 60.0], "sales") }

fn zero_based() -> ChartStyle { ChartStyle { baseline: Baseline::Zero, ..ChartStyle::default() } }

fn horizontal() -> ChartStyle { ChartStyle { orientation: Orientation::Horizontal, ..zero_based() } }

/// Indices of the hits at `(x, y)` as `(group, index)` pairs.
fn hits_at(data: &ChartData, style: &ChartStyle, size: Size, x: f64, y: f64) -> Vec<(Option<usize>, usize)> {
    let frame = Frame::for_chart(data, style, size);
    resolve(Point::new(x, y), data, style, &frame)
        .unwrap()
        .iter()
        .map(|h| (h.group_index, h.index))
        .collect()
}

/// Every mapped point resolves back to itself. A line vertex on the far edge
/// of the index axis is outside the half-open chart, so it is touched from
/// just inside.
fn assert_round_trip(data: &ChartData, style: &ChartStyle, size: Size) {
    let frame = Frame::for_chart(data, style, size);
    let points = map_points(data, style, &frame).unwrap();
    assert!(!points.is_empty());
    for p in &points {
        let (along, across) = frame.split(p.position);
        let pointer = if along >= frame.index_extent() { frame.place(along - 1e-6, across) } else { p.position };
        let hits = resolve(pointer, data, style, &frame).unwrap();
        let found = hits.iter().any(|h| {
            h.index == p.index
                && h.group_index == p.group_index
                && h.series_index == p.series_index
                && (h.location.x - p.position.x).abs() < 1e-9
                && (h.location.y - p.position.y).abs() < 1e-9
        });
        assert!(found, "{:?} did not resolve back, got {hits:?}", data.topology());
    }
}

fn stacks() -> StackedDataSets {
    StackedDataSets::new(vec![
        SingleDataSet::from_values(&[2.0, 20.0, 30.0, 40.0], "q1"),
        SingleDataSet::from_values(&[10.0, 10.0, 10.0, 10.0], "q2"),
    ])
}

fn grouped() -> GroupedDataSets {
    GroupedDataSets::new(
        (0..4)
            .map(|g| SingleDataSet::from_values(&[10.0, 20.0 + g as f64, 30.0, 40.0], format!("g{g}")))
            .collect(),
    )
}

fn every_topology() -> Vec<ChartData> {
    vec![
        ChartData::Line(sales()),
        ChartData::Bar(sales()),
        ChartData::MultiLine(MultiDataSet::new(vec![
            sales(),
            SingleDataSet::from_values(&[5.0, 15.0, 25.0], "short"),
        ])),
        ChartData::MultiBar(MultiDataSet::new(vec![sales(), SingleDataSet::from_values(&[1.0, 2.0], "short")])),
        ChartData::GroupedBar(grouped()),
        ChartData::StackedBar(stacks()),
        ChartData::RangedBar(RangedDataSet::from_pairs(&[(30.0, 10.0), (50.0, 20.0), (45.0, 44.0)], "r")),
    ]
}

#[test]
fn mapped_points_resolve_back_vertically() {
    let style = ChartStyle { group_spacing: 10.0, ..zero_based() };
    for data in every_topology() {
        assert_round_trip(&data, &style, Size::new(100.0, 100.0));
        assert_round_trip(&data, &ChartStyle::default(), Size::new(321.0, 77.0));
    }
}

#[test]
fn mapped_points_resolve_back_horizontally() {
    let style = ChartStyle { group_spacing: 6.0, ..horizontal() };
    for data in every_topology() {
        assert_round_trip(&data, &style, Size::new(150.0, 240.0));
    }
}

#[test]
fn bar_touch_picks_the_section() {
    let data = ChartData::Bar(sales());
    let size = Size::new(100.0, 100.0);
    let style = zero_based();
    assert_eq!(hits_at(&data, &style, size, 0.0, 50.0), vec![(None, 0)]);
    assert_eq!(hits_at(&data, &style, size, 24.9, 50.0), vec![(None, 0)]);
    assert_eq!(hits_at(&data, &style, size, 25.0, 50.0), vec![(None, 1)]);
    assert_eq!(hits_at(&data, &style, size, 99.999, 50.0), vec![(None, 3)]);
    assert!(hits_at(&data, &style, size, 100.0, 50.0).is_empty());
    assert!(hits_at(&data, &style, size, -0.1, 50.0).is_empty());
}

#[test]
fn line_touch_picks_the_nearest_vertex() {
    let data = ChartData::Line(sales());
    let size = Size::new(100.0, 100.0);
    let style = ChartStyle::default();
    // vertices at 0, 33.3, 66.7 and 100; switch-over halfway between
    assert_eq!(hits_at(&data, &style, size, 16.0, 50.0), vec![(None, 0)]);
    assert_eq!(hits_at(&data, &style, size, 17.0, 50.0), vec![(None, 1)]);
    assert_eq!(hits_at(&data, &style, size, 99.9, 50.0), vec![(None, 3)]);
    assert!(hits_at(&data, &style, size, -1.0, 50.0).is_empty());
    assert!(hits_at(&data, &style, size, 100.5, 50.0).is_empty());
}

#[test]
fn line_touch_stops_at_the_right_edge() {
    let data = ChartData::Line(SingleDataSet::from_values(&[1.0, 2.0, 3.0], "edge"));
    let size = Size::new(100.0, 100.0);
    let style = ChartStyle::default();
    // the last vertex is drawn on x == width but the chart ends before it
    assert!(hits_at(&data, &style, size, 100.0, 50.0).is_empty());
    assert_eq!(hits_at(&data, &style, size, 75.0, 50.0), vec![(None, 2)]);
    assert_eq!(hits_at(&data, &style, size, 99.999, 50.0), vec![(None, 2)]);

    let style = ChartStyle { orientation: Orientation::Horizontal, ..style };
    assert!(hits_at(&data, &style, size, 50.0, 100.0).is_empty());
    assert_eq!(hits_at(&data, &style, size, 50.0, 99.999), vec![(None, 2)]);
}

#[test]
fn single_point_line_takes_the_whole_width() {
    let data = ChartData::Line(SingleDataSet::from_values(&[3.0], "one"));
    let size = Size::new(80.0, 40.0);
    for x in [0.0, 40.0, 79.9] {
        assert_eq!(hits_at(&data, &ChartStyle::default(), size, x, 20.0), vec![(None, 0)]);
    }
    assert!(hits_at(&data, &ChartStyle::default(), size, 80.0, 20.0).is_empty());
}

#[test]
fn pointer_off_the_value_axis_misses() {
    let data = ChartData::Bar(sales());
    let size = Size::new(100.0, 100.0);
    assert!(hits_at(&data, &zero_based(), size, 10.0, -1.0).is_empty());
    assert!(hits_at(&data, &zero_based(), size, 10.0, 100.5).is_empty());
    assert!(hits_at(&data, &zero_based(), size, 10.0, f64::NAN).is_empty());
    assert!(hits_at(&data, &zero_based(), size, f64::NAN, 10.0).is_empty());
}

#[test]
fn horizontal_touch_uses_y_for_the_index() {
    let data = ChartData::Bar(sales());
    let size = Size::new(100.0, 200.0);
    let style = horizontal();
    assert_eq!(hits_at(&data, &style, size, 10.0, 10.0), vec![(None, 0)]);
    assert_eq!(hits_at(&data, &style, size, 10.0, 199.0), vec![(None, 3)]);
    assert!(hits_at(&data, &style, size, 10.0, 200.0).is_empty());
    assert!(hits_at(&data, &style, size, 10.0, -1.0).is_empty());
    assert!(hits_at(&data, &style, size, 101.0, 10.0).is_empty());
}

#[test]
fn multi_series_hits_come_in_series_order() {
    let data = ChartData::MultiBar(MultiDataSet::new(vec![
        sales(),
        SingleDataSet::from_values(&[1.0, 2.0, 3.0, 4.0], "other"),
    ]));
    let frame = Frame::for_chart(&data, &zero_based(), Size::new(100.0, 100.0));
    let hits = resolve(Point::new(60.0, 50.0), &data, &zero_based(), &frame).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].series_index, Some(0));
    assert_eq!(hits[1].series_index, Some(1));
    assert_eq!(hits[0].point.value(), 30.0);
    assert_eq!(hits[1].point.value(), 3.0);
}

#[test]
fn shorter_series_drop_out_of_multi_hits() {
    let data = ChartData::MultiBar(MultiDataSet::new(vec![sales(), SingleDataSet::from_values(&[1.0, 2.0], "short")]));
    let frame = Frame::for_chart(&data, &zero_based(), Size::new(100.0, 100.0));
    // the short series has two 50px sections; x = 90 is its second
    let hits = resolve(Point::new(90.0, 50.0), &data, &zero_based(), &frame).unwrap();
    assert_eq!(hits.iter().map(|h| (h.series_index, h.index)).collect::<Vec<_>>(), vec![(Some(0), 3), (Some(1), 1)]);
}

#[test]
fn grouped_touch_skips_the_gaps() {
    let data = ChartData::GroupedBar(grouped());
    let size = Size::new(100.0, 100.0);
    let style = ChartStyle { group_spacing: 10.0, ..zero_based() };
    assert_eq!(hits_at(&data, &style, size, 0.0, 25.0), vec![(Some(0), 0)]);
    assert_eq!(hits_at(&data, &style, size, 30.0, 25.0), vec![(Some(1), 0)]);
    assert_eq!(hits_at(&data, &style, size, 99.0, 25.0), vec![(Some(3), 3)]);
    // gaps after groups 0 and 1
    assert!(hits_at(&data, &style, size, 26.0, 25.0).is_empty());
    assert!(hits_at(&data, &style, size, 50.0, 25.0).is_empty());
}

#[test]
fn grouped_hit_reports_the_group_identity_of_the_point() {
    let data = ChartData::GroupedBar(grouped());
    let style = ChartStyle { group_spacing: 10.0, ..zero_based() };
    let frame = Frame::for_chart(&data, &style, Size::new(100.0, 100.0));
    let hits = resolve(Point::new(30.0 + 4.375, 25.0), &data, &style, &frame).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].point.value(), 21.0);
    assert_eq!(hits[0].series_index, Some(1));
}

#[test]
fn stacked_touch_walks_the_segments() {
    let data = ChartData::StackedBar(stacks());
    let size = Size::new(100.0, 100.0);
    let style = zero_based();
    // stack 0 segment tops: 2.2, 23.9, 56.5, 100
    assert_eq!(hits_at(&data, &style, size, 5.0, 99.0), vec![(Some(0), 0)]);
    assert_eq!(hits_at(&data, &style, size, 5.0, 95.0), vec![(Some(0), 1)]);
    assert_eq!(hits_at(&data, &style, size, 5.0, 1.0), vec![(Some(0), 3)]);
    // stack 1 is 43.5px tall
    assert_eq!(hits_at(&data, &style, size, 75.0, 60.0), vec![(Some(1), 3)]);
    assert!(hits_at(&data, &style, size, 75.0, 50.0).is_empty());
}

#[test]
fn stacked_touch_in_a_horizontal_chart() {
    let data = ChartData::StackedBar(stacks());
    let size = Size::new(100.0, 100.0);
    let style = horizontal();
    assert_eq!(hits_at(&data, &style, size, 1.0, 5.0), vec![(Some(0), 0)]);
    assert_eq!(hits_at(&data, &style, size, 5.0, 5.0), vec![(Some(0), 1)]);
    assert!(hits_at(&data, &style, size, 50.0, 75.0).is_empty());
}

#[test]
fn ranged_hit_reports_the_midpoint() {
    let data = ChartData::RangedBar(RangedDataSet::from_pairs(&[(30.0, 10.0), (50.0, 20.0)], "r"));
    let frame = Frame::for_chart(&data, &ChartStyle::default(), Size::new(100.0, 100.0));
    let hits = resolve(Point::new(80.0, 10.0), &data, &ChartStyle::default(), &frame).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 1);
    assert_eq!(hits[0].point.value(), 35.0);
    let ranged = hits[0].point.as_ranged().unwrap();
    assert_eq!((ranged.upper_value(), ranged.lower_value()), (50.0, 20.0));
    assert!(hits[0].point.as_data_point().is_none());
}

#[test]
fn hit_carries_the_point_identity() {
    let set = SingleDataSet::new(
        vec![
            chart_layout::DataPoint::new(1.0).with_label("Mon"),
            chart_layout::DataPoint::new(2.0).with_label("Tue"),
        ],
        "days",
    );
    let tuesday = set.data_points[1].id();
    let data = ChartData::Bar(set);
    let frame = Frame::for_chart(&data, &ChartStyle::default(), Size::new(100.0, 100.0));
    let hits = resolve(Point::new(75.0, 50.0), &data, &ChartStyle::default(), &frame).unwrap();
    assert_eq!(hits[0].point.id(), tuesday);
    assert_eq!(hits[0].point.label(), Some("Tue"));
    assert!(matches!(hits[0].point, HitPoint::Value(_)));
}

#[test]
fn empty_data_has_nothing_to_touch() {
    let data = ChartData::Line(SingleDataSet::from_values(&[], "empty"));
    assert!(hits_at(&data, &ChartStyle::default(), Size::new(100.0, 100.0), 50.0, 50.0).is_empty());
    let data = ChartData::StackedBar(StackedDataSets::new(Vec::new()));
    assert!(hits_at(&data, &ChartStyle::default(), Size::new(100.0, 100.0), 50.0, 50.0).is_empty());
}

#[test]
fn ragged_groups_fail_to_resolve() {
    let data = ChartData::GroupedBar(GroupedDataSets::new(vec![
        SingleDataSet::from_values(&[1.0, 2.0], "a"),
        SingleDataSet::from_values(&[1.0], "b"),
    ]));
    let frame = Frame::for_chart(&data, &ChartStyle::default(), Size::new(100.0, 100.0));
    let err = resolve(Point::new(10.0, 10.0), &data, &ChartStyle::default(), &frame).unwrap_err();
    assert_eq!(err, LayoutError::InconsistentSeriesLength { set_index: 1, expected: 2, found: 1 });
}
