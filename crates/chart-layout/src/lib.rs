// File: crates/chart-layout/src/lib.rs
// Summary: Core library entry point; exports the data model, range/label math, coordinate mapping and touch resolution.

pub mod chart;
pub mod data;
pub mod error;
pub mod range;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod style;
pub mod topology;
pub mod mapper;
pub mod touch;
pub mod markers;
pub mod layout;

pub use chart::Chart;
pub use data::{
    DataPoint, GroupIdentity, GroupedDataSets, Id, MultiDataSet, RangedDataPoint, RangedDataSet, SingleDataSet,
    StackedDataSets, StyleRef,
};
pub use error::{LayoutError, Result};
pub use range::{Baseline, Topline, ValueRange};
pub use axis::{generate_labels, generate_labels_from_zero, AxisLabel, FixedFormatter, LabelFormat, NumberFormatter};
pub use geometry::{protected_div, Point, Rect, Size};
pub use scale::Orientation;
pub use style::ChartStyle;
pub use topology::{ChartData, Topology};
pub use mapper::{map_points, Frame, PointGeometry, StackElements};
pub use touch::{resolve, HitPoint, ResolvedHit};
pub use layout::{LayoutRequest, LayoutResult, MonospaceMeasure, TextMeasure};
pub use types::{Insets, RANGE_EPSILON};
