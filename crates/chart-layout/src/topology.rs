// File: crates/chart-layout/src/topology.rs
// Summary: Closed set of chart topologies and the data each one carries.

use crate::data::{GroupedDataSets, MultiDataSet, RangedDataSet, SingleDataSet, StackedDataSets};
use crate::error::Result;
use crate::range::{Baseline, ValueRange};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    Line,
    MultiLine,
    Bar,
    MultiBar,
    GroupedBar,
    StackedBar,
    RangedBar,
}

impl Topology {
    /// Line topologies anchor points on section edges, bars on section centres.
    pub fn is_line(&self) -> bool { matches!(self, Topology::Line | Topology::MultiLine) }
}

/// Chart input, tagged by topology. Horizontal charts are any of these with
/// `Orientation::Horizontal` on the style.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Line(SingleDataSet),
    MultiLine(MultiDataSet),
    Bar(SingleDataSet),
    MultiBar(MultiDataSet),
    GroupedBar(GroupedDataSets),
    StackedBar(StackedDataSets),
    RangedBar(RangedDataSet),
}

impl ChartData {
    pub fn topology(&self) -> Topology {
        match self {
            ChartData::Line(_) => Topology::Line,
            ChartData::MultiLine(_) => Topology::MultiLine,
            ChartData::Bar(_) => Topology::Bar,
            ChartData::MultiBar(_) => Topology::MultiBar,
            ChartData::GroupedBar(_) => Topology::GroupedBar,
            ChartData::StackedBar(_) => Topology::StackedBar,
            ChartData::RangedBar(_) => Topology::RangedBar,
        }
    }

    /// Check shape invariants before layout. Only grouped and stacked data can fail.
    pub fn validate(&self) -> Result<()> {
        match self {
            ChartData::GroupedBar(g) => g.validate(),
            ChartData::StackedBar(s) => s.validate(),
            _ => Ok(()),
        }
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        match self {
            ChartData::Line(s) | ChartData::Bar(s) => s.len(),
            ChartData::MultiLine(m) | ChartData::MultiBar(m) => m.data_sets.iter().map(SingleDataSet::len).sum(),
            ChartData::GroupedBar(g) => g.data_sets.iter().map(SingleDataSet::len).sum(),
            ChartData::StackedBar(s) => s.data_sets.iter().map(SingleDataSet::len).sum(),
            ChartData::RangedBar(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.point_count() == 0 }

    /// Number of slots on the index axis: points for single series, the
    /// longest series for multi series, groups or stacks otherwise.
    pub fn slot_count(&self) -> usize {
        match self {
            ChartData::Line(s) | ChartData::Bar(s) => s.len(),
            ChartData::MultiLine(m) | ChartData::MultiBar(m) => {
                m.data_sets.iter().map(SingleDataSet::len).max().unwrap_or(0)
            }
            ChartData::GroupedBar(g) => g.data_sets.len(),
            ChartData::StackedBar(s) => s.data_sets.len(),
            ChartData::RangedBar(r) => r.len(),
        }
    }

    fn scope(&self) -> &dyn ValueRange {
        match self {
            ChartData::Line(s) | ChartData::Bar(s) => s,
            ChartData::MultiLine(m) | ChartData::MultiBar(m) => m,
            ChartData::GroupedBar(g) => g,
            ChartData::StackedBar(s) => s,
            ChartData::RangedBar(r) => r,
        }
    }
}

impl ValueRange for ChartData {
    fn true_max(&self) -> Option<f64> { self.scope().true_max() }
    fn true_min(&self) -> Option<f64> { self.scope().true_min() }
    fn sum_count(&self) -> (f64, usize) { self.scope().sum_count() }
    fn min_value(&self, baseline: Baseline) -> f64 { self.scope().min_value(baseline) }
}
