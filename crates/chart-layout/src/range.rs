// File: crates/chart-layout/src/range.rs
// Summary: Value extent of a data scope (max/min/average/range) under baseline and top-line policies.

use serde::{Deserialize, Serialize};

use crate::data::{GroupedDataSets, MultiDataSet, RangedDataSet, SingleDataSet, StackedDataSets};
use crate::types::RANGE_EPSILON;

/// Where the value axis starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    Zero,
    #[default]
    MinimumValue,
    /// The data minimum, but never above the given floor.
    MinimumWithMaximum(f64),
}

/// Where the value axis ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topline {
    #[default]
    MaximumValue,
    /// The data maximum, but never below the given ceiling.
    Maximum(f64),
}

/// Value extent of a data scope.
///
/// Implementors supply the raw extremes and sums; the provided methods apply
/// the baseline/top-line policies. Empty scopes report `0` for max and min
/// and `NaN` for the average.
pub trait ValueRange {
    /// Largest value in scope, `None` when there are no points.
    fn true_max(&self) -> Option<f64>;
    /// Smallest value in scope, `None` when there are no points.
    fn true_min(&self) -> Option<f64>;
    /// Sum of the values and how many there are.
    fn sum_count(&self) -> (f64, usize);

    fn max_value(&self) -> f64 { self.true_max().unwrap_or(0.0) }

    fn min_value(&self, baseline: Baseline) -> f64 {
        let true_min = self.true_min().unwrap_or(0.0);
        match baseline {
            Baseline::Zero => 0.0,
            Baseline::MinimumValue => true_min,
            Baseline::MinimumWithMaximum(floor) => true_min.min(floor),
        }
    }

    fn top_value(&self, topline: Topline) -> f64 {
        let max = self.max_value();
        match topline {
            Topline::MaximumValue => max,
            Topline::Maximum(ceiling) => max.max(ceiling),
        }
    }

    /// Span of the value axis. Always at least `RANGE_EPSILON`, also when a
    /// zero baseline sits above all-negative data.
    fn range(&self, baseline: Baseline, topline: Topline) -> f64 {
        (self.top_value(topline) - self.min_value(baseline)).max(0.0) + RANGE_EPSILON
    }

    /// Mean value; `NaN` for an empty scope.
    fn average(&self) -> f64 {
        let (sum, count) = self.sum_count();
        sum / count as f64
    }
}

fn fold_max(acc: Option<f64>, v: f64) -> Option<f64> { Some(acc.map_or(v, |a| a.max(v))) }
fn fold_min(acc: Option<f64>, v: f64) -> Option<f64> { Some(acc.map_or(v, |a| a.min(v))) }

impl ValueRange for SingleDataSet {
    fn true_max(&self) -> Option<f64> { self.data_points.iter().map(|p| p.value()).fold(None, fold_max) }
    fn true_min(&self) -> Option<f64> { self.data_points.iter().map(|p| p.value()).fold(None, fold_min) }
    fn sum_count(&self) -> (f64, usize) { (self.total(), self.len()) }
}

/// Max of the per-set maxima, min of the per-set minima.
fn sets_max(sets: &[SingleDataSet]) -> Option<f64> { sets.iter().filter_map(|s| s.true_max()).fold(None, fold_max) }
fn sets_min(sets: &[SingleDataSet]) -> Option<f64> { sets.iter().filter_map(|s| s.true_min()).fold(None, fold_min) }
fn sets_sum_count(sets: &[SingleDataSet]) -> (f64, usize) {
    sets.iter().map(|s| s.sum_count()).fold((0.0, 0), |(s, c), (s2, c2)| (s + s2, c + c2))
}

impl ValueRange for MultiDataSet {
    fn true_max(&self) -> Option<f64> { sets_max(&self.data_sets) }
    fn true_min(&self) -> Option<f64> { sets_min(&self.data_sets) }
    fn sum_count(&self) -> (f64, usize) { sets_sum_count(&self.data_sets) }
}

impl ValueRange for GroupedDataSets {
    fn true_max(&self) -> Option<f64> { sets_max(&self.data_sets) }
    fn true_min(&self) -> Option<f64> { sets_min(&self.data_sets) }
    fn sum_count(&self) -> (f64, usize) { sets_sum_count(&self.data_sets) }
}

/// A stack is one column grown from zero, so its extent is measured in stack
/// totals: max and min are the largest and smallest total, the average is the
/// mean total, and the axis always starts at zero whatever the baseline.
impl ValueRange for StackedDataSets {
    fn true_max(&self) -> Option<f64> { self.data_sets.iter().map(SingleDataSet::total).fold(None, fold_max) }
    fn true_min(&self) -> Option<f64> { self.data_sets.iter().map(SingleDataSet::total).fold(None, fold_min) }
    fn sum_count(&self) -> (f64, usize) {
        (self.data_sets.iter().map(SingleDataSet::total).sum(), self.data_sets.len())
    }

    fn min_value(&self, _baseline: Baseline) -> f64 { 0.0 }
}

impl ValueRange for RangedDataSet {
    fn true_max(&self) -> Option<f64> { self.data_points.iter().map(|p| p.upper_value()).fold(None, fold_max) }
    fn true_min(&self) -> Option<f64> { self.data_points.iter().map(|p| p.lower_value()).fold(None, fold_min) }
    fn sum_count(&self) -> (f64, usize) {
        (self.data_points.iter().map(|p| p.midpoint()).sum(), self.len())
    }
}
