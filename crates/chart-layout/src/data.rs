// File: crates/chart-layout/src/data.rs
// Summary: Data model for chart input: points, group identities, and the single/multi/grouped/stacked/ranged sets.
// Notes:
// - Points are immutable once built; the builder methods consume `self`.
// - Grouped and stacked points share one `GroupIdentity` per category through `Arc`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::{LayoutError, Result};

/// Global counter for generating unique data model IDs.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier, unique within the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

impl Id {
    pub fn new() -> Self { Self(NEXT_ID.fetch_add(1, Ordering::Relaxed)) }
}

impl Default for Id {
    fn default() -> Self { Self::new() }
}

/// Handle into the rendering layer's style table. The core never reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleRef(pub u64);

/// Named category shared by the points of grouped and stacked charts.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupIdentity {
    id: Id,
    title: String,
    style_ref: StyleRef,
}

impl GroupIdentity {
    pub fn new(title: impl Into<String>, style_ref: StyleRef) -> Arc<Self> {
        Arc::new(Self { id: Id::new(), title: title.into(), style_ref })
    }
    pub fn id(&self) -> Id { self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn style_ref(&self) -> StyleRef { self.style_ref }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    id: Id,
    value: f64,
    label: Option<String>,
    description: Option<String>,
    date: Option<DateTime<Utc>>,
    group: Option<Arc<GroupIdentity>>,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self { id: Id::new(), value, label: None, description: None, date: None, group: None }
    }
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
    pub fn with_group(mut self, group: &Arc<GroupIdentity>) -> Self {
        self.group = Some(Arc::clone(group));
        self
    }

    pub fn id(&self) -> Id { self.id }
    pub fn value(&self) -> f64 { self.value }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn date(&self) -> Option<DateTime<Utc>> { self.date }
    pub fn group(&self) -> Option<&Arc<GroupIdentity>> { self.group.as_ref() }
}

/// A point with an upper and a lower value, drawn as a floating bar.
/// `upper_value >= lower_value` is expected but not enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct RangedDataPoint {
    id: Id,
    upper_value: f64,
    lower_value: f64,
    label: Option<String>,
    description: Option<String>,
}

impl RangedDataPoint {
    pub fn new(upper_value: f64, lower_value: f64) -> Self {
        Self { id: Id::new(), upper_value, lower_value, label: None, description: None }
    }
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> Id { self.id }
    pub fn upper_value(&self) -> f64 { self.upper_value }
    pub fn lower_value(&self) -> f64 { self.lower_value }
    /// Value used to place the point and to report it on touch.
    pub fn midpoint(&self) -> f64 { (self.upper_value + self.lower_value) * 0.5 }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
}

/// One series of points.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleDataSet {
    pub id: Id,
    pub data_points: Vec<DataPoint>,
    pub legend_title: String,
    pub style_ref: StyleRef,
}

impl SingleDataSet {
    pub fn new(data_points: Vec<DataPoint>, legend_title: impl Into<String>) -> Self {
        Self { id: Id::new(), data_points, legend_title: legend_title.into(), style_ref: StyleRef::default() }
    }

    /// Build a set from bare values with no labels.
    pub fn from_values(values: &[f64], legend_title: impl Into<String>) -> Self {
        Self::new(values.iter().map(|&v| DataPoint::new(v)).collect(), legend_title)
    }

    pub fn with_style(mut self, style_ref: StyleRef) -> Self {
        self.style_ref = style_ref;
        self
    }

    pub fn len(&self) -> usize { self.data_points.len() }
    pub fn is_empty(&self) -> bool { self.data_points.is_empty() }

    /// Sum of all values; the height of this set when drawn as a stack.
    pub fn total(&self) -> f64 { self.data_points.iter().map(DataPoint::value).sum() }
}

/// Several independent series drawn on shared axes.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiDataSet {
    pub id: Id,
    pub data_sets: Vec<SingleDataSet>,
}

impl MultiDataSet {
    pub fn new(data_sets: Vec<SingleDataSet>) -> Self { Self { id: Id::new(), data_sets } }
}

/// Bars clustered by group. Each inner set is one group (one slot on the
/// index axis) and holds one point per category.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedDataSets {
    pub id: Id,
    pub data_sets: Vec<SingleDataSet>,
}

impl GroupedDataSets {
    pub fn new(data_sets: Vec<SingleDataSet>) -> Self { Self { id: Id::new(), data_sets } }

    /// Every group must hold the same number of points.
    pub fn validate(&self) -> Result<()> { check_lengths(&self.data_sets) }

    /// Number of points per group, taken from the first group.
    pub fn points_per_group(&self) -> usize { self.data_sets.first().map_or(0, SingleDataSet::len) }
}

/// Bars stacked on one another. Each inner set is one stack, bottom segment first.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedDataSets {
    pub id: Id,
    pub data_sets: Vec<SingleDataSet>,
}

impl StackedDataSets {
    pub fn new(data_sets: Vec<SingleDataSet>) -> Self { Self { id: Id::new(), data_sets } }

    /// Every stack must hold the same number of segments.
    pub fn validate(&self) -> Result<()> { check_lengths(&self.data_sets) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RangedDataSet {
    pub id: Id,
    pub data_points: Vec<RangedDataPoint>,
    pub legend_title: String,
    pub style_ref: StyleRef,
}

impl RangedDataSet {
    pub fn new(data_points: Vec<RangedDataPoint>, legend_title: impl Into<String>) -> Self {
        Self { id: Id::new(), data_points, legend_title: legend_title.into(), style_ref: StyleRef::default() }
    }

    /// Build a set from `(upper, lower)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)], legend_title: impl Into<String>) -> Self {
        Self::new(pairs.iter().map(|&(u, l)| RangedDataPoint::new(u, l)).collect(), legend_title)
    }

    pub fn len(&self) -> usize { self.data_points.len() }
    pub fn is_empty(&self) -> bool { self.data_points.is_empty() }
}

fn check_lengths(sets: &[SingleDataSet]) -> Result<()> {
    let Some(first) = sets.first() else { return Ok(()) };
    let expected = first.len();
    for (set_index, set) in sets.iter().enumerate().skip(1) {
        if set.len() != expected {
            tracing::debug!(set_index, expected, found = set.len(), "inconsistent series length");
            return Err(LayoutError::InconsistentSeriesLength { set_index, expected, found: set.len() });
        }
    }
    Ok(())
}
