// File: crates/chart-layout/src/scale.rs
// Summary: Value-axis and index-axis transforms shared by the coordinate mapper and the touch resolver.

use serde::{Deserialize, Serialize};

use crate::geometry::protected_div;

/// Which screen axis carries the data values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Values on Y (up is larger), indices on X from the left.
    #[default]
    Vertical,
    /// Values on X (right is larger), indices on Y from the top.
    Horizontal,
}

/// Linear value scale mapping `[min, min + range]` onto `extent` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub min: f64,
    pub range: f64,
    pub extent: f64,
    pub orientation: Orientation,
}

impl ValueScale {
    pub fn new(min: f64, range: f64, extent: f64, orientation: Orientation) -> Self {
        Self { min, range, extent, orientation }
    }

    /// Pixel offset of `value` along the value axis.
    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        let offset = self.span_px(value - self.min);
        match self.orientation {
            Orientation::Vertical => self.extent - offset,
            Orientation::Horizontal => offset,
        }
    }

    /// Value under pixel offset `px`.
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let offset = match self.orientation {
            Orientation::Vertical => self.extent - px,
            Orientation::Horizontal => px,
        };
        self.min + protected_div(offset, self.extent) * self.range
    }

    /// Length in pixels of a span of values.
    #[inline]
    pub fn span_px(&self, span: f64) -> f64 {
        protected_div(span, self.range) * self.extent
    }
}

/// Where a point sits within its section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Points sit on section boundaries: `count - 1` sections, first point at 0, last at `extent`.
    Edge,
    /// Points sit in the middle of `count` equal sections.
    Center,
}

/// Equal subdivision of the index axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sections {
    pub extent: f64,
    pub count: usize,
    pub anchor: Anchor,
}

impl Sections {
    pub fn line(extent: f64, count: usize) -> Self { Self { extent, count, anchor: Anchor::Edge } }
    pub fn bar(extent: f64, count: usize) -> Self { Self { extent, count, anchor: Anchor::Center } }

    pub fn width(&self) -> f64 {
        match self.anchor {
            Anchor::Edge => protected_div(self.extent, self.count.saturating_sub(1) as f64),
            Anchor::Center => protected_div(self.extent, self.count as f64),
        }
    }

    /// Pixel offset of point `index` along the index axis.
    pub fn position(&self, index: usize) -> f64 {
        let w = self.width();
        match self.anchor {
            Anchor::Edge => index as f64 * w,
            Anchor::Center => index as f64 * w + w * 0.5,
        }
    }

    /// Index of the point nearest to `px`, or `None` outside the axis.
    ///
    /// The axis is half-open: `px` must lie in `[0, extent)`. Edge-anchored
    /// points pick the nearest point (half-section offset), so the last line
    /// point owns `[extent - w/2, extent)`. Center-anchored points pick the
    /// section containing `px`.
    pub fn index_at(&self, px: f64) -> Option<usize> {
        if self.count == 0 || px.is_nan() || px < 0.0 || px >= self.extent {
            return None;
        }
        let w = self.width();
        let raw = match self.anchor {
            Anchor::Edge => {
                if self.count == 1 {
                    return Some(0);
                }
                if w <= 0.0 {
                    return None;
                }
                ((px + w * 0.5) / w).floor()
            }
            Anchor::Center => {
                if w <= 0.0 {
                    return None;
                }
                (px / w).floor()
            }
        };
        if raw < 0.0 || raw >= self.count as f64 { None } else { Some(raw as usize) }
    }
}

/// Index axis of a grouped bar chart: `groups` slots separated by `spacing`
/// pixels, each holding `per_group` bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupSections {
    pub extent: f64,
    pub groups: usize,
    pub per_group: usize,
    pub spacing: f64,
}

impl GroupSections {
    pub fn new(extent: f64, groups: usize, per_group: usize, spacing: f64) -> Self {
        Self { extent, groups, per_group, spacing: spacing.max(0.0) }
    }

    /// Width of a slot before spacing is taken out.
    pub fn super_width(&self) -> f64 { protected_div(self.extent, self.groups as f64) }

    /// Share of the total spacing removed from each slot.
    pub fn compensation(&self) -> f64 {
        protected_div(self.spacing * self.groups.saturating_sub(1) as f64, self.groups as f64)
    }

    /// Width of one group's bars, spacing excluded.
    pub fn section_width(&self) -> f64 { (self.super_width() - self.compensation()).max(0.0) }

    pub fn bar_width(&self) -> f64 { protected_div(self.section_width(), self.per_group as f64) }

    pub fn group_start(&self, group: usize) -> f64 {
        group as f64 * (self.section_width() + self.spacing)
    }

    pub fn group_center(&self, group: usize) -> f64 {
        self.group_start(group) + self.section_width() * 0.5
    }

    /// Pixel offset of bar `index` within `group`.
    pub fn position(&self, group: usize, index: usize) -> f64 {
        let w = self.bar_width();
        self.group_start(group) + index as f64 * w + w * 0.5
    }

    /// `(group, index)` of the bar under `px`. Pixels in the gap between
    /// groups resolve to nothing.
    pub fn index_at(&self, px: f64) -> Option<(usize, usize)> {
        if px.is_nan() || px < 0.0 || px >= self.extent {
            return None;
        }
        let super_width = self.super_width();
        let section = self.section_width();
        if super_width <= 0.0 || section <= 0.0 {
            return None;
        }
        let super_index = (px / super_width).floor();
        let index = ((px - super_index * self.spacing) / section).floor();
        if index != super_index || super_index >= self.groups as f64 {
            return None;
        }
        let group = super_index as usize;
        let bar = self.bar_width();
        if bar <= 0.0 {
            return None;
        }
        let sub = ((px - self.group_start(group)) / bar).floor();
        if sub < 0.0 || sub >= self.per_group as f64 {
            return None;
        }
        Some((group, sub as usize))
    }
}
