// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value axes: the value-to-device mapping consumed by markers.

use kurbo::Rect;

use crate::anchor::RectangleEdge;
use crate::range::Range;

/// An axis that maps data values into device coordinates.
pub trait ValueAxis {
    /// The currently visible value range.
    fn range(&self) -> Range;

    /// Maps `value` to a device coordinate along the axis.
    ///
    /// For [`RectangleEdge::Top`]/[`RectangleEdge::Bottom`] the result is an x coordinate,
    /// for [`RectangleEdge::Left`]/[`RectangleEdge::Right`] it is a y coordinate. The
    /// mapping may be decreasing, so callers must not assume `map(a) < map(b)` for `a < b`.
    fn value_to_device(&self, value: f64, data_area: Rect, edge: RectangleEdge) -> f64;
}

/// A linear numeric axis.
///
/// Horizontal edges map `lower -> min_x` and `upper -> max_x`; vertical edges map
/// `lower -> max_y` and `upper -> min_y` so values grow upward on screen. Inverting the
/// axis swaps both.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumberAxis {
    range: Range,
    inverted: bool,
}

impl NumberAxis {
    /// Creates a non-inverted axis showing `range`.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            inverted: false,
        }
    }

    /// Sets whether the axis runs in the opposite direction.
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Returns `true` if the axis is inverted.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Replaces the visible range.
    pub fn set_range(&mut self, range: Range) {
        self.range = range;
    }

    fn device_span(&self, data_area: Rect, edge: RectangleEdge) -> (f64, f64) {
        let (r0, r1) = if edge.is_top_or_bottom() {
            (data_area.min_x(), data_area.max_x())
        } else {
            (data_area.max_y(), data_area.min_y())
        };
        if self.inverted { (r1, r0) } else { (r0, r1) }
    }
}

impl ValueAxis for NumberAxis {
    fn range(&self) -> Range {
        self.range
    }

    fn value_to_device(&self, value: f64, data_area: Rect, edge: RectangleEdge) -> f64 {
        let (r0, r1) = self.device_span(data_area, edge);
        let denom = self.range.length();
        if denom == 0.0 {
            return r0;
        }
        let t = (value - self.range.lower()) / denom;
        r0 + t * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const AREA: Rect = Rect::new(0.0, 100.0, 400.0, 500.0);

    #[test]
    fn vertical_edges_map_upward() {
        let axis = NumberAxis::new(Range::new(0.0, 100.0));
        assert_eq!(axis.value_to_device(0.0, AREA, RectangleEdge::Left), 500.0);
        assert_eq!(axis.value_to_device(100.0, AREA, RectangleEdge::Left), 100.0);
        assert_eq!(axis.value_to_device(20.0, AREA, RectangleEdge::Right), 420.0);
    }

    #[test]
    fn horizontal_edges_map_rightward_unless_inverted() {
        let axis = NumberAxis::new(Range::new(0.0, 100.0));
        assert_eq!(axis.value_to_device(25.0, AREA, RectangleEdge::Bottom), 100.0);

        let inverted = axis.with_inverted(true);
        assert!(inverted.is_inverted());
        assert_eq!(inverted.value_to_device(25.0, AREA, RectangleEdge::Top), 300.0);
    }

    #[test]
    fn inverted_vertical_axis_maps_downward() {
        let axis = NumberAxis::new(Range::new(-50.0, 50.0)).with_inverted(true);
        assert_eq!(axis.value_to_device(-50.0, AREA, RectangleEdge::Left), 100.0);
        assert_eq!(axis.value_to_device(0.0, AREA, RectangleEdge::Left), 300.0);
        assert_eq!(axis.value_to_device(50.0, AREA, RectangleEdge::Left), 500.0);
    }

    #[test]
    fn empty_range_maps_to_span_start() {
        let axis = NumberAxis::new(Range::new(5.0, 5.0));
        assert_eq!(axis.value_to_device(5.0, AREA, RectangleEdge::Bottom), 0.0);
        assert_eq!(axis.value_to_device(9.0, AREA, RectangleEdge::Left), 500.0);
    }
}
