// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal XY plot that owns interval markers and draws them per axis.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::anchor::RectangleEdge;
use crate::axis::NumberAxis;
use crate::interval_marker::IntervalMarker;
use crate::orientation::{AxisRole, Plot, PlotOrientation};
use crate::surface::RenderSurface;

/// An XY plot with a domain axis, a range axis, and markers attached to each.
///
/// Domain markers prefer a [`PlotOrientation::Horizontal`] plot and range markers a
/// [`PlotOrientation::Vertical`] one, so in the default vertical orientation domain markers are
/// vertical bands and range markers horizontal bands. Markers are drawn in insertion order,
/// domain markers first.
#[derive(Clone, Debug)]
pub struct MarkerPlot {
    orientation: PlotOrientation,
    domain_axis: NumberAxis,
    range_axis: NumberAxis,
    domain_markers: Vec<IntervalMarker>,
    range_markers: Vec<IntervalMarker>,
}

impl MarkerPlot {
    /// Creates a vertical plot with no markers.
    pub fn new(domain_axis: NumberAxis, range_axis: NumberAxis) -> Self {
        Self {
            orientation: PlotOrientation::Vertical,
            domain_axis,
            range_axis,
            domain_markers: Vec::new(),
            range_markers: Vec::new(),
        }
    }

    /// Sets the plot orientation.
    pub fn with_orientation(mut self, orientation: PlotOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the plot orientation in place.
    pub fn set_orientation(&mut self, orientation: PlotOrientation) {
        self.orientation = orientation;
    }

    /// The domain axis.
    pub fn domain_axis(&self) -> &NumberAxis {
        &self.domain_axis
    }

    /// Mutable access to the domain axis.
    pub fn domain_axis_mut(&mut self) -> &mut NumberAxis {
        &mut self.domain_axis
    }

    /// The range axis.
    pub fn range_axis(&self) -> &NumberAxis {
        &self.range_axis
    }

    /// Mutable access to the range axis.
    pub fn range_axis_mut(&mut self) -> &mut NumberAxis {
        &mut self.range_axis
    }

    /// The data-area edge the domain axis is attached to.
    pub fn domain_axis_edge(&self) -> RectangleEdge {
        match self.orientation {
            PlotOrientation::Vertical => RectangleEdge::Bottom,
            PlotOrientation::Horizontal => RectangleEdge::Left,
        }
    }

    /// The data-area edge the range axis is attached to.
    pub fn range_axis_edge(&self) -> RectangleEdge {
        match self.orientation {
            PlotOrientation::Vertical => RectangleEdge::Left,
            PlotOrientation::Horizontal => RectangleEdge::Bottom,
        }
    }

    /// Appends a marker on the domain axis.
    pub fn add_domain_marker(&mut self, marker: IntervalMarker) {
        self.domain_markers.push(marker);
    }

    /// Appends a marker on the range axis.
    pub fn add_range_marker(&mut self, marker: IntervalMarker) {
        self.range_markers.push(marker);
    }

    /// Domain markers in draw order.
    pub fn domain_markers(&self) -> &[IntervalMarker] {
        &self.domain_markers
    }

    /// Range markers in draw order.
    pub fn range_markers(&self) -> &[IntervalMarker] {
        &self.range_markers
    }

    /// Mutable access to a domain marker.
    pub fn domain_marker_mut(&mut self, index: usize) -> Option<&mut IntervalMarker> {
        self.domain_markers.get_mut(index)
    }

    /// Mutable access to a range marker.
    pub fn range_marker_mut(&mut self, index: usize) -> Option<&mut IntervalMarker> {
        self.range_markers.get_mut(index)
    }

    /// Removes and returns the first domain marker equal to `marker`.
    pub fn remove_domain_marker(&mut self, marker: &IntervalMarker) -> Option<IntervalMarker> {
        let index = self.domain_markers.iter().position(|m| m == marker)?;
        Some(self.domain_markers.remove(index))
    }

    /// Removes and returns the first range marker equal to `marker`.
    pub fn remove_range_marker(&mut self, marker: &IntervalMarker) -> Option<IntervalMarker> {
        let index = self.range_markers.iter().position(|m| m == marker)?;
        Some(self.range_markers.remove(index))
    }

    /// Removes every marker.
    pub fn clear_markers(&mut self) {
        self.domain_markers.clear();
        self.range_markers.clear();
    }

    /// Draws every marker into `data_area`.
    pub fn draw_markers(&self, surface: &mut dyn RenderSurface, data_area: Rect) {
        log::debug!(
            "drawing {} domain and {} range markers ({:?}) into {data_area:?}",
            self.domain_markers.len(),
            self.range_markers.len(),
            self.orientation,
        );

        let role = AxisRole::resolve(self.orientation, PlotOrientation::Horizontal);
        let edge = self.domain_axis_edge();
        for marker in &self.domain_markers {
            marker.draw_axis(surface, self, &self.domain_axis, data_area, role, edge);
        }

        let role = AxisRole::resolve(self.orientation, PlotOrientation::Vertical);
        let edge = self.range_axis_edge();
        for marker in &self.range_markers {
            marker.draw_axis(surface, self, &self.range_axis, data_area, role, edge);
        }
    }
}

impl Plot for MarkerPlot {
    fn orientation(&self) -> PlotOrientation {
        self.orientation
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use kurbo::Line;
    use peniko::color::palette::css;

    use super::*;
    use crate::range::Range;
    use crate::surface::RecordingSurface;

    const AREA: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    fn plot() -> MarkerPlot {
        MarkerPlot::new(
            NumberAxis::new(Range::new(0.0, 10.0)),
            NumberAxis::new(Range::new(0.0, 1.0)),
        )
    }

    #[test]
    fn vertical_plot_draws_domain_columns_and_range_rows() {
        let mut plot = plot();
        plot.add_domain_marker(IntervalMarker::with_paint(2.0, 4.0, css::RED));
        plot.add_range_marker(IntervalMarker::with_paint(0.25, 0.5, css::BLUE));

        let mut surface = RecordingSurface::new();
        plot.draw_markers(&mut surface, AREA);
        let fills: Vec<_> = surface.fills().collect();
        assert_eq!(
            fills,
            [
                Rect::new(40.0, 0.0, 80.0, 100.0),
                Rect::new(0.0, 50.0, 200.0, 75.0),
            ]
        );
    }

    #[test]
    fn horizontal_plot_swaps_edges_and_roles() {
        let mut plot = plot().with_orientation(PlotOrientation::Horizontal);
        assert_eq!(plot.domain_axis_edge(), RectangleEdge::Left);
        assert_eq!(plot.range_axis_edge(), RectangleEdge::Bottom);

        plot.add_domain_marker(IntervalMarker::new(5.0, 10.0));
        let mut surface = RecordingSurface::new();
        plot.draw_markers(&mut surface, AREA);

        let fills: Vec<_> = surface.fills().collect();
        assert_eq!(fills, [Rect::new(0.0, 0.0, 200.0, 50.0)]);
        let lines: Vec<_> = surface.lines().collect();
        assert_eq!(
            lines,
            [
                Line::new((0.0, 50.0), (200.0, 50.0)),
                Line::new((0.0, 0.0), (200.0, 0.0)),
            ]
        );
    }

    #[test]
    fn markers_outside_axes_are_skipped() {
        let mut plot = plot();
        plot.add_domain_marker(IntervalMarker::new(20.0, 30.0));
        plot.add_range_marker(IntervalMarker::new(-3.0, -2.0));
        let mut surface = RecordingSurface::new();
        plot.draw_markers(&mut surface, AREA);
        assert_eq!(surface.drawing_count(), 0);

        plot.domain_axis_mut().set_range(Range::new(0.0, 40.0));
        plot.draw_markers(&mut surface, AREA);
        assert_eq!(surface.fills().count(), 1);
    }

    #[test]
    fn remove_and_mutate_markers() {
        let mut plot = plot();
        let marker = IntervalMarker::new(1.0, 2.0);
        plot.add_range_marker(marker.clone());
        plot.add_range_marker(IntervalMarker::new(3.0, 4.0));

        plot.range_marker_mut(1).unwrap().set_end_value(5.0);
        assert_eq!(plot.range_markers()[1].end_value(), 5.0);

        assert_eq!(plot.remove_range_marker(&marker), Some(marker.clone()));
        assert_eq!(plot.remove_range_marker(&marker), None);
        assert_eq!(plot.range_markers().len(), 1);

        plot.clear_markers();
        assert!(plot.range_markers().is_empty());
        assert!(plot.domain_markers().is_empty());
    }
}
