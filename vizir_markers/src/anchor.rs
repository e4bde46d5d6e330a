// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle edges and anchors used for axis placement and label alignment.

use kurbo::{Point, Rect, Vec2};

use crate::text::TextMetrics;

/// A side of a rectangle.
///
/// Axes are attached to one edge of the plot's data area; the edge decides which
/// device coordinate (x or y) a value maps onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RectangleEdge {
    /// The top edge (minimum y in device space).
    Top,
    /// The bottom edge (maximum y in device space).
    Bottom,
    /// The left edge (minimum x in device space).
    Left,
    /// The right edge (maximum x in device space).
    Right,
}

impl RectangleEdge {
    /// Returns `true` for [`RectangleEdge::Top`] and [`RectangleEdge::Bottom`].
    pub fn is_top_or_bottom(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// A reference point on a rectangle: its center, an edge midpoint, or a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RectangleAnchor {
    /// The center of the rectangle.
    Center,
    /// The midpoint of the top edge.
    Top,
    /// The top-left corner.
    TopLeft,
    /// The top-right corner.
    TopRight,
    /// The midpoint of the bottom edge.
    Bottom,
    /// The bottom-left corner.
    BottomLeft,
    /// The bottom-right corner.
    BottomRight,
    /// The midpoint of the left edge.
    Left,
    /// The midpoint of the right edge.
    Right,
}

impl RectangleAnchor {
    /// Resolves this anchor to a point on `rect`.
    pub fn coordinates(self, rect: Rect) -> Point {
        let (x0, x1) = (rect.min_x(), rect.max_x());
        let (y0, y1) = (rect.min_y(), rect.max_y());
        let c = rect.center();
        match self {
            Self::Center => c,
            Self::Top => Point::new(c.x, y0),
            Self::TopLeft => Point::new(x0, y0),
            Self::TopRight => Point::new(x1, y0),
            Self::Bottom => Point::new(c.x, y1),
            Self::BottomLeft => Point::new(x0, y1),
            Self::BottomRight => Point::new(x1, y1),
            Self::Left => Point::new(x0, c.y),
            Self::Right => Point::new(x1, c.y),
        }
    }
}

/// Horizontal component of a [`TextAnchor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// The anchor point is at the left of the text.
    Left,
    /// The anchor point is at the horizontal center of the text.
    Center,
    /// The anchor point is at the right of the text.
    Right,
}

/// Vertical component of a [`TextAnchor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// The anchor point is at the top of the line box.
    Top,
    /// The anchor point is half the ascent above the baseline.
    HalfAscent,
    /// The anchor point is at the vertical center of the line box.
    Center,
    /// The anchor point is on the baseline.
    Baseline,
    /// The anchor point is at the bottom of the line box.
    Bottom,
}

/// The point on a single line of text that is aligned with a target location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Top-left of the line box.
    TopLeft,
    /// Top-center of the line box.
    TopCenter,
    /// Top-right of the line box.
    TopRight,
    /// Half-ascent height, left.
    HalfAscentLeft,
    /// Half-ascent height, center.
    HalfAscentCenter,
    /// Half-ascent height, right.
    HalfAscentRight,
    /// Vertical center, left.
    CenterLeft,
    /// Vertical and horizontal center.
    Center,
    /// Vertical center, right.
    CenterRight,
    /// Baseline, left.
    BaselineLeft,
    /// Baseline, center.
    BaselineCenter,
    /// Baseline, right.
    BaselineRight,
    /// Bottom-left of the line box.
    BottomLeft,
    /// Bottom-center of the line box.
    BottomCenter,
    /// Bottom-right of the line box.
    BottomRight,
}

impl TextAnchor {
    /// Returns the horizontal component of this anchor.
    pub fn horizontal(self) -> HorizontalAlignment {
        match self {
            Self::TopLeft
            | Self::HalfAscentLeft
            | Self::CenterLeft
            | Self::BaselineLeft
            | Self::BottomLeft => HorizontalAlignment::Left,
            Self::TopCenter
            | Self::HalfAscentCenter
            | Self::Center
            | Self::BaselineCenter
            | Self::BottomCenter => HorizontalAlignment::Center,
            Self::TopRight
            | Self::HalfAscentRight
            | Self::CenterRight
            | Self::BaselineRight
            | Self::BottomRight => HorizontalAlignment::Right,
        }
    }

    /// Returns the vertical component of this anchor.
    pub fn vertical(self) -> VerticalAlignment {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlignment::Top,
            Self::HalfAscentLeft | Self::HalfAscentCenter | Self::HalfAscentRight => {
                VerticalAlignment::HalfAscent
            }
            Self::CenterLeft | Self::Center | Self::CenterRight => VerticalAlignment::Center,
            Self::BaselineLeft | Self::BaselineCenter | Self::BaselineRight => {
                VerticalAlignment::Baseline
            }
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlignment::Bottom,
        }
    }

    /// Offset from the anchor point to the baseline-left origin of the text.
    ///
    /// Device y grows downward, so a positive `y` moves the baseline below the anchor.
    pub fn baseline_offset(self, metrics: &TextMetrics) -> Vec2 {
        let w = metrics.advance_width;
        let dx = match self.horizontal() {
            HorizontalAlignment::Left => 0.0,
            HorizontalAlignment::Center => -w / 2.0,
            HorizontalAlignment::Right => -w,
        };
        let below = metrics.descent + metrics.leading;
        let dy = match self.vertical() {
            VerticalAlignment::Top => metrics.line_height() - below,
            VerticalAlignment::HalfAscent => metrics.ascent / 2.0,
            VerticalAlignment::Center => metrics.line_height() / 2.0 - below,
            VerticalAlignment::Baseline => 0.0,
            VerticalAlignment::Bottom => -below,
        };
        Vec2::new(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rectangle_anchor_resolves_corners_and_midpoints() {
        let r = Rect::new(10.0, 20.0, 110.0, 60.0);
        assert_eq!(RectangleAnchor::TopLeft.coordinates(r), Point::new(10.0, 20.0));
        assert_eq!(RectangleAnchor::BottomRight.coordinates(r), Point::new(110.0, 60.0));
        assert_eq!(RectangleAnchor::Center.coordinates(r), Point::new(60.0, 40.0));
        assert_eq!(RectangleAnchor::Top.coordinates(r), Point::new(60.0, 20.0));
        assert_eq!(RectangleAnchor::Right.coordinates(r), Point::new(110.0, 40.0));
    }

    #[test]
    fn text_anchor_offsets_follow_metrics() {
        let metrics = TextMetrics {
            advance_width: 40.0,
            ascent: 8.0,
            descent: 2.0,
            leading: 0.0,
        };
        assert_eq!(
            TextAnchor::BaselineLeft.baseline_offset(&metrics),
            Vec2::ZERO
        );
        assert_eq!(
            TextAnchor::TopRight.baseline_offset(&metrics),
            Vec2::new(-40.0, 8.0)
        );
        assert_eq!(
            TextAnchor::Center.baseline_offset(&metrics),
            Vec2::new(-20.0, 3.0)
        );
        assert_eq!(
            TextAnchor::BottomCenter.baseline_offset(&metrics),
            Vec2::new(-20.0, -2.0)
        );
        assert_eq!(
            TextAnchor::HalfAscentLeft.baseline_offset(&metrics),
            Vec2::new(0.0, 4.0)
        );
    }

    #[test]
    fn edges_classify() {
        assert!(RectangleEdge::Bottom.is_top_or_bottom());
        assert!(RectangleEdge::Top.is_top_or_bottom());
        assert!(!RectangleEdge::Left.is_top_or_bottom());
    }
}
