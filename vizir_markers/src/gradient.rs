// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting gradient fills to the rectangle being painted.
//!
//! A marker's gradient paint is authored once, but the band it fills changes with every axis
//! range and data area. A [`GradientTransformer`] remaps the gradient geometry onto the band
//! just before it is filled.

use core::any::Any;
use core::fmt::Debug;

use kurbo::Rect;
use peniko::{Extend, Gradient};

/// Remaps a gradient onto a target rectangle.
pub trait GradientTransformer: Debug {
    /// Returns a copy of `gradient` laid out to fit `target`.
    fn transform(&self, gradient: &Gradient, target: Rect) -> Gradient;

    /// Value equality against another transformer.
    fn eq_transformer(&self, other: &dyn GradientTransformer) -> bool;

    /// Upcast used by [`GradientTransformer::eq_transformer`] implementations.
    fn as_any(&self) -> &dyn Any;
}

/// The direction in which a [`StandardGradientTransformer`] lays out a gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientTransformType {
    /// From the top edge to the bottom edge.
    #[default]
    Vertical,
    /// From the left edge to the right edge.
    Horizontal,
    /// Mirrored about the vertical center line: the last stop at the center, the first at
    /// the left and right edges.
    CenterHorizontal,
    /// Mirrored about the horizontal center line: the first stop at the top and bottom
    /// edges, the last at the center.
    CenterVertical,
}

/// A transformer that turns any gradient into a linear one spanning the target.
///
/// Color stops, interpolation settings and extend mode are kept, except that the centered
/// variants force [`Extend::Reflect`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StandardGradientTransformer {
    kind: GradientTransformType,
}

impl StandardGradientTransformer {
    /// Creates a transformer of the given kind.
    pub fn new(kind: GradientTransformType) -> Self {
        Self { kind }
    }

    /// Returns the layout kind.
    pub fn kind(&self) -> GradientTransformType {
        self.kind
    }
}

impl GradientTransformer for StandardGradientTransformer {
    fn transform(&self, gradient: &Gradient, target: Rect) -> Gradient {
        let (x0, y0) = (target.min_x(), target.min_y());
        let (x1, y1) = (target.max_x(), target.max_y());
        let c = target.center();
        let mut out = gradient.clone();
        match self.kind {
            GradientTransformType::Vertical => {
                out.kind = Gradient::new_linear((c.x, y0), (c.x, y1)).kind;
            }
            GradientTransformType::Horizontal => {
                out.kind = Gradient::new_linear((x0, c.y), (x1, c.y)).kind;
            }
            GradientTransformType::CenterHorizontal => {
                out.kind = Gradient::new_linear((c.x, c.y), (x1, c.y)).kind;
                out.stops.0.reverse();
                for stop in out.stops.0.iter_mut() {
                    stop.offset = 1.0 - stop.offset;
                }
                out.extend = Extend::Reflect;
            }
            GradientTransformType::CenterVertical => {
                out.kind = Gradient::new_linear((c.x, y0), (c.x, c.y)).kind;
                out.extend = Extend::Reflect;
            }
        }
        out
    }

    fn eq_transformer(&self, other: &dyn GradientTransformer) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    fn two_stop() -> Gradient {
        Gradient::new_linear((0.0, 0.0), (1.0, 1.0)).with_stops([css::RED, css::BLUE])
    }

    fn expected_kind(p0: (f64, f64), p1: (f64, f64)) -> Gradient {
        Gradient::new_linear(p0, p1)
    }

    #[test]
    fn vertical_and_horizontal_span_the_target() {
        let target = Rect::new(10.0, 20.0, 110.0, 220.0);
        let g = two_stop();

        let v = StandardGradientTransformer::new(GradientTransformType::Vertical)
            .transform(&g, target);
        assert_eq!(v.kind, expected_kind((60.0, 20.0), (60.0, 220.0)).kind);
        assert_eq!(v.stops, g.stops);
        assert_eq!(v.extend, g.extend);

        let h = StandardGradientTransformer::new(GradientTransformType::Horizontal)
            .transform(&g, target);
        assert_eq!(h.kind, expected_kind((10.0, 120.0), (110.0, 120.0)).kind);
    }

    #[test]
    fn centered_variants_reflect() {
        let target = Rect::new(0.0, 0.0, 100.0, 40.0);
        let g = two_stop();

        let ch = StandardGradientTransformer::new(GradientTransformType::CenterHorizontal)
            .transform(&g, target);
        assert_eq!(ch.kind, expected_kind((50.0, 20.0), (100.0, 20.0)).kind);
        assert_eq!(ch.extend, Extend::Reflect);
        assert_eq!(ch.stops.0.len(), 2);
        assert_eq!(ch.stops.0[0].offset, 0.0);
        assert_eq!(ch.stops.0[0].color, g.stops.0[1].color);

        let cv = StandardGradientTransformer::new(GradientTransformType::CenterVertical)
            .transform(&g, target);
        assert_eq!(cv.kind, expected_kind((50.0, 0.0), (50.0, 20.0)).kind);
        assert_eq!(cv.extend, Extend::Reflect);
        assert_eq!(cv.stops, g.stops);
    }

    #[test]
    fn equality_is_by_kind() {
        let a = StandardGradientTransformer::new(GradientTransformType::Horizontal);
        let b = StandardGradientTransformer::new(GradientTransformType::Horizontal);
        let c = StandardGradientTransformer::default();
        assert!(a.eq_transformer(&b));
        assert!(!a.eq_transformer(&c));
        assert_eq!(c.kind(), GradientTransformType::Vertical);
    }
}
