// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval markers for `VizIR` plots.
//!
//! An [`IntervalMarker`] highlights a numeric interval along one axis of a 2D plot:
//! - a filled band spanning the data area between the two mapped bounds,
//! - optional outline rules at each bound that lies in the axis range, and
//! - an optional label anchored inside the band.
//!
//! The surrounding chart machinery is consumed through small traits:
//! [`ValueAxis`] for value-to-device mapping, [`Plot`] for orientation, and
//! [`RenderSurface`] for immediate-mode drawing. [`MarkerPlot`] is a minimal
//! driver that routes domain and range markers through those traits, and
//! [`RecordingSurface`] captures draw calls for tests and custom back ends.
//!
//! Text shaping is out of scope; surfaces receive unshaped label strings plus a
//! [`TextAnchor`], and can use [`aligned_text_origin`] with a [`TextMeasurer`] to
//! place them.

#![no_std]

extern crate alloc;

mod anchor;
mod axis;
mod error;
mod gradient;
mod insets;
mod interval_marker;
mod listener;
mod marker_plot;
mod orientation;
mod range;
mod style;
mod surface;
mod text;

pub use anchor::{
    HorizontalAlignment, RectangleAnchor, RectangleEdge, TextAnchor, VerticalAlignment,
};
pub use axis::{NumberAxis, ValueAxis};
pub use error::MarkerError;
pub use gradient::{GradientTransformType, GradientTransformer, StandardGradientTransformer};
pub use insets::{LengthAdjustment, RectangleInsets, UnitType};
pub use interval_marker::IntervalMarker;
pub use listener::{ListenerId, MarkerChangeEvent};
pub use marker_plot::MarkerPlot;
pub use orientation::{AxisRole, Plot, PlotOrientation};
pub use range::Range;
pub use style::MarkerStyle;
pub use surface::{Composite, CompositeGuard, DrawCommand, RecordingSurface, RenderSurface};
pub use text::{
    FontFamily, HeuristicTextMeasurer, LabelFont, TextMeasurer, TextMetrics, aligned_text_origin,
};
