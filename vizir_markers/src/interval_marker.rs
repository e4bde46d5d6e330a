// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval markers: a shaded band between two axis values.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use kurbo::{Line, Rect, Stroke};
use peniko::Brush;

use crate::anchor::{RectangleAnchor, RectangleEdge, TextAnchor};
use crate::axis::ValueAxis;
use crate::error::{MarkerError, check_alpha};
use crate::gradient::GradientTransformer;
use crate::insets::{LengthAdjustment, RectangleInsets};
use crate::listener::{ChangeListeners, ListenerId, MarkerChangeEvent};
use crate::orientation::{AxisRole, Plot, PlotOrientation};
use crate::style::MarkerStyle;
use crate::surface::{Composite, CompositeGuard, RenderSurface};
use crate::text::LabelFont;

/// Highlights the interval between two values on an axis.
///
/// The bounds are stored as given; `start_value > end_value` is allowed and the pair is only
/// ordered when it is mapped to device coordinates.
///
/// Every setter notifies the registered change listeners synchronously, once per call.
/// Listeners are not part of the marker's value: they are ignored by `==` and not carried
/// over by `clone`.
pub struct IntervalMarker {
    start_value: f64,
    end_value: f64,
    style: MarkerStyle,
    gradient_transformer: Option<Arc<dyn GradientTransformer>>,
    listeners: ChangeListeners,
}

impl IntervalMarker {
    /// Creates a marker with [`MarkerStyle::default`] (gray fill with gray outlines).
    pub fn new(start: f64, end: f64) -> Self {
        Self::with_style(start, end, MarkerStyle::default())
    }

    /// Creates a marker with the given fill paint and no outlines.
    pub fn with_paint(start: f64, end: f64, paint: impl Into<Brush>) -> Self {
        let style = MarkerStyle::default()
            .with_paint(paint)
            .with_outline_paint(None)
            .with_outline_stroke(None);
        Self::with_style(start, end, style)
    }

    /// Creates a marker with an explicit style.
    ///
    /// The label offset type is reset to [`LengthAdjustment::Contract`].
    pub fn with_style(start: f64, end: f64, style: MarkerStyle) -> Self {
        Self {
            start_value: start,
            end_value: end,
            style: style.with_label_offset_type(LengthAdjustment::Contract),
            gradient_transformer: None,
            listeners: ChangeListeners::default(),
        }
    }

    /// Creates a marker with explicit paints, strokes and alpha.
    ///
    /// Returns [`MarkerError::AlphaOutOfRange`] unless `alpha` is in `[0, 1]`.
    pub fn try_new(
        start: f64,
        end: f64,
        paint: impl Into<Brush>,
        stroke: Stroke,
        outline_paint: Option<Brush>,
        outline_stroke: Option<Stroke>,
        alpha: f32,
    ) -> Result<Self, MarkerError> {
        let style = MarkerStyle::new(paint, stroke, outline_paint, outline_stroke, alpha)?;
        Ok(Self::with_style(start, end, style))
    }

    /// The start of the interval.
    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    /// Sets the start of the interval.
    pub fn set_start_value(&mut self, value: f64) {
        self.start_value = value;
        self.notify();
    }

    /// The end of the interval.
    pub fn end_value(&self) -> f64 {
        self.end_value
    }

    /// Sets the end of the interval.
    pub fn set_end_value(&mut self, value: f64) {
        self.end_value = value;
        self.notify();
    }

    /// The gradient transformer, if any.
    pub fn gradient_transformer(&self) -> Option<&Arc<dyn GradientTransformer>> {
        self.gradient_transformer.as_ref()
    }

    /// Sets or clears the gradient transformer.
    pub fn set_gradient_transformer(&mut self, transformer: Option<Arc<dyn GradientTransformer>>) {
        self.gradient_transformer = transformer;
        self.notify();
    }

    /// The marker's style.
    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    /// Replaces the whole style.
    pub fn set_style(&mut self, style: MarkerStyle) {
        self.style = style;
        self.notify();
    }

    /// The fill paint.
    pub fn paint(&self) -> &Brush {
        self.style.paint()
    }

    /// Sets the fill paint.
    pub fn set_paint(&mut self, paint: impl Into<Brush>) {
        self.style.paint = paint.into();
        self.notify();
    }

    /// The stroke.
    pub fn stroke(&self) -> &Stroke {
        self.style.stroke()
    }

    /// Sets the stroke.
    pub fn set_stroke(&mut self, stroke: Stroke) {
        self.style.stroke = stroke;
        self.notify();
    }

    /// The outline paint.
    pub fn outline_paint(&self) -> Option<&Brush> {
        self.style.outline_paint()
    }

    /// Sets or clears the outline paint.
    pub fn set_outline_paint(&mut self, paint: Option<Brush>) {
        self.style.outline_paint = paint;
        self.notify();
    }

    /// The outline stroke.
    pub fn outline_stroke(&self) -> Option<&Stroke> {
        self.style.outline_stroke()
    }

    /// Sets or clears the outline stroke.
    pub fn set_outline_stroke(&mut self, stroke: Option<Stroke>) {
        self.style.outline_stroke = stroke;
        self.notify();
    }

    /// The alpha applied to everything the marker draws.
    pub fn alpha(&self) -> f32 {
        self.style.alpha()
    }

    /// Sets the alpha.
    ///
    /// On [`MarkerError::AlphaOutOfRange`] the marker is left unchanged and listeners are not
    /// notified.
    pub fn set_alpha(&mut self, alpha: f32) -> Result<(), MarkerError> {
        self.style.alpha = check_alpha(alpha)?;
        self.notify();
        Ok(())
    }

    /// The label text.
    pub fn label(&self) -> Option<&str> {
        self.style.label()
    }

    /// Sets or clears the label text.
    pub fn set_label(&mut self, label: Option<String>) {
        self.style.label = label;
        self.notify();
    }

    /// The label font.
    pub fn label_font(&self) -> &LabelFont {
        self.style.label_font()
    }

    /// Sets the label font.
    pub fn set_label_font(&mut self, font: LabelFont) {
        self.style.label_font = font;
        self.notify();
    }

    /// The label paint.
    pub fn label_paint(&self) -> &Brush {
        self.style.label_paint()
    }

    /// Sets the label paint.
    pub fn set_label_paint(&mut self, paint: impl Into<Brush>) {
        self.style.label_paint = paint.into();
        self.notify();
    }

    /// The point of the band the label is anchored to.
    pub fn label_anchor(&self) -> RectangleAnchor {
        self.style.label_anchor()
    }

    /// Sets the point of the band the label is anchored to.
    pub fn set_label_anchor(&mut self, anchor: RectangleAnchor) {
        self.style.label_anchor = anchor;
        self.notify();
    }

    /// The point of the label text aligned with the anchor.
    pub fn label_text_anchor(&self) -> TextAnchor {
        self.style.label_text_anchor()
    }

    /// Sets the point of the label text aligned with the anchor.
    pub fn set_label_text_anchor(&mut self, anchor: TextAnchor) {
        self.style.label_text_anchor = anchor;
        self.notify();
    }

    /// The label offset.
    pub fn label_offset(&self) -> RectangleInsets {
        self.style.label_offset()
    }

    /// Sets the label offset.
    pub fn set_label_offset(&mut self, offset: RectangleInsets) {
        self.style.label_offset = offset;
        self.notify();
    }

    /// How the label offset adjusts the axis-parallel dimension.
    pub fn label_offset_type(&self) -> LengthAdjustment {
        self.style.label_offset_type()
    }

    /// Sets how the label offset adjusts the axis-parallel dimension.
    pub fn set_label_offset_type(&mut self, adjustment: LengthAdjustment) {
        self.style.label_offset_type = adjustment;
        self.notify();
    }

    /// Registers a listener called after every mutation.
    pub fn add_change_listener(
        &mut self,
        listener: impl Fn(&MarkerChangeEvent<'_>) + 'static,
    ) -> ListenerId {
        self.listeners.add(listener)
    }

    /// Unregisters a listener. Returns `false` if `id` was not registered.
    pub fn remove_change_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Returns `true` if `id` is registered.
    pub fn has_change_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    /// Number of registered listeners.
    pub fn change_listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&self) {
        self.listeners.notify(&MarkerChangeEvent::new(self));
    }

    /// Computes the band rectangle against `axis`, or `None` if the interval is not visible.
    ///
    /// The bounds are clipped to the data area along the axis direction; the band always spans
    /// the full data area across it.
    pub fn band_rect(
        &self,
        axis: &dyn ValueAxis,
        data_area: Rect,
        role: AxisRole,
        edge: RectangleEdge,
    ) -> Option<Rect> {
        let (start, end) = (self.start_value, self.end_value);
        if !axis.range().intersects(start, end) {
            return None;
        }
        let start2d = axis.value_to_device(start, data_area, edge);
        let end2d = axis.value_to_device(end, data_area, edge);
        let low = start2d.min(end2d);
        let high = start2d.max(end2d);

        Some(match role {
            AxisRole::Primary => {
                let low = low.max(data_area.min_y());
                let high = high.min(data_area.max_y());
                Rect::new(data_area.min_x(), low, data_area.max_x(), high)
            }
            AxisRole::Secondary => {
                let low = low.max(data_area.min_x());
                let high = high.min(data_area.max_x());
                Rect::new(low, data_area.min_y(), high, data_area.max_y())
            }
        })
    }

    /// Draws the marker against one axis of `plot`.
    ///
    /// Nothing is drawn when the interval does not intersect the axis range. Otherwise the
    /// band is filled, outlines are drawn at each bound inside the axis range, and the label
    /// (if any) is drawn, all under a source-over composite at the marker's alpha. The
    /// surface's previous composite is restored before returning.
    pub fn draw_axis(
        &self,
        surface: &mut dyn RenderSurface,
        plot: &dyn Plot,
        axis: &dyn ValueAxis,
        data_area: Rect,
        role: AxisRole,
        edge: RectangleEdge,
    ) {
        let Some(rect) = self.band_rect(axis, data_area, role, edge) else {
            log::trace!(
                "interval marker [{}, {}] outside axis range {:?}; skipped",
                self.start_value,
                self.end_value,
                axis.range()
            );
            return;
        };

        let mut surface = CompositeGuard::new(surface, Composite::src_over(self.style.alpha));
        match (&self.style.paint, &self.gradient_transformer) {
            (Brush::Gradient(gradient), Some(transformer)) => {
                log::trace!("fitting marker gradient to {rect:?} with {transformer:?}");
                let fitted: Brush = Brush::Gradient(transformer.transform(gradient, rect));
                surface.set_paint(&fitted);
            }
            (paint, _) => surface.set_paint(paint),
        }
        surface.fill_rect(rect);

        self.draw_outline(&mut *surface, axis, data_area, role, edge);

        if let Some(label) = self.style.label.as_deref() {
            surface.set_font(&self.style.label_font);
            surface.set_paint(&self.style.label_paint);
            let offset_type = self.style.label_offset_type;
            let (width_adj, height_adj) = match plot.orientation() {
                PlotOrientation::Horizontal => (LengthAdjustment::Contract, offset_type),
                PlotOrientation::Vertical => (offset_type, LengthAdjustment::Contract),
            };
            let anchor_rect =
                self.style
                    .label_offset
                    .create_adjusted_rectangle(rect, width_adj, height_adj);
            let point = self.style.label_anchor.coordinates(anchor_rect);
            surface.draw_aligned_text(label, point, self.style.label_text_anchor);
        }
    }

    fn draw_outline(
        &self,
        surface: &mut dyn RenderSurface,
        axis: &dyn ValueAxis,
        data_area: Rect,
        role: AxisRole,
        edge: RectangleEdge,
    ) {
        let (Some(paint), Some(stroke)) = (&self.style.outline_paint, &self.style.outline_stroke)
        else {
            return;
        };
        surface.set_paint(paint);
        surface.set_stroke(stroke);

        let range = axis.range();
        for value in [self.start_value, self.end_value] {
            if !range.contains(value) {
                continue;
            }
            let v = axis.value_to_device(value, data_area, edge);
            let line = match role {
                AxisRole::Primary => Line::new((data_area.min_x(), v), (data_area.max_x(), v)),
                AxisRole::Secondary => Line::new((v, data_area.min_y()), (v, data_area.max_y())),
            };
            surface.draw_line(line);
        }
    }
}

impl Clone for IntervalMarker {
    fn clone(&self) -> Self {
        Self {
            start_value: self.start_value,
            end_value: self.end_value,
            style: self.style.clone(),
            gradient_transformer: self.gradient_transformer.clone(),
            listeners: ChangeListeners::default(),
        }
    }
}

impl PartialEq for IntervalMarker {
    fn eq(&self, other: &Self) -> bool {
        self.start_value == other.start_value
            && self.end_value == other.end_value
            && self.style == other.style
            && match (&self.gradient_transformer, &other.gradient_transformer) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.eq_transformer(&**b),
                _ => false,
            }
    }
}

impl fmt::Debug for IntervalMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalMarker")
            .field("start_value", &self.start_value)
            .field("end_value", &self.end_value)
            .field("style", &self.style)
            .field("gradient_transformer", &self.gradient_transformer)
            .field("listeners", &self.listeners)
            .finish()
    }
}
