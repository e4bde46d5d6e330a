// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker styling shared by all marker kinds.

use alloc::string::String;

use kurbo::Stroke;
use peniko::Brush;
use peniko::color::palette::css;

use crate::anchor::{RectangleAnchor, TextAnchor};
use crate::error::{MarkerError, check_alpha};
use crate::insets::{LengthAdjustment, RectangleInsets};
use crate::text::LabelFont;

/// Fill, outline and label styling for a marker.
///
/// The defaults are:
/// - gray fill with a `0.5` stroke,
/// - gray `0.5` outlines,
/// - `alpha = 0.8`,
/// - no label; labels default to a 9px sans-serif black font, anchored [`RectangleAnchor::TopLeft`]
///   with [`TextAnchor::Center`], offset by 3 units on each side and contracted.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerStyle {
    pub(crate) paint: Brush,
    pub(crate) stroke: Stroke,
    pub(crate) outline_paint: Option<Brush>,
    pub(crate) outline_stroke: Option<Stroke>,
    pub(crate) alpha: f32,
    pub(crate) label: Option<String>,
    pub(crate) label_font: LabelFont,
    pub(crate) label_paint: Brush,
    pub(crate) label_anchor: RectangleAnchor,
    pub(crate) label_text_anchor: TextAnchor,
    pub(crate) label_offset: RectangleInsets,
    pub(crate) label_offset_type: LengthAdjustment,
}

impl MarkerStyle {
    /// Creates a style with the given paints, strokes and alpha and default label settings.
    ///
    /// Returns [`MarkerError::AlphaOutOfRange`] unless `alpha` is in `[0, 1]`.
    pub fn new(
        paint: impl Into<Brush>,
        stroke: Stroke,
        outline_paint: Option<Brush>,
        outline_stroke: Option<Stroke>,
        alpha: f32,
    ) -> Result<Self, MarkerError> {
        Ok(Self {
            paint: paint.into(),
            stroke,
            outline_paint,
            outline_stroke,
            alpha: check_alpha(alpha)?,
            label: None,
            label_font: LabelFont::default(),
            label_paint: Brush::Solid(css::BLACK),
            label_anchor: RectangleAnchor::TopLeft,
            label_text_anchor: TextAnchor::Center,
            label_offset: RectangleInsets::uniform(3.0),
            label_offset_type: LengthAdjustment::Contract,
        })
    }

    /// Sets the fill paint.
    pub fn with_paint(mut self, paint: impl Into<Brush>) -> Self {
        self.paint = paint.into();
        self
    }

    /// Sets the stroke.
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets (or clears) the outline paint.
    pub fn with_outline_paint(mut self, paint: Option<Brush>) -> Self {
        self.outline_paint = paint;
        self
    }

    /// Sets (or clears) the outline stroke.
    pub fn with_outline_stroke(mut self, stroke: Option<Stroke>) -> Self {
        self.outline_stroke = stroke;
        self
    }

    /// Sets the alpha, rejecting values outside `[0, 1]`.
    pub fn with_alpha(mut self, alpha: f32) -> Result<Self, MarkerError> {
        self.alpha = check_alpha(alpha)?;
        Ok(self)
    }

    /// Sets (or clears) the label text.
    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }

    /// Sets the label font.
    pub fn with_label_font(mut self, font: LabelFont) -> Self {
        self.label_font = font;
        self
    }

    /// Sets the label paint.
    pub fn with_label_paint(mut self, paint: impl Into<Brush>) -> Self {
        self.label_paint = paint.into();
        self
    }

    /// Sets the point of the band the label is anchored to.
    pub fn with_label_anchor(mut self, anchor: RectangleAnchor) -> Self {
        self.label_anchor = anchor;
        self
    }

    /// Sets the point of the label text aligned with the anchor.
    pub fn with_label_text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.label_text_anchor = anchor;
        self
    }

    /// Sets the label offset.
    pub fn with_label_offset(mut self, offset: RectangleInsets) -> Self {
        self.label_offset = offset;
        self
    }

    /// Sets how the label offset adjusts the axis-parallel dimension.
    pub fn with_label_offset_type(mut self, adjustment: LengthAdjustment) -> Self {
        self.label_offset_type = adjustment;
        self
    }

    /// The fill paint.
    pub fn paint(&self) -> &Brush {
        &self.paint
    }

    /// The stroke.
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// The outline paint, if outlines are enabled.
    pub fn outline_paint(&self) -> Option<&Brush> {
        self.outline_paint.as_ref()
    }

    /// The outline stroke, if outlines are enabled.
    pub fn outline_stroke(&self) -> Option<&Stroke> {
        self.outline_stroke.as_ref()
    }

    /// The alpha applied to everything the marker draws.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// The label text.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The label font.
    pub fn label_font(&self) -> &LabelFont {
        &self.label_font
    }

    /// The label paint.
    pub fn label_paint(&self) -> &Brush {
        &self.label_paint
    }

    /// The point of the band the label is anchored to.
    pub fn label_anchor(&self) -> RectangleAnchor {
        self.label_anchor
    }

    /// The point of the label text aligned with the anchor.
    pub fn label_text_anchor(&self) -> TextAnchor {
        self.label_text_anchor
    }

    /// The label offset.
    pub fn label_offset(&self) -> RectangleInsets {
        self.label_offset
    }

    /// How the label offset adjusts the axis-parallel dimension.
    pub fn label_offset_type(&self) -> LengthAdjustment {
        self.label_offset_type
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            paint: Brush::Solid(css::GRAY),
            stroke: Stroke::new(0.5),
            outline_paint: Some(Brush::Solid(css::GRAY)),
            outline_stroke: Some(Stroke::new(0.5)),
            alpha: 0.8,
            label: None,
            label_font: LabelFont::default(),
            label_paint: Brush::Solid(css::BLACK),
            label_anchor: RectangleAnchor::TopLeft,
            label_text_anchor: TextAnchor::Center,
            label_offset: RectangleInsets::uniform(3.0),
            label_offset_type: LengthAdjustment::Contract,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn alpha_is_validated() {
        let ok = MarkerStyle::new(css::RED, Stroke::new(1.0), None, None, 1.0);
        assert!(ok.is_ok());

        let err = MarkerStyle::new(css::RED, Stroke::new(1.0), None, None, 1.5);
        assert_eq!(err, Err(MarkerError::AlphaOutOfRange(1.5)));

        let err = MarkerStyle::default().with_alpha(-0.1);
        assert_eq!(err, Err(MarkerError::AlphaOutOfRange(-0.1)));
        assert!(MarkerStyle::default().with_alpha(f32::NAN).is_err());
    }

    #[test]
    fn defaults_match_documented_values() {
        let style = MarkerStyle::default();
        assert_eq!(style.alpha(), 0.8);
        assert_eq!(style.stroke().width, 0.5);
        assert!(style.outline_paint().is_some());
        assert_eq!(style.label(), None);
        assert_eq!(style.label_font().size, 9.0);
        assert_eq!(style.label_anchor(), RectangleAnchor::TopLeft);
        assert_eq!(style.label_text_anchor(), TextAnchor::Center);
        assert_eq!(style.label_offset(), RectangleInsets::uniform(3.0));
    }

    #[test]
    fn builders_replace_fields() {
        let style = MarkerStyle::default()
            .with_label(Some("peak".into()))
            .with_outline_paint(None)
            .with_label_offset_type(LengthAdjustment::Expand);
        assert_eq!(style.label(), Some("peak"));
        assert_eq!(style.outline_paint(), None);
        assert_eq!(style.label_offset_type(), LengthAdjustment::Expand);
        assert_ne!(style, MarkerStyle::default());
    }
}
