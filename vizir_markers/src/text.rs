// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label fonts and text measurement hooks.
//!
//! Markers never shape text themselves. They hand a [`LabelFont`], an anchor point and a
//! [`TextAnchor`] to the surface. Surfaces that draw from a baseline origin (SVG, canvas,
//! glyph runs) can plug in a [`TextMeasurer`] and call [`aligned_text_origin`].

use alloc::sync::Arc;

use kurbo::Point;

use crate::anchor::TextAnchor;

/// The font a marker label is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelFont {
    /// Em size in device units.
    pub size: f64,
    /// Family requested from the surface.
    pub family: FontFamily,
    /// Draw the label in a bold face.
    pub bold: bool,
}

impl LabelFont {
    /// A regular sans-serif label font of `size`.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            family: FontFamily::SansSerif,
            bold: false,
        }
    }

    /// Requests `family` instead of sans-serif.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Switches the bold face on or off.
    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Default for LabelFont {
    /// 9px regular sans-serif.
    fn default() -> Self {
        Self::new(9.0)
    }
}

/// Which family a surface should pick for a label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Generic serif.
    Serif,
    /// Generic sans-serif.
    SansSerif,
    /// Generic monospace.
    Monospace,
    /// A family looked up by name.
    Named(Arc<str>),
}

impl FontFamily {
    /// The CSS `font-family` value.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Extents of one measured label, relative to its baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Horizontal extent of the label.
    pub advance_width: f64,
    /// Height above the baseline.
    pub ascent: f64,
    /// Depth below the baseline.
    pub descent: f64,
    /// Extra space below the descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Total height of the label box.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Measures label text for surfaces that position text from its baseline.
pub trait TextMeasurer {
    /// Metrics of `text` set in `font` on a single line.
    fn measure(&self, text: &str, font: &LabelFont) -> TextMetrics;
}

/// Estimates metrics from the font size alone.
///
/// Each char advances `0.6 * size` (`0.66 * size` when bold); ascent is `0.8 * size` and
/// descent `0.2 * size`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &LabelFont) -> TextMetrics {
        let per_char = if font.bold { 0.66 } else { 0.6 };
        TextMetrics {
            advance_width: per_char * font.size * text.chars().count() as f64,
            ascent: 0.8 * font.size,
            descent: 0.2 * font.size,
            leading: 0.0,
        }
    }
}

/// Returns the baseline-left origin that places `text` so that `anchor` lands on `point`.
pub fn aligned_text_origin(
    text: &str,
    point: Point,
    anchor: TextAnchor,
    font: &LabelFont,
    measurer: &dyn TextMeasurer,
) -> Point {
    let metrics = measurer.measure(text, font);
    point + anchor.baseline_offset(&metrics)
}
