// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG surface for `vizir_markers_demo`.

use kurbo::{Line, Point, Rect, Stroke};
use peniko::Brush;
use peniko::color::Srgb;
use peniko::color::palette::css;
use vizir_markers::{
    Composite, HeuristicTextMeasurer, LabelFont, RenderSurface, TextAnchor, TextMeasurer,
    aligned_text_origin,
};

/// A [`RenderSurface`] that appends SVG elements to a string.
///
/// Gradients are approximated by their first color stop.
#[derive(Debug)]
pub(crate) struct SvgSurface<M: TextMeasurer = HeuristicTextMeasurer> {
    composite: Composite,
    paint: Brush,
    stroke: Stroke,
    font: LabelFont,
    measurer: M,
    body: String,
}

impl SvgSurface {
    pub(crate) fn new() -> Self {
        Self::with_measurer(HeuristicTextMeasurer)
    }
}

impl<M: TextMeasurer> SvgSurface<M> {
    pub(crate) fn with_measurer(measurer: M) -> Self {
        Self {
            composite: Composite::SRC_OVER,
            paint: Brush::Solid(css::BLACK),
            stroke: Stroke::new(1.0),
            font: LabelFont::default(),
            measurer,
            body: String::new(),
        }
    }

    pub(crate) fn to_svg_string(&self, view_box: Rect) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn write_paint_attr(&mut self, name: &str) {
        let (value, opacity) = svg_paint(&self.paint);
        let opacity = opacity * f64::from(self.composite.alpha);
        self.body.push_str(&format!(r#" {name}="{value}""#));
        if opacity < 1.0 {
            self.body.push_str(&format!(r#" {name}-opacity="{opacity}""#));
        }
    }
}

impl<M: TextMeasurer> RenderSurface for SvgSurface<M> {
    fn composite(&self) -> Composite {
        self.composite
    }

    fn set_composite(&mut self, composite: Composite) {
        self.composite = composite;
    }

    fn set_paint(&mut self, paint: &Brush) {
        self.paint = paint.clone();
    }

    fn set_stroke(&mut self, stroke: &Stroke) {
        self.stroke = stroke.clone();
    }

    fn set_font(&mut self, font: &LabelFont) {
        self.font = font.clone();
    }

    fn fill_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        ));
        self.write_paint_attr("fill");
        self.body.push_str("/>\n");
    }

    fn draw_line(&mut self, line: Line) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y,
        ));
        self.write_paint_attr("stroke");
        self.body
            .push_str(&format!(r#" stroke-width="{}"/>"#, self.stroke.width));
        self.body.push('\n');
    }

    fn draw_aligned_text(&mut self, text: &str, point: Point, anchor: TextAnchor) {
        let origin = aligned_text_origin(text, point, anchor, &self.font, &self.measurer);
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" font-weight="{}""#,
            origin.x,
            origin.y,
            self.font.size,
            self.font.family.as_css_family(),
            if self.font.bold { "bold" } else { "normal" },
        ));
        self.write_paint_attr("fill");
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

fn svg_paint(brush: &Brush) -> (String, f64) {
    let color = match brush {
        Brush::Solid(color) => Some(*color),
        Brush::Gradient(gradient) => gradient
            .stops
            .0
            .first()
            .map(|stop| stop.color.to_alpha_color::<Srgb>()),
        _ => None,
    };
    match color {
        Some(color) => {
            let rgba = color.to_rgba8();
            (
                format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b),
                f64::from(rgba.a) / 255.0,
            )
        }
        None => ("none".to_string(), 1.0),
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
