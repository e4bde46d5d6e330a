// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval marker demos for `vizir_markers`.
//!
//! Writes `vizir_markers_demo.html` with one SVG per scenario. Set `RUST_LOG=trace` to see
//! per-marker draw decisions.

mod svg;

use std::sync::Arc;

use kurbo::{Insets, Rect, Stroke};
use peniko::color::palette::css;
use peniko::{Brush, Gradient};
use vizir_markers::{
    FontFamily, GradientTransformType, IntervalMarker, LabelFont, MarkerPlot, MarkerStyle, NumberAxis,
    PlotOrientation, Range, RectangleAnchor, RectangleInsets, RenderSurface,
    StandardGradientTransformer, TextAnchor,
};

struct Section {
    title: &'static str,
    description: &'static str,
    svg: String,
}

const VIEW: Rect = Rect::new(0.0, 0.0, 480.0, 320.0);
const DATA_AREA: Rect = Rect::new(40.0, 20.0, 460.0, 290.0);

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let sections = vec![
        range_bands_demo(),
        domain_bands_demo(),
        horizontal_plot_demo(),
        gradient_demo(),
    ];

    let html = render_report("VizIR interval markers demo", &sections);
    std::fs::write("vizir_markers_demo.html", html).expect("write vizir_markers_demo.html");
    log::info!("wrote {} sections", sections.len());
    println!("wrote vizir_markers_demo.html");
}

fn render_plot(plot: &MarkerPlot) -> String {
    let mut surface = svg::SvgSurface::new();
    surface.set_paint(&Brush::Solid(css::WHITE_SMOKE));
    surface.fill_rect(DATA_AREA);
    plot.draw_markers(&mut surface, DATA_AREA);
    surface.to_svg_string(VIEW)
}

fn labeled(mut marker: IntervalMarker, label: &str) -> IntervalMarker {
    marker.set_label(Some(label.to_string()));
    marker.set_label_font(LabelFont::new(11.0).with_bold(true));
    marker
}

fn range_bands_demo() -> Section {
    let mut plot = MarkerPlot::new(
        NumberAxis::new(Range::new(0.0, 10.0)),
        NumberAxis::new(Range::new(0.0, 100.0)),
    );
    plot.add_range_marker(labeled(IntervalMarker::new(20.0, 50.0), "target"));

    // Runs off the top of the axis: clipped, and only the lower outline is drawn.
    let mut overflow = labeled(
        IntervalMarker::with_paint(80.0, 140.0, css::CORNFLOWER_BLUE),
        "alarm",
    );
    overflow.set_outline_paint(Some(Brush::Solid(css::NAVY)));
    overflow.set_outline_stroke(Some(Stroke::new(1.5)));
    overflow.set_label_anchor(RectangleAnchor::BottomRight);
    overflow.set_label_text_anchor(TextAnchor::BottomRight);
    plot.add_range_marker(overflow);

    // Entirely outside the axis range; draws nothing.
    plot.add_range_marker(IntervalMarker::new(150.0, 200.0));

    Section {
        title: "Range bands",
        description: "Horizontal bands on the range axis of a vertical plot.",
        svg: render_plot(&plot),
    }
}

fn domain_bands_demo() -> Section {
    let mut plot = MarkerPlot::new(
        NumberAxis::new(Range::new(0.0, 24.0)),
        NumberAxis::new(Range::new(0.0, 1.0)),
    );
    let night = MarkerStyle::default()
        .with_paint(css::DARK_SLATE_GRAY)
        .with_outline_paint(None)
        .with_alpha(0.35)
        .expect("valid alpha");
    // Bounds given end-first: the band is the same.
    plot.add_domain_marker(labeled(
        IntervalMarker::with_style(6.0, 0.0, night.clone()),
        "night",
    ));
    plot.add_domain_marker(labeled(
        IntervalMarker::with_style(20.0, 24.0, night),
        "night",
    ));

    let mut shift = labeled(IntervalMarker::new(9.0, 17.0), "shift");
    shift.set_label_offset(RectangleInsets::absolute(Insets::new(0.0, 8.0, 0.0, 8.0)));
    shift.set_label_font(LabelFont::new(12.0).with_family(FontFamily::Serif));
    shift.set_label_anchor(RectangleAnchor::Top);
    shift.set_label_text_anchor(TextAnchor::TopCenter);
    plot.add_domain_marker(shift);

    Section {
        title: "Domain bands",
        description: "Vertical bands on the domain axis; the first has start > end.",
        svg: render_plot(&plot),
    }
}

fn horizontal_plot_demo() -> Section {
    let mut plot = MarkerPlot::new(
        NumberAxis::new(Range::new(0.0, 5.0)),
        NumberAxis::new(Range::new(0.0, 100.0)).with_inverted(true),
    )
    .with_orientation(PlotOrientation::Horizontal);
    plot.add_domain_marker(labeled(
        IntervalMarker::with_paint(1.0, 2.0, css::GOLDENROD),
        "domain",
    ));
    plot.add_range_marker(labeled(
        IntervalMarker::with_paint(10.0, 30.0, css::SEA_GREEN),
        "range (inverted)",
    ));

    Section {
        title: "Horizontal plot",
        description: "Domain markers become rows, range markers columns; the range axis is inverted.",
        svg: render_plot(&plot),
    }
}

fn gradient_demo() -> Section {
    let mut plot = MarkerPlot::new(
        NumberAxis::new(Range::new(0.0, 10.0)),
        NumberAxis::new(Range::new(-1.0, 1.0)),
    );
    let gradient =
        Gradient::new_linear((0.0, 0.0), (1.0, 0.0)).with_stops([css::TOMATO, css::GOLD]);
    let mut marker = labeled(IntervalMarker::with_paint(-0.5, 0.5, gradient), "gradient");
    marker.set_gradient_transformer(Some(Arc::new(StandardGradientTransformer::new(
        GradientTransformType::CenterVertical,
    ))));
    plot.add_range_marker(marker);

    Section {
        title: "Gradient fill",
        description: "A gradient paint refitted to the band by a centered transformer.",
        svg: render_plot(&plot),
    }
}

fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{title}</title>"));
    out.push_str("</head><body style=\"font-family: sans-serif\">\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str(&format!(
            "<section><h2>{}</h2><p>{}</p>\n{}</section>\n",
            section.title, section.description, section.svg
        ));
    }
    out.push_str("</body></html>\n");
    out
}
