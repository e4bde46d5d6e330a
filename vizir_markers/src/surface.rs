// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immediate-mode rendering surfaces.
//!
//! A [`RenderSurface`] is shared by every marker and series drawn in a pass, so its state
//! (paint, stroke, font, composite) is whatever the last caller left behind. Markers set the
//! state they need before each call and restore the composite through [`CompositeGuard`].

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use kurbo::{Line, Point, Rect, Stroke};
use peniko::{Brush, Compose};

use crate::anchor::TextAnchor;
use crate::text::LabelFont;

/// A compositing mode plus a constant alpha applied to everything drawn under it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composite {
    /// The Porter-Duff operator.
    pub compose: Compose,
    /// Constant alpha in `[0, 1]`.
    pub alpha: f32,
}

impl Composite {
    /// Opaque source-over.
    pub const SRC_OVER: Self = Self {
        compose: Compose::SrcOver,
        alpha: 1.0,
    };

    /// Source-over at the given `alpha`.
    pub fn src_over(alpha: f32) -> Self {
        Self {
            compose: Compose::SrcOver,
            alpha,
        }
    }
}

impl Default for Composite {
    fn default() -> Self {
        Self::SRC_OVER
    }
}

/// A stateful 2D drawing target.
pub trait RenderSurface {
    /// Returns the current composite.
    fn composite(&self) -> Composite;
    /// Replaces the current composite.
    fn set_composite(&mut self, composite: Composite);
    /// Sets the paint used by subsequent fills, lines and text.
    fn set_paint(&mut self, paint: &Brush);
    /// Sets the stroke used by subsequent lines.
    fn set_stroke(&mut self, stroke: &Stroke);
    /// Sets the font used by subsequent text.
    fn set_font(&mut self, font: &LabelFont);
    /// Fills `rect` with the current paint.
    fn fill_rect(&mut self, rect: Rect);
    /// Strokes `line` with the current paint and stroke.
    fn draw_line(&mut self, line: Line);
    /// Draws a single line of text so that `anchor` on the text lands on `point`.
    fn draw_aligned_text(&mut self, text: &str, point: Point, anchor: TextAnchor);
}

/// Installs a composite on a surface and restores the previous one on drop.
pub struct CompositeGuard<'a, S: RenderSurface + ?Sized> {
    surface: &'a mut S,
    saved: Composite,
}

impl<'a, S: RenderSurface + ?Sized> CompositeGuard<'a, S> {
    /// Saves the surface's composite and installs `composite`.
    pub fn new(surface: &'a mut S, composite: Composite) -> Self {
        let saved = surface.composite();
        surface.set_composite(composite);
        Self { surface, saved }
    }
}

impl<S: RenderSurface + ?Sized> Deref for CompositeGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: RenderSurface + ?Sized> DerefMut for CompositeGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: RenderSurface + ?Sized> Drop for CompositeGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_composite(self.saved);
    }
}

impl<S: RenderSurface + ?Sized> fmt::Debug for CompositeGuard<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeGuard")
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// [`RenderSurface::set_composite`].
    SetComposite(Composite),
    /// [`RenderSurface::set_paint`].
    SetPaint(Brush),
    /// [`RenderSurface::set_stroke`].
    SetStroke(Stroke),
    /// [`RenderSurface::set_font`].
    SetFont(LabelFont),
    /// [`RenderSurface::fill_rect`].
    FillRect(Rect),
    /// [`RenderSurface::draw_line`].
    DrawLine(Line),
    /// [`RenderSurface::draw_aligned_text`].
    DrawText {
        /// The text.
        text: String,
        /// The anchor location.
        point: Point,
        /// The anchor on the text.
        anchor: TextAnchor,
    },
}

impl DrawCommand {
    /// Returns `true` for commands that put pixels on the surface.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            Self::FillRect(_) | Self::DrawLine(_) | Self::DrawText { .. }
        )
    }
}

/// A surface that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    composite: Composite,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording with an opaque source-over composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the composite reported before anything is drawn.
    pub fn with_composite(mut self, composite: Composite) -> Self {
        self.composite = composite;
        self
    }

    /// All recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recording empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Number of commands that put pixels on the surface.
    pub fn drawing_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_drawing()).count()
    }

    /// Rectangles passed to [`RenderSurface::fill_rect`].
    pub fn fills(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRect(r) => Some(*r),
            _ => None,
        })
    }

    /// Lines passed to [`RenderSurface::draw_line`].
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::DrawLine(l) => Some(*l),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn composite(&self) -> Composite {
        self.composite
    }

    fn set_composite(&mut self, composite: Composite) {
        self.composite = composite;
        self.commands.push(DrawCommand::SetComposite(composite));
    }

    fn set_paint(&mut self, paint: &Brush) {
        self.commands.push(DrawCommand::SetPaint(paint.clone()));
    }

    fn set_stroke(&mut self, stroke: &Stroke) {
        self.commands.push(DrawCommand::SetStroke(stroke.clone()));
    }

    fn set_font(&mut self, font: &LabelFont) {
        self.commands.push(DrawCommand::SetFont(font.clone()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn draw_line(&mut self, line: Line) {
        self.commands.push(DrawCommand::DrawLine(line));
    }

    fn draw_aligned_text(&mut self, text: &str, point: Point, anchor: TextAnchor) {
        self.commands.push(DrawCommand::DrawText {
            text: text.into(),
            point,
            anchor,
        });
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn guard_restores_previous_composite() {
        let before = Composite::src_over(0.25);
        let mut surface = RecordingSurface::new().with_composite(before);
        {
            let mut guard = CompositeGuard::new(&mut surface, Composite::src_over(0.8));
            assert_eq!(guard.composite().alpha, 0.8);
            guard.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        }
        assert_eq!(surface.composite(), before);
        assert_eq!(
            surface.commands().last(),
            Some(&DrawCommand::SetComposite(before))
        );
    }

    #[test]
    fn guard_works_through_trait_objects() {
        let mut surface = RecordingSurface::new();
        let dyn_surface: &mut dyn RenderSurface = &mut surface;
        {
            let mut guard = CompositeGuard::new(dyn_surface, Composite::src_over(0.5));
            guard.set_paint(&Brush::Solid(css::RED));
        }
        assert_eq!(surface.composite(), Composite::SRC_OVER);
        assert_eq!(surface.drawing_count(), 0);
    }

    #[test]
    fn drawing_count_ignores_state_changes() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke(&Stroke::new(2.0));
        surface.draw_line(Line::new((0.0, 0.0), (10.0, 0.0)));
        surface.draw_aligned_text("x", Point::ORIGIN, TextAnchor::Center);
        assert_eq!(surface.drawing_count(), 2);
        assert_eq!(surface.lines().count(), 1);
        assert_eq!(surface.take_commands().len(), 3);
        assert!(surface.commands().is_empty());
    }
}
