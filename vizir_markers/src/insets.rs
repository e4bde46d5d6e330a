// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label offsets expressed as rectangle insets.

use kurbo::{Insets, Rect};

/// How inset amounts are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnitType {
    /// Amounts are in device units.
    #[default]
    Absolute,
    /// Amounts are fractions of the rectangle's width (left/right) or height (top/bottom).
    Relative,
}

/// How one dimension of a rectangle is adjusted by [`RectangleInsets`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthAdjustment {
    /// Leave the dimension unchanged.
    NoChange,
    /// Grow outward by the outsets on both sides.
    Expand,
    /// Shrink inward by the insets on both sides.
    #[default]
    Contract,
}

/// Insets (`x0` = left, `y0` = top, `x1` = right, `y1` = bottom) with a unit type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectangleInsets {
    /// The per-side amounts.
    pub insets: Insets,
    /// How the amounts are interpreted.
    pub unit: UnitType,
}

impl RectangleInsets {
    /// Creates insets with an explicit unit type.
    pub fn new(unit: UnitType, insets: Insets) -> Self {
        Self { insets, unit }
    }

    /// Creates absolute insets.
    pub fn absolute(insets: impl Into<Insets>) -> Self {
        Self::new(UnitType::Absolute, insets.into())
    }

    /// Creates relative insets.
    pub fn relative(insets: impl Into<Insets>) -> Self {
        Self::new(UnitType::Relative, insets.into())
    }

    /// Creates absolute insets with the same amount on every side.
    pub fn uniform(amount: f64) -> Self {
        Self::absolute(Insets::uniform(amount))
    }

    fn inset(&self, amount: f64, length: f64) -> f64 {
        match self.unit {
            UnitType::Absolute => amount,
            UnitType::Relative => amount * length,
        }
    }

    // For relative units the outset is measured against the expanded length, so that
    // contracting the expanded rectangle gives back the original one.
    fn outset(&self, amount: f64, near: f64, far: f64, length: f64) -> f64 {
        match self.unit {
            UnitType::Absolute => amount,
            UnitType::Relative => length / (1.0 - near - far) * amount,
        }
    }

    /// Returns `base` adjusted independently along x (`width`) and y (`height`).
    pub fn create_adjusted_rectangle(
        &self,
        base: Rect,
        width: LengthAdjustment,
        height: LengthAdjustment,
    ) -> Rect {
        let Insets { x0, y0, x1, y1 } = self.insets;
        let (x, w) = self.adjust(base.x0, base.width(), x0, x1, width);
        let (y, h) = self.adjust(base.y0, base.height(), y0, y1, height);
        Rect::new(x, y, x + w, y + h)
    }

    /// Returns `base` contracted on all four sides.
    pub fn create_inset_rectangle(&self, base: Rect) -> Rect {
        self.create_adjusted_rectangle(base, LengthAdjustment::Contract, LengthAdjustment::Contract)
    }

    /// Returns `base` expanded on all four sides.
    pub fn create_outset_rectangle(&self, base: Rect) -> Rect {
        self.create_adjusted_rectangle(base, LengthAdjustment::Expand, LengthAdjustment::Expand)
    }

    fn adjust(
        &self,
        start: f64,
        length: f64,
        near: f64,
        far: f64,
        adjustment: LengthAdjustment,
    ) -> (f64, f64) {
        match adjustment {
            LengthAdjustment::NoChange => (start, length),
            LengthAdjustment::Contract => {
                let n = self.inset(near, length);
                let f = self.inset(far, length);
                (start + n, length - n - f)
            }
            LengthAdjustment::Expand => {
                let n = self.outset(near, near, far, length);
                let f = self.outset(far, near, far, length);
                (start - n, length + n + f)
            }
        }
    }
}
