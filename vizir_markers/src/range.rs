// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed value ranges.

/// A closed interval `[lower, upper]` of axis values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    lower: f64,
    upper: f64,
}

impl Range {
    /// Creates a range from two bounds given in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    /// Returns the lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `upper - lower`.
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns `true` if `value` lies within the range (bounds included).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Returns `true` if the interval spanned by `b0` and `b1` overlaps this range.
    ///
    /// The bounds may be given in either order. An interval that only touches
    /// `lower` or `upper` from outside does not intersect, and neither does one with a NaN
    /// bound.
    pub fn intersects(&self, b0: f64, b1: f64) -> bool {
        if b0.is_nan() || b1.is_nan() {
            return false;
        }
        let (lo, hi) = (b0.min(b1), b0.max(b1));
        if lo <= self.lower {
            hi > self.lower
        } else {
            lo < self.upper
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn bounds_are_normalized() {
        let r = Range::new(10.0, -5.0);
        assert_eq!(r.lower(), -5.0);
        assert_eq!(r.upper(), 10.0);
        assert_eq!(r.length(), 15.0);
    }

    #[test]
    fn intersects_accepts_either_order() {
        let r = Range::new(0.0, 100.0);
        assert!(r.intersects(20.0, 50.0));
        assert!(r.intersects(50.0, 20.0));
        assert!(r.intersects(-10.0, 10.0));
        assert!(r.intersects(90.0, 120.0));
        assert!(r.intersects(120.0, 90.0));
        assert!(r.intersects(-50.0, 150.0));
        assert!(!r.intersects(150.0, 200.0));
        assert!(!r.intersects(200.0, 150.0));
        assert!(!r.intersects(-20.0, -10.0));
    }

    #[test]
    fn touching_end_points() {
        let r = Range::new(0.0, 100.0);
        assert!(!r.intersects(-10.0, 0.0));
        assert!(!r.intersects(100.0, 110.0));
        assert!(r.contains(0.0));
        assert!(r.contains(100.0));
        assert!(!r.contains(100.5));
    }

    #[test]
    fn nan_bounds_never_intersect() {
        let r = Range::new(0.0, 100.0);
        assert!(!r.intersects(f64::NAN, 50.0));
        assert!(!r.intersects(50.0, f64::NAN));
        assert!(!r.intersects(f64::NAN, f64::NAN));
    }
}
