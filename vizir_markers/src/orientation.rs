// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot orientation and the axis role a marker is drawn against.

/// Which way a plot's domain axis runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlotOrientation {
    /// The domain axis is vertical and the range axis horizontal.
    Horizontal,
    /// The domain axis is horizontal and the range axis vertical.
    #[default]
    Vertical,
}

/// The plot a marker is drawn into.
pub trait Plot {
    /// The plot's current orientation.
    fn orientation(&self) -> PlotOrientation;
}

impl Plot for PlotOrientation {
    fn orientation(&self) -> PlotOrientation {
        *self
    }
}

/// How a marker's band is laid out relative to the data area.
///
/// Each marker kind has a preferred plot orientation for a given axis. When the plot matches
/// it the axis is [`AxisRole::Primary`]: bounds map to y coordinates and the band spans the
/// full width. Otherwise the axis is [`AxisRole::Secondary`]: bounds map to x coordinates
/// and the band spans the full height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisRole {
    /// Horizontal band; outlines are horizontal rules.
    Primary,
    /// Vertical band; outlines are vertical rules.
    Secondary,
}

impl AxisRole {
    /// Resolves the role from the plot's `actual` orientation and the marker's `preferred` one.
    pub fn resolve(actual: PlotOrientation, preferred: PlotOrientation) -> Self {
        if actual == preferred {
            Self::Primary
        } else {
            Self::Secondary
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn role_is_primary_only_when_orientations_match() {
        use PlotOrientation::{Horizontal, Vertical};
        assert_eq!(AxisRole::resolve(Vertical, Vertical), AxisRole::Primary);
        assert_eq!(AxisRole::resolve(Horizontal, Horizontal), AxisRole::Primary);
        assert_eq!(AxisRole::resolve(Vertical, Horizontal), AxisRole::Secondary);
        assert_eq!(AxisRole::resolve(Horizontal, Vertical), AxisRole::Secondary);
    }
}
