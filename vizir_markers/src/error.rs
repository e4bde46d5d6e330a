// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker configuration errors.

/// Errors returned when configuring a marker.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MarkerError {
    /// The alpha value was outside `[0, 1]` (or NaN).
    #[error("marker alpha must be in [0, 1], got {0}")]
    AlphaOutOfRange(f32),
}

pub(crate) fn check_alpha(alpha: f32) -> Result<f32, MarkerError> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(alpha)
    } else {
        Err(MarkerError::AlphaOutOfRange(alpha))
    }
}
