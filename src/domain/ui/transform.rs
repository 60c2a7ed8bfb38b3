// SPDX-License-Identifier: MPL-2.0
//! Viewport transform state.
//!
//! A [`ViewportTransformState`] is a plain value owned by the viewer session.
//! Every operation consumes the current state and returns its replacement;
//! the renderer rebuilds its draw transform from the result.

use crate::config::{DEFAULT_SCALE, WHEEL_ZOOM_FACTOR, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use serde::Serialize;

/// Scale, rotation and flip flags of the displayed image.
///
/// `scale` is always strictly positive and `rotation` is always in
/// `[0, 360)`. Rotation and flips are carried for the renderer but no
/// operation changes them yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportTransformState {
    scale: f64,
    rotation: f64,
    flip_horizontal: bool,
    flip_vertical: bool,
}

impl Default for ViewportTransformState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            rotation: 0.0,
            flip_horizontal: false,
            flip_vertical: false,
        }
    }
}

fn normalize_rotation(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

fn sanitize_scale(scale: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        DEFAULT_SCALE
    }
}

impl ViewportTransformState {
    /// Builds a state, normalizing rotation into `[0, 360)` and replacing a
    /// non-positive or non-finite scale with `1.0`.
    #[must_use]
    pub fn new(scale: f64, rotation: f64, flip_horizontal: bool, flip_vertical: bool) -> Self {
        Self {
            scale: sanitize_scale(scale),
            rotation: normalize_rotation(rotation),
            flip_horizontal,
            flip_vertical,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotation in degrees, in `[0, 360)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn flip_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    #[must_use]
    pub fn flip_vertical(&self) -> bool {
        self.flip_vertical
    }

    /// Zoom as an integer percentage, truncated (0.475 → 47).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.scale * 100.0) as i64
    }

    /// Multiplies the scale by 1.25.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        self.scaled_by(ZOOM_IN_FACTOR)
    }

    /// Multiplies the scale by 0.8.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        self.scaled_by(ZOOM_OUT_FACTOR)
    }

    /// Mouse-wheel zoom: ×1.15 for a positive delta, ÷1.15 for a negative
    /// one, unchanged for zero.
    #[must_use]
    pub fn wheel(self, delta_y: f64) -> Self {
        if delta_y > 0.0 {
            self.scaled_by(WHEEL_ZOOM_FACTOR)
        } else if delta_y < 0.0 {
            self.scaled_by(1.0 / WHEEL_ZOOM_FACTOR)
        } else {
            self
        }
    }

    /// Restores the original size. Rotation and flips are kept.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            ..self
        }
    }

    /// Scales so the whole image fits the viewport, then shrinks by `margin`.
    ///
    /// Any zero dimension, or a margin that would make the scale
    /// non-positive, falls back to a scale of `1.0`.
    #[must_use]
    pub fn fit_to_window(
        self,
        image_width: u32,
        image_height: u32,
        viewport_width: u32,
        viewport_height: u32,
        margin: f64,
    ) -> Self {
        Self {
            scale: fit_scale(image_width, image_height, viewport_width, viewport_height, margin),
            ..self
        }
    }

    fn scaled_by(self, factor: f64) -> Self {
        let scale = self.scale * factor;
        // Repeated zoom-out underflows to 0 only after ~3000 steps; keep the last valid scale
        if scale.is_finite() && scale > 0.0 {
            Self { scale, ..self }
        } else {
            self
        }
    }
}

/// Fit-to-window scale for the given image and viewport.
#[must_use]
pub fn fit_scale(
    image_width: u32,
    image_height: u32,
    viewport_width: u32,
    viewport_height: u32,
    margin: f64,
) -> f64 {
    if image_width == 0 || image_height == 0 || viewport_width == 0 || viewport_height == 0 {
        return DEFAULT_SCALE;
    }
    let scale_x = f64::from(viewport_width) / f64::from(image_width);
    let scale_y = f64::from(viewport_height) / f64::from(image_height);
    sanitize_scale(scale_x.min(scale_y) * margin)
}
