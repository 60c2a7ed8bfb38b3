// SPDX-License-Identifier: MPL-2.0
//! Distance and area measurement on the image plane.
//!
//! Points are in image pixel coordinates. Results are converted to ground
//! units with the pixel scale (for example meters per pixel from the flight
//! altitude), so distances scale linearly and areas quadratically.

use log::debug;
use serde::Serialize;

/// What the clicked points describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MeasurementMode {
    /// Clicks are not recorded.
    #[default]
    None,
    /// Open polyline; its length is the measured distance.
    Distance,
    /// Closed polygon; its enclosed surface is the measured area.
    Area,
}

/// A point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Points placed by the user in the current mode, plus the pixel scale.
///
/// `pixel_scale` is always finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    mode: MeasurementMode,
    points: Vec<Point>,
    pixel_scale: f64,
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            mode: MeasurementMode::None,
            points: Vec::new(),
            pixel_scale: 1.0,
        }
    }
}

impl Measurement {
    #[must_use]
    pub fn mode(&self) -> MeasurementMode {
        self.mode
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Ground units per image pixel.
    #[must_use]
    pub fn pixel_scale(&self) -> f64 {
        self.pixel_scale
    }

    /// Switches mode. Points from the previous mode are discarded.
    #[must_use]
    pub fn with_mode(self, mode: MeasurementMode) -> Self {
        if mode == self.mode {
            return self;
        }
        Self {
            mode,
            points: Vec::new(),
            ..self
        }
    }

    /// Appends `point`. Ignored while no mode is active.
    #[must_use]
    pub fn add_point(mut self, point: Point) -> Self {
        if self.mode == MeasurementMode::None {
            debug!("measurement point ignored: no mode selected");
            return self;
        }
        self.points.push(point);
        self
    }

    #[must_use]
    pub fn remove_last_point(mut self) -> Self {
        self.points.pop();
        self
    }

    /// Drops every point and keeps the mode.
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.points.clear();
        self
    }

    /// Sets the ground units per pixel. A non-positive or non-finite scale is
    /// rejected and the current one kept.
    #[must_use]
    pub fn with_pixel_scale(self, pixel_scale: f64) -> Self {
        if !(pixel_scale.is_finite() && pixel_scale > 0.0) {
            debug!("pixel scale {pixel_scale} rejected");
            return self;
        }
        Self {
            pixel_scale,
            ..self
        }
    }

    /// Length of the polyline through the points, in ground units.
    /// `0.0` with fewer than two points.
    #[must_use]
    pub fn distance(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let pixels: f64 = self
            .points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum();
        pixels * self.pixel_scale
    }

    /// Area of the polygon closed over the points (shoelace formula), in
    /// squared ground units. `0.0` with fewer than three points.
    #[must_use]
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice_signed: f64 = (0..n)
            .map(|i| {
                let p = self.points[i];
                let q = self.points[(i + 1) % n];
                p.x * q.y - q.x * p.y
            })
            .sum();
        (twice_signed / 2.0).abs() * self.pixel_scale * self.pixel_scale
    }
}
